//! # fleetdesk — presentation layer
//!
//! The interactive frontend over the rental desk. Split into a library so
//! the integration tests can drive the shell exactly as `main` does.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Collect raw operator input one line at a time
//! - Parse numeric identifier fields, rejecting non-numeric input *before*
//!   any desk operation is attempted
//! - Invoke exactly one desk operation per command
//! - Render outcomes and record listings as report text
//! - Confirm process termination
//!
//! No business logic lives here; the shell renders whatever the desk
//! returns.

pub mod config;
pub mod shell;

//! # fleetdesk — rental desk frontend
//!
//! Composition root that wires the domain store, the rental desk, and the
//! interactive shell together.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize logging
//! - Construct the rental desk and optionally seed the demo fleet
//! - Hand stdin/stdout to the shell and run it to completion
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use std::io;

use anyhow::Context as _;
use fleetdesk::config::Config;
use fleetdesk::shell;
use fleetdesk_app::services::rental_desk::RentalDesk;
use fleetdesk_domain::id::{CustomerId, VehicleId};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    // Logs go to stderr so they never interleave with shell reports.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).context("invalid logging filter")?,
        )
        .with_writer(io::stderr)
        .init();

    let desk = RentalDesk::new();
    if config.sample_data.enabled {
        seed_sample_data(&desk);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&desk, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Seed the demo fleet and roster the operator can experiment with.
fn seed_sample_data(desk: &RentalDesk) {
    let vehicles = [
        (1, "Toyota", "Camry"),
        (2, "Honda", "Civic"),
        (3, "Tesla", "Model 3"),
        (4, "Honda", "Accord"),
        (5, "Toyota", "Corolla"),
    ];
    for (id, brand, model) in vehicles {
        if let Err(err) = desk.add_vehicle(VehicleId::new(id), brand, model) {
            tracing::warn!(id, %err, "skipping sample vehicle");
        }
    }

    let customers = [
        (1, "John Doe", "DL123456"),
        (2, "Jane Smith", "DL789012"),
        (3, "Mike Johnson", "DL345678"),
    ];
    for (id, name, license) in customers {
        if let Err(err) = desk.add_customer(CustomerId::new(id), name, license) {
            tracing::warn!(id, %err, "skipping sample customer");
        }
    }
}

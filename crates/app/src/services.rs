//! Use-case services exposed to frontends.

pub mod rental_desk;

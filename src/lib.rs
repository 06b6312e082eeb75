//! VidForge - metered video processing backend
//!
//! Users authenticate with a bearer credential, consume a rate-limited
//! processing action, and purchase plans that change their entitlement
//! tier through an asynchronous order settlement lifecycle.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

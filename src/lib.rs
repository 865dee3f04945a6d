//! Client side of the training-session dashboard: a REST client for the
//! sessions backend, role-scoped session views and the CLI that drives them.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;

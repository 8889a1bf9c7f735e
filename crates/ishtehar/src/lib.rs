pub mod config;
pub mod error;
pub mod manifesto;
pub mod telemetry;
pub mod wall;

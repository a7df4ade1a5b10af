pub mod config;
pub mod graphql;
pub mod serving;
pub mod store;
pub mod telemetry;

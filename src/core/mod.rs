pub mod types;
pub mod config;
pub mod error;
pub mod dataset;
pub mod session;
pub mod stats;

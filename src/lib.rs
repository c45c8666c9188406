mod api;
mod config;
mod credentials;
mod error;
mod report;
mod utils;

pub mod args;
pub mod commands;
pub mod model;

pub use api::Mode;
pub use config::SyncConfig;
pub use credentials::Credentials;
pub use error::Error;
pub use error::Result;
pub use report::Report;

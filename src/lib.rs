pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use adapters::token_store::{FileTokenStore, MemoryTokenStore};
pub use config::Settings;
pub use crate::core::{auth::AuthClient, auth::TokenManager, client::ApiClient};
pub use utils::error::{Result, Site24x7Error};

pub mod commands;

use crate::adapters::prompt::TerminalPrompter;
use crate::adapters::token_store::FileTokenStore;
use crate::config::cli::{Cli, Commands};
use crate::config::Settings;
use crate::core::client::ApiClient;
use crate::core::session;
use crate::domain::ports::TokenStore;
use crate::utils::error::{Result, Site24x7Error};
use crate::utils::validation::Validate;
use std::path::Path;

/// Runs one CLI invocation and returns what should go to stdout.
pub async fn run(cli: Cli) -> Result<String> {
    let config_path = cli.config.as_deref();

    let (result, store) = match cli.command {
        Commands::Config(args) => {
            // `config` must be able to replace a file that no longer validates
            let settings = Settings::load_for_rewrite(config_path)?;
            return commands::config::run(&settings, &args, &TerminalPrompter).await;
        }
        Commands::User(cmd) => {
            let (client, store) = connect(config_path).await?;
            (commands::user::run(cmd, &client).await, store)
        }
        Commands::UserGroup(cmd) => {
            let (client, store) = connect(config_path).await?;
            (commands::user_group::run(cmd, &client).await, store)
        }
        Commands::MonitorGroup(cmd) => {
            let (client, store) = connect(config_path).await?;
            (commands::monitor_group::run(cmd, &client).await, store)
        }
        Commands::Alert(cmd) => {
            let (client, store) = connect(config_path).await?;
            (commands::alert::run(cmd, &client).await, store)
        }
    };

    // The API rejected the cached token; drop it so the next run refreshes
    if let Err(Site24x7Error::AuthenticationError { .. }) = &result {
        if let Err(e) = store.clear().await {
            tracing::warn!("Unable to clear token cache: {}", e);
        }
    }

    result
}

async fn connect(config_path: Option<&Path>) -> Result<(ApiClient, FileTokenStore)> {
    let settings = Settings::load(config_path)?;
    settings.validate()?;

    let store = FileTokenStore::new(settings.token_cache_path());
    let client = session::open(&settings, store.clone()).await?;
    Ok((client, store))
}

use crate::adapters::token_store::FileTokenStore;
use crate::config::cli::ConfigArgs;
use crate::config::Settings;
use crate::core::auth::AuthClient;
use crate::domain::ports::{ConfigProvider, Prompter, TokenStore};
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};

pub const NO_CHANGES: &str = "No changes were made; exiting.";
pub const MISSING_CREDENTIALS: &str = "At least one empty value provided; nothing to do.\n\
Without providing both a client id and secret, this tool is useless.";
pub const NO_GRANT_TOKEN: &str = "No grant token provided; nothing to do";
pub const COMPLETE: &str = "Configuration complete!";

/// Asks for any value not passed as a flag. Blank flag values count as unset.
fn value_or_prompt(
    flag: &Option<String>,
    prompt: &str,
    ask: impl FnOnce(&str) -> Result<String>,
) -> Result<String> {
    match flag.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => ask(prompt),
    }
}

pub async fn run<P: Prompter>(settings: &Settings, args: &ConfigArgs, prompter: &P) -> Result<String> {
    if settings.file_exists() && !args.yes {
        let question = if args.refresh_token {
            "A config file already exists, do you want to overwrite its refresh_token value?"
        } else {
            "A config file already exists, do you want to overwrite it?"
        };
        if !prompter.confirm(question)? {
            return Ok(NO_CHANGES.to_string());
        }
    }

    let mut file = settings.file().clone();

    let (client_id, client_secret) = if args.refresh_token {
        let id = validate_required_field("auth.client_id", &settings.client_id())?.to_string();
        let secret =
            validate_required_field("auth.client_secret", &settings.client_secret())?.to_string();
        (id, secret)
    } else {
        let id = value_or_prompt(&args.client_id, "Site24x7 Client ID", |p| prompter.input(p))?;
        let secret = value_or_prompt(&args.client_secret, "Site24x7 Client Secret", |p| {
            prompter.secret(p)
        })?;

        if id.is_empty() || secret.is_empty() {
            return Ok(MISSING_CREDENTIALS.to_string());
        }
        (id, secret)
    };

    // Credentials may come from the environment; the refresh token is bound to them
    file.auth.client_id = Some(client_id.clone());
    file.auth.client_secret = Some(client_secret.clone());

    let grant_token = value_or_prompt(&args.grant_token, "Site24x7 Grant Token", |p| {
        prompter.input(p)
    })?;
    if grant_token.is_empty() {
        return Ok(NO_GRANT_TOKEN.to_string());
    }

    let auth = AuthClient::new(
        settings.auth_base_url(),
        client_id,
        client_secret,
        settings.request_timeout(),
    );
    let refresh_token = auth
        .exchange_grant_token(&grant_token)
        .await
        .inspect_err(|_| {
            tracing::warn!("Unable to exchange the grant token provided for a refresh token.")
        })?;

    file.auth.refresh_token = Some(refresh_token);
    file.validate()?;
    file.save_to_file(settings.path())?;

    // A cached access token may belong to the previous credentials
    FileTokenStore::new(settings.token_cache_path()).clear().await?;

    tracing::info!("Wrote {}", settings.path().display());
    Ok(COMPLETE.to_string())
}

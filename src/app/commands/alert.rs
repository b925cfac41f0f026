use crate::config::cli::{AlertCommand, MuteArgs};
use crate::core::alerts::{AlertService, MuteOptions};
use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use crate::utils::output::to_pretty_json;

pub async fn run<F: Fetcher + ?Sized>(command: AlertCommand, fetcher: &F) -> Result<String> {
    match command {
        AlertCommand::Mute(args) => {
            let muted = AlertService::new(fetcher).mute(&args.into()).await?;
            if let Some(until) = muted.muted_until() {
                tracing::info!("Alerts muted until {}", until.to_rfc3339());
            }
            to_pretty_json(&muted)
        }
    }
}

impl From<MuteArgs> for MuteOptions {
    fn from(args: MuteArgs) -> Self {
        Self {
            duration: args.duration,
            monitors: args.monitors,
            groups: args.groups,
            all: args.all,
            reason: args.reason,
            extend: args.extend,
            notify: args.notify,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::MockFetcher;

    #[tokio::test]
    async fn test_invalid_duration_rejected_locally() {
        let fetcher = MockFetcher::default();
        let args = MuteArgs {
            duration: 7,
            monitors: vec![],
            groups: vec![],
            reason: String::new(),
            all: true,
            extend: false,
            notify: true,
        };

        let err = run(AlertCommand::Mute(args), &fetcher).await.unwrap_err();

        assert!(err.to_string().contains("invalid duration (7)"));
        assert!(fetcher.requests().is_empty());
    }
}

use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;
use site24x7_cli::app::commands::alert;
use site24x7_cli::config::cli::{AlertCommand, MuteArgs};
use site24x7_cli::{ApiClient, Site24x7Error};
use std::time::Duration;

fn mute_args() -> MuteArgs {
    MuteArgs {
        duration: 60,
        monitors: vec!["113770000041271035".to_string()],
        groups: vec![],
        reason: "Deploying".to_string(),
        all: false,
        extend: false,
        notify: true,
    }
}

#[tokio::test]
async fn test_mute_monitors() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/mute_alerts")
            .header("Authorization", "Zoho-oauthtoken access")
            .json_body(json!({
                "mute_time": 60,
                "category": "M",
                "muted_resource_list": ["113770000041271035"],
                "resource_group_list": [],
                "reason": "Deploying",
                "extend_mute": false,
                "notify": true
            }));
        then.status(200).json_body(json!({
            "code": 0,
            "message": "success",
            "data": {
                "muted_resource_list": ["113770000041271035"],
                "category": "M",
                "resource_group_list": [],
                "mute_time_iso": "2021-03-03T19:30:00+0530",
                "reason": "Deploying"
            }
        }));
    });

    let client = ApiClient::new(server.url("/api"), "access", Duration::from_secs(5));
    let output = alert::run(AlertCommand::Mute(mute_args()), &client).await?;

    mock.assert();
    let muted: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(muted["mute_time_iso"], "2021-03-03T19:30:00+0530");
    Ok(())
}

#[tokio::test]
async fn test_conflicting_targets_never_reach_the_api() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.path_contains("mute_alerts");
        then.status(200);
    });

    let mut args = mute_args();
    args.groups = vec!["g1".to_string()];

    let client = ApiClient::new(server.url("/api"), "access", Duration::from_secs(5));
    let err = alert::run(AlertCommand::Mute(args), &client)
        .await
        .unwrap_err();

    assert!(matches!(err, Site24x7Error::ValidationError { .. }));
    mock.assert_hits(0);
    Ok(())
}

use crate::config::cli::{MonitorGroupCommand, MonitorGroupCreateArgs, MonitorGroupUpdateArgs};
use crate::core::monitor_groups::MonitorGroupService;
use crate::domain::model::{MonitorGroup, MonitorGroupRequest};
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, Site24x7Error};
use crate::utils::output::to_pretty_json;
use crate::utils::validation::validate_non_empty_string;

pub async fn run<F: Fetcher + ?Sized>(command: MonitorGroupCommand, fetcher: &F) -> Result<String> {
    let groups = MonitorGroupService::new(fetcher);

    match command {
        MonitorGroupCommand::List(args) => to_pretty_json(&groups.list(args.with_subgroups).await?),
        MonitorGroupCommand::Get(args) => to_pretty_json(&groups.get(&args.id).await?),
        MonitorGroupCommand::Create(args) => {
            let request = build_create_request(&args)?;
            to_pretty_json(&groups.create(&request).await?)
        }
        MonitorGroupCommand::Update(args) => {
            validate_update(&args)?;
            let existing = groups.get(&args.id).await?;
            let request = apply_update(&existing, &args);
            to_pretty_json(&groups.update(&existing.id, &request).await?)
        }
        MonitorGroupCommand::Delete(args) => {
            groups.delete(&args.id).await?;
            Ok("Monitor group successfully deleted!".to_string())
        }
    }
}

fn validate_health_threshold(value: i32) -> Result<()> {
    if value < 1 {
        return Err(Site24x7Error::validation(
            "health-threshold",
            format!("{} is not a positive number of monitors", value),
        ));
    }
    Ok(())
}

pub fn build_create_request(args: &MonitorGroupCreateArgs) -> Result<MonitorGroupRequest> {
    validate_non_empty_string("name", &args.name)?;
    validate_health_threshold(args.health_threshold)?;

    Ok(MonitorGroupRequest {
        display_name: args.name.trim().to_string(),
        description: args.description.clone().unwrap_or_default(),
        monitors: args.monitors.clone(),
        health_threshold_count: args.health_threshold,
        dependency_resource_ids: args.dependent_monitors.clone(),
        suppress_alert: args.suppress_alert,
    })
}

fn validate_update(args: &MonitorGroupUpdateArgs) -> Result<()> {
    if let Some(name) = &args.name {
        validate_non_empty_string("name", name)?;
    }
    if let Some(threshold) = args.health_threshold {
        validate_health_threshold(threshold)?;
    }
    Ok(())
}

pub fn apply_update(group: &MonitorGroup, args: &MonitorGroupUpdateArgs) -> MonitorGroupRequest {
    let mut request = MonitorGroupRequest::from(group);

    if let Some(name) = &args.name {
        request.display_name = name.trim().to_string();
    }
    if let Some(description) = &args.description {
        request.description = description.clone();
    }
    if let Some(monitors) = &args.monitors {
        request.monitors = monitors.clone();
    }
    if let Some(threshold) = args.health_threshold {
        request.health_threshold_count = threshold;
    }
    if let Some(dependents) = &args.dependent_monitors {
        request.dependency_resource_ids = dependents.clone();
    }
    if let Some(suppress) = args.suppress_alert {
        request.suppress_alert = suppress;
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{ok, MockFetcher};
    use serde_json::json;

    fn create_args(name: &str) -> MonitorGroupCreateArgs {
        MonitorGroupCreateArgs {
            name: name.to_string(),
            description: None,
            monitors: vec!["m1".to_string()],
            health_threshold: 1,
            dependent_monitors: vec![],
            suppress_alert: false,
        }
    }

    #[test]
    fn test_create_request() {
        let req = build_create_request(&create_args("Web")).unwrap();
        let body = serde_json::to_value(&req).unwrap();

        assert_eq!(body["display_name"], "Web");
        assert_eq!(body["health_threshold_count"], 1);
        assert!(body.get("description").is_none());
        assert!(body.get("dependency_resource_ids").is_none());
    }

    #[test]
    fn test_zero_health_threshold_rejected() {
        let mut args = create_args("Web");
        args.health_threshold = 0;
        assert!(build_create_request(&args).is_err());
    }

    #[tokio::test]
    async fn test_update_merges_existing_group() {
        let fetcher = MockFetcher::with(vec![
            ok(json!({
                "group_id": "5", "display_name": "Web", "description": "front",
                "monitors": ["m1"], "health_threshold_count": 2, "suppress_alert": true
            })),
            ok(json!({"group_id": "5", "display_name": "Web"})),
        ]);
        let args = MonitorGroupUpdateArgs {
            id: "5".to_string(),
            name: None,
            description: None,
            monitors: Some(vec!["m1".to_string(), "m2".to_string()]),
            health_threshold: None,
            dependent_monitors: None,
            suppress_alert: None,
        };

        run(MonitorGroupCommand::Update(args), &fetcher).await.unwrap();

        let body = fetcher.requests()[1].body.clone().unwrap();
        assert_eq!(body["description"], "front");
        assert_eq!(body["monitors"], json!(["m1", "m2"]));
        assert_eq!(body["health_threshold_count"], 2);
        assert_eq!(body["suppress_alert"], true);
    }
}

use crate::config::cli::{UserGroupCommand, UserGroupCreateArgs, UserGroupUpdateArgs};
use crate::core::user_groups::UserGroupService;
use crate::domain::model::{UserGroup, UserGroupRequest};
use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use crate::utils::output::to_pretty_json;
use crate::utils::validation::validate_non_empty_string;

pub async fn run<F: Fetcher + ?Sized>(command: UserGroupCommand, fetcher: &F) -> Result<String> {
    let groups = UserGroupService::new(fetcher);

    match command {
        UserGroupCommand::List => to_pretty_json(&groups.list().await?),
        UserGroupCommand::Get(args) => to_pretty_json(&groups.get(&args.id).await?),
        UserGroupCommand::Create(args) => {
            let request = build_create_request(&args)?;
            to_pretty_json(&groups.create(&request).await?)
        }
        UserGroupCommand::Update(args) => {
            if let Some(name) = &args.name {
                validate_non_empty_string("name", name)?;
            }
            let existing = groups.get(&args.id).await?;
            let request = apply_update(&existing, &args);
            to_pretty_json(&groups.update(&existing.id, &request).await?)
        }
        UserGroupCommand::Delete(args) => {
            groups.delete(&args.id).await?;
            Ok("User group successfully deleted!".to_string())
        }
    }
}

pub fn build_create_request(args: &UserGroupCreateArgs) -> Result<UserGroupRequest> {
    validate_non_empty_string("name", &args.name)?;

    Ok(UserGroupRequest {
        display_name: args.name.trim().to_string(),
        product_id: args.product,
        users: args.users.clone(),
        attribute_group_id: args.attribute_group_id.clone().unwrap_or_default(),
    })
}

pub fn apply_update(group: &UserGroup, args: &UserGroupUpdateArgs) -> UserGroupRequest {
    let mut request = UserGroupRequest::from(group);

    if let Some(name) = &args.name {
        request.display_name = name.trim().to_string();
    }
    if let Some(users) = &args.users {
        request.users = users.clone();
    }
    if let Some(product) = args.product {
        request.product_id = product;
    }
    if let Some(attribute_group) = &args.attribute_group_id {
        request.attribute_group_id = attribute_group.clone();
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::IdArgs;
    use crate::core::test_support::{ok, MockFetcher};
    use serde_json::json;

    #[test]
    fn test_update_keeps_unset_fields() {
        let group = UserGroup {
            id: "10".to_string(),
            name: "Ops".to_string(),
            product: 0,
            users: vec!["1".to_string()],
            attribute_group: "ag".to_string(),
        };
        let args = UserGroupUpdateArgs {
            id: "10".to_string(),
            name: Some("Operations".to_string()),
            users: None,
            product: None,
            attribute_group_id: None,
        };

        let req = apply_update(&group, &args);

        assert_eq!(req.display_name, "Operations");
        assert_eq!(req.users, vec!["1"]);
        assert_eq!(req.attribute_group_id, "ag");
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let args = UserGroupCreateArgs {
            name: "  ".to_string(),
            users: vec!["1".to_string()],
            product: 0,
            attribute_group_id: None,
        };
        assert!(build_create_request(&args).is_err());
    }

    #[tokio::test]
    async fn test_get_prints_json() {
        let fetcher = MockFetcher::with(vec![ok(json!({
            "user_group_id": "10", "display_name": "Ops", "users": ["1"], "product_id": 0
        }))]);

        let output = run(UserGroupCommand::Get(IdArgs { id: "10".to_string() }), &fetcher)
            .await
            .unwrap();

        assert!(output.starts_with("{\n    \"user_group_id\": \"10\""));
    }

    #[tokio::test]
    async fn test_delete_message() {
        let fetcher = MockFetcher::with(vec![ok(serde_json::Value::Null)]);
        let output = run(UserGroupCommand::Delete(IdArgs { id: "10".to_string() }), &fetcher)
            .await
            .unwrap();
        assert_eq!(output, "User group successfully deleted!");
    }
}

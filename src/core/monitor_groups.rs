// https://www.site24x7.com/help/api/#monitor-groups

use crate::core::{expect_success, expect_written};
use crate::domain::model::{ApiRequest, MonitorGroup, MonitorGroupRequest, MONITOR_GROUP_API_VERSION};
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, Site24x7Error};

pub struct MonitorGroupService<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
}

impl<'a, F: Fetcher + ?Sized> MonitorGroupService<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    fn request(req: ApiRequest) -> ApiRequest {
        req.with_version(MONITOR_GROUP_API_VERSION)
    }

    pub async fn list(&self, with_subgroups: bool) -> Result<Vec<MonitorGroup>> {
        let mut req = Self::request(ApiRequest::get("/monitor_groups"));
        if with_subgroups {
            req = req.with_query("subgroup_required", "true");
        }

        let res = self.fetcher.fetch(req).await?;
        if !res.has_data() {
            return Ok(Vec::new());
        }
        res.into_data("monitor_groups.list")
    }

    pub async fn get(&self, id: &str) -> Result<MonitorGroup> {
        let res = self
            .fetcher
            .fetch(Self::request(ApiRequest::get(format!("/monitor_groups/{}", id))))
            .await?;
        if !res.has_data() {
            return Err(Site24x7Error::not_found(format!(
                "Monitor group ({}) not found",
                id
            )));
        }
        res.into_data("monitor_groups.get")
    }

    pub async fn create(&self, group: &MonitorGroupRequest) -> Result<MonitorGroup> {
        let existing = self.list(false).await?;
        if existing
            .iter()
            .any(|g| g.name.eq_ignore_ascii_case(&group.display_name))
        {
            return Err(Site24x7Error::conflict(format!(
                "A monitor group named {} already exists",
                group.display_name
            )));
        }

        let res = self
            .fetcher
            .fetch(Self::request(ApiRequest::post("/monitor_groups")).with_json(group)?)
            .await?;
        expect_written(&res, "create monitor group")?;
        tracing::info!("Created monitor group {}", group.display_name);
        res.into_data("monitor_groups.create")
    }

    pub async fn update(&self, id: &str, group: &MonitorGroupRequest) -> Result<MonitorGroup> {
        let res = self
            .fetcher
            .fetch(Self::request(ApiRequest::put(format!("/monitor_groups/{}", id))).with_json(group)?)
            .await?;
        expect_written(&res, "update monitor group")?;
        res.into_data("monitor_groups.update")
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let res = self
            .fetcher
            .fetch(Self::request(ApiRequest::delete(format!("/monitor_groups/{}", id))))
            .await?;
        expect_success(&res, "delete monitor group")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{ok, MockFetcher};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_with_subgroups() {
        let fetcher = MockFetcher::with(vec![ok(json!([
            {"group_id": "5", "display_name": "Web", "subgroups": [{"group_id": "6"}]}
        ]))]);

        let groups = MonitorGroupService::new(&fetcher).list(true).await.unwrap();

        assert!(groups[0].subgroups.is_some());
        let req = &fetcher.requests()[0];
        assert_eq!(req.version, MONITOR_GROUP_API_VERSION);
        assert_eq!(
            req.query,
            vec![("subgroup_required".to_string(), "true".to_string())]
        );
    }

    #[tokio::test]
    async fn test_list_without_subgroups_has_no_query() {
        let fetcher = MockFetcher::with(vec![ok(json!([]))]);
        MonitorGroupService::new(&fetcher).list(false).await.unwrap();
        assert!(fetcher.requests()[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let fetcher = MockFetcher::with(vec![ok(json!({}))]);
        let err = MonitorGroupService::new(&fetcher).get("7").await.unwrap_err();
        assert_eq!(err.to_string(), "Monitor group (7) not found");
    }

    #[tokio::test]
    async fn test_create_duplicate_name() {
        let fetcher = MockFetcher::with(vec![ok(json!([
            {"group_id": "5", "display_name": "Web"}
        ]))]);
        let req = MonitorGroupRequest {
            display_name: "web".to_string(),
            health_threshold_count: 1,
            ..Default::default()
        };
        let err = MonitorGroupService::new(&fetcher).create(&req).await.unwrap_err();
        assert!(matches!(err, Site24x7Error::ConflictError { .. }));
    }

    #[tokio::test]
    async fn test_update_uses_versioned_put() {
        let fetcher = MockFetcher::with(vec![ok(json!({"group_id": "5", "display_name": "Web 2"}))]);
        let req = MonitorGroupRequest {
            display_name: "Web 2".to_string(),
            ..Default::default()
        };

        let group = MonitorGroupService::new(&fetcher).update("5", &req).await.unwrap();

        assert_eq!(group.name, "Web 2");
        let sent = &fetcher.requests()[0];
        assert_eq!(sent.path, "/monitor_groups/5");
        assert_eq!(sent.accept_header(), "application/json; version=2.1");
    }
}

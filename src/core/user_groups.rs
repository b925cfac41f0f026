// https://www.site24x7.com/help/api/#user-groups

use crate::core::{expect_success, expect_written};
use crate::domain::model::{ApiRequest, UserGroup, UserGroupRequest};
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, Site24x7Error};

pub struct UserGroupService<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
}

impl<'a, F: Fetcher + ?Sized> UserGroupService<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    pub async fn list(&self) -> Result<Vec<UserGroup>> {
        let res = self.fetcher.fetch(ApiRequest::get("/user_groups")).await?;
        if !res.has_data() {
            return Ok(Vec::new());
        }
        res.into_data("user_groups.list")
    }

    pub async fn get(&self, id: &str) -> Result<UserGroup> {
        let res = self
            .fetcher
            .fetch(ApiRequest::get(format!("/user_groups/{}", id)))
            .await?;
        if !res.has_data() {
            return Err(Site24x7Error::not_found(format!(
                "User group ({}) not found",
                id
            )));
        }
        res.into_data("user_groups.get")
    }

    pub async fn create(&self, group: &UserGroupRequest) -> Result<UserGroup> {
        if group.users.is_empty() {
            return Err(Site24x7Error::validation(
                "users",
                "a user group needs at least one user",
            ));
        }

        let existing = self.list().await?;
        if existing
            .iter()
            .any(|g| g.name.eq_ignore_ascii_case(&group.display_name))
        {
            return Err(Site24x7Error::conflict(format!(
                "A user group named {} already exists",
                group.display_name
            )));
        }

        let res = self
            .fetcher
            .fetch(ApiRequest::post("/user_groups").with_json(group)?)
            .await?;
        expect_written(&res, "create user group")?;
        tracing::info!("Created user group {}", group.display_name);
        res.into_data("user_groups.create")
    }

    pub async fn update(&self, id: &str, group: &UserGroupRequest) -> Result<UserGroup> {
        let res = self
            .fetcher
            .fetch(ApiRequest::put(format!("/user_groups/{}", id)).with_json(group)?)
            .await?;
        expect_written(&res, "update user group")?;
        res.into_data("user_groups.update")
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let res = self
            .fetcher
            .fetch(ApiRequest::delete(format!("/user_groups/{}", id)))
            .await?;
        expect_success(&res, "delete user group")
    }
}

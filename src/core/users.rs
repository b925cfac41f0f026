// https://www.site24x7.com/help/api/#users

use crate::core::{expect_success, expect_written};
use crate::domain::model::{ApiRequest, User, UserRequest};
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, Site24x7Error};

/// How a user is identified on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLocator {
    Id(String),
    Email(String),
}

pub struct UserService<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
}

impl<'a, F: Fetcher + ?Sized> UserService<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let res = self.fetcher.fetch(ApiRequest::get("/users")).await?;
        if !res.has_data() {
            return Ok(Vec::new());
        }
        res.into_data("users.list")
    }

    pub async fn get(&self, id: &str) -> Result<User> {
        let res = self
            .fetcher
            .fetch(ApiRequest::get(format!("/users/{}", id)))
            .await?;
        if !res.has_data() {
            return Err(Site24x7Error::not_found(format!("User ({}) not found", id)));
        }
        res.into_data("users.get")
    }

    pub async fn find_by_email(&self, email: &str) -> Result<User> {
        self.list()
            .await?
            .into_iter()
            .find(|u| u.email_address.eq_ignore_ascii_case(email))
            .ok_or_else(|| Site24x7Error::not_found(format!("User ({}) not found", email)))
    }

    pub async fn locate(&self, locator: &UserLocator) -> Result<User> {
        match locator {
            UserLocator::Id(id) => self.get(id).await,
            UserLocator::Email(email) => self.find_by_email(email).await,
        }
    }

    pub async fn exists(&self, email: &str) -> Result<bool> {
        match self.find_by_email(email).await {
            Ok(_) => Ok(true),
            Err(Site24x7Error::NotFoundError { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn create(&self, user: &UserRequest) -> Result<User> {
        if self.exists(&user.email_address).await? {
            return Err(Site24x7Error::conflict(format!(
                "A user with the email address {} already exists",
                user.email_address
            )));
        }

        let res = self
            .fetcher
            .fetch(ApiRequest::post("/users").with_json(user)?)
            .await?;
        expect_written(&res, "create user")?;
        tracing::info!("Created user {}", user.email_address);
        res.into_data("users.create")
    }

    pub async fn update(&self, id: &str, user: &UserRequest) -> Result<User> {
        let res = self
            .fetcher
            .fetch(ApiRequest::put(format!("/users/{}", id)).with_json(user)?)
            .await?;
        expect_written(&res, "update user")?;
        tracing::info!("Updated user {}", id);
        res.into_data("users.update")
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let res = self
            .fetcher
            .fetch(ApiRequest::delete(format!("/users/{}", id)))
            .await?;
        expect_success(&res, "delete user")?;
        tracing::info!("Deleted user {}", id);
        Ok(())
    }
}

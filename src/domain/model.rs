use crate::utils::error::{Result, Site24x7Error};
use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Resource endpoints are versioned through the `Accept` header.
pub const API_VERSION: &str = "2.0";
pub const MONITOR_GROUP_API_VERSION: &str = "2.1";

/// Everything needed to call one Site24x7 endpoint. `path` is relative to
/// the configured API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub version: &'static str,
    pub body: Option<serde_json::Value>,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            version: API_VERSION,
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }

    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn accept_header(&self) -> String {
        format!("application/json; version={}", self.version)
    }
}

/// Top level schema of (almost) every Site24x7 response. `data` varies per
/// endpoint and is deserialized by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        if self.message.is_empty() {
            self.code == 0
        } else {
            self.message.eq_ignore_ascii_case("success")
        }
    }

    /// `null` and `{}` both mean the API had nothing to return.
    pub fn has_data(&self) -> bool {
        match &self.data {
            serde_json::Value::Null => false,
            serde_json::Value::Object(map) => !map.is_empty(),
            _ => true,
        }
    }

    pub fn into_data<T: DeserializeOwned>(self, context: &str) -> Result<T> {
        serde_json::from_value(self.data).map_err(|e| Site24x7Error::ResponseParseError {
            context: context.to_string(),
            message: e.to_string(),
        })
    }
}

/// Body of the OAuth token endpoint. It does not use the `ApiResponse`
/// envelope and reports failures through `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthToken {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub api_domain: Option<String>,
    pub token_type: Option<String>,
    pub error: Option<String>,
}

/// Access token persisted between invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub client_id: String,
}

impl CachedToken {
    /// Tokens this close to expiry are refreshed instead of reused.
    pub const EXPIRY_MARGIN_SECONDS: i64 = 60;

    pub fn new(access_token: String, expires_in: i64, client_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            access_token,
            expires_at: now + Duration::seconds(expires_in),
            client_id: client_id.to_string(),
        }
    }

    pub fn is_usable(&self, client_id: &str, now: DateTime<Utc>) -> bool {
        self.client_id == client_id
            && !self.access_token.is_empty()
            && self.expires_at - Duration::seconds(Self::EXPIRY_MARGIN_SECONDS) > now
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertingPeriod {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
    pub email_format: i32,
    pub dont_alert_on_days: Vec<i32>,
    pub alerting_period: AlertingPeriod,
    pub down: Vec<i32>,
    pub trouble: Vec<i32>,
    pub up: Vec<i32>,
    pub applogs: Vec<i32>,
    pub anomaly: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_provider_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_provider_id: Option<i32>,
}

impl MobileSettings {
    pub fn is_empty(&self) -> bool {
        self.country_code.is_none()
            && self.mobile_number.is_none()
            && self.sms_provider_id.is_none()
            && self.call_provider_id.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: String,
    #[serde(rename = "display_name")]
    pub name: String,
    pub email_address: String,
    #[serde(rename = "user_role")]
    pub role: i32,
    pub notify_medium: Vec<i32>,
    pub monitor_groups: Vec<String>,
    pub user_groups: Vec<String>,
    pub selection_type: i32,
    pub alert_settings: AlertSettings,
    pub mobile_settings: MobileSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statusiq_role: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudspend_role: Option<i32>,
    pub is_account_contact: bool,
    pub is_invited: bool,
    pub is_edit_allowed: bool,
    pub image_present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zuid: Option<String>,
}

/// Writable subset of `User` sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserRequest {
    pub display_name: String,
    pub email_address: String,
    pub user_role: i32,
    pub notify_medium: Vec<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub monitor_groups: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_groups: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_type: Option<i32>,
    pub alert_settings: AlertSettings,
    #[serde(skip_serializing_if = "MobileSettings::is_empty")]
    pub mobile_settings: MobileSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statusiq_role: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudspend_role: Option<i32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub non_eu_alert_consent: bool,
}

impl From<&User> for UserRequest {
    fn from(user: &User) -> Self {
        Self {
            display_name: user.name.clone(),
            email_address: user.email_address.clone(),
            user_role: user.role,
            notify_medium: user.notify_medium.clone(),
            monitor_groups: user.monitor_groups.clone(),
            user_groups: user.user_groups.clone(),
            selection_type: Some(user.selection_type),
            alert_settings: user.alert_settings.clone(),
            mobile_settings: user.mobile_settings.clone(),
            job_title: user.job_title,
            statusiq_role: user.statusiq_role,
            cloudspend_role: user.cloudspend_role,
            non_eu_alert_consent: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroup {
    #[serde(rename = "user_group_id")]
    pub id: String,
    #[serde(rename = "display_name")]
    pub name: String,
    /// https://www.site24x7.com/help/api/#product_constants
    #[serde(rename = "product_id")]
    pub product: i32,
    pub users: Vec<String>,
    #[serde(rename = "attribute_group_id", skip_serializing_if = "String::is_empty")]
    pub attribute_group: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserGroupRequest {
    pub display_name: String,
    pub product_id: i32,
    pub users: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub attribute_group_id: String,
}

impl From<&UserGroup> for UserGroupRequest {
    fn from(group: &UserGroup) -> Self {
        Self {
            display_name: group.name.clone(),
            product_id: group.product,
            users: group.users.clone(),
            attribute_group_id: group.attribute_group.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorGroup {
    #[serde(rename = "group_id")]
    pub id: String,
    #[serde(rename = "display_name")]
    pub name: String,
    pub description: String,
    pub group_type: i32,
    pub monitors: Vec<String>,
    pub dependency_resource_ids: Vec<String>,
    pub suppress_alert: bool,
    pub health_threshold_count: i32,
    // Only present when listing with subgroup_required=true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgroups: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonitorGroupRequest {
    pub display_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub monitors: Vec<String>,
    pub health_threshold_count: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependency_resource_ids: Vec<String>,
    pub suppress_alert: bool,
}

impl From<&MonitorGroup> for MonitorGroupRequest {
    fn from(group: &MonitorGroup) -> Self {
        Self {
            display_name: group.name.clone(),
            description: group.description.clone(),
            monitors: group.monitors.clone(),
            health_threshold_count: group.health_threshold_count,
            dependency_resource_ids: group.dependency_resource_ids.clone(),
            suppress_alert: group.suppress_alert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MuteCategory {
    #[serde(rename = "A")]
    All,
    #[serde(rename = "M")]
    Monitors,
    #[serde(rename = "G")]
    MonitorGroups,
}

impl MuteCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            MuteCategory::All => "A",
            MuteCategory::Monitors => "M",
            MuteCategory::MonitorGroups => "G",
        }
    }
}

/// https://www.site24x7.com/help/api/#mute-monitor-alerts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuteRequest {
    pub mute_time: u32,
    pub category: MuteCategory,
    pub muted_resource_list: Vec<String>,
    pub resource_group_list: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reason: String,
    pub extend_mute: bool,
    pub notify: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutedAlert {
    pub muted_resource_list: Vec<String>,
    pub category: String,
    pub resource_group_list: Vec<String>,
    pub mute_time_iso: String,
    pub reason: String,
}

impl MutedAlert {
    /// Site24x7 sends offsets without a colon (`+0530`), so RFC 3339 alone
    /// is not enough.
    pub fn muted_until(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.mute_time_iso)
            .or_else(|_| DateTime::parse_from_str(&self.mute_time_iso, "%Y-%m-%dT%H:%M:%S%z"))
            .ok()
    }
}

// https://www.site24x7.com/help/api/#mute-monitor-alerts

use crate::core::expect_success;
use crate::domain::constants::MUTE_DURATIONS;
use crate::domain::model::{ApiRequest, MuteCategory, MuteRequest, MutedAlert};
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, Site24x7Error};
use crate::utils::validation::Validate;

#[derive(Debug, Clone, PartialEq)]
pub struct MuteOptions {
    /// Minutes; must be one of `MUTE_DURATIONS`.
    pub duration: u32,
    pub monitors: Vec<String>,
    pub groups: Vec<String>,
    pub all: bool,
    pub reason: String,
    pub extend: bool,
    pub notify: bool,
}

impl Default for MuteOptions {
    fn default() -> Self {
        Self {
            duration: 5,
            monitors: Vec::new(),
            groups: Vec::new(),
            all: false,
            reason: String::new(),
            extend: false,
            notify: true,
        }
    }
}

impl MuteOptions {
    pub fn category(&self) -> MuteCategory {
        if self.all {
            MuteCategory::All
        } else if !self.groups.is_empty() {
            MuteCategory::MonitorGroups
        } else {
            MuteCategory::Monitors
        }
    }

    pub fn to_request(&self) -> Result<MuteRequest> {
        self.validate()?;

        Ok(MuteRequest {
            mute_time: self.duration,
            category: self.category(),
            muted_resource_list: self.monitors.clone(),
            resource_group_list: self.groups.clone(),
            reason: self.reason.clone(),
            extend_mute: self.extend,
            notify: self.notify,
        })
    }
}

impl Validate for MuteOptions {
    fn validate(&self) -> Result<()> {
        if !MUTE_DURATIONS.contains(&self.duration) {
            let allowed: Vec<String> = MUTE_DURATIONS.iter().map(|d| d.to_string()).collect();
            return Err(Site24x7Error::validation(
                "duration",
                format!(
                    "invalid duration ({}); use one of {}",
                    self.duration,
                    allowed.join(", ")
                ),
            ));
        }

        let has_monitors = !self.monitors.is_empty();
        let has_groups = !self.groups.is_empty();

        if self.all && (has_monitors || has_groups) {
            return Err(Site24x7Error::validation(
                "all",
                "if all monitors are to be muted, do not send --monitors or --groups",
            ));
        }
        if has_monitors && has_groups {
            return Err(Site24x7Error::validation(
                "monitors",
                "either --monitors or --groups can be sent; not both",
            ));
        }
        if !self.all && !has_monitors && !has_groups {
            return Err(Site24x7Error::validation(
                "monitors",
                "nothing to mute; pass --monitors, --groups or --all",
            ));
        }
        Ok(())
    }
}

pub struct AlertService<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
}

impl<'a, F: Fetcher + ?Sized> AlertService<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    pub async fn mute(&self, options: &MuteOptions) -> Result<MutedAlert> {
        let body = options.to_request()?;
        let res = self
            .fetcher
            .fetch(ApiRequest::put("/mute_alerts").with_json(&body)?)
            .await?;
        expect_success(&res, "mute alerts")?;
        tracing::info!(
            "Muted alerts for {} minutes (category {:?})",
            body.mute_time,
            body.category
        );

        if !res.has_data() {
            return Ok(MutedAlert {
                muted_resource_list: body.muted_resource_list,
                category: body.category.as_str().to_string(),
                resource_group_list: body.resource_group_list,
                reason: body.reason,
                ..Default::default()
            });
        }
        res.into_data("alerts.mute")
    }
}

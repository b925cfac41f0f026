use crate::config::cli::{UserAccessorArgs, UserCommand, UserWriterArgs};
use crate::core::users::{UserLocator, UserService};
use crate::domain::constants;
use crate::domain::model::{AlertingPeriod, AlertSettings, User, UserRequest};
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, Site24x7Error};
use crate::utils::output::to_pretty_json;
use crate::utils::validation::{
    validate_lookup, validate_lookup_all, validate_non_empty_string, validate_skip_days,
    validate_time_of_day, Validate,
};

pub const DEFAULT_USER_NAME: &str = "Unnamed User";
const DEFAULT_TIME: &str = "00:00";

pub async fn run<F: Fetcher + ?Sized>(command: UserCommand, fetcher: &F) -> Result<String> {
    let users = UserService::new(fetcher);

    match command {
        UserCommand::List => to_pretty_json(&users.list().await?),
        UserCommand::Get(accessor) => {
            let user = users.locate(&accessor.locator()?).await?;
            to_pretty_json(&user)
        }
        UserCommand::Create(args) => {
            let request = build_create_request(&args.email, &args.writer)?;
            let user = users.create(&request).await?;
            to_pretty_json(&user)
        }
        UserCommand::Update(args) => {
            args.writer.validate()?;
            let locator = args.accessor.locator()?;
            let existing = users.locate(&locator).await?;
            let request = apply_update(&existing, &args.writer);
            let user = users.update(&existing.id, &request).await?;
            to_pretty_json(&user)
        }
        UserCommand::Delete(accessor) => {
            let user = users.locate(&accessor.locator()?).await?;
            users.delete(&user.id).await?;
            Ok("User successfully deleted!".to_string())
        }
    }
}

impl UserAccessorArgs {
    pub fn locator(&self) -> Result<UserLocator> {
        match (self.id.as_deref(), self.email.as_deref()) {
            (Some(_), Some(_)) => Err(Site24x7Error::validation(
                "id",
                "please include either an ID OR an email address, not both",
            )),
            (Some(id), None) if !id.trim().is_empty() => Ok(UserLocator::Id(id.trim().to_string())),
            (None, Some(email)) if !email.trim().is_empty() => {
                Ok(UserLocator::Email(email.trim().to_string()))
            }
            _ => Err(Site24x7Error::validation(
                "id",
                "either an ID or an email address is required to identify a user",
            )),
        }
    }
}

impl Validate for UserWriterArgs {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_non_empty_string("name", name)?;
        }
        if let Some(role) = self.role {
            validate_lookup("role", role, &constants::user_roles())?;
        }
        if let Some(media) = &self.notify_by {
            validate_lookup_all("notify-by", media, &constants::notify_mediums())?;
        }
        if let Some(format) = self.alert_email_format {
            validate_lookup("alert-email-format", format, &constants::email_formats())?;
        }
        if let Some(days) = &self.alert_skip_days {
            validate_skip_days("alert-skip-days", days)?;
        }
        if let Some(start) = &self.alert_start_time {
            validate_time_of_day("alert-start-time", start)?;
        }
        if let Some(end) = &self.alert_end_time {
            validate_time_of_day("alert-end-time", end)?;
        }

        let media = constants::notify_mediums();
        for (flag, methods) in [
            ("alert-methods-down", &self.alert_methods_down),
            ("alert-methods-trouble", &self.alert_methods_trouble),
            ("alert-methods-up", &self.alert_methods_up),
            ("alert-methods-applogs", &self.alert_methods_applogs),
            ("alert-methods-anomaly", &self.alert_methods_anomaly),
        ] {
            if let Some(methods) = methods {
                validate_lookup_all(flag, methods, &media)?;
            }
        }

        if let Some(title) = self.job_title {
            validate_lookup("job-title", title, &constants::job_titles())?;
        }
        if let Some(resource_type) = self.resource_type {
            validate_lookup("resource-type", resource_type, &constants::resource_types())?;
        }
        if let Some(role) = self.statusiq_role {
            validate_lookup("statusiq-role", role, &constants::statusiq_roles())?;
        }
        if let Some(role) = self.cloudspend_role {
            validate_lookup("cloudspend-role", role, &constants::cloudspend_roles())?;
        }
        Ok(())
    }
}

/// Builds a create body, filling unset flags with their defaults.
pub fn build_create_request(email: &str, writer: &UserWriterArgs) -> Result<UserRequest> {
    validate_non_empty_string("email", email)?;
    writer.validate()?;

    let methods = |v: &Option<Vec<i32>>| v.clone().unwrap_or_else(|| vec![1]);

    let mut request = UserRequest {
        display_name: writer
            .name
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_USER_NAME)
            .to_string(),
        email_address: email.trim().to_string(),
        user_role: writer.role.unwrap_or(0),
        notify_medium: methods(&writer.notify_by),
        monitor_groups: writer.monitor_groups.clone().unwrap_or_default(),
        user_groups: writer.user_groups.clone().unwrap_or_default(),
        selection_type: Some(writer.resource_type.unwrap_or(0)),
        alert_settings: AlertSettings {
            email_format: writer.alert_email_format.unwrap_or(1),
            dont_alert_on_days: writer.alert_skip_days.clone().unwrap_or_default(),
            alerting_period: AlertingPeriod {
                start_time: writer
                    .alert_start_time
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TIME.to_string()),
                end_time: writer
                    .alert_end_time
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TIME.to_string()),
            },
            down: methods(&writer.alert_methods_down),
            trouble: methods(&writer.alert_methods_trouble),
            up: methods(&writer.alert_methods_up),
            applogs: methods(&writer.alert_methods_applogs),
            anomaly: methods(&writer.alert_methods_anomaly),
        },
        job_title: writer.job_title,
        statusiq_role: writer.statusiq_role,
        cloudspend_role: writer.cloudspend_role,
        non_eu_alert_consent: writer.non_eu_alert_consent,
        ..Default::default()
    };
    apply_mobile(&mut request, writer);

    Ok(request)
}

/// Starts from the fetched user and overrides only the flags that were passed.
pub fn apply_update(user: &User, writer: &UserWriterArgs) -> UserRequest {
    let mut request = UserRequest::from(user);

    if let Some(name) = &writer.name {
        request.display_name = name.trim().to_string();
    }
    if let Some(role) = writer.role {
        request.user_role = role;
    }
    if let Some(media) = &writer.notify_by {
        request.notify_medium = media.clone();
    }
    if let Some(groups) = &writer.monitor_groups {
        request.monitor_groups = groups.clone();
    }
    if let Some(groups) = &writer.user_groups {
        request.user_groups = groups.clone();
    }
    if let Some(resource_type) = writer.resource_type {
        request.selection_type = Some(resource_type);
    }

    let alerts = &mut request.alert_settings;
    if let Some(format) = writer.alert_email_format {
        alerts.email_format = format;
    }
    if let Some(days) = &writer.alert_skip_days {
        alerts.dont_alert_on_days = days.clone();
    }
    if let Some(start) = &writer.alert_start_time {
        alerts.alerting_period.start_time = start.clone();
    }
    if let Some(end) = &writer.alert_end_time {
        alerts.alerting_period.end_time = end.clone();
    }
    for (target, methods) in [
        (&mut alerts.down, &writer.alert_methods_down),
        (&mut alerts.trouble, &writer.alert_methods_trouble),
        (&mut alerts.up, &writer.alert_methods_up),
        (&mut alerts.applogs, &writer.alert_methods_applogs),
        (&mut alerts.anomaly, &writer.alert_methods_anomaly),
    ] {
        if let Some(methods) = methods {
            *target = methods.clone();
        }
    }

    if writer.job_title.is_some() {
        request.job_title = writer.job_title;
    }
    if writer.statusiq_role.is_some() {
        request.statusiq_role = writer.statusiq_role;
    }
    if writer.cloudspend_role.is_some() {
        request.cloudspend_role = writer.cloudspend_role;
    }
    request.non_eu_alert_consent = writer.non_eu_alert_consent;
    apply_mobile(&mut request, writer);

    request
}

fn apply_mobile(request: &mut UserRequest, writer: &UserWriterArgs) {
    let mobile = &mut request.mobile_settings;
    if let Some(code) = &writer.mobile_country_code {
        mobile.country_code = Some(code.clone());
    }
    if let Some(number) = &writer.mobile_phone_number {
        mobile.mobile_number = Some(number.clone());
    }
    if let Some(id) = writer.mobile_sms_provider_id {
        mobile.sms_provider_id = Some(id);
    }
    if let Some(id) = writer.mobile_call_provider_id {
        mobile.call_provider_id = Some(id);
    }
}

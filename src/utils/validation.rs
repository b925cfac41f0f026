use crate::utils::error::{Result, Site24x7Error};
use std::collections::BTreeMap;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(Site24x7Error::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(Site24x7Error::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(Site24x7Error::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| Site24x7Error::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Site24x7Error::validation(
            field_name,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(Site24x7Error::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks a constant against one of the lookup tables in `domain::constants`.
pub fn validate_lookup(field_name: &str, value: i32, table: &BTreeMap<i32, &'static str>) -> Result<()> {
    if table.contains_key(&value) {
        return Ok(());
    }

    Err(Site24x7Error::validation(
        field_name,
        format!("{} is not one of {}", value, describe_lookup(table)),
    ))
}

/// Every id must be known and the list must not be empty.
pub fn validate_lookup_all(
    field_name: &str,
    values: &[i32],
    table: &BTreeMap<i32, &'static str>,
) -> Result<()> {
    if values.is_empty() {
        return Err(Site24x7Error::validation(
            field_name,
            format!("at least one value is required ({})", describe_lookup(table)),
        ));
    }

    for value in values {
        validate_lookup(field_name, *value, table)?;
    }
    Ok(())
}

pub fn describe_lookup(table: &BTreeMap<i32, &'static str>) -> String {
    table
        .iter()
        .map(|(id, name)| format!("{} ({})", id, name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accepts `HH:MM` on a 24 hour clock.
pub fn validate_time_of_day(field_name: &str, value: &str) -> Result<()> {
    if chrono::NaiveTime::parse_from_str(value, "%H:%M").is_ok() && value.len() == 5 {
        return Ok(());
    }

    Err(Site24x7Error::validation(
        field_name,
        format!("'{}' is not a time of day in HH:MM format", value),
    ))
}

pub fn validate_skip_days(field_name: &str, days: &[i32]) -> Result<()> {
    if days.len() > 7 {
        return Err(Site24x7Error::validation(
            field_name,
            "there are only 7 days in a week",
        ));
    }

    if let Some(day) = days.iter().find(|d| !(0..=6).contains(*d)) {
        return Err(Site24x7Error::validation(
            field_name,
            format!("{} is not a day; use 0 (Sunday) - 6 (Saturday)", day),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://www.site24x7.com/api").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_lookup() {
        let roles = constants::user_roles();
        assert!(validate_lookup("role", 10, &roles).is_ok());
        assert!(validate_lookup("role", 7, &roles).is_err());

        let media = constants::notify_mediums();
        assert!(validate_lookup_all("notify-by", &[1, 2], &media).is_ok());
        assert!(validate_lookup_all("notify-by", &[1, 9], &media).is_err());
        assert!(validate_lookup_all("notify-by", &[], &media).is_err());
    }

    #[test]
    fn test_validate_time_of_day() {
        assert!(validate_time_of_day("alert-start-time", "00:00").is_ok());
        assert!(validate_time_of_day("alert-start-time", "23:59").is_ok());
        assert!(validate_time_of_day("alert-start-time", "24:00").is_err());
        assert!(validate_time_of_day("alert-start-time", "8:30").is_err());
        assert!(validate_time_of_day("alert-start-time", "noon").is_err());
    }

    #[test]
    fn test_validate_skip_days() {
        assert!(validate_skip_days("alert-skip-days", &[]).is_ok());
        assert!(validate_skip_days("alert-skip-days", &[0, 6]).is_ok());
        assert!(validate_skip_days("alert-skip-days", &[7]).is_err());
        assert!(validate_skip_days("alert-skip-days", &[-1]).is_err());
        assert!(validate_skip_days("alert-skip-days", &[0, 1, 2, 3, 4, 5, 6, 0]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("api.timeout_seconds", 30u64, 1, 300).is_ok());
        assert!(validate_range("api.timeout_seconds", 0u64, 1, 300).is_err());
    }
}

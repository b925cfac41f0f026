// Lookup tables for Site24x7 numeric constants.
// https://www.site24x7.com/help/api/#user_constants
// https://www.site24x7.com/help/api/#alerting_constants

use std::collections::BTreeMap;

pub fn user_roles() -> BTreeMap<i32, &'static str> {
    BTreeMap::from([
        (0, "No Access"),
        (1, "Super Administrator"),
        (2, "Administrator"),
        (3, "Operator"),
        (4, "Billing Contact"),
        (5, "Spokesperson"),
        (6, "Hosting Provider"),
        (10, "Read Only"),
    ])
}

pub fn cloudspend_roles() -> BTreeMap<i32, &'static str> {
    BTreeMap::from([(11, "Cost Administrator"), (12, "Cost User")])
}

pub fn statusiq_roles() -> BTreeMap<i32, &'static str> {
    BTreeMap::from([
        (21, "StatusIQ Super Administrator"),
        (22, "StatusIQ Administrator"),
        (23, "StatusIQ Spokesperson"),
        (24, "StatusIQ Billing Contact"),
        (25, "StatusIQ Read Only"),
    ])
}

pub fn notify_mediums() -> BTreeMap<i32, &'static str> {
    BTreeMap::from([
        (1, "Email"),
        (2, "SMS"),
        (3, "Voice Call"),
        (4, "IM"),
        (5, "Twitter"),
    ])
}

pub fn email_formats() -> BTreeMap<i32, &'static str> {
    BTreeMap::from([(0, "Text"), (1, "HTML")])
}

/// https://www.site24x7.com/help/api/#job_title
pub fn job_titles() -> BTreeMap<i32, &'static str> {
    BTreeMap::from([
        (1, "IT Engineer"),
        (2, "Cloud Engineer"),
        (3, "DevOps Engineer"),
        (4, "Webmaster"),
        (5, "CEO/CTO"),
        (6, "Internal IT"),
        (7, "Others"),
    ])
}

/// https://www.site24x7.com/help/api/#resource_type_constants
pub fn resource_types() -> BTreeMap<i32, &'static str> {
    BTreeMap::from([
        (0, "All Monitors"),
        (1, "Monitor Group"),
        (2, "Monitor"),
        (3, "Tags"),
        (4, "Monitor Type"),
    ])
}

/// Mute periods accepted by the mute_alerts endpoint, in minutes.
pub const MUTE_DURATIONS: [u32; 10] = [5, 15, 30, 45, 60, 120, 180, 360, 720, 1440];

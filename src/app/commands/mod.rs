pub mod alert;
pub mod config;
pub mod monitor_group;
pub mod user;
pub mod user_group;

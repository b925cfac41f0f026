use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "site24x7", version)]
#[command(about = "Command line client for the Site24x7 monitoring API")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file location (default ~/.site24x7.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Configures the CLI with Site24x7 OAuth credentials
    #[command(visible_aliases = ["configure", "cfg"])]
    Config(ConfigArgs),

    /// Manages users
    #[command(subcommand)]
    User(UserCommand),

    /// Manages user groups
    #[command(subcommand, name = "user_group", visible_aliases = ["ug", "usergroup", "ugroup"])]
    UserGroup(UserGroupCommand),

    /// Manages monitor groups
    #[command(subcommand, name = "monitor_group", visible_aliases = ["mg", "mongroup", "mgroup"])]
    MonitorGroup(MonitorGroupCommand),

    /// Performs alert actions
    #[command(subcommand)]
    Alert(AlertCommand),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Update the refresh token only, keeping the client id and secret
    #[arg(short = 'r', long)]
    pub refresh_token: bool,

    #[arg(long)]
    pub client_id: Option<String>,

    #[arg(long)]
    pub client_secret: Option<String>,

    /// Grant token generated in the Zoho API console
    #[arg(long)]
    pub grant_token: Option<String>,

    /// Overwrite an existing config file without asking
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Lists all users
    #[command(visible_alias = "ls")]
    List,

    /// Retrieves a single user
    #[command(visible_aliases = ["fetch", "retrieve", "read"])]
    Get(UserAccessorArgs),

    /// Creates a new user
    #[command(visible_aliases = ["add", "new"])]
    Create(UserCreateArgs),

    /// Updates an existing user
    #[command(visible_alias = "modify")]
    Update(UserUpdateArgs),

    /// Deletes a user
    #[command(visible_aliases = ["del", "rm", "remove"])]
    Delete(UserAccessorArgs),
}

#[derive(Debug, Clone, Default, Args)]
#[group(required = true, multiple = false)]
pub struct UserAccessorArgs {
    /// A user identifier
    #[arg(short, long)]
    pub id: Option<String>,

    /// A user email address
    #[arg(short, long)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct UserCreateArgs {
    /// Email address of the new user
    pub email: String,

    #[command(flatten)]
    pub writer: UserWriterArgs,
}

#[derive(Debug, Clone, Args)]
pub struct UserUpdateArgs {
    #[command(flatten)]
    pub accessor: UserAccessorArgs,

    #[command(flatten)]
    pub writer: UserWriterArgs,
}

/// Writable user properties. Unset flags leave the property alone on update
/// and take the documented default on create.
#[derive(Debug, Clone, Default, Args)]
pub struct UserWriterArgs {
    /// Full name of the user, e.g. "Fred Flintstone" [create default: Unnamed User]
    #[arg(short, long)]
    pub name: Option<String>,

    /// https://www.site24x7.com/help/api/#user_constants [create default: 0]
    #[arg(short, long)]
    pub role: Option<i32>,

    /// Media by which the user receives alerts [create default: 1]
    #[arg(short = 'N', long, value_delimiter = ',')]
    pub notify_by: Option<Vec<i32>>,

    /// Monitor group ids the user is assigned to for alerts
    #[arg(short = 'g', long, value_delimiter = ',')]
    pub monitor_groups: Option<Vec<String>>,

    /// User group ids the user belongs to
    #[arg(long, value_delimiter = ',')]
    pub user_groups: Option<Vec<String>>,

    /// 0 (Text) or 1 (HTML) [create default: 1]
    #[arg(long)]
    pub alert_email_format: Option<i32>,

    /// Days without alerts: 0 (Sunday) - 6 (Saturday)
    #[arg(long, value_delimiter = ',')]
    pub alert_skip_days: Option<Vec<i32>>,

    /// HH:MM [create default: 00:00]
    #[arg(long)]
    pub alert_start_time: Option<String>,

    /// HH:MM [create default: 00:00]
    #[arg(long)]
    pub alert_end_time: Option<String>,

    #[arg(long, value_delimiter = ',')]
    pub alert_methods_down: Option<Vec<i32>>,

    #[arg(long, value_delimiter = ',')]
    pub alert_methods_trouble: Option<Vec<i32>>,

    #[arg(long, value_delimiter = ',')]
    pub alert_methods_up: Option<Vec<i32>>,

    #[arg(long, value_delimiter = ',')]
    pub alert_methods_applogs: Option<Vec<i32>>,

    #[arg(long, value_delimiter = ',')]
    pub alert_methods_anomaly: Option<Vec<i32>>,

    /// https://www.site24x7.com/help/api/#job_title
    #[arg(long)]
    pub job_title: Option<i32>,

    /// Required for SMS and voice notifications
    #[arg(long)]
    pub mobile_country_code: Option<String>,

    /// Digits only; required for SMS and voice notifications
    #[arg(long)]
    pub mobile_phone_number: Option<String>,

    #[arg(long)]
    pub mobile_sms_provider_id: Option<i32>,

    #[arg(long)]
    pub mobile_call_provider_id: Option<i32>,

    /// https://www.site24x7.com/help/api/#resource_type_constants
    #[arg(long)]
    pub resource_type: Option<i32>,

    #[arg(long)]
    pub statusiq_role: Option<i32>,

    #[arg(long)]
    pub cloudspend_role: Option<i32>,

    /// Consent to transfer alert data outside the EU (mandatory for the EU data center)
    #[arg(long)]
    pub non_eu_alert_consent: bool,
}

#[derive(Debug, Subcommand)]
pub enum UserGroupCommand {
    #[command(visible_alias = "ls")]
    List,

    #[command(visible_aliases = ["fetch", "retrieve", "read"])]
    Get(IdArgs),

    #[command(visible_aliases = ["add", "new"])]
    Create(UserGroupCreateArgs),

    #[command(visible_alias = "modify")]
    Update(UserGroupUpdateArgs),

    #[command(visible_aliases = ["del", "rm", "remove"])]
    Delete(IdArgs),
}

#[derive(Debug, Clone, Args)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Debug, Clone, Args)]
pub struct UserGroupCreateArgs {
    pub name: String,

    /// User ids belonging to the group
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub users: Vec<String>,

    /// https://www.site24x7.com/help/api/#product_constants
    #[arg(long, default_value_t = 0)]
    pub product: i32,

    #[arg(long)]
    pub attribute_group_id: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct UserGroupUpdateArgs {
    pub id: String,

    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long, value_delimiter = ',')]
    pub users: Option<Vec<String>>,

    #[arg(long)]
    pub product: Option<i32>,

    #[arg(long)]
    pub attribute_group_id: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum MonitorGroupCommand {
    #[command(visible_alias = "ls")]
    List(MonitorGroupListArgs),

    #[command(visible_aliases = ["fetch", "retrieve", "read"])]
    Get(IdArgs),

    #[command(visible_aliases = ["add", "new"])]
    Create(MonitorGroupCreateArgs),

    #[command(visible_alias = "modify")]
    Update(MonitorGroupUpdateArgs),

    #[command(visible_aliases = ["del", "rm", "remove"])]
    Delete(IdArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct MonitorGroupListArgs {
    /// Include nested subgroups
    #[arg(long)]
    pub with_subgroups: bool,
}

#[derive(Debug, Clone, Args)]
pub struct MonitorGroupCreateArgs {
    pub name: String,

    #[arg(short, long)]
    pub description: Option<String>,

    /// Monitor ids in the group
    #[arg(short, long, value_delimiter = ',')]
    pub monitors: Vec<String>,

    /// Number of monitors that must be down before the group is down
    #[arg(long, default_value_t = 1)]
    pub health_threshold: i32,

    /// Monitor ids the group depends on
    #[arg(long, value_delimiter = ',')]
    pub dependent_monitors: Vec<String>,

    /// Suppress alerts when a dependent monitor is down
    #[arg(long)]
    pub suppress_alert: bool,
}

#[derive(Debug, Clone, Args)]
pub struct MonitorGroupUpdateArgs {
    pub id: String,

    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long)]
    pub description: Option<String>,

    #[arg(short, long, value_delimiter = ',')]
    pub monitors: Option<Vec<String>>,

    #[arg(long)]
    pub health_threshold: Option<i32>,

    #[arg(long, value_delimiter = ',')]
    pub dependent_monitors: Option<Vec<String>>,

    #[arg(long)]
    pub suppress_alert: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum AlertCommand {
    /// Suppresses alerts for monitors, monitor groups or everything
    #[command(visible_aliases = ["silence", "quiet", "suppress"])]
    Mute(MuteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct MuteArgs {
    /// Minutes: 5, 15, 30, 45, 60, 120, 180, 360, 720 or 1440
    #[arg(short, long, default_value_t = 5)]
    pub duration: u32,

    /// Monitor ids to mute
    #[arg(short, long, value_delimiter = ',')]
    pub monitors: Vec<String>,

    /// Monitor group ids to mute
    #[arg(short, long, value_delimiter = ',')]
    pub groups: Vec<String>,

    /// Reason for muting
    #[arg(short, long, default_value = "")]
    pub reason: String,

    /// Mute every monitor
    #[arg(short, long)]
    pub all: bool,

    /// Extend an existing mute period
    #[arg(short, long)]
    pub extend: bool,

    /// Notify administrators that alerts are muted
    #[arg(short, long, default_value_t = true, action = ArgAction::Set)]
    pub notify: bool,
}

pub mod alerts;
pub mod auth;
pub mod client;
pub mod monitor_groups;
pub mod session;
pub mod user_groups;
pub mod users;

pub use crate::domain::model::{ApiRequest, ApiResponse};
pub use crate::domain::ports::{ConfigProvider, Fetcher, TokenStore};
pub use crate::utils::error::Result;

use crate::utils::error::Site24x7Error;

/// Rejects a write whose envelope does not report success or carries no data.
pub(crate) fn expect_written(res: &ApiResponse, action: &str) -> Result<()> {
    if !res.is_success() || !res.has_data() {
        return Err(Site24x7Error::ApiError {
            status: 200,
            code: res.code,
            message: format!(
                "Unable to {} ({})",
                action,
                if res.message.is_empty() {
                    "no data returned"
                } else {
                    res.message.as_str()
                }
            ),
        });
    }
    Ok(())
}

pub(crate) fn expect_success(res: &ApiResponse, action: &str) -> Result<()> {
    if !res.is_success() {
        return Err(Site24x7Error::ApiError {
            status: 200,
            code: res.code,
            message: format!("Unable to {} ({})", action, res.message),
        });
    }
    Ok(())
}

use crate::domain::model::ContactSubmission;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_SUBMISSION_ENDPOINT: &str = "https://formspree.io/f/meokkgzb";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_STATUS_RESET_DELAY: Duration = Duration::from_secs(5);

/// Delivers one contact submission. `Ok` means the collector accepted it.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn submission_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn status_reset_delay(&self) -> Duration;
}

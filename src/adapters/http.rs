use crate::domain::model::ContactSubmission;
use crate::domain::ports::{ConfigProvider, Submitter};
use crate::utils::error::{HomecareError, Result};
use reqwest::Client;
use std::time::Duration;

/// Posts submissions as JSON to the form-collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.submission_endpoint(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, submission: &ContactSubmission) -> Result<()> {
        tracing::debug!("Posting contact submission to: {}", self.endpoint);

        // .json() 會設定 Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Submission endpoint response status: {}", status);

        // 回應內容不解析
        if status.is_success() {
            Ok(())
        } else {
            Err(HomecareError::EndpointRejected {
                status: status.as_u16(),
            })
        }
    }
}

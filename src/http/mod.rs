pub mod types;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::{config::ApiConfig, recommend::RecommendError};

use types::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};

/// Anything that can turn a prompt into recommendation texts.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn recommend(&self, prompt: &str) -> Result<Vec<String>, RecommendError>;
}

pub struct ApiService {
    client: Client,
    endpoint: Url,
}

impl ApiService {
    pub fn new(config: &ApiConfig) -> color_eyre::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let endpoint = Self::endpoint(config)?;

        Ok(Self { client, endpoint })
    }

    fn endpoint(config: &ApiConfig) -> color_eyre::Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        ))?;
        url.query_pairs_mut().append_pair("key", &config.api_key);
        Ok(url)
    }

    pub async fn generate(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, RecommendError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| RecommendError::transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.error.message);
            warn!(status = status.as_u16(), ?detail, "Recommendation request rejected");
            return Err(RecommendError::Protocol {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| RecommendError::transport(e.without_url().to_string()))
    }
}

#[async_trait]
impl RecommendationSource for ApiService {
    async fn recommend(&self, prompt: &str) -> Result<Vec<String>, RecommendError> {
        let response = self.generate(prompt).await?;
        let texts = response.texts();
        debug!(candidates = texts.len(), "Recommendations received");

        if texts.is_empty() {
            return Err(RecommendError::EmptyResult);
        }
        Ok(texts)
    }
}

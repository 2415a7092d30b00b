//! reqwest-backed sink.

use async_trait::async_trait;
use reqwest::{Client, Method as HttpMethod};
use tracing::{debug, warn};

use super::MutationSink;
use crate::error::AppError;
use crate::protocol::{Method, MutationRequest};

#[derive(Debug, Clone)]
pub struct HttpMutationSink {
    client: Client,
    base_url: String,
}

impl HttpMutationSink {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, request: &MutationRequest) -> String {
        format!("{}{}", self.base_url, request.path())
    }
}

fn http_method(method: Method) -> HttpMethod {
    match method {
        Method::Put => HttpMethod::PUT,
        Method::Post => HttpMethod::POST,
        Method::Delete => HttpMethod::DELETE,
    }
}

#[async_trait]
impl MutationSink for HttpMutationSink {
    async fn send(&self, request: &MutationRequest) -> Result<(), AppError> {
        let url = self.url_for(request);
        let method = request.method();
        debug!(method = method.as_str(), url = %url, "sending mutation");

        let response = self
            .client
            .request(http_method(method), &url)
            .json(&request.body())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(method = method.as_str(), url = %url, status = status.as_u16(), "mutation rejected");
            return Err(AppError::transport(
                format!("{} {} returned {}", method.as_str(), url, status),
                Some(status.as_u16()),
            ));
        }
        Ok(())
    }
}

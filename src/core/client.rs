use crate::domain::model::{ApiRequest, ApiResponse, Method};
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, Site24x7Error};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// `Authorization` header value for an access token.
pub fn auth_header_value(access_token: &str) -> String {
    format!("Zoho-oauthtoken {}", access_token)
}

/// Authenticated client for the Site24x7 resource API.
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
            timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait::async_trait]
impl Fetcher for ApiClient {
    async fn fetch(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url(&request.path);

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &url)
            .header(ACCEPT, request.accept_header())
            .header(AUTHORIZATION, auth_header_value(&self.access_token))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .timeout(self.timeout);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        let body = match &request.body {
            Some(body) => serde_json::to_string(body)?,
            None => String::new(),
        };
        tracing::debug!(
            "Request: {} {} query={:?} accept={:?} body={}",
            request.method.as_str(),
            url,
            request.query,
            request.accept_header(),
            body
        );
        if request.body.is_some() {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("Response: {} {} -> {}: {}", request.method.as_str(), url, status, text);

        interpret_response(status.as_u16(), &text)
    }
}

/// Maps a raw HTTP status and body onto an envelope or a typed error.
pub fn interpret_response(status: u16, body: &str) -> Result<ApiResponse> {
    let envelope = if body.trim().is_empty() {
        Ok(ApiResponse::default())
    } else {
        serde_json::from_str::<ApiResponse>(body)
    };

    let message = match &envelope {
        Ok(res) if !res.message.is_empty() => res.message.clone(),
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown error")
            .to_string(),
    };

    match status {
        200..=299 => envelope.map_err(|_| Site24x7Error::ApiError {
            status,
            code: 0,
            message,
        }),
        401 | 403 => Err(Site24x7Error::AuthenticationError { message }),
        404 => Err(Site24x7Error::not_found(message)),
        _ => Err(Site24x7Error::ApiError {
            status,
            code: envelope.map(|res| res.code).unwrap_or_default(),
            message,
        }),
    }
}

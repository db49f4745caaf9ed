use crate::datastructures::{
    client::{ApiRequest, Transport},
    config::Config,
    error::ApiError,
};
use async_trait::async_trait;
use log::debug;
use reqwest::{
    header::{HeaderValue, ACCEPT},
    Client as HttpClient, StatusCode,
};
use serde_json::Value;
use url::Url;

/// Appends `path` to the base URL. A path prefix on the base (e.g. `/api`)
/// is kept, which `Url::join` would drop for absolute paths.
fn endpoint_url(base_url: &str, path: &str) -> Result<Url, ApiError> {
    let base = base_url.trim_end_matches('/');
    let url = if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };
    Ok(Url::parse(&url)?)
}

/// Backend errors look like `{"detail": "..."}`. Falls back to the raw body,
/// then to the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        match value.get("detail") {
            Some(Value::String(detail)) => return detail.clone(),
            Some(detail) => return detail.to_string(),
            None => {}
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("Unknown error")
        .to_string()
}

#[derive(Clone)]
pub struct HttpTransport {
    http_client: HttpClient,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_client(config, HttpClient::new())
    }

    /// Uses a preconfigured `reqwest::Client` (proxies, timeouts, TLS roots).
    pub fn with_client(config: &Config, http_client: HttpClient) -> Result<Self, ApiError> {
        Url::parse(&config.api_base_url)?;

        Ok(HttpTransport {
            http_client,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = endpoint_url(&self.base_url, &request.path)?;
        debug!("{} {}", request.method, url);

        let mut builder = self
            .http_client
            .request(request.method.clone(), url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers(request.headers);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(status, &text);
            debug!("{} {} failed with {}: {}", request.method, request.path, status, message);
            return Err(ApiError::Status { status, message });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_concatenates_path() {
        let url = endpoint_url("http://localhost:8000", "/orders/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/orders/");
    }

    #[test]
    fn endpoint_url_keeps_base_prefix_and_trims_slash() {
        let url = endpoint_url("https://proticket.example/api/", "/orders/user/u1").unwrap();
        assert_eq!(url.as_str(), "https://proticket.example/api/orders/user/u1");
    }

    #[test]
    fn endpoint_url_rejects_garbage_base() {
        assert!(matches!(
            endpoint_url("not a url", "/orders/"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn error_message_prefers_detail() {
        let message = error_message(StatusCode::NOT_FOUND, r#"{"detail":"Order not found"}"#);
        assert_eq!(message, "Order not found");
    }

    #[test]
    fn error_message_stringifies_structured_detail() {
        let message = error_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"loc":["body","quantity"],"msg":"field required"}]}"#,
        );
        assert!(message.contains("field required"));
    }

    #[test]
    fn error_message_falls_back_to_body_then_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down"
        );
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
    }

    #[test]
    fn with_client_keeps_configured_base_url() {
        let config = Config::builder()
            .api_base_url("https://proticket.example/api")
            .build();
        let transport = HttpTransport::with_client(&config, HttpClient::new()).unwrap();
        assert_eq!(transport.base_url(), "https://proticket.example/api");
    }

    #[test]
    fn new_rejects_invalid_base_url() {
        let config = Config::builder().api_base_url("::nope").build();
        assert!(matches!(
            HttpTransport::new(&config),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}

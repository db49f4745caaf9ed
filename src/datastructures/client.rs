use super::error::ApiError;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

/// One request against the backend, relative to the configured base URL.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path starting with `/`, e.g. `/orders/user/u1`.
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        ApiRequest {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sets `Authorization: Bearer <access_token>`, token sent as given.
    pub fn bearer(mut self, access_token: &str) -> Result<Self, ApiError> {
        let mut value: HeaderValue = format!("Bearer {access_token}").parse()?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Sends a request and resolves to the parsed JSON body, or fails.
///
/// Implementations own base-URL resolution, status classification and
/// serialization. Callers never retry or translate what comes back.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        (**self).send(request).await
    }
}

/// Joins `segments` into an absolute path, percent-encoding each one so a
/// `/`, `?` or `#` inside an id stays part of that segment.
pub fn encoded_path(segments: &[&str]) -> Result<String, ApiError> {
    let mut url = Url::parse("http://localhost/")?;
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    Ok(url.path().to_string())
}

/// Sends `request` and decodes the response into `T`.
pub async fn api_request<T, R>(transport: &R, request: ApiRequest) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    R: Transport + ?Sized,
{
    let value = transport.send(request).await?;
    Ok(serde_json::from_value(value)?)
}

use crate::datastructures::{
    client::{api_request, ApiRequest, Transport},
    config::Config,
    error::ApiError,
    event::{DeleteEventResponse, Event, EventPayload},
};
use crate::http::HttpTransport;

fn with_optional_bearer(
    request: ApiRequest,
    access_token: Option<&str>,
) -> Result<ApiRequest, ApiError> {
    match access_token {
        Some(token) => request.bearer(token),
        None => Ok(request),
    }
}

/// Event catalogue. Reads are public; writes pass the caller's token so the
/// backend can record or check the event's creator.
#[derive(Clone)]
pub struct EventsService<T> {
    transport: T,
}

impl EventsService<HttpTransport> {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> EventsService<T> {
    pub fn new(transport: T) -> Self {
        EventsService { transport }
    }

    pub async fn list(&self) -> Result<Vec<Event>, ApiError> {
        api_request(&self.transport, ApiRequest::get("/events/")).await
    }

    pub async fn get_by_id(&self, event_id: i64) -> Result<Event, ApiError> {
        api_request(&self.transport, ApiRequest::get(format!("/events/{event_id}"))).await
    }

    pub async fn create(
        &self,
        payload: &EventPayload,
        access_token: Option<&str>,
    ) -> Result<Event, ApiError> {
        let request = with_optional_bearer(ApiRequest::post("/events/"), access_token)?.json(payload)?;
        api_request(&self.transport, request).await
    }

    /// Partial update; only the fields present in `payload` change.
    /// A 403 means the token does not belong to the event's creator.
    pub async fn update(
        &self,
        event_id: i64,
        payload: &EventPayload,
        access_token: Option<&str>,
    ) -> Result<Event, ApiError> {
        let request =
            with_optional_bearer(ApiRequest::put(format!("/events/{event_id}")), access_token)?
                .json(payload)?;
        api_request(&self.transport, request).await
    }

    pub async fn delete(
        &self,
        event_id: i64,
        access_token: Option<&str>,
    ) -> Result<DeleteEventResponse, ApiError> {
        let request =
            with_optional_bearer(ApiRequest::delete(format!("/events/{event_id}")), access_token)?;
        api_request(&self.transport, request).await
    }
}

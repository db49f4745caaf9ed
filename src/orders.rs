use crate::datastructures::{
    client::{api_request, encoded_path, ApiRequest, Transport},
    config::Config,
    error::ApiError,
    order::{CreateOrderData, Order},
};
use crate::http::HttpTransport;

/// Order placement and lookup. Every call is a single authenticated round trip.
#[derive(Clone)]
pub struct OrdersService<T> {
    transport: T,
}

impl OrdersService<HttpTransport> {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> OrdersService<T> {
    pub fn new(transport: T) -> Self {
        OrdersService { transport }
    }

    /// `POST /orders/`. Validation and inventory failures come back as
    /// `ApiError::Status` untouched.
    pub async fn create(
        &self,
        order_data: &CreateOrderData,
        access_token: &str,
    ) -> Result<Order, ApiError> {
        let request = ApiRequest::post("/orders/")
            .bearer(access_token)?
            .json(order_data)?;
        api_request(&self.transport, request).await
    }

    /// `GET /orders/{order_id}`
    pub async fn get_by_id(&self, order_id: i64, access_token: &str) -> Result<Order, ApiError> {
        let request = ApiRequest::get(format!("/orders/{order_id}")).bearer(access_token)?;
        api_request(&self.transport, request).await
    }

    /// `GET /orders/user/{user_id}`, with `user_id` percent-encoded.
    /// Ordering is whatever the backend returns.
    pub async fn get_by_user(
        &self,
        user_id: &str,
        access_token: &str,
    ) -> Result<Vec<Order>, ApiError> {
        let path = encoded_path(&["orders", "user", user_id])?;
        let request = ApiRequest::get(path).bearer(access_token)?;
        api_request(&self.transport, request).await
    }
}

//! Async client for the ProTicket backend: order placement and lookup, plus
//! the event catalogue.
//!
//! ```no_run
//! use proticket_client::{Config, CreateOrderData, OrdersService};
//!
//! # async fn run() -> Result<(), proticket_client::ApiError> {
//! let orders = OrdersService::from_config(&Config::from_env())?;
//! let order = orders.create(&CreateOrderData::new(3, 2), "access-token").await?;
//! println!("order {} is {}", order.id_order, order.status);
//! # Ok(())
//! # }
//! ```

pub mod datastructures;
pub mod events;
pub mod http;
pub mod orders;

pub use datastructures::{
    client::{api_request, ApiRequest, Transport},
    config::Config,
    error::ApiError,
    event::{DeleteEventResponse, Event, EventPayload},
    order::{CreateOrderData, Order},
};
pub use events::EventsService;
pub use http::HttpTransport;
pub use orders::OrdersService;

use serde::{Deserialize, Serialize};

/// An order as returned by the backend after creation or lookup.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Order {
    pub id_order: i64,
    pub buyer_id: String,
    pub event_id: i64,
    pub quantity: u32,
    pub total_price: f64,
    /// Lifecycle label, e.g. "pending" or "paid". Transitions are owned by the backend.
    pub status: String,
    pub created_at: String,
}

// Payload for placing an order
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateOrderData {
    pub event_id: i64,
    pub quantity: u32,
}

impl CreateOrderData {
    pub fn new(event_id: i64, quantity: u32) -> Self {
        CreateOrderData { event_id, quantity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_reads_backend_shape() {
        let order: Order = serde_json::from_value(json!({
            "id_order": 7,
            "buyer_id": "u1",
            "event_id": 3,
            "quantity": 2,
            "total_price": 90.5,
            "status": "pending",
            "created_at": "2025-05-01T10:00:00"
        }))
        .unwrap();

        assert_eq!(order.id_order, 7);
        assert_eq!(order.buyer_id, "u1");
        assert_eq!(order.total_price, 90.5);
    }

    #[test]
    fn create_order_data_serializes_only_event_and_quantity() {
        let body = serde_json::to_value(CreateOrderData::new(3, 2)).unwrap();
        assert_eq!(body, json!({ "event_id": 3, "quantity": 2 }));
    }
}

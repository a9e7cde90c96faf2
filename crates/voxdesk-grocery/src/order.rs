//! Placed orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use voxdesk_progress::Tracked;
use voxdesk_types::{
    STATUS_CONFIRMED, STATUS_DELIVERED, STATUS_OUT_FOR_DELIVERY, STATUS_PREPARING,
    STATUS_RECEIVED,
};

/// One line of a placed order, priced at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub qty: u32,
    /// Unit price at the time of the order.
    pub price: f64,
}

/// A checked-out cart, persisted as one JSON document per order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    /// Placement time, ISO-8601 UTC with a trailing `Z`.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total: f64,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    STATUS_RECEIVED.to_string()
}

impl Order {
    /// Creates a freshly received order with a new id.
    pub fn new(items: Vec<OrderItem>, now: DateTime<Utc>) -> Self {
        let total = items.iter().map(|i| i.price * f64::from(i.qty)).sum();
        Self {
            order_id: Self::generate_id(),
            timestamp: Some(format_timestamp(now)),
            items,
            total,
            status: default_status(),
        }
    }

    /// `order_` followed by six lowercase hex characters.
    pub fn generate_id() -> String {
        let hex = uuid::Uuid::new_v4().simple().to_string();
        format!("order_{}", &hex[..6])
    }

    /// Customer-facing sentence for the current status.
    pub fn status_message(&self) -> String {
        status_message(&self.status)
    }
}

impl Tracked for Order {
    fn id(&self) -> &str {
        &self.order_id
    }

    fn created_at(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn set_status(&mut self, status: String) {
        self.status = status;
    }
}

/// Customer-facing sentence for an order status.
pub fn status_message(status: &str) -> String {
    match status {
        STATUS_RECEIVED => "Your order has been received.".to_string(),
        STATUS_CONFIRMED => "Your order is confirmed and being prepared.".to_string(),
        STATUS_PREPARING => "Your order is currently being prepared.".to_string(),
        STATUS_OUT_FOR_DELIVERY => "Your order is out for delivery.".to_string(),
        STATUS_DELIVERED => "Your order has been delivered!".to_string(),
        other => format!("Status: {other}"),
    }
}

fn format_timestamp(now: DateTime<Utc>) -> String {
    format!("{}Z", now.naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f"))
}

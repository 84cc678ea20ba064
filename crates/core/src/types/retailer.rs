//! Retailer and order-history records.
//!
//! Field names follow the upstream backend's JSON (camelCase, with the
//! `retailerID` spelling quirk preserved). Monetary amounts use
//! [`rust_decimal::Decimal`]; the upstream serializes them as JSON strings
//! or bare numbers, both of which `Decimal` accepts.
//!
//! Nothing here is validated or deduplicated: records are ephemeral, built
//! fresh from each `/retailersData` fetch and discarded after rendering.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PhoneNumber;

/// A lottery retailer with contact details and full order history.
///
/// Identity is the phone number (implied by the upstream, not enforced).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retailer {
    /// Contact phone number, also the retailer's implied identity.
    pub phone: PhoneNumber,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Postal address as a single display string.
    pub address: String,
    /// Rating as a display string (e.g. "4.5").
    pub rating: String,
    /// Optional biography text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Order history, most entries first as delivered by the backend.
    #[serde(default)]
    pub order_history: Vec<OrderHistoryItem>,
}

/// One batch of orders placed on a given date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryItem {
    /// The orders contained in this batch.
    #[serde(default)]
    pub orders: Vec<OrderItem>,
    /// When the batch was placed.
    pub order_date: DateTime<Utc>,
    /// Monetary total for the batch, precomputed by the backend.
    ///
    /// Aggregation trusts this field; it is never recomputed from the
    /// nested order prices.
    pub total_amount: Decimal,
}

/// A single lottery order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Opaque order identifier assigned by the backend.
    pub id: String,
    /// Phone-keyed reference back to the owning retailer.
    #[serde(rename = "retailerID")]
    pub retailer_id: String,
    /// Name of the lottery this order is for.
    pub lottery_name: String,
    /// Draw date of the lottery.
    pub draw_date: DateTime<Utc>,
    /// Optional type tag (e.g. "bumper").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Price of this order.
    pub price: Decimal,
    /// Ticket lines sold under this order.
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

/// A ticket line: a category label and how many tickets of it were sold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket category label (e.g. "A").
    pub ticket: String,
    /// Number of tickets sold in this category.
    pub count: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "phone": "+919876543210",
            "name": "Lakshmi Agencies",
            "email": "lakshmi@example.com",
            "address": "12 MG Road, Bengaluru",
            "rating": "4.5",
            "about": "Corner shop since 1998",
            "orderHistory": [
                {
                    "orderDate": "2025-07-01T10:30:00Z",
                    "totalAmount": 100,
                    "orders": [
                        {
                            "id": "ord-1",
                            "retailerID": "+919876543210",
                            "lotteryName": "Dear Morning",
                            "drawDate": "2025-07-05T14:00:00Z",
                            "type": "weekly",
                            "price": 100,
                            "tickets": [
                                { "ticket": "A", "count": 2 },
                                { "ticket": "B", "count": 2 }
                            ]
                        }
                    ]
                }
            ]
        }"#
    }

    #[test]
    fn test_deserializes_wire_shape() {
        let retailer: Retailer = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(retailer.name, "Lakshmi Agencies");
        assert_eq!(retailer.phone.as_str(), "+919876543210");
        assert_eq!(retailer.order_history.len(), 1);

        let history = retailer.order_history.first().unwrap();
        assert_eq!(history.total_amount, Decimal::from(100));

        let order = history.orders.first().unwrap();
        assert_eq!(order.retailer_id, "+919876543210");
        assert_eq!(order.kind.as_deref(), Some("weekly"));
        assert_eq!(order.tickets.len(), 2);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "phone": "+15550001111",
            "name": "Corner Lotto",
            "email": "corner@example.com",
            "address": "1 Main St",
            "rating": "3.9"
        }"#;
        let retailer: Retailer = serde_json::from_str(json).unwrap();
        assert!(retailer.about.is_none());
        assert!(retailer.order_history.is_empty());
    }

    #[test]
    fn test_serializes_camel_case_keys() {
        let retailer: Retailer = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&retailer).unwrap();
        assert!(value.get("orderHistory").is_some());

        let order = value
            .pointer("/orderHistory/0/orders/0")
            .cloned()
            .unwrap();
        assert!(order.get("retailerID").is_some());
        assert!(order.get("lotteryName").is_some());
        assert!(order.get("type").is_some());
    }
}

//! Order payload sent to the nursery backend at checkout.

use rust_decimal::Decimal;
use serde::Serialize;

use super::cart::CartLine;
use super::session::Customer;

/// The order as posted to `POST /orders/create.php`.
///
/// The backend contract is assumed, not verified; this is the shape the
/// future server is expected to accept.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub items: Vec<CartLine>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
}

#[cfg(test)]
mod tests {
    use greenlife_core::{Email, ProductId};

    use super::*;

    #[test]
    fn test_payload_shape() {
        let payload = OrderPayload {
            items: vec![CartLine {
                product_id: ProductId::new(1),
                name: "Monstera Deliciosa".to_owned(),
                unit_price: Decimal::new(3599, 2),
                image_url: "https://img.example/monstera.jpg".to_owned(),
                quantity: 2,
            }],
            subtotal: Decimal::new(7198, 2),
            shipping: Decimal::new(100, 0),
            total: Decimal::new(17198, 2),
            customer: None,
        };

        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(value["items"][0]["productId"], 1);
        assert!(value.get("customer").is_none());

        let with_customer = OrderPayload {
            customer: Some(Customer {
                name: "Maya".to_owned(),
                email: Email::parse("maya@example.com").expect("valid email"),
            }),
            ..payload
        };
        let value = serde_json::to_value(&with_customer).expect("serialize");
        assert_eq!(value["customer"]["email"], "maya@example.com");
    }
}

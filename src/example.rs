//! Canned example endpoint, used by `--example` and in tests.

use crate::parser::EndpointSample;
use serde_json::json;

/// An order-creation endpoint with realistic request and response payloads.
pub fn sample() -> EndpointSample {
    EndpointSample {
        path: "/api/v1/orders".to_string(),
        method: "POST".to_string(),
        description: "Create a new order in the system".to_string(),
        request: json!({
            "customerId": "CUST001",
            "items": [
                {
                    "productId": "PROD001",
                    "quantity": 2,
                    "price": 39900
                }
            ],
            "shippingAddress": {
                "street": "123 Main St",
                "city": "Bangkok",
                "postalCode": "10110",
                "country": "Thailand"
            },
            "paymentMethod": "CREDIT_CARD"
        }),
        response: json!({
            "id": "ORD001",
            "orderNumber": "POS2024020001",
            "status": "PENDING",
            "customerId": "CUST001",
            "total": 79800,
            "items": [
                {
                    "productId": "PROD001",
                    "quantity": 2,
                    "price": 39900,
                    "subtotal": 79800
                }
            ],
            "shippingAddress": {
                "street": "123 Main St",
                "city": "Bangkok",
                "postalCode": "10110",
                "country": "Thailand"
            },
            "paymentMethod": "CREDIT_CARD",
            "paymentStatus": "PENDING",
            "createdAt": "2024-02-04T15:30:00Z",
            "estimatedDeliveryTime": "2024-02-04T16:15:00Z"
        }),
        notes: "- Orders created after 6 PM will be processed the next business day\n\
                - Payment must be completed within 30 minutes\n\
                - Free shipping for orders over 50,000 THB"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::sample::parse;

    #[test]
    fn example_expands_to_one_record() {
        let records = parse(&sample());
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.params.len(), 4);
        assert_eq!(rec.params[1].type_tag, "array<object>");
        assert_eq!(rec.params[2].type_tag, "object");
        assert_eq!(rec.returns.as_ref().unwrap().fields.len(), 11);
        assert_eq!(rec.note_lines().len(), 3);
    }
}

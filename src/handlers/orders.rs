use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::placement;
use crate::validation;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// One requested item-code/quantity pair. Fields are optional so that a
/// missing value is reported by the validator with its rule message rather
/// than failing JSON decoding.
#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderLineRequest {
    pub code: Option<String>,
    pub qty: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub customer_id: Option<String>,
    pub order_details: Option<Vec<OrderLineRequest>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i32,
    /// ISO date of the day the order was placed, e.g. "2026-08-06".
    pub order_date: NaiveDate,
    pub customer_id: String,
    pub customer_name: String,
    /// Decimal total as a string to avoid floating-point issues, e.g. "250.00".
    pub total: String,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Validates the payload, checks the customer and the stock of every item,
/// then records the order, its details and the stock decrements in a single
/// database transaction. The response echoes the generated order id, the
/// order date and the decimal total.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Malformed payload or validation failure"),
        (status = 404, description = "Unknown customer or item"),
        (status = 409, description = "Insufficient stock"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    pool: web::Data<DbPool>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order = validation::validate(body.into_inner())?;

    let placed = web::block(move || {
        let mut conn = pool.get()?;
        placement::place_order(&mut conn, &order)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    log::info!(
        "placed order {} for customer {} (total {})",
        placed.order_id,
        placed.customer_id,
        placed.total
    );

    Ok(HttpResponse::Created().json(OrderResponse {
        order_id: placed.order_id,
        order_date: placed.order_date,
        customer_id: placed.customer_id,
        customer_name: placed.customer_name,
        total: placed.total.to_string(),
    }))
}

/// Catch-all for anything under /orders other than the collection root.
pub async fn not_implemented() -> HttpResponse {
    HttpResponse::NotImplemented().json(json!({ "error": "not implemented" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_decodes_from_camel_case_payload() {
        let req: PlaceOrderRequest = serde_json::from_str(
            r#"{"customerId":"C001","orderDetails":[{"code":"I001","qty":2}]}"#,
        )
        .expect("decode failed");

        assert_eq!(req.customer_id.as_deref(), Some("C001"));
        let details = req.order_details.expect("details missing");
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].code.as_deref(), Some("I001"));
        assert_eq!(details[0].qty, Some(2));
    }

    #[test]
    fn absent_fields_decode_to_none_for_the_validator() {
        let req: PlaceOrderRequest = serde_json::from_str(r#"{}"#).expect("decode failed");
        assert!(req.customer_id.is_none());
        assert!(req.order_details.is_none());
    }

    #[test]
    fn response_serializes_with_wire_field_names() {
        let resp = OrderResponse {
            order_id: 1,
            order_date: NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date"),
            customer_id: "C001".to_string(),
            customer_name: "Tharindu".to_string(),
            total: "250.00".to_string(),
        };
        let value = serde_json::to_value(&resp).expect("encode failed");

        assert_eq!(value["orderId"], 1);
        assert_eq!(value["orderDate"], "2026-08-06");
        assert_eq!(value["customerId"], "C001");
        assert_eq!(value["customerName"], "Tharindu");
        assert_eq!(value["total"], "250.00");
    }
}

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::AppError;
use crate::handlers::orders::PlaceOrderRequest;

/// An order request that passed every structural and semantic check.
/// Immutable from here on; the transaction executor consumes it as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    pub customer_id: String,
    pub lines: Vec<ValidatedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLine {
    pub code: String,
    pub qty: i32,
}

fn customer_id_pattern() -> &'static Regex {
    static CUSTOMER_ID: OnceLock<Regex> = OnceLock::new();
    CUSTOMER_ID.get_or_init(|| Regex::new(r"^C\d{3}$").expect("valid regex"))
}

fn item_code_pattern() -> &'static Regex {
    static ITEM_CODE: OnceLock<Regex> = OnceLock::new();
    ITEM_CODE.get_or_init(|| Regex::new(r"^I\d{3}$").expect("valid regex"))
}

/// Validate a decoded order payload. Pure; performs no I/O.
///
/// Rules run in a fixed order and the first violation wins:
/// 1. customer id present and shaped `C` + three digits
/// 2. order details present and non-empty
/// 3. no line missing its item code or qty (checked across all lines)
/// 4. every code shaped `I` + three digits, every qty positive
pub fn validate(req: PlaceOrderRequest) -> Result<ValidatedOrder, AppError> {
    let customer_id = match req.customer_id {
        Some(id) if customer_id_pattern().is_match(&id) => id,
        _ => {
            return Err(AppError::Validation(
                "customer id is empty or invalid".to_string(),
            ))
        }
    };

    let details = match req.order_details {
        Some(details) if !details.is_empty() => details,
        _ => {
            return Err(AppError::Validation(
                "order details are empty or missing".to_string(),
            ))
        }
    };

    let mut pairs = Vec::with_capacity(details.len());
    for line in &details {
        match (line.code.as_deref(), line.qty) {
            (Some(code), Some(qty)) => pairs.push((code, qty)),
            _ => {
                return Err(AppError::Validation(
                    "null values are not allowed in order details".to_string(),
                ))
            }
        }
    }

    let mut lines = Vec::with_capacity(pairs.len());
    for (code, qty) in pairs {
        if !item_code_pattern().is_match(code) || qty <= 0 {
            return Err(AppError::Validation(
                "either an item code or qty is invalid".to_string(),
            ));
        }
        lines.push(ValidatedLine {
            code: code.to_string(),
            qty,
        });
    }

    Ok(ValidatedOrder { customer_id, lines })
}

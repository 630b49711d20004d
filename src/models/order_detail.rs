use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::order_details;

/// One line of a placed order. `unit_price` is the item's price at the
/// moment the order was placed, never recomputed afterwards.
#[derive(
    Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Insertable, Associations,
)]
#[diesel(table_name = order_details)]
#[diesel(belongs_to(crate::models::order::Order))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderDetail {
    pub order_id: i32,
    pub item_code: String,
    pub qty: i32,
    pub unit_price: BigDecimal,
}

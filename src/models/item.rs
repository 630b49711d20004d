use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::items;

/// Stock row. `qty` is decremented as part of order placement; `unit_price`
/// is the price captured onto order details at placement time.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Insertable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Item {
    pub code: String,
    pub qty: i32,
    pub unit_price: BigDecimal,
}

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::customers;

/// Reference entity; order placement only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Insertable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Customer {
    pub id: String,
    pub name: String,
}

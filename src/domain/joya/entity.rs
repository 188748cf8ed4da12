use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single row of the `inventario` catalog table.
///
/// The service exposes a read-only surface: rows are owned by the database and
/// never mutated here. Column names keep the Spanish schema of the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Joya {
    pub id: i32,
    pub nombre: String,
    pub categoria: String,
    pub metal: String,
    pub precio: Decimal,
    pub stock: i32,
}

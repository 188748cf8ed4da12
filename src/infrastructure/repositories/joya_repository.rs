//! Read-only queries against the `inventario` table.
//!
//! Identifier positions (the ORDER BY column and direction) are spliced only from the
//! closed [`JoyaColumn`]/[`SortDirection`] enums; every value — limit, offset, filter
//! bounds — is a bound parameter. Nothing user-controlled is ever concatenated into
//! query text.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::domain::{
    catalog::{filters::JoyaFilters, order_by::OrderBy, pagination::PageSpec},
    joya::{entity::Joya, errors::DomainError},
};

const SELECT_COLUMNS: &str = "SELECT id, nombre, categoria, metal, precio, stock FROM inventario";

pub struct JoyaRepository {
    pool: PgPool,
}

impl JoyaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Total rows in the table, independent of filters and pagination.
    pub async fn count_all(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inventario")
            .fetch_one(&self.pool)
            .await
            .map_err(data_store_error)
    }

    /// One page of the catalog, sorted per `order`.
    pub async fn list(&self, order: OrderBy, page: PageSpec) -> Result<Vec<Joya>, DomainError> {
        let mut qb = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
        qb.push(" ORDER BY ");
        qb.push(order.column.as_str());
        qb.push(" ");
        qb.push(order.direction.as_str());
        qb.push(" LIMIT ");
        qb.push_bind(page.limit);
        qb.push(" OFFSET ");
        qb.push_bind(page.offset());

        debug!(
            column = order.column.as_str(),
            direction = order.direction.as_str(),
            limit = page.limit,
            offset = page.offset(),
            "Executing catalog page query"
        );

        qb.build_query_as::<Joya>()
            .fetch_all(&self.pool)
            .await
            .map_err(data_store_error)
    }

    /// Look up a single row by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Joya>, DomainError> {
        debug!(id, "Executing catalog lookup by id");

        sqlx::query_as::<_, Joya>(
            "SELECT id, nombre, categoria, metal, precio, stock FROM inventario WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(data_store_error)
    }

    /// All rows matching the given predicates, in primary-key order.
    pub async fn filter(&self, filters: &JoyaFilters) -> Result<Vec<Joya>, DomainError> {
        let mut qb = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
        apply_filters(&mut qb, filters);
        qb.push(" ORDER BY id ASC");

        debug!(
            has_precio_min = filters.precio_min.is_some(),
            has_precio_max = filters.precio_max.is_some(),
            has_categoria = filters.categoria.is_some(),
            has_metal = filters.metal.is_some(),
            "Executing catalog filter query"
        );

        qb.build_query_as::<Joya>()
            .fetch_all(&self.pool)
            .await
            .map_err(data_store_error)
    }
}

/// Append WHERE clauses for each present predicate, binding every value.
fn apply_filters(qb: &mut QueryBuilder<'_, Postgres>, filters: &JoyaFilters) {
    let mut has_where = false;
    let mut clause = |qb: &mut QueryBuilder<'_, Postgres>| {
        if has_where {
            qb.push(" AND ");
        } else {
            qb.push(" WHERE ");
            has_where = true;
        }
    };

    if let Some(min) = filters.precio_min {
        clause(qb);
        qb.push("precio >= ").push_bind(min);
    }
    if let Some(max) = filters.precio_max {
        clause(qb);
        qb.push("precio <= ").push_bind(max);
    }
    if let Some(categoria) = &filters.categoria {
        clause(qb);
        qb.push("categoria = ").push_bind(categoria.clone());
    }
    if let Some(metal) = &filters.metal {
        clause(qb);
        qb.push("metal = ").push_bind(metal.clone());
    }
}

fn data_store_error(e: sqlx::Error) -> DomainError {
    DomainError::DataStore(e.to_string())
}

//! Parsing of the compact `order_by` directive (`"<column>_<DIRECTION>"`, e.g. `precio_DESC`).
//!
//! The column whitelist is a closed enum rather than a string set: only enum variants can
//! ever reach the SQL identifier position, so an unlisted column name cannot be spliced
//! into a query by construction. Malformed directives never error — they silently degrade
//! to the defaults, which is the documented leniency of this endpoint (unlike pagination
//! and price bounds, which are strict).

use std::fmt;

/// Sortable columns of the `inventario` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoyaColumn {
    #[default]
    Id,
    Nombre,
    Categoria,
    Metal,
    Precio,
    Stock,
}

impl JoyaColumn {
    /// The SQL identifier for this column. Safe to splice: callers can only
    /// obtain it from a variant of this enum.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Nombre => "nombre",
            Self::Categoria => "categoria",
            Self::Metal => "metal",
            Self::Precio => "precio",
            Self::Stock => "stock",
        }
    }

    fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "nombre" => Some(Self::Nombre),
            "categoria" => Some(Self::Categoria),
            "metal" => Some(Self::Metal),
            "precio" => Some(Self::Precio),
            "stock" => Some(Self::Stock),
            _ => None,
        }
    }
}

impl fmt::Display for JoyaColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A validated column/direction pair, constructed per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderBy {
    pub column: JoyaColumn,
    pub direction: SortDirection,
}

impl OrderBy {
    /// Parse an `order_by` directive, falling back to `default_column` ascending.
    ///
    /// Split on the first `_` into `(column, direction)`; an unrecognized column
    /// falls back to `default_column`, and the direction is `DESC` only when the
    /// second part equals `"DESC"` case-insensitively. Everything else is `ASC`.
    pub fn parse(input: Option<&str>, default_column: JoyaColumn) -> Self {
        let Some(input) = input else {
            return Self {
                column: default_column,
                direction: SortDirection::Asc,
            };
        };

        // Only the segment right after the first `_` names the direction;
        // anything after a second `_` is ignored.
        let (raw_column, raw_direction) = match input.split_once('_') {
            Some((column, rest)) => (column, rest.split('_').next()),
            None => (input, None),
        };

        let column = JoyaColumn::from_raw(raw_column).unwrap_or(default_column);
        let direction = match raw_direction {
            Some(d) if d.eq_ignore_ascii_case("DESC") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };

        Self { column, direction }
    }
}

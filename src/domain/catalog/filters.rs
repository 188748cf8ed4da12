//! Normalization of the `/joyas/filtros` query parameters.
//!
//! Price bounds are parsed as non-negative decimals and rejected when malformed or
//! inverted. `categoria` and `metal` are exact-match, case-sensitive predicates; a
//! key that is absent (or blank after trimming) imposes no predicate at all.

use rust_decimal::Decimal;

use crate::domain::joya::errors::DomainError;

/// Validated filter predicates. Every field optional; `None` means unconstrained.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JoyaFilters {
    pub precio_min: Option<Decimal>,
    pub precio_max: Option<Decimal>,
    pub categoria: Option<String>,
    pub metal: Option<String>,
}

impl JoyaFilters {
    /// Validate raw query values into a predicate set.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when a price bound is unparseable, negative, or when
    /// `precio_min > precio_max`.
    pub fn normalize(
        precio_min: Option<&str>,
        precio_max: Option<&str>,
        categoria: Option<&str>,
        metal: Option<&str>,
    ) -> Result<Self, DomainError> {
        let precio_min = parse_price("precio_min", precio_min)?;
        let precio_max = parse_price("precio_max", precio_max)?;

        if let (Some(min), Some(max)) = (precio_min, precio_max) {
            if min > max {
                return Err(DomainError::InvalidParameter(
                    "precio_min must not exceed precio_max".to_string(),
                ));
            }
        }

        Ok(Self {
            precio_min,
            precio_max,
            categoria: non_blank(categoria),
            metal: non_blank(metal),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.precio_min.is_none()
            && self.precio_max.is_none()
            && self.categoria.is_none()
            && self.metal.is_none()
    }
}

fn parse_price(name: &str, raw: Option<&str>) -> Result<Option<Decimal>, DomainError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let value: Decimal = raw.parse().map_err(|_| {
        DomainError::InvalidParameter(format!("{name} must be a decimal number"))
    })?;
    if value.is_sign_negative() {
        return Err(DomainError::InvalidParameter(format!(
            "{name} must not be negative"
        )));
    }
    Ok(Some(value))
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_impose_no_predicate() {
        let filters = JoyaFilters::normalize(None, None, None, None).unwrap();
        assert!(filters.is_empty());
    }

    #[test]
    fn price_range_parses_as_decimals() {
        let filters = JoyaFilters::normalize(Some("10"), Some("20.50"), None, None).unwrap();
        assert_eq!(filters.precio_min, Some(Decimal::new(10, 0)));
        assert_eq!(filters.precio_max, Some(Decimal::new(2050, 2)));
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        assert!(JoyaFilters::normalize(Some("20"), Some("10"), None, None).is_err());
    }

    #[test]
    fn malformed_or_negative_prices_are_rejected() {
        assert!(JoyaFilters::normalize(Some("cheap"), None, None, None).is_err());
        assert!(JoyaFilters::normalize(None, Some("-5"), None, None).is_err());
    }

    #[test]
    fn blank_strings_are_treated_as_absent() {
        let filters = JoyaFilters::normalize(None, None, Some("  "), Some("")).unwrap();
        assert!(filters.categoria.is_none());
        assert!(filters.metal.is_none());
    }

    #[test]
    fn category_and_metal_are_trimmed_passthrough() {
        let filters =
            JoyaFilters::normalize(None, None, Some(" aros "), Some("oro")).unwrap();
        assert_eq!(filters.categoria.as_deref(), Some("aros"));
        assert_eq!(filters.metal.as_deref(), Some("oro"));
    }
}

//! Page/limit validation and offset arithmetic.
//!
//! Unlike `order_by`, pagination input is strict: a value that is present but not a
//! positive integer is rejected with [`DomainError::InvalidParameter`] instead of being
//! silently corrected. Absent (or empty) values fall back to the configured defaults,
//! and the limit is capped to keep result sets bounded.

use crate::domain::joya::errors::DomainError;

/// Fallback values and the limit ceiling, sourced from [`crate::config::Config`].
#[derive(Debug, Clone, Copy)]
pub struct PageDefaults {
    pub limit: i64,
    pub page: i64,
    pub max_limit: i64,
}

/// A validated limit/page pair. `limit >= 1` and `page >= 1` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub limit: i64,
    pub page: i64,
}

impl PageSpec {
    /// Validate raw `limits`/`page` query values against `defaults`.
    ///
    /// Empty strings are treated as absent. Present values must parse as
    /// integers `>= 1`; `limit` is additionally capped at `defaults.max_limit`.
    pub fn from_raw(
        limits: Option<&str>,
        page: Option<&str>,
        defaults: PageDefaults,
    ) -> Result<Self, DomainError> {
        let limit = parse_positive("limits", limits, defaults.limit)?.min(defaults.max_limit);
        let page = parse_positive("page", page, defaults.page)?;

        // The offset must stay representable: a page number large enough to
        // overflow (page - 1) * limit is out of range, not a valid request.
        if page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(limit))
            .is_none()
        {
            return Err(DomainError::InvalidParameter(
                "page is out of range".to_string(),
            ));
        }

        Ok(Self { limit, page })
    }

    /// Rows to skip: `(page - 1) * limit`. Non-negative by construction.
    pub fn offset(self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn parse_positive(name: &str, raw: Option<&str>, default: i64) -> Result<i64, DomainError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(default);
    };

    let value: i64 = raw
        .parse()
        .map_err(|_| DomainError::InvalidParameter(format!("{name} must be a positive integer")))?;
    if value < 1 {
        return Err(DomainError::InvalidParameter(format!(
            "{name} must be a positive integer"
        )));
    }
    Ok(value)
}

//! Query-string coercion for item listing.
//!
//! Every parameter arrives as an optional string. Anything that does not
//! parse into a usable value falls back to its default instead of failing
//! the request.

/// Page used when `page` is absent or malformed.
pub const DEFAULT_PAGE: usize = 0;

/// Page size used when `limit` is absent, malformed, or not positive.
pub const DEFAULT_LIMIT: usize = 20;

/// Raw `GET /api/items` query parameters.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

/// Typed listing parameters after coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: usize,
    pub limit: usize,
    pub search: String,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: String::new(),
        }
    }
}

impl ListQuery {
    /// Build a query from decoded key/value pairs.
    ///
    /// The first occurrence of each known key wins; unknown keys are ignored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                "search" => &mut query.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Coerce the raw strings into [`ListParams`].
    #[must_use]
    pub fn into_params(self) -> ListParams {
        ListParams {
            page: parse_page(self.page.as_deref()),
            limit: parse_limit(self.limit.as_deref()),
            search: self.search.unwrap_or_default(),
        }
    }
}

/// Parse an unsigned decimal, saturating at `usize::MAX` on overflow.
///
/// Returns `None` unless the trimmed input is a non-empty run of ASCII digits.
fn parse_saturating(raw: &str) -> Option<usize> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse::<usize>().unwrap_or(usize::MAX))
}

/// Parse a page index; negative or non-numeric input yields [`DEFAULT_PAGE`].
#[must_use]
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(parse_saturating).unwrap_or(DEFAULT_PAGE)
}

/// Parse a page size; zero, negative or non-numeric input yields [`DEFAULT_LIMIT`].
#[must_use]
pub fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(parse_saturating)
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_LIMIT)
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;

//! Request DTOs.

use serde::Deserialize;
use validator::Validate;

/// Query parameters for product search.
///
/// The search engines land in later phases, but the parameter contract is
/// validated already so clients get stable 400s.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchQueryParams {
    /// Full-text query string.
    #[validate(length(min = 1, max = 200))]
    pub q: String,
    /// 1-based page number.
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    /// Items per page.
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = SearchQueryParams {
            q: "wireless headphones".to_string(),
            page: default_page(),
            per_page: default_per_page(),
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn empty_query_is_rejected() {
        let params = SearchQueryParams {
            q: String::new(),
            page: 1,
            per_page: 20,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn oversized_page_is_rejected() {
        let params = SearchQueryParams {
            q: "tv".to_string(),
            page: 1,
            per_page: 500,
        };
        assert!(params.validate().is_err());
    }
}

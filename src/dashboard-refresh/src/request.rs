//! Outbound request description.

use std::collections::BTreeMap;

/// Path appended to the base URL for a dashboard refresh.
pub const ISSUES_PATH: &str = "/github/issues";

/// Parameter name the token is sent under.
pub const API_KEY_PARAM: &str = "apiKey";

/// A single outbound call: where it goes and the parameters it carries.
///
/// Built fresh for every refresh and dropped once the call has been issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Full target address, without query string.
    pub target_url: String,

    /// Key/value parameters sent with the call.
    pub parameters: BTreeMap<String, String>,
}

impl RequestSpec {
    /// Builds the request for a dashboard refresh.
    ///
    /// The target is `base_url` followed by [`ISSUES_PATH`], joined as plain
    /// strings. `base_url` is not validated or normalised: an empty base
    /// yields `"/github/issues"` and a trailing slash is kept as-is.
    pub fn dashboard_refresh(base_url: &str, token: &str) -> Self {
        let mut parameters = BTreeMap::new();
        parameters.insert(API_KEY_PARAM.to_string(), token.to_string());

        Self {
            target_url: format!("{base_url}{ISSUES_PATH}"),
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_issues_path() {
        let request = RequestSpec::dashboard_refresh("https://example.com/api", "abc123");

        assert_eq!(request.target_url, "https://example.com/api/github/issues");
        assert_eq!(request.parameters.len(), 1);
        assert_eq!(request.parameters.get("apiKey"), Some(&"abc123".to_string()));
    }

    #[test]
    fn empty_base_is_not_rejected() {
        let request = RequestSpec::dashboard_refresh("", "abc123");
        assert_eq!(request.target_url, "/github/issues");
    }

    #[test]
    fn trailing_slash_is_kept() {
        let request = RequestSpec::dashboard_refresh("https://example.com/", "t");
        assert_eq!(request.target_url, "https://example.com//github/issues");
    }

    #[test]
    fn token_is_passed_through_unmodified() {
        let token = "  a b&c=d/é  ";
        let request = RequestSpec::dashboard_refresh("http://localhost", token);

        assert_eq!(request.parameters.get(API_KEY_PARAM).map(String::as_str), Some(token));
    }
}

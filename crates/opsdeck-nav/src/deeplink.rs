#![forbid(unsafe_code)]

//! Query-string codec connecting the main view to the monitoring view.
//!
//! A deep link carries the selected system's display name and the
//! environment wire name as `?system=..&env=..`, both values
//! percent-encoded. Decoding is total: missing, duplicated, unreadable, or
//! unrecognized input degrades to fixed defaults instead of failing, so a
//! stale bookmark still opens a usable monitoring page.
//!
//! Decoding treats `+` as a space inside values, matching the
//! form-urlencoded query strings this codec interoperates with. Encoding
//! always percent-escapes, so a literal `+` in a system name survives a
//! round trip as `%2B`.
//!
//! # Example
//!
//! ```
//! use opsdeck_catalog::EnvironmentTag;
//! use opsdeck_nav::DeepLink;
//!
//! let link = DeepLink::new("Atlas Telemetry", EnvironmentTag::Staging);
//! let query = link.to_query();
//! assert_eq!(query, "?system=Atlas%20Telemetry&env=staging");
//! assert_eq!(DeepLink::parse(&query), link);
//!
//! // Degraded input never fails, it falls back.
//! let fallback = DeepLink::parse("?env=betamax");
//! assert_eq!(fallback.system, opsdeck_nav::FALLBACK_SYSTEM);
//! assert_eq!(fallback.environment, EnvironmentTag::Production);
//! ```

use opsdeck_catalog::EnvironmentTag;

use crate::selection::Selection;

/// Query parameter carrying the system display name.
pub const PARAM_SYSTEM: &str = "system";
/// Query parameter carrying the environment wire name.
pub const PARAM_ENV: &str = "env";

/// System display name substituted when a query has no usable `system`
/// value. Matches the built-in catalog's first system.
pub const FALLBACK_SYSTEM: &str = "Atlas Telemetry";
/// Environment substituted when a query has no usable `env` value.
pub const FALLBACK_ENVIRONMENT: EnvironmentTag = EnvironmentTag::Production;

/// A monitoring deep link: the labeling context for the monitoring view.
///
/// The system name travels verbatim and is deliberately never checked
/// against the catalog; the monitoring view labels whatever the link
/// carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub system: String,
    pub environment: EnvironmentTag,
}

impl DeepLink {
    #[must_use]
    pub fn new(system: impl Into<String>, environment: EnvironmentTag) -> DeepLink {
        DeepLink {
            system: system.into(),
            environment,
        }
    }

    /// Capture the current selection as a deep link.
    #[must_use]
    pub fn for_selection(selection: &Selection<'_>) -> DeepLink {
        let (system, environment) = selection.current();
        DeepLink::new(system.display_name.clone(), environment)
    }

    /// Encode as `?system=..&env=..` with percent-escaped values.
    #[must_use]
    pub fn to_query(&self) -> String {
        format!(
            "?{PARAM_SYSTEM}={}&{PARAM_ENV}={}",
            urlencoding::encode(&self.system),
            urlencoding::encode(self.environment.as_str()),
        )
    }

    /// Decode a query string. Never fails.
    ///
    /// The leading `?` is optional. Pairs are split on `&` and the first
    /// `=`; unknown keys are ignored; when a key repeats, the first
    /// occurrence wins. A `system` value that is absent, empty, or not
    /// valid UTF-8 after unescaping falls back to [`FALLBACK_SYSTEM`]; an
    /// `env` value that is absent, empty, unreadable, or not a known wire
    /// name falls back to [`FALLBACK_ENVIRONMENT`].
    #[must_use]
    pub fn parse(query: &str) -> DeepLink {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut raw_system: Option<&str> = None;
        let mut raw_env: Option<&str> = None;
        for pair in query.split('&') {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, value),
                None => (pair, ""),
            };
            match key {
                PARAM_SYSTEM if raw_system.is_none() => raw_system = Some(value),
                PARAM_ENV if raw_env.is_none() => raw_env = Some(value),
                _ => {}
            }
        }

        let system = raw_system
            .and_then(decode_value)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| FALLBACK_SYSTEM.to_string());
        let environment = raw_env
            .and_then(decode_value)
            .and_then(|value| EnvironmentTag::parse(&value))
            .unwrap_or(FALLBACK_ENVIRONMENT);

        #[cfg(feature = "tracing")]
        tracing::debug!(system = %system, env = %environment, "deeplink_parse");

        DeepLink { system, environment }
    }
}

/// Decode one query value: `+` means space, then percent-unescape.
///
/// Malformed escapes pass through literally; `None` only when the escaped
/// bytes are not valid UTF-8.
fn decode_value(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => None,
    }
}

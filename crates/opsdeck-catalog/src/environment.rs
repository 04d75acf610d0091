#![forbid(unsafe_code)]

//! Deployment environment vocabulary.
//!
//! Every managed system lists the environments it is deployed to as an
//! ordered subset of this closed set. The first listed environment is the
//! system's default; the selection cursor lands on it whenever the system
//! is selected.

use std::fmt;

use serde::Serialize;

use crate::accent::Accent;

/// A deployment environment a system can be operated in.
///
/// The default tag is [`Production`](EnvironmentTag::Production), which is
/// also the deep-link fallback when a query string carries no usable `env`
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum EnvironmentTag {
    /// Live production traffic.
    #[default]
    #[serde(rename = "prod")]
    Production,
    /// Acceptance and pre-production testing.
    #[serde(rename = "staging")]
    Staging,
    /// Load and stress testing.
    #[serde(rename = "load")]
    LoadTest,
}

impl EnvironmentTag {
    /// All environments in canonical display order.
    pub const ALL: &'static [EnvironmentTag] = &[
        EnvironmentTag::Production,
        EnvironmentTag::Staging,
        EnvironmentTag::LoadTest,
    ];

    /// Stable wire name used by deep links and serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EnvironmentTag::Production => "prod",
            EnvironmentTag::Staging => "staging",
            EnvironmentTag::LoadTest => "load",
        }
    }

    /// Uppercase label shown on environment tabs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            EnvironmentTag::Production => "PROD",
            EnvironmentTag::Staging => "STAGING",
            EnvironmentTag::LoadTest => "LOAD",
        }
    }

    /// Tab emphasis color.
    #[must_use]
    pub const fn accent(self) -> Accent {
        match self {
            EnvironmentTag::Production => Accent::Red,
            EnvironmentTag::Staging => Accent::Purple,
            EnvironmentTag::LoadTest => Accent::Blue,
        }
    }

    /// Parse a wire name back into a tag (ASCII case-insensitive).
    #[must_use]
    pub fn parse(input: &str) -> Option<EnvironmentTag> {
        EnvironmentTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for EnvironmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

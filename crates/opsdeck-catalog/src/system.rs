#![forbid(unsafe_code)]

//! Managed system records and their status vocabulary.

use serde::Serialize;

use crate::accent::Accent;
use crate::environment::EnvironmentTag;

/// Operational importance tier of a managed system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Criticality {
    MissionCritical,
    BusinessCritical,
    #[default]
    Standard,
}

impl Criticality {
    pub const ALL: &'static [Criticality] = &[
        Criticality::MissionCritical,
        Criticality::BusinessCritical,
        Criticality::Standard,
    ];

    /// Badge label shown in system navigation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Criticality::MissionCritical => "Mission critical",
            Criticality::BusinessCritical => "Business critical",
            Criticality::Standard => "Standard",
        }
    }

    /// Badge emphasis color.
    #[must_use]
    pub const fn accent(self) -> Accent {
        match self {
            Criticality::MissionCritical => Accent::Red,
            Criticality::BusinessCritical => Accent::Orange,
            Criticality::Standard => Accent::Gray,
        }
    }
}

/// Reported availability of a managed system.
///
/// This is static inventory data, not a live health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    Online,
    Offline,
}

impl SystemStatus {
    /// Badge label shown in system navigation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SystemStatus::Online => "Online",
            SystemStatus::Offline => "Offline",
        }
    }

    /// Badge emphasis color.
    #[must_use]
    pub const fn accent(self) -> Accent {
        match self {
            SystemStatus::Online => Accent::Green,
            SystemStatus::Offline => Accent::Red,
        }
    }

    #[must_use]
    pub const fn is_online(self) -> bool {
        matches!(self, SystemStatus::Online)
    }
}

/// A system under management.
///
/// `environments` is ordered; the first entry is the default the selection
/// cursor lands on. [`Catalog`](crate::Catalog) construction guarantees the
/// list is non-empty and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemEntry {
    /// Stable unique key used for selection and lookups.
    pub id: String,
    /// Human-readable name shown in navigation and carried by deep links.
    pub display_name: String,
    /// One-line description for the sidebar.
    pub description: String,
    /// Optional external inventory code.
    pub code: Option<String>,
    pub criticality: Criticality,
    pub status: SystemStatus,
    /// Ordered deployment environments; the first is the default.
    pub environments: Vec<EnvironmentTag>,
}

impl SystemEntry {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
        status: SystemStatus,
        environments: Vec<EnvironmentTag>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: description.into(),
            code: None,
            criticality: Criticality::default(),
            status,
            environments,
        }
    }

    /// Attach an external inventory code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_criticality(mut self, criticality: Criticality) -> Self {
        self.criticality = criticality;
        self
    }

    /// First listed environment. Entries inside a validated catalog always
    /// have one; a bare entry without environments resolves to the default
    /// tag.
    #[must_use]
    pub fn default_environment(&self) -> EnvironmentTag {
        self.environments.first().copied().unwrap_or_default()
    }

    /// Whether this system is deployed to `tag`.
    #[must_use]
    pub fn offers(&self, tag: EnvironmentTag) -> bool {
        self.environments.contains(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SystemEntry {
        SystemEntry::new(
            "atlas",
            "Atlas Telemetry",
            "Core telemetry ingestion and fan-out",
            SystemStatus::Online,
            vec![EnvironmentTag::Production, EnvironmentTag::Staging],
        )
    }

    #[test]
    fn new_entry_defaults_to_standard_without_code() {
        let entry = sample();
        assert_eq!(entry.criticality, Criticality::Standard);
        assert_eq!(entry.code, None);
    }

    #[test]
    fn builders_set_code_and_criticality() {
        let entry = sample()
            .with_code("ATL-204")
            .with_criticality(Criticality::MissionCritical);
        assert_eq!(entry.code.as_deref(), Some("ATL-204"));
        assert_eq!(entry.criticality, Criticality::MissionCritical);
    }

    #[test]
    fn default_environment_is_first_listed() {
        assert_eq!(sample().default_environment(), EnvironmentTag::Production);
    }

    #[test]
    fn default_environment_of_bare_entry_falls_back() {
        let entry = SystemEntry::new("x", "X", "", SystemStatus::Offline, vec![]);
        assert_eq!(entry.default_environment(), EnvironmentTag::Production);
    }

    #[test]
    fn offers_checks_membership() {
        let entry = sample();
        assert!(entry.offers(EnvironmentTag::Staging));
        assert!(!entry.offers(EnvironmentTag::LoadTest));
    }

    #[test]
    fn entry_serializes_camel_case() {
        let json = serde_json::to_value(sample().with_code("ATL-204")).expect("entry serializes");
        assert_eq!(json["displayName"], "Atlas Telemetry");
        assert_eq!(json["code"], "ATL-204");
        assert_eq!(json["criticality"], "standard");
        assert_eq!(json["status"], "online");
        assert_eq!(json["environments"][0], "prod");
    }
}

#![forbid(unsafe_code)]

//! Validated collection of managed systems.
//!
//! A [`Catalog`] is built once at startup from declarative entries and is
//! never mutated afterwards. Construction rejects malformed data: an empty
//! catalog, duplicate system ids, a system without environments, or a
//! duplicated environment within one system. These are configuration
//! defects, so they surface as startup errors instead of render-time
//! surprises.

use std::fmt;

use crate::environment::EnvironmentTag;
use crate::system::{Criticality, SystemEntry, SystemStatus};

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors detected while constructing a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no systems at all.
    Empty,
    /// Two systems share the same id.
    DuplicateSystem(String),
    /// A system lists no environments.
    NoEnvironments(String),
    /// A system lists the same environment more than once.
    DuplicateEnvironment {
        system: String,
        tag: EnvironmentTag,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog has no systems"),
            CatalogError::DuplicateSystem(id) => write!(f, "duplicate system id: {id}"),
            CatalogError::NoEnvironments(id) => write!(f, "system {id} lists no environments"),
            CatalogError::DuplicateEnvironment { system, tag } => {
                write!(f, "system {system} lists environment {tag} more than once")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Result type for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Immutable, validated registry of managed systems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    systems: Vec<SystemEntry>,
}

impl Catalog {
    /// Build a catalog from declarative entries, checking the registry
    /// invariants.
    pub fn new(systems: Vec<SystemEntry>) -> CatalogResult<Catalog> {
        validate(&systems)?;
        Ok(Catalog { systems })
    }

    /// The catalog every binary ships with: three systems covering all
    /// criticality tiers, both statuses, and differing environment lists.
    #[must_use]
    pub fn builtin() -> Catalog {
        let systems = builtin_systems();
        debug_assert!(validate(&systems).is_ok());
        Catalog { systems }
    }

    /// All systems in registration order.
    #[must_use]
    pub fn systems(&self) -> &[SystemEntry] {
        &self.systems
    }

    /// Lookup a system by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SystemEntry> {
        self.systems.iter().find(|system| system.id == id)
    }

    /// The first registered system, where the selection cursor starts.
    #[must_use]
    pub fn default_system(&self) -> &SystemEntry {
        &self.systems[0]
    }
}

fn validate(systems: &[SystemEntry]) -> CatalogResult<()> {
    if systems.is_empty() {
        return Err(CatalogError::Empty);
    }
    for (idx, system) in systems.iter().enumerate() {
        if systems[..idx].iter().any(|other| other.id == system.id) {
            return Err(CatalogError::DuplicateSystem(system.id.clone()));
        }
        if system.environments.is_empty() {
            return Err(CatalogError::NoEnvironments(system.id.clone()));
        }
        for (env_idx, tag) in system.environments.iter().enumerate() {
            if system.environments[..env_idx].contains(tag) {
                return Err(CatalogError::DuplicateEnvironment {
                    system: system.id.clone(),
                    tag: *tag,
                });
            }
        }
    }
    Ok(())
}

fn builtin_systems() -> Vec<SystemEntry> {
    vec![
        SystemEntry::new(
            "atlas",
            "Atlas Telemetry",
            "Core telemetry ingestion and fan-out",
            SystemStatus::Online,
            vec![
                EnvironmentTag::Production,
                EnvironmentTag::Staging,
                EnvironmentTag::LoadTest,
            ],
        )
        .with_code("ATL-204")
        .with_criticality(Criticality::MissionCritical),
        SystemEntry::new(
            "harbor",
            "Harbor Gateway",
            "External partner API gateway",
            SystemStatus::Online,
            vec![EnvironmentTag::Production, EnvironmentTag::Staging],
        )
        .with_code("HBR-112")
        .with_criticality(Criticality::BusinessCritical),
        SystemEntry::new(
            "ledger",
            "Ledger Archive",
            "Cold storage for settled transactions",
            SystemStatus::Offline,
            vec![EnvironmentTag::Production],
        ),
    ]
}

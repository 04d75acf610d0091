#![forbid(unsafe_code)]

//! Two-level navigation cursor over a [`Catalog`].
//!
//! A [`Selection`] is created eagerly with defaults (first system, its
//! first environment) and can only move through [`Selection::select_system`]
//! and [`Selection::select_environment`]. A rejected move returns an error
//! and leaves the cursor untouched, so [`Selection::current`] never
//! observes a half-applied transition.

use std::fmt;

use opsdeck_catalog::{Catalog, EnvironmentTag, SystemEntry};

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors produced by rejected selection moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The requested system id is not in the catalog.
    UnknownSystem(String),
    /// The current system is not deployed to the requested environment.
    EnvironmentNotOffered {
        system: String,
        tag: EnvironmentTag,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnknownSystem(id) => write!(f, "unknown system: {id}"),
            SelectionError::EnvironmentNotOffered { system, tag } => {
                write!(f, "system {system} is not deployed to {tag}")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Result type for selection moves.
pub type SelectionResult<T> = Result<T, SelectionError>;

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Navigation cursor: a registered system plus an environment it offers.
///
/// Borrowing the catalog keeps the cursor valid by construction; at no
/// point can it reference a missing system or an environment the selected
/// system does not offer.
#[derive(Debug, Clone)]
pub struct Selection<'c> {
    catalog: &'c Catalog,
    system: &'c SystemEntry,
    environment: EnvironmentTag,
}

impl<'c> Selection<'c> {
    /// Start at the catalog's first system and that system's first
    /// environment.
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Selection<'c> {
        let system = catalog.default_system();
        Selection {
            catalog,
            system,
            environment: system.default_environment(),
        }
    }

    /// Move to another system.
    ///
    /// The environment is re-derived to the new system's first environment,
    /// never carried over from the previous system.
    pub fn select_system(&mut self, id: &str) -> SelectionResult<()> {
        let Some(system) = self.catalog.get(id) else {
            return Err(SelectionError::UnknownSystem(id.to_string()));
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(from = %self.system.id, to = %system.id, "select_system");
        self.system = system;
        self.environment = system.default_environment();
        Ok(())
    }

    /// Move to another environment of the current system.
    pub fn select_environment(&mut self, tag: EnvironmentTag) -> SelectionResult<()> {
        if !self.system.offers(tag) {
            return Err(SelectionError::EnvironmentNotOffered {
                system: self.system.id.clone(),
                tag,
            });
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(system = %self.system.id, env = %tag, "select_environment");
        self.environment = tag;
        Ok(())
    }

    /// The selected pair. Always a registered system and an environment it
    /// offers.
    #[must_use]
    pub fn current(&self) -> (&'c SystemEntry, EnvironmentTag) {
        (self.system, self.environment)
    }

    /// The selected system.
    #[must_use]
    pub fn system(&self) -> &'c SystemEntry {
        self.system
    }

    /// The selected environment.
    #[must_use]
    pub fn environment(&self) -> EnvironmentTag {
        self.environment
    }

    /// The catalog this cursor navigates.
    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_catalog::{SystemEntry, SystemStatus};

    fn two_system_catalog() -> Catalog {
        let systems = vec![
            SystemEntry::new(
                "a",
                "System A",
                "First",
                SystemStatus::Online,
                vec![EnvironmentTag::Production, EnvironmentTag::Staging],
            ),
            SystemEntry::new(
                "b",
                "System B",
                "Second",
                SystemStatus::Online,
                vec![EnvironmentTag::Production],
            ),
        ];
        Catalog::new(systems).expect("test catalog is valid")
    }

    #[test]
    fn new_selection_takes_first_system_and_environment() {
        let catalog = two_system_catalog();
        let selection = Selection::new(&catalog);
        let (system, environment) = selection.current();
        assert_eq!(system.id, "a");
        assert_eq!(environment, EnvironmentTag::Production);
    }

    #[test]
    fn select_system_re_derives_environment() {
        let catalog = two_system_catalog();
        let mut selection = Selection::new(&catalog);
        selection
            .select_environment(EnvironmentTag::Staging)
            .expect("a offers staging");
        selection.select_system("b").expect("b exists");
        let (system, environment) = selection.current();
        assert_eq!(system.id, "b");
        assert_eq!(environment, EnvironmentTag::Production);
    }

    #[test]
    fn environment_is_not_remembered_across_systems() {
        let catalog = two_system_catalog();
        let mut selection = Selection::new(&catalog);
        selection
            .select_environment(EnvironmentTag::Staging)
            .expect("a offers staging");
        selection.select_system("b").expect("b exists");
        selection.select_system("a").expect("a exists");
        assert_eq!(selection.environment(), EnvironmentTag::Production);
    }

    #[test]
    fn unknown_system_is_rejected_and_state_kept() {
        let catalog = two_system_catalog();
        let mut selection = Selection::new(&catalog);
        let err = selection.select_system("ghost").expect_err("ghost unknown");
        assert_eq!(err, SelectionError::UnknownSystem("ghost".into()));
        assert_eq!(selection.system().id, "a");
        assert_eq!(selection.environment(), EnvironmentTag::Production);
    }

    #[test]
    fn unoffered_environment_is_rejected_and_state_kept() {
        let catalog = two_system_catalog();
        let mut selection = Selection::new(&catalog);
        selection.select_system("b").expect("b exists");
        let err = selection
            .select_environment(EnvironmentTag::Staging)
            .expect_err("b has no staging");
        assert_eq!(
            err,
            SelectionError::EnvironmentNotOffered {
                system: "b".into(),
                tag: EnvironmentTag::Staging,
            }
        );
        let (system, environment) = selection.current();
        assert_eq!(system.id, "b");
        assert_eq!(environment, EnvironmentTag::Production);
    }

    #[test]
    fn builtin_catalog_selection_walkthrough() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new(&catalog);
        assert_eq!(selection.system().id, "atlas");

        selection
            .select_environment(EnvironmentTag::LoadTest)
            .expect("atlas offers load");
        selection.select_system("ledger").expect("ledger exists");
        assert_eq!(selection.environment(), EnvironmentTag::Production);
        assert!(
            selection
                .select_environment(EnvironmentTag::LoadTest)
                .is_err()
        );
    }

    #[test]
    fn error_messages_name_the_offender() {
        let err = SelectionError::EnvironmentNotOffered {
            system: "ledger".into(),
            tag: EnvironmentTag::LoadTest,
        };
        assert_eq!(err.to_string(), "system ledger is not deployed to load");
        let err = SelectionError::UnknownSystem("ghost".into());
        assert_eq!(err.to_string(), "unknown system: ghost");
    }
}

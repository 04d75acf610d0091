#![forbid(unsafe_code)]

//! OpsDeck public facade crate.
//!
//! This crate provides the stable surface area for consumers. It re-exports
//! the catalog, navigation, and view-composition APIs under one roof and
//! offers a lightweight prelude plus a unified error type for binaries
//! that drive the whole stack.

use std::fmt;

// --- Catalog re-exports ----------------------------------------------------

pub use opsdeck_catalog::{
    Accent, CAPABILITIES, CapabilityId, Catalog, CatalogError, CatalogResult, Criticality,
    EnvironmentTag, MONITORING_LINKS, ManagementCapability, MonitoringCategory, MonitoringLink,
    SystemEntry, SystemStatus, capabilities, capability, links_in_category, monitoring_links,
};

// --- Navigation re-exports -------------------------------------------------

pub use opsdeck_nav::{
    DeepLink, FALLBACK_ENVIRONMENT, FALLBACK_SYSTEM, PARAM_ENV, PARAM_SYSTEM, Selection,
    SelectionError, SelectionResult,
};

// --- View re-exports -------------------------------------------------------

pub use opsdeck_view::{
    CapabilityCard, EnvironmentTab, LinkCard, MonitoringSection, SystemNavItem,
    compose_environment_tabs, compose_main_view, compose_monitoring_view, compose_system_nav,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for opsdeck apps.
#[derive(Debug)]
pub enum Error {
    /// Catalog construction rejected the configured systems.
    Catalog(CatalogError),
    /// A selection move was rejected.
    Selection(SelectionError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "{err}"),
            Self::Selection(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::Selection(err) => Some(err),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<SelectionError> for Error {
    fn from(err: SelectionError) -> Self {
        Self::Selection(err)
    }
}

/// Standard result type for opsdeck APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Accent, CapabilityCard, CapabilityId, Catalog, DeepLink, EnvironmentTab, EnvironmentTag,
        Error, LinkCard, MonitoringSection, Result, Selection, SystemEntry, SystemNavItem,
        compose_environment_tabs, compose_main_view, compose_monitoring_view, compose_system_nav,
    };

    pub use crate::{catalog, nav, view};
}

pub use opsdeck_catalog as catalog;
pub use opsdeck_nav as nav;
pub use opsdeck_view as view;

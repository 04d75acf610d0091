#![forbid(unsafe_code)]

//! Registry layer for the operator dashboard: managed systems, deployment
//! environments, management capabilities, and monitoring destinations.
//!
//! Everything in this crate is declarative data plus validation. There is
//! no I/O and no mutable global state; a [`Catalog`] is built once at
//! startup and shared by reference afterwards.
//!
//! # Example
//!
//! ```
//! use opsdeck_catalog::{Catalog, EnvironmentTag};
//!
//! let catalog = Catalog::builtin();
//! let system = catalog.default_system();
//! assert!(system.offers(system.default_environment()));
//! assert_eq!(EnvironmentTag::parse("PROD"), Some(EnvironmentTag::Production));
//! ```

pub mod accent;
pub mod capability;
pub mod catalog;
pub mod environment;
pub mod monitoring;
pub mod system;

pub use accent::Accent;
pub use capability::{CAPABILITIES, CapabilityId, ManagementCapability, capabilities, capability};
pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use environment::EnvironmentTag;
pub use monitoring::{
    MONITORING_LINKS, MonitoringCategory, MonitoringLink, links_in_category, monitoring_links,
};
pub use system::{Criticality, SystemEntry, SystemStatus};

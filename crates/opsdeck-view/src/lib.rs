#![forbid(unsafe_code)]

//! Pure view-model composition for the operator dashboard.
//!
//! Composition turns a catalog plus a selection into ordered, serializable
//! view models and nothing else: no I/O, no internal state, no reference to
//! the rendering layer. Calling a composer twice with the same inputs
//! yields equal output, so renderers may re-run it on every frame or diff
//! its serialized form, whichever suits them.
//!
//! # Example
//!
//! ```
//! use opsdeck_catalog::Catalog;
//! use opsdeck_nav::Selection;
//! use opsdeck_view::compose_main_view;
//!
//! let catalog = Catalog::builtin();
//! let selection = Selection::new(&catalog);
//! let (system, environment) = selection.current();
//!
//! let cards = compose_main_view(system, environment);
//! assert_eq!(cards[0].title, "Monitoring");
//! assert!(cards[0].link.is_some());
//! ```

pub mod main_view;
pub mod monitoring_view;

pub use main_view::{
    CapabilityCard, EnvironmentTab, SystemNavItem, compose_environment_tabs, compose_main_view,
    compose_system_nav,
};
pub use monitoring_view::{LinkCard, MonitoringSection, compose_monitoring_view};

#![forbid(unsafe_code)]

//! Navigation state for the operator dashboard.
//!
//! Two pieces live here: the [`Selection`] cursor, which always points at a
//! registered system and one of its environments, and the [`DeepLink`]
//! codec, which carries a selection into the monitoring sub-view as a query
//! string and back.
//!
//! # Example
//!
//! ```
//! use opsdeck_catalog::{Catalog, EnvironmentTag};
//! use opsdeck_nav::{DeepLink, Selection};
//!
//! let catalog = Catalog::builtin();
//! let mut selection = Selection::new(&catalog);
//! selection.select_system("harbor")?;
//! selection.select_environment(EnvironmentTag::Staging)?;
//!
//! let link = DeepLink::for_selection(&selection);
//! assert_eq!(link.to_query(), "?system=Harbor%20Gateway&env=staging");
//! assert_eq!(DeepLink::parse(&link.to_query()), link);
//! # Ok::<(), opsdeck_nav::SelectionError>(())
//! ```

pub mod deeplink;
pub mod selection;

pub use deeplink::{DeepLink, FALLBACK_ENVIRONMENT, FALLBACK_SYSTEM, PARAM_ENV, PARAM_SYSTEM};
pub use selection::{Selection, SelectionError, SelectionResult};

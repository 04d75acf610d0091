#![forbid(unsafe_code)]

//! View models for the monitoring page: categorized link sections.
//!
//! The monitoring page is reached through a deep link, so the system name
//! arrives as a plain string. It is used for labeling only and deliberately
//! never resolved against the catalog; a link minted for a system that has
//! since been renamed still renders a complete page.

use serde::Serialize;

use opsdeck_catalog::{Accent, EnvironmentTag, MonitoringCategory, links_in_category};

/// One external destination card on the monitoring page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    /// Selection context badge, e.g. `Atlas Telemetry • PROD`.
    pub context: String,
}

/// One category section on the monitoring page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringSection {
    pub category: MonitoringCategory,
    pub label: &'static str,
    pub accent: Accent,
    pub links: Vec<LinkCard>,
}

/// Build the monitoring page sections for a labeling context.
///
/// Sections appear in fixed category order and links in registration
/// order, identical for every system; only the context badge varies.
pub fn compose_monitoring_view(
    system_label: &str,
    environment: EnvironmentTag,
) -> Vec<MonitoringSection> {
    #[cfg(feature = "tracing")]
    let _span =
        tracing::debug_span!("compose_monitoring_view", system = %system_label, env = %environment)
            .entered();

    let context = format!("{system_label} • {}", environment.label());
    MonitoringCategory::ALL
        .iter()
        .map(|&category| MonitoringSection {
            category,
            label: category.label(),
            accent: category.accent(),
            links: links_in_category(category)
                .map(|link| LinkCard {
                    id: link.id,
                    title: link.name,
                    description: link.description,
                    url: link.url,
                    icon: link.icon,
                    context: context.clone(),
                })
                .collect(),
        })
        .collect()
}

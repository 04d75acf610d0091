#![forbid(unsafe_code)]

//! Monitoring destination registry.
//!
//! External monitoring destinations grouped into a fixed set of categories.
//! The registry is shared by every system; monitoring pages differ only in
//! the selection context they display, never in which links they show.
//! Links belonging to one category sit contiguously, and iteration
//! preserves registration order.

use serde::Serialize;

use crate::accent::Accent;

/// Section grouping for monitoring destinations, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonitoringCategory {
    Unified,
    Infrastructure,
    Database,
    Application,
    SystemWide,
}

impl MonitoringCategory {
    pub const ALL: &'static [MonitoringCategory] = &[
        MonitoringCategory::Unified,
        MonitoringCategory::Infrastructure,
        MonitoringCategory::Database,
        MonitoringCategory::Application,
        MonitoringCategory::SystemWide,
    ];

    /// Section heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MonitoringCategory::Unified => "Unified monitoring",
            MonitoringCategory::Infrastructure => "Infrastructure monitoring",
            MonitoringCategory::Database => "Database monitoring",
            MonitoringCategory::Application => "Application metrics",
            MonitoringCategory::SystemWide => "System monitoring",
        }
    }

    /// Section marker color.
    #[must_use]
    pub const fn accent(self) -> Accent {
        match self {
            MonitoringCategory::Unified => Accent::Blue,
            MonitoringCategory::Infrastructure => Accent::Purple,
            MonitoringCategory::Database => Accent::Orange,
            MonitoringCategory::Application => Accent::Green,
            MonitoringCategory::SystemWide => Accent::Red,
        }
    }
}

/// Registry metadata describing one external monitoring destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonitoringLink {
    pub id: &'static str,
    /// Card title.
    pub name: &'static str,
    /// Card description line.
    pub description: &'static str,
    /// Absolute URL, handed to the consumer as-is. Not validated here.
    pub url: &'static str,
    /// Icon name, resolved by the rendering layer.
    pub icon: &'static str,
    pub category: MonitoringCategory,
}

/// Monitoring registry: single source of truth for link ordering + metadata.
pub const MONITORING_LINKS: &[MonitoringLink] = &[
    MonitoringLink {
        id: "unified-1",
        name: "Unified system monitoring",
        description: "Centralized monitoring of every system component",
        url: "https://monitoring.example.com/unified/general",
        icon: "monitor",
        category: MonitoringCategory::Unified,
    },
    MonitoringLink {
        id: "unified-2",
        name: "Performance monitoring",
        description: "System performance and load tracking",
        url: "https://monitoring.example.com/unified/performance",
        icon: "trending-up",
        category: MonitoringCategory::Unified,
    },
    MonitoringLink {
        id: "infra-1",
        name: "Server monitoring",
        description: "Health and load of the server fleet",
        url: "https://monitoring.example.com/infrastructure/servers",
        icon: "server",
        category: MonitoringCategory::Infrastructure,
    },
    MonitoringLink {
        id: "infra-2",
        name: "Network monitoring",
        description: "Network connectivity and traffic health",
        url: "https://monitoring.example.com/infrastructure/network",
        icon: "wifi",
        category: MonitoringCategory::Infrastructure,
    },
    MonitoringLink {
        id: "db-1",
        name: "Primary database",
        description: "Monitoring for the primary database",
        url: "https://monitoring.example.com/database/main",
        icon: "database",
        category: MonitoringCategory::Database,
    },
    MonitoringLink {
        id: "db-2",
        name: "Analytics database",
        description: "Monitoring for the analytics database",
        url: "https://monitoring.example.com/database/analytics",
        icon: "bar-chart-3",
        category: MonitoringCategory::Database,
    },
    MonitoringLink {
        id: "db-3",
        name: "Standby database",
        description: "Monitoring for the standby database",
        url: "https://monitoring.example.com/database/backup",
        icon: "shield",
        category: MonitoringCategory::Database,
    },
    MonitoringLink {
        id: "app-1",
        name: "Business metrics",
        description: "Business metrics and user journey tracking",
        url: "https://monitoring.example.com/application/metrics",
        icon: "activity",
        category: MonitoringCategory::Application,
    },
    MonitoringLink {
        id: "system-1",
        name: "System overview",
        description: "Aggregate monitoring across the whole system",
        url: "https://monitoring.example.com/system/overview",
        icon: "globe",
        category: MonitoringCategory::SystemWide,
    },
];

/// Return the full registry (ordered).
#[must_use]
pub fn monitoring_links() -> &'static [MonitoringLink] {
    MONITORING_LINKS
}

/// Iterate links in a given category, preserving registry order.
pub fn links_in_category(
    category: MonitoringCategory,
) -> impl Iterator<Item = &'static MonitoringLink> {
    MONITORING_LINKS
        .iter()
        .filter(move |link| link.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_unique_ids() {
        for link in MONITORING_LINKS {
            let count = MONITORING_LINKS
                .iter()
                .filter(|other| other.id == link.id)
                .count();
            assert_eq!(count, 1, "duplicate link id: {}", link.id);
        }
    }

    #[test]
    fn categories_are_contiguous_in_registry_order() {
        let mut seen: Vec<MonitoringCategory> = Vec::new();
        for link in MONITORING_LINKS {
            if seen.last() != Some(&link.category) {
                assert!(
                    !seen.contains(&link.category),
                    "category {:?} split across the registry",
                    link.category
                );
                seen.push(link.category);
            }
        }
        assert_eq!(seen.as_slice(), MonitoringCategory::ALL);
    }

    #[test]
    fn every_category_has_at_least_one_link() {
        for category in MonitoringCategory::ALL {
            assert!(
                links_in_category(*category).next().is_some(),
                "category {category:?} has no links"
            );
        }
    }

    #[test]
    fn category_iteration_preserves_registry_order() {
        for category in MonitoringCategory::ALL {
            let filtered: Vec<&str> = links_in_category(*category).map(|link| link.id).collect();
            let expected: Vec<&str> = MONITORING_LINKS
                .iter()
                .filter(|link| link.category == *category)
                .map(|link| link.id)
                .collect();
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn urls_are_absolute() {
        for link in MONITORING_LINKS {
            assert!(
                link.url.starts_with("https://"),
                "link {} has a relative url",
                link.id
            );
        }
    }
}

#![forbid(unsafe_code)]

//! Management capability registry.
//!
//! The capability grid shows the same fixed set for every system and
//! environment; only the card labeling varies with the selection.
//! Registration order is display order, monitoring first.

use std::fmt;

use serde::Serialize;

use crate::accent::Accent;

/// Identifier for a management capability card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityId {
    Monitoring,
    Audit,
    Logging,
    Database,
    Runbook,
    Passport,
    Kubernetes,
    Kafka,
    SystemInfo,
}

impl CapabilityId {
    pub const ALL: &'static [CapabilityId] = &[
        CapabilityId::Monitoring,
        CapabilityId::Audit,
        CapabilityId::Logging,
        CapabilityId::Database,
        CapabilityId::Runbook,
        CapabilityId::Passport,
        CapabilityId::Kubernetes,
        CapabilityId::Kafka,
        CapabilityId::SystemInfo,
    ];

    /// Stable kebab-case name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CapabilityId::Monitoring => "monitoring",
            CapabilityId::Audit => "audit",
            CapabilityId::Logging => "logging",
            CapabilityId::Database => "database",
            CapabilityId::Runbook => "runbook",
            CapabilityId::Passport => "passport",
            CapabilityId::Kubernetes => "kubernetes",
            CapabilityId::Kafka => "kafka",
            CapabilityId::SystemInfo => "system-info",
        }
    }

    /// Whether activating this capability navigates to a dedicated
    /// sub-view. Monitoring is currently the only one; the remaining cards
    /// front external tooling.
    #[must_use]
    pub const fn is_navigable(self) -> bool {
        matches!(self, CapabilityId::Monitoring)
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry metadata describing one capability card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManagementCapability {
    pub id: CapabilityId,
    /// Card title.
    pub name: &'static str,
    /// Icon name, resolved by the rendering layer.
    pub icon: &'static str,
    pub accent: Accent,
}

/// Capability registry: single source of truth for card ordering + metadata.
pub const CAPABILITIES: &[ManagementCapability] = &[
    ManagementCapability {
        id: CapabilityId::Monitoring,
        name: "Monitoring",
        icon: "activity",
        accent: Accent::Green,
    },
    ManagementCapability {
        id: CapabilityId::Audit,
        name: "Audit",
        icon: "search",
        accent: Accent::Blue,
    },
    ManagementCapability {
        id: CapabilityId::Logging,
        name: "Logging",
        icon: "file-text",
        accent: Accent::Yellow,
    },
    ManagementCapability {
        id: CapabilityId::Database,
        name: "Database",
        icon: "database",
        accent: Accent::Purple,
    },
    ManagementCapability {
        id: CapabilityId::Runbook,
        name: "Runbook",
        icon: "book-open",
        accent: Accent::Orange,
    },
    ManagementCapability {
        id: CapabilityId::Passport,
        name: "Passport",
        icon: "shield",
        accent: Accent::Indigo,
    },
    ManagementCapability {
        id: CapabilityId::Kubernetes,
        name: "Kubernetes",
        icon: "server",
        accent: Accent::Cyan,
    },
    ManagementCapability {
        id: CapabilityId::Kafka,
        name: "Kafka",
        icon: "zap",
        accent: Accent::Red,
    },
    ManagementCapability {
        id: CapabilityId::SystemInfo,
        name: "System info",
        icon: "info",
        accent: Accent::Gray,
    },
];

/// Return the full registry (ordered).
#[must_use]
pub fn capabilities() -> &'static [ManagementCapability] {
    CAPABILITIES
}

/// Lookup a capability by id in the registry.
#[must_use]
pub fn capability(id: CapabilityId) -> &'static ManagementCapability {
    CAPABILITIES
        .iter()
        .find(|cap| cap.id == id)
        .unwrap_or(&CAPABILITIES[0])
}

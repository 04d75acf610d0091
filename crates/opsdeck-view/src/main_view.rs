#![forbid(unsafe_code)]

//! View models for the main dashboard page: the capability card grid, the
//! environment tab strip, and the sidebar system navigation.

use serde::Serialize;

use opsdeck_catalog::{Accent, CapabilityId, Catalog, EnvironmentTag, SystemEntry, capabilities};
use opsdeck_nav::DeepLink;

/// One card in the capability grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityCard {
    pub id: CapabilityId,
    pub title: &'static str,
    /// Interpolated description line naming the selection.
    pub subtitle: String,
    pub icon: &'static str,
    pub accent: Accent,
    /// Query string for the capability's own sub-view; `None` for cards
    /// that front external tooling.
    pub link: Option<String>,
}

/// One tab in the environment strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentTab {
    pub tag: EnvironmentTag,
    pub label: &'static str,
    pub accent: Accent,
    pub active: bool,
}

/// One entry in the sidebar system list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemNavItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status_label: &'static str,
    pub status_accent: Accent,
    pub criticality_label: &'static str,
    pub criticality_accent: Accent,
    pub selected: bool,
}

/// Build the capability card grid for the selected system and environment.
///
/// Every registry capability yields exactly one card, in registration
/// order. Cards are never filtered by system or environment; only their
/// labeling changes.
pub fn compose_main_view(system: &SystemEntry, environment: EnvironmentTag) -> Vec<CapabilityCard> {
    #[cfg(feature = "tracing")]
    let _span =
        tracing::debug_span!("compose_main_view", system = %system.id, env = %environment)
            .entered();

    capabilities()
        .iter()
        .map(|meta| CapabilityCard {
            id: meta.id,
            title: meta.name,
            subtitle: capability_subtitle(meta.name, &system.display_name, environment),
            icon: meta.icon,
            accent: meta.accent,
            link: meta
                .id
                .is_navigable()
                .then(|| DeepLink::new(system.display_name.clone(), environment).to_query()),
        })
        .collect()
}

/// Build the environment tab strip for a system.
///
/// One tab per offered environment, in the system's listed order. The tab
/// matching `active` carries the flag; whether `active` is actually
/// offered is the selection cursor's concern, not the composer's.
pub fn compose_environment_tabs(
    system: &SystemEntry,
    active: EnvironmentTag,
) -> Vec<EnvironmentTab> {
    system
        .environments
        .iter()
        .map(|&tag| EnvironmentTab {
            tag,
            label: tag.label(),
            accent: tag.accent(),
            active: tag == active,
        })
        .collect()
}

/// Build the sidebar system list, flagging the selected entry.
pub fn compose_system_nav(catalog: &Catalog, selected_id: &str) -> Vec<SystemNavItem> {
    catalog
        .systems()
        .iter()
        .map(|system| SystemNavItem {
            id: system.id.clone(),
            name: system.display_name.clone(),
            description: system.description.clone(),
            status_label: system.status.label(),
            status_accent: system.status.accent(),
            criticality_label: system.criticality.label(),
            criticality_accent: system.criticality.accent(),
            selected: system.id == selected_id,
        })
        .collect()
}

/// Card description line: "Manage {capability} for {system} in {env}".
fn capability_subtitle(name: &str, system: &str, environment: EnvironmentTag) -> String {
    format!(
        "Manage {} for {system} in {}",
        name.to_lowercase(),
        environment.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdeck_catalog::{CAPABILITIES, Criticality, SystemStatus};
    use serde_json::json;

    fn atlas() -> SystemEntry {
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
        .with_criticality(Criticality::MissionCritical)
    }

    #[test]
    fn one_card_per_capability_in_registry_order() {
        let cards = compose_main_view(&atlas(), EnvironmentTag::Production);
        assert_eq!(cards.len(), CAPABILITIES.len());
        for (card, meta) in cards.iter().zip(CAPABILITIES) {
            assert_eq!(card.id, meta.id);
            assert_eq!(card.title, meta.name);
            assert_eq!(card.icon, meta.icon);
            assert_eq!(card.accent, meta.accent);
        }
    }

    #[test]
    fn subtitle_interpolates_selection() {
        let cards = compose_main_view(&atlas(), EnvironmentTag::Staging);
        assert_eq!(
            cards[0].subtitle,
            "Manage monitoring for Atlas Telemetry in STAGING"
        );
    }

    #[test]
    fn subtitle_lowercases_multiword_capabilities() {
        let cards = compose_main_view(&atlas(), EnvironmentTag::Production);
        let info = cards
            .iter()
            .find(|card| card.id == CapabilityId::SystemInfo)
            .expect("system info card present");
        assert_eq!(
            info.subtitle,
            "Manage system info for Atlas Telemetry in PROD"
        );
    }

    #[test]
    fn only_the_monitoring_card_carries_a_link() {
        let cards = compose_main_view(&atlas(), EnvironmentTag::LoadTest);
        for card in &cards {
            if card.id == CapabilityId::Monitoring {
                assert_eq!(
                    card.link.as_deref(),
                    Some("?system=Atlas%20Telemetry&env=load")
                );
            } else {
                assert_eq!(card.link, None, "unexpected link on {:?}", card.id);
            }
        }
    }

    #[test]
    fn composition_is_deterministic() {
        let system = atlas();
        let first = compose_main_view(&system, EnvironmentTag::Staging);
        let second = compose_main_view(&system, EnvironmentTag::Staging);
        assert_eq!(first, second);
    }

    #[test]
    fn tabs_follow_listed_environment_order() {
        let tabs = compose_environment_tabs(&atlas(), EnvironmentTag::Staging);
        let labels: Vec<&str> = tabs.iter().map(|tab| tab.label).collect();
        assert_eq!(labels, vec!["PROD", "STAGING", "LOAD"]);
        let active: Vec<bool> = tabs.iter().map(|tab| tab.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn tab_accents_come_from_the_environment_vocabulary() {
        let tabs = compose_environment_tabs(&atlas(), EnvironmentTag::Production);
        for tab in &tabs {
            assert_eq!(tab.accent, tab.tag.accent());
        }
    }

    #[test]
    fn system_nav_flags_the_selected_entry() {
        let catalog = Catalog::builtin();
        let items = compose_system_nav(&catalog, "harbor");
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["atlas", "harbor", "ledger"]);
        let selected: Vec<bool> = items.iter().map(|item| item.selected).collect();
        assert_eq!(selected, vec![false, true, false]);
    }

    #[test]
    fn system_nav_carries_status_and_criticality_badges() {
        let catalog = Catalog::builtin();
        let items = compose_system_nav(&catalog, "atlas");
        let ledger = items.iter().find(|item| item.id == "ledger").expect("ledger");
        assert_eq!(ledger.status_label, "Offline");
        assert_eq!(ledger.status_accent, Accent::Red);
        assert_eq!(ledger.criticality_label, "Standard");
        let atlas = items.iter().find(|item| item.id == "atlas").expect("atlas");
        assert_eq!(atlas.criticality_label, "Mission critical");
        assert_eq!(atlas.criticality_accent, Accent::Red);
    }

    #[test]
    fn capability_card_serializes_camel_case() {
        let cards = compose_main_view(&atlas(), EnvironmentTag::Production);
        let value = serde_json::to_value(&cards[0]).expect("card serializes");
        assert_eq!(
            value,
            json!({
                "id": "monitoring",
                "title": "Monitoring",
                "subtitle": "Manage monitoring for Atlas Telemetry in PROD",
                "icon": "activity",
                "accent": "green",
                "link": "?system=Atlas%20Telemetry&env=prod",
            })
        );
    }
}

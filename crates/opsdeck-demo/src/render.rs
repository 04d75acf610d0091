#![forbid(unsafe_code)]

//! Plain-text rendering of view models.
//!
//! Columns are aligned by display width rather than byte length, so system
//! names in any script line up.

use unicode_width::UnicodeWidthStr;

use opsdeck::{CapabilityCard, DeepLink, EnvironmentTab, MonitoringSection, SystemNavItem};

/// Render the main dashboard page.
pub fn render_main(
    nav: &[SystemNavItem],
    tabs: &[EnvironmentTab],
    cards: &[CapabilityCard],
) -> String {
    let mut out = String::new();

    out.push_str("Systems\n");
    let name_width = column_width(nav.iter().map(|item| item.name.as_str()));
    let status_width = column_width(nav.iter().map(|item| item.status_label));
    let crit_width = column_width(nav.iter().map(|item| item.criticality_label));
    for item in nav {
        let marker = if item.selected { '>' } else { ' ' };
        out.push_str(&format!(
            "  {marker} {}  {}  {}  {}\n",
            pad(&item.name, name_width),
            pad(item.status_label, status_width),
            pad(item.criticality_label, crit_width),
            item.description,
        ));
    }

    out.push_str("\nEnvironments\n ");
    for tab in tabs {
        if tab.active {
            out.push_str(&format!(" [{}]", tab.label));
        } else {
            out.push_str(&format!("  {} ", tab.label));
        }
    }
    out.push('\n');

    out.push_str("\nCapabilities\n");
    let title_width = column_width(cards.iter().map(|card| card.title));
    for card in cards {
        out.push_str(&format!(
            "  {}  {}\n",
            pad(card.title, title_width),
            card.subtitle
        ));
        if let Some(link) = &card.link {
            out.push_str(&format!("  {}  open: {link}\n", pad("", title_width)));
        }
    }

    out
}

/// Render the monitoring page for a decoded deep link.
pub fn render_monitoring(link: &DeepLink, sections: &[MonitoringSection]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Monitoring — {}\n", link.system));
    out.push_str(&format!("Environment: {}\n", link.environment.label()));

    for section in sections {
        out.push_str(&format!("\n{}\n", section.label));
        let title_width = column_width(section.links.iter().map(|card| card.title));
        for card in &section.links {
            out.push_str(&format!(
                "  {}  {}  ({})\n",
                pad(card.title, title_width),
                card.url,
                card.context,
            ));
        }
    }

    out
}

/// Widest display width in a column.
fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Pad to a display width with trailing spaces.
fn pad(value: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(value);
    let mut padded = String::with_capacity(value.len() + width.saturating_sub(current));
    padded.push_str(value);
    for _ in current..width {
        padded.push(' ');
    }
    padded
}

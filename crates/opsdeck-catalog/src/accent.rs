#![forbid(unsafe_code)]

//! Emphasis vocabulary shared by every display registry.

use std::fmt;

use serde::Serialize;

/// Semantic emphasis color attached to registry entries.
///
/// Accents name an emphasis, not a pixel value; the rendering layer decides
/// what `Red` looks like on its output device. The vocabulary is closed so
/// every mapping over it stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Indigo,
    Cyan,
    Red,
    Gray,
}

impl Accent {
    pub const ALL: &'static [Accent] = &[
        Accent::Green,
        Accent::Blue,
        Accent::Yellow,
        Accent::Purple,
        Accent::Orange,
        Accent::Indigo,
        Accent::Cyan,
        Accent::Red,
        Accent::Gray,
    ];

    /// Stable lowercase name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Accent::Green => "green",
            Accent::Blue => "blue",
            Accent::Yellow => "yellow",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Indigo => "indigo",
            Accent::Cyan => "cyan",
            Accent::Red => "red",
            Accent::Gray => "gray",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_accent_once() {
        for accent in Accent::ALL {
            let count = Accent::ALL.iter().filter(|other| *other == accent).count();
            assert_eq!(count, 1, "accent listed more than once: {accent:?}");
        }
    }

    #[test]
    fn serialized_form_matches_as_str() {
        for accent in Accent::ALL {
            let json = serde_json::to_string(accent).expect("accent serializes");
            assert_eq!(json, format!("\"{}\"", accent.as_str()));
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Accent::Indigo.to_string(), "indigo");
        assert_eq!(Accent::Gray.to_string(), "gray");
    }
}

//! Family prioritization.
//!
//! # Ordering
//! ```text
//! Default  "Noto Sans"                          (always first, loads eagerly)
//! Neutral  every other "Noto Sans *" family     (input order preserved)
//! Tail     SC > TC > HK > JP > KR > Color Emoji
//! Excluded anything not starting with "Noto Sans" (dropped)
//! ```
//!
//! Variant order matters: the derived `Ord` is the sort order.

use crate::catalog::font::FontFace;

/// The default family every other family falls back to.
pub const DEFAULT_FAMILY: &str = "Noto Sans";

/// Families pinned to the end of the list, highest priority first.
const TAIL: [&str; 6] = [
    "Noto Sans SC",
    "Noto Sans TC",
    "Noto Sans HK",
    "Noto Sans JP",
    "Noto Sans KR",
    "Noto Sans Color Emoji",
];

/// Upstream's actual family name for the emoji font.
const EMOJI_ALIAS: &str = "Noto Color Emoji";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriorityTier {
    Excluded,
    /// Higher rank sorts earlier.
    Tail(u8),
    Neutral,
    Default,
}

impl PriorityTier {
    pub fn of(family: &str) -> Self {
        let family = if family == EMOJI_ALIAS {
            TAIL[TAIL.len() - 1]
        } else {
            family
        };

        if let Some(i) = TAIL.iter().position(|f| *f == family) {
            return PriorityTier::Tail((TAIL.len() - i) as u8);
        }

        if family == DEFAULT_FAMILY {
            return PriorityTier::Default;
        }

        if !family.starts_with(DEFAULT_FAMILY) {
            return PriorityTier::Excluded;
        }

        PriorityTier::Neutral
    }

    pub fn is_excluded(self) -> bool {
        self == PriorityTier::Excluded
    }
}

/// Drop excluded families and order the rest by descending tier.
///
/// The sort is stable, so neutral-tier families keep their catalog order.
pub fn select(raw: Vec<FontFace>) -> Vec<FontFace> {
    let mut ranked: Vec<(PriorityTier, FontFace)> = raw
        .into_iter()
        .map(|font| (PriorityTier::of(&font.family), font))
        .filter(|(tier, _)| !tier.is_excluded())
        .collect();

    ranked.sort_by(|(a, _), (b, _)| b.cmp(a));
    ranked.into_iter().map(|(_, font)| font).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fonts(families: &[&str]) -> Vec<FontFace> {
        families.iter().map(|f| FontFace::new(*f, "")).collect()
    }

    fn families(fonts: &[FontFace]) -> Vec<&str> {
        fonts.iter().map(|f| f.family.as_str()).collect()
    }

    #[test]
    fn test_tiers() {
        assert_eq!(PriorityTier::of("Noto Sans"), PriorityTier::Default);
        assert_eq!(PriorityTier::of("Noto Sans Display"), PriorityTier::Neutral);
        assert_eq!(PriorityTier::of("Roboto"), PriorityTier::Excluded);
        assert_eq!(PriorityTier::of("Noto Serif"), PriorityTier::Excluded);
        assert!(PriorityTier::of("Noto Sans SC") > PriorityTier::of("Noto Sans KR"));
        assert!(PriorityTier::of("Noto Sans Mono") > PriorityTier::of("Noto Sans SC"));
        assert_eq!(
            PriorityTier::of("Noto Color Emoji"),
            PriorityTier::of("Noto Sans Color Emoji")
        );
    }

    #[test]
    fn test_select_basic() {
        let selected = select(fonts(&["Noto Sans", "Noto Sans SC", "Roboto", "Noto Sans Display"]));
        assert_eq!(families(&selected), ["Noto Sans", "Noto Sans Display", "Noto Sans SC"]);
    }

    #[test]
    fn test_select_full_order() {
        let selected = select(fonts(&[
            "Noto Color Emoji",
            "Noto Sans KR",
            "Noto Sans Arabic",
            "Noto Sans JP",
            "Open Sans",
            "Noto Sans HK",
            "Noto Sans",
            "Noto Sans TC",
            "Noto Sans Adlam",
            "Noto Sans SC",
        ]));
        assert_eq!(
            families(&selected),
            [
                "Noto Sans",
                "Noto Sans Arabic",
                "Noto Sans Adlam",
                "Noto Sans SC",
                "Noto Sans TC",
                "Noto Sans HK",
                "Noto Sans JP",
                "Noto Sans KR",
                "Noto Color Emoji",
            ]
        );
    }

    #[test]
    fn test_select_empty() {
        assert!(select(Vec::new()).is_empty());
        assert!(select(fonts(&["Roboto", "Lato"])).is_empty());
    }
}

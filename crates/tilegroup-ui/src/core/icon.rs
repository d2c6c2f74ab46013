//! Label to icon mapping for tiles.

/// Shield outline shared by every variant.
const SHIELD_PATH: &str = "M12 2l8 3v6c0 5.25-3.5 9.75-8 11-4.5-1.25-8-5.75-8-11V5l8-3z";

/// Known tier names, matched case-insensitively in this order.
const TIERS: [(&str, IconVariant); 3] = [
    ("basic", IconVariant::Basic),
    ("extended", IconVariant::Extended),
    ("lifetime", IconVariant::Lifetime),
];

/// Icon drawn inside a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconVariant {
    /// Outlined shield.
    Basic,
    /// Filled shield.
    Extended,
    /// Outlined shield with a check mark.
    Lifetime,
    /// Fallback for labels outside the known tiers.
    Generic,
}

impl IconVariant {
    /// Inline SVG markup for the variant.
    #[must_use]
    pub fn svg(self) -> String {
        let body = match self {
            Self::Basic => format!(
                r#"<path d="{SHIELD_PATH}" fill="none" stroke="currentColor" stroke-width="1.5"/>"#
            ),
            Self::Extended => {
                format!(r#"<path d="{SHIELD_PATH}" fill="currentColor" opacity="0.85"/>"#)
            }
            Self::Lifetime => format!(
                concat!(
                    r#"<path d="{shield}" fill="none" stroke="currentColor" stroke-width="1.5"/>"#,
                    r#"<path d="M9.5 12l1.8 1.8 3.2-3.2" stroke="currentColor" stroke-width="1.6" "#,
                    r#"fill="none" stroke-linecap="round" stroke-linejoin="round"/>"#
                ),
                shield = SHIELD_PATH
            ),
            Self::Generic => format!(
                r#"<path d="{SHIELD_PATH}" fill="none" stroke="currentColor" stroke-width="1.5" stroke-dasharray="2 1.5"/>"#
            ),
        };
        format!(r#"<svg viewBox="0 0 24 24" width="28" height="28">{body}</svg>"#)
    }
}

/// Resolve the icon for a tile label. Never fails; unknown labels get
/// [`IconVariant::Generic`].
#[must_use]
pub fn resolve_icon(label: &str) -> IconVariant {
    let key = label.to_lowercase();
    TIERS
        .iter()
        .find(|(tier, _)| key.contains(tier))
        .map_or(IconVariant::Generic, |(_, variant)| *variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_names_match_regardless_of_case() {
        assert_eq!(resolve_icon("Basic"), IconVariant::Basic);
        assert_eq!(resolve_icon("EXTENDED plan"), IconVariant::Extended);
        assert_eq!(resolve_icon("3-year lifetime"), IconVariant::Lifetime);
    }

    #[test]
    fn unknown_labels_fall_back_to_generic() {
        assert_eq!(resolve_icon("Premium"), IconVariant::Generic);
        assert_eq!(resolve_icon(""), IconVariant::Generic);
    }

    #[test]
    fn earlier_tier_wins_on_overlap() {
        assert_eq!(resolve_icon("Basic Extended"), IconVariant::Basic);
    }

    #[test]
    fn variants_render_distinct_svg() {
        let basic = IconVariant::Basic.svg();
        assert!(basic.starts_with("<svg"));
        assert_ne!(basic, IconVariant::Generic.svg());
        assert!(IconVariant::Lifetime.svg().contains("M9.5 12"));
    }
}

//! # Variant Selection
//!
//! Maps the component keys written in content files to the variants the
//! renderer knows.
//!
//! ## Resolution Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Key in content             Resolved to                                 │
//! │  ──────────────             ───────────                                 │
//! │  "HeroVariant1".."10"  ───► HeroVariant::V1..V10                        │
//! │  anything else         ───► HeroVariant::V1                             │
//! │                                                                         │
//! │  "HeaderVariant1".."3" ───► HeaderVariant::V1..V3                       │
//! │  "StickyModernHeader"  ───► HeaderVariant::V1 (alias)                   │
//! │  anything else         ───► HeaderVariant::V1                           │
//! │                                                                         │
//! │  known section type    ───► SectionKind::<type>                         │
//! │  anything else         ───► SectionKind::Unknown(type) (kept, so the    │
//! │                             renderer can show a placeholder)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;

// =============================================================================
// Hero
// =============================================================================

/// The hero banner variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HeroVariant {
    #[default]
    #[serde(rename = "HeroVariant1")]
    V1,
    #[serde(rename = "HeroVariant2")]
    V2,
    #[serde(rename = "HeroVariant3")]
    V3,
    #[serde(rename = "HeroVariant4")]
    V4,
    #[serde(rename = "HeroVariant5")]
    V5,
    #[serde(rename = "HeroVariant6")]
    V6,
    #[serde(rename = "HeroVariant7")]
    V7,
    #[serde(rename = "HeroVariant8")]
    V8,
    #[serde(rename = "HeroVariant9")]
    V9,
    #[serde(rename = "HeroVariant10")]
    V10,
}

impl HeroVariant {
    /// All variants, in number order.
    pub const ALL: [HeroVariant; 10] = [
        HeroVariant::V1,
        HeroVariant::V2,
        HeroVariant::V3,
        HeroVariant::V4,
        HeroVariant::V5,
        HeroVariant::V6,
        HeroVariant::V7,
        HeroVariant::V8,
        HeroVariant::V9,
        HeroVariant::V10,
    ];

    /// Resolves a component key; unknown keys fall back to `HeroVariant1`.
    pub fn from_key(key: &str) -> Self {
        HeroVariant::ALL
            .into_iter()
            .find(|v| v.key() == key)
            .unwrap_or_default()
    }

    /// Variant number (1-based).
    pub fn number(&self) -> u8 {
        match self {
            HeroVariant::V1 => 1,
            HeroVariant::V2 => 2,
            HeroVariant::V3 => 3,
            HeroVariant::V4 => 4,
            HeroVariant::V5 => 5,
            HeroVariant::V6 => 6,
            HeroVariant::V7 => 7,
            HeroVariant::V8 => 8,
            HeroVariant::V9 => 9,
            HeroVariant::V10 => 10,
        }
    }

    /// Component key as written in content files.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HeroVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", HERO_KEY_PREFIX, self.number())
    }
}

const HERO_KEY_PREFIX: &str = "HeroVariant";

/// File suffix for a configured hero key: `"HeroVariant3"` → `"3"`.
///
/// Works on the raw key rather than on [`HeroVariant`], so a key the
/// renderer does not know still looks for its own file before the
/// generic `hero.json` fallback.
pub fn hero_file_suffix(key: &str) -> &str {
    key.strip_prefix(HERO_KEY_PREFIX).unwrap_or(key)
}

// =============================================================================
// Header
// =============================================================================

/// The header variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HeaderVariant {
    #[default]
    #[serde(rename = "HeaderVariant1")]
    V1,
    #[serde(rename = "HeaderVariant2")]
    V2,
    #[serde(rename = "HeaderVariant3")]
    V3,
}

impl HeaderVariant {
    /// Resolves a component key; unknown keys fall back to `HeaderVariant1`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "HeaderVariant2" => HeaderVariant::V2,
            "HeaderVariant3" => HeaderVariant::V3,
            // HeaderVariant1, StickyModernHeader (no component of its own), unknown
            _ => HeaderVariant::V1,
        }
    }
}

impl fmt::Display for HeaderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderVariant::V1 => write!(f, "HeaderVariant1"),
            HeaderVariant::V2 => write!(f, "HeaderVariant2"),
            HeaderVariant::V3 => write!(f, "HeaderVariant3"),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// The page section components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "type")]
pub enum SectionKind {
    CountdownBanner,
    FeatureGrid,
    SimpleCta,
    ProductGridVariant1,
    ProductGridVariant2,
    ProductGridVariant3,
    #[serde(rename = "FAQSection")]
    FaqSection,
    ReviewsVariant1,
    /// A type no component exists for.
    Unknown(String),
}

impl SectionKind {
    /// Resolves a section `type` value.
    pub fn from_type(section_type: &str) -> Self {
        match section_type {
            "CountdownBanner" => SectionKind::CountdownBanner,
            "FeatureGrid" => SectionKind::FeatureGrid,
            "SimpleCta" => SectionKind::SimpleCta,
            "ProductGridVariant1" => SectionKind::ProductGridVariant1,
            "ProductGridVariant2" => SectionKind::ProductGridVariant2,
            "ProductGridVariant3" => SectionKind::ProductGridVariant3,
            "FAQSection" => SectionKind::FaqSection,
            "ReviewsVariant1" => SectionKind::ReviewsVariant1,
            other => SectionKind::Unknown(other.to_string()),
        }
    }

    /// Product grids receive a slice of the catalog.
    pub fn is_product_grid(&self) -> bool {
        matches!(
            self,
            SectionKind::ProductGridVariant1
                | SectionKind::ProductGridVariant2
                | SectionKind::ProductGridVariant3
        )
    }

    /// Only the first grid variant renders add-to-cart buttons.
    pub fn has_cart_buttons(&self) -> bool {
        matches!(self, SectionKind::ProductGridVariant1)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SectionKind::Unknown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_variant_keys_round_trip() {
        for variant in HeroVariant::ALL {
            assert_eq!(HeroVariant::from_key(&variant.key()), variant);
            assert_eq!(variant.to_string(), variant.key());
        }
    }

    #[test]
    fn test_hero_unknown_key_falls_back_to_first() {
        assert_eq!(HeroVariant::from_key("HeroAnimated"), HeroVariant::V1);
        assert_eq!(HeroVariant::from_key("HeroVariant11"), HeroVariant::V1);
        assert_eq!(HeroVariant::from_key(""), HeroVariant::V1);
    }

    #[test]
    fn test_hero_file_suffix() {
        assert_eq!(hero_file_suffix("HeroVariant3"), "3");
        assert_eq!(hero_file_suffix("HeroVariant10"), "10");
        assert_eq!(hero_file_suffix("HeroAnimated"), "HeroAnimated");
    }

    #[test]
    fn test_header_variant_alias_and_fallback() {
        assert_eq!(HeaderVariant::from_key("HeaderVariant3"), HeaderVariant::V3);
        assert_eq!(HeaderVariant::from_key("StickyModernHeader"), HeaderVariant::V1);
        assert_eq!(HeaderVariant::from_key("Mystery"), HeaderVariant::V1);
    }

    #[test]
    fn test_section_kinds() {
        assert_eq!(SectionKind::from_type("FAQSection"), SectionKind::FaqSection);
        assert!(SectionKind::from_type("ProductGridVariant2").is_product_grid());
        assert!(!SectionKind::from_type("ProductGridVariant2").has_cart_buttons());
        assert!(SectionKind::from_type("ProductGridVariant1").has_cart_buttons());
        assert_eq!(
            SectionKind::from_type("Newsletter"),
            SectionKind::Unknown("Newsletter".to_string())
        );
        assert!(SectionKind::from_type("Newsletter").is_unknown());
    }

    #[test]
    fn test_variants_serialize_as_component_keys() {
        assert_eq!(serde_json::to_string(&HeroVariant::V7).unwrap(), "\"HeroVariant7\"");
        assert_eq!(
            serde_json::to_string(&HeaderVariant::V2).unwrap(),
            "\"HeaderVariant2\""
        );
    }
}

//! # Content Models
//!
//! Typed views of the JSON content files.
//!
//! ## File Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  public/                                                                │
//! │  ├── content/                                                           │
//! │  │   ├── site.json ──────────────────► SiteData                         │
//! │  │   │     meta / ui / layout / header / footer                        │
//! │  │   ├── contacts/contacts.json ─────► Contacts                         │
//! │  │   ├── header/header.json ─────────► HeaderData                       │
//! │  │   ├── footer/footer.json ─────────► FooterData                       │
//! │  │   ├── hero/hero-<N>.json ─────────► HeroContent                      │
//! │  │   └── sections/*.json ────────────► SectionContent                   │
//! │  └── generated/products/products.json ► Vec<CatalogProduct>             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field a content editor might leave out carries `#[serde(default)]`:
//! a partially filled file still loads. Free-form props that are only
//! meaningful to a particular component are kept as a JSON map.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use storefront_core::{CartCandidate, Money};

/// Free-form component props.
pub type Props = Map<String, Value>;

// =============================================================================
// Site
// =============================================================================

/// Contents of `content/site.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub meta: SiteMeta,

    #[serde(default)]
    pub ui: UiLabels,

    #[serde(default)]
    pub layout: LayoutSettings,

    /// Header block, if the site file carries one.
    #[serde(default)]
    pub header: Option<HeaderData>,

    /// Footer block, if the site file carries one.
    #[serde(default)]
    pub footer: Option<FooterData>,
}

impl SiteData {
    /// The site used when `site.json` cannot be loaded.
    pub fn fallback() -> Self {
        SiteData {
            meta: SiteMeta {
                title: "Default Site Title".to_string(),
                description: "Default site description".to_string(),
                keywords: "default, keywords".to_string(),
                language: None,
            },
            ..SiteData::default()
        }
    }
}

/// Page metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteMeta {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub keywords: String,

    /// BCP 47 language tag for the `<html lang>` attribute.
    #[serde(default)]
    pub language: Option<String>,
}

/// UI strings. Known keys are typed; the rest are kept for components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiLabels {
    #[serde(default)]
    pub add_to_cart: Option<String>,

    #[serde(default)]
    pub customer_service: Option<String>,

    #[serde(default)]
    pub categories_section_title: Option<String>,

    #[serde(default)]
    pub contacts_section_title: Option<String>,

    #[serde(flatten)]
    pub other: Props,
}

/// Site-wide layout switches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default)]
    pub hero: Option<HeroSelection>,
}

/// Which hero variant the home page uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroSelection {
    #[serde(default)]
    pub variant: Option<String>,
}

// =============================================================================
// Header
// =============================================================================

/// Header props, from `site.json` or `header/header.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderData {
    #[serde(default)]
    pub variant: Option<String>,

    #[serde(default)]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub navigation_items: Vec<NavigationItem>,

    #[serde(default)]
    pub cta_button: Option<CtaButton>,

    #[serde(default)]
    pub auth_links: Vec<AuthLink>,
}

impl HeaderData {
    /// Header props used when no header content exists at all.
    pub fn placeholder() -> Self {
        HeaderData {
            variant: Some("HeaderVariant1".to_string()),
            logo_url: Some("/placeholder.svg".to_string()),
            ..HeaderData::default()
        }
    }

    /// Finds an auth link by its type (`login`, `signup`).
    pub fn auth_link(&self, link_type: &str) -> Option<&AuthLink> {
        self.auth_links.iter().find(|l| l.link_type == link_type)
    }
}

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub label: String,
    pub href: String,
}

/// The header call-to-action button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaButton {
    #[serde(default, alias = "label")]
    pub text: String,

    #[serde(default, alias = "url")]
    pub href: String,
}

/// Login / signup links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthLink {
    #[serde(rename = "type")]
    pub link_type: String,
    pub label: String,
    pub href: String,
}

// =============================================================================
// Footer & Contacts
// =============================================================================

/// Footer block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterData {
    #[serde(default)]
    pub social_media: Vec<FooterLink>,

    #[serde(default)]
    pub links: Vec<FooterLink>,

    #[serde(default)]
    pub copyright: Option<String>,
}

/// A titled link in the footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub title: String,
    pub url: String,
}

/// Contents of `contacts/contacts.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

// =============================================================================
// Hero & Sections
// =============================================================================

/// Contents of a hero file. Everything except `variant` is passed through
/// to the hero component as props.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    #[serde(default)]
    pub variant: Option<String>,

    #[serde(flatten)]
    pub props: Props,
}

/// Contents of a section file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionContent {
    /// Component key, e.g. `FeatureGrid` or `ProductGridVariant1`.
    #[serde(rename = "type")]
    pub section_type: String,

    /// Position on the page; lower comes first.
    #[serde(default)]
    pub order: Option<i64>,

    /// How many products a product grid shows. Any JSON number is accepted
    /// (fractions truncate); anything else reads as unset.
    #[serde(default, deserialize_with = "lenient_limit")]
    pub limit: Option<i64>,

    #[serde(flatten)]
    pub props: Props,
}

impl SectionContent {
    /// Sort key: sections without an order, or with order 0, go last.
    pub fn sort_order(&self) -> i64 {
        self.order
            .filter(|&order| order != 0)
            .unwrap_or(crate::DEFAULT_SECTION_ORDER)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A product from the generated catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Catalog exports sometimes emit numeric ids; both are accepted.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    pub name: String,

    /// Price in major units as written in the catalog.
    pub price: f64,

    #[serde(default)]
    pub image: String,

    #[serde(flatten)]
    pub extra: Props,
}

impl CatalogProduct {
    /// The data an add-to-cart button hands to the cart.
    pub fn to_candidate(&self) -> CartCandidate {
        CartCandidate::new(
            self.id.clone(),
            self.name.clone(),
            Money::from_major_units(self.price),
            self.image.clone(),
        )
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

fn lenient_limit<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        _ => None,
    })
}

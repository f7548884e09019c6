//! # Page Composition
//!
//! Turns loaded content into page plans: which variant components to render
//! and with which props.
//!
//! ## Plans
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compose_layout(store, base_url)                                        │
//! │  ├── site.json (fallback site on failure)    ┐                          │
//! │  ├── contacts/contacts.json (optional)       ┘ tokio::join!             │
//! │  ├── header: site.header → header/header.json → placeholder             │
//! │  ├── footer: site.footer → footer/footer.json → empty, + category links │
//! │  └──► LayoutPlan { language, theme, header, footer, metadata }          │
//! │                                                                         │
//! │  compose_home_page(store)                                               │
//! │  ├── site.json (failure = page error)                                   │
//! │  ├── hero for layout.hero.variant   ┐                                   │
//! │  ├── product catalog                ├ tokio::join!                      │
//! │  ├── HOME_SECTION_FILES             ┘                                   │
//! │  └──► HomePagePlan { hero, sections, products }                         │
//! │        product grids get catalog[..limit]                               │
//! │        ProductGridVariant1 also gets a button label and CartCandidates  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, Utc};
use serde::Serialize;
use storefront_core::CartCandidate;
use tracing::{debug, info};

use crate::error::ContentResult;
use crate::model::{
    CatalogProduct, Contacts, FooterData, FooterLink, HeaderData, HeroContent, SectionContent,
    SiteData,
};
use crate::store::ContentStore;
use crate::variant::{HeaderVariant, HeroVariant, SectionKind};
use crate::{DEFAULT_HERO_KEY, DEFAULT_PRODUCT_GRID_LIMIT, HOME_SECTION_FILES};

const DEFAULT_THEME: &str = "light";
const DEFAULT_LANGUAGE: &str = "th";
const DEFAULT_CUSTOMER_SERVICE: &str = "บริการลูกค้า";
const DEFAULT_CATEGORIES_TITLE: &str = "หมวดหมู่สินค้า";
const DEFAULT_CONTACTS_TITLE: &str = "ติดต่อเรา";
const DEFAULT_ADD_TO_CART: &str = "Добавить в корзину";
const OG_IMAGE: &str = "/generated/meta/og_image.webp";

/// Category links under the footer's categories title: (slug, label).
const FOOTER_CATEGORIES: [(&str, &str); 5] = [
    ("herbal-tea", "ชาสมุนไพรแท้"),
    ("health-tea", "ชาเพื่อสุขภาพ"),
    ("ready-to-drink", "ชาชงสำเร็จ"),
    ("gift-sets", "ชุดของขวัญ"),
    ("tea-accessories", "อุปกรณ์ชงชา"),
];

// =============================================================================
// Layout
// =============================================================================

/// Everything the shared page frame needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    pub language: String,
    pub theme: String,
    pub header: HeaderPlan,
    pub footer: FooterPlan,
    pub metadata: PageMetadata,
}

/// Header component and its props.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderPlan {
    pub variant: HeaderVariant,
    pub props: HeaderData,
}

/// Footer content with its labels already defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterPlan {
    pub social_media: Vec<FooterLink>,
    pub links: Vec<FooterLink>,
    pub copyright: String,
    pub contacts: Option<Contacts>,
    pub customer_service_label: String,
    pub categories_title: String,
    pub categories: Vec<FooterLink>,
    pub contacts_title: String,
}

/// Document metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub metadata_base: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_images: Vec<String>,
}

/// Loads site content and builds the layout plan for the current year.
pub async fn compose_layout(store: &ContentStore, base_url: &str) -> LayoutPlan {
    let repo = store.site();
    let (site, contacts) = tokio::join!(repo.load_or_default(), repo.load_contacts());

    let header_file = if site.header.is_none() {
        repo.load_header().await
    } else {
        None
    };
    let footer_file = if site.footer.is_none() {
        repo.load_footer().await
    } else {
        None
    };

    let plan = build_layout(
        site,
        contacts,
        header_file,
        footer_file,
        base_url,
        Utc::now().year(),
    );
    debug!(header = %plan.header.variant, theme = %plan.theme, "Composed layout");
    plan
}

/// Builds the layout plan from already loaded content.
///
/// `header_file` and `footer_file` are only consulted when the site has no
/// block of its own.
pub fn build_layout(
    site: SiteData,
    contacts: Option<Contacts>,
    header_file: Option<HeaderData>,
    footer_file: Option<FooterData>,
    base_url: &str,
    year: i32,
) -> LayoutPlan {
    let header = site
        .header
        .or(header_file)
        .unwrap_or_else(HeaderData::placeholder);
    let header_variant = HeaderVariant::from_key(header.variant.as_deref().unwrap_or_default());

    let footer = site.footer.or(footer_file).unwrap_or_default();
    let copyright = copyright_or_default(footer.copyright.as_deref(), &site.meta.title, year);

    let ui = site.ui;
    let footer = FooterPlan {
        social_media: footer.social_media,
        links: footer.links,
        copyright,
        contacts,
        customer_service_label: ui
            .customer_service
            .unwrap_or_else(|| DEFAULT_CUSTOMER_SERVICE.to_string()),
        categories_title: ui
            .categories_section_title
            .unwrap_or_else(|| DEFAULT_CATEGORIES_TITLE.to_string()),
        categories: footer_categories(),
        contacts_title: ui
            .contacts_section_title
            .unwrap_or_else(|| DEFAULT_CONTACTS_TITLE.to_string()),
    };

    let meta = site.meta;
    LayoutPlan {
        language: meta
            .language
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        theme: site
            .layout
            .theme
            .unwrap_or_else(|| DEFAULT_THEME.to_string()),
        header: HeaderPlan {
            variant: header_variant,
            props: header,
        },
        footer,
        metadata: PageMetadata {
            metadata_base: base_url.to_string(),
            title: meta.title,
            description: meta.description,
            keywords: meta.keywords,
            og_images: vec![OG_IMAGE.to_string()],
        },
    }
}

/// Product category links, each pointing at the filtered product list.
pub fn footer_categories() -> Vec<FooterLink> {
    FOOTER_CATEGORIES
        .iter()
        .map(|(slug, label)| FooterLink {
            title: label.to_string(),
            url: format!("/products?category={}", slug),
        })
        .collect()
}

/// The footer copyright line: the configured one, or `© {year} {title}`.
pub fn copyright_or_default(copyright: Option<&str>, title: &str, year: i32) -> String {
    match copyright {
        Some(text) => text.to_string(),
        None => format!("© {} {}", year, title),
    }
}

// =============================================================================
// Home Page
// =============================================================================

/// The home page: hero, ordered sections and the catalog they draw from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePagePlan {
    pub hero: HeroPlan,
    pub sections: Vec<SectionPlan>,
    pub products: Vec<CatalogProduct>,
}

/// Hero component and its content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroPlan {
    pub variant: HeroVariant,
    pub content: HeroContent,
}

/// One section of the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPlan {
    pub kind: SectionKind,
    pub content: SectionContent,

    /// Catalog slice shown by product grids; empty for other sections.
    pub products: Vec<CatalogProduct>,

    /// Add-to-cart label, for grids that render cart buttons.
    pub button_text: Option<String>,

    /// What each add-to-cart button hands to the cart.
    pub candidates: Vec<CartCandidate>,
}

impl SectionPlan {
    /// Builds the plan for one section.
    pub fn new(content: SectionContent, products: &[CatalogProduct], add_to_cart_label: &str) -> Self {
        let kind = SectionKind::from_type(&content.section_type);

        let products: Vec<CatalogProduct> = if kind.is_product_grid() {
            let limit = grid_limit(content.limit);
            products.iter().take(limit).cloned().collect()
        } else {
            Vec::new()
        };

        let (button_text, candidates) = if kind.has_cart_buttons() {
            (
                Some(add_to_cart_label.to_string()),
                products.iter().map(CatalogProduct::to_candidate).collect(),
            )
        } else {
            (None, Vec::new())
        };

        SectionPlan {
            kind,
            content,
            products,
            button_text,
            candidates,
        }
    }
}

/// Number of products a grid shows: `limit`, unless missing or not positive.
pub fn grid_limit(limit: Option<i64>) -> usize {
    limit
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(DEFAULT_PRODUCT_GRID_LIMIT)
}

/// Hero variant key from `layout.hero.variant`; unset or empty means the
/// default key.
pub fn hero_key(site: &SiteData) -> String {
    site.layout
        .hero
        .as_ref()
        .and_then(|h| h.variant.as_deref())
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_HERO_KEY)
        .to_string()
}

/// Loads and composes the home page.
///
/// ## Errors
/// - `site.json` cannot be loaded
/// - neither the variant hero file nor `hero/hero.json` can be loaded
pub async fn compose_home_page(store: &ContentStore) -> ContentResult<HomePagePlan> {
    let site = store.site().load().await?;

    let hero_key = hero_key(&site);

    let hero_repo = store.hero();
    let catalog_repo = store.catalog();
    let section_repo = store.sections();
    let (hero, products, sections) = tokio::join!(
        hero_repo.load(&hero_key),
        catalog_repo.load_all(),
        section_repo.load_ordered(&HOME_SECTION_FILES),
    );
    let hero = hero?;

    let hero_variant = HeroVariant::from_key(hero.variant.as_deref().unwrap_or(&hero_key));
    let add_to_cart_label = site
        .ui
        .add_to_cart
        .as_deref()
        .unwrap_or(DEFAULT_ADD_TO_CART);

    let sections: Vec<SectionPlan> = sections
        .into_iter()
        .map(|section| SectionPlan::new(section, &products, add_to_cart_label))
        .collect();

    info!(
        hero = %hero_variant,
        sections = sections.len(),
        products = products.len(),
        "Composed home page"
    );

    Ok(HomePagePlan {
        hero: HeroPlan {
            variant: hero_variant,
            content: hero,
        },
        sections,
        products,
    })
}

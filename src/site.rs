//! Fixed site configuration: brand copy, assets, outbound links and the
//! decorative pattern's layout.

use crate::pattern::GlyphGrid;

pub const BRAND: &str = "Criterio";
pub const BRAND_TAGLINE: &str = "Web3 Business Consulting Agency";
pub const HEADLINE: &str = "Still deploying the site — already deploying results.";

pub const THEME_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";

pub const LOGO_LIGHT: &str = "/Criterio-logo-whitetheme.png";
pub const LOGO_DARK: &str = "/Criterio-logo-darktheme.png";
pub const OG_PREVIEW: &str = "/og-preview.png";

const SHARE_TITLE: &str = "Criterio — Web3 Business Consulting";

pub const PATTERN_GRID: GlyphGrid = GlyphGrid::new(1, 72);
pub const GLYPH: &str = "|";
pub const GLYPH_WIDTH_PX: u32 = 10;
pub const GLYPH_LINE_HEIGHT_PX: u32 = 28;
pub const GLYPH_TRANSITION: &str = "transform 0.1s ease-out";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Replace the current page (mail composer).
    SameTab,
    NewTab,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub target: LinkTarget,
}

pub const EMAIL: Link = Link {
    label: "Send Email",
    href: "mailto:contact@criterio.io",
    target: LinkTarget::SameTab,
};

pub const CHAT: Link = Link {
    label: "Quick Chat",
    href: "https://t.me/DanilVC",
    target: LinkTarget::NewTab,
};

pub const PRESENTATION: Link = Link {
    label: "Presentation",
    href: "https://criteriopresentation.vercel.app/",
    target: LinkTarget::NewTab,
};

pub const X_PROFILE: Link = Link {
    label: "X (Twitter)",
    href: "https://x.com/Criterio_io",
    target: LinkTarget::NewTab,
};

/// Attribute a meta element is keyed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaAttribute {
    Property,
    Name,
}

impl MetaAttribute {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Name => "name",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaContent {
    Fixed(&'static str),
    /// The page URL as read at mount time.
    PageUrl,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetaEntry {
    pub attribute: MetaAttribute,
    pub key: &'static str,
    pub content: MetaContent,
}

const fn property(key: &'static str, content: MetaContent) -> MetaEntry {
    MetaEntry {
        attribute: MetaAttribute::Property,
        key,
        content,
    }
}

const fn name(key: &'static str, content: MetaContent) -> MetaEntry {
    MetaEntry {
        attribute: MetaAttribute::Name,
        key,
        content,
    }
}

pub const SOCIAL_META: [MetaEntry; 9] = [
    property("og:title", MetaContent::Fixed(SHARE_TITLE)),
    property("og:description", MetaContent::Fixed(HEADLINE)),
    property("og:image", MetaContent::Fixed(OG_PREVIEW)),
    property("og:url", MetaContent::PageUrl),
    property("og:type", MetaContent::Fixed("website")),
    name("twitter:card", MetaContent::Fixed("summary_large_image")),
    name("twitter:title", MetaContent::Fixed(SHARE_TITLE)),
    name("twitter:description", MetaContent::Fixed(HEADLINE)),
    name("twitter:image", MetaContent::Fixed(OG_PREVIEW)),
];

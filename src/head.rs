//! Favicon and social-preview tags in the document head.
//!
//! Both syncs look an element up first and only create it when it is
//! missing, so running them any number of times leaves one element per key.

use crate::error::SiteError;
use crate::site::{MetaAttribute, MetaContent, MetaEntry, SOCIAL_META};
use crate::theme::Theme;

/// Element lookups the head syncs need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadQuery<'a> {
    /// Any `<link>` whose `rel` mentions `icon`.
    Icon,
    Meta {
        attribute: MetaAttribute,
        key: &'a str,
    },
}

impl HeadQuery<'_> {
    pub fn selector(&self) -> String {
        match self {
            Self::Icon => "link[rel*='icon']".to_string(),
            Self::Meta { attribute, key } => format!("meta[{}=\"{key}\"]", attribute.as_str()),
        }
    }
}

pub trait HeadDocument {
    type Element;

    fn find(&self, query: HeadQuery<'_>) -> Option<Self::Element>;
    fn create(&self, tag: &str) -> Result<Self::Element, SiteError>;
    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str)
        -> Result<(), SiteError>;
    fn append_to_head(&self, element: &Self::Element) -> Result<(), SiteError>;
}

fn find_or_create<D: HeadDocument>(
    document: &D,
    query: HeadQuery<'_>,
    tag: &str,
    init: impl FnOnce(&D::Element) -> Result<(), SiteError>,
) -> Result<D::Element, SiteError> {
    if let Some(element) = document.find(query) {
        return Ok(element);
    }

    let element = document.create(tag)?;
    init(&element)?;
    document.append_to_head(&element)?;
    Ok(element)
}

/// Points the single favicon link at the theme's logo.
pub fn sync_favicon<D: HeadDocument>(document: &D, theme: Theme) -> Result<(), SiteError> {
    let icon = find_or_create(document, HeadQuery::Icon, "link", |_| Ok(()))?;
    document.set_attribute(&icon, "type", "image/png")?;
    document.set_attribute(&icon, "rel", "icon")?;
    document.set_attribute(&icon, "href", theme.logo())
}

fn sync_meta<D: HeadDocument>(document: &D, entry: &MetaEntry, content: &str) -> Result<(), SiteError> {
    let query = HeadQuery::Meta {
        attribute: entry.attribute,
        key: entry.key,
    };
    let meta = find_or_create(document, query, "meta", |meta| {
        document.set_attribute(meta, entry.attribute.as_str(), entry.key)
    })?;
    document.set_attribute(&meta, "content", content)
}

/// Writes the Open Graph and card-preview tags. `page_url` fills `og:url`.
///
/// Every entry is attempted; the first failure is returned.
pub fn sync_social_meta<D: HeadDocument>(document: &D, page_url: &str) -> Result<(), SiteError> {
    let mut first_error = None;

    for entry in &SOCIAL_META {
        let content = match entry.content {
            MetaContent::Fixed(value) => value,
            MetaContent::PageUrl => page_url,
        };
        if let Err(err) = sync_meta(document, entry, content) {
            log::warn!("failed to sync meta {}: {err}", entry.key);
            first_error.get_or_insert(err);
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{LOGO_DARK, LOGO_LIGHT, OG_PREVIEW};
    use crate::testing::{FakeDocument, MemoryStore};
    use crate::theme::restore_theme;

    const PAGE: &str = "https://criterio.io/";

    #[test]
    fn selectors_match_the_keying_attribute() {
        assert_eq!(HeadQuery::Icon.selector(), "link[rel*='icon']");
        let query = HeadQuery::Meta {
            attribute: MetaAttribute::Property,
            key: "og:title",
        };
        assert_eq!(query.selector(), "meta[property=\"og:title\"]");
        let query = HeadQuery::Meta {
            attribute: MetaAttribute::Name,
            key: "twitter:card",
        };
        assert_eq!(query.selector(), "meta[name=\"twitter:card\"]");
    }

    #[test]
    fn social_meta_sync_is_idempotent() {
        let document = FakeDocument::default();
        sync_social_meta(&document, PAGE).unwrap();
        sync_social_meta(&document, PAGE).unwrap();

        let metas = document.head_elements("meta");
        assert_eq!(metas.len(), 9);

        let expected = [
            ("property", "og:title", "Criterio — Web3 Business Consulting"),
            ("property", "og:description", "Still deploying the site — already deploying results."),
            ("property", "og:image", OG_PREVIEW),
            ("property", "og:url", PAGE),
            ("property", "og:type", "website"),
            ("name", "twitter:card", "summary_large_image"),
            ("name", "twitter:title", "Criterio — Web3 Business Consulting"),
            ("name", "twitter:description", "Still deploying the site — already deploying results."),
            ("name", "twitter:image", OG_PREVIEW),
        ];
        for (attribute, key, content) in expected {
            let matching: Vec<_> = metas
                .iter()
                .filter(|meta| meta.attribute(attribute) == Some(key))
                .collect();
            assert_eq!(matching.len(), 1, "{key}");
            assert_eq!(matching[0].attribute("content"), Some(content), "{key}");
        }
    }

    #[test]
    fn existing_meta_is_updated_in_place() {
        let document = FakeDocument::default();
        document.insert_head("meta", &[("property", "og:url"), ("content", "stale")]);
        document.insert_head("meta", &[("name", "description"), ("content", "other")]);

        sync_social_meta(&document, PAGE).unwrap();

        let metas = document.head_elements("meta");
        assert_eq!(metas.len(), 10);
        let og_url: Vec<_> = metas
            .iter()
            .filter(|meta| meta.attribute("property") == Some("og:url"))
            .collect();
        assert_eq!(og_url.len(), 1);
        assert_eq!(og_url[0].attribute("content"), Some(PAGE));
    }

    #[test]
    fn favicon_follows_theme_without_duplicates() {
        let document = FakeDocument::default();

        sync_favicon(&document, Theme::Light).unwrap();
        sync_favicon(&document, Theme::Dark).unwrap();
        sync_favicon(&document, Theme::Dark).unwrap();

        let links = document.head_elements("link");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].attribute("href"), Some(LOGO_DARK));
        assert_eq!(links[0].attribute("rel"), Some("icon"));
        assert_eq!(links[0].attribute("type"), Some("image/png"));
    }

    #[test]
    fn existing_shortcut_icon_is_reused() {
        let document = FakeDocument::default();
        document.insert_head("link", &[("rel", "shortcut icon"), ("href", "/favicon.ico")]);

        sync_favicon(&document, Theme::Light).unwrap();

        let links = document.head_elements("link");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].attribute("rel"), Some("icon"));
        assert_eq!(links[0].attribute("href"), Some(LOGO_LIGHT));
    }

    #[test]
    fn fresh_visit_gets_light_favicon_and_no_dark_flag() {
        let store = MemoryStore::default();
        let document = FakeDocument::default();

        let theme = restore_theme(&store, &document).unwrap_or_default();
        sync_favicon(&document, theme).unwrap();

        assert_eq!(document.dark_flag(), None);
        let links = document.head_elements("link");
        assert_eq!(links[0].attribute("href"), Some(LOGO_LIGHT));
    }

    #[test]
    fn missing_head_is_reported() {
        let document = FakeDocument::headless();
        assert_eq!(sync_favicon(&document, Theme::Light), Err(SiteError::NoHead));
        assert_eq!(sync_social_meta(&document, PAGE), Err(SiteError::NoHead));
    }
}

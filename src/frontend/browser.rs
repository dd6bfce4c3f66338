use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, Element, Storage};

use crate::error::SiteError;
use crate::head::{HeadDocument, HeadQuery};
use crate::pattern::Rect;
use crate::site::{Link, LinkTarget, DARK_CLASS};
use crate::theme::{PreferenceStore, ThemeRoot};

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn dom_error(err: JsValue) -> SiteError {
    SiteError::Dom(describe(err))
}

fn storage_error(err: JsValue) -> SiteError {
    SiteError::Storage(describe(err))
}

/// `localStorage`, if the browser lets us have it.
pub struct BrowserStorage(Option<Storage>);

impl BrowserStorage {
    pub fn local() -> Self {
        Self(window().and_then(|w| w.local_storage().ok().flatten()))
    }

    fn storage(&self) -> Result<&Storage, SiteError> {
        self.0.as_ref().ok_or(SiteError::StorageUnavailable)
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, SiteError> {
        self.storage()?.get_item(key).map_err(storage_error)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.storage()?.set_item(key, value).map_err(storage_error)
    }
}

pub struct BrowserDocument {
    document: Option<Document>,
    transition: bool,
}

impl BrowserDocument {
    pub fn current() -> Self {
        Self {
            document: window().and_then(|w| w.document()),
            transition: false,
        }
    }

    /// Theme changes go through a view transition where supported.
    pub fn with_transition(mut self) -> Self {
        self.transition = true;
        self
    }

    fn document(&self) -> Result<&Document, SiteError> {
        self.document.as_ref().ok_or(SiteError::NoDocument)
    }

    pub fn page_url(&self) -> Result<String, SiteError> {
        self.document()?
            .location()
            .ok_or_else(|| SiteError::Dom("document has no location".to_string()))?
            .href()
            .map_err(dom_error)
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_dark_class(document: &Document, dark: bool) -> Result<(), SiteError> {
    let root = document
        .document_element()
        .ok_or_else(|| SiteError::Dom("document has no root element".to_string()))?;
    root.class_list()
        .toggle_with_force(DARK_CLASS, dark)
        .map(|_| ())
        .map_err(dom_error)
}

/// Runs the class swap inside `document.startViewTransition`. Returns false
/// when the API is missing or refuses the call, leaving the swap undone.
fn start_view_transition(document: &Document, dark: bool) -> bool {
    let document_js: JsValue = document.clone().into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        return false;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        return false;
    };

    let target = document.clone();
    let callback = Closure::once_into_js(move || {
        if let Err(err) = apply_dark_class(&target, dark) {
            log::warn!("failed to apply theme in transition: {err}");
        }
    });

    start_view_transition.call1(&document_js, &callback).is_ok()
}

impl ThemeRoot for BrowserDocument {
    fn set_dark(&self, dark: bool) -> Result<(), SiteError> {
        let document = self.document()?;

        if self.transition && !prefers_reduced_motion() && start_view_transition(document, dark) {
            return Ok(());
        }

        apply_dark_class(document, dark)
    }
}

impl HeadDocument for BrowserDocument {
    type Element = Element;

    fn find(&self, query: HeadQuery<'_>) -> Option<Element> {
        self.document()
            .ok()?
            .query_selector(&query.selector())
            .ok()
            .flatten()
    }

    fn create(&self, tag: &str) -> Result<Element, SiteError> {
        self.document()?.create_element(tag).map_err(dom_error)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), SiteError> {
        element.set_attribute(name, value).map_err(dom_error)
    }

    fn append_to_head(&self, element: &Element) -> Result<(), SiteError> {
        let head = self.document()?.head().ok_or(SiteError::NoHead)?;
        head.append_child(element).map(|_| ()).map_err(dom_error)
    }
}

pub fn measure(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn navigate(link: &Link) -> Result<(), SiteError> {
    let window = window().ok_or(SiteError::NoWindow)?;
    match link.target {
        LinkTarget::SameTab => window.location().set_href(link.href).map_err(dom_error),
        LinkTarget::NewTab => window
            .open_with_url_and_target(link.href, "_blank")
            .map(|_| ())
            .map_err(dom_error),
    }
}

pub fn follow(link: &Link) {
    log::debug!("opening {}", link.href);
    if let Err(err) = navigate(link) {
        log::warn!("failed to open {}: {err}", link.href);
    }
}

//! In-memory stand-ins for browser storage and the document.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::SiteError;
use crate::head::{HeadDocument, HeadQuery};
use crate::theme::{PreferenceStore, ThemeRoot};

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, SiteError> {
        if self.unavailable {
            return Err(SiteError::StorageUnavailable);
        }
        Ok(self.value(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SiteError> {
        if self.unavailable {
            return Err(SiteError::StorageUnavailable);
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FakeElement {
    pub tag: String,
    attributes: Vec<(String, String)>,
    in_head: bool,
}

impl FakeElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn set(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn matches(&self, query: HeadQuery<'_>) -> bool {
        match query {
            HeadQuery::Icon => {
                self.tag == "link" && self.attribute("rel").is_some_and(|rel| rel.contains("icon"))
            }
            HeadQuery::Meta { attribute, key } => {
                self.tag == "meta" && self.attribute(attribute.as_str()) == Some(key)
            }
        }
    }
}

/// Document whose elements are plain records; handles are indices.
pub struct FakeDocument {
    elements: RefCell<Vec<FakeElement>>,
    has_head: bool,
    dark: Cell<Option<bool>>,
}

impl Default for FakeDocument {
    fn default() -> Self {
        Self {
            elements: RefCell::new(Vec::new()),
            has_head: true,
            dark: Cell::new(None),
        }
    }
}

impl FakeDocument {
    pub fn headless() -> Self {
        Self {
            has_head: false,
            ..Self::default()
        }
    }

    pub fn insert_head(&self, tag: &str, attributes: &[(&str, &str)]) {
        let mut element = FakeElement {
            tag: tag.to_string(),
            attributes: Vec::new(),
            in_head: true,
        };
        for (name, value) in attributes {
            element.set(name, value);
        }
        self.elements.borrow_mut().push(element);
    }

    pub fn head_elements(&self, tag: &str) -> Vec<FakeElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|element| element.in_head && element.tag == tag)
            .cloned()
            .collect()
    }

    /// Last value written to the dark flag, `None` if it was never touched.
    pub fn dark_flag(&self) -> Option<bool> {
        self.dark.get()
    }
}

impl HeadDocument for FakeDocument {
    type Element = usize;

    fn find(&self, query: HeadQuery<'_>) -> Option<usize> {
        self.elements
            .borrow()
            .iter()
            .position(|element| element.in_head && element.matches(query))
    }

    fn create(&self, tag: &str) -> Result<usize, SiteError> {
        let mut elements = self.elements.borrow_mut();
        elements.push(FakeElement {
            tag: tag.to_string(),
            attributes: Vec::new(),
            in_head: false,
        });
        Ok(elements.len() - 1)
    }

    fn set_attribute(&self, element: &usize, name: &str, value: &str) -> Result<(), SiteError> {
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(*element)
            .ok_or_else(|| SiteError::Dom(format!("no element {element}")))?;
        element.set(name, value);
        Ok(())
    }

    fn append_to_head(&self, element: &usize) -> Result<(), SiteError> {
        if !self.has_head {
            return Err(SiteError::NoHead);
        }
        let mut elements = self.elements.borrow_mut();
        let element = elements
            .get_mut(*element)
            .ok_or_else(|| SiteError::Dom(format!("no element {element}")))?;
        element.in_head = true;
        Ok(())
    }
}

impl ThemeRoot for FakeDocument {
    fn set_dark(&self, dark: bool) -> Result<(), SiteError> {
        self.dark.set(Some(dark));
        Ok(())
    }
}

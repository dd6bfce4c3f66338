use crate::error::SiteError;
use crate::site::{LOGO_DARK, LOGO_LIGHT, THEME_KEY};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Logo image, also used as the favicon.
    pub fn logo(self) -> &'static str {
        match self {
            Self::Light => LOGO_LIGHT,
            Self::Dark => LOGO_DARK,
        }
    }
}

/// Key-value storage that outlives the page.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, SiteError>;
    fn save(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// Document-wide style flag that switches the stylesheet to dark colours.
pub trait ThemeRoot {
    fn set_dark(&self, dark: bool) -> Result<(), SiteError>;
}

/// Applies the persisted theme, if any, and returns it.
///
/// With nothing usable in storage the document is left untouched and the
/// caller keeps its default.
pub fn restore_theme(store: &impl PreferenceStore, root: &impl ThemeRoot) -> Option<Theme> {
    let stored = match store.load(THEME_KEY) {
        Ok(stored) => stored?,
        Err(err) => {
            log::debug!("theme preference unavailable: {err}");
            return None;
        }
    };

    let Some(theme) = Theme::parse(&stored) else {
        log::debug!("ignoring stored theme value {stored:?}");
        return None;
    };

    if let Err(err) = root.set_dark(theme.is_dark()) {
        log::warn!("failed to apply stored theme: {err}");
    }
    log::debug!("restored {} theme", theme.as_str());
    Some(theme)
}

/// Switches to the other theme, persisting it and updating the document.
pub fn toggle_theme(
    store: &impl PreferenceStore,
    root: &impl ThemeRoot,
    current: Theme,
) -> Theme {
    let next = current.toggled();

    if let Err(err) = store.save(THEME_KEY, next.as_str()) {
        log::warn!("failed to persist theme: {err}");
    }
    if let Err(err) = root.set_dark(next.is_dark()) {
        log::warn!("failed to apply theme: {err}");
    }

    log::info!("theme switched to {}", next.as_str());
    next
}

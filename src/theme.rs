//! Light/dark theme preference.
//!
//! Reads an explicit choice from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element, plus an icon/label pair on the toggle
//! control when the page has one.
//!
//! TRADE-OFFS
//! ==========
//! Resolving the initial theme never writes storage. Only a manual toggle
//! persists a value, so a visitor who never toggles keeps following the
//! platform colour scheme, and one who has toggled ignores it from then on
//! until the key is cleared.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::consts;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but `light`/`dark` is `None`.
    #[must_use]
    pub fn from_name(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Icon and label for the toggle control. The control offers the
    /// opposite theme, so a dark page shows the sun.
    #[must_use]
    pub fn toggle_face(self) -> ToggleFace {
        match self {
            Self::Dark => ToggleFace {
                icon_class: consts::ICON_SUN_CLASS,
                stale_icon_class: consts::ICON_MOON_CLASS,
                label: "Светлая тема",
            },
            Self::Light => ToggleFace {
                icon_class: consts::ICON_MOON_CLASS,
                stale_icon_class: consts::ICON_SUN_CLASS,
                label: "Темная тема",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownTheme(s.trim().to_owned()))
    }
}

/// What the toggle control shows for an applied theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleFace {
    pub icon_class: &'static str,
    pub stale_icon_class: &'static str,
    pub label: &'static str,
}

/// Durable key-value storage for the explicit theme choice.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Where an applied theme becomes visible.
pub trait ThemeSurface {
    fn show(&mut self, theme: Theme);
}

/// Initial theme: stored choice, else platform preference, else light.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::from_name) {
        return theme;
    }
    system_prefers_dark.map_or(Theme::Light, Theme::from_system)
}

/// Owns the applied theme and mediates storage and surface updates.
pub struct ThemeController<S, V> {
    store: S,
    surface: V,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeController<S, V> {
    /// Resolve the initial theme and show it. Does not write storage.
    pub fn load(store: S, surface: V, key: &str, system_prefers_dark: Option<bool>) -> Self {
        let stored = store.load(key);
        let current = resolve_initial(stored.as_deref(), system_prefers_dark);
        let mut controller = Self { store, surface, key: key.to_owned(), current };
        controller.surface.show(current);
        controller
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// The valid persisted choice, if the visitor has made one.
    #[must_use]
    pub fn explicit_choice(&self) -> Option<Theme> {
        self.store.load(&self.key).as_deref().and_then(Theme::from_name)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &V {
        &self.surface
    }

    /// Persist and show `theme`.
    pub fn set(&mut self, theme: Theme) {
        self.store.save(&self.key, theme.as_str());
        self.current = theme;
        self.surface.show(theme);
    }

    /// Flip the persisted theme (or the applied one when nothing is stored).
    pub fn toggle(&mut self) -> Theme {
        let next = self.explicit_choice().unwrap_or(self.current).flipped();
        self.set(next);
        next
    }

    /// Follow a platform colour-scheme change unless the visitor has chosen
    /// explicitly. Returns the newly applied theme.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.explicit_choice().is_some() {
            return None;
        }
        let theme = Theme::from_system(prefers_dark);
        self.current = theme;
        self.surface.show(theme);
        Some(theme)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{DocumentSurface, LocalStore, mount};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Document, Element, Storage};

    use super::{PreferenceStore, Theme, ThemeController, ThemeSurface};
    use crate::config::SiteConfig;
    use crate::error::ScriptError;
    use crate::{consts, dom};

    /// `window.localStorage`, or nothing when storage is disabled.
    pub struct LocalStore {
        storage: Option<Storage>,
    }

    impl LocalStore {
        #[must_use]
        pub fn new(window: &web_sys::Window) -> Self {
            let storage = match window.local_storage() {
                Ok(storage) => storage,
                Err(err) => {
                    log::warn!("theme: localStorage unavailable: {}", ScriptError::from(err));
                    None
                }
            };
            Self { storage }
        }
    }

    impl PreferenceStore for LocalStore {
        fn load(&self, key: &str) -> Option<String> {
            match self.storage.as_ref()?.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("theme: read {key:?}: {}", ScriptError::from(err));
                    None
                }
            }
        }

        fn save(&mut self, key: &str, value: &str) {
            let Some(storage) = self.storage.as_ref() else {
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("theme: write {key:?}: {}", ScriptError::from(err));
            }
        }
    }

    /// `<html data-theme>` plus the optional toggle icon and label.
    pub struct DocumentSurface {
        root: Option<Element>,
        icon: Option<Element>,
        text: Option<Element>,
    }

    impl DocumentSurface {
        #[must_use]
        pub fn new(document: &Document, config: &SiteConfig) -> Self {
            Self {
                root: document.document_element(),
                icon: document.get_element_by_id(&config.selectors.theme_icon_id),
                text: document.get_element_by_id(&config.selectors.theme_text_id),
            }
        }
    }

    impl ThemeSurface for DocumentSurface {
        fn show(&mut self, theme: Theme) {
            if let Some(root) = &self.root {
                if let Err(err) = root.set_attribute(consts::THEME_ATTRIBUTE, theme.as_str()) {
                    log::warn!("theme: set {}: {}", consts::THEME_ATTRIBUTE, ScriptError::from(err));
                }
            }
            let (Some(icon), Some(text)) = (&self.icon, &self.text) else {
                return;
            };
            let face = theme.toggle_face();
            if let Err(err) = icon.class_list().remove_1(face.stale_icon_class) {
                log::warn!("theme: icon: {}", ScriptError::from(err));
            }
            dom::add_class(icon, face.icon_class);
            text.set_text_content(Some(face.label));
        }
    }

    type BrowserController = ThemeController<LocalStore, DocumentSurface>;

    pub fn mount(config: &SiteConfig) -> Result<(), ScriptError> {
        let window = dom::window()?;
        let document = dom::document()?;

        let scheme = match window.match_media(consts::DARK_SCHEME_QUERY) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("theme: matchMedia: {}", ScriptError::from(err));
                None
            }
        };
        let controller: Rc<RefCell<BrowserController>> = Rc::new(RefCell::new(ThemeController::load(
            LocalStore::new(&window),
            DocumentSurface::new(&document, config),
            &config.theme_storage_key,
            scheme.as_ref().map(web_sys::MediaQueryList::matches),
        )));
        log::debug!("theme: applied {}", controller.borrow().current());

        if let Some(scheme) = scheme {
            let controller = Rc::clone(&controller);
            let list = scheme.clone();
            dom::listen(&scheme, "change", move |_| {
                if let Some(theme) = controller.borrow_mut().system_changed(list.matches()) {
                    log::debug!("theme: following system, now {theme}");
                }
            })?;
        }

        let toggle: Element = dom::element_by_id(&document, &config.selectors.theme_toggle_id)?;
        dom::listen(&toggle, "click", move |_| {
            let theme = controller.borrow_mut().toggle();
            log::debug!("theme: toggled to {theme}");
        })
    }
}

use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore {
    items: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.items.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.items.insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Default)]
struct RecordingSurface {
    shown: Vec<Theme>,
}

impl ThemeSurface for RecordingSurface {
    fn show(&mut self, theme: Theme) {
        self.shown.push(theme);
    }
}

const KEY: &str = "theme";

fn controller(store: MemoryStore, system_dark: Option<bool>) -> ThemeController<MemoryStore, RecordingSurface> {
    ThemeController::load(store, RecordingSurface::default(), KEY, system_dark)
}

// =============================================================
// Theme values
// =============================================================

#[test]
fn theme_parses_known_names_only() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("sepia".parse::<Theme>(), Err(UnknownTheme("sepia".to_owned())));
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn toggle_face_offers_opposite_theme() {
    let dark = Theme::Dark.toggle_face();
    assert_eq!(dark.icon_class, "bi-sun");
    assert_eq!(dark.stale_icon_class, "bi-moon");
    assert_eq!(dark.label, "Светлая тема");

    let light = Theme::Light.toggle_face();
    assert_eq!(light.icon_class, "bi-moon");
    assert_eq!(light.label, "Темная тема");
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn stored_choice_wins_over_system() {
    assert_eq!(resolve_initial(Some("light"), Some(true)), Theme::Light);
}

#[test]
fn system_preference_used_when_nothing_stored() {
    assert_eq!(resolve_initial(None, Some(true)), Theme::Dark);
    assert_eq!(resolve_initial(Some("garbage"), Some(true)), Theme::Dark);
}

#[test]
fn light_is_the_fallback() {
    assert_eq!(resolve_initial(None, None), Theme::Light);
    assert_eq!(resolve_initial(None, Some(false)), Theme::Light);
}

#[test]
fn load_shows_theme_without_persisting() {
    let c = controller(MemoryStore::default(), Some(true));
    assert_eq!(c.current(), Theme::Dark);
    assert_eq!(c.surface().shown, vec![Theme::Dark]);
    assert_eq!(c.store().writes, 0);
    assert_eq!(c.explicit_choice(), None);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_twice_restores_original_and_persists_it() {
    let mut c = controller(MemoryStore::with(KEY, "light"), None);
    assert_eq!(c.toggle(), Theme::Dark);
    assert_eq!(c.store().load(KEY).as_deref(), Some("dark"));
    assert_eq!(c.toggle(), Theme::Light);
    assert_eq!(c.current(), Theme::Light);
    assert_eq!(c.store().load(KEY).as_deref(), Some("light"));
    assert_eq!(c.surface().shown, vec![Theme::Light, Theme::Dark, Theme::Light]);
}

#[test]
fn toggle_without_stored_choice_flips_applied_theme() {
    let mut c = controller(MemoryStore::default(), Some(true));
    assert_eq!(c.toggle(), Theme::Light);
    assert_eq!(c.explicit_choice(), Some(Theme::Light));
}

// =============================================================
// System preference changes
// =============================================================

#[test]
fn system_change_followed_until_manual_choice() {
    let mut c = controller(MemoryStore::default(), Some(true));
    assert_eq!(c.current(), Theme::Dark);

    assert_eq!(c.system_changed(false), Some(Theme::Light));
    assert_eq!(c.current(), Theme::Light);
    assert_eq!(c.store().writes, 0);
}

#[test]
fn system_change_ignored_after_manual_toggle() {
    let mut c = controller(MemoryStore::default(), Some(true));
    assert_eq!(c.toggle(), Theme::Light);
    assert_eq!(c.system_changed(true), None);
    assert_eq!(c.current(), Theme::Light);
}

#[test]
fn manual_choice_survives_reload() {
    let mut first = controller(MemoryStore::default(), Some(false));
    first.toggle();
    let ThemeController { store, .. } = first;

    let mut second = controller(store, Some(false));
    assert_eq!(second.current(), Theme::Dark);
    assert_eq!(second.system_changed(false), None);
}

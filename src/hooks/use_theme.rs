use gloo::events::EventListener;
use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use web_sys::wasm_bindgen::JsCast;
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";

/// User's theme preference.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    Auto, // Follow system preference
}

/// Handle returned by the `use_theme` hook.
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub effective_theme: Theme, // Auto resolved to Light/Dark
    pub toggle: Callback<()>,
}

impl ThemeHandle {
    pub fn is_dark(&self) -> bool {
        self.effective_theme == Theme::Dark
    }
}

/// Theme management: light/dark/auto with system-preference tracking,
/// `data-theme` attribute on the document element, and localStorage
/// persistence of the preference.
#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| load_preference().unwrap_or(Theme::Auto));
    let system_preference = use_state(detect_system_preference);

    let effective_theme = match *theme {
        Theme::Auto => *system_preference,
        other => other,
    };

    {
        use_effect_with(effective_theme, move |theme| {
            apply_to_dom(*theme);
            || ()
        });
    }

    {
        let system_preference = system_preference.clone();
        use_effect_with((), move |()| {
            let listener = watch_system_preference(system_preference.setter());
            move || drop(listener)
        });
    }

    {
        let theme_value = *theme;
        use_effect_with(theme_value, move |theme| {
            save_preference(*theme);
            || ()
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |()| {
            let next = match *theme {
                Theme::Dark => Theme::Light,
                _ => Theme::Dark,
            };
            theme.set(next);
        })
    };

    ThemeHandle {
        theme: *theme,
        effective_theme,
        toggle,
    }
}

fn detect_system_preference() -> Theme {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(Theme::Light, |mq| {
            if mq.matches() { Theme::Dark } else { Theme::Light }
        })
}

fn apply_to_dom(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let value = if theme == Theme::Dark { "dark" } else { "light" };
        let _ = html.set_attribute("data-theme", value);
    }
}

fn load_preference() -> Option<Theme> {
    gloo_storage::LocalStorage::get(STORAGE_KEY).ok()
}

fn save_preference(theme: Theme) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, theme) {
        gloo::console::warn!(format!("Failed to save theme preference: {e:?}"));
    }
}

fn watch_system_preference(setter: UseStateSetter<Theme>) -> Option<EventListener> {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .and_then(|mq| mq.dyn_into::<web_sys::EventTarget>().ok())
        .map(|target| {
            EventListener::new(&target, "change", move |_| {
                setter.set(detect_system_preference());
            })
        })
}

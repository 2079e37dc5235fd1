use yew::prelude::*;

use crate::hooks::use_theme::{Theme, ThemeHandle};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: ThemeHandle,
}

/// Theme toggle button component
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let (icon, label) = match props.theme.effective_theme {
        Theme::Dark => ("☀️", "Switch to light mode"),
        _ => ("🌙", "Switch to dark mode"),
    };

    let onclick = {
        let toggle = props.theme.toggle.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    html! {
        <button
            class="theme-toggle"
            {onclick}
            aria-label={label}
            title={label}
        >
            {icon}
        </button>
    }
}

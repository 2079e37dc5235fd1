use yew::prelude::*;

use crate::components::status::ApiStatusBadge;
use crate::components::theme_toggle::ThemeToggle;
use crate::hooks::use_theme::ThemeHandle;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: ThemeHandle,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <div class="app-header-brand">
                <span class="btc-mark">{"₿"}</span>
                <h1>{"Bitcoin Dashboard"}</h1>
            </div>
            <div class="app-header-actions">
                <ApiStatusBadge />
                <ThemeToggle theme={props.theme.clone()} />
            </div>
        </header>
    }
}

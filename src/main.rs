use yew::prelude::*;

use bitcoin_dashboard::components::{ChatPanel, Header, NewsSection, PriceDashboard};
use bitcoin_dashboard::hooks::use_theme::use_theme;

#[function_component(App)]
fn app() -> Html {
    let theme = use_theme();
    let dark_mode = theme.is_dark();

    html! {
        <div class="app-container">
            <Header theme={theme.clone()} />

            <main class="app-main">
                <PriceDashboard {dark_mode} />

                <div class="app-columns">
                    <ChatPanel />
                    <NewsSection />
                </div>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;

use crate::hooks::use_api_status::{ApiStatus, use_api_status};

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Dismissible inline error banner with an optional "Try Again" action.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class="error-banner" role="alert">
            <span class="error-banner-message">{&props.message}</span>
            if let Some(on_retry) = props.on_retry.clone() {
                <button
                    class="error-banner-retry"
                    onclick={Callback::from(move |_| on_retry.emit(()))}
                >
                    {"Try Again"}
                </button>
            }
            <button class="error-banner-dismiss" onclick={dismiss} aria-label="Dismiss">
                {"✕"}
            </button>
        </div>
    }
}

/// Header badge showing whether the remote API answers its health probe.
#[function_component(ApiStatusBadge)]
pub fn api_status_badge() -> Html {
    let status = use_api_status();

    match &*status {
        ApiStatus::Checking => html! {
            <span class="api-status checking">{"Checking API..."}</span>
        },
        ApiStatus::Online(health) => html! {
            <span class="api-status online" title={health.service.clone()}>
                {"● API "}{health.status.label()}
            </span>
        },
        ApiStatus::Offline(_) => html! {
            <span class="api-status offline">{"● API offline"}</span>
        },
    }
}

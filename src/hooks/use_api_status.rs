use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::health::HealthStatus;
use crate::services::health_api;

#[derive(Clone, PartialEq, Debug)]
pub enum ApiStatus {
    Checking,
    Online(Rc<HealthStatus>),
    Offline(String),
}

impl ApiStatus {
    pub fn is_checking(&self) -> bool {
        matches!(self, Self::Checking)
    }

    /// Returns the health report if the API answered
    pub fn health(&self) -> Option<&Rc<HealthStatus>> {
        match self {
            Self::Online(health) => Some(health),
            _ => None,
        }
    }
}

/// Polls the basic health endpoint for the header badge.
#[hook]
pub fn use_api_status() -> UseStateHandle<ApiStatus> {
    let state = use_state(|| ApiStatus::Checking);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            let state = state.clone();
            let trigger = trigger;
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                match health_api::fetch_health().await {
                    Ok(health) if !aborted_check.get() => {
                        state.set(ApiStatus::Online(Rc::new(health)));
                    }
                    Err(e) if !aborted_check.get() => {
                        state.set(ApiStatus::Offline(e.to_string()));
                    }
                    _ => {} // Request was aborted, ignore result
                }

                // Schedule next poll if enabled
                if Config::ENABLE_AUTO_REFRESH && !aborted_check.get() {
                    TimeoutFuture::new(Config::STATUS_REFRESH_INTERVAL_MS).await;
                    if !aborted_check.get() {
                        trigger.set(trigger_value.wrapping_add(1));
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}

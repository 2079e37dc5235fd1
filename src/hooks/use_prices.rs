use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::error::AppError;
use crate::models::prices::{ChartData, PriceData, PriceSummary};
use crate::services::{fallback, price_api};

/// Handle returned by the `use_prices` hook.
#[derive(Clone, PartialEq)]
pub struct PricesHandle {
    pub price: Option<Rc<PriceData>>,
    pub chart: Option<Rc<ChartData>>,
    pub summary: Option<Rc<PriceSummary>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    pub load_chart: Callback<String>,
    pub clear_error: Callback<()>,
}

type Shared<T> = UseStateHandle<Option<Rc<T>>>;

/// Resolves a price fetch to the snapshot to commit plus the new banner
/// value. Success always yields `None`, so a retry that recovers clears a
/// stale banner; failure substitutes demo data.
fn price_outcome(
    result: Result<PriceData, AppError>,
    now: DateTime<Utc>,
) -> (PriceData, Option<String>) {
    match result {
        Ok(data) => (data, None),
        Err(e) => (fallback::demo_price(now), Some(e.to_string())),
    }
}

/// Chart counterpart of `price_outcome`.
fn chart_outcome(
    result: Result<ChartData, AppError>,
    timeframe: &str,
    now_ms: i64,
) -> (ChartData, Option<String>) {
    match result {
        Ok(data) => (data, None),
        Err(e) => (fallback::demo_chart(timeframe, now_ms), Some(e.to_string())),
    }
}

async fn refresh_price(price: Shared<PriceData>, alive: Rc<RefCell<bool>>) -> Option<String> {
    let result = price_api::fetch_current_price().await;
    if !*alive.borrow() {
        return None;
    }
    let (data, error) = price_outcome(result, Utc::now());
    price.set(Some(Rc::new(data)));
    error
}

async fn refresh_summary(summary: Shared<PriceSummary>, alive: Rc<RefCell<bool>>) {
    let result = price_api::fetch_price_summary().await;
    if !*alive.borrow() {
        return;
    }
    match result {
        Ok(data) => summary.set(Some(Rc::new(data))),
        // Summary degradation is silent; the demo text still renders
        Err(_) => summary.set(Some(Rc::new(fallback::demo_price_summary(Utc::now())))),
    }
}

async fn refresh_chart(
    chart: Shared<ChartData>,
    alive: Rc<RefCell<bool>>,
    generation: Rc<RefCell<u32>>,
    id: u32,
    timeframe: String,
) -> Option<String> {
    let result = price_api::fetch_chart_data(&timeframe).await;
    // Discard after unmount, or when a newer chart request superseded us
    if !*alive.borrow() || *generation.borrow() != id {
        return None;
    }
    let (data, error) = chart_outcome(result, &timeframe, Utc::now().timestamp_millis());
    chart.set(Some(Rc::new(data)));
    error
}

fn next_generation(generation: &Rc<RefCell<u32>>) -> u32 {
    let mut current = generation.borrow_mut();
    *current = current.wrapping_add(1);
    *current
}

/// Price hook: current price, summary and 7d chart fetched concurrently on
/// mount and on `refetch`; any single failure degrades to demo data for
/// that field only. Each fetch cycle replaces the error banner with its own
/// outcome, so a successful retry clears it. Price and summary re-poll
/// every minute; the chart only changes via `load_chart`.
#[hook]
pub fn use_prices() -> PricesHandle {
    let price = use_state(|| None::<Rc<PriceData>>);
    let chart = use_state(|| None::<Rc<ChartData>>);
    let summary = use_state(|| None::<Rc<PriceSummary>>);
    let is_loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let trigger = use_state(|| 0u32);

    let alive = use_mut_ref(|| true);
    let chart_generation = use_mut_ref(|| 0u32);

    {
        let alive = alive.clone();
        use_effect_with((), move |()| {
            move || {
                *alive.borrow_mut() = false;
            }
        });
    }

    // Initial load plus polling. The first pass fetches all three pieces;
    // scheduled passes refresh only price and summary.
    {
        let price = price.clone();
        let chart = chart.clone();
        let summary = summary.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let alive = alive.clone();
        let chart_generation = chart_generation.clone();
        let trigger_value = *trigger;
        let trigger = trigger.clone();

        use_effect_with(trigger_value, move |_| {
            spawn_local(async move {
                if trigger_value == 0 {
                    is_loading.set(true);
                    let id = next_generation(&chart_generation);
                    let (price_err, (), chart_err) = futures::join!(
                        refresh_price(price.clone(), alive.clone()),
                        refresh_summary(summary.clone(), alive.clone()),
                        refresh_chart(
                            chart.clone(),
                            alive.clone(),
                            chart_generation.clone(),
                            id,
                            Config::DEFAULT_CHART_TIMEFRAME.to_string(),
                        ),
                    );
                    if *alive.borrow() {
                        error.set(price_err.or(chart_err));
                        is_loading.set(false);
                    }
                } else {
                    let (price_err, ()) = futures::join!(
                        refresh_price(price.clone(), alive.clone()),
                        refresh_summary(summary.clone(), alive.clone()),
                    );
                    if *alive.borrow() {
                        error.set(price_err);
                    }
                }

                // Schedule next poll if enabled
                if Config::ENABLE_AUTO_REFRESH && *alive.borrow() {
                    TimeoutFuture::new(Config::PRICE_REFRESH_INTERVAL_MS).await;
                    if *alive.borrow() {
                        trigger.set(trigger_value.wrapping_add(1));
                    }
                }
            });

            || ()
        });
    }

    let refetch = {
        let price = price.clone();
        let chart = chart.clone();
        let summary = summary.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let alive = alive.clone();
        let chart_generation = chart_generation.clone();

        Callback::from(move |()| {
            let price = price.clone();
            let chart = chart.clone();
            let summary = summary.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();
            let alive = alive.clone();
            let chart_generation = chart_generation.clone();

            spawn_local(async move {
                is_loading.set(true);
                let id = next_generation(&chart_generation);
                let (price_err, (), chart_err) = futures::join!(
                    refresh_price(price.clone(), alive.clone()),
                    refresh_summary(summary.clone(), alive.clone()),
                    refresh_chart(
                        chart.clone(),
                        alive.clone(),
                        chart_generation.clone(),
                        id,
                        Config::DEFAULT_CHART_TIMEFRAME.to_string(),
                    ),
                );
                if *alive.borrow() {
                    error.set(price_err.or(chart_err));
                    is_loading.set(false);
                }
            });
        })
    };

    let load_chart = {
        let chart = chart.clone();
        let error = error.clone();
        let alive = alive.clone();
        let chart_generation = chart_generation.clone();

        Callback::from(move |timeframe: String| {
            let chart = chart.clone();
            let error = error.clone();
            let alive = alive.clone();
            let chart_generation = chart_generation.clone();
            let id = next_generation(&chart_generation);

            spawn_local(async move {
                let chart_err = refresh_chart(
                    chart,
                    alive.clone(),
                    chart_generation.clone(),
                    id,
                    timeframe,
                )
                .await;
                // Only the newest chart request owns the banner
                if *alive.borrow() && *chart_generation.borrow() == id {
                    error.set(chart_err);
                }
            });
        })
    };

    let clear_error = {
        let error = error.clone();
        Callback::from(move |()| error.set(None))
    };

    PricesHandle {
        price: (*price).clone(),
        chart: (*chart).clone(),
        summary: (*summary).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch,
        load_chart,
        clear_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_price() -> PriceData {
        PriceData {
            symbol: "BTC".to_string(),
            current_price: 51_000.0,
            market_cap: Some(1_000_000_000_000.0),
            total_volume: Some(30_000_000_000.0),
            price_change_percentage_24h: Some(1.1),
            last_updated: None,
            note: None,
        }
    }

    #[test]
    fn recovered_fetch_clears_a_stale_banner() {
        let now = Utc::now();
        let (_, first) = price_outcome(Err(AppError::ApiError("down".to_string())), now);
        assert!(first.is_some());

        let (data, second) = price_outcome(Ok(live_price()), now);
        assert_eq!(second, None);
        assert_eq!(data.current_price, 51_000.0);
        assert!(data.note.is_none());
    }

    #[test]
    fn failed_fetch_substitutes_demo_data_and_reports() {
        let (data, error) = price_outcome(Err(AppError::RateLimited), Utc::now());
        assert_eq!(data.current_price, fallback::DEMO_PRICE);
        assert_eq!(error.as_deref(), Some("Rate limited"));
    }

    #[test]
    fn chart_outcome_mirrors_price_outcome() {
        let (data, error) = chart_outcome(
            Err(AppError::ApiError("down".to_string())),
            "30d",
            1_700_000_000_000,
        );
        assert_eq!(data.timeframe, "30d");
        assert!(error.is_some());

        let served = fallback::demo_chart("7d", 1_700_000_000_000);
        let (_, cleared) = chart_outcome(Ok(served), "7d", 1_700_000_000_000);
        assert_eq!(cleared, None);
    }

    #[test]
    fn cycle_banner_folds_price_over_chart() {
        let price_err = Some("price down".to_string());
        let chart_err = Some("chart down".to_string());
        assert_eq!(price_err.clone().or(chart_err.clone()), price_err);
        assert_eq!(None::<String>.or(chart_err.clone()), chart_err);
        assert_eq!(None::<String>.or(None), None);
    }
}

use yew::prelude::*;

use crate::components::chart::PriceChart;
use crate::components::status::ErrorBanner;
use crate::config::Config;
use crate::hooks::use_prices::use_prices;
use crate::utils::format::{
    format_large_number, format_percentage, format_price, price_change_class,
};

#[derive(Properties, PartialEq)]
pub struct PriceDashboardProps {
    pub dark_mode: bool,
}

/// Price section: snapshot card, derived summary and the timeframe chart.
#[function_component(PriceDashboard)]
pub fn price_dashboard(props: &PriceDashboardProps) -> Html {
    let prices = use_prices();
    let timeframe = use_state(|| AttrValue::from(Config::DEFAULT_CHART_TIMEFRAME));

    let on_timeframe = {
        let timeframe = timeframe.clone();
        let load_chart = prices.load_chart.clone();
        Callback::from(move |selected: String| {
            timeframe.set(AttrValue::from(selected.clone()));
            load_chart.emit(selected);
        })
    };

    let refetch = {
        let refetch = prices.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    if prices.is_loading && prices.price.is_none() {
        return html! {
            <section class="price-section">
                <div class="loading">
                    <div class="spinner"></div>
                    <p>{"Loading Bitcoin price..."}</p>
                </div>
            </section>
        };
    }

    html! {
        <section class="price-section">
            if let Some(error) = prices.error.clone() {
                <ErrorBanner
                    message={error}
                    on_dismiss={prices.clear_error.clone()}
                    on_retry={Some(prices.refetch.clone())}
                />
            }

            if let Some(price) = &prices.price {
                <div class="price-card">
                    <div class="price-card-header">
                        <h2>{"Bitcoin Price"}</h2>
                        <button class="refresh-button" onclick={refetch} title="Refresh">
                            {"⟳"}
                        </button>
                    </div>

                    <p class="current-price">{format_price(price.current_price)}</p>
                    {
                        price.price_change_percentage_24h.map(|change| html! {
                            <p class={classes!("price-change", price_change_class(change))}>
                                {format_percentage(change)}{" (24h)"}
                            </p>
                        })
                    }

                    <div class="price-stats">
                        <div class="price-stat">
                            <span class="stat-label">{"Market Cap"}</span>
                            <span class="stat-value">
                                {price.market_cap.map_or_else(|| "N/A".to_string(), format_large_number)}
                            </span>
                        </div>
                        <div class="price-stat">
                            <span class="stat-label">{"24h Volume"}</span>
                            <span class="stat-value">
                                {price.total_volume.map_or_else(|| "N/A".to_string(), format_large_number)}
                            </span>
                        </div>
                    </div>

                    {
                        price.note.as_ref().map(|note| html! {
                            <p class="demo-note">{note}</p>
                        })
                    }
                </div>
            }

            if let Some(summary) = &prices.summary {
                <div class="price-summary">
                    <span class={classes!("trend-badge", price_change_class(summary.price_change_24h))}>
                        {summary.trend.clone()}
                    </span>
                    <p>{summary.summary.clone()}</p>
                </div>
            }

            <PriceChart
                chart={prices.chart.clone()}
                dark_mode={props.dark_mode}
                active_timeframe={(*timeframe).clone()}
                on_timeframe={on_timeframe}
            />
        </section>
    }
}

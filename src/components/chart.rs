use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::prices::ChartData;

const CHART_ID: &str = "price-chart";

/// Timeframes offered by the chart controls.
pub const TIMEFRAMES: [&str; 5] = ["1d", "7d", "30d", "90d", "1y"];

#[derive(Properties, PartialEq)]
pub struct PriceChartProps {
    pub chart: Option<Rc<ChartData>>,
    pub dark_mode: bool,
    pub active_timeframe: AttrValue,
    pub on_timeframe: Callback<String>,
}

#[function_component(PriceChart)]
pub fn price_chart(props: &PriceChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let chart = props.chart.clone();
        let dark_mode = props.dark_mode;

        use_effect_with(
            (chart, container_ref, dark_mode),
            |(chart, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, chart.as_deref(), *dark_mode);

                    let chart = chart.clone();
                    let dark_mode = *dark_mode;
                    EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                        render_chart(&container, chart.as_deref(), dark_mode);
                    })
                });

                move || drop(listener)
            },
        );
    }

    let buttons = TIMEFRAMES
        .iter()
        .map(|&timeframe| {
            let class = if props.active_timeframe == timeframe {
                "timeframe-button active"
            } else {
                "timeframe-button"
            };
            let on_timeframe = props.on_timeframe.clone();
            let onclick = Callback::from(move |_| on_timeframe.emit(timeframe.to_string()));
            html! {
                <button {class} {onclick}>{timeframe.to_uppercase()}</button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="price-chart">
            <div class="timeframe-buttons">{buttons}</div>
            <div class="chart-container" ref={container_ref}>
                <div id={CHART_ID} />
            </div>
        </div>
    }
}

fn render_chart(container: &HtmlElement, chart: Option<&ChartData>, dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let Some(chart) = chart else { return };
    let built = build_chart(chart, dark_mode);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &built) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

fn build_chart(chart: &ChartData, dark_mode: bool) -> CharmingChart {
    let (x_data, y_data) = chart.series_data();

    // Theme-aware colors
    let (title_color, axis_color, grid_color) = if dark_mode {
        ("#e4e4e7", "#a1a1aa", "#404040")
    } else {
        ("#1f2937", "#6b7280", "#e5e7eb")
    };
    let line_color = if dark_mode { "#fbbf24" } else { "#f7931a" };

    CharmingChart::new()
        .title(
            Title::new()
                .text(format!("{} / USD ({})", chart.symbol, chart.timeframe))
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data)
                .axis_label(AxisLabel::new().rotate(45).color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("USD")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .data(y_data)
                .show_symbol(false)
                .line_style(LineStyle::new().color(line_color).width(2.0)),
        )
}

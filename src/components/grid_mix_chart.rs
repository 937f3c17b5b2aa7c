use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::chart::{ChartSeries, FUEL_LEGEND, chart_points, chart_series};
use crate::models::grid_mix::GridMix;
use crate::utils::debounce::debounced_resize_listener;

const CHART_ID: &str = "grid-mix-chart";

#[wasm_bindgen]
extern "C" {
    /// Releases the ECharts instance bound to `element`, if any.
    #[wasm_bindgen(js_namespace = echarts, js_name = dispose)]
    fn dispose_chart(element: &HtmlElement);
}

#[derive(Properties, PartialEq)]
pub struct GridMixChartProps {
    pub data: Rc<GridMix>,
}

/// Line chart of generation over time, one line per fuel type.
#[function_component(GridMixChart)]
pub fn grid_mix_chart(props: &GridMixChartProps) -> Html {
    let container_ref = use_node_ref();
    let chart_ref = use_node_ref();
    let series = use_memo(props.data.clone(), |data| {
        chart_series(&chart_points(data.records()))
    });

    // Fuels outside the documented legend still get a swatch
    let unlisted = series
        .iter()
        .filter(|s| !s.in_legend)
        .map(|s| html! {
            <li key={s.name.clone()} class="unlisted-fuel">
                <span class="legend-swatch" style={format!("background-color: {}", s.color)} />
                {s.name.clone()}
            </li>
        })
        .collect::<Html>();

    {
        let container_ref = container_ref.clone();
        let chart_ref = chart_ref.clone();

        use_effect_with(series, move |series| {
            let target = container_ref
                .cast::<HtmlElement>()
                .zip(chart_ref.cast::<HtmlElement>());

            let listener = target.as_ref().and_then(|(container, chart)| {
                render_chart(container, chart, series);

                let (container, chart, series) = (container.clone(), chart.clone(), series.clone());
                debounced_resize_listener(
                    move || render_chart(&container, &chart, &series),
                    Config::RESIZE_DEBOUNCE_MS,
                )
            });

            move || {
                drop(listener);
                if let Some((_, chart)) = target {
                    dispose_chart(&chart);
                }
            }
        });
    }

    html! {
        <div class="grid-mix-chart">
            <h3>{"Generation Trends by Fuel Type"}</h3>
            <div class="chart-layout">
                <div class="chart-container" ref={container_ref}>
                    <div id={CHART_ID} ref={chart_ref} />
                </div>
                <ul class="fuel-legend">
                    {
                        FUEL_LEGEND.iter().map(|(label, color)| html! {
                            <li key={*label}>
                                <span class="legend-swatch" style={format!("background-color: {color}")} />
                                {*label}
                            </li>
                        }).collect::<Html>()
                    }
                    {unlisted}
                </ul>
            </div>
        </div>
    }
}

fn render_chart(container: &HtmlElement, chart: &HtmlElement, series: &[ChartSeries]) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    // A redraw replaces whatever instance the previous draw left behind
    dispose_chart(chart);

    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &build_chart(series)) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(series: &[ChartSeries]) -> CharmingChart {
    let (axis_color, grid_color) = ("#6b7280", "#e5e7eb");

    let mut chart = CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("10%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Time)
                .name("Date")
                .split_number(Config::CHART_MAX_TICKS)
                .axis_label(
                    AxisLabel::new()
                        .color(axis_color)
                        .formatter(Config::CHART_TICK_FORMAT),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Generation (MWh)")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    for s in series {
        chart = chart.series(
            Line::new()
                .name(s.name.as_str())
                .item_style(ItemStyle::new().color(s.color))
                .line_style(LineStyle::new().color(s.color).width(2))
                .data(s.time_values()),
        );
    }

    chart
}

use super::grid_mix::GridMixRecord;
use chrono::{DateTime, Utc};

/// Fuel types with a documented color, in legend order.
pub const FUEL_LEGEND: &[(&str, &str)] = &[
    ("Coal", "#d62728"),
    ("Natural Gas", "#ff7f0e"),
    ("Nuclear", "#2ca02c"),
    ("Petroleum", "#8c564b"),
    ("Other", "#7f7f7f"),
    ("Solar", "#e377c2"),
    ("Hydro", "#9467bd"),
    ("Wind", "#1f77b4"),
];

/// Colors handed out, in order, to series missing from [`FUEL_LEGEND`].
const FALLBACK_COLORS: &[&str] = &["#17becf", "#bcbd22", "#393b79", "#637939", "#843c39"];

/// Color documented in the legend for a fuel type, if any.
pub fn legend_color(series_name: &str) -> Option<&'static str> {
    FUEL_LEGEND
        .iter()
        .find(|(label, _)| *label == series_name)
        .map(|(_, color)| *color)
}

/// One plotted value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: DateTime<Utc>,
    pub series_name: String,
    pub value: f64,
}

impl From<&GridMixRecord> for ChartPoint {
    fn from(r: &GridMixRecord) -> Self {
        Self {
            date: r.timestamp,
            series_name: r.type_name.clone(),
            value: r.generation_mwh,
        }
    }
}

/// Maps every record to one chart point.
pub fn chart_points(records: &[GridMixRecord]) -> Vec<ChartPoint> {
    records.iter().map(ChartPoint::from).collect()
}

/// A line on the chart: all points sharing a fuel type, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: &'static str,
    /// Whether `color` comes from [`FUEL_LEGEND`].
    pub in_legend: bool,
    pub points: Vec<(DateTime<Utc>, f64)>,
}

impl ChartSeries {
    /// Points as `[epoch millis, value]` pairs for a time axis.
    pub fn time_values(&self) -> Vec<Vec<f64>> {
        self.points
            .iter()
            .map(|(date, value)| vec![date.timestamp_millis() as f64, *value])
            .collect()
    }
}

/// Groups points into one series per distinct name, in order of first
/// appearance.
pub fn chart_series(points: &[ChartPoint]) -> Vec<ChartSeries> {
    let mut series: Vec<ChartSeries> = Vec::new();
    let mut unknown = 0;

    for point in points {
        let index = match series.iter().position(|s| s.name == point.series_name) {
            Some(index) => index,
            None => {
                let (color, in_legend) = match legend_color(&point.series_name) {
                    Some(color) => (color, true),
                    None => {
                        let color = FALLBACK_COLORS[unknown % FALLBACK_COLORS.len()];
                        unknown += 1;
                        (color, false)
                    }
                };
                series.push(ChartSeries {
                    name: point.series_name.clone(),
                    color,
                    in_legend,
                    points: Vec::new(),
                });
                series.len() - 1
            }
        };
        series[index].points.push((point.date, point.value));
    }

    for s in &mut series {
        s.points.sort_by_key(|(date, _)| *date);
    }

    series
}

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Upper bound on X axis ticks, whatever the date range
    pub const CHART_MAX_TICKS: u32 = 12;

    /// Month ticks labelled like `Jan '24`
    pub const CHART_TICK_FORMAT: &'static str = "{MMM} '{yy}";

    /// Delay before redrawing the chart after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Map view over the contiguous United States as west,south,east,north
    pub const MAP_BBOX: (f64, f64, f64, f64) = (-125.0, 24.0, -66.9, 49.5);

    pub const MAP_EMBED_BASE: &'static str = "https://www.openstreetmap.org/export/embed.html";
}

/// URL of the embedded map for [`Config::MAP_BBOX`].
pub fn map_embed_url() -> String {
    let (west, south, east, north) = Config::MAP_BBOX;
    format!(
        "{}?bbox={west}%2C{south}%2C{east}%2C{north}&layer=mapnik",
        Config::MAP_EMBED_BASE
    )
}

use super::error::AppError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

/// Units the grid-mix endpoint reports generation in.
pub const EXPECTED_UNITS: &str = "megawatthours";

/// One row of generation data as it arrives on the wire.
///
/// Field names follow the API's kebab-case keys. Nothing outside this module
/// should see them; [`GridMixRecord`] is the internal representation.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiGridMixRecord {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub respondent: String,
    #[serde(default, rename = "respondent-name")]
    pub respondent_name: String,
    #[serde(default)]
    pub fueltype: String,
    #[serde(default, rename = "type-name")]
    pub type_name: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default, rename = "timezone-description")]
    pub timezone_description: String,
    #[serde(alias = "Generation (MWh)")]
    pub generation_mwh: f64,
    #[serde(default, rename = "value-units")]
    pub value_units: String,
}

/// A normalized generation record for one fuel type at one point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct GridMixRecord {
    pub timestamp: DateTime<Utc>,
    pub period: String,
    pub respondent: String,
    pub respondent_name: String,
    pub fuel_type: String,
    pub type_name: String,
    pub timezone: String,
    pub timezone_description: String,
    pub generation_mwh: f64,
    pub value_units: String,
}

impl TryFrom<ApiGridMixRecord> for GridMixRecord {
    type Error = AppError;

    fn try_from(r: ApiGridMixRecord) -> Result<Self, Self::Error> {
        let raw_timestamp = r.timestamp.as_deref().ok_or_else(|| {
            AppError::DataError(format!("Missing timestamp for {}", r.type_name))
        })?;
        let timestamp = parse_timestamp(raw_timestamp)?;
        if r.generation_mwh.is_nan() {
            return Err(AppError::DataError(format!(
                "Generation value for {} at {raw_timestamp} is not a number",
                r.type_name
            )));
        }

        Ok(Self {
            timestamp,
            period: r.period,
            respondent: r.respondent,
            respondent_name: r.respondent_name,
            fuel_type: r.fueltype,
            type_name: r.type_name,
            timezone: r.timezone,
            timezone_description: r.timezone_description,
            generation_mwh: r.generation_mwh,
            value_units: r.value_units,
        })
    }
}

/// Parses an ISO-8601 timestamp, with or without a time component.
///
/// Offsets are honoured when present; timestamps without one are read as UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = s.strip_suffix('Z').unwrap_or(s);

    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Ok(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
        .map_err(|_| AppError::DataError(format!("Failed to parse timestamp '{s}'")))
}

/// The record set returned for one balancing authority.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GridMix {
    records: Vec<GridMixRecord>,
}

impl GridMix {
    pub fn new(records: Vec<GridMixRecord>) -> Self {
        Self { records }
    }

    /// Decodes a grid-mix response body, rejecting it if any record is invalid.
    ///
    /// The error names how many records failed and why the first one did.
    pub fn from_json(body: &str) -> Result<Self, AppError> {
        let raw: Vec<ApiGridMixRecord> = serde_json::from_str(body)
            .map_err(|e| AppError::DataError(format!("Failed to parse grid mix: {e}")))?;

        let total = raw.len();
        let (records, rejected): (Vec<_>, Vec<_>) = raw
            .into_iter()
            .map(GridMixRecord::try_from)
            .partition(Result::is_ok);

        if let Some(Err(first)) = rejected.first() {
            return Err(AppError::DataError(format!(
                "{} of {total} grid mix records rejected; first: {first}",
                rejected.len()
            )));
        }

        Ok(Self::new(records.into_iter().flatten().collect()))
    }

    pub fn records(&self) -> &[GridMixRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose units differ from [`EXPECTED_UNITS`].
    pub fn unexpected_units(&self) -> impl Iterator<Item = &GridMixRecord> {
        self.records
            .iter()
            .filter(|r| !r.value_units.is_empty() && r.value_units != EXPECTED_UNITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(parse_timestamp("2024-01-01T00:00:00Z").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-01-01T00:00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-01-01T00:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-01-01").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2024-01-01T02:00:00+02:00").unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("last tuesday"),
            Err(AppError::DataError(_))
        ));
    }

    #[test]
    fn test_from_json_normalizes_kebab_case() {
        let json = r#"[{
            "timestamp": "2024-03-15T00:00:00",
            "period": "2024-03-15",
            "respondent": "ERCO",
            "respondent-name": "Electric Reliability Council of Texas, Inc.",
            "fueltype": "COL",
            "type-name": "Coal",
            "timezone": "Pacific",
            "timezone-description": "Pacific",
            "Generation (MWh)": 1200.5,
            "value-units": "megawatthours"
        }]"#;

        let mix = GridMix::from_json(json).unwrap();
        let record = &mix.records()[0];

        assert_eq!(mix.len(), 1);
        assert_eq!(record.type_name, "Coal");
        assert_eq!(record.fuel_type, "COL");
        assert_eq!(
            record.respondent_name,
            "Electric Reliability Council of Texas, Inc."
        );
        assert_eq!(record.generation_mwh, 1200.5);
        assert_eq!(
            record.timestamp,
            Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap()
        );
        assert_eq!(mix.unexpected_units().count(), 0);
    }

    #[test]
    fn test_from_json_accepts_snake_case_generation() {
        let json = r#"[{"timestamp": "2024-03-15", "type-name": "Wind", "generation_mwh": 7}]"#;

        let mix = GridMix::from_json(json).unwrap();
        assert_eq!(mix.records()[0].generation_mwh, 7.0);
        assert_eq!(mix.records()[0].respondent, "");
    }

    #[test]
    fn test_from_json_empty_array() {
        let mix = GridMix::from_json("[]").unwrap();
        assert!(mix.is_empty());
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        assert!(matches!(
            GridMix::from_json(r#"{"error": "boom"}"#),
            Err(AppError::DataError(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_bad_timestamp() {
        let json = r#"[{"timestamp": "soon", "type-name": "Coal", "generation_mwh": 1}]"#;
        assert!(GridMix::from_json(json).is_err());
    }

    #[test]
    fn test_rejection_reports_failed_count() {
        let json = r#"[
            {"timestamp": "2024-03-15", "type-name": "Coal", "generation_mwh": 1},
            {"timestamp": null, "type-name": "Coal", "generation_mwh": 2},
            {"timestamp": "NaT", "type-name": "Wind", "generation_mwh": 3}
        ]"#;

        let err = GridMix::from_json(json).unwrap_err();

        assert!(matches!(err, AppError::DataError(_)));
        assert!(err.to_string().contains("2 of 3 grid mix records rejected"));
    }

    #[test]
    fn test_nan_generation_rejected() {
        let raw = ApiGridMixRecord {
            timestamp: Some("2024-01-01".to_string()),
            period: "2024-01-01".to_string(),
            respondent: "ERCO".to_string(),
            respondent_name: String::new(),
            fueltype: "COL".to_string(),
            type_name: "Coal".to_string(),
            timezone: String::new(),
            timezone_description: String::new(),
            generation_mwh: f64::NAN,
            value_units: EXPECTED_UNITS.to_string(),
        };

        assert!(matches!(
            GridMixRecord::try_from(raw),
            Err(AppError::DataError(_))
        ));
    }

    #[test]
    fn test_unexpected_units_flagged() {
        let json = r#"[
            {"timestamp": "2024-03-15", "type-name": "Coal", "generation_mwh": 1, "value-units": "megawatthours"},
            {"timestamp": "2024-03-16", "type-name": "Coal", "generation_mwh": 2, "value-units": "kilowatthours"}
        ]"#;

        let mix = GridMix::from_json(json).unwrap();
        assert_eq!(mix.unexpected_units().count(), 1);
    }
}

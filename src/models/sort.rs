use super::{error::AppError, grid_mix::GridMixRecord};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Column the generation table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Timestamp,
    TypeName,
    Generation,
}

/// How values of a column compare against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    Text,
    Number,
}

impl SortKey {
    /// Field name used for the column, matching the API's record keys.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::TypeName => "type-name",
            Self::Generation => "generation_mwh",
        }
    }

    /// Column header shown in the table.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Timestamp => "Date",
            Self::TypeName => "Fuel Type",
            Self::Generation => "Generation (MWh)",
        }
    }

    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Timestamp => FieldKind::Date,
            Self::TypeName => FieldKind::Text,
            Self::Generation => FieldKind::Number,
        }
    }

    /// All sortable columns in display order.
    pub fn all() -> &'static [SortKey] {
        &[Self::Timestamp, Self::TypeName, Self::Generation]
    }

    /// Comparator for this column, picked once from its field kind.
    fn comparator(self) -> fn(&GridMixRecord, &GridMixRecord) -> Ordering {
        match self.kind() {
            FieldKind::Date => by_timestamp,
            FieldKind::Text => by_type_name,
            FieldKind::Number => by_generation,
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(key) = Self::all().iter().find(|k| k.field() == s) {
            return Ok(*key);
        }

        match s {
            "type_name" => Ok(Self::TypeName),
            "Generation (MWh)" => Ok(Self::Generation),
            _ => Err(AppError::ConfigError(format!("Unknown sort column: {s}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Value for the `aria-sort` attribute.
    pub fn aria(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Active sort column and direction of the generation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Timestamp,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// State after the user clicks the header of `key`.
    ///
    /// The active column flips direction; any other column becomes active,
    /// ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.reversed())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }

    /// Direction for `key` if it is the active column.
    pub fn direction_for(&self, key: SortKey) -> Option<SortDirection> {
        (self.key == key).then_some(self.direction)
    }

    /// Returns the records in display order without touching the input.
    pub fn sort<'a>(&self, records: &'a [GridMixRecord]) -> Vec<&'a GridMixRecord> {
        let compare = self.key.comparator();
        let mut sorted: Vec<&GridMixRecord> = records.iter().collect();

        // Reversing the ordering, not the output, keeps ties in input order.
        match self.direction {
            SortDirection::Ascending => sorted.sort_by(|a, b| compare(a, b)),
            SortDirection::Descending => sorted.sort_by(|a, b| compare(a, b).reverse()),
        }

        sorted
    }
}

fn by_timestamp(a: &GridMixRecord, b: &GridMixRecord) -> Ordering {
    a.timestamp.cmp(&b.timestamp)
}

fn by_type_name(a: &GridMixRecord, b: &GridMixRecord) -> Ordering {
    compare_text(&a.type_name, &b.type_name)
}

fn by_generation(a: &GridMixRecord, b: &GridMixRecord) -> Ordering {
    a.generation_mwh
        .partial_cmp(&b.generation_mwh)
        .unwrap_or(Ordering::Equal)
}

/// Case-insensitive ordering with lowercase first on ties.
///
/// Only matches browser collation for plain ASCII labels: accented letters
/// sort by code point, after `z`.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// A table row ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub date: String,
    pub type_name: String,
    pub generation: String,
}

impl From<&GridMixRecord> for TableRow {
    fn from(r: &GridMixRecord) -> Self {
        Self {
            date: format_date(&r.timestamp),
            type_name: r.type_name.clone(),
            generation: format_thousands(r.generation_mwh),
        }
    }
}

/// Sorts and formats the records for the generation table.
pub fn table_rows(records: &[GridMixRecord], sort: SortState) -> Vec<TableRow> {
    sort.sort(records).into_iter().map(TableRow::from).collect()
}

/// Formats a date as `Jan 5, 2024`.
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// Formats a number with `,` thousands separators, keeping every digit of the
/// shortest representation of the value.
pub fn format_thousands(value: f64) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(day: u32, type_name: &str, mwh: f64) -> GridMixRecord {
        GridMixRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            period: String::new(),
            respondent: "PJM".to_string(),
            respondent_name: String::new(),
            fuel_type: String::new(),
            type_name: type_name.to_string(),
            timezone: String::new(),
            timezone_description: String::new(),
            generation_mwh: mwh,
            value_units: "megawatthours".to_string(),
        }
    }

    #[test]
    fn test_default_sort_state() {
        let state = SortState::default();
        assert_eq!(state.key, SortKey::Timestamp);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let state = SortState::default().toggled(SortKey::Timestamp);
        assert_eq!(state.direction, SortDirection::Ascending);
        assert_eq!(state.toggled(SortKey::Timestamp).direction, SortDirection::Descending);
    }

    #[test]
    fn test_toggle_other_column_resets_to_ascending() {
        let state = SortState::default().toggled(SortKey::Generation);
        assert_eq!(state, SortState::new(SortKey::Generation, SortDirection::Ascending));
    }

    #[test]
    fn test_sort_text_ignores_case() {
        let records = vec![record(1, "wind", 1.0), record(2, "Coal", 2.0), record(3, "Hydro", 3.0)];
        let state = SortState::new(SortKey::TypeName, SortDirection::Ascending);

        let names: Vec<&str> = state.sort(&records).iter().map(|r| r.type_name.as_str()).collect();
        assert_eq!(names, vec!["Coal", "Hydro", "wind"]);
    }

    #[test]
    fn test_sort_numbers() {
        let records = vec![record(1, "Coal", 900.0), record(2, "Coal", 12_000.0), record(3, "Coal", 50.5)];
        let state = SortState::new(SortKey::Generation, SortDirection::Descending);

        let values: Vec<f64> = state.sort(&records).iter().map(|r| r.generation_mwh).collect();
        assert_eq!(values, vec![12_000.0, 900.0, 50.5]);
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let records = vec![
            record(1, "Coal", 10.0),
            record(2, "Wind", 10.0),
            record(3, "Solar", 10.0),
        ];

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let state = SortState::new(SortKey::Generation, direction);
            let days: Vec<u32> = state
                .sort(&records)
                .iter()
                .map(|r| chrono::Datelike::day(&r.timestamp))
                .collect();
            assert_eq!(days, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_opposite_direction_reverses_distinct_keys() {
        let records = vec![record(3, "Solar", 3.0), record(1, "Coal", 1.0), record(2, "Nuclear", 2.0)];

        for &key in SortKey::all() {
            let asc = SortState::new(key, SortDirection::Ascending).sort(&records);
            let mut desc = SortState::new(key, SortDirection::Descending).sort(&records);
            desc.reverse();
            assert_eq!(asc, desc, "key {key:?}");
        }
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let records = vec![record(1, "Coal", 1.0), record(2, "Coal", 2.0)];
        let before = records.clone();

        let _ = SortState::default().sort(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("type-name".parse::<SortKey>().unwrap(), SortKey::TypeName);
        assert_eq!("Generation (MWh)".parse::<SortKey>().unwrap(), SortKey::Generation);
        assert!("respondent".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_every_field_name_parses_back() {
        for &key in SortKey::all() {
            assert_eq!(key.field().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_text_collation_is_ascii_only() {
        assert_eq!(compare_text("coal", "Coal"), Ordering::Less);
        assert_eq!(compare_text("Wind", "coal"), Ordering::Greater);
        assert_eq!(compare_text("Électricité", "Zeta"), Ordering::Greater);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(1_234_567.25), "1,234,567.25");
        assert_eq!(format_thousands(-45_000.5), "-45,000.5");
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 2, 5, 13, 0, 0).unwrap();
        assert_eq!(format_date(&dt), "Feb 5, 2024");
    }

    #[test]
    fn test_table_rows_formatting() {
        let rows = table_rows(&[record(1, "Coal", 1500.0)], SortState::default());
        assert_eq!(
            rows,
            vec![TableRow {
                date: "Jan 1, 2024".to_string(),
                type_name: "Coal".to_string(),
                generation: "1,500".to_string(),
            }]
        );
    }

    #[test]
    fn test_table_rows_empty() {
        assert!(table_rows(&[], SortState::default()).is_empty());
    }
}

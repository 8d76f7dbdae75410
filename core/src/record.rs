use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback position for records without a usable GPS fix (country centroid).
pub const DEFAULT_LATITUDE: f64 = 51.1657;
pub const DEFAULT_LONGITUDE: f64 = 10.4515;

/// Canonical named shape for one image row. The host page embeds rows as
/// positional JSON tuples in two layouts: with a thumbnail slot
/// (`[id, name, description, category, filepath, thumbnailPath, lat, lon]`)
/// and without (`[id, name, description, category, filepath, lat, lon]`).
/// The layouts carry no version marker, so [`record_from_row`] decides by
/// arity: 8 or more slots means the thumbnail variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub filepath: String,
    pub thumbnail_path: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Parses the JSON dataset embedded in the page. Any failure yields an
/// empty dataset rather than an error; partial data must still render.
pub fn parse_dataset(raw: &str) -> Vec<ImageRecord> {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };
    let Some(rows) = value.as_array() else {
        return Vec::new();
    };
    rows.iter().filter_map(record_from_row).collect()
}

/// Converts one positional tuple into a record. Rows that are not arrays
/// or carry no id are dropped; everything else is defaulted leniently.
pub fn record_from_row(row: &Value) -> Option<ImageRecord> {
    let slots = row.as_array()?;
    let id = id_slot(slots.first()?)?;
    let with_thumbnail = slots.len() >= 8;
    let (lat_slot, lon_slot) = if with_thumbnail { (6, 7) } else { (5, 6) };
    let thumbnail_path = if with_thumbnail {
        slots
            .get(5)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .filter(|path| !path.is_empty())
    } else {
        None
    };
    Some(ImageRecord {
        id,
        name: string_slot(slots, 1),
        description: string_slot(slots, 2),
        category: string_slot(slots, 3),
        filepath: string_slot(slots, 4),
        thumbnail_path,
        latitude: coordinate_slot(slots, lat_slot, DEFAULT_LATITUDE),
        longitude: coordinate_slot(slots, lon_slot, DEFAULT_LONGITUDE),
    })
}

fn id_slot(value: &Value) -> Option<String> {
    if let Some(number) = value.as_i64() {
        return Some(number.to_string());
    }
    if let Some(number) = value.as_f64() {
        return Some(number.to_string());
    }
    value
        .as_str()
        .map(str::to_owned)
        .filter(|id| !id.trim().is_empty())
}

fn string_slot(slots: &[Value], index: usize) -> String {
    slots
        .get(index)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

// Zero doubles as "no fix" in the upstream data, so it falls through to the
// default coordinate along with missing and non-numeric slots. Numeric
// strings are accepted.
fn coordinate_slot(slots: &[Value], index: usize, fallback: f64) -> f64 {
    match slots.get(index).and_then(numeric) {
        Some(value) if value.is_finite() && value != 0.0 => value,
        _ => fallback,
    }
}

fn numeric(value: &Value) -> Option<f64> {
    if let Some(number) = value.as_f64() {
        return Some(number);
    }
    value.as_str()?.trim().parse::<f64>().ok()
}

//! Frontend Models
//!
//! Data structures matching the backend's entry records, plus the
//! client-only draft and request payload shapes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned entry identifier.
///
/// The backend emits either `id` or Mongo's `_id`, as a hex string or a
/// number. Both are kept as text and used verbatim in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => EntryId::new(s),
            RawId::Unsigned(n) => EntryId::from(n),
            RawId::Signed(n) => EntryId::new(n.to_string()),
        })
    }
}

/// Entry data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(alias = "_id")]
    pub id: EntryId,
    #[serde(default)]
    pub dish: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
}

// ========================
// Drafts
// ========================

/// One editable field of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Dish,
    Ingredients,
    Calories,
    Fat,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Dish,
        DraftField::Ingredients,
        DraftField::Calories,
        DraftField::Fat,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Dish => "dish",
            DraftField::Ingredients => "ingredients",
            DraftField::Calories => "calories",
            DraftField::Fat => "fat",
        }
    }

    /// Numeric fields render as `type="number"` inputs.
    pub fn is_numeric(self) -> bool {
        matches!(self, DraftField::Calories | DraftField::Fat)
    }
}

/// Entry-shaped form contents, kept as the raw text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftEntry {
    pub dish: String,
    pub ingredients: String,
    pub calories: String,
    pub fat: String,
}

impl DraftEntry {
    /// Seed an edit draft with an entry's current values
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            dish: entry.dish.clone(),
            ingredients: entry.ingredients.clone(),
            calories: entry.calories.map(|v| v.to_string()).unwrap_or_default(),
            fat: entry.fat.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Dish => &self.dish,
            DraftField::Ingredients => &self.ingredients,
            DraftField::Calories => &self.calories,
            DraftField::Fat => &self.fat,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Dish => self.dish = value,
            DraftField::Ingredients => self.ingredients = value,
            DraftField::Calories => self.calories = value,
            DraftField::Fat => self.fat = value,
        }
    }

    /// Build the request body. Numbers that don't parse are sent as `null`
    /// rather than rejected.
    pub fn to_payload(&self) -> EntryPayload {
        EntryPayload {
            ingredients: self.ingredients.clone(),
            dish: self.dish.clone(),
            calories: parse_js_float(&self.calories),
            fat: parse_js_float(&self.fat),
        }
    }
}

// ========================
// Request Payloads
// ========================

/// Body of the create and full-update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryPayload {
    pub ingredients: String,
    pub dish: String,
    pub calories: Option<f64>,
    pub fat: Option<f64>,
}

/// Body of the ingredients-only update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientsPayload {
    pub ingredients: String,
}

/// Parse a number the way JavaScript's `parseFloat` does: skip leading
/// whitespace, then take the longest prefix that forms a decimal literal.
/// `None` stands in for `NaN`.
pub fn parse_js_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let value = f64::INFINITY;
        return Some(if s.starts_with('-') { -value } else { value });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

// ========================
// Summaries
// ========================

/// Running totals over the loaded entries
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntryTotals {
    pub count: usize,
    pub calories: f64,
    pub fat: f64,
}

impl EntryTotals {
    pub fn of(entries: &[Entry]) -> Self {
        entries.iter().fold(Self::default(), |acc, entry| Self {
            count: acc.count + 1,
            calories: acc.calories + entry.calories.filter(|v| v.is_finite()).unwrap_or(0.0),
            fat: acc.fat + entry.fat.filter(|v| v.is_finite()).unwrap_or(0.0),
        })
    }
}

/// Largest magnitude printed through the integer path; `as i64` saturates
/// beyond it.
const INTEGRAL_DISPLAY_LIMIT: f64 = 1e15;

/// Format an optional amount for display
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < INTEGRAL_DISPLAY_LIMIT => format!("{}", v as i64),
        Some(v) if v.is_finite() => format!("{:.1}", v),
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_js_float() {
        assert_eq!(parse_js_float("2.5"), Some(2.5));
        assert_eq!(parse_js_float("  150"), Some(150.0));
        assert_eq!(parse_js_float("2.5g"), Some(2.5));
        assert_eq!(parse_js_float(".5"), Some(0.5));
        assert_eq!(parse_js_float("5."), Some(5.0));
        assert_eq!(parse_js_float("-3"), Some(-3.0));
        assert_eq!(parse_js_float("1e3"), Some(1000.0));
        assert_eq!(parse_js_float("1e"), Some(1.0));
        assert_eq!(parse_js_float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_js_float(""), None);
        assert_eq!(parse_js_float("abc"), None);
        assert_eq!(parse_js_float("."), None);
        assert_eq!(parse_js_float("-"), None);
    }

    #[test]
    fn test_draft_to_payload_coerces_numbers() {
        let draft = DraftEntry {
            dish: "Salad".to_string(),
            ingredients: "lettuce,tomato".to_string(),
            calories: "150".to_string(),
            fat: "2.5".to_string(),
        };
        let body = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(
            body,
            json!({"ingredients": "lettuce,tomato", "dish": "Salad", "calories": 150.0, "fat": 2.5})
        );
    }

    #[test]
    fn test_malformed_fat_is_sent_as_null() {
        let mut draft = DraftEntry::default();
        draft.set(DraftField::Dish, "Soup".to_string());
        draft.set(DraftField::Fat, "lots".to_string());

        let payload = draft.to_payload();
        assert_eq!(payload.fat, None);

        let body = serde_json::to_value(&payload).unwrap();
        assert!(body.get("fat").unwrap().is_null());
    }

    #[test]
    fn test_entry_accepts_mongo_id() {
        let entry: Entry = serde_json::from_value(json!({
            "_id": "64b0c2f1a2b3c4d5e6f70812",
            "dish": "Omelette",
            "ingredients": "eggs",
            "calories": 320,
            "fat": null
        }))
        .unwrap();
        assert_eq!(entry.id.as_str(), "64b0c2f1a2b3c4d5e6f70812");
        assert_eq!(entry.calories, Some(320.0));
        assert_eq!(entry.fat, None);
    }

    #[test]
    fn test_entry_accepts_numeric_id_and_missing_fields() {
        let entry: Entry = serde_json::from_value(json!({"id": 7, "dish": "Toast"})).unwrap();
        assert_eq!(entry.id, EntryId::from(7));
        assert_eq!(entry.ingredients, "");
        assert_eq!(entry.calories, None);
    }

    #[test]
    fn test_draft_from_entry() {
        let entry = Entry {
            id: EntryId::from(3),
            dish: "Rice".to_string(),
            ingredients: "rice".to_string(),
            calories: Some(200.0),
            fat: Some(0.4),
        };
        let draft = DraftEntry::from_entry(&entry);
        assert_eq!(draft.get(DraftField::Calories), "200");
        assert_eq!(draft.get(DraftField::Fat), "0.4");
        assert_eq!(draft.to_payload().calories, Some(200.0));
    }

    #[test]
    fn test_totals_skip_missing_values() {
        let entries = vec![
            Entry {
                id: EntryId::from(1),
                dish: String::new(),
                ingredients: String::new(),
                calories: Some(100.0),
                fat: Some(1.5),
            },
            Entry {
                id: EntryId::from(2),
                dish: String::new(),
                ingredients: String::new(),
                calories: None,
                fat: Some(2.0),
            },
        ];
        let totals = EntryTotals::of(&entries);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.calories, 100.0);
        assert_eq!(totals.fat, 3.5);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(150.0)), "150");
        assert_eq!(format_amount(Some(2.5)), "2.5");
        assert_eq!(format_amount(None), "-");
    }

    #[test]
    fn test_format_amount_huge_values_do_not_saturate() {
        assert_eq!(format_amount(Some(1e20)), "100000000000000000000.0");
        assert_eq!(format_amount(Some(-1e20)), "-100000000000000000000.0");
        assert_eq!(format_amount(Some(999_999_999_999_999.0)), "999999999999999");
    }
}

use anyhow::{anyhow, bail, Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::index::{AssessmentRecord, Subscale};

/// Column prefix of the `CRSR_<ii>_<Item>` naming convention used by CRS-R
/// datasets (e.g. `CRSR_1_Motor` is the Motor subscore of assessment 1).
pub const COLUMN_PREFIX: &str = "CRSR";

/// One dataset row: a flat map of column name to value, typically one
/// subject with columns for every assessment performed.
pub type Row = Map<String, Value>;

/// Load dataset rows from a JSON or YAML file. The file may contain a single
/// row object or an array of row objects.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    if !path.exists() {
        bail!("Dataset file not found at {}", path.display());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset at {}", path.display()))?;

    rows_from_value(parse_document(path, &contents)?)
}

// Dispatch on the file extension; anything other than the two supported
// formats is rejected up front rather than fed to the wrong parser.
fn parse_document(path: &Path, contents: &str) -> Result<Value> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(contents)
            .with_context(|| format!("Failed to parse JSON dataset at {}", path.display())),
        Some("yaml") | Some("yml") => serde_saphyr::from_str(contents)
            .with_context(|| format!("Failed to parse YAML dataset at {}", path.display())),
        Some(other) => bail!(
            "Unsupported dataset extension '.{}' for {}; expected .json, .yaml, or .yml",
            other,
            path.display()
        ),
        None => bail!(
            "Dataset {} has no file extension; expected .json, .yaml, or .yml",
            path.display()
        ),
    }
}

/// Normalize a parsed dataset document into rows.
pub fn rows_from_value(value: Value) -> Result<Vec<Row>> {
    match value {
        Value::Object(row) => Ok(vec![row]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(row) => Ok(row),
                other => Err(anyhow!(
                    "Dataset row {} is not an object (found {})",
                    i + 1,
                    json_type(&other)
                )),
            })
            .collect(),
        other => bail!(
            "Dataset must be a row object or an array of rows (found {})",
            json_type(&other)
        ),
    }
}

/// Assessment sequence numbers present in a row: the distinct `ii` values
/// for which all six `CRSR_<ii>_<Item>` columns exist, in ascending order.
pub fn assessment_indices(row: &Row) -> Vec<u32> {
    let candidates: BTreeSet<u32> = row
        .keys()
        .filter_map(|key| parse_column(key))
        .map(|(ii, _)| ii)
        .collect();

    candidates
        .into_iter()
        .filter(|&ii| {
            Subscale::ALL
                .iter()
                .all(|subscale| row.contains_key(&column_name(ii, *subscale)))
        })
        .collect()
}

/// Resolve the six subscore fields for assessment `ii` into a record. Range
/// validation of the resolved scores is the calculator's job; this only
/// rejects missing or non-integer columns.
pub fn resolve_record(row: &Row, ii: u32) -> Result<AssessmentRecord> {
    Ok(AssessmentRecord {
        auditory: field(row, ii, Subscale::Auditory)?,
        visual: field(row, ii, Subscale::Visual)?,
        motor: field(row, ii, Subscale::Motor)?,
        oromotor: field(row, ii, Subscale::Oromotor)?,
        communication: field(row, ii, Subscale::Communication)?,
        arousal: field(row, ii, Subscale::Arousal)?,
    })
}

fn field(row: &Row, ii: u32, subscale: Subscale) -> Result<u8> {
    let column = column_name(ii, subscale);
    let value = row
        .get(&column)
        .ok_or_else(|| anyhow!("Missing column '{}'", column))?;
    let n = value
        .as_i64()
        .ok_or_else(|| anyhow!("Column '{}' is not an integer (found {})", column, json_type(value)))?;
    u8::try_from(n).map_err(|_| anyhow!("Column '{}' value {} is not a valid subscore", column, n))
}

fn column_name(ii: u32, subscale: Subscale) -> String {
    format!("{}_{}_{}", COLUMN_PREFIX, ii, subscale.name())
}

// Split "CRSR_<ii>_<Item>" into its sequence number and subscale; None for
// any key outside the convention.
fn parse_column(key: &str) -> Option<(u32, Subscale)> {
    let rest = key.strip_prefix(COLUMN_PREFIX)?.strip_prefix('_')?;
    let (ii_part, item_part) = rest.split_once('_')?;
    let ii = ii_part.parse().ok()?;
    let subscale = Subscale::from_name(item_part)?;
    Some((ii, subscale))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Completeness lint for translation tables.
//!
//! Every language of a table must supply the same fields as the table's
//! default bundle, all the way down through nested records and lists. This
//! runs from tests, never at render time.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use super::{embedded_raw, embedded_table_names, ContentError, LanguageCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GapKind {
    /// Present in the default bundle, absent here.
    Missing,
    /// Absent from the default bundle, present here.
    Unexpected,
    LengthMismatch { expected: usize, found: usize },
    /// Same path, different JSON kind (e.g. a list where a string was expected).
    ShapeMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGap {
    pub table: String,
    pub language: String,
    pub path: String,
    pub kind: GapKind,
}

impl fmt::Display for FieldGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            table,
            language,
            path,
            kind,
        } = self;
        match kind {
            GapKind::Missing => write!(f, "{table}/{language}: missing `{path}`"),
            GapKind::Unexpected => write!(f, "{table}/{language}: unexpected `{path}`"),
            GapKind::LengthMismatch { expected, found } => write!(
                f,
                "{table}/{language}: `{path}` has {found} entries, default has {expected}"
            ),
            GapKind::ShapeMismatch => {
                write!(f, "{table}/{language}: `{path}` differs in shape from default")
            }
        }
    }
}

#[derive(Deserialize)]
struct RawShape {
    default: String,
    languages: BTreeMap<String, Value>,
}

/// Compare every language of one table against its default bundle.
pub fn audit(table: &str, raw: &Value) -> Result<Vec<FieldGap>, ContentError> {
    let shape = RawShape::deserialize(raw).map_err(|source| ContentError::Malformed {
        table: table.to_string(),
        source,
    })?;
    let default = shape.default.parse::<LanguageCode>()?;
    let reference = shape
        .languages
        .get(default.code())
        .ok_or(ContentError::MissingDefault(default))?;

    let mut gaps = Vec::new();
    for (language, bundle) in &shape.languages {
        if language == default.code() {
            continue;
        }
        let mut audit = Audit {
            table,
            language,
            gaps: &mut gaps,
        };
        audit.compare(reference, bundle, String::new());
    }
    Ok(gaps)
}

/// Run [`audit`] over every embedded table.
pub fn audit_embedded() -> Result<Vec<FieldGap>, ContentError> {
    let mut gaps = Vec::new();
    for name in embedded_table_names() {
        let raw = embedded_raw(&name)?;
        gaps.extend(audit(&name, &raw)?);
    }
    Ok(gaps)
}

struct Audit<'a> {
    table: &'a str,
    language: &'a str,
    gaps: &'a mut Vec<FieldGap>,
}

impl Audit<'_> {
    fn compare(&mut self, expected: &Value, found: &Value, path: String) {
        match (expected, found) {
            (Value::Object(want), Value::Object(have)) => {
                for (key, want_value) in want {
                    let child = join_key(&path, key);
                    match have.get(key) {
                        Some(have_value) => self.compare(want_value, have_value, child),
                        None => self.push(child, GapKind::Missing),
                    }
                }
                for key in have.keys().filter(|key| !want.contains_key(*key)) {
                    self.push(join_key(&path, key), GapKind::Unexpected);
                }
            }
            (Value::Array(want), Value::Array(have)) => {
                if want.len() != have.len() {
                    self.push(
                        path.clone(),
                        GapKind::LengthMismatch {
                            expected: want.len(),
                            found: have.len(),
                        },
                    );
                }
                for (index, (want_item, have_item)) in want.iter().zip(have).enumerate() {
                    self.compare(want_item, have_item, format!("{path}[{index}]"));
                }
            }
            _ if kind(expected) == kind(found) => {}
            _ => self.push(path, GapKind::ShapeMismatch),
        }
    }

    fn push(&mut self, path: String, kind: GapKind) {
        self.gaps.push(FieldGap {
            table: self.table.to_string(),
            language: self.language.to_string(),
            path,
            kind,
        });
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn kind(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

use serde::Serialize;
use shapefile::dbase::FieldValue;

/// A single attribute cell of a feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    Null,
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline] pub fn is_null(&self) -> bool { matches!(self, AttrValue::Null) }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self { AttrValue::Text(value.to_string()) }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self { AttrValue::Text(value) }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self { AttrValue::Number(value) }
}

/// dBase cells map onto text or numbers; character fields are trimmed of
/// the padding the format stores them with.
impl From<FieldValue> for AttrValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Character(Some(s)) => AttrValue::Text(s.trim().to_string()),
            FieldValue::Memo(s) => AttrValue::Text(s),
            FieldValue::Numeric(Some(n)) => AttrValue::Number(n),
            FieldValue::Float(Some(n)) => AttrValue::Number(n as f64),
            FieldValue::Integer(n) => AttrValue::Number(n as f64),
            FieldValue::Double(n) => AttrValue::Number(n),
            FieldValue::Currency(n) => AttrValue::Number(n),
            FieldValue::Logical(Some(b)) => AttrValue::Text(b.to_string()),
            _ => AttrValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_fields_are_trimmed() {
        let value = AttrValue::from(FieldValue::Character(Some("Europe    ".into())));
        assert_eq!(value, AttrValue::Text("Europe".into()));
    }

    #[test]
    fn empty_cells_become_null() {
        assert!(AttrValue::from(FieldValue::Numeric(None)).is_null());
        assert!(AttrValue::from(FieldValue::Character(None)).is_null());
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_value(vec![
            AttrValue::from("France"),
            AttrValue::from(67.0),
            AttrValue::Null,
        ]).unwrap();
        assert_eq!(json, serde_json::json!(["France", 67.0, null]));
    }
}

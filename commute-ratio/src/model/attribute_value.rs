use serde::{Deserialize, Serialize};
use shapefile::dbase::FieldValue;
use std::fmt::Display;

/// an attribute value carried through from a source shapefile record.
/// dBase offers more field types than we need downstream, so they are
/// collapsed into text, numbers and flags.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum AttributeValue {
    Text(Option<String>),
    Number(Option<f64>),
    Logical(Option<bool>),
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<String> {
        match self {
            AttributeValue::Text(s) => s.clone(),
            AttributeValue::Number(n) => n.map(|n| n.to_string()),
            AttributeValue::Logical(b) => b.map(|b| b.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => *n,
            AttributeValue::Text(Some(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_logical(&self) -> Option<bool> {
        match self {
            AttributeValue::Logical(b) => *b,
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            AttributeValue::Text(v) => v.is_none(),
            AttributeValue::Number(v) => v.is_none(),
            AttributeValue::Logical(v) => v.is_none(),
        }
    }
}

impl From<&FieldValue> for AttributeValue {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Character(s) => AttributeValue::Text(s.clone()),
            FieldValue::Memo(s) => AttributeValue::Text(Some(s.clone())),
            FieldValue::Numeric(n) => AttributeValue::Number(*n),
            FieldValue::Float(f) => AttributeValue::Number(f.map(f64::from)),
            FieldValue::Double(d) => AttributeValue::Number(Some(*d)),
            FieldValue::Currency(c) => AttributeValue::Number(Some(*c)),
            FieldValue::Integer(i) => AttributeValue::Number(Some(f64::from(*i))),
            FieldValue::Logical(b) => AttributeValue::Logical(*b),
            other => {
                log::debug!(
                    "dropping unsupported dBase field type {:?}",
                    other.field_type()
                );
                AttributeValue::Text(None)
            }
        }
    }
}

/// null values display as an empty string, matching how a CSV dump
/// represents missing cells.
impl Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.as_text() {
            Some(s) => write!(f, "{s}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeValue;
    use shapefile::dbase::FieldValue;

    #[test]
    fn test_numeric_field_conversion() {
        let value = AttributeValue::from(&FieldValue::Numeric(Some(42.5)));
        assert_eq!(value, AttributeValue::Number(Some(42.5)));
        assert_eq!(value.to_string(), "42.5");
    }

    #[test]
    fn test_null_displays_empty() {
        let value = AttributeValue::from(&FieldValue::Character(None));
        assert!(value.is_null());
        assert_eq!(value.to_string(), "");
    }

    #[test]
    fn test_text_as_number() {
        let value = AttributeValue::Text(Some(String::from(" 35200001 ")));
        assert_eq!(value.as_number(), Some(35200001.0));
    }
}

use crate::model::AttributeValue;
use geo::MultiPolygon;

/// a polygonal shapefile row: its geometry plus its attribute table entry
/// in attribute table field order.
#[derive(Clone, Debug)]
pub struct PolygonRecord {
    pub geometry: MultiPolygon<f64>,
    pub attributes: Vec<(String, AttributeValue)>,
}

impl PolygonRecord {
    pub fn new(geometry: MultiPolygon<f64>, attributes: Vec<(String, AttributeValue)>) -> Self {
        Self {
            geometry,
            attributes,
        }
    }

    pub fn attribute(&self, field: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// the attribute as text, if present and not null
    pub fn text_attribute(&self, field: &str) -> Option<String> {
        self.attribute(field).and_then(|v| v.as_text())
    }
}

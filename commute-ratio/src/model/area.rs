use super::{location_string, AttributeValue};
use geo::{MultiPolygon, Point};

/// a census area with its WGS84 geometry, derived centroid, and the attributes
/// of the source record in source field order.
#[derive(Clone, Debug)]
pub struct Area {
    pub id: String,
    pub geometry: MultiPolygon<f64>,
    pub centroid: Point<f64>,
    pub attributes: Vec<(String, AttributeValue)>,
}

impl Area {
    pub fn new(
        id: String,
        geometry: MultiPolygon<f64>,
        centroid: Point<f64>,
        attributes: Vec<(String, AttributeValue)>,
    ) -> Self {
        Self {
            id,
            geometry,
            centroid,
            attributes,
        }
    }

    /// the centroid as a "latitude,longitude" location string.
    pub fn centroid_string(&self) -> String {
        location_string(self.centroid.y(), self.centroid.x())
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Area;
    use crate::model::AttributeValue;
    use geo::{polygon, MultiPolygon, Point};

    #[test]
    fn test_centroid_string_is_lat_lon() {
        let geometry = MultiPolygon::new(vec![polygon![
            (x: -79.4, y: 43.6),
            (x: -79.3, y: 43.6),
            (x: -79.3, y: 43.7),
            (x: -79.4, y: 43.7),
        ]]);
        let area = Area::new(
            String::from("a"),
            geometry,
            Point::new(-79.35, 43.65),
            vec![(String::from("DAUID"), AttributeValue::Text(Some(String::from("a"))))],
        );
        assert_eq!(area.centroid_string(), "43.65,-79.35");
        assert_eq!(
            area.attribute("DAUID"),
            Some(&AttributeValue::Text(Some(String::from("a"))))
        );
        assert!(area.attribute("CDNAME").is_none());
    }
}

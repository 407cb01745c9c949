use super::GeometryError;
use geo::{Coord, MapCoords, MultiPolygon};
use proj4rs::proj::Proj;

/// proj4 definition of WGS84 / EPSG:4326
pub const WGS84_PROJ_STRING: &str = "+proj=longlat +ellps=WGS84 +datum=WGS84 +no_defs";

/// transforms geometries from a source coordinate reference system, given as
/// a proj4 string, into WGS84 longitude/latitude degrees.
pub struct Reprojection {
    source_crs: String,
    source: Proj,
    target: Proj,
}

impl Reprojection {
    pub fn from_proj_string(source_crs: &str) -> Result<Self, GeometryError> {
        let invalid = |message: String| GeometryError::InvalidCrs {
            crs: source_crs.to_string(),
            message,
        };
        let source = Proj::from_proj_string(source_crs).map_err(|e| invalid(format!("{e:?}")))?;
        let target =
            Proj::from_proj_string(WGS84_PROJ_STRING).map_err(|e| invalid(format!("{e:?}")))?;
        Ok(Self {
            source_crs: source_crs.to_string(),
            source,
            target,
        })
    }

    pub fn source_crs(&self) -> &str {
        &self.source_crs
    }

    /// reprojects a single coordinate. proj4rs works in radians for
    /// geographic systems, so degrees are converted on the way in and out.
    pub fn coord_to_wgs84(&self, coord: Coord<f64>) -> Result<Coord<f64>, GeometryError> {
        let mut point = if self.source.is_latlong() {
            (coord.x.to_radians(), coord.y.to_radians(), 0.0)
        } else {
            (coord.x, coord.y, 0.0)
        };
        proj4rs::transform::transform(&self.source, &self.target, &mut point).map_err(|e| {
            GeometryError::ReprojectionError {
                x: coord.x,
                y: coord.y,
                message: format!("{e:?}"),
            }
        })?;
        Ok(Coord {
            x: point.0.to_degrees(),
            y: point.1.to_degrees(),
        })
    }

    pub fn to_wgs84(
        &self,
        geometry: &MultiPolygon<f64>,
    ) -> Result<MultiPolygon<f64>, GeometryError> {
        geometry.try_map_coords(|coord| self.coord_to_wgs84(coord))
    }
}

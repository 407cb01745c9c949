//! loads census areas from polygon shapefiles, keeps the areas contained by a
//! named municipality, and derives WGS84 centroids.
mod area_loader;
mod areas_config;
mod boundary_ops;
mod geometry_error;
mod polygon_record;
mod reprojection;

pub mod shapefile_ops;

pub use area_loader::load_areas;
pub use areas_config::AreasConfig;
pub use boundary_ops::{contained_within, municipality_boundary};
pub use geometry_error::GeometryError;
pub use polygon_record::PolygonRecord;
pub use reprojection::Reprojection;

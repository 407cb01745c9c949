use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("failed reading '{path}': {source}")]
    ShapefileReadError {
        path: String,
        source: shapefile::Error,
    },
    #[error("failed reading attribute table '{path}': {source}")]
    AttributeTableError {
        path: String,
        source: shapefile::dbase::Error,
    },
    #[error("unexpected shape type {shape_type} found at row {row} of '{path}', must be polygonal")]
    UnexpectedShapeType {
        path: String,
        row: usize,
        shape_type: String,
    },
    #[error("failed to convert shapefile polygon at row {row} of '{path}': {message}")]
    PolygonConversionError {
        path: String,
        row: usize,
        message: String,
    },
    #[error("field '{field}' missing from record {row} of '{path}'")]
    MissingField {
        path: String,
        row: usize,
        field: String,
    },
    #[error("no boundary in '{path}' has {field} equal to '{name}'")]
    NotFoundError {
        path: String,
        field: String,
        name: String,
    },
    #[error("invalid source coordinate reference system '{crs}': {message}")]
    InvalidCrs { crs: String, message: String },
    #[error("failed reprojecting coordinate ({x}, {y}) to WGS84: {message}")]
    ReprojectionError { x: f64, y: f64, message: String },
    #[error("area '{0}' has an empty geometry and no centroid")]
    EmptyGeometry(String),
}

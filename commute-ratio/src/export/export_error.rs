use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failure writing CSV file {path:?}: {source}")]
    CsvWriteError { path: PathBuf, source: csv::Error },
    #[error("failure writing shapefile {path:?}: {source}")]
    ShapefileWriteError {
        path: PathBuf,
        source: shapefile::Error,
    },
    #[error("failure writing {path:?}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid shapefile field name '{name}': {message}")]
    FieldNameError { name: String, message: String },
    #[error("{written:?} was written but the export did not complete, treat it as incomplete: {source}")]
    IncompleteExport {
        written: PathBuf,
        source: Box<ExportError>,
    },
}

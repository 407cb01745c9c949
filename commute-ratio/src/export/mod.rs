//! writes commute ratio results as a CSV table and an EPSG:4326 shapefile
mod csv_export;
mod export_error;
mod export_ops;
mod shapefile_export;

pub use csv_export::{write_areas_csv, write_commute_ratio_csv};
pub use export_error::ExportError;
pub use export_ops::{export_commute_ratios, ExportedFiles};
pub use shapefile_export::{write_commute_ratio_shapefile, WGS84_PRJ};

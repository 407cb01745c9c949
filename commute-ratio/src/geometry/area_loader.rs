use super::{
    boundary_ops, shapefile_ops, AreasConfig, GeometryError, PolygonRecord, Reprojection,
};
use crate::model::Area;
use geo::Centroid;
use std::path::Path;

/// loads the areas lying entirely within the configured municipality,
/// reprojected to WGS84 with a centroid each.
///
/// containment is tested in the source coordinate reference system, so both
/// input datasets must share it.
///
/// # Arguments
/// * `config` - input files, field names, municipality and optional area cap
///
/// # Result
/// areas in source file order, or an error if an input cannot be read, the
/// municipality is not found, or a geometry cannot be reprojected
pub fn load_areas(config: &AreasConfig) -> Result<Vec<Area>, GeometryError> {
    let reprojection = config
        .source_crs
        .as_deref()
        .map(Reprojection::from_proj_string)
        .transpose()?;

    log::info!("reading municipal boundaries from {}", config.boundary_file);
    let boundaries = shapefile_ops::read_polygon_shapefile(Path::new(&config.boundary_file))?;
    let boundary = boundary_ops::municipality_boundary(
        &boundaries,
        &config.boundary_name_field,
        &config.municipality_name,
        &config.boundary_file,
    )?;

    log::info!("reading areas from {}", config.area_file);
    let records = shapefile_ops::read_polygon_shapefile(Path::new(&config.area_file))?;
    let n_records = records.len();
    let mut contained = boundary_ops::contained_within(records, &boundary);
    log::info!(
        "{} of {} areas lie within {}",
        contained.len(),
        n_records,
        config.municipality_name
    );
    if let Some(max_areas) = config.max_areas {
        if contained.len() > max_areas {
            log::info!("limiting to the first {max_areas} areas");
            contained.truncate(max_areas);
        }
    }

    contained
        .into_iter()
        .enumerate()
        .map(|(row, record)| {
            build_area(
                record,
                row,
                &config.area_id_field,
                &config.area_file,
                reprojection.as_ref(),
            )
        })
        .collect()
}

fn build_area(
    record: PolygonRecord,
    row: usize,
    id_field: &str,
    path: &str,
    reprojection: Option<&Reprojection>,
) -> Result<Area, GeometryError> {
    let id = record
        .text_attribute(id_field)
        .ok_or_else(|| GeometryError::MissingField {
            path: path.to_string(),
            row,
            field: id_field.to_string(),
        })?;
    let geometry = match reprojection {
        Some(r) => r.to_wgs84(&record.geometry)?,
        None => record.geometry,
    };
    let centroid = geometry
        .centroid()
        .ok_or_else(|| GeometryError::EmptyGeometry(id.clone()))?;
    Ok(Area::new(id, geometry, centroid, record.attributes))
}

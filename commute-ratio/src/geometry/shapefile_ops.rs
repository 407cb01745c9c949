use super::{GeometryError, PolygonRecord};
use crate::model::AttributeValue;
use geo::MultiPolygon;
use shapefile::{dbase, Shape};
use std::path::Path;

/// reads every row of a polygonal shapefile. attributes are returned in the
/// field order of the accompanying .dbf table.
///
/// # Arguments
/// * `path` - path to the .shp file. the .shx and .dbf files must sit beside it.
///
/// # Result
/// one [`PolygonRecord`] per shapefile row, in file order
pub fn read_polygon_shapefile(path: &Path) -> Result<Vec<PolygonRecord>, GeometryError> {
    let path_str = path.to_string_lossy().to_string();
    let field_names = read_field_names(path)?;
    let rows = shapefile::read(path).map_err(|source| GeometryError::ShapefileReadError {
        path: path_str.clone(),
        source,
    })?;
    log::debug!("read {} rows from '{path_str}'", rows.len());

    let mut processed = Vec::with_capacity(rows.len());
    for (row, (shape, record)) in rows.into_iter().enumerate() {
        let geometry = polygonal_geometry(shape, row, &path_str)?;
        let attributes = field_names
            .iter()
            .filter_map(|name| {
                record
                    .get(name)
                    .map(|value| (name.clone(), AttributeValue::from(value)))
            })
            .collect::<Vec<_>>();
        processed.push(PolygonRecord::new(geometry, attributes));
    }
    Ok(processed)
}

/// the field names of the .dbf table beside a .shp file, in table order.
fn read_field_names(path: &Path) -> Result<Vec<String>, GeometryError> {
    let dbf_path = path.with_extension("dbf");
    let reader = dbase::Reader::from_path(&dbf_path).map_err(|source| {
        GeometryError::AttributeTableError {
            path: dbf_path.to_string_lossy().to_string(),
            source,
        }
    })?;
    let names = reader
        .fields()
        .iter()
        .map(|field| field.name().to_string())
        .collect();
    Ok(names)
}

fn polygonal_geometry(
    shape: Shape,
    row: usize,
    path: &str,
) -> Result<MultiPolygon<f64>, GeometryError> {
    let conversion_error = |message: String| GeometryError::PolygonConversionError {
        path: path.to_string(),
        row,
        message,
    };
    match shape {
        Shape::Polygon(generic_polygon) => generic_polygon
            .try_into()
            .map_err(|e| conversion_error(format!("{e:?}"))),
        Shape::PolygonM(generic_polygon) => generic_polygon
            .try_into()
            .map_err(|e| conversion_error(format!("{e:?}"))),
        other => Err(GeometryError::UnexpectedShapeType {
            path: path.to_string(),
            row,
            shape_type: format!("{:?}", other.shapetype()),
        }),
    }
}

use super::ExportError;
use crate::{model::AttributeValue, pipeline::CommuteRatioRow};
use itertools::Itertools;
use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
use std::path::Path;

/// ESRI WKT for WGS84, written to the .prj sidecar
pub const WGS84_PRJ: &str = r#"GEOGCS["GCS_WGS_1984",DATUM["D_WGS_1984",SPHEROID["WGS_1984",6378137.0,298.257223563]],PRIMEM["Greenwich",0.0],UNIT["Degree",0.0174532925199433]]"#;

// dBase field names are limited to 10 characters
const CENTROID_FIELD: &str = "centroid";
const DRIVING_FIELD: &str = "drive_dur";
const TRANSIT_FIELD: &str = "trans_dur";
const RATIO_FIELD: &str = "t2d_ratio";
const RESULT_FIELDS: [&str; 4] = [CENTROID_FIELD, DRIVING_FIELD, TRANSIT_FIELD, RATIO_FIELD];

const CENTROID_LENGTH: u8 = 48;
const MAX_CHARACTER_LENGTH: usize = 254;
const NUMERIC_LENGTH: u8 = 19;
const NUMERIC_DECIMALS: u8 = 8;

/// dBase column type chosen for a source attribute
#[derive(Clone, Copy, Debug, PartialEq)]
enum ColumnKind {
    Character(u8),
    Numeric,
    Logical,
}

/// writes the results as a polygon shapefile (.shp, .shx, .dbf) plus .prj
/// and .cpg sidecars declaring WGS84 and UTF-8.
pub fn write_commute_ratio_shapefile(
    rows: &[CommuteRatioRow],
    path: &Path,
) -> Result<(), ExportError> {
    let columns = attribute_columns(rows);
    check_reserved_names(&columns)?;
    let mut table_builder = TableWriterBuilder::new();
    for (name, kind) in columns.iter() {
        let field_name = field_name(name)?;
        table_builder = match kind {
            ColumnKind::Character(length) => table_builder.add_character_field(field_name, *length),
            ColumnKind::Numeric => {
                table_builder.add_numeric_field(field_name, NUMERIC_LENGTH, NUMERIC_DECIMALS)
            }
            ColumnKind::Logical => table_builder.add_logical_field(field_name),
        };
    }
    table_builder = table_builder
        .add_character_field(field_name(CENTROID_FIELD)?, CENTROID_LENGTH)
        .add_numeric_field(field_name(DRIVING_FIELD)?, NUMERIC_LENGTH, NUMERIC_DECIMALS)
        .add_numeric_field(field_name(TRANSIT_FIELD)?, NUMERIC_LENGTH, NUMERIC_DECIMALS)
        .add_numeric_field(field_name(RATIO_FIELD)?, NUMERIC_LENGTH, NUMERIC_DECIMALS);

    let shapefile_error = |source: shapefile::Error| ExportError::ShapefileWriteError {
        path: path.to_path_buf(),
        source,
    };
    {
        let mut writer =
            shapefile::Writer::from_path(path, table_builder).map_err(shapefile_error)?;
        for row in rows.iter() {
            let shape = shapefile::Polygon::from(row.area.geometry.clone());
            let mut record = Record::default();
            for (name, kind) in columns.iter() {
                let value = row.area.attribute(name);
                record.insert(name.clone(), field_value(value, *kind));
            }
            record.insert(
                CENTROID_FIELD.to_string(),
                FieldValue::Character(Some(row.area.centroid_string())),
            );
            record.insert(
                DRIVING_FIELD.to_string(),
                numeric_value(row.driving_duration),
            );
            record.insert(
                TRANSIT_FIELD.to_string(),
                numeric_value(row.transit_duration),
            );
            record.insert(
                RATIO_FIELD.to_string(),
                numeric_value(row.transit_to_drive_ratio),
            );
            writer
                .write_shape_and_record(&shape, &record)
                .map_err(shapefile_error)?;
        }
    }

    write_sidecar(&path.with_extension("prj"), WGS84_PRJ)?;
    write_sidecar(&path.with_extension("cpg"), "UTF-8")?;
    log::debug!("wrote {} shapes to {path:?}", rows.len());
    Ok(())
}

/// picks a dBase type per source attribute from the first non-null value in
/// that column. text columns are sized to their longest value.
fn attribute_columns(rows: &[CommuteRatioRow]) -> Vec<(String, ColumnKind)> {
    let Some(first) = rows.first() else {
        return vec![];
    };
    first
        .area
        .attribute_names()
        .map(|name| {
            let values = rows
                .iter()
                .filter_map(|row| row.area.attribute(name))
                .collect_vec();
            let kind = match values.iter().find(|v| !v.is_null()) {
                Some(AttributeValue::Number(_)) => ColumnKind::Numeric,
                Some(AttributeValue::Logical(_)) => ColumnKind::Logical,
                _ => {
                    let longest = values
                        .iter()
                        .filter_map(|v| v.as_text())
                        .map(|s| s.len())
                        .max()
                        .unwrap_or(1)
                        .clamp(1, MAX_CHARACTER_LENGTH);
                    ColumnKind::Character(longest as u8)
                }
            };
            (name.to_string(), kind)
        })
        .collect()
}

/// dBase names are matched case-insensitively, so a source attribute named
/// like a result column would be shadowed by it
fn check_reserved_names(columns: &[(String, ColumnKind)]) -> Result<(), ExportError> {
    match columns.iter().find(|(name, _)| {
        RESULT_FIELDS
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
    }) {
        Some((name, _)) => Err(ExportError::FieldNameError {
            name: name.clone(),
            message: format!(
                "source attribute collides with a result column ({})",
                RESULT_FIELDS.join(", ")
            ),
        }),
        None => Ok(()),
    }
}

fn field_value(value: Option<&AttributeValue>, kind: ColumnKind) -> FieldValue {
    match kind {
        ColumnKind::Character(length) => FieldValue::Character(
            value
                .and_then(|v| v.as_text())
                .map(|s| s.chars().take(length as usize).collect()),
        ),
        ColumnKind::Numeric => FieldValue::Numeric(value.and_then(|v| v.as_number())),
        ColumnKind::Logical => FieldValue::Logical(value.and_then(|v| v.as_logical())),
    }
}

/// NaN has no dBase representation and is stored as a null numeric
fn numeric_value(value: f64) -> FieldValue {
    if value.is_nan() {
        FieldValue::Numeric(None)
    } else {
        FieldValue::Numeric(Some(value))
    }
}

fn field_name(name: &str) -> Result<FieldName, ExportError> {
    FieldName::try_from(name).map_err(|e| ExportError::FieldNameError {
        name: name.to_string(),
        message: format!("{e:?}"),
    })
}

fn write_sidecar(path: &Path, contents: &str) -> Result<(), ExportError> {
    std::fs::write(path, contents).map_err(|source| ExportError::IoError {
        path: path.to_path_buf(),
        source,
    })
}

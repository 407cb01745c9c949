use crate::{
    client::DistanceMatrixClient,
    config::CommuteRatioConfig,
    export,
    geometry,
    model::CommuteRatioError,
    pipeline,
};
use std::path::PathBuf;

/// runs the full pipeline: load areas, query travel times, compute ratios,
/// and write both outputs.
pub fn run_commute_ratios(config: &CommuteRatioConfig) -> Result<(), CommuteRatioError> {
    let params = config.commute_parameters()?;
    let api_key = config.api_key()?;
    let client = DistanceMatrixClient::new(api_key, &config.distance_matrix).map_err(|e| {
        CommuteRatioError::ConfigError(format!("failed building HTTP client: {e}"))
    })?;

    let areas = geometry::load_areas(&config.areas)?;
    log::info!(
        "loaded {} areas within {}",
        areas.len(),
        config.areas.municipality_name
    );

    let rows = pipeline::compute_commute_ratios(&areas, &params, &client)?;
    let missing_driving = rows
        .iter()
        .filter(|row| row.transit_to_drive_ratio.is_nan())
        .count();
    if missing_driving > 0 {
        log::warn!("{missing_driving} areas have no driving duration, their ratio is NaN");
    }

    let files = export::export_commute_ratios(&rows, &config.output_stem())?;
    log::info!(
        "wrote {} commute ratios to {:?} and {:?}",
        rows.len(),
        files.csv,
        files.shapefile
    );
    Ok(())
}

/// loads areas and writes them with their centroids to `<stem>_areas.csv`
pub fn run_load_areas(config: &CommuteRatioConfig) -> Result<(), CommuteRatioError> {
    let areas = geometry::load_areas(&config.areas)?;
    let path = areas_csv_path(config);
    export::write_areas_csv(&areas, &path)?;
    log::info!(
        "wrote {} areas within {} to {path:?}",
        areas.len(),
        config.areas.municipality_name
    );
    Ok(())
}

fn areas_csv_path(config: &CommuteRatioConfig) -> PathBuf {
    let mut path = config.output_stem().into_os_string();
    path.push("_areas.csv");
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::run_load_areas;
    use crate::config::CommuteRatioConfig;
    use ::config::FileFormat;
    use geo::{polygon, MultiPolygon};
    use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};
    use std::path::Path;

    fn square(x0: f64, y0: f64, side: f64) -> MultiPolygon<f64> {
        MultiPolygon::new(vec![polygon![
            (x: x0, y: y0),
            (x: x0 + side, y: y0),
            (x: x0 + side, y: y0 + side),
            (x: x0, y: y0 + side),
        ]])
    }

    fn write_polygons(path: &Path, field: &str, rows: &[(&str, MultiPolygon<f64>)]) {
        let table = TableWriterBuilder::new()
            .add_character_field(FieldName::try_from(field).expect("field name"), 20);
        let mut writer = shapefile::Writer::from_path(path, table).expect("create shapefile");
        for (value, geometry) in rows.iter() {
            let mut record = Record::default();
            record.insert(
                field.to_string(),
                FieldValue::Character(Some(value.to_string())),
            );
            writer
                .write_shape_and_record(&shapefile::Polygon::from(geometry.clone()), &record)
                .expect("write shape");
        }
    }

    #[test]
    fn test_load_areas_writes_contained_areas_with_centroids() {
        let dir = tempfile::tempdir().expect("temp dir");
        let boundary_file = dir.path().join("boundaries.shp");
        let area_file = dir.path().join("areas.shp");
        write_polygons(
            &boundary_file,
            "CDNAME",
            &[
                ("Toronto", square(0.0, 0.0, 10.0)),
                ("Mississauga", square(-10.0, 0.0, 10.0)),
            ],
        );
        write_polygons(
            &area_file,
            "DAUID",
            &[
                ("35200001", square(1.0, 1.0, 1.0)),
                ("35200002", square(3.0, 4.0, 2.0)),
                ("35200003", square(9.0, 9.0, 2.0)),
                ("35210001", square(-5.0, 1.0, 1.0)),
            ],
        );
        let toml = format!(
            r#"
output_stem = "{}"

[areas]
area_file = "{}"
boundary_file = "{}"
municipality_name = "Toronto"

[commute]
direction = "inbound"
hub = "43.645570,-79.380851"
"#,
            dir.path().join("toronto").display(),
            area_file.display(),
            boundary_file.display()
        );
        let config = CommuteRatioConfig::from_contents(&toml, FileFormat::Toml).expect("valid");
        run_load_areas(&config).expect("should load areas");

        let mut reader =
            csv::Reader::from_path(dir.path().join("toronto_areas.csv")).expect("areas csv");
        let rows = reader
            .records()
            .map(|r| r.map(|r| (r[0].to_string(), r[2].to_string())))
            .collect::<Result<Vec<_>, _>>()
            .expect("records");
        assert_eq!(
            rows,
            vec![
                (String::from("35200001"), String::from("1.5,1.5")),
                (String::from("35200002"), String::from("5,4")),
            ]
        );
    }
}

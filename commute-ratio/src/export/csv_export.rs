use super::ExportError;
use crate::{model::Area, pipeline::CommuteRatioRow};
use std::path::Path;
use wkt::ToWkt;

const AREA_COLUMNS: [&str; 2] = ["geometry", "centroid"];
const RESULT_COLUMNS: [&str; 3] = [
    "driving_duration",
    "transit_duration",
    "transit_to_drive_ratio",
];

/// writes one CSV row per result: the source attributes, the WKT geometry,
/// the centroid string, both durations and the ratio. NaN ratios are
/// written as empty cells.
pub fn write_commute_ratio_csv(rows: &[CommuteRatioRow], path: &Path) -> Result<(), ExportError> {
    let attribute_names = rows
        .first()
        .map(|row| attribute_header(row.area))
        .unwrap_or_default();
    let header = attribute_names
        .iter()
        .map(String::as_str)
        .chain(AREA_COLUMNS)
        .chain(RESULT_COLUMNS);
    let records = rows.iter().map(|row| {
        let mut record = area_fields(row.area);
        record.push(number_field(row.driving_duration));
        record.push(number_field(row.transit_duration));
        record.push(number_field(row.transit_to_drive_ratio));
        record
    });
    write_csv(path, header, records)
}

/// writes loaded areas with their centroids, before any travel times exist
pub fn write_areas_csv(areas: &[Area], path: &Path) -> Result<(), ExportError> {
    let attribute_names = areas.first().map(attribute_header).unwrap_or_default();
    let header = attribute_names
        .iter()
        .map(String::as_str)
        .chain(AREA_COLUMNS);
    let records = areas.iter().map(area_fields);
    write_csv(path, header, records)
}

fn write_csv<'h>(
    path: &Path,
    header: impl IntoIterator<Item = &'h str>,
    records: impl Iterator<Item = Vec<String>>,
) -> Result<(), ExportError> {
    let csv_error = |source: csv::Error| ExportError::CsvWriteError {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(header).map_err(csv_error)?;
    for record in records {
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| ExportError::IoError {
        path: path.to_path_buf(),
        source,
    })
}

fn attribute_header(area: &Area) -> Vec<String> {
    area.attribute_names().map(String::from).collect()
}

fn area_fields(area: &Area) -> Vec<String> {
    let mut fields = area
        .attributes
        .iter()
        .map(|(_, value)| value.to_string())
        .collect::<Vec<_>>();
    fields.push(area.geometry.to_wkt().to_string());
    fields.push(area.centroid_string());
    fields
}

fn number_field(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::write_commute_ratio_csv;
    use crate::{
        model::{Area, AttributeValue},
        pipeline::{CommuteRatioRow, ModeDurations},
    };
    use geo::{polygon, MultiPolygon, Point};

    #[test]
    fn test_csv_columns_and_nan() {
        let area = Area::new(
            String::from("35200001"),
            MultiPolygon::new(vec![polygon![
                (x: 0.0, y: 0.0),
                (x: 1.0, y: 0.0),
                (x: 1.0, y: 1.0),
            ]]),
            Point::new(0.5, 0.25),
            vec![
                (
                    String::from("DAUID"),
                    AttributeValue::Text(Some(String::from("35200001"))),
                ),
                (String::from("POP"), AttributeValue::Number(None)),
            ],
        );
        let rows = vec![
            CommuteRatioRow::new(
                &area,
                ModeDurations {
                    driving: 600.0,
                    transit: 900.0,
                },
            ),
            CommuteRatioRow::new(
                &area,
                ModeDurations {
                    driving: 0.0,
                    transit: 600.0,
                },
            ),
        ];
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("result.csv");
        write_commute_ratio_csv(&rows, &path).expect("should write");

        let mut reader = csv::Reader::from_path(&path).expect("should read");
        let headers = reader.headers().expect("headers").clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec![
                "DAUID",
                "POP",
                "geometry",
                "centroid",
                "driving_duration",
                "transit_duration",
                "transit_to_drive_ratio"
            ]
        );
        let records = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .expect("records");
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "35200001");
        assert_eq!(&records[0][1], "");
        assert!(records[0][2].starts_with("MULTIPOLYGON"));
        assert_eq!(&records[0][3], "0.25,0.5");
        assert_eq!(&records[0][6], "1.5");
        assert_eq!(&records[1][4], "0");
        assert_eq!(&records[1][6], "");
    }
}

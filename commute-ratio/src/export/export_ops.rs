use super::{write_commute_ratio_csv, write_commute_ratio_shapefile, ExportError};
use crate::pipeline::CommuteRatioRow;
use std::path::{Path, PathBuf};

/// the files produced by a complete export
#[derive(Clone, Debug, PartialEq)]
pub struct ExportedFiles {
    pub csv: PathBuf,
    pub shapefile: PathBuf,
}

impl ExportedFiles {
    pub fn from_stem(stem: &Path) -> Self {
        Self {
            csv: with_suffix(stem, "csv"),
            shapefile: with_suffix(stem, "shp"),
        }
    }
}

/// writes `<stem>.csv` then `<stem>.shp` from the same rows. if the shapefile
/// fails after the CSV was written, the CSV stays on disk and the error names
/// it as incomplete output.
pub fn export_commute_ratios(
    rows: &[CommuteRatioRow],
    stem: &Path,
) -> Result<ExportedFiles, ExportError> {
    let files = ExportedFiles::from_stem(stem);
    write_commute_ratio_csv(rows, &files.csv)?;
    log::info!("wrote {} rows to {:?}", rows.len(), files.csv);
    write_commute_ratio_shapefile(rows, &files.shapefile).map_err(|e| {
        ExportError::IncompleteExport {
            written: files.csv.clone(),
            source: Box::new(e),
        }
    })?;
    log::info!("wrote {} rows to {:?}", rows.len(), files.shapefile);
    Ok(files)
}

/// appends an extension without replacing anything after a '.' already in
/// the stem, so "out/toronto_5pm_2.Dec" keeps its full name.
pub(crate) fn with_suffix(stem: &Path, extension: &str) -> PathBuf {
    let mut path = stem.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::{export_commute_ratios, ExportedFiles};
    use crate::{
        export::ExportError,
        model::{Area, AttributeValue},
        pipeline::{CommuteRatioRow, ModeDurations},
    };
    use geo::{polygon, MultiPolygon, Point};
    use std::path::Path;

    fn area() -> Area {
        Area::new(
            String::from("35200001"),
            MultiPolygon::new(vec![polygon![
                (x: -79.40, y: 43.70),
                (x: -79.39, y: 43.70),
                (x: -79.39, y: 43.71),
            ]]),
            Point::new(-79.393, 43.703),
            vec![(
                String::from("DAUID"),
                AttributeValue::Text(Some(String::from("35200001"))),
            )],
        )
    }

    #[test]
    fn test_stem_keeps_dots() {
        let files = ExportedFiles::from_stem(Path::new("out/toronto_5pm_2.Dec"));
        assert_eq!(files.csv, Path::new("out/toronto_5pm_2.Dec.csv"));
        assert_eq!(files.shapefile, Path::new("out/toronto_5pm_2.Dec.shp"));
    }

    #[test]
    fn test_export_writes_both_files() {
        let area = area();
        let rows = vec![CommuteRatioRow::new(
            &area,
            ModeDurations {
                driving: 600.0,
                transit: 900.0,
            },
        )];
        let dir = tempfile::tempdir().expect("temp dir");
        let files = export_commute_ratios(&rows, &dir.path().join("toronto")).expect("export");
        assert!(files.csv.exists());
        assert!(files.shapefile.exists());
    }

    #[test]
    fn test_second_write_failure_reports_incomplete_csv() {
        let area = area();
        let rows = vec![CommuteRatioRow::new(
            &area,
            ModeDurations {
                driving: 600.0,
                transit: 900.0,
            },
        )];
        let dir = tempfile::tempdir().expect("temp dir");
        let stem = dir.path().join("toronto");
        // a directory where the shapefile should go makes the second write fail
        std::fs::create_dir(dir.path().join("toronto.shp")).expect("create blocker");

        match export_commute_ratios(&rows, &stem) {
            Err(ExportError::IncompleteExport { written, .. }) => {
                assert_eq!(written, dir.path().join("toronto.csv"));
                assert!(written.exists());
            }
            other => panic!("expected IncompleteExport, found {other:?}"),
        }
    }

    #[test]
    fn test_unwritable_csv_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let stem = dir.path().join("missing_directory").join("toronto");
        let result = export_commute_ratios(&[], &stem);
        assert!(matches!(result, Err(ExportError::CsvWriteError { .. })));
    }
}

use super::{GeometryError, PolygonRecord};
use geo::{BooleanOps, MultiPolygon, Relate};

/// finds every boundary record whose `name_field` equals `name` exactly and
/// returns the union of their geometries. municipalities made of several
/// records (islands, exclaves) are merged rather than taking the first one.
///
/// # Arguments
/// * `boundaries` - boundary dataset
/// * `name_field` - attribute holding the municipality name
/// * `name` - case-sensitive municipality name
/// * `path` - boundary dataset location, for error reporting
pub fn municipality_boundary(
    boundaries: &[PolygonRecord],
    name_field: &str,
    name: &str,
    path: &str,
) -> Result<MultiPolygon<f64>, GeometryError> {
    let matches = boundaries
        .iter()
        .filter(|record| record.text_attribute(name_field).as_deref() == Some(name))
        .collect::<Vec<_>>();

    let (first, rest) = matches
        .split_first()
        .ok_or_else(|| GeometryError::NotFoundError {
            path: path.to_string(),
            field: name_field.to_string(),
            name: name.to_string(),
        })?;
    if !rest.is_empty() {
        log::info!(
            "{} boundary records named '{name}', using their union",
            matches.len()
        );
    }
    let union = rest
        .iter()
        .fold(first.geometry.clone(), |acc, record| {
            acc.union(&record.geometry)
        });
    Ok(union)
}

/// keeps the records whose geometry lies entirely within the boundary,
/// preserving their order. records that straddle the boundary are dropped.
pub fn contained_within(
    records: Vec<PolygonRecord>,
    boundary: &MultiPolygon<f64>,
) -> Vec<PolygonRecord> {
    records
        .into_iter()
        .filter(|record| record.geometry.relate(boundary).is_within())
        .collect()
}

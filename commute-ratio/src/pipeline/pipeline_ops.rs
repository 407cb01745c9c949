use super::{CommuteParameters, CommuteRatioRow, ModeDurations};
use crate::{
    batch::{self, Batch},
    client::{travel_time_ops, DistanceMatrixError, TravelTimeSource},
    model::{Area, CommuteDirection, CommuteRatioError, TravelMode},
};
use itertools::Itertools;
use kdam::tqdm;
use std::num::NonZeroUsize;

/// computes driving and transit durations and their ratio for every area,
/// one batch at a time. each batch makes two sequential requests, driving
/// then transit. the first failure aborts the run.
///
/// # Arguments
/// * `areas` - areas in output order
/// * `params` - direction, hub, batch size and trip time
/// * `source` - distance matrix implementation
///
/// # Result
/// one row per area, in the order of `areas`
pub fn compute_commute_ratios<'a, S: TravelTimeSource + ?Sized>(
    areas: &'a [Area],
    params: &CommuteParameters,
    source: &S,
) -> Result<Vec<CommuteRatioRow<'a>>, CommuteRatioError> {
    let batch_size: NonZeroUsize = params.batch_size.into();
    let n_batches = batch::batch_count(areas.len(), batch_size);
    log::info!(
        "computing {} commute times for {} areas around {} in {} batches",
        params.direction,
        areas.len(),
        params.hub,
        n_batches
    );

    let mut rows = Vec::with_capacity(areas.len());
    let batch_iter = tqdm!(
        batch::batches(areas, batch_size),
        desc = "distance matrix batches",
        total = n_batches
    );
    for batch in batch_iter {
        let driving = mode_travel_times(&batch, TravelMode::Driving, params, source)?;
        let transit = mode_travel_times(&batch, TravelMode::Transit, params, source)?;
        let batch_rows = batch
            .items
            .iter()
            .zip(driving.into_iter().zip(transit))
            .map(|(area, (driving, transit))| {
                CommuteRatioRow::new(area, ModeDurations { driving, transit })
            });
        rows.extend(batch_rows);
    }
    Ok(rows)
}

fn mode_travel_times<S: TravelTimeSource + ?Sized>(
    batch: &Batch<'_, Area>,
    mode: TravelMode,
    params: &CommuteParameters,
    source: &S,
) -> Result<Vec<f64>, CommuteRatioError> {
    let durations = batch_travel_times(batch.items, mode, params, source).map_err(|e| {
        CommuteRatioError::TravelTimeError {
            batch_index: batch.index,
            mode,
            direction: params.direction,
            source: e,
        }
    })?;
    log::debug!(
        "batch {} {mode}: {} durations for areas {}..{}",
        batch.index,
        durations.len(),
        batch.offset,
        batch.offset + batch.len()
    );
    Ok(durations)
}

/// travel times between each area centroid and the hub for one mode, one
/// value per area in area order.
pub fn batch_travel_times<S: TravelTimeSource + ?Sized>(
    areas: &[Area],
    mode: TravelMode,
    params: &CommuteParameters,
    source: &S,
) -> Result<Vec<f64>, DistanceMatrixError> {
    let locations = areas.iter().map(Area::centroid_string).collect_vec();
    let hub = params.hub.location_string();
    match params.direction {
        CommuteDirection::Inbound => travel_time_ops::travel_time_per_origin(
            source,
            locations,
            vec![hub],
            mode,
            params.trip_time,
        ),
        CommuteDirection::Outbound => travel_time_ops::travel_time_per_destination(
            source,
            hub,
            locations,
            mode,
            params.trip_time,
        ),
    }
}

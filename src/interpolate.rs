// src/interpolate.rs
//
// Gap-filling for per-vehicle track sequences. The upstream detector +
// tracker miss frames (occlusion, glare, a dropped detection), so a
// vehicle's row sequence arrives sparse. This module rebuilds a dense
// sequence: one row per frame from the vehicle's first to last sighting,
// with missing boxes linearly interpolated between the surrounding
// observations. OCR metadata is only meaningful on frames that were
// genuinely observed; synthesized frames carry the "0" sentinel.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::types::{BBox, Observation, ResultRow};
use crate::Result;

/// Densify the results log.
///
/// Rows may arrive in any order with vehicles interleaved. For every
/// vehicle id in the input, the output holds exactly one row per frame in
/// `[first_seen, last_seen]`, in ascending frame order, with vehicles in
/// ascending id order. Observed rows keep their bbox cell text verbatim
/// (the persisted form round-trips bit-identically) and their OCR cells;
/// synthesized rows get interpolated boxes and `"0"` for all three OCR
/// cells.
///
/// Fails closed on the first malformed row: a bad cell anywhere aborts the
/// whole operation rather than silently corrupting neighboring tracks.
pub fn interpolate(rows: &[ResultRow]) -> Result<Vec<ResultRow>> {
    // Parse everything up front; ascending id order falls out of the map.
    let mut tracks: BTreeMap<i64, Vec<Observation>> = BTreeMap::new();
    for (index, row) in rows.iter().enumerate() {
        let obs = Observation::parse(index, row)?;
        tracks.entry(obs.car_id).or_default().push(obs);
    }

    let mut out = Vec::with_capacity(rows.len());

    for (car_id, mut track) in tracks {
        track.sort_by_key(|o| o.frame);

        // Frame -> source row, scoped to this call only.
        let observed: HashMap<i64, usize> =
            track.iter().map(|o| (o.frame, o.source)).collect();

        // Emitted box sequences, one entry per frame starting at the first
        // observation. Each gap interpolates from the most recently emitted
        // box (which, since every synthesized box lands exactly on the
        // segment between its two raw endpoints, equals the previous raw
        // observation).
        let mut last_car = track[0].car_bbox;
        let mut last_plate = track[0].plate_bbox;
        let mut car_boxes: Vec<BBox> = vec![last_car];
        let mut plate_boxes: Vec<BBox> = vec![last_plate];

        for pair in track.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            let span = cur.frame - prev.frame;
            if span > 1 {
                for step in 1..span {
                    let t = step as f64 / span as f64;
                    car_boxes.push(last_car.lerp(&cur.car_bbox, t));
                    plate_boxes.push(last_plate.lerp(&cur.plate_bbox, t));
                }
            }
            last_car = cur.car_bbox;
            last_plate = cur.plate_bbox;
            car_boxes.push(last_car);
            plate_boxes.push(last_plate);
        }

        debug!(
            "car {}: {} observed frames -> {} emitted",
            car_id,
            track.len(),
            car_boxes.len()
        );

        let first_frame = track[0].frame;
        for (offset, (car_box, plate_box)) in
            car_boxes.iter().zip(plate_boxes.iter()).enumerate()
        {
            let frame = first_frame + offset as i64;
            match observed.get(&frame) {
                Some(&source) => {
                    let orig = &rows[source];
                    out.push(ResultRow {
                        frame_nmr: frame.to_string(),
                        car_id: car_id.to_string(),
                        car_bbox: orig.car_bbox.clone(),
                        license_plate_bbox: orig.license_plate_bbox.clone(),
                        license_plate_bbox_score: orig.license_plate_bbox_score.clone(),
                        license_number: orig.license_number.clone(),
                        license_number_score: orig.license_number_score.clone(),
                    });
                }
                None => out.push(ResultRow {
                    frame_nmr: frame.to_string(),
                    car_id: car_id.to_string(),
                    car_bbox: car_box.to_string(),
                    license_plate_bbox: plate_box.to_string(),
                    // No OCR ran on a frame nobody observed.
                    license_plate_bbox_score: "0".to_string(),
                    license_number: "0".to_string(),
                    license_number_score: "0".to_string(),
                }),
            }
        }
    }

    Ok(out)
}

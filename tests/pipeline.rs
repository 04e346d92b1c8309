// tests/pipeline.rs
//
// End-to-end: CSV text in, dense CSV text out, through the same read ->
// interpolate -> write path the binary uses.

use plate_track::{interpolate, results};

const SPARSE: &str = "\
frame_nmr,car_id,car_bbox,license_plate_bbox,license_plate_bbox_score,license_number,license_number_score
0,1,\"[0,0,10,10]\",\"[2,2,4,4]\",0.92,AB12CDE,0.88
3,1,\"[30,0,40,10]\",\"[32,2,34,4]\",0.90,AB12CDE,0.84
5,2,\"[500.25,100.00,600.25,180.00]\",\"[520.0,150.0,560.0,170.0]\",0.80,GH45JKL,0.75
";

#[test]
fn sparse_log_round_trips_into_a_dense_log() {
    let rows = results::read_rows(SPARSE.as_bytes()).unwrap();
    assert_eq!(rows.len(), 3);

    let dense = interpolate(&rows).unwrap();
    // Car 1 spans frames 0..=3, car 2 is a single sighting.
    assert_eq!(dense.len(), 5);

    let mut buf = Vec::new();
    results::write_rows(&mut buf, &dense).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "frame_nmr,car_id,car_bbox,license_plate_bbox,\
         license_plate_bbox_score,license_number,license_number_score"
    );

    // Observed rows pass their bbox cell text through untouched, trailing
    // zeros included.
    assert!(lines[1].starts_with("0,1,\"[0,0,10,10]\""));
    assert!(lines[5].contains("\"[500.25,100.00,600.25,180.00]\""));
    assert!(lines[5].ends_with("0.80,GH45JKL,0.75"));

    // Synthesized rows carry interpolated boxes and sentinel OCR cells.
    assert_eq!(lines[2], "1,1,\"[10,0,20,10]\",\"[12,2,14,4]\",0,0,0");
    assert_eq!(lines[3], "2,1,\"[20,0,30,10]\",\"[22,2,24,4]\",0,0,0");
    assert!(lines[4].starts_with("3,1,\"[30,0,40,10]\""));
}

#[test]
fn reading_the_dense_log_back_reproduces_it() {
    let rows = results::read_rows(SPARSE.as_bytes()).unwrap();
    let dense = interpolate(&rows).unwrap();

    let mut buf = Vec::new();
    results::write_rows(&mut buf, &dense).unwrap();
    let back = results::read_rows(buf.as_slice()).unwrap();
    assert_eq!(back, dense);

    // A dense log is a fixed point of the engine.
    assert_eq!(interpolate(&back).unwrap(), back);
}

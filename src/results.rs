// src/results.rs
//
// Read/write the results log CSV. Header and column order are fixed:
//
//   frame_nmr,car_id,car_bbox,license_plate_bbox,
//   license_plate_bbox_score,license_number,license_number_score
//
// The bbox cells are bracketed 4-tuples ("[x1,y1,x2,y2]") stored as single
// text cells; since they contain commas the writer quotes them. Rows short
// of the trailing OCR columns read back with "0" in those cells.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::types::ResultRow;
use crate::Result;

/// Read all rows from a CSV source.
pub fn read_rows<R: io::Read>(reader: R) -> Result<Vec<ResultRow>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut rows = Vec::new();
    // Deserialize each record positionally (headers = None) so that the
    // `#[serde(default = "zero_cell")]` fields on `ResultRow` fill in trailing
    // OCR cells when a record is short. The header-mapped path (`deserialize`)
    // errors on short records instead of applying those defaults.
    for record in rdr.records() {
        rows.push(record?.deserialize(None)?);
    }
    Ok(rows)
}

pub fn read_file(path: &Path) -> Result<Vec<ResultRow>> {
    read_rows(File::open(path)?)
}

/// Write the header plus all rows to a CSV sink.
pub fn write_rows<W: io::Write>(writer: W, rows: &[ResultRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_file(path: &Path, rows: &[ResultRow]) -> Result<()> {
    write_rows(File::create(path)?, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
frame_nmr,car_id,car_bbox,license_plate_bbox,license_plate_bbox_score,license_number,license_number_score
0,1,\"[100.0,200.0,300.0,400.0]\",\"[150.0,350.0,250.0,390.0]\",0.92,AB12CDE,0.88
3,1,\"[130.0,200.0,330.0,400.0]\",\"[180.0,350.0,280.0,390.0]\",0.90,AB12CDE,0.84
";

    #[test]
    fn reads_quoted_bbox_cells_intact() {
        let rows = read_rows(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].frame_nmr, "0");
        assert_eq!(rows[0].car_bbox, "[100.0,200.0,300.0,400.0]");
        assert_eq!(rows[1].license_plate_bbox, "[180.0,350.0,280.0,390.0]");
        assert_eq!(rows[1].license_number, "AB12CDE");
    }

    #[test]
    fn short_rows_default_ocr_cells_to_zero() {
        let text = "\
frame_nmr,car_id,car_bbox,license_plate_bbox,license_plate_bbox_score,license_number,license_number_score
5,2,\"[1,2,3,4]\",\"[5,6,7,8]\"
";
        let rows = read_rows(text.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].license_plate_bbox_score, "0");
        assert_eq!(rows[0].license_number, "0");
        assert_eq!(rows[0].license_number_score, "0");
    }

    #[test]
    fn write_then_read_preserves_every_cell() {
        let rows = read_rows(SAMPLE.as_bytes()).unwrap();
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows).unwrap();
        let back = read_rows(buf.as_slice()).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn written_output_has_header_and_quoted_cells() {
        let rows = read_rows(SAMPLE.as_bytes()).unwrap();
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(
                "frame_nmr,car_id,car_bbox,license_plate_bbox,\
                 license_plate_bbox_score,license_number,license_number_score"
            )
        );
        let first = lines.next().unwrap();
        assert!(first.contains("\"[100.0,200.0,300.0,400.0]\""));
    }
}

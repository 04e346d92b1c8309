// src/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Axis-aligned box in pixel coordinates, `[x1, y1, x2, y2]` with
/// `x1 < x2`, `y1 < y2` (assumed, not enforced).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox(pub [f64; 4]);

impl BBox {
    /// Parse the bracketed cell form `[v1,v2,v3,v4]`. Whitespace around
    /// individual numbers is tolerated; anything else returns `None`.
    pub fn parse(cell: &str) -> Option<Self> {
        let inner = cell.trim().strip_prefix('[')?.strip_suffix(']')?;
        let mut coords = [0.0f64; 4];
        let mut parts = inner.split(',');
        for slot in coords.iter_mut() {
            *slot = parts.next()?.trim().parse().ok()?;
        }
        if parts.next().is_some() {
            return None;
        }
        Some(BBox(coords))
    }

    /// Component-wise linear interpolation toward `other` at parameter `t`
    /// (`t = 0` is `self`, `t = 1` is `other`).
    pub fn lerp(&self, other: &BBox, t: f64) -> BBox {
        let mut coords = [0.0f64; 4];
        for (i, slot) in coords.iter_mut().enumerate() {
            *slot = self.0[i] + (other.0[i] - self.0[i]) * t;
        }
        BBox(coords)
    }

    /// Strict-inequality point containment. Points on the box edge do not
    /// count as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.0[0] < x && x < self.0[2] && self.0[1] < y && y < self.0[3]
    }

    pub fn x1(&self) -> f64 {
        self.0[0]
    }

    pub fn y1(&self) -> f64 {
        self.0[1]
    }
}

/// Formats as `[v1,v2,v3,v4]`, each coordinate printed with Rust's default
/// `f64` formatting: the shortest decimal text that parses back to the same
/// value. This is the stable serialized form for synthesized boxes.
impl fmt::Display for BBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{},{}]", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

fn zero_cell() -> String {
    "0".to_string()
}

/// One row of the results log, exactly as persisted. All cells stay textual
/// so observed rows round-trip bit-identically; parsing into numbers happens
/// once, in [`Observation::parse`]. The OCR cells default to `"0"` when the
/// row is short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub frame_nmr: String,
    pub car_id: String,
    pub car_bbox: String,
    pub license_plate_bbox: String,
    #[serde(default = "zero_cell")]
    pub license_plate_bbox_score: String,
    #[serde(default = "zero_cell")]
    pub license_number: String,
    #[serde(default = "zero_cell")]
    pub license_number_score: String,
}

/// A parsed observation: one vehicle on one frame. `source` is the index of
/// the originating row, kept so the engine can copy OCR metadata from rows
/// that were genuinely observed.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    pub frame: i64,
    pub car_id: i64,
    pub car_bbox: BBox,
    pub plate_bbox: BBox,
    pub source: usize,
}

impl Observation {
    /// Parse one row. `frame_nmr` must be an integer; `car_id` tolerates a
    /// float form ("3.0") and truncates, since some trackers report float
    /// identities. Any malformed cell fails the whole operation.
    pub fn parse(index: usize, row: &ResultRow) -> Result<Self> {
        let frame = row
            .frame_nmr
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidNumber {
                row: index,
                field: "frame_nmr",
                value: row.frame_nmr.clone(),
            })?;

        let car_id = row
            .car_id
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v as i64)
            .ok_or_else(|| Error::InvalidNumber {
                row: index,
                field: "car_id",
                value: row.car_id.clone(),
            })?;

        let car_bbox = BBox::parse(&row.car_bbox).ok_or_else(|| Error::InvalidBox {
            row: index,
            field: "car_bbox",
            value: row.car_bbox.clone(),
        })?;

        let plate_bbox =
            BBox::parse(&row.license_plate_bbox).ok_or_else(|| Error::InvalidBox {
                row: index,
                field: "license_plate_bbox",
                value: row.license_plate_bbox.clone(),
            })?;

        Ok(Observation {
            frame,
            car_id,
            car_bbox,
            plate_bbox,
            source: index,
        })
    }
}

/// A vehicle identity with its current box, as reported by the upstream
/// multi-object tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedVehicle {
    pub car_id: i64,
    pub bbox: BBox,
}

//! Post-processing for a vehicle / license-plate recognition pipeline.
//!
//! The upstream stages (vehicle detector, multi-object tracker, plate OCR)
//! produce a sparse results log: one row per vehicle per frame it was
//! actually seen on. This crate owns everything that happens around that
//! log:
//!
//! - [`interpolate()`]: densify each vehicle's track by filling frame gaps
//!   with linearly interpolated boxes, so every track covers its full
//!   observed lifetime.
//! - [`results`]: read and write the log's CSV form.
//! - [`plate`]: plate-text format validation and OCR confusion cleanup.
//! - [`association`]: match a plate detection to the vehicle it belongs to.
//!
//! The interpolation engine is a pure transform over in-memory rows; all
//! file I/O lives in [`results`] and the binary.

pub mod association;
pub mod interpolate;
pub mod plate;
pub mod results;
pub mod types;

pub use interpolate::interpolate;
pub use types::{BBox, Observation, ResultRow, TrackedVehicle};

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `frame_nmr` or `car_id` cell did not hold a number.
    #[error("row {row}: {field} is not numeric: {value:?}")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    /// A bbox cell was not a bracketed 4-tuple of numbers.
    #[error("row {row}: {field} is not a bracketed 4-tuple of numbers: {value:?}")]
    InvalidBox {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

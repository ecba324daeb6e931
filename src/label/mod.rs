//! Time-to-event failure labeling
//!
//! Buckets readouts into discrete classes by proximity to a repair/failure
//! event.
//!
//! ## Architecture
//!
//! - `class`: the `FailureClass` label type and its conversions
//! - `window`: remaining-time derivation and window bucketing
//! - `report`: label distribution counts and text reports
//!
//! ## Example
//!
//! ```
//! use averia::label::{failure_class, FailureClass};
//!
//! // readout 40 time steps before the failure event
//! let class = failure_class(1.0, 60.0, 100.0);
//! assert_eq!(class, FailureClass::Watch);
//! assert_eq!(class as u8, 1);
//! ```

pub mod class;
pub mod report;
pub mod window;

pub use class::{FailureClass, LabelError};
pub use report::{label_report, LabelDistribution};
pub use window::{
    failure_class, label_series, ELEVATED_WINDOW, HIGH_WINDOW, IMMINENT_WINDOW, WATCH_WINDOW,
};

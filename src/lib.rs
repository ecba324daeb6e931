//! averia: time-to-event failure window labeling
//!
//! Pure, stateless labeling of study readouts by proximity to a
//! repair/failure event. Each readout carries an event indicator, the current
//! time step, and the time step at which the event occurred; the crate maps
//! these to one of five discrete [`FailureClass`] values.
//!
//! The windows, in time steps remaining before the event, are: more than 48
//! (`Normal`), 48 down to 24 (`Watch`), 24 down to 12 (`Elevated`), 12 down
//! to 6 (`High`), and 6 or less (`Imminent`). Readouts with no event in the
//! study window are always `Normal`.
//!
//! # Example
//!
//! ```
//! use averia::{failure_class, label_report, label_series, FailureClass};
//!
//! assert_eq!(failure_class(1.0, 92.0, 100.0), FailureClass::High);
//!
//! let labels = label_series(&[0.0, 1.0], &[10.0, 98.0], &[100.0, 100.0]);
//! assert_eq!(labels, vec![FailureClass::Normal, FailureClass::Imminent]);
//!
//! println!("{}", label_report(&labels));
//! ```

pub mod label;

pub use label::{
    failure_class, label_report, label_series, FailureClass, LabelDistribution, LabelError,
};

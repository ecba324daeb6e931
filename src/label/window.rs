//! Failure window bucketing
//!
//! Maps "time remaining until the repair/failure event" onto a
//! [`FailureClass`]. Windows are half-open on the low end and closed on the
//! high end, so a remaining time of exactly 48 falls in the watch window, not
//! the normal one. Remaining times at or below 6 bucket to `Imminent`
//! regardless of sign.

use super::class::FailureClass;

/// Upper bound of the watch window, in time steps before the event
pub const WATCH_WINDOW: f64 = 48.0;
/// Upper bound of the elevated window
pub const ELEVATED_WINDOW: f64 = 24.0;
/// Upper bound of the high window
pub const HIGH_WINDOW: f64 = 12.0;
/// Upper bound of the imminent window
pub const IMMINENT_WINDOW: f64 = 6.0;

impl FailureClass {
    /// Bucket an already-derived remaining time into a class
    ///
    /// Evaluates the window bounds in descending order. Anything that fails
    /// every `>` comparison, including negative and NaN remaining times,
    /// lands in `Imminent`.
    pub fn from_remaining(remaining_time: f64) -> Self {
        if remaining_time > WATCH_WINDOW {
            FailureClass::Normal
        } else if remaining_time > ELEVATED_WINDOW {
            FailureClass::Watch
        } else if remaining_time > HIGH_WINDOW {
            FailureClass::Elevated
        } else if remaining_time > IMMINENT_WINDOW {
            FailureClass::High
        } else {
            FailureClass::Imminent
        }
    }
}

/// Classify a single readout by proximity to its failure event
///
/// # Arguments
/// * `in_study_repair` - event indicator; `0` means no repair/failure event
///   in the study window, any other value means an event exists
/// * `time_step` - time index at which the classification is evaluated
/// * `length_of_study_time_step` - time index at which the event occurred
///
/// # Returns
/// The [`FailureClass`] for `length_of_study_time_step - time_step`, or
/// `Normal` unconditionally when no event exists.
///
/// # Example
/// ```
/// use averia::{failure_class, FailureClass};
///
/// assert_eq!(failure_class(0.0, 10.0, 100.0), FailureClass::Normal);
/// assert_eq!(failure_class(1.0, 60.0, 100.0), FailureClass::Watch);
/// ```
pub fn failure_class(
    in_study_repair: f64,
    time_step: f64,
    length_of_study_time_step: f64,
) -> FailureClass {
    if in_study_repair == 0.0 {
        return FailureClass::Normal;
    }

    FailureClass::from_remaining(length_of_study_time_step - time_step)
}

/// Classify a series of readouts given as parallel slices
///
/// Panics if the slices differ in length.
pub fn label_series(
    in_study_repair: &[f64],
    time_steps: &[f64],
    lengths_of_study: &[f64],
) -> Vec<FailureClass> {
    assert_eq!(
        in_study_repair.len(),
        time_steps.len(),
        "Indicator and time step slices must have same length"
    );
    assert_eq!(
        time_steps.len(),
        lengths_of_study.len(),
        "Time step and study length slices must have same length"
    );

    in_study_repair
        .iter()
        .zip(time_steps.iter())
        .zip(lengths_of_study.iter())
        .map(|((&event, &step), &length)| failure_class(event, step, length))
        .collect()
}

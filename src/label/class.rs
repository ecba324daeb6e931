//! Failure class labels
//!
//! Provides the `FailureClass` enum with stable numeric discriminants 0..=4,
//! conversions to and from the raw integer form, and the labeling error type.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Labeling errors
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("Unknown failure class: {0}")]
    UnknownClass(u8),
}

/// Result type for labeling operations
pub type Result<T> = std::result::Result<T, LabelError>;

/// Discrete failure-proximity class for a single readout
///
/// Each class covers a window of time steps remaining before the failure
/// event. Ordering follows urgency: `Imminent` compares greater than
/// `Normal`. The numeric discriminant is the stored label value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum FailureClass {
    /// No event in the study window, or more than 48 time steps remaining
    Normal = 0,
    /// Between 24 (exclusive) and 48 (inclusive) time steps remaining
    Watch = 1,
    /// Between 12 (exclusive) and 24 (inclusive) time steps remaining
    Elevated = 2,
    /// Between 6 (exclusive) and 12 (inclusive) time steps remaining
    High = 3,
    /// 6 or fewer time steps remaining, including negative values
    Imminent = 4,
}

impl FailureClass {
    /// All classes in discriminant order
    pub const ALL: [FailureClass; 5] = [
        FailureClass::Normal,
        FailureClass::Watch,
        FailureClass::Elevated,
        FailureClass::High,
        FailureClass::Imminent,
    ];

    /// Number of classes
    pub const COUNT: usize = Self::ALL.len();

    /// Short lowercase name for display and reports
    pub fn name(self) -> &'static str {
        match self {
            FailureClass::Normal => "normal",
            FailureClass::Watch => "watch",
            FailureClass::Elevated => "elevated",
            FailureClass::High => "high",
            FailureClass::Imminent => "imminent",
        }
    }
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<FailureClass> for u8 {
    fn from(class: FailureClass) -> u8 {
        class as u8
    }
}

impl TryFrom<u8> for FailureClass {
    type Error = LabelError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(FailureClass::Normal),
            1 => Ok(FailureClass::Watch),
            2 => Ok(FailureClass::Elevated),
            3 => Ok(FailureClass::High),
            4 => Ok(FailureClass::Imminent),
            other => Err(LabelError::UnknownClass(other)),
        }
    }
}

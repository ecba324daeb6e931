//! Label distribution summaries
//!
//! Counts labels per class over a labeled series and renders a fixed-width
//! text report, the same shape as an sklearn classification report.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::class::FailureClass;

/// Per-class label counts over a labeled series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDistribution {
    /// Counts indexed by class discriminant
    counts: [usize; FailureClass::COUNT],
}

impl LabelDistribution {
    /// Count labels from a labeled series
    pub fn from_labels(labels: &[FailureClass]) -> Self {
        let mut counts = [0usize; FailureClass::COUNT];
        for &label in labels {
            counts[label as usize] += 1;
        }
        Self { counts }
    }

    /// Count of labels in the given class
    pub fn count(&self, class: FailureClass) -> usize {
        self.counts[class as usize]
    }

    /// Total number of labels counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Fraction of labels in the given class
    ///
    /// Returns 0.0 for an empty distribution.
    pub fn fraction(&self, class: FailureClass) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(class) as f64 / total as f64
    }
}

impl fmt::Display for LabelDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Label distribution:")?;
        for class in FailureClass::ALL {
            writeln!(f, "  {:<8} {:>6}", class, self.count(class))?;
        }
        Ok(())
    }
}

/// Generate a fixed-width label distribution report
///
/// One row per class with count and fraction, plus a total row.
///
/// # Example
/// ```
/// use averia::{label_report, FailureClass};
///
/// let report = label_report(&[FailureClass::Normal, FailureClass::Imminent]);
/// println!("{}", report);
/// ```
pub fn label_report(labels: &[FailureClass]) -> String {
    let dist = LabelDistribution::from_labels(labels);

    let mut report = String::new();

    report.push_str(&format!(
        "{:>12} {:>10} {:>10}\n",
        "class", "count", "fraction"
    ));
    report.push_str(&"-".repeat(34));
    report.push('\n');

    for class in FailureClass::ALL {
        report.push_str(&format!(
            "{:>12} {:>10} {:>10.2}\n",
            class.name(),
            dist.count(class),
            dist.fraction(class)
        ));
    }

    report.push_str(&"-".repeat(34));
    report.push('\n');
    report.push_str(&format!("{:>12} {:>10}\n", "total", dist.total()));

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_labels() -> Vec<FailureClass> {
        vec![
            FailureClass::Normal,
            FailureClass::Normal,
            FailureClass::Normal,
            FailureClass::Watch,
            FailureClass::Elevated,
            FailureClass::Elevated,
            FailureClass::High,
            FailureClass::Imminent,
            FailureClass::Imminent,
            FailureClass::Imminent,
        ]
    }

    #[test]
    fn test_counts() {
        let dist = LabelDistribution::from_labels(&sample_labels());

        assert_eq!(dist.count(FailureClass::Normal), 3);
        assert_eq!(dist.count(FailureClass::Watch), 1);
        assert_eq!(dist.count(FailureClass::Elevated), 2);
        assert_eq!(dist.count(FailureClass::High), 1);
        assert_eq!(dist.count(FailureClass::Imminent), 3);
        assert_eq!(dist.total(), 10);
    }

    #[test]
    fn test_fractions() {
        let dist = LabelDistribution::from_labels(&sample_labels());

        assert!((dist.fraction(FailureClass::Normal) - 0.3).abs() < 1e-6);
        assert!((dist.fraction(FailureClass::Watch) - 0.1).abs() < 1e-6);
        assert!((dist.fraction(FailureClass::Imminent) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_empty_distribution() {
        let dist = LabelDistribution::from_labels(&[]);

        assert_eq!(dist.total(), 0);
        for class in FailureClass::ALL {
            assert_eq!(dist.count(class), 0);
            assert_eq!(dist.fraction(class), 0.0);
        }
    }

    #[test]
    fn test_report_contains_every_class() {
        let report = label_report(&sample_labels());

        assert!(report.contains("class"));
        assert!(report.contains("count"));
        assert!(report.contains("fraction"));
        for class in FailureClass::ALL {
            assert!(report.contains(class.name()));
        }
        assert!(report.contains("total"));
    }

    #[test]
    fn test_display() {
        let dist = LabelDistribution::from_labels(&sample_labels());

        let display = format!("{dist}");
        assert!(display.contains("Label distribution"));
        assert!(display.contains("normal"));
        assert!(display.contains("imminent"));
    }

    #[test]
    fn test_serde_round_trip() {
        let dist = LabelDistribution::from_labels(&sample_labels());

        let json = serde_json::to_string(&dist).unwrap();
        let back: LabelDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dist);
    }
}

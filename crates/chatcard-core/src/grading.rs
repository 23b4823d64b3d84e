use crate::models::Grade;

/// Lowest score that counts as a pass for a single subject.
pub const PASS_MARK: f64 = 40.0;

/// Inclusive bounds for a single subject score.
pub const MIN_MARK: f64 = 0.0;
pub const MAX_MARK: f64 = 100.0;

/// Grade thresholds as inclusive lower bounds, highest first. Anything below
/// the last bound is an [`Grade::F`].
pub const GRADE_THRESHOLDS: &[(f64, Grade)] = &[
    (90.0, Grade::APlus),
    (80.0, Grade::A),
    (70.0, Grade::B),
    (60.0, Grade::C),
    (40.0, Grade::D),
];

impl Grade {
    /// Look up the grade for an unrounded percentage. First matching
    /// threshold wins.
    pub fn from_percentage(percentage: f64) -> Grade {
        GRADE_THRESHOLDS
            .iter()
            .find(|(bound, _)| percentage >= *bound)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }
}

/// Whether a single subject score is a pass.
pub fn is_pass(mark: f64) -> bool {
    mark >= PASS_MARK
}

/// Whether `mark` is a usable score: finite and within `MIN_MARK..=MAX_MARK`.
pub fn is_valid_mark(mark: f64) -> bool {
    mark.is_finite() && (MIN_MARK..=MAX_MARK).contains(&mark)
}

/// Unrounded `total / (subjects * MAX_MARK) * 100`.
///
/// Returns `0.0` for zero subjects.
pub fn raw_percentage(total: f64, subjects: usize) -> f64 {
    if subjects == 0 {
        return 0.0;
    }
    (total / (subjects as f64 * MAX_MARK)) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_percentage_boundaries_inclusive() {
        assert_eq!(Grade::from_percentage(100.0), Grade::APlus);
        assert_eq!(Grade::from_percentage(90.0), Grade::APlus);
        assert_eq!(Grade::from_percentage(80.0), Grade::A);
        assert_eq!(Grade::from_percentage(70.0), Grade::B);
        assert_eq!(Grade::from_percentage(60.0), Grade::C);
        assert_eq!(Grade::from_percentage(40.0), Grade::D);
        assert_eq!(Grade::from_percentage(39.999), Grade::F);
        assert_eq!(Grade::from_percentage(0.0), Grade::F);
    }

    #[test]
    fn test_from_percentage_just_below_threshold() {
        // Would round to 90.00 but the grade is taken before rounding.
        assert_eq!(Grade::from_percentage(89.995), Grade::A);
        assert_eq!(Grade::from_percentage(79.9999), Grade::B);
    }

    #[test]
    fn test_is_pass() {
        assert!(is_pass(40.0));
        assert!(is_pass(100.0));
        assert!(!is_pass(39.5));
    }

    #[test]
    fn test_is_valid_mark() {
        assert!(is_valid_mark(0.0));
        assert!(is_valid_mark(100.0));
        assert!(is_valid_mark(55.5));
        assert!(!is_valid_mark(-0.1));
        assert!(!is_valid_mark(100.01));
        assert!(!is_valid_mark(f64::NAN));
        assert!(!is_valid_mark(f64::INFINITY));
    }

    #[test]
    fn test_raw_percentage() {
        assert!((raw_percentage(255.0, 3) - 85.0).abs() < 1e-9);
        assert!((raw_percentage(63.0, 2) - 31.5).abs() < 1e-9);
        assert_eq!(raw_percentage(10.0, 0), 0.0);
    }
}

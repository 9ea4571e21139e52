//! Thresholds and exit codes.

/// LTV:CAC at or above this ratio is healthy.
pub const HEALTHY_LTV_CAC: f64 = 3.0;

/// LTV:CAC at or above this ratio (and below [`HEALTHY_LTV_CAC`]) is tight.
pub const TIGHT_LTV_CAC: f64 = 2.0;

/// Gross margin is entered as a percentage.
pub const PERCENT: f64 = 100.0;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (unknown variant, time unit or format).
    pub const ERROR_CONFIG: i32 = 2;
    /// Output could not be written.
    pub const ERROR_IO: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_ordered() {
        assert!(TIGHT_LTV_CAC < HEALTHY_LTV_CAC);
    }

    #[test]
    fn exit_codes_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_CONFIG,
            exit_codes::ERROR_IO,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

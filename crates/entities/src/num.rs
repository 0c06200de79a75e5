//! Number rendering used by every `Display` impl in the crate.

use std::fmt;

/// Shortest round-trip form of an `f64`, with a trailing `.0` on whole values
/// (`5.0`, `8.2`, `49.4`).
///
/// Very large and very small magnitudes switch to exponent form without a sign
/// on the exponent: `1e200`, `1e-200` (Python would print `1e+200`). The output
/// always parses back to the same `f64`.
#[derive(Clone, Copy, Debug)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `Debug` for f64 keeps the `.0`; `Display` drops it.
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Num;

    #[test]
    fn whole_and_fractional() {
        assert_eq!(Num(5.0).to_string(), "5.0");
        assert_eq!(Num(8.2).to_string(), "8.2");
        assert_eq!(Num(0.0).to_string(), "0.0");
        assert_eq!(Num(-4.0).to_string(), "-4.0");
        assert_eq!(Num(50.0 - 0.6).to_string(), "49.4");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(Num(1e200).to_string(), "1e200");
        assert_eq!(Num(1e-200).to_string(), "1e-200");
        for v in [1e200, 1e-200, -3.5e300, f64::MAX, f64::MIN_POSITIVE] {
            assert_eq!(Num(v).to_string().parse::<f64>().unwrap(), v);
        }
    }
}

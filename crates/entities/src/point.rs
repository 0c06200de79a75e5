//! 2D point with validated coordinates.
//!
//! - Backed by `nalgebra::Vector2<f64>`; integer inputs are widened to `f64`.
//! - Every coordinate must be finite. NaN and ±∞ are rejected at construction,
//!   in the setters and when parsing text, always with `InvalidCoordinate`.
//! - Equality is exact (no tolerance).

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::error::EntityError;
use crate::num::Num;

/// Coordinate axis, used to name the offending coordinate in errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[inline]
fn checked(axis: Axis, value: f64) -> Result<f64, EntityError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EntityError::InvalidCoordinate {
            axis,
            input: value.to_string(),
        })
    }
}

/// A point in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    v: Vector2<f64>,
}

impl Point {
    pub fn new(x: impl Into<f64>, y: impl Into<f64>) -> Result<Self, EntityError> {
        let x = checked(Axis::X, x.into())?;
        let y = checked(Axis::Y, y.into())?;
        Ok(Self {
            v: Vector2::new(x, y),
        })
    }

    #[inline]
    pub fn origin() -> Self {
        Self {
            v: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.v.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.v.y
    }

    pub fn set_x(&mut self, x: impl Into<f64>) -> Result<(), EntityError> {
        self.v.x = checked(Axis::X, x.into())?;
        Ok(())
    }

    pub fn set_y(&mut self, y: impl Into<f64>) -> Result<(), EntityError> {
        self.v.y = checked(Axis::Y, y.into())?;
        Ok(())
    }

    /// Euclidean length of the segment from `self` to `other`.
    ///
    /// Uses `hypot`, so no intermediate square overflows or underflows. The result
    /// is `inf` only when a coordinate difference itself exceeds `f64::MAX`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let d = other.v - self.v;
        d.x.hypot(d.y)
    }

    #[inline]
    pub fn as_vector(&self) -> Vector2<f64> {
        self.v
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", Num(self.v.x), Num(self.v.y))
    }
}

impl TryFrom<Vector2<f64>> for Point {
    type Error = EntityError;

    fn try_from(v: Vector2<f64>) -> Result<Self, Self::Error> {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        p.v
    }
}

/// Parses `x,y`, optionally wrapped in parentheses: `"3,4"`, `"(3.0, 4.2)"`.
impl FromStr for Point {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);
        let (xs, ys) = inner.split_once(',').unwrap_or((inner, ""));
        let parse = |axis: Axis, text: &str| -> Result<f64, EntityError> {
            let text = text.trim();
            text.parse::<f64>()
                .map_err(|_| EntityError::InvalidCoordinate {
                    axis,
                    input: text.to_string(),
                })
                .and_then(|v| checked(axis, v))
        };
        let x = parse(Axis::X, xs)?;
        let y = parse(Axis::Y, ys)?;
        Ok(Self {
            v: Vector2::new(x, y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn integers_widen_to_float() {
        let a = Point::new(6, 7).unwrap();
        assert_eq!(a.x(), 6.0);
        assert_eq!(a.y(), 7.0);
        assert_eq!(Point::new(3, 4).unwrap(), p(3.0, 4.0));
        assert_eq!(Point::default(), p(0.0, 0.0));
    }

    #[test]
    fn non_finite_rejected_on_new_and_set() {
        let err = Point::new(f64::NAN, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCoordinate);
        assert!(matches!(
            Point::new(0.0, f64::INFINITY),
            Err(EntityError::InvalidCoordinate { axis: Axis::Y, .. })
        ));

        let mut a = p(1.0, 2.0);
        assert!(a.set_x(f64::NEG_INFINITY).is_err());
        assert!(a.set_y(f64::NAN).is_err());
        assert_eq!(a, p(1.0, 2.0));
    }

    #[test]
    fn setters_update_single_coordinate() {
        let a = p(3.0, 4.0);
        let mut b = p(7.0, 6.0);
        assert_ne!(a, b);
        b.set_x(3).unwrap();
        assert_ne!(a, b);
        b.set_y(4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn distance_known_values() {
        assert_eq!(p(0.0, 3.0).distance(&p(4.0, 0.0)), 5.0);
        assert_eq!(p(4.0, 0.0).distance(&p(0.0, 3.0)), 5.0);
        assert_eq!(p(0.0, -3.0).distance(&p(-4.0, 0.0)), 5.0);
        assert_eq!(p(0.0, 0.0).distance(&p(0.0, 1.0)), 1.0);
    }

    #[test]
    fn distance_at_extreme_magnitudes() {
        let o = Point::origin();
        assert_eq!(o.distance(&p(1e200, 0.0)), 1e200);
        assert_eq!(o.distance(&p(0.0, -1e-200)), 1e-200);
        let big = p(3e300, 0.0).distance(&p(0.0, 4e300));
        assert!((big / 5e300 - 1.0).abs() < 1e-15, "{big}");
        let tiny = p(3e-300, 0.0).distance(&p(0.0, 4e-300));
        assert!((tiny / 5e-300 - 1.0).abs() < 1e-15, "{tiny}");
        // the difference itself overflows
        assert_eq!(p(-f64::MAX, 0.0).distance(&p(f64::MAX, 0.0)), f64::INFINITY);
    }

    #[test]
    fn renders_with_float_coordinates() {
        assert_eq!(Point::new(5, 5).unwrap().to_string(), "(5.0, 5.0)");
        assert_eq!(p(6.0, 10.0).to_string(), "(6.0, 10.0)");
        assert_eq!(Point::new(7, 8.2).unwrap().to_string(), "(7.0, 8.2)");
    }

    #[test]
    fn parses_text() {
        assert_eq!("3,4".parse::<Point>().unwrap(), p(3.0, 4.0));
        assert_eq!("(7.0, 8.2)".parse::<Point>().unwrap(), p(7.0, 8.2));
        assert_eq!(" -1.5 , 2 ".parse::<Point>().unwrap(), p(-1.5, 2.0));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(matches!(
            "abc,1".parse::<Point>(),
            Err(EntityError::InvalidCoordinate { axis: Axis::X, .. })
        ));
        assert!(matches!(
            "1".parse::<Point>(),
            Err(EntityError::InvalidCoordinate { axis: Axis::Y, .. })
        ));
        assert!(matches!(
            "1,2,3".parse::<Point>(),
            Err(EntityError::InvalidCoordinate { axis: Axis::Y, .. })
        ));
        assert!("nan,0".parse::<Point>().is_err());
    }

    #[test]
    fn vector_conversions() {
        let v: Vector2<f64> = p(1.0, -2.0).into();
        assert_eq!(v, Vector2::new(1.0, -2.0));
        assert_eq!(Point::try_from(v).unwrap(), p(1.0, -2.0));
        assert!(Point::try_from(Vector2::new(f64::NAN, 0.0)).is_err());
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            ax in -1e6f64..1e6, ay in -1e6f64..1e6,
            bx in -1e6f64..1e6, by in -1e6f64..1e6,
        ) {
            let a = p(ax, ay);
            let b = p(bx, by);
            prop_assert_eq!(a.distance(&b), b.distance(&a));
            prop_assert!(a.distance(&b) >= 0.0);
        }

        #[test]
        fn distance_is_finite_and_symmetric_at_any_magnitude(
            ax in -1e300f64..1e300, ay in -1e300f64..1e300,
            bx in -1e300f64..1e300, by in -1e300f64..1e300,
            scale in -300i32..300,
        ) {
            let k = 10f64.powi(scale);
            let a = p(ax / 1e300 * k, ay / 1e300 * k);
            let b = p(bx / 1e300 * k, by / 1e300 * k);
            let d = a.distance(&b);
            prop_assert!(d.is_finite());
            prop_assert_eq!(d, b.distance(&a));
            if a != b {
                prop_assert!(d > 0.0);
            }
        }

        #[test]
        fn distance_to_self_is_zero(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            let a = p(x, y);
            prop_assert_eq!(a.distance(&a), 0.0);
            prop_assert_eq!(a, a);
        }

        #[test]
        fn equality_follows_coordinates(
            ax in -10i32..10, ay in -10i32..10,
            bx in -10i32..10, by in -10i32..10,
        ) {
            let a = Point::new(ax, ay).unwrap();
            let b = Point::new(bx, by).unwrap();
            prop_assert_eq!(a == b, ax == bx && ay == by);
            prop_assert_eq!(a == b, b == a);
        }

        #[test]
        fn display_round_trips(x in -1e6f64..1e6, y in -1e6f64..1e6) {
            let a = p(x, y);
            prop_assert_eq!(a.to_string().parse::<Point>().unwrap(), a);
        }
    }
}

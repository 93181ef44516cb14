//! Microsecond-precision timestamps
//!
//! The sample clock for trace recording. A [`Timestamp`] is a whole-second /
//! microsecond pair with total ordering, borrow/carry arithmetic, and the
//! `"<seconds>.<microseconds>"` rendering used in trace files.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::time::{SystemTime, UNIX_EPOCH};

/// Microseconds per second.
const MICROS_PER_SEC: i64 = 1_000_000;

/// A point in time as whole seconds plus microseconds.
///
/// The microsecond field is always canonical (`0..1_000_000`); the
/// constructor carries/borrows any excess into the seconds field, so ordering
/// and subtraction behave lexicographically for every value. Seconds may be
/// negative: a negative timestamp is a valid result of subtracting a later
/// time from an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    seconds: i64,
    microseconds: i64,
}

impl Timestamp {
    /// A timestamp of zero seconds, zero microseconds.
    pub const ZERO: Timestamp = Timestamp {
        seconds: 0,
        microseconds: 0,
    };

    /// Create a timestamp from seconds and microseconds.
    ///
    /// Microseconds outside `[0, 1_000_000)` are folded into the seconds
    /// field: `Timestamp::new(5, 1_500_000)` equals `Timestamp::new(6, 500_000)`,
    /// and `Timestamp::new(5, -1)` equals `Timestamp::new(4, 999_999)`.
    pub fn new(seconds: i64, microseconds: i64) -> Self {
        Self {
            seconds: seconds + microseconds.div_euclid(MICROS_PER_SEC),
            microseconds: microseconds.rem_euclid(MICROS_PER_SEC),
        }
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        SystemTime::now().into()
    }

    /// The whole-seconds component.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The sub-second component in microseconds, always in `[0, 1_000_000)`.
    pub fn microseconds(&self) -> i64 {
        self.microseconds
    }
}

impl From<SystemTime> for Timestamp {
    /// Decompose the elapsed time since the Unix epoch.
    fn from(t: SystemTime) -> Self {
        let elapsed = t.duration_since(UNIX_EPOCH).unwrap_or_default();
        Self {
            seconds: elapsed.as_secs() as i64,
            microseconds: i64::from(elapsed.subsec_micros()),
        }
    }
}

impl Sub for Timestamp {
    type Output = Timestamp;

    /// Borrow subtraction: the microsecond component of the result stays in
    /// `[0, 1_000_000)`; the seconds component goes negative when `rhs` is
    /// later than `self`.
    fn sub(self, rhs: Timestamp) -> Timestamp {
        let mut seconds = self.seconds;
        let mut microseconds = self.microseconds - rhs.microseconds;
        if microseconds < 0 {
            microseconds += MICROS_PER_SEC;
            seconds -= 1;
        }
        Timestamp {
            seconds: seconds - rhs.seconds,
            microseconds,
        }
    }
}

impl SubAssign for Timestamp {
    fn sub_assign(&mut self, rhs: Timestamp) {
        *self = *self - rhs;
    }
}

impl Add for Timestamp {
    type Output = Timestamp;

    /// Carry addition, the inverse of [`Sub`]: `(a - b) + b == a`.
    fn add(self, rhs: Timestamp) -> Timestamp {
        Timestamp::new(
            self.seconds + rhs.seconds,
            self.microseconds + rhs.microseconds,
        )
    }
}

impl AddAssign for Timestamp {
    fn add_assign(&mut self, rhs: Timestamp) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.seconds, self.microseconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Timestamp::new(1, 999_999) < Timestamp::new(2, 0));
        assert!(Timestamp::new(2, 0) < Timestamp::new(2, 1));
        assert!(Timestamp::new(3, 500_000) > Timestamp::new(3, 499_999));
        assert!(Timestamp::new(4, 2) <= Timestamp::new(4, 2));
        assert_eq!(Timestamp::new(7, 42), Timestamp::new(7, 42));
    }

    #[test]
    fn test_constructor_normalizes_microseconds() {
        assert_eq!(Timestamp::new(5, 1_500_000), Timestamp::new(6, 500_000));
        assert_eq!(Timestamp::new(5, -1), Timestamp::new(4, 999_999));
        assert_eq!(Timestamp::new(0, 2_000_000).seconds(), 2);
        assert_eq!(Timestamp::new(0, 2_000_000).microseconds(), 0);
    }

    #[test]
    fn test_subtraction_borrows_from_seconds() {
        let a = Timestamp::new(101, 0);
        let b = Timestamp::new(100, 500_000);
        let d = a - b;
        assert_eq!(d.seconds(), 0);
        assert_eq!(d.microseconds(), 500_000);
    }

    #[test]
    fn test_subtraction_can_go_negative() {
        let a = Timestamp::new(100, 0);
        let b = Timestamp::new(100, 1);
        let d = a - b;
        assert_eq!(d.seconds(), -1);
        assert_eq!(d.microseconds(), 999_999);
    }

    #[test]
    fn test_round_trip_law() {
        let pairs = [
            (Timestamp::new(100, 500_000), Timestamp::new(42, 999_999)),
            (Timestamp::new(0, 0), Timestamp::new(10, 10)),
            (Timestamp::new(5, 1), Timestamp::new(5, 2)),
        ];
        for (a, b) in pairs {
            let d = a - b;
            assert!(d.microseconds() >= 0 && d.microseconds() < 1_000_000);
            assert_eq!(d + b, a);
            assert_eq!(a - a, Timestamp::ZERO);
        }
    }

    #[test]
    fn test_sub_assign_matches_sub() {
        let mut a = Timestamp::new(10, 250_000);
        let b = Timestamp::new(3, 750_000);
        a -= b;
        assert_eq!(a, Timestamp::new(10, 250_000) - b);
        assert_eq!(a, Timestamp::new(6, 500_000));
    }

    #[test]
    fn test_display_pads_microseconds() {
        assert_eq!(Timestamp::new(5, 3).to_string(), "5.000003");
        assert_eq!(Timestamp::new(5, 0).to_string(), "5.000000");
        assert_eq!(Timestamp::new(0, 123_456).to_string(), "0.123456");
    }

    #[test]
    fn test_wall_clock_construction_is_canonical() {
        let t = Timestamp::now();
        assert!(t.seconds() > 0);
        assert!(t.microseconds() >= 0 && t.microseconds() < 1_000_000);
    }
}

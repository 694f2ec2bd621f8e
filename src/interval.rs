// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A closed interval `[from, to]` over the integers.
///
/// Both endpoints belong to the interval, so `[1, 2]` and `[2, 4]` overlap.
///
/// # Examples
///
/// ```
/// use interval_cluster::Interval;
///
/// let a = Interval::new(1, 2).unwrap();
/// let b = Interval::new(2, 4).unwrap();
/// assert!(a.overlaps(&b));
/// assert_eq!(a.to_string(), "1-2");
///
/// assert!(Interval::new(4, 2).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Bounds"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    from: i64,
    to: i64,
}

impl Interval {
    /// Returns the interval `[from, to]`, or `Error::InvalidInterval` if
    /// `from > to`.
    pub fn new(from: i64, to: i64) -> Result<Interval> {
        if from > to {
            return Err(Error::invalid_interval(from, to));
        }
        Ok(Interval { from, to })
    }

    /// Returns the interval `[from, to]` without checking its bounds.
    ///
    /// An inverted interval built this way is rejected when it is handed to
    /// the clusterer.
    pub const fn new_unchecked(from: i64, to: i64) -> Interval {
        Interval { from, to }
    }

    #[inline]
    pub fn from(&self) -> i64 { self.from }

    #[inline]
    pub fn to(&self) -> i64 { self.to }

    /// Returns `true` if `from <= to`.
    #[inline]
    pub fn is_valid(&self) -> bool { self.from <= self.to }

    /// Returns `true` if the two intervals share at least one point.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::invalid_interval(self.from, self.to))
        }
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = Error;

    fn try_from((from, to): (i64, i64)) -> Result<Interval> {
        Interval::new(from, to)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

// Deserialization goes through here so inverted bounds never escape.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct Bounds {
    from: i64,
    to: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<Bounds> for Interval {
    type Error = Error;

    fn try_from(bounds: Bounds) -> Result<Interval> {
        Interval::new(bounds.from, bounds.to)
    }
}

#[cfg(test)]
mod test {
    use super::Interval;
    use crate::error::Error;

    fn iv(from: i64, to: i64) -> Interval {
        Interval::new(from, to).unwrap()
    }

    #[test]
    fn test_new() {
        assert_eq!(iv(3, 3).from(), 3);
        assert_eq!(iv(-4, 7).to(), 7);
        assert_eq!(
            Interval::new(2, 1),
            Err(Error::InvalidInterval { index: None, from: 2, to: 1 })
        );
        assert!(!Interval::new_unchecked(2, 1).is_valid());
        assert_eq!(Interval::try_from((1, 5)), Ok(iv(1, 5)));
    }

    #[test]
    fn test_overlaps() {
        assert!(iv(1, 2).overlaps(&iv(2, 4)));   // touching
        assert!(iv(2, 4).overlaps(&iv(1, 2)));
        assert!(iv(1, 5).overlaps(&iv(2, 3)));   // containment
        assert!(iv(3, 3).overlaps(&iv(3, 3)));   // single points
        assert!(!iv(1, 2).overlaps(&iv(3, 4)));  // adjacent integers do not touch
        assert!(!iv(5, 7).overlaps(&iv(-1, 4)));
    }

    #[test]
    fn test_display() {
        assert_eq!(iv(1, 5).to_string(), "1-5");
        assert_eq!(iv(-3, -1).to_string(), "-3--1");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&iv(1, 2)).unwrap();
        assert_eq!(json, r#"{"from":1,"to":2}"#);

        let back: Interval = serde_json::from_str(r#"{"from":1,"to":5}"#).unwrap();
        assert_eq!(back, iv(1, 5));

        assert!(serde_json::from_str::<Interval>(r#"{"from":5,"to":1}"#).is_err());
    }
}

// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An interval's start lies after its end.
    ///
    /// `index` is the interval's position in the clusterer's input, or `None`
    /// when the interval was rejected on construction.
    #[error("invalid interval{}: from {from} is greater than to {to}", position(.index))]
    InvalidInterval {
        index: Option<usize>,
        from: i64,
        to: i64,
    },
}

fn position(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at position {}", i),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_interval(from: i64, to: i64) -> Self {
        Error::InvalidInterval { index: None, from, to }
    }

    /// Attaches the input position of the offending interval.
    pub fn at(self, position: usize) -> Self {
        match self {
            Error::InvalidInterval { from, to, .. } => Error::InvalidInterval {
                index: Some(position),
                from,
                to,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn test_display() {
        let err = Error::invalid_interval(5, 1);
        assert_eq!(err.to_string(), "invalid interval: from 5 is greater than to 1");
        assert_eq!(
            err.at(3).to_string(),
            "invalid interval at position 3: from 5 is greater than to 1"
        );
    }
}

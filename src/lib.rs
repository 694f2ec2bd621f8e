// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Groups closed integer intervals into clusters of mutually reachable overlapping intervals.
//!
//! Two intervals `[a, b]` and `[c, d]` overlap when `a <= d && c <= b`, so intervals that
//! merely touch at an endpoint overlap. A cluster is a connected component of the resulting
//! overlap graph: every input interval lands in exactly one cluster, and two intervals share a
//! cluster iff a chain of pairwise overlaps links them.
//!
//! Clusters are produced by a single sweep over the intervals in ascending order of `from`,
//! with a [`MinHeap`](heap::MinHeap) keyed on `to` detecting when a cluster can no longer grow.
//! They can be consumed through a sink callback ([`IntervalClusterer::cluster`]) or pulled
//! lazily ([`IntervalClusterer::clusters`]).
//!
//! ```
//! use interval_cluster::{Interval, IntervalClusterer};
//!
//! let intervals: Vec<Interval> = [(1, 2), (3, 4), (2, 4), (8, 9)]
//!     .iter()
//!     .map(|&(from, to)| Interval::new(from, to))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! let clusters: Vec<String> = IntervalClusterer::new()
//!     .clusters(&intervals)
//!     .unwrap()
//!     .map(|c| c.to_string())
//!     .collect();
//! assert_eq!(clusters, vec!["1-2;2-4;3-4", "8-9"]);
//! ```
//!
//! The crate never installs a logger; sweep progress is reported through the [`log`] facade.

pub mod cluster;
pub mod error;
pub mod heap;
pub mod interval;

pub use cluster::{cluster, Cluster, Clusters, IntervalClusterer, Member};
pub use error::{Error, Result};
pub use interval::Interval;

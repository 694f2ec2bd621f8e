// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sweep-line clustering of closed intervals.
//!
//! The sweep visits intervals in ascending order of `from` while a min-heap keyed on `to`
//! holds the members of the current group that may still overlap something ahead. Every
//! live member whose `to` lies before the next interval's `from` is retired. Once the heap
//! runs dry, no member of the group can reach any later interval, so the group is a complete
//! connected component of the overlap graph and is emitted as one cluster.
//!
//! Sorting is `O(n log n)` and every interval enters and leaves the heap once, so a full
//! sweep is `O(n log n)`.

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use std::slice;
use std::vec;

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::heap::{KeyOrder, MinHeap};
use crate::interval::Interval;

/// An input interval tagged with its position in the input.
///
/// Two members with equal bounds are still distinct members.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Member {
    pub index: usize,
    pub interval: Interval,
}

fn end_of(member: &Member) -> i64 {
    member.interval.to()
}

type SweepHeap = MinHeap<Member, KeyOrder<Member, i64>>;

/// A connected component of the overlap graph.
///
/// Members are stored in sweep order, which is ascending by `from`; the order
/// among members with equal `from` is unspecified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cluster {
    members: Vec<Member>,
}

impl Cluster {
    fn new(members: Vec<Member>) -> Cluster {
        debug_assert!(!members.is_empty());
        Cluster { members }
    }

    pub fn len(&self) -> usize { self.members.len() }

    /// Always `false`: clusters are never empty.
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    pub fn members(&self) -> &[Member] { &self.members }

    pub fn iter(&self) -> slice::Iter<Member> { self.members.iter() }

    /// Returns the intervals of the cluster in sweep order.
    pub fn intervals(&self) -> impl Iterator<Item = &Interval> + '_ {
        self.members.iter().map(|m| &m.interval)
    }

    /// Returns the input positions of the cluster's members in sweep order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().map(|m| m.index)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.members.iter().any(|m| m.index == index)
    }

    pub fn into_members(self) -> Vec<Member> { self.members }
}

impl fmt::Display for Cluster {
    /// Writes the member intervals sorted by bounds and joined by `;`, e.g. `1-2;1-5;2-4`.
    ///
    /// Two clusters with the same intervals print the same way regardless of
    /// sweep order.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut intervals: Vec<&Interval> = self.intervals().collect();
        intervals.sort_by_key(|iv| (iv.from(), iv.to()));
        for (i, iv) in intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", iv)?;
        }
        Ok(())
    }
}

impl IntoIterator for Cluster {
    type Item = Member;
    type IntoIter = vec::IntoIter<Member>;
    fn into_iter(self) -> vec::IntoIter<Member> { self.members.into_iter() }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = &'a Member;
    type IntoIter = slice::Iter<'a, Member>;
    fn into_iter(self) -> slice::Iter<'a, Member> { self.members.iter() }
}

/// A lazy iterator over the clusters of a validated input, in sweep order.
///
/// Acquire through [`IntervalClusterer::clusters`]. The iterator cannot be
/// restarted; once it returns `None` it keeps returning `None`.
pub struct Clusters {
    pending: vec::IntoIter<Member>,
    live: SweepHeap,
    group: Vec<Member>,
    emitted: usize,
}

impl Clusters {
    fn new(sorted: Vec<Member>, capacity: usize) -> Clusters {
        Clusters {
            pending: sorted.into_iter(),
            live: MinHeap::with_capacity_by_key(capacity, end_of),
            group: vec![],
            emitted: 0,
        }
    }

    /// Pops every live member that ends before `start`.
    fn retire_before(&mut self, start: i64) {
        while let Some(top) = self.live.peek() {
            if start <= top.interval.to() {
                break;
            }
            let peeked = *top;
            if let Some(retired) = self.live.pop() {
                debug_assert_eq!(retired, peeked, "heap popped a different member than it peeked");
                trace!("retired {} (#{}) before {}", retired.interval, retired.index, start);
            }
        }
    }

    fn emit(&mut self, members: Vec<Member>) -> Cluster {
        self.emitted += 1;
        trace!("cluster {} closed with {} members", self.emitted, members.len());
        Cluster::new(members)
    }
}

impl Iterator for Clusters {
    type Item = Cluster;

    fn next(&mut self) -> Option<Cluster> {
        while let Some(member) = self.pending.next() {
            self.retire_before(member.interval.from());

            let closed = if self.live.is_empty() && !self.group.is_empty() {
                Some(mem::take(&mut self.group))
            } else {
                None
            };

            self.live.push(member);
            self.group.push(member);

            if let Some(members) = closed {
                return Some(self.emit(members));
            }
        }

        if self.group.is_empty() {
            return None;
        }
        self.live.clear();
        let members = mem::take(&mut self.group);
        let cluster = self.emit(members);
        debug!("sweep finished with {} clusters", self.emitted);
        Some(cluster)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.pending.len();
        let open = usize::from(!self.group.is_empty());
        (open, Some(pending + open))
    }
}

impl FusedIterator for Clusters {}

/// Partitions closed intervals into the connected components of their overlap graph.
///
/// # Examples
///
/// ```
/// use interval_cluster::{Interval, IntervalClusterer};
///
/// let intervals = [
///     Interval::new(1, 2).unwrap(),
///     Interval::new(2, 4).unwrap(),
///     Interval::new(8, 9).unwrap(),
/// ];
///
/// let mut keys = vec![];
/// IntervalClusterer::new()
///     .cluster(&intervals, |cluster| keys.push(cluster.to_string()))
///     .unwrap();
/// assert_eq!(keys, vec!["1-2;2-4", "8-9"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct IntervalClusterer {
    capacity: usize,
}

impl IntervalClusterer {
    pub fn new() -> IntervalClusterer {
        IntervalClusterer { capacity: 0 }
    }

    /// Returns a clusterer whose sweep heap starts with room for `capacity`
    /// live intervals.
    pub fn with_capacity(capacity: usize) -> IntervalClusterer {
        IntervalClusterer { capacity }
    }

    /// Validates every interval and returns a lazy iterator over the clusters.
    ///
    /// Fails with `Error::InvalidInterval` carrying the input position of the
    /// first interval whose `from` exceeds its `to`; no cluster is produced in
    /// that case.
    pub fn clusters<I>(&self, intervals: I) -> Result<Clusters>
    where
        I: IntoIterator,
        I::Item: Borrow<Interval>,
    {
        let mut sorted = vec![];
        for (index, interval) in intervals.into_iter().enumerate() {
            let interval: Interval = *interval.borrow();
            if let Err(err) = interval.validate() {
                let err = err.at(index);
                debug!("rejecting input: {}", err);
                return Err(err);
            }
            sorted.push(Member { index, interval });
        }
        sorted.sort_by_key(|m| m.interval.from());
        debug!("sweeping {} intervals", sorted.len());

        let capacity = self.capacity.min(sorted.len());
        Ok(Clusters::new(sorted, capacity))
    }

    /// Calls `on_cluster` once for every cluster, synchronously and in sweep
    /// order.
    ///
    /// Validation happens before the sweep, so `on_cluster` is never called
    /// when an error is returned. Empty input never calls `on_cluster`.
    pub fn cluster<I, F>(&self, intervals: I, mut on_cluster: F) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Borrow<Interval>,
        F: FnMut(Cluster),
    {
        for cluster in self.clusters(intervals)? {
            on_cluster(cluster);
        }
        Ok(())
    }
}

/// Clusters `intervals` with a default [`IntervalClusterer`], calling
/// `on_cluster` once per cluster.
pub fn cluster<F>(intervals: &[Interval], on_cluster: F) -> Result<()>
where
    F: FnMut(Cluster),
{
    IntervalClusterer::new().cluster(intervals, on_cluster)
}

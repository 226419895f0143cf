//! Slot addressing shared by every hash-indexed table.
//!
//! A term's slot depends only on its bytes, the table capacity and the probe
//! policy. The dictionary file is written one line per slot, so a reader that
//! knows those three things can recompute a term's line and seek straight to
//! its record.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// Name of the hash recorded in index metadata.
pub const HASH_NAME: &str = "xxh3-64";

/// Collision resolution used after the home slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbePolicy {
    /// `home + i`
    #[default]
    Linear,
    /// `home + i*(i+1)/2`. Visits every slot only when capacity is a power of two.
    Quadratic,
}

/// XXH3-64 of the term's UTF-8 bytes, seed 0.
pub fn slot_hash(term: &str) -> u64 {
    xxh3_64(term.as_bytes())
}

/// Slot a term lands in when nothing collides. A zero capacity maps to slot 0.
pub fn home_slot(term: &str, capacity: usize) -> usize {
    (slot_hash(term) % (capacity as u64).max(1)) as usize
}

/// Slots to try for a term, in order. Yields at most `capacity` positions.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    home: u64,
    capacity: u64,
    policy: ProbePolicy,
    step: u64,
}

impl ProbeSequence {
    pub fn new(term: &str, capacity: usize, policy: ProbePolicy) -> Self {
        let capacity = capacity as u64;
        Self { home: slot_hash(term) % capacity.max(1), capacity, policy, step: 0 }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step >= self.capacity {
            return None;
        }
        let i = self.step;
        self.step += 1;
        let offset = match self.policy {
            ProbePolicy::Linear => i % self.capacity,
            ProbePolicy::Quadratic => (i * (i + 1) / 2) % self.capacity,
        };
        Some(((self.home + offset) % self.capacity) as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.capacity - self.step) as usize;
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hash_is_stable() {
        assert_eq!(slot_hash("cat"), slot_hash("cat"));
        assert_ne!(slot_hash("cat"), slot_hash("dog"));
    }

    #[test]
    fn first_probe_is_home_slot() {
        for policy in [ProbePolicy::Linear, ProbePolicy::Quadratic] {
            let mut seq = ProbeSequence::new("elephant", 97, policy);
            assert_eq!(seq.next(), Some(home_slot("elephant", 97)));
        }
    }

    #[test]
    fn linear_probe_covers_every_slot_once() {
        let seen: HashSet<usize> = ProbeSequence::new("term", 13, ProbePolicy::Linear).collect();
        assert_eq!(seen.len(), 13);
    }

    #[test]
    fn quadratic_probe_covers_power_of_two_tables() {
        let seen: HashSet<usize> = ProbeSequence::new("term", 64, ProbePolicy::Quadratic).collect();
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn zero_capacity_does_not_panic() {
        assert_eq!(home_slot("cat", 0), 0);
        assert_eq!(ProbeSequence::new("cat", 0, ProbePolicy::Linear).count(), 0);
    }

    #[test]
    fn probe_sequence_is_bounded_by_capacity() {
        assert_eq!(ProbeSequence::new("x", 5, ProbePolicy::Quadratic).count(), 5);
    }
}

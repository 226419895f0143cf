use crate::error::{IndexError, Result};
use crate::slot::{ProbePolicy, ProbeSequence};

const TABLE_NAME: &str = "document term table";

/// Fixed-capacity open-addressing counter for the terms of one document.
///
/// Must be empty when a document starts; [`DocumentTermTable::reset`] clears
/// only the slots the last document touched.
#[derive(Debug)]
pub struct DocumentTermTable {
    slots: Vec<Option<(String, u32)>>,
    used: Vec<usize>,
    probe: ProbePolicy,
}

impl DocumentTermTable {
    pub fn new(capacity: usize, probe: ProbePolicy) -> Self {
        Self { slots: vec![None; capacity], used: Vec::new(), probe }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Distinct terms currently counted.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Adds one occurrence of `term` and returns its new count. Fails with
    /// `TableFull` once every slot holds a different term.
    pub fn increment(&mut self, term: &str) -> Result<u32> {
        for idx in ProbeSequence::new(term, self.capacity(), self.probe) {
            match &mut self.slots[idx] {
                Some((t, count)) if t == term => {
                    *count += 1;
                    return Ok(*count);
                }
                Some(_) => continue,
                slot @ None => {
                    *slot = Some((term.to_string(), 1));
                    self.used.push(idx);
                    return Ok(1);
                }
            }
        }
        Err(IndexError::TableFull { table: TABLE_NAME, capacity: self.capacity() })
    }

    pub fn count(&self, term: &str) -> u32 {
        for idx in ProbeSequence::new(term, self.capacity(), self.probe) {
            match &self.slots[idx] {
                Some((t, count)) if t == term => return *count,
                Some(_) => continue,
                None => return 0,
            }
        }
        0
    }

    /// Occupied slots in slot order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        let mut order = self.used.clone();
        order.sort_unstable();
        order.into_iter().filter_map(move |idx| {
            self.slots[idx].as_ref().map(|(t, c)| (t.as_str(), *c))
        })
    }

    pub fn reset(&mut self) {
        for idx in self.used.drain(..) {
            self.slots[idx] = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_terms() {
        let mut table = DocumentTermTable::new(16, ProbePolicy::Linear);
        assert_eq!(table.increment("cat").unwrap(), 1);
        assert_eq!(table.increment("cat").unwrap(), 2);
        table.increment("dog").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.count("cat"), 2);
        assert_eq!(table.count("dog"), 1);
        assert_eq!(table.count("eel"), 0);
    }

    #[test]
    fn entries_follow_slot_order() {
        let mut table = DocumentTermTable::new(32, ProbePolicy::Linear);
        for t in ["alpha", "beta", "gamma", "delta", "alpha"] {
            table.increment(t).unwrap();
        }
        let slots: Vec<usize> = table
            .entries()
            .map(|(t, _)| table.slots.iter().position(|s| matches!(s, Some((x, _)) if x == t)).unwrap())
            .collect();
        let mut sorted = slots.clone();
        sorted.sort_unstable();
        assert_eq!(slots, sorted);
        let total: u32 = table.entries().map(|(_, c)| c).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn reset_restores_empty_table() {
        let mut table = DocumentTermTable::new(8, ProbePolicy::Quadratic);
        table.increment("one").unwrap();
        table.increment("two").unwrap();
        table.reset();
        assert!(table.is_empty());
        assert_eq!(table.entries().count(), 0);
        assert!(table.slots.iter().all(Option::is_none));
        assert_eq!(table.increment("one").unwrap(), 1);
    }

    #[test]
    fn full_table_rejects_new_terms() {
        let mut table = DocumentTermTable::new(2, ProbePolicy::Linear);
        table.increment("a1").unwrap();
        table.increment("b2").unwrap();
        // existing terms still count
        assert_eq!(table.increment("a1").unwrap(), 2);
        let err = table.increment("c3").unwrap_err();
        assert!(matches!(err, IndexError::TableFull { capacity: 2, .. }));
    }
}

use crate::error::{IndexError, Result};
use crate::index::{DocId, Posting, TermEntry};
use crate::slot::{ProbePolicy, ProbeSequence};

const TABLE_NAME: &str = "global term index";

/// Change made by an in-progress flush.
#[derive(Debug, Clone, Copy)]
enum Touched {
    Created(usize),
    Appended(usize),
}

/// Fixed-capacity, slot-addressed postings for the whole corpus.
///
/// Never resized: a term's slot must stay reproducible from its hash, the
/// capacity and the probe policy alone, because the dictionary file is
/// written one line per slot.
#[derive(Debug)]
pub struct GlobalTermIndex {
    slots: Vec<Option<TermEntry>>,
    probe: ProbePolicy,
    live: usize,
}

impl GlobalTermIndex {
    pub fn new(capacity: usize, probe: ProbePolicy) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, probe, live: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn probe(&self) -> ProbePolicy {
        self.probe
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Merges one document's counts. Each term gets `(doc_id, count)` appended;
    /// a term may only be flushed once per document, in ascending doc order.
    ///
    /// All or nothing: on error every slot created and every posting appended
    /// by this call is taken back out.
    pub fn flush<'a, I>(&mut self, doc_id: DocId, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut touched: Vec<Touched> = Vec::new();
        for (term, freq) in entries {
            if let Err(err) = self.append(doc_id, term, freq, &mut touched) {
                self.rollback(touched);
                return Err(err);
            }
        }
        Ok(())
    }

    fn append(&mut self, doc_id: DocId, term: &str, freq: u32, touched: &mut Vec<Touched>) -> Result<()> {
        let (idx, created) = self.locate_or_insert(term)?;
        if created {
            touched.push(Touched::Created(idx));
        }
        let Some(entry) = self.slots[idx].as_mut() else {
            return Ok(());
        };
        if let Some(last) = entry.postings.last() {
            if last.doc_id >= doc_id {
                return Err(IndexError::OutOfOrderFlush { term: term.to_string(), doc_id, last: last.doc_id });
            }
        }
        entry.postings.push(Posting { doc_id, freq });
        if !created {
            touched.push(Touched::Appended(idx));
        }
        Ok(())
    }

    // Slots created here were empty when every older term was placed, so no
    // older probe chain runs through them and clearing them is safe.
    fn rollback(&mut self, touched: Vec<Touched>) {
        for change in touched.into_iter().rev() {
            match change {
                Touched::Created(idx) => {
                    self.slots[idx] = None;
                    self.live -= 1;
                }
                Touched::Appended(idx) => {
                    if let Some(entry) = self.slots[idx].as_mut() {
                        entry.postings.pop();
                    }
                }
            }
        }
    }

    fn locate_or_insert(&mut self, term: &str) -> Result<(usize, bool)> {
        for idx in ProbeSequence::new(term, self.capacity(), self.probe) {
            match &self.slots[idx] {
                Some(entry) if entry.term == term => return Ok((idx, false)),
                Some(_) => continue,
                None => {
                    self.slots[idx] = Some(TermEntry::new(term.to_string()));
                    self.live += 1;
                    return Ok((idx, true));
                }
            }
        }
        Err(IndexError::TableFull { table: TABLE_NAME, capacity: self.capacity() })
    }

    /// Walks the probe sequence a reader would walk.
    pub fn lookup(&self, term: &str) -> Option<(usize, &TermEntry)> {
        for idx in ProbeSequence::new(term, self.capacity(), self.probe) {
            match &self.slots[idx] {
                Some(entry) if entry.term == term => return Some((idx, entry)),
                Some(_) => continue,
                None => return None,
            }
        }
        None
    }

    /// Every slot in order, empty ones included.
    pub fn slots(&self) -> impl Iterator<Item = (usize, Option<&TermEntry>)> + '_ {
        self.slots.iter().enumerate().map(|(idx, slot)| (idx, slot.as_ref()))
    }
}

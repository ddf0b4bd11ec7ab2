//! Accumulated letter knowledge
//!
//! Each round's feedback is turned into facts and merged into the cumulative state.
//! Facts are never retracted within a game; the only edit is that an exact letter count
//! supersedes an earlier blanket absence for the same letter.

use crate::core::letter::{self, ALPHABET};
use crate::core::{Feedback, LetterSet, Mark, WORD_LENGTH};
use rustc_hash::FxHashSet;
use std::fmt;

/// A letter tied to a position
///
/// Stored in [`Knowledge::positioned`] it means "this letter is here"; in
/// [`Knowledge::vague`] it means "this letter is in the word, but not here".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fact {
    pub letter: u8,
    pub position: usize,
}

impl Fact {
    #[must_use]
    pub const fn new(letter: u8, position: usize) -> Self {
        Self { letter, position }
    }
}

/// Everything learned so far in one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    positioned: FxHashSet<Fact>,
    vague: FxHashSet<Fact>,
    absent: LetterSet,
    counts: [Option<u8>; ALPHABET],
}

impl Knowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one round of feedback into the accumulated facts
    ///
    /// Present and correct marks are tallied for the whole round first. An absent mark
    /// for a letter that also scored present this round reveals the letter's exact
    /// count instead of its absence.
    pub fn absorb(&mut self, feedback: &Feedback) {
        let mut present = [0u8; ALPHABET];
        for cell in feedback.cells() {
            if cell.mark != Mark::Absent {
                present[letter::index(cell.letter)] += 1;
            }
        }

        for (position, cell) in feedback.cells().iter().enumerate() {
            let fact = Fact::new(cell.letter, position);
            match cell.mark {
                Mark::Correct => {
                    self.positioned.insert(fact);
                }
                Mark::Present => {
                    self.vague.insert(fact);
                }
                Mark::Absent => match present[letter::index(cell.letter)] {
                    0 => self.mark_absent(cell.letter),
                    count => self.set_count(cell.letter, count),
                },
            }
        }
    }

    fn mark_absent(&mut self, letter: u8) {
        if self.counts[letter::index(letter)].is_none() {
            self.absent.insert(letter);
        }
    }

    /// Record an exact count; it overrides any earlier absence of the letter
    fn set_count(&mut self, letter: u8, count: u8) {
        self.counts[letter::index(letter)] = Some(count);
        self.absent.remove(letter);
    }

    /// Letters confirmed at a position
    #[must_use]
    pub const fn positioned(&self) -> &FxHashSet<Fact> {
        &self.positioned
    }

    /// Letters confirmed present but not at a position
    #[must_use]
    pub const fn vague(&self) -> &FxHashSet<Fact> {
        &self.vague
    }

    /// Letters confirmed absent from the answer
    #[must_use]
    pub const fn absent(&self) -> LetterSet {
        self.absent
    }

    /// Exact occurrence count of a letter, when known
    #[must_use]
    pub const fn count(&self, letter: u8) -> Option<u8> {
        self.counts[letter::index(letter)]
    }

    /// All letters with a known exact count, alphabetically
    pub fn counts(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter_map(|(i, count)| count.map(|c| (letter::from_index(i), c)))
    }

    /// Letters named by any positioned or vague fact
    #[must_use]
    pub fn known_letters(&self) -> LetterSet {
        self.positioned
            .iter()
            .chain(&self.vague)
            .map(|fact| fact.letter)
            .collect()
    }

    /// True before any feedback has been absorbed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positioned.is_empty()
            && self.vague.is_empty()
            && self.absent.is_empty()
            && self.counts.iter().all(Option::is_none)
    }

    /// The answer pattern as far as it is pinned down, e.g. `t.a..`
    #[must_use]
    pub fn pinned(&self) -> String {
        let mut slots = ['.'; WORD_LENGTH];
        for fact in &self.positioned {
            slots[fact.position] = fact.letter as char;
        }
        slots.iter().collect()
    }
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut vague: Vec<&Fact> = self.vague.iter().collect();
        vague.sort();

        write!(f, "pinned {}", self.pinned())?;
        if !vague.is_empty() {
            write!(f, " | not here")?;
            for fact in vague {
                write!(f, " {}@{}", fact.letter as char, fact.position + 1)?;
            }
        }
        if !self.absent.is_empty() {
            write!(f, " | absent {}", self.absent)?;
        }
        for (letter, count) in self.counts() {
            write!(f, " | {}×{count}", letter as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absorb(knowledge: &mut Knowledge, compact: &str) {
        knowledge.absorb(&compact.parse().unwrap());
    }

    #[test]
    fn correct_adds_positioned_fact() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "+t-e-a-c-h");

        assert!(knowledge.positioned().contains(&Fact::new(b't', 0)));
        assert_eq!(knowledge.positioned().len(), 1);
        assert_eq!(knowledge.pinned(), "t....");
    }

    #[test]
    fn present_adds_vague_fact() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "-b-a~s-i-c");

        assert!(knowledge.vague().contains(&Fact::new(b's', 2)));
        assert!(!knowledge.absent().contains(b's'));
    }

    #[test]
    fn absent_letters_accumulate() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "-t-e-a-c-h");

        assert_eq!(knowledge.absent().to_string(), "aceht");
        assert!(knowledge.positioned().is_empty());
        assert!(knowledge.vague().is_empty());
    }

    #[test]
    fn facts_are_deduplicated() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "+t~e-a-c-h");
        absorb(&mut knowledge, "+t~e-a-c-h");

        assert_eq!(knowledge.positioned().len(), 1);
        assert_eq!(knowledge.vague().len(), 1);
        assert_eq!(knowledge.absent().len(), 3);
    }

    #[test]
    fn doubled_letter_present_then_absent_sets_count() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "~e-e-r-i-e");

        assert_eq!(knowledge.count(b'e'), Some(1));
        assert!(!knowledge.absent().contains(b'e'));
        assert!(knowledge.absent().contains(b'r'));
    }

    #[test]
    fn doubled_letter_absent_then_correct_sets_count() {
        // GEESE against CHEAP: the first E is absent, the second is green
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "-g-e+e-s-e");

        assert_eq!(knowledge.count(b'e'), Some(1));
        assert!(!knowledge.absent().contains(b'e'));
        assert!(knowledge.positioned().contains(&Fact::new(b'e', 2)));
    }

    #[test]
    fn count_reflects_every_present_copy() {
        // Two E's matched, third reported absent
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "~e+e-r~i-e");

        assert_eq!(knowledge.count(b'e'), Some(2));
    }

    #[test]
    fn later_count_overrides_earlier_absence() {
        let mut knowledge = Knowledge::new();
        knowledge.mark_absent(b'e');
        assert!(knowledge.absent().contains(b'e'));

        absorb(&mut knowledge, "+e-e-r-i-e");
        assert_eq!(knowledge.count(b'e'), Some(1));
        assert!(!knowledge.absent().contains(b'e'));
    }

    #[test]
    fn counted_letter_never_returns_to_absent() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "+e-e-r-i-e");
        absorb(&mut knowledge, "-s-l-e-p-t");

        assert!(!knowledge.absent().contains(b'e'));
        assert_eq!(knowledge.count(b'e'), Some(1));
    }

    #[test]
    fn known_letters_union_of_facts() {
        let mut knowledge = Knowledge::new();
        absorb(&mut knowledge, "+t~e-a-c-h");
        assert_eq!(knowledge.known_letters().to_string(), "et");
    }

    #[test]
    fn display_summarizes_facts() {
        let mut knowledge = Knowledge::new();
        assert!(knowledge.is_empty());

        absorb(&mut knowledge, "+t~e-a-c-h");
        assert!(!knowledge.is_empty());
        assert_eq!(knowledge.to_string(), "pinned t.... | not here e@2 | absent ach");
    }
}

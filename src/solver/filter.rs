//! Candidate filtering
//!
//! Applies every accumulated fact to a word pool. The legal and common pools go
//! through the same predicate, so the common pool always stays a subset of what the
//! legal pool would admit.

use super::knowledge::Knowledge;
use crate::core::Word;
use rayon::prelude::*;

impl Knowledge {
    /// True if `word` is consistent with every fact learned so far
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::Word;
    /// use wordle_eliminator::solver::Knowledge;
    ///
    /// let mut knowledge = Knowledge::new();
    /// knowledge.absorb(&"+t-e-a-c-h".parse().unwrap());
    ///
    /// assert!(knowledge.admits(&Word::new("tipsy").unwrap()));
    /// assert!(!knowledge.admits(&Word::new("stink").unwrap()));
    /// ```
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        !word.letters().intersects(self.absent())
            && self.matches_positioned(word)
            && self.matches_vague(word)
            && self.matches_counts(word)
    }

    fn matches_positioned(&self, word: &Word) -> bool {
        self.positioned()
            .iter()
            .all(|fact| word.char_at(fact.position) == fact.letter)
    }

    // A vague fact names a position the letter is NOT in
    fn matches_vague(&self, word: &Word) -> bool {
        self.vague()
            .iter()
            .all(|fact| word.has_letter(fact.letter) && word.char_at(fact.position) != fact.letter)
    }

    fn matches_counts(&self, word: &Word) -> bool {
        self.counts()
            .all(|(letter, count)| word.count_of(letter) == usize::from(count))
    }

    /// Keep the words of `pool` that pass [`Knowledge::admits`], preserving order
    #[must_use]
    pub fn apply(&self, pool: &[Word]) -> Vec<Word> {
        pool.par_iter()
            .filter(|word| self.admits(word))
            .copied()
            .collect()
    }

    /// True if `word` can only surface new letters: no absent letter and no letter
    /// already named by a positioned or vague fact
    #[must_use]
    pub fn is_strong_indicator(&self, word: &Word) -> bool {
        let letters = word.letters();
        !letters.intersects(self.absent()) && !letters.intersects(self.known_letters())
    }

    /// True if `word` avoids absent letters and reuses at least one positioned letter
    /// and at least one vague letter
    #[must_use]
    pub fn is_weak_indicator(&self, word: &Word) -> bool {
        !word.letters().intersects(self.absent())
            && self.positioned().iter().any(|fact| word.has_letter(fact.letter))
            && self.vague().iter().any(|fact| word.has_letter(fact.letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn texts(pool: &[Word]) -> Vec<&str> {
        pool.iter().map(Word::text).collect()
    }

    fn knowing(rounds: &[&str]) -> Knowledge {
        let mut knowledge = Knowledge::new();
        for round in rounds {
            knowledge.absorb(&round.parse().unwrap());
        }
        knowledge
    }

    #[test]
    fn empty_knowledge_admits_everything() {
        let pool = words(&["teach", "sound", "geese"]);
        assert_eq!(Knowledge::new().apply(&pool), pool);
    }

    #[test]
    fn absent_letters_exclude_words() {
        let knowledge = knowing(&["-t-e-a-c-h"]);
        let pool = words(&["sound", "stink", "lorry", "mixed", "pupil"]);

        assert_eq!(texts(&knowledge.apply(&pool)), ["sound", "lorry", "pupil"]);
    }

    #[test]
    fn positioned_fact_requires_exact_position() {
        let knowledge = knowing(&["+t-o-x-i-c"]);
        let pool = words(&["table", "stand", "tuber", "after", "truly"]);

        // "stand" and "after" contain t elsewhere but not at index 0
        assert_eq!(texts(&knowledge.apply(&pool)), ["table", "tuber", "truly"]);
    }

    #[test]
    fn vague_fact_requires_letter_elsewhere() {
        let knowledge = knowing(&["-b-a~s-i-c"]);
        let pool = words(&["moose", "truss", "worst", "blond", "roses"]);

        // "roses" has s at index 2; "blond" has no s (and b is absent anyway)
        assert_eq!(texts(&knowledge.apply(&pool)), ["moose", "truss", "worst"]);
    }

    #[test]
    fn count_fact_requires_exact_multiplicity() {
        // One E confirmed, the other copies absent: exactly one E
        let knowledge = knowing(&["-g-e+e-s-e"]);
        let pool = words(&["cheap", "sheep", "wheat", "theme", "fresh"]);

        assert_eq!(texts(&knowledge.apply(&pool)), ["cheap", "wheat"]);
    }

    #[test]
    fn filter_preserves_order() {
        let knowledge = knowing(&["-q-u-i-z-x"]);
        let pool = words(&["zebra", "teach", "lemon", "maple", "ghost"]);

        assert_eq!(
            texts(&knowledge.apply(&pool)),
            ["teach", "lemon", "maple", "ghost"]
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let knowledge = knowing(&["~t~e-a-c-h", "-s-l~e-p+t"]);
        let pool = words(&["outer", "inert", "egret", "overt", "tenet", "event"]);

        let once = knowledge.apply(&pool);
        let twice = knowledge.apply(&once);
        assert_eq!(texts(&once), ["egret"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn strong_indicator_avoids_known_and_absent_letters() {
        let knowledge = knowing(&["+t~e-a-c-h"]);

        assert!(knowledge.is_strong_indicator(&Word::new("sound").unwrap()));
        assert!(!knowledge.is_strong_indicator(&Word::new("stink").unwrap()));
        assert!(!knowledge.is_strong_indicator(&Word::new("lemon").unwrap()));
        assert!(!knowledge.is_strong_indicator(&Word::new("chirp").unwrap()));
    }

    #[test]
    fn weak_indicator_needs_positioned_and_vague_letters() {
        let knowledge = knowing(&["+t~e-a-c-h"]);

        assert!(knowledge.is_weak_indicator(&Word::new("tenor").unwrap()));
        assert!(!knowledge.is_weak_indicator(&Word::new("tipsy").unwrap()));
        assert!(!knowledge.is_weak_indicator(&Word::new("treat").unwrap()));
    }
}

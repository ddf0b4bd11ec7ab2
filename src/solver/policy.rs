//! Guess selection policies
//!
//! The engine handles the opening word, the final round and the error cases. A policy
//! only decides the middle rounds, given the current pools.

use super::config::GameConfig;
use super::divisiveness;
use super::knowledge::Knowledge;
use crate::core::Word;
use crate::wordlists::Corpus;
use rayon::prelude::*;
use std::cmp::Ordering;

/// What a policy sees when asked for a middle-round guess
pub struct Turn<'a> {
    pub legal: &'a [Word],
    pub common: &'a [Word],
    pub knowledge: &'a Knowledge,
    pub config: &'a GameConfig,
}

impl<'a> Turn<'a> {
    /// Pool the answer is most likely in: common words, or legal words once no common
    /// word survives
    #[must_use]
    pub const fn answer_pool(&self) -> &'a [Word] {
        if self.common.is_empty() {
            self.legal
        } else {
            self.common
        }
    }

    fn is_shortlist(&self, pool: &[Word]) -> bool {
        (1..=self.config.shortlist).contains(&pool.len())
    }
}

/// A strategy for choosing middle-round guesses
pub trait GuessPolicy {
    /// Choose the guess for this turn
    ///
    /// Called only when at least one pool is non-empty. Returns `None` if the policy
    /// cannot produce a word.
    fn choose(&self, turn: &Turn<'_>) -> Option<Word>;

    /// Called after every absorbed round with the updated knowledge
    fn observe(&mut self, _knowledge: &Knowledge) {}
}

/// Enum wrapper for all policy types
///
/// Allows runtime selection of a policy while maintaining static dispatch.
pub enum PolicyType {
    /// Rank candidates by letter variety, then divisiveness (default)
    Ranking(RankingPolicy),
    /// Play words expected to be wrong to surface new letters
    Indicator(IndicatorPolicy),
}

impl GuessPolicy for PolicyType {
    fn choose(&self, turn: &Turn<'_>) -> Option<Word> {
        match self {
            Self::Ranking(p) => p.choose(turn),
            Self::Indicator(p) => p.choose(turn),
        }
    }

    fn observe(&mut self, knowledge: &Knowledge) {
        match self {
            Self::Ranking(p) => p.observe(knowledge),
            Self::Indicator(p) => p.observe(knowledge),
        }
    }
}

impl PolicyType {
    /// Names accepted by [`PolicyType::from_name`]
    pub const NAMES: [&'static str; 2] = ["ranking", "indicator"];

    /// Create a policy from its name
    ///
    /// Supported names: "ranking", "indicator".
    /// Defaults to ranking if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, corpus: &Corpus) -> Self {
        match name {
            "indicator" => Self::Indicator(IndicatorPolicy::new(corpus)),
            _ => Self::Ranking(RankingPolicy),
        }
    }
}

/// A pool word with its ranking keys
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked {
    pub word: Word,
    pub distinct_letters: usize,
    pub divisiveness: f64,
}

impl Ranked {
    /// Higher distinct-letter count first, then higher divisiveness
    fn cmp_desc(&self, other: &Self) -> Ordering {
        other
            .distinct_letters
            .cmp(&self.distinct_letters)
            .then_with(|| other.divisiveness.total_cmp(&self.divisiveness))
    }
}

/// Rank a whole pool, best first
///
/// Divisiveness is scored over the pool itself. Ties keep pool order.
#[must_use]
pub fn rank(pool: &[Word]) -> Vec<Ranked> {
    let scores = divisiveness::score(pool);
    let mut ranked: Vec<Ranked> = pool
        .par_iter()
        .map(|word| Ranked {
            word: *word,
            distinct_letters: word.distinct_letters(),
            divisiveness: scores.word_score(word),
        })
        .collect();
    ranked.par_sort_by(Ranked::cmp_desc);
    ranked
}

/// Best word of a pool under [`rank`]'s ordering, or `None` for an empty pool
#[must_use]
pub fn best(pool: &[Word]) -> Option<Word> {
    let scores = divisiveness::score(pool);
    pool.par_iter()
        .enumerate()
        .map(|(index, word)| {
            let ranked = Ranked {
                word: *word,
                distinct_letters: word.distinct_letters(),
                divisiveness: scores.word_score(word),
            };
            (index, ranked)
        })
        .min_by(|(i, a), (j, b)| a.cmp_desc(b).then(i.cmp(j)))
        .map(|(_, ranked)| ranked.word)
}

/// Rank-based policy
///
/// Guesses straight from a pool of one or two words; otherwise ranks the likely
/// answers by letter variety and divisiveness.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingPolicy;

impl GuessPolicy for RankingPolicy {
    fn choose(&self, turn: &Turn<'_>) -> Option<Word> {
        if turn.is_shortlist(turn.common) {
            return turn.common.first().copied();
        }
        if turn.is_shortlist(turn.legal) {
            return turn.legal.first().copied();
        }
        best(turn.answer_pool())
    }
}

/// Indicator-word policy
///
/// Prefers legal words that cannot be the answer but test only unseen letters
/// (strong indicators), then words that recombine known letters (weak indicators).
/// Guesses from the answer pool only when it is down to one word or no indicator is
/// left.
#[derive(Debug, Clone)]
pub struct IndicatorPolicy {
    legal: Vec<Word>,
    strong: Vec<Word>,
    weak: Vec<Word>,
}

impl IndicatorPolicy {
    #[must_use]
    pub fn new(corpus: &Corpus) -> Self {
        Self {
            legal: corpus.legal().to_vec(),
            strong: corpus.legal().to_vec(),
            weak: Vec::new(),
        }
    }

    /// Current strong indicators, in corpus order
    #[must_use]
    pub fn strong(&self) -> &[Word] {
        &self.strong
    }

    /// Current weak indicators, in corpus order
    #[must_use]
    pub fn weak(&self) -> &[Word] {
        &self.weak
    }
}

impl GuessPolicy for IndicatorPolicy {
    fn choose(&self, turn: &Turn<'_>) -> Option<Word> {
        let answers = turn.answer_pool();
        if answers.len() == 1 {
            return answers.first().copied();
        }
        self.strong
            .first()
            .or_else(|| self.weak.first())
            .or_else(|| answers.first())
            .copied()
    }

    fn observe(&mut self, knowledge: &Knowledge) {
        // Strong indicators only ever shrink; weak ones depend on which letters are known
        self.strong.retain(|word| knowledge.is_strong_indicator(word));
        self.weak = self
            .legal
            .par_iter()
            .filter(|word| knowledge.is_weak_indicator(word))
            .copied()
            .collect();
    }
}

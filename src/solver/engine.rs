//! Main solver interface

use super::config::GameConfig;
use super::error::SolverError;
use super::knowledge::Knowledge;
use super::policy::{GuessPolicy, Turn};
use crate::core::{Feedback, Word};
use crate::wordlists::Corpus;

/// One game of candidate elimination
///
/// Owns the shrinking legal and common pools and the knowledge gathered so far.
/// Start a new game by constructing a new solver.
pub struct Solver<P: GuessPolicy> {
    policy: P,
    config: GameConfig,
    knowledge: Knowledge,
    legal: Vec<Word>,
    common: Vec<Word>,
    round: u8,
}

impl<P: GuessPolicy> Solver<P> {
    /// Create a solver with the default configuration
    #[must_use]
    pub fn new(policy: P, corpus: &Corpus) -> Self {
        Self::with_config(policy, corpus, GameConfig::default())
    }

    #[must_use]
    pub fn with_config(policy: P, corpus: &Corpus, config: GameConfig) -> Self {
        Self {
            policy,
            config,
            knowledge: Knowledge::new(),
            legal: corpus.legal().to_vec(),
            common: corpus.common().to_vec(),
            round: 0,
        }
    }

    /// Rebuild a solver by absorbing a feedback history into a fresh game
    ///
    /// The round counter reflects one guess per feedback entry, capped at the
    /// configured limit.
    #[must_use]
    pub fn replay(policy: P, corpus: &Corpus, config: GameConfig, history: &[Feedback]) -> Self {
        let mut solver = Self::with_config(policy, corpus, config);
        for feedback in history {
            solver.absorb(feedback);
        }
        let played = u8::try_from(history.len()).unwrap_or(u8::MAX);
        solver.round = played.min(config.max_rounds);
        solver
    }

    /// Choose the guess for the next round and advance the round counter
    ///
    /// # Errors
    /// - [`SolverError::RoundLimitExceeded`] once every round has been played
    /// - [`SolverError::NoCandidates`] when no word is consistent with the feedback
    pub fn next_guess(&mut self) -> Result<Word, SolverError> {
        if self.round >= self.config.max_rounds {
            return Err(SolverError::RoundLimitExceeded {
                max_rounds: self.config.max_rounds,
            });
        }
        let round = self.round + 1;

        let guess = if round == 1 {
            self.config.opening_word
        } else if self.legal.is_empty() && self.common.is_empty() {
            return Err(SolverError::NoCandidates);
        } else if round == self.config.max_rounds {
            // Last chance: play the likeliest survivor
            self.common
                .first()
                .or_else(|| self.legal.first())
                .copied()
                .ok_or(SolverError::NoCandidates)?
        } else {
            let turn = Turn {
                legal: &self.legal,
                common: &self.common,
                knowledge: &self.knowledge,
                config: &self.config,
            };
            self.policy
                .choose(&turn)
                .ok_or(SolverError::NoCandidates)?
        };

        self.round = round;
        Ok(guess)
    }

    /// Fold one round of feedback into the knowledge and shrink both pools
    pub fn absorb(&mut self, feedback: &Feedback) {
        self.knowledge.absorb(feedback);
        self.legal = self.knowledge.apply(&self.legal);
        self.common = self.knowledge.apply(&self.common);
        self.policy.observe(&self.knowledge);
    }

    /// Parse feedback in compact form (`"+t-e~a-c-h"`) and absorb it
    ///
    /// # Errors
    /// Returns [`SolverError::Feedback`] if the text is malformed; nothing is absorbed.
    pub fn absorb_str(&mut self, feedback: &str) -> Result<(), SolverError> {
        let feedback: Feedback = feedback.parse()?;
        self.absorb(&feedback);
        Ok(())
    }

    /// Rounds played so far
    #[must_use]
    pub const fn round(&self) -> u8 {
        self.round
    }

    #[must_use]
    pub fn remaining_legal(&self) -> &[Word] {
        &self.legal
    }

    #[must_use]
    pub fn remaining_common(&self) -> &[Word] {
        &self.common
    }

    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackError;
    use crate::solver::RankingPolicy;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn setup_corpus() -> Corpus {
        let legal = words(&[
            "sound", "lemon", "crane", "tiger", "brawl", "geese", "eerie", "abbey",
        ]);
        let common = words(&["geese", "sound", "lemon", "eerie", "abbey"]);
        Corpus::new(legal, common)
    }

    #[test]
    fn first_guess_is_opener() {
        let corpus = setup_corpus();
        let mut solver = Solver::new(RankingPolicy, &corpus);

        assert_eq!(solver.next_guess().unwrap().text(), "teach");
        assert_eq!(solver.round(), 1);
    }

    #[test]
    fn opener_is_configurable() {
        let corpus = setup_corpus();
        let config = GameConfig::with_opener("crane").unwrap();
        let mut solver = Solver::with_config(RankingPolicy, &corpus, config);

        assert_eq!(solver.next_guess().unwrap().text(), "crane");
    }

    #[test]
    fn opener_ignores_empty_pools() {
        let corpus = Corpus::new(Vec::new(), Vec::new());
        let mut solver = Solver::new(RankingPolicy, &corpus);

        assert_eq!(solver.next_guess().unwrap().text(), "teach");
    }

    #[test]
    fn absorb_shrinks_pools() {
        let corpus = setup_corpus();
        let mut solver = Solver::new(RankingPolicy, &corpus);
        solver.next_guess().unwrap();

        // Answer "sound" shares no letter with "teach"
        solver.absorb_str("-t-e-a-c-h").unwrap();

        assert_eq!(solver.remaining_legal(), words(&["sound"]).as_slice());
        assert_eq!(solver.remaining_common(), words(&["sound"]).as_slice());
        assert_eq!(solver.next_guess().unwrap().text(), "sound");
    }

    #[test]
    fn malformed_feedback_is_not_absorbed() {
        let corpus = setup_corpus();
        let mut solver = Solver::new(RankingPolicy, &corpus);

        let err = solver.absorb_str("-t-e-a-c").unwrap_err();
        assert_eq!(err, SolverError::Feedback(FeedbackError::WrongLength(4)));
        assert!(solver.knowledge().is_empty());
        assert_eq!(solver.remaining_legal().len(), corpus.legal().len());
    }

    #[test]
    fn no_candidates_when_pools_empty() {
        let corpus = setup_corpus();
        let mut solver = Solver::new(RankingPolicy, &corpus);
        solver.next_guess().unwrap();

        // No corpus word is "zzzzz"
        solver.absorb_str("+z+z+z+z+z").unwrap();

        assert_eq!(solver.next_guess(), Err(SolverError::NoCandidates));
        assert_eq!(solver.round(), 1);
    }

    #[test]
    fn final_round_plays_first_common_word() {
        let corpus = setup_corpus();
        let config = GameConfig {
            max_rounds: 2,
            ..GameConfig::default()
        };
        let mut last_round = Solver::with_config(RankingPolicy, &corpus, config);
        let mut mid_game = Solver::new(RankingPolicy, &corpus);
        for solver in [&mut last_round, &mut mid_game] {
            solver.next_guess().unwrap();
            solver.absorb_str("-t+e-a-c-h").unwrap();
            assert_eq!(
                solver.remaining_common(),
                words(&["geese", "lemon", "eerie"]).as_slice()
            );
        }

        // Ranking would pick the more varied "lemon"; the final round skips it
        assert_eq!(last_round.next_guess().unwrap().text(), "geese");
        assert_eq!(mid_game.next_guess().unwrap().text(), "lemon");
    }

    #[test]
    fn round_limit_is_enforced() {
        let corpus = setup_corpus();
        let config = GameConfig {
            max_rounds: 1,
            ..GameConfig::default()
        };
        let mut solver = Solver::with_config(RankingPolicy, &corpus, config);
        solver.next_guess().unwrap();

        assert_eq!(
            solver.next_guess(),
            Err(SolverError::RoundLimitExceeded { max_rounds: 1 })
        );
        assert_eq!(solver.round(), 1);
    }

    #[test]
    fn replay_matches_incremental_play() {
        let corpus = setup_corpus();
        let history: Vec<Feedback> = ["-t+e-a-c-h", "-l+e-m-o-n"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let mut played = Solver::new(RankingPolicy, &corpus);
        for feedback in &history {
            played.next_guess().unwrap();
            played.absorb(feedback);
        }

        let replayed = Solver::replay(RankingPolicy, &corpus, GameConfig::default(), &history);
        assert_eq!(replayed.round(), played.round());
        assert_eq!(replayed.remaining_legal(), played.remaining_legal());
        assert_eq!(replayed.remaining_common(), played.remaining_common());
        assert_eq!(replayed.knowledge(), played.knowledge());
    }
}

//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod rank;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, pick_targets, run_benchmark};
pub use rank::rank_file;
pub use simple::run_simple;
pub use solve::{GuessStep, SolveResult, play_game, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};

use crate::solver::{GameConfig, PolicyType, Solver};
use crate::wordlists::Corpus;

/// Everything needed to start a game: the word lists, the policy and the settings
///
/// Each game gets its own [`Solver`]; a setup can start any number of them.
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub corpus: Corpus,
    pub policy: String,
    pub config: GameConfig,
}

impl GameSetup {
    #[must_use]
    pub fn new(corpus: Corpus, policy: &str, config: GameConfig) -> Self {
        Self {
            corpus,
            policy: policy.to_string(),
            config,
        }
    }

    /// A fresh solver for a new game
    #[must_use]
    pub fn solver(&self) -> Solver<PolicyType> {
        Solver::with_config(self.policy_type(), &self.corpus, self.config)
    }

    #[must_use]
    pub fn policy_type(&self) -> PolicyType {
        PolicyType::from_name(&self.policy, &self.corpus)
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new(Corpus::embedded(), "ranking", GameConfig::default())
    }
}

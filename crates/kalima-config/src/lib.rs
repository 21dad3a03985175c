use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::solver::SolverConfig;

pub mod dictionary;
pub mod solver;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub solver: SolverConfig,
    pub dictionary: DictionaryConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            solver: SolverConfig::new(),
            dictionary: DictionaryConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

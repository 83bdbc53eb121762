use super::IndexRandom;

/// Scripted draw sequence for deterministic tests.
///
/// After the script runs out it falls back to a rolling counter, so
/// rejection-sampling callers still terminate.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl Into<Vec<usize>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }
}

impl IndexRandom for ScriptedRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        let draw = self.draws.get(self.cursor).copied().unwrap_or(self.cursor);
        self.cursor += 1;
        draw % bound.max(1)
    }
}

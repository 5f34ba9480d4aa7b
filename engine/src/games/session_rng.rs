use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for the computer player.
pub trait MoveRng {
    /// Uniform sample in `[0, 1)`.
    fn random_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn random_index(&mut self, len: usize) -> usize;
}

impl<R: MoveRng + ?Sized> MoveRng for &mut R {
    fn random_unit(&mut self) -> f64 {
        (**self).random_unit()
    }

    fn random_index(&mut self, len: usize) -> usize {
        (**self).random_index(len)
    }
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MoveRng for SessionRng {
    fn random_unit(&mut self) -> f64 {
        self.rng.random()
    }

    fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays canned samples. Once a queue runs dry it keeps answering
/// `0.99` and `0`, which never triggers a random move.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    units: std::collections::VecDeque<f64>,
    indices: std::collections::VecDeque<usize>,
    pub units_drawn: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new(units: &[f64], indices: &[usize]) -> Self {
        Self {
            units: units.iter().copied().collect(),
            indices: indices.iter().copied().collect(),
            units_drawn: 0,
        }
    }
}

#[cfg(test)]
impl MoveRng for ScriptedRng {
    fn random_unit(&mut self) -> f64 {
        self.units_drawn += 1;
        self.units.pop_front().unwrap_or(0.99)
    }

    fn random_index(&mut self, len: usize) -> usize {
        let index = self.indices.pop_front().unwrap_or(0);
        assert!(index < len, "scripted index {} out of 0..{}", index, len);
        index
    }
}

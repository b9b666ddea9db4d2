//! Source of bucket indices for reply selection.
//!
//! Production code wraps a `rand` generator in [`RngPicker`]; tests script the
//! sequence with [`ScriptedPicker`] to assert exact selections.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses which entry of a reply bucket to return.
pub trait Picker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picks from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<StdRng> {
    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Picker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted. Exists for tests.
///
/// Picks wrap into `0..len`; an empty script or `len == 0` yields 0.
#[derive(Debug, Clone)]
pub struct ScriptedPicker {
    indices: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
            cursor: 0,
        }
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let Some(&next) = self.indices.get(self.cursor % self.indices.len().max(1)) else {
            return 0;
        };
        self.cursor += 1;
        next % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_pickers_repeat_the_same_sequence() {
        let mut a = RngPicker::seeded(7);
        let mut b = RngPicker::seeded(7);
        let first: Vec<usize> = (0..16).map(|_| a.pick(3)).collect();
        let second: Vec<usize> = (0..16).map(|_| b.pick(3)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&i| i < 3));
    }

    #[test]
    fn scripted_picker_cycles_and_wraps() {
        let mut picker = ScriptedPicker::new([0, 4]);
        assert_eq!(picker.pick(3), 0);
        assert_eq!(picker.pick(3), 1);
        assert_eq!(picker.pick(3), 0);

        let mut empty = ScriptedPicker::new(Vec::<usize>::new());
        assert_eq!(empty.pick(3), 0);

        let mut scripted = ScriptedPicker::new([2]);
        assert_eq!(scripted.pick(0), 0);
        assert_eq!(scripted.pick(3), 2);
    }
}

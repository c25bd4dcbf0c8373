use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::foundation::core::{ObjectId, Rgb8};

/// Per-run object colors, looked up by `id mod len`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ColorTable {
    colors: Vec<Rgb8>,
}

impl ColorTable {
    pub fn new(colors: Vec<Rgb8>) -> Self {
        Self { colors }
    }

    /// `count` colors with each channel drawn uniformly from `0..=255`. Not guaranteed distinct.
    pub fn random<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let colors = (0..count)
            .map(|_| {
                [
                    rng.random_range(0..=255),
                    rng.random_range(0..=255),
                    rng.random_range(0..=255),
                ]
            })
            .collect();
        Self { colors }
    }

    /// Seeded table when `seed` is set, otherwise drawn from the thread RNG.
    pub fn generate(count: usize, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::random(count, &mut StdRng::seed_from_u64(seed)),
            None => Self::random(count, &mut rand::rng()),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Color assigned to `id`; `None` only for an empty table.
    pub fn color_for(&self, id: ObjectId) -> Option<Rgb8> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[id.0 % self.colors.len()])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/color.rs"]
mod tests;

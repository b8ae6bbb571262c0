use nanorand::{Rng, WyRand};

/// Exactly representable in `f32`.
const UNIT_STEPS: u32 = 1 << 24;

pub struct Random {
    generator: WyRand,
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl Random {
    pub fn new() -> Self {
        Self {
            generator: WyRand::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: WyRand::new_seed(seed),
        }
    }

    /// Uniform value in `[0, 1]`, both ends reachable.
    pub fn unit(&mut self) -> f32 {
        self.generator.generate_range(0..=UNIT_STEPS) as f32 / UNIT_STEPS as f32
    }

    /// Uniform value in `[min, max]`.
    pub fn between(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        (min + (max - min) * self.unit()).min(max)
    }

    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.generator.generate_range(0..len)
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.index(items.len()))
        }
    }
}

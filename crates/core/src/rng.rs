//! Random sources for the spawner.
//!
//! [`SimpleRng`] is a seedable 64-bit LCG so a game can be replayed from its
//! seed. [`SequenceRng`] replays a fixed list of indices for tests that need an
//! exact piece order.

/// Source of catalog indices.
pub trait RandomSource {
    /// Return a value in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Linear congruential generator (Knuth's MMIX constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// High 32 bits of the next state; the low bits of an LCG cycle quickly.
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        // Multiply-shift keeps the result in range without the modulo bias of `%`.
        ((u64::from(self.next_u32()) * bound as u64) >> 32) as usize
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Cycles through a scripted list of indices.
///
/// Each value is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    indices: Vec<usize>,
    pos: usize,
}

impl SequenceRng {
    /// An empty script behaves like `[0]`.
    pub fn new(indices: Vec<usize>) -> Self {
        let indices = if indices.is_empty() { vec![0] } else { indices };
        Self { indices, pos: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.indices[self.pos % self.indices.len()];
        self.pos += 1;
        value % bound
    }
}

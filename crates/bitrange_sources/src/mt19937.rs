//! 64-bit Mersenne Twister (MT19937-64).
//!
//! Output matches the reference `mt19937-64.c` of Matsumoto and Nishimura
//! seeded through `init_genrand64`.

use bitrange_core::source::{BitSource, INT63_MASK};

const NN: usize = 312;
const MM: usize = 156;
const MATRIX_A: u64 = 0xB502_6F5A_A966_19E9;
/// Most significant 33 bits.
const UPPER_MASK: u64 = 0xFFFF_FFFF_8000_0000;
/// Least significant 31 bits.
const LOWER_MASK: u64 = 0x7FFF_FFFF;

/// MT19937-64 engine.
///
/// # Examples
///
/// ```rust
/// use bitrange_core::BitSource;
/// use bitrange_sources::Mt19937_64;
///
/// let mut mt = Mt19937_64::new(5489);
/// assert_eq!(mt.uint64(), 14514284786278117030);
/// ```
#[derive(Clone)]
pub struct Mt19937_64 {
    state: Box<[u64; NN]>,
    index: usize,
}

impl Mt19937_64 {
    /// Seed used by the reference implementation when none is given.
    pub const DEFAULT_SEED: i64 = 5489;

    /// Creates an engine seeded with `seed`.
    pub fn new(seed: i64) -> Self {
        let mut mt = Self {
            state: Box::new([0; NN]),
            index: NN,
        };
        mt.reseed(seed as u64);
        mt
    }

    fn reseed(&mut self, seed: u64) {
        self.state[0] = seed;
        for i in 1..NN {
            let prev = self.state[i - 1];
            self.state[i] = 6_364_136_223_846_793_005_u64
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        self.index = NN;
    }

    /// Regenerates the whole state block.
    fn twist(&mut self) {
        for i in 0..NN {
            let x = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % NN] & LOWER_MASK);
            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= MATRIX_A;
            }
            self.state[i] = self.state[(i + MM) % NN] ^ x_a;
        }
        self.index = 0;
    }
}

impl Default for Mt19937_64 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl std::fmt::Debug for Mt19937_64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937_64")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl BitSource for Mt19937_64 {
    #[inline]
    fn int63(&mut self) -> i64 {
        (self.uint64() & INT63_MASK) as i64
    }

    fn uint64(&mut self) -> u64 {
        if self.index >= NN {
            self.twist();
        }
        let mut x = self.state[self.index];
        self.index += 1;

        x ^= (x >> 29) & 0x5555_5555_5555_5555;
        x ^= (x << 17) & 0x71D6_7FFF_EDA6_0000;
        x ^= (x << 37) & 0xFFF7_EEE0_0000_0000;
        x ^= x >> 43;
        x
    }

    fn seed(&mut self, seed: i64) {
        self.reseed(seed as u64);
    }
}

// 32-bit Mersenne Twister (MT19937)
// The permutation shuffle has to be reproducible bit-for-bit across platforms
// and runs, so the generator is pinned to the canonical MT19937 recurrence
// rather than a platform RNG.

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000; // most significant bit
const LOWER_MASK: u32 = 0x7FFF_FFFF; // lower 31 bits

// Each instance is fully self-contained: constructed from a single u32 seed,
// never shared between independent table builds.
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    // Knuth multiplier initialization; any seed is valid, including 0
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            state[i] = 1_812_433_253u32
                .wrapping_mul(state[i - 1] ^ (state[i - 1] >> 30))
                .wrapping_add(i as u32);
        }
        // index == N forces a twist before the first draw
        Self { state, index: N }
    }

    // Next tempered 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        // Tempering transform
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^ (y >> 18)
    }

    // A uniform double in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    // Regenerate all 624 state words
    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = y >> 1;
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = self.state[(i + M) % N] ^ next;
        }
        self.index = 0;
    }
}

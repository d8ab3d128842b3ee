use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fmt;

/// Byte-generation rule applied on every overwrite pass of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FillPattern {
    /// Every byte is zero.
    Zeros,
    /// Every byte comes from a pseudo-random stream.
    Random,
}

impl fmt::Display for FillPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillPattern::Zeros => write!(f, "zeros"),
            FillPattern::Random => write!(f, "random"),
        }
    }
}

/// Owned fill-data generator handed to the overwrite engine.
///
/// The generator is seeded once, when the source is built, and the zeros
/// pattern never touches it. The random stream is obfuscation against
/// casual recovery, not a cryptographic guarantee.
pub struct PatternSource {
    pattern: FillPattern,
    rng: Option<StdRng>,
}

impl PatternSource {
    /// A source seeded from OS entropy.
    pub fn new(pattern: FillPattern) -> Self {
        let rng = match pattern {
            FillPattern::Zeros => None,
            FillPattern::Random => Some(StdRng::from_os_rng()),
        };
        Self { pattern, rng }
    }

    /// A deterministic source for reproducible fixtures.
    pub fn seeded(pattern: FillPattern, seed: u64) -> Self {
        let rng = match pattern {
            FillPattern::Zeros => None,
            FillPattern::Random => Some(StdRng::seed_from_u64(seed)),
        };
        Self { pattern, rng }
    }

    pub fn pattern(&self) -> FillPattern {
        self.pattern
    }

    /// Overwrite `buf` with fresh fill data. Random fills advance the
    /// stream, so consecutive calls produce different bytes.
    pub fn fill(&mut self, buf: &mut [u8]) {
        match self.pattern {
            FillPattern::Zeros => buf.fill(0),
            FillPattern::Random => {
                let rng = self.rng.get_or_insert_with(StdRng::from_os_rng);
                rng.fill_bytes(buf);
            }
        }
    }
}

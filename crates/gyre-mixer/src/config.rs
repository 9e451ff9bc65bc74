//! Mix configuration parameters.

use gyre_core::MixError;

/// Scale applied to every value by the full decryption preset.
pub const DECRYPTION_KEY: i64 = 811_589_153;

/// Number of rounds run by the full decryption preset.
pub const DECRYPTION_ROUNDS: u32 = 10;

/// Configuration for a mixing run.
///
/// Plain data: build one with [`MixConfig::new`], a preset, or struct
/// literal syntax, then [`validate`](MixConfig::validate) it (the mixer
/// constructors do this for you).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MixConfig {
    /// Multiplier applied to every input value before mixing.
    ///
    /// Default: 1. Must be non-zero.
    pub scale: i64,

    /// Number of full mixing rounds.
    ///
    /// Default: 1. Zero is allowed and leaves the input order intact.
    pub rounds: u32,
}

impl MixConfig {
    /// Default scale: values are used as given.
    pub const DEFAULT_SCALE: i64 = 1;

    /// Default round count.
    pub const DEFAULT_ROUNDS: u32 = 1;

    /// Create a config with an explicit scale and round count.
    pub fn new(scale: i64, rounds: u32) -> Self {
        Self { scale, rounds }
    }

    /// The full decryption preset: scale by [`DECRYPTION_KEY`] and run
    /// [`DECRYPTION_ROUNDS`] rounds.
    pub fn decryption() -> Self {
        Self::new(DECRYPTION_KEY, DECRYPTION_ROUNDS)
    }

    /// Check that the configuration can produce a meaningful mix.
    ///
    /// A zero scale maps every element onto the same value, which makes
    /// every anchor ambiguous.
    pub fn validate(&self) -> Result<(), MixError> {
        if self.scale == 0 {
            return Err(MixError::InvalidConfig {
                reason: "scale must be non-zero".into(),
            });
        }
        Ok(())
    }
}

impl Default for MixConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCALE, Self::DEFAULT_ROUNDS)
    }
}

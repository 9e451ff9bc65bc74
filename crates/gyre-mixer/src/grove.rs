//! Grove coordinates: the standard read-out after mixing.

use gyre_core::MixError;
use log::debug;

use crate::config::MixConfig;
use crate::mixer::Mixer;

/// Anchor value used for grove coordinates.
pub const GROVE_ANCHOR: i64 = 0;

/// Offsets from the anchor whose values make up the grove coordinates.
pub const GROVE_OFFSETS: [i64; 3] = [1000, 2000, 3000];

/// Mix `sequence` under `config` and return the sum of its grove
/// coordinates.
///
/// ```
/// use gyre_mixer::{decrypt, MixConfig};
///
/// let input = [1, 2, -3, 3, -2, 0, 4];
/// assert_eq!(decrypt(&input, &MixConfig::default()), Ok(3));
/// assert_eq!(decrypt(&input, &MixConfig::decryption()), Ok(1_623_178_306));
/// ```
///
/// # Errors
///
/// Any construction error from [`Mixer::from_config`], or an anchor error
/// if `sequence` does not contain exactly one `0`.
pub fn decrypt(sequence: &[i64], config: &MixConfig) -> Result<i64, MixError> {
    let mut mixer = Mixer::from_config(sequence, config)?;
    mixer.mix(config.rounds);
    let sum = mixer.grove_sum(GROVE_ANCHOR, &GROVE_OFFSETS)?;
    debug!(
        "decrypt: {} elements, scale {}, {} rounds -> {sum}",
        sequence.len(),
        config.scale,
        config.rounds
    );
    Ok(sum)
}

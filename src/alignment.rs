use log::debug;
use serde::{Deserialize, Serialize};

/// Positional word pairing between two token sequences
///
/// The Japanese segmenter and the Kannada whitespace split are produced by
/// unrelated algorithms, so there is no real correspondence signal between
/// them. Pairing is purely by index, truncated to the shorter sequence.
/// Excess tokens in the longer sequence are dropped.
/// A (source token, target token) pair formed by shared index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedPair {
    /// Token from the source-language segmentation
    pub source: String,

    /// Token from the target-language whitespace split
    pub target: String,
}

/// Pair two token sequences by index.
///
/// Output length is `min(source.len(), target.len())`; an empty input on
/// either side yields an empty pairing, not an error. No reordering and no
/// similarity matching is attempted.
pub fn pair_tokens(source: &[String], target: &[String]) -> Vec<AlignedPair> {
    let limit = source.len().min(target.len());

    let dropped = source.len().max(target.len()) - limit;
    if dropped > 0 {
        debug!(
            "Positional pairing dropped {} excess token(s) ({} source, {} target)",
            dropped,
            source.len(),
            target.len()
        );
    }

    source
        .iter()
        .zip(target.iter())
        .map(|(s, t)| AlignedPair {
            source: s.clone(),
            target: t.clone(),
        })
        .collect()
}

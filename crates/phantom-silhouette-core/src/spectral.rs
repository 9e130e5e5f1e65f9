//! Spectral envelope reshaping.
//!
//! Two per-bin weight curves strip the cues that identify a speaker: a
//! low-frequency suppression curve removes formant energy below ~1.35 kHz,
//! and a high-frequency emphasis curve lifts breathiness up to 10 kHz.
//! Both weights depend only on the sample rate and the bin count, so they
//! are computed once per matrix and broadcast across every frame row.

use std::f64::consts::E;

use crate::error::{PhantomError, PhantomResult};

/// Smallest magnitude kept in a reshaped envelope. Bins that multiply out to
/// exactly zero are raised to this floor so log-domain resynthesis stays
/// finite.
pub const ENVELOPE_FLOOR: f64 = 1e-8;

/// Frequency in Hz represented by bin `index` (0-based) out of `bins` total.
pub fn bin_frequency(index: usize, bins: usize, sample_rate: u32) -> f64 {
    (index + 1) as f64 * (sample_rate as f64 / 2.0) / bins as f64
}

/// Low-frequency suppression weight.
///
/// Zero at or below 550 Hz, one above 1350 Hz, with an `x^e` ramp between
/// the two thresholds.
pub fn low_suppression_weight(freq: f64) -> f64 {
    if freq > 1350.0 {
        1.0
    } else if freq > 550.0 {
        ((freq - 550.0) / (1350.0 - 550.0)).abs().powf(E)
    } else {
        0.0
    }
}

/// High-frequency emphasis weight.
///
/// One below 1 kHz, rising linearly to two at 10 kHz and above.
pub fn high_emphasis_weight(freq: f64) -> f64 {
    if freq < 1000.0 {
        1.0
    } else if freq < 10000.0 {
        (freq - 1000.0) / (10000.0 - 1000.0) + 1.0
    } else {
        2.0
    }
}

/// Per-bin suppression weights for a `bins`-column envelope.
pub fn suppression_weights(bins: usize, sample_rate: u32) -> Vec<f64> {
    (0..bins)
        .map(|i| low_suppression_weight(bin_frequency(i, bins, sample_rate)))
        .collect()
}

/// Per-bin emphasis weights for a `bins`-column envelope.
pub fn emphasis_weights(bins: usize, sample_rate: u32) -> Vec<f64> {
    (0..bins)
        .map(|i| high_emphasis_weight(bin_frequency(i, bins, sample_rate)))
        .collect()
}

/// Applies suppression and emphasis weights to a spectral envelope.
///
/// Returns a new matrix; the input is never mutated. Any output cell that is
/// exactly 0.0 is replaced with [`ENVELOPE_FLOOR`]. Weights multiply, so
/// calling this twice squares them - the engine applies it exactly once.
///
/// # Errors
/// [`PhantomError::InvalidArgument`] if the envelope has zero frequency bins
/// (the bin-to-frequency mapping is undefined) or `sample_rate` is zero.
pub fn reshape(envelope: &[Vec<f64>], sample_rate: u32) -> PhantomResult<Vec<Vec<f64>>> {
    if sample_rate == 0 {
        return Err(PhantomError::invalid_arg("sample_rate", "must be positive"));
    }
    let bins = envelope.first().map_or(0, |row| row.len());
    if !envelope.is_empty() && bins == 0 {
        return Err(PhantomError::invalid_arg(
            "envelope",
            "has zero frequency bins",
        ));
    }

    let suppression = suppression_weights(bins, sample_rate);
    let emphasis = emphasis_weights(bins, sample_rate);

    Ok(envelope
        .iter()
        .map(|row| {
            row.iter()
                .zip(suppression.iter().zip(&emphasis))
                .map(|(&value, (&lo, &hi))| {
                    let shaped = value * lo * hi;
                    if shaped == 0.0 {
                        ENVELOPE_FLOOR
                    } else {
                        shaped
                    }
                })
                .collect()
        })
        .collect())
}

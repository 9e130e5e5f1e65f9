//! Phantom Silhouette transformation engine.

use crate::error::PhantomResult;
use crate::excitation::{ExcitationGenerator, ExcitationMode, FilterMemory};
use crate::spectral;

/// Voice anonymization engine.
///
/// Owns the mode-selected [`ExcitationGenerator`]; that generator (its seed
/// stream and, in pink mode, its filter registers) is the engine's only
/// state. Concurrent logical streams each construct their own engine.
#[derive(Debug, Clone)]
pub struct PhantomSilhouette {
    generator: ExcitationGenerator,
}

impl PhantomSilhouette {
    /// Creates an engine with the given excitation mode and seed.
    pub fn new(mode: ExcitationMode, seed: u32) -> Self {
        Self {
            generator: ExcitationGenerator::new(mode, seed),
        }
    }

    /// Sets the pink-filter memory policy.
    pub fn with_filter_memory(mut self, memory: FilterMemory) -> Self {
        self.generator = self.generator.with_filter_memory(memory);
        self
    }

    /// Returns the configured excitation mode.
    pub fn mode(&self) -> ExcitationMode {
        self.generator.mode()
    }

    /// Replaces the excitation and reshapes the spectral envelope.
    ///
    /// Only the length of `f0` matters; the pitch values themselves are
    /// discarded. The aperiodicity map never passes through the engine - the
    /// caller pairs it, unchanged, with the returned parameters when
    /// invoking resynthesis.
    ///
    /// # Arguments
    /// * `f0` - Source f0 contour (one value per analysis frame)
    /// * `envelope` - Source spectral envelope, rows aligned 1:1 with `f0`
    /// * `sample_rate` - Audio sample rate in Hz
    ///
    /// # Returns
    /// The replacement excitation and the reshaped envelope.
    pub fn transform(
        &mut self,
        f0: &[f64],
        envelope: &[Vec<f64>],
        sample_rate: u32,
    ) -> PhantomResult<(Vec<f64>, Vec<Vec<f64>>)> {
        let excitation = self.generator.generate(f0.len(), sample_rate)?;
        let reshaped = spectral::reshape(envelope, sample_rate)?;
        Ok((excitation, reshaped))
    }
}

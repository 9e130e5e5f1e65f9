//! Vocoder collaborator contract.
//!
//! Analysis and resynthesis are external to this crate: the engine only
//! consumes and produces the parametric representation. Implementations
//! wrap a concrete vocoder (the CLI wires in WORLD); tests use stubs.

/// Parametric vocoder interface the transformation pipeline is written
/// against.
///
/// Shape conventions: `f0` and `time_axis` carry one entry per analysis
/// frame; `envelope` and `aperiodicity` are frame-major matrices whose row
/// count equals the f0 length.
pub trait Vocoder {
    /// Estimates a raw f0 contour and its time axis from a waveform.
    fn analyze(&self, waveform: &[f64], sample_rate: u32) -> (Vec<f64>, Vec<f64>);

    /// Refines a raw f0 contour against the waveform.
    fn refine(
        &self,
        waveform: &[f64],
        f0_raw: &[f64],
        time_axis: &[f64],
        sample_rate: u32,
    ) -> Vec<f64>;

    /// Estimates the per-frame spectral envelope.
    fn spectral_envelope(
        &self,
        waveform: &[f64],
        f0: &[f64],
        time_axis: &[f64],
        sample_rate: u32,
    ) -> Vec<Vec<f64>>;

    /// Estimates the per-frame aperiodicity map.
    fn aperiodicity(
        &self,
        waveform: &[f64],
        f0: &[f64],
        time_axis: &[f64],
        sample_rate: u32,
    ) -> Vec<Vec<f64>>;

    /// Synthesizes a waveform from the parametric representation.
    fn resynthesize(
        &self,
        f0: &[f64],
        envelope: &[Vec<f64>],
        aperiodicity: &[Vec<f64>],
        sample_rate: u32,
    ) -> Vec<f64>;
}

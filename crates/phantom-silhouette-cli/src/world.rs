//! WORLD vocoder integration.
//!
//! Adapts the external WORLD engine (dio, stonemask, cheaptrick, d4c,
//! synthesis) to the core's [`Vocoder`] contract. All analysis and
//! resynthesis happens inside the native library; this module only
//! translates signatures.

use phantom_silhouette_core::vocoder::Vocoder;
use rsworld::{cheaptrick, d4c, dio, stonemask, synthesis};
use rsworld_sys::{CheapTrickOption, D4COption, DioOption};

/// WORLD-backed vocoder engine.
///
/// Holds the analysis frame period so resynthesis uses the same frame
/// spacing the f0 contour was extracted with.
pub struct WorldVocoder {
    frame_period: f64,
}

impl WorldVocoder {
    /// Creates a vocoder with WORLD's default frame period.
    pub fn new() -> Self {
        Self {
            frame_period: DioOption::new().frame_period,
        }
    }

    /// Extracts a refined f0 contour in one step (dio + stonemask).
    pub fn extract_f0(&self, waveform: &[f64], sample_rate: u32) -> Vec<f64> {
        let (f0_raw, time_axis) = self.analyze(waveform, sample_rate);
        self.refine(waveform, &f0_raw, &time_axis, sample_rate)
    }
}

impl Default for WorldVocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocoder for WorldVocoder {
    fn analyze(&self, waveform: &[f64], sample_rate: u32) -> (Vec<f64>, Vec<f64>) {
        let option = DioOption::new();
        let (time_axis, f0_raw) = dio(&waveform.to_vec(), sample_rate as i32, &option);
        (f0_raw, time_axis)
    }

    fn refine(
        &self,
        waveform: &[f64],
        f0_raw: &[f64],
        time_axis: &[f64],
        sample_rate: u32,
    ) -> Vec<f64> {
        stonemask(
            &waveform.to_vec(),
            sample_rate as i32,
            &time_axis.to_vec(),
            &f0_raw.to_vec(),
        )
    }

    fn spectral_envelope(
        &self,
        waveform: &[f64],
        f0: &[f64],
        time_axis: &[f64],
        sample_rate: u32,
    ) -> Vec<Vec<f64>> {
        let mut option = CheapTrickOption::new(sample_rate as i32);
        cheaptrick(
            &waveform.to_vec(),
            sample_rate as i32,
            &time_axis.to_vec(),
            &f0.to_vec(),
            &mut option,
        )
    }

    fn aperiodicity(
        &self,
        waveform: &[f64],
        f0: &[f64],
        time_axis: &[f64],
        sample_rate: u32,
    ) -> Vec<Vec<f64>> {
        let option = D4COption::new();
        d4c(
            &waveform.to_vec(),
            sample_rate as i32,
            &time_axis.to_vec(),
            &f0.to_vec(),
            &option,
        )
    }

    fn resynthesize(
        &self,
        f0: &[f64],
        envelope: &[Vec<f64>],
        aperiodicity: &[Vec<f64>],
        sample_rate: u32,
    ) -> Vec<f64> {
        synthesis(
            &f0.to_vec(),
            &envelope.to_vec(),
            &aperiodicity.to_vec(),
            self.frame_period,
            sample_rate as i32,
        )
    }
}

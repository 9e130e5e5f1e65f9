//! Excitation replacement for anonymized resynthesis.
//!
//! The pitched excitation of the source speaker is discarded entirely and
//! replaced with one noise sample per analysis frame: either uniform white
//! noise, or pink (1/f) noise shaped by Paul Kellett's fixed-coefficient
//! IIR approximation.

use rand::Rng;
use rand_distr::StandardNormal;
use rand_pcg::Pcg32;

use crate::error::{PhantomError, PhantomResult};
use crate::rng;

/// Excitation variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcitationMode {
    /// Independent uniform draws from [0, 1).
    Uniform,
    /// 1/f noise from the six-pole IIR approximation, peak-normalized
    /// per generated sequence.
    Pink,
}

/// Whether pink-filter registers survive across `generate` calls.
///
/// The historical behavior keeps the registers alive between calls, so an
/// instance processing two utterances carries filter memory from the first
/// into the second. Whether that continuity was intentional is unresolved;
/// both behaviors are available and the caller chooses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMemory {
    /// Registers persist from one call to the next (historical behavior).
    #[default]
    Carried,
    /// Registers are cleared at the start of every call.
    Fresh,
}

/// Feedback registers for the pink-noise IIR filter.
///
/// Must be owned by exactly one generator: sharing one state between
/// concurrent streams corrupts the filter's autocorrelation.
#[derive(Debug, Clone, Default)]
pub struct PinkFilterState {
    b: [f64; 7],
}

impl PinkFilterState {
    /// Clears all feedback registers.
    pub fn reset(&mut self) {
        self.b = [0.0; 7];
    }

    /// Advances the filter by one white-noise sample and returns the
    /// unnormalized pink sample.
    ///
    /// b6 is rewritten only after the output sample has been formed; the
    /// update order is load-bearing.
    fn advance(&mut self, white: f64) -> f64 {
        let b = &mut self.b;
        b[0] = 0.99886 * b[0] + white * 0.0555179;
        b[1] = 0.99332 * b[1] + white * 0.0750759;
        b[2] = 0.96900 * b[2] + white * 0.1538520;
        b[3] = 0.86650 * b[3] + white * 0.3104856;
        b[4] = 0.55000 * b[4] + white * 0.5329522;
        b[5] = -0.7616 * b[5] - white * 0.0168980;
        let sample = b[0] + b[1] + b[2] + b[3] + b[4] + b[5] + b[6] + white * 0.5362;
        b[6] = white * 0.115926;
        sample
    }
}

/// Per-frame excitation generator.
///
/// One instance per logical stream. Both variants draw from a seeded PCG32
/// stream; the pink variant additionally keeps IIR filter memory in the
/// instance (see [`FilterMemory`]).
#[derive(Debug, Clone)]
pub struct ExcitationGenerator {
    mode: ExcitationMode,
    memory: FilterMemory,
    state: PinkFilterState,
    rng: Pcg32,
}

impl ExcitationGenerator {
    /// Creates a generator for the given mode, seeded deterministically.
    pub fn new(mode: ExcitationMode, seed: u32) -> Self {
        Self {
            mode,
            memory: FilterMemory::default(),
            state: PinkFilterState::default(),
            rng: rng::create_component_rng(seed, "excitation"),
        }
    }

    /// Sets the filter-memory policy for pink mode.
    pub fn with_filter_memory(mut self, memory: FilterMemory) -> Self {
        self.memory = memory;
        self
    }

    /// Returns the configured mode.
    pub fn mode(&self) -> ExcitationMode {
        self.mode
    }

    /// Explicitly clears the pink filter registers.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Generates one excitation sample per analysis frame.
    ///
    /// The samples stand in for the f0 contour at resynthesis time; only the
    /// frame count of the original contour matters, never its values.
    ///
    /// # Arguments
    /// * `frame_count` - Number of analysis frames
    /// * `sample_rate` - Audio sample rate in Hz (must be positive)
    ///
    /// # Returns
    /// `frame_count` samples: uniform mode in [0, 1); pink mode
    /// peak-normalized so the largest magnitude is 1.0 (an all-zero
    /// sequence is left unchanged).
    pub fn generate(&mut self, frame_count: usize, sample_rate: u32) -> PhantomResult<Vec<f64>> {
        if sample_rate == 0 {
            return Err(PhantomError::invalid_arg("sample_rate", "must be positive"));
        }

        match self.mode {
            ExcitationMode::Uniform => {
                Ok((0..frame_count).map(|_| self.rng.gen::<f64>()).collect())
            }
            ExcitationMode::Pink => {
                if self.memory == FilterMemory::Fresh {
                    self.state.reset();
                }

                let mut out = Vec::with_capacity(frame_count);
                for _ in 0..frame_count {
                    let white: f64 = self.rng.sample(StandardNormal);
                    out.push(self.state.advance(white));
                }

                normalize_peak(&mut out);
                Ok(out)
            }
        }
    }
}

/// Scales samples so the peak magnitude is 1.0.
///
/// All-zero input is left untouched to avoid dividing by zero.
fn normalize_peak(samples: &mut [f64]) {
    let max = samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b));

    if max > 0.0 {
        for s in samples.iter_mut() {
            *s /= max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_length_and_range() {
        let mut generator = ExcitationGenerator::new(ExcitationMode::Uniform, 42);
        let samples = generator.generate(1000, 16000).unwrap();

        assert_eq!(samples.len(), 1000);
        for &s in &samples {
            assert!((0.0..1.0).contains(&s));
            assert!(s.is_finite());
        }
    }

    #[test]
    fn test_uniform_determinism() {
        let mut gen1 = ExcitationGenerator::new(ExcitationMode::Uniform, 42);
        let mut gen2 = ExcitationGenerator::new(ExcitationMode::Uniform, 42);

        assert_eq!(
            gen1.generate(100, 16000).unwrap(),
            gen2.generate(100, 16000).unwrap()
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut gen1 = ExcitationGenerator::new(ExcitationMode::Uniform, 42);
        let mut gen2 = ExcitationGenerator::new(ExcitationMode::Uniform, 43);

        assert_ne!(
            gen1.generate(100, 16000).unwrap(),
            gen2.generate(100, 16000).unwrap()
        );
    }

    #[test]
    fn test_pink_peak_normalized() {
        let mut generator = ExcitationGenerator::new(ExcitationMode::Pink, 42);
        let samples = generator.generate(1024, 48000).unwrap();

        assert_eq!(samples.len(), 1024);
        let peak = samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max);
        assert!((peak - 1.0).abs() < 1e-12);
        for &s in &samples {
            assert!(s.is_finite());
        }
    }

    #[test]
    fn test_pink_determinism() {
        let mut gen1 = ExcitationGenerator::new(ExcitationMode::Pink, 7);
        let mut gen2 = ExcitationGenerator::new(ExcitationMode::Pink, 7);

        assert_eq!(
            gen1.generate(256, 48000).unwrap(),
            gen2.generate(256, 48000).unwrap()
        );
    }

    #[test]
    fn test_empty_frame_count() {
        let mut generator = ExcitationGenerator::new(ExcitationMode::Pink, 42);
        assert!(generator.generate(0, 48000).unwrap().is_empty());

        let mut generator = ExcitationGenerator::new(ExcitationMode::Uniform, 42);
        assert!(generator.generate(0, 48000).unwrap().is_empty());
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let mut generator = ExcitationGenerator::new(ExcitationMode::Uniform, 42);
        let err = generator.generate(10, 0).unwrap_err();
        assert!(matches!(err, PhantomError::InvalidArgument { .. }));
    }

    #[test]
    fn test_carried_state_persists_across_calls() {
        // Same seed, same draw sequence; the only difference is whether the
        // filter registers are cleared before the second call.
        let mut carried = ExcitationGenerator::new(ExcitationMode::Pink, 42);
        let mut fresh = ExcitationGenerator::new(ExcitationMode::Pink, 42)
            .with_filter_memory(FilterMemory::Fresh);

        let carried_first = carried.generate(64, 48000).unwrap();
        let fresh_first = fresh.generate(64, 48000).unwrap();
        // Registers start zeroed either way, so first calls agree.
        assert_eq!(carried_first, fresh_first);

        let carried_second = carried.generate(64, 48000).unwrap();
        let fresh_second = fresh.generate(64, 48000).unwrap();
        assert_ne!(carried_second, fresh_second);
    }

    #[test]
    fn test_split_calls_differ_from_single_call() {
        // Carried state means 5+5 frames see the same filter trajectory as a
        // single 10-frame call, but each call normalizes over its own peak,
        // so the split outputs do not reassemble the single-call output.
        let mut whole = ExcitationGenerator::new(ExcitationMode::Pink, 42);
        let mut split = ExcitationGenerator::new(ExcitationMode::Pink, 42);

        let single = whole.generate(10, 48000).unwrap();
        let mut joined = split.generate(5, 48000).unwrap();
        joined.extend(split.generate(5, 48000).unwrap());

        assert_eq!(joined.len(), single.len());
        assert_ne!(joined, single);
    }

    #[test]
    fn test_reset_matches_fresh_policy() {
        let mut manual = ExcitationGenerator::new(ExcitationMode::Pink, 42);
        let mut fresh = ExcitationGenerator::new(ExcitationMode::Pink, 42)
            .with_filter_memory(FilterMemory::Fresh);

        manual.generate(32, 48000).unwrap();
        fresh.generate(32, 48000).unwrap();

        manual.reset();
        assert_eq!(
            manual.generate(32, 48000).unwrap(),
            fresh.generate(32, 48000).unwrap()
        );
    }

    #[test]
    fn test_normalize_peak_zero_guard() {
        let mut silence = vec![0.0; 16];
        normalize_peak(&mut silence);
        assert!(silence.iter().all(|&s| s == 0.0));
    }
}

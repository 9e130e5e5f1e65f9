//! Phantom Silhouette Core
//!
//! Voice anonymization over parametric voice representations. Given a
//! fundamental-frequency contour, a per-frame spectral envelope, and an
//! aperiodicity map (all produced by an external vocoder), the engine
//! replaces the pitched excitation with noise and reshapes the envelope so
//! the resynthesized voice no longer carries the source speaker's identity:
//!
//! - **Excitation replacement** - uniform white noise, or pink (1/f) noise
//!   from Paul Kellett's IIR approximation, one sample per analysis frame
//! - **Spectral reshaping** - low-frequency formant suppression plus
//!   high-frequency breathiness emphasis, broadcast per bin
//!
//! The aperiodicity map passes through unchanged; the caller pairs it with
//! the transformed parameters when invoking resynthesis.
//!
//! # Determinism
//!
//! All randomness flows through a PCG32 stream seeded from an explicit
//! `u32`, with BLAKE3 component-seed derivation. Given the same seed and
//! inputs, the output is byte-identical across runs.
//!
//! # Example
//!
//! ```
//! use phantom_silhouette_core::{ExcitationMode, PhantomSilhouette};
//!
//! let f0 = vec![120.0; 64]; // values are ignored, only the length matters
//! let envelope = vec![vec![1.0; 513]; 64];
//!
//! let mut engine = PhantomSilhouette::new(ExcitationMode::Pink, 42);
//! let (excitation, reshaped) = engine.transform(&f0, &envelope, 16000).unwrap();
//!
//! assert_eq!(excitation.len(), 64);
//! assert_eq!(reshaped.len(), 64);
//! ```
//!
//! # Crate Structure
//!
//! - [`engine`] - the [`PhantomSilhouette`] orchestrator
//! - [`excitation`] - noise excitation generators and pink filter state
//! - [`spectral`] - envelope weight curves and reshaping
//! - [`rng`] - deterministic RNG with seed derivation
//! - [`vocoder`] - the external vocoder collaborator contract
//! - [`wav`] - fixed-point PCM WAV codec

pub mod engine;
pub mod error;
pub mod excitation;
pub mod rng;
pub mod spectral;
pub mod vocoder;
pub mod wav;

// Re-export main types at crate root
pub use engine::PhantomSilhouette;
pub use error::{PhantomError, PhantomResult};
pub use excitation::{ExcitationGenerator, ExcitationMode, FilterMemory, PinkFilterState};
pub use vocoder::Vocoder;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_transform_then_encode_is_deterministic() {
        let f0 = vec![0.0; 128];
        let envelope = vec![vec![0.8; 257]; 128];

        let render = |seed: u32| {
            let mut engine = PhantomSilhouette::new(ExcitationMode::Pink, seed);
            let (excitation, _) = engine.transform(&f0, &envelope, 16000).unwrap();
            let pcm = wav::samples_to_pcm16(&excitation);
            wav::write_wav_to_vec(&wav::WavFormat::mono(16000), &pcm)
        };

        assert_eq!(render(42), render(42));
        assert_ne!(render(42), render(43));
    }

    #[test]
    fn test_uniform_and_pink_modes_diverge() {
        let f0 = vec![0.0; 64];
        let envelope = vec![vec![1.0; 64]; 64];

        let mut uniform = PhantomSilhouette::new(ExcitationMode::Uniform, 42);
        let mut pink = PhantomSilhouette::new(ExcitationMode::Pink, 42);

        let (exc_u, _) = uniform.transform(&f0, &envelope, 48000).unwrap();
        let (exc_p, _) = pink.transform(&f0, &envelope, 48000).unwrap();

        assert_ne!(exc_u, exc_p);
    }
}

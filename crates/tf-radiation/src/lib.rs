//! tf-radiation: thermal radiation for thermoflow.
//!
//! Provides:
//! - Blackbody spectral radiance (Planck's law)
//! - Net radiant heat flux of a grey surface (Stefan–Boltzmann)
//! - The SOLAR-ISS solar spectral irradiance table
//!
//! Every entry point is stateless. The solar table is read from the crate's
//! `data/` directory on each call.
//!
//! # Example
//!
//! ```no_run
//! use tf_radiation::{SolarModel, blackbody_spectral_radiance, q_rad, solar_spectrum};
//!
//! let i = blackbody_spectral_radiance(800.0, 4e-6);
//! let q = q_rad(0.85, 400.0, 305.0);
//!
//! let spectrum = solar_spectrum(SolarModel::SolarIss).unwrap();
//! let solar_constant = spectrum.total_irradiance().unwrap();
//! println!("I = {i:.3e} W/(m²·sr·µm), q = {q:.1} W/m², S = {solar_constant:.1} W/m²");
//! ```

pub mod error;
pub mod flux;
pub mod planck;
pub mod solar;

// Re-exports for ergonomics
pub use error::{RadiationError, RadiationResult};
pub use flux::{q_rad, q_rad_to_zero, radiant_flux};
pub use planck::{blackbody_spectral_radiance, spectral_radiance, try_blackbody_spectral_radiance};
pub use solar::{
    SolarModel, SolarSpectrum, SpectralSample, data_dir, solar_spectrum, solar_spectrum_named,
};

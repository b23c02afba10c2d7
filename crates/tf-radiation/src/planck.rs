//! Blackbody spectral radiance (Planck's law).
//!
//! ```text
//! I(λ, T) = 2 h c² / (λ⁵ [exp(h c / (λ k T)) − 1])
//! ```

use crate::error::RadiationResult;
use tf_core::constants::{BOLTZMANN_J_K, PLANCK_J_S, SPEED_OF_LIGHT_M_S};
use tf_core::units::{Length, Temperature};
use tf_core::{Real, ensure_finite};
use uom::si::length::meter;
use uom::si::thermodynamic_temperature::kelvin;

/// Spectral radiance of a blackbody surface [W/(m²·sr·m)].
///
/// The value is per metre of wavelength: π times its integral over
/// wavelength in metres gives σT⁴. Reference tables often label the same
/// number W/(m²·sr·µm), e.g. 1.3117e9 at 800 K and 4 µm.
///
/// # Arguments
///
/// - `t`: surface temperature [K]
/// - `wavelength`: wavelength considered [m]
///
/// Inputs are not validated. A zero wavelength or temperature follows
/// IEEE-754 arithmetic (NaN or zero); use [`try_blackbody_spectral_radiance`]
/// to have those reported as errors.
pub fn blackbody_spectral_radiance(t: Real, wavelength: Real) -> Real {
    2.0 * PLANCK_J_S * SPEED_OF_LIGHT_M_S.powi(2)
        / wavelength.powi(5)
        / ((PLANCK_J_S * SPEED_OF_LIGHT_M_S / (wavelength * t * BOLTZMANN_J_K)).exp() - 1.0)
}

/// Checked form of [`blackbody_spectral_radiance`].
///
/// Evaluates the same expression, stopping at the first non-finite
/// intermediate: a zero divisor in the exponent, an overflowing exponential,
/// or a non-finite result.
pub fn try_blackbody_spectral_radiance(t: Real, wavelength: Real) -> RadiationResult<Real> {
    let exponent = ensure_finite(
        PLANCK_J_S * SPEED_OF_LIGHT_M_S / (wavelength * t * BOLTZMANN_J_K),
        "Planck exponent hc/(λkT)",
    )?;
    let boltzmann_factor = ensure_finite(exponent.exp(), "Planck exp(hc/(λkT))")?;
    let radiance = ensure_finite(
        2.0 * PLANCK_J_S * SPEED_OF_LIGHT_M_S.powi(2)
            / wavelength.powi(5)
            / (boltzmann_factor - 1.0),
        "spectral radiance",
    )?;
    Ok(radiance)
}

/// [`blackbody_spectral_radiance`] taking unit-checked quantities.
pub fn spectral_radiance(t: Temperature, wavelength: Length) -> Real {
    blackbody_spectral_radiance(t.get::<kelvin>(), wavelength.get::<meter>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RadiationError;
    use tf_core::units::{k, m, nm};
    use tf_core::{Tolerances, nearly_equal};

    const REL_1E6: Tolerances = Tolerances {
        abs: 0.0,
        rel: 1e-6,
    };

    #[test]
    fn matches_reference_value() {
        let i = blackbody_spectral_radiance(800.0, 4e-6);
        assert!(nearly_equal(i, 1_311_692_056.24, REL_1E6), "got {i}");
    }

    #[test]
    fn checked_agrees_with_plain() {
        let plain = blackbody_spectral_radiance(5778.0, 500e-9);
        let checked = try_blackbody_spectral_radiance(5778.0, 500e-9).unwrap();
        assert_eq!(plain, checked);
    }

    #[test]
    fn typed_agrees_with_plain() {
        let typed = spectral_radiance(k(800.0), m(4e-6));
        assert_eq!(typed, blackbody_spectral_radiance(800.0, 4e-6));

        let typed_nm = spectral_radiance(k(800.0), nm(4000.0));
        assert!(nearly_equal(typed_nm, typed, Tolerances::default()));
    }

    #[test]
    fn zero_wavelength_propagates() {
        assert!(blackbody_spectral_radiance(800.0, 0.0).is_nan());
        let err = try_blackbody_spectral_radiance(800.0, 0.0).unwrap_err();
        assert!(matches!(err, RadiationError::Domain(_)));
    }

    #[test]
    fn zero_temperature_is_a_domain_error() {
        let err = try_blackbody_spectral_radiance(0.0, 4e-6).unwrap_err();
        assert!(err.to_string().contains("exponent"));
    }

    #[test]
    fn exponent_overflow_is_a_domain_error() {
        // hc/(λkT) ≈ 1.4e4 here, far beyond exp's range
        assert_eq!(blackbody_spectral_radiance(1.0, 1e-6), 0.0);
        let err = try_blackbody_spectral_radiance(1.0, 1e-6).unwrap_err();
        assert!(err.to_string().contains("exp"));
    }

    #[test]
    fn peak_follows_wien_displacement() {
        // λ_max T ≈ 2.8978e-3 m·K
        let t = 1000.0;
        let peak = (1..=2000)
            .map(|i| i as Real * 1e-8)
            .max_by(|a, b| {
                blackbody_spectral_radiance(t, *a).total_cmp(&blackbody_spectral_radiance(t, *b))
            })
            .unwrap();
        assert!((peak * t - 2.8978e-3).abs() < 2e-5, "peak at {peak}");
    }
}

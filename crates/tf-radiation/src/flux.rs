//! Net radiant heat flux between a grey surface and its surroundings.

use tf_core::Real;
use tf_core::constants::STEFAN_BOLTZMANN_W_M2_K4;
use tf_core::units::{HeatFlux, Ratio, Temperature, w_per_m2};
use uom::si::ratio::ratio;
use uom::si::thermodynamic_temperature::kelvin;

/// Net radiant heat flux leaving a surface [W/m²].
///
/// `q = ε σ (T⁴ − T2⁴)`
///
/// - `emissivity`: fraction of blackbody emission, nominally in (0, 1]
/// - `t`: surface temperature [K]
/// - `t2`: temperature of the surroundings [K]
///
/// Emissivity is taken as given. `t2 > t` gives a negative flux (net
/// absorption).
pub fn q_rad(emissivity: Real, t: Real, t2: Real) -> Real {
    STEFAN_BOLTZMANN_W_M2_K4 * emissivity * (t.powi(4) - t2.powi(4))
}

/// [`q_rad`] with surroundings at absolute zero.
pub fn q_rad_to_zero(emissivity: Real, t: Real) -> Real {
    q_rad(emissivity, t, 0.0)
}

/// [`q_rad`] taking unit-checked quantities.
pub fn radiant_flux(emissivity: Ratio, t: Temperature, t2: Temperature) -> HeatFlux {
    w_per_m2(q_rad(
        emissivity.get::<ratio>(),
        t.get::<kelvin>(),
        t2.get::<kelvin>(),
    ))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn swapping_temperatures_negates_flux(
            e in 0.0_f64..1.0_f64,
            t in 0.0_f64..5000.0_f64,
            t2 in 0.0_f64..5000.0_f64,
        ) {
            prop_assert_eq!(q_rad(e, t, t2), -q_rad(e, t2, t));
        }

        #[test]
        fn flux_is_linear_in_emissivity(
            e in 0.01_f64..1.0_f64,
            t in 1.0_f64..3000.0_f64,
            t2 in 1.0_f64..3000.0_f64,
        ) {
            let blackbody = q_rad(1.0, t, t2);
            let grey = q_rad(e, t, t2);
            prop_assert!((grey - e * blackbody).abs() <= 1e-9 * blackbody.abs().max(1.0));
        }
    }
}

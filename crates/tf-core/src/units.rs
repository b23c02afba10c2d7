// tf-core/src/units.rs

use uom::si::f64::{
    HeatFluxDensity as UomHeatFluxDensity, Length as UomLength, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type HeatFlux = UomHeatFluxDensity;
pub type Length = UomLength;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn nm(v: f64) -> Length {
    use uom::si::length::nanometer;
    Length::new::<nanometer>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[inline]
pub fn w_per_m2(v: f64) -> HeatFlux {
    use uom::si::heat_flux_density::watt_per_square_meter;
    HeatFlux::new::<watt_per_square_meter>(v)
}

/// Physical constants, CODATA 2014 values.
///
/// The 2014 set is what the published radiation reference values were
/// computed with; the 2018 redefinition shifts `h` and `k` in the ninth digit.
pub mod constants {
    /// Planck constant [J·s]
    pub const PLANCK_J_S: f64 = 6.626_070_040e-34;
    /// Speed of light in vacuum [m/s]
    pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;
    /// Boltzmann constant [J/K]
    pub const BOLTZMANN_J_K: f64 = 1.380_648_52e-23;
    /// Stefan–Boltzmann constant [W/(m²·K⁴)]
    pub const STEFAN_BOLTZMANN_W_M2_K4: f64 = 5.670_367e-8;
}

//! Tabulated solar spectral irradiance.
//!
//! The SOLAR-ISS reference spectrum (Meftah et al., A&A 611, A1, 2018) is
//! bundled under `data/` as a header-less, whitespace-separated table with
//! three columns:
//!
//! | column | quantity | unit |
//! |---|---|---|
//! | 1 | wavelength | nm |
//! | 2 | spectral irradiance at 1 AU | W/(m²·nm) |
//! | 3 | absolute uncertainty, `-1` when not estimated | W/(m²·nm) |
//!
//! Loading converts everything to SI: wavelengths in m, irradiance and
//! uncertainty in W/(m²·m). Missing uncertainties become NaN and stay NaN
//! through any later arithmetic, so sums over the uncertainty column are NaN
//! whenever a row lacks an estimate. Rows are never dropped.
//!
//! Each call reads the table from disk. Nothing is cached.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tf_core::{Real, TfError, trapezoid};
use tracing::debug;

use crate::error::{RadiationError, RadiationResult};

const NM_TO_M: Real = 1e-9;
const PER_NM_TO_PER_M: Real = 1e9;
/// Uncertainty sentinel used by the table for "not estimated".
const NOT_ESTIMATED: Real = -1.0;
const COLUMNS: usize = 3;

/// Directory holding the bundled spectral tables.
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Supported solar spectrum models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolarModel {
    /// SOLAR-ISS, 0.5 nm to 3000 nm, UV/VIS from 2008 and IR from 2010-2016.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "SOLAR-ISS"))]
    SolarIss,
}

impl SolarModel {
    pub const ALL: [SolarModel; 1] = [SolarModel::SolarIss];

    /// Selector string accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::SolarIss => "SOLAR-ISS",
        }
    }

    /// File name of the bundled table.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::SolarIss => "solar_iss_2018_spectrum.dat",
        }
    }

    pub fn data_path(self) -> PathBuf {
        data_dir().join(self.file_name())
    }
}

impl fmt::Display for SolarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolarModel {
    type Err = RadiationError;

    /// Exact, case-sensitive match on the model name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.name() == s)
            .ok_or_else(|| RadiationError::UnsupportedModel {
                model: s.to_string(),
            })
    }
}

/// One row of a solar spectrum, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpectralSample {
    /// [m]
    pub wavelength: Real,
    /// [W/(m²·m)]
    pub irradiance: Real,
    /// [W/(m²·m)], NaN when not estimated
    #[cfg_attr(feature = "serde", serde(with = "nan_as_null::scalar"))]
    pub uncertainty: Real,
}

/// Solar spectral irradiance as three parallel columns in table order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarSpectrum {
    /// Wavelengths [m]
    pub wavelengths: Vec<Real>,
    /// Spectral irradiance [W/(m²·m)]
    pub irradiances: Vec<Real>,
    /// Absolute uncertainty of the irradiance [W/(m²·m)], NaN when not estimated
    #[cfg_attr(feature = "serde", serde(with = "nan_as_null"))]
    pub uncertainties: Vec<Real>,
}

impl SolarSpectrum {
    /// Load and convert the table at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> RadiationResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RadiationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let spectrum = Self::from_reader(BufReader::new(file))?;

        debug!(
            path = %path.display(),
            rows = spectrum.len(),
            not_estimated = spectrum.uncertainties.iter().filter(|u| u.is_nan()).count(),
            "loaded solar spectrum table"
        );
        Ok(spectrum)
    }

    /// Parse a table in the bundled format and convert it to SI units.
    ///
    /// Blank lines and `#` comments are skipped. Every other line must hold
    /// exactly three numbers; the first bad line fails the whole load.
    pub fn from_reader(reader: impl BufRead) -> RadiationResult<Self> {
        let mut wavelengths_nm = Vec::new();
        let mut irradiances_nm = Vec::new();
        let mut uncertainties_nm = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let Some([wavelength, irradiance, uncertainty]) = parse_row(&line, index + 1)? else {
                continue;
            };
            wavelengths_nm.push(wavelength);
            irradiances_nm.push(irradiance);
            uncertainties_nm.push(uncertainty);
        }

        if wavelengths_nm.is_empty() {
            return Err(RadiationError::Parse {
                line: 0,
                reason: "table contains no data rows".to_string(),
            });
        }

        Ok(Self::from_raw_columns(
            &wavelengths_nm,
            &irradiances_nm,
            &uncertainties_nm,
        ))
    }

    /// Convert raw table columns (nm, W/(m²·nm)) to SI.
    fn from_raw_columns(
        wavelengths_nm: &[Real],
        irradiances: &[Real],
        uncertainties: &[Real],
    ) -> Self {
        let wavelengths = wavelengths_nm.iter().map(|w| w * NM_TO_M).collect();
        let irradiances = irradiances.iter().map(|e| e * PER_NM_TO_PER_M).collect();
        let uncertainties = uncertainties
            .iter()
            .map(|&u| if u == NOT_ESTIMATED { Real::NAN } else { u })
            .map(|u| u * PER_NM_TO_PER_M)
            .collect();

        Self {
            wavelengths,
            irradiances,
            uncertainties,
        }
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// Iterate rows in table order.
    pub fn iter(&self) -> impl Iterator<Item = SpectralSample> + '_ {
        self.wavelengths
            .iter()
            .zip(&self.irradiances)
            .zip(&self.uncertainties)
            .map(|((&wavelength, &irradiance), &uncertainty)| SpectralSample {
                wavelength,
                irradiance,
                uncertainty,
            })
    }

    /// Irradiance integrated over the tabulated wavelength range [W/m²],
    /// trapezoidal rule.
    pub fn total_irradiance(&self) -> RadiationResult<Real> {
        Ok(trapezoid(&self.irradiances, &self.wavelengths)?)
    }

    /// Rescale to a sun distance other than 1 AU (inverse-square law).
    ///
    /// Only magnitudes change; wavelengths are kept as-is.
    pub fn scaled_to_distance(&self, distance_au: Real) -> RadiationResult<Self> {
        if !(distance_au.is_finite() && distance_au > 0.0) {
            return Err(TfError::InvalidArg {
                what: "sun distance must be positive and finite",
            }
            .into());
        }
        let factor = 1.0 / (distance_au * distance_au);

        Ok(Self {
            wavelengths: self.wavelengths.clone(),
            irradiances: self.irradiances.iter().map(|e| e * factor).collect(),
            uncertainties: self.uncertainties.iter().map(|u| u * factor).collect(),
        })
    }

    pub fn into_parts(self) -> (Vec<Real>, Vec<Real>, Vec<Real>) {
        (self.wavelengths, self.irradiances, self.uncertainties)
    }
}

impl From<SolarSpectrum> for (Vec<Real>, Vec<Real>, Vec<Real>) {
    fn from(spectrum: SolarSpectrum) -> Self {
        spectrum.into_parts()
    }
}

/// Missing uncertainties serialize as `null` and come back as NaN, since
/// JSON has no NaN.
#[cfg(feature = "serde")]
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use tf_core::Real;

    fn to_option(v: Real) -> Option<Real> {
        (!v.is_nan()).then_some(v)
    }

    pub fn serialize<S: Serializer>(values: &[Real], serializer: S) -> Result<S::Ok, S::Error> {
        let values: Vec<Option<Real>> = values.iter().copied().map(to_option).collect();
        values.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Real>, D::Error> {
        let values = Vec::<Option<Real>>::deserialize(deserializer)?;
        Ok(values
            .into_iter()
            .map(|v| v.unwrap_or(Real::NAN))
            .collect())
    }

    pub mod scalar {
        use super::*;

        pub fn serialize<S: Serializer>(value: &Real, serializer: S) -> Result<S::Ok, S::Error> {
            to_option(*value).serialize(serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Real, D::Error> {
            Ok(Option::<Real>::deserialize(deserializer)?.unwrap_or(Real::NAN))
        }
    }
}

/// Parse one table line. `Ok(None)` for blank and comment lines.
fn parse_row(line: &str, line_no: usize) -> RadiationResult<Option<[Real; COLUMNS]>> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = content.split_whitespace().collect();
    if tokens.len() != COLUMNS {
        return Err(RadiationError::Parse {
            line: line_no,
            reason: format!("expected {COLUMNS} columns, found {}", tokens.len()),
        });
    }

    let mut row = [0.0; COLUMNS];
    for (value, token) in row.iter_mut().zip(&tokens) {
        *value = token.parse().map_err(|_| RadiationError::Parse {
            line: line_no,
            reason: format!("'{token}' is not a number"),
        })?;
    }
    Ok(Some(row))
}

/// Load the solar spectrum for `model` from the bundled data directory.
pub fn solar_spectrum(model: SolarModel) -> RadiationResult<SolarSpectrum> {
    SolarSpectrum::from_path(model.data_path())
}

/// [`solar_spectrum`] selected by name, e.g. `"SOLAR-ISS"`.
pub fn solar_spectrum_named(model: &str) -> RadiationResult<SolarSpectrum> {
    solar_spectrum(model.parse()?)
}

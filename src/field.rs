//! Registry of the physical quantities that can be plotted and how to present them.

use crate::{
    colormap::Colormap,
    error::{AnalysisError, Result},
};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Physical quantity codes accepted by the plotting functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Field {
    /// Vertical velocity (m/s)
    #[strum(serialize = "w")]
    VerticalVelocity,
    /// Wind speed (m/s)
    #[strum(serialize = "ws")]
    WindSpeed,
    /// Wind direction (degrees)
    #[strum(serialize = "wd")]
    WindDirection,
    /// Potential temperature (C)
    #[strum(serialize = "pt")]
    PotentialTemperature,
    /// Temperature (C)
    #[strum(serialize = "t")]
    Temperature,
    /// Specific humidity (g/kg)
    #[strum(serialize = "q")]
    SpecificHumidity,
    /// Dew point (C)
    #[strum(serialize = "dp")]
    DewPoint,
    /// Relative humidity (%)
    #[strum(serialize = "rh")]
    RelativeHumidity,
    /// Standard deviation of any of the above.
    #[strum(serialize = "std")]
    StandardDeviation,
}

/// How a field is drawn: the colormap and the color bar label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    /// Default colormap for the field.
    pub colormap: Colormap,
    /// Label for the color bar, with units.
    pub label: &'static str,
}

impl Field {
    /// Parse a quantity code, e.g. `"t"` or `"ws"`.
    pub fn from_code(code: &str) -> Result<Self> {
        Field::from_str(code).map_err(|_| AnalysisError::UnknownField(code.to_owned()))
    }

    /// Get the colormap and label used when plotting this field.
    pub fn presentation(self) -> Presentation {
        use Colormap::*;
        use Field::*;

        let (colormap, label) = match self {
            VerticalVelocity => (Seismic, "vertical velocity [m/s]"),
            WindSpeed => (GistSternR, "windspeed [m/s]"),
            WindDirection => (Phase, "wind direction [deg]"),
            PotentialTemperature => (Thermal, "potential temperature [C]"),
            Temperature => (Thermal, "temperature [C]"),
            SpecificHumidity => (HalineR, "q [g/kg]"),
            DewPoint => (HalineR, "dewpoint [C]"),
            RelativeHumidity => (HalineR, "RH [%]"),
            StandardDeviation => (Thermal, "Standard Deviation"),
        };

        Presentation { colormap, label }
    }
}

/// Look up the presentation for a quantity code. Unknown codes are an error, there is no default.
pub fn lookup(code: &str) -> Result<Presentation> {
    Field::from_code(code).map(Field::presentation)
}

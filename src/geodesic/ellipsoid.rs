use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reference bodies available to the geodesic solver
///
/// Names follow the PROJ `+ellps=` tokens so config files can reuse them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ellipsoid {
    #[default]
    Wgs84,
    Grs80,
    Airy,
    Clarke1866,
    International,
    /// PROJ's "sphere", radius 6 370 997 m. Great-circle sweeps close on it.
    Sphere,
}

impl Ellipsoid {
    /// All supported ellipsoids
    pub const ALL: [Ellipsoid; 6] = [
        Ellipsoid::Wgs84,
        Ellipsoid::Grs80,
        Ellipsoid::Airy,
        Ellipsoid::Clarke1866,
        Ellipsoid::International,
        Ellipsoid::Sphere,
    ];

    /// Semi-major axis in meters
    pub fn semi_major_axis(&self) -> f64 {
        match self {
            Ellipsoid::Wgs84 | Ellipsoid::Grs80 => 6_378_137.0,
            Ellipsoid::Airy => 6_377_563.396,
            Ellipsoid::Clarke1866 => 6_378_206.4,
            Ellipsoid::International => 6_378_388.0,
            Ellipsoid::Sphere => 6_370_997.0,
        }
    }

    /// Flattening
    pub fn flattening(&self) -> f64 {
        match self {
            Ellipsoid::Wgs84 => 1.0 / 298.257_223_563,
            Ellipsoid::Grs80 => 1.0 / 298.257_222_100_882_711_243,
            Ellipsoid::Airy => 1.0 / 299.324_964_6,
            Ellipsoid::Clarke1866 => 1.0 / 294.978_698_2,
            Ellipsoid::International => 1.0 / 297.0,
            Ellipsoid::Sphere => 0.0,
        }
    }

    /// Returns the PROJ name of this ellipsoid
    pub fn name(&self) -> &'static str {
        match self {
            Ellipsoid::Wgs84 => "WGS84",
            Ellipsoid::Grs80 => "GRS80",
            Ellipsoid::Airy => "airy",
            Ellipsoid::Clarke1866 => "clrk66",
            Ellipsoid::International => "intl",
            Ellipsoid::Sphere => "sphere",
        }
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ellipsoid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Ellipsoid::ALL
            .iter()
            .copied()
            .find(|e| e.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidSpec(format!("Unknown ellipsoid: {}", s)))
    }
}

impl TryFrom<String> for Ellipsoid {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Ellipsoid> for String {
    fn from(value: Ellipsoid) -> Self {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("WGS84".parse::<Ellipsoid>().unwrap(), Ellipsoid::Wgs84);
        assert_eq!("wgs84".parse::<Ellipsoid>().unwrap(), Ellipsoid::Wgs84);
        assert_eq!("sphere".parse::<Ellipsoid>().unwrap(), Ellipsoid::Sphere);
        assert_eq!("clrk66".parse::<Ellipsoid>().unwrap(), Ellipsoid::Clarke1866);
    }

    #[test]
    fn test_unknown_name() {
        let err = "bessel-ish".parse::<Ellipsoid>().unwrap_err();
        assert!(matches!(err, Error::InvalidSpec(_)));
    }

    #[test]
    fn test_name_round_trip() {
        for e in Ellipsoid::ALL {
            assert_eq!(e.name().parse::<Ellipsoid>().unwrap(), e);
        }
    }

    #[test]
    fn test_sphere_is_round() {
        assert_eq!(Ellipsoid::Sphere.flattening(), 0.0);
        assert!(Ellipsoid::Wgs84.flattening() > 0.0033);
    }
}

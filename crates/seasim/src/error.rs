use std::fmt;

/// Everything the simulation core can fail at. None of these are fatal to the frame loop.
#[derive(Debug)]
pub enum SimError {
    /// Reading or writing a config file failed
    Io(std::io::Error),
    /// A config file is not valid TOML for the expected layout
    Parse(toml::de::Error),
    /// A config could not be encoded back to TOML
    Serialize(toml::ser::Error),
    /// A color string is not `#rrggbb`
    InvalidColor(String),
    /// Measured model bounds are unusable (non-finite or not positive)
    InvalidBounds { x: f32, y: f32, z: f32 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Io(err) => write!(f, "config io error: {err}"),
            SimError::Parse(err) => write!(f, "config parse error: {err}"),
            SimError::Serialize(err) => write!(f, "config serialize error: {err}"),
            SimError::InvalidColor(value) => {
                write!(f, "invalid color {value:?}, expected #rrggbb")
            }
            SimError::InvalidBounds { x, y, z } => {
                write!(f, "invalid model bounds ({x}, {y}, {z})")
            }
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Io(err) => Some(err),
            SimError::Parse(err) => Some(err),
            SimError::Serialize(err) => Some(err),
            SimError::InvalidColor(_) | SimError::InvalidBounds { .. } => None,
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err)
    }
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        SimError::Parse(err)
    }
}

impl From<toml::ser::Error> for SimError {
    fn from(err: toml::ser::Error) -> Self {
        SimError::Serialize(err)
    }
}

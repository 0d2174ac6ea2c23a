use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::EscapeTime;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKind {
    #[default]
    FireGradient,
    BlueWhiteGradient,
}

impl MandelbrotColourMapKind {
    pub const ALL: &'static [Self] = &[Self::FireGradient, Self::BlueWhiteGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }

    /// Short identifier used on the command line.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::FireGradient => "fire",
            Self::BlueWhiteGradient => "blue-white",
        }
    }
}

impl fmt::Display for MandelbrotColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourMapError {
    pub name: String,
}

impl fmt::Display for UnknownColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = MandelbrotColourMapKind::ALL
            .iter()
            .map(|kind| kind.cli_name())
            .collect();

        write!(
            f,
            "unknown colour map '{}', expected one of: {}",
            self.name,
            known.join(", ")
        )
    }
}

impl Error for UnknownColourMapError {}

impl FromStr for MandelbrotColourMapKind {
    type Err = UnknownColourMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColourMapError { name: s.to_string() })
    }
}

/// Turns an escape time into a colour.
///
/// Implementations must be pure: the same escape time always yields the same
/// colour, and points in the set are black.
pub trait MandelbrotColourMap: fmt::Debug + Send + Sync {
    fn map(&self, escape: EscapeTime) -> Colour;

    fn kind(&self) -> MandelbrotColourMapKind;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            MandelbrotColourMapKind::ALL.first(),
            Some(&MandelbrotColourMapKind::default())
        );
    }

    #[test]
    fn parses_cli_names_case_insensitively() {
        assert_eq!(
            "fire".parse::<MandelbrotColourMapKind>(),
            Ok(MandelbrotColourMapKind::FireGradient)
        );
        assert_eq!(
            "Blue-White".parse::<MandelbrotColourMapKind>(),
            Ok(MandelbrotColourMapKind::BlueWhiteGradient)
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "rainbow".parse::<MandelbrotColourMapKind>().unwrap_err();

        assert_eq!(err.name, "rainbow");
        assert_eq!(
            err.to_string(),
            "unknown colour map 'rainbow', expected one of: fire, blue-white"
        );
    }

    #[test]
    fn display_uses_display_name() {
        assert_eq!(
            MandelbrotColourMapKind::BlueWhiteGradient.to_string(),
            "Blue-white gradient"
        );
    }
}

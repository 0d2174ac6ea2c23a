use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER_REAL: f64 = -0.75;
pub const DEFAULT_CENTER_IMAG: f64 = 0.0;
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    NonPositiveZoom { zoom: f64 },
    ZeroMaxIterations,
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveZoom { zoom } => {
                write!(f, "zoom must be positive and finite: {}", zoom)
            }
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for ViewStateError {}

/// The viewport onto the complex plane: a center point, a magnification
/// and the iteration cap used when rendering it.
///
/// `Copy` so that a render always works from its own snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub center_real: f64,
    pub center_imag: f64,
    pub zoom: f64,
    pub max_iterations: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center_real: DEFAULT_CENTER_REAL,
            center_imag: DEFAULT_CENTER_IMAG,
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ViewState {
    pub fn new(
        center_real: f64,
        center_imag: f64,
        zoom: f64,
        max_iterations: u32,
    ) -> Result<Self, ViewStateError> {
        let view = Self {
            center_real,
            center_imag,
            zoom,
            max_iterations,
        };

        view.validate()?;
        Ok(view)
    }

    pub fn validate(&self) -> Result<(), ViewStateError> {
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ViewStateError::NonPositiveZoom { zoom: self.zoom });
        }

        if self.max_iterations == 0 {
            return Err(ViewStateError::ZeroMaxIterations);
        }

        Ok(())
    }
}

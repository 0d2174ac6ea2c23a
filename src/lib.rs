mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use controllers::interactive::data::viewer_config::{ViewerConfig, ViewerConfigError};
pub use controllers::interactive::events::{ViewerEvent, WheelDirection};
pub use controllers::interactive::interaction_state::InteractionState;
pub use controllers::interactive::ports::frame_presenter::FramePresenterPort;
pub use controllers::interactive::view_controller::ViewController;
pub use core::actions::render_frame::ports::pixel_engine::PixelEngine;
pub use core::actions::render_frame::render_pipeline::{RenderMode, RenderPipeline, RenderStats};
pub use core::data::colour::Colour;
pub use core::data::complex::Complex;
pub use core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use core::data::pixel_format::PixelFormat;
pub use core::data::point::Point;
pub use core::data::view_state::{ViewState, ViewStateError};
pub use core::fractals::mandelbrot::algorithm::{EscapeTime, escape_time};
pub use core::fractals::mandelbrot::colour_map::{
    MandelbrotColourMap, MandelbrotColourMapKind, UnknownColourMapError,
};
pub use core::fractals::mandelbrot::escape_time_engine::EscapeTimeEngine;
pub use core::util::pixel_to_complex_coords::{pixel_delta_to_complex_delta, pixel_to_complex_coords};

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, run_gui};

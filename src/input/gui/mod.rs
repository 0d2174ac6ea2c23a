//! Windowed front end: winit for the window and input, pixels for the
//! framebuffer and egui for the control overlay.

mod app;
pub mod pointer_input;

pub use app::{GuiError, run_gui};

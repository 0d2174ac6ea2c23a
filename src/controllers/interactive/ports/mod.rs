//! Port definitions for the interactive controller.
//!
//! Contains the trait the controller hands finished frames to, implemented by
//! the presentation layer.

pub mod frame_presenter;

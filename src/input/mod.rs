//! Input adapters for the viewer.
//!
//! Receive input from the windowing system and translate it into
//! viewer events.

pub mod gui;

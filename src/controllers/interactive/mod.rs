//! Interactive viewer controller.
//!
//! Follows the ports & adapters pattern:
//! - **Input**: `ViewerEvent`s already translated into frame pixel coordinates
//! - **Output**: `FramePresenterPort` receives every completed frame
//! - **Core**: rendering is delegated to the `RenderPipeline` in `core/`

pub mod data;
pub mod events;
pub mod interaction_state;
pub mod ports;
pub mod view_controller;

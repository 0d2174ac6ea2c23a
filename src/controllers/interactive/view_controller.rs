use log::{debug, info};

use crate::controllers::interactive::data::viewer_config::{ViewerConfig, ViewerConfigError};
use crate::controllers::interactive::events::{ViewerEvent, WheelDirection};
use crate::controllers::interactive::interaction_state::InteractionState;
use crate::controllers::interactive::ports::frame_presenter::FramePresenterPort;
use crate::core::actions::render_frame::render_pipeline::{RenderMode, RenderPipeline, RenderStats};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::Point;
use crate::core::data::view_state::{ViewState, ViewStateError};
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapKind;
use crate::core::util::pixel_to_complex_coords::pixel_delta_to_complex_delta;

pub const ZOOM_IN_FACTOR: f64 = 1.1;
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Owns the view, the frame and the drag state, and re-renders synchronously
/// whenever an input changes what should be on screen.
///
/// Event handlers return `true` when a new frame was rendered and handed to
/// the presenter.
pub struct ViewController<P: FramePresenterPort> {
    view: ViewState,
    initial_view: ViewState,
    interaction: InteractionState,
    frame: FrameBuffer,
    pipeline: RenderPipeline,
    presenter: P,
    last_render: RenderStats,
    frames_rendered: u64,
}

impl<P: FramePresenterPort> ViewController<P> {
    /// Builds the viewer and renders the first frame.
    pub fn new(config: ViewerConfig, presenter: P) -> Result<Self, ViewerConfigError> {
        config.validate()?;

        let mut frame = FrameBuffer::new(config.width, config.height)?;
        let pipeline = RenderPipeline::new(config.colour_map, config.render_mode);

        info!(
            "viewer {}x{}, view {:?}, palette '{}', {} rendering",
            config.width,
            config.height,
            config.initial_view,
            config.colour_map,
            config.render_mode
        );

        let last_render = pipeline.render(&mut frame, config.initial_view);

        let mut controller = Self {
            view: config.initial_view,
            initial_view: config.initial_view,
            interaction: InteractionState::Idle,
            frame,
            pipeline,
            presenter,
            last_render,
            frames_rendered: 1,
        };

        controller.log_render();
        controller.presenter.present(&controller.frame);

        Ok(controller)
    }

    pub fn handle_event(&mut self, event: ViewerEvent) -> bool {
        match event {
            ViewerEvent::PointerDown(position) => {
                self.pointer_down(position);
                false
            }
            ViewerEvent::PointerMove(position) => self.pointer_move(position),
            ViewerEvent::PointerUp => {
                self.pointer_up();
                false
            }
            ViewerEvent::Wheel(direction) => {
                self.wheel(direction);
                true
            }
            ViewerEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    pub fn pointer_down(&mut self, position: Point) {
        self.interaction = InteractionState::Dragging {
            last_pointer: position,
        };
    }

    /// Pans by the pointer's movement while dragging. Ignored otherwise.
    pub fn pointer_move(&mut self, position: Point) -> bool {
        let InteractionState::Dragging { last_pointer } = self.interaction else {
            return false;
        };

        let (dx, dy) = position.delta_from(last_pointer);
        let delta = pixel_delta_to_complex_delta(
            dx,
            dy,
            self.frame.width(),
            self.frame.height(),
            self.view.zoom,
        );

        self.view.center_real -= delta.real;
        self.view.center_imag -= delta.imag;
        self.interaction = InteractionState::Dragging {
            last_pointer: position,
        };

        self.render();
        true
    }

    pub fn pointer_up(&mut self) {
        self.interaction = InteractionState::Idle;
    }

    /// Zoom is not clamped: past roughly 1e13 the f64 grid becomes visible.
    pub fn wheel(&mut self, direction: WheelDirection) {
        self.view.zoom *= match direction {
            WheelDirection::Forward => ZOOM_IN_FACTOR,
            WheelDirection::Back => ZOOM_OUT_FACTOR,
        };

        self.render();
    }

    /// Reallocates the frame and renders. Sizes that are non-positive or too
    /// large to allocate are ignored and the current frame is kept.
    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        if let Err(err) = self.frame.resize(width, height) {
            debug!("ignoring resize: {}", err);
            return false;
        }

        info!("resized to {}x{}", width, height);
        self.render();
        true
    }

    pub fn reset_view(&mut self) {
        info!("view reset");
        self.view = self.initial_view;
        self.render();
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ViewStateError> {
        if max_iterations == 0 {
            return Err(ViewStateError::ZeroMaxIterations);
        }

        if max_iterations != self.view.max_iterations {
            info!("max iterations {} -> {}", self.view.max_iterations, max_iterations);
            self.view.max_iterations = max_iterations;
            self.render();
        }

        Ok(())
    }

    pub fn set_colour_map(&mut self, kind: MandelbrotColourMapKind) {
        if kind == self.pipeline.colour_map_kind() {
            return;
        }

        info!("colour map '{}'", kind);
        self.pipeline.set_colour_map(kind);
        self.render();
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKind {
        self.pipeline.colour_map_kind()
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        self.pipeline.mode()
    }

    #[must_use]
    pub fn last_render(&self) -> RenderStats {
        self.last_render
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn render(&mut self) {
        self.last_render = self.pipeline.render(&mut self.frame, self.view);
        self.frames_rendered += 1;
        self.log_render();
        self.presenter.present(&self.frame);
    }

    fn log_render(&self) {
        debug!(
            "frame {} ({}x{}) in {:?}: center ({}, {}), zoom {}, max iterations {}",
            self.frames_rendered,
            self.last_render.width,
            self.last_render.height,
            self.last_render.duration,
            self.view.center_real,
            self.view.center_imag,
            self.view.zoom,
            self.view.max_iterations
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_format::PixelFormat;

    const EPSILON: f64 = 1e-12;

    #[derive(Debug, Default)]
    struct RecordingPresenter {
        frames: Vec<Vec<u8>>,
        sizes: Vec<(u32, u32)>,
    }

    impl FramePresenterPort for RecordingPresenter {
        fn present(&mut self, frame: &FrameBuffer) {
            self.frames.push(frame.to_display_bytes(PixelFormat::Rgba8));
            self.sizes.push((frame.width(), frame.height()));
        }
    }

    fn create_controller(view: ViewState, width: i32, height: i32) -> ViewController<RecordingPresenter> {
        let config = ViewerConfig {
            width,
            height,
            initial_view: view,
            colour_map: MandelbrotColourMapKind::FireGradient,
            render_mode: RenderMode::ParallelRows,
        };

        ViewController::new(config, RecordingPresenter::default()).unwrap()
    }

    fn origin_controller() -> ViewController<RecordingPresenter> {
        create_controller(ViewState::new(0.0, 0.0, 1.0, 100).unwrap(), 200, 200)
    }

    #[test]
    fn test_construction_renders_and_presents_once() {
        let controller = create_controller(ViewState::default(), 40, 30);

        assert_eq!(controller.frames_rendered(), 1);
        assert_eq!(controller.presenter().frames.len(), 1);
        assert_eq!(controller.presenter().sizes, vec![(40, 30)]);
        assert_eq!(controller.interaction(), InteractionState::Idle);
        assert_eq!(controller.view(), ViewState::default());
    }

    #[test]
    fn test_construction_rejects_invalid_config() {
        let config = ViewerConfig {
            height: -3,
            ..ViewerConfig::default()
        };

        let result = ViewController::new(config, RecordingPresenter::default());

        assert!(matches!(result, Err(ViewerConfigError::FrameBuffer(_))));
    }

    #[test]
    fn test_drag_moves_center_by_pixel_scale() {
        let mut controller = origin_controller();

        assert!(!controller.handle_event(ViewerEvent::PointerDown(Point::new(100, 100))));
        assert!(controller.handle_event(ViewerEvent::PointerMove(Point::new(110, 100))));

        // 10 * (4.0 / 1.0) / 200
        assert!((controller.view().center_real - -0.2).abs() < EPSILON);
        assert_eq!(controller.view().center_imag, 0.0);
        assert_eq!(
            controller.interaction().last_pointer(),
            Some(Point::new(110, 100))
        );
    }

    #[test]
    fn test_drag_vertical_uses_height() {
        let mut controller = create_controller(ViewState::new(0.0, 0.0, 2.0, 50).unwrap(), 200, 100);

        controller.pointer_down(Point::new(50, 50));
        controller.pointer_move(Point::new(50, 40));

        // -10 * (4.0 / 2.0) / 100
        assert!((controller.view().center_imag - 0.2).abs() < EPSILON);
        assert_eq!(controller.view().center_real, 0.0);
    }

    #[test]
    fn test_consecutive_moves_accumulate_from_last_pointer() {
        let mut controller = origin_controller();

        controller.pointer_down(Point::new(100, 100));
        controller.pointer_move(Point::new(105, 100));
        controller.pointer_move(Point::new(110, 100));

        assert!((controller.view().center_real - -0.2).abs() < EPSILON);
        assert_eq!(controller.frames_rendered(), 3);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut controller = origin_controller();

        assert!(!controller.handle_event(ViewerEvent::PointerMove(Point::new(150, 20))));

        assert_eq!(controller.view().center_real, 0.0);
        assert_eq!(controller.frames_rendered(), 1);
    }

    #[test]
    fn test_pointer_up_ends_drag() {
        let mut controller = origin_controller();

        controller.handle_event(ViewerEvent::PointerDown(Point::new(10, 10)));
        assert!(controller.interaction().is_dragging());

        assert!(!controller.handle_event(ViewerEvent::PointerUp));
        assert_eq!(controller.interaction(), InteractionState::Idle);

        controller.handle_event(ViewerEvent::PointerMove(Point::new(90, 90)));
        assert_eq!(controller.view().center_real, 0.0);
    }

    #[test]
    fn test_pointer_down_does_not_render() {
        let mut controller = origin_controller();

        controller.handle_event(ViewerEvent::PointerDown(Point::new(1, 1)));

        assert_eq!(controller.frames_rendered(), 1);
        assert_eq!(controller.presenter().frames.len(), 1);
    }

    #[test]
    fn test_wheel_forward_zooms_in() {
        let mut controller = origin_controller();

        assert!(controller.handle_event(ViewerEvent::Wheel(WheelDirection::Forward)));

        assert!((controller.view().zoom - 1.1).abs() < EPSILON);
    }

    #[test]
    fn test_wheel_back_zooms_out() {
        let mut controller = origin_controller();

        controller.handle_event(ViewerEvent::Wheel(WheelDirection::Back));

        assert!((controller.view().zoom - 0.9).abs() < EPSILON);
    }

    #[test]
    fn test_ten_forward_scrolls_compound() {
        let mut controller = origin_controller();

        for _ in 0..10 {
            controller.handle_event(ViewerEvent::Wheel(WheelDirection::Forward));
        }

        assert!((controller.view().zoom - 1.1f64.powi(10)).abs() < 1e-9);
        assert!((controller.view().zoom - 2.5937).abs() < 1e-4);
        assert_eq!(controller.frames_rendered(), 11);
    }

    #[test]
    fn test_wheel_while_dragging_keeps_drag() {
        let mut controller = origin_controller();

        controller.pointer_down(Point::new(20, 20));
        controller.handle_event(ViewerEvent::Wheel(WheelDirection::Forward));

        assert!(controller.interaction().is_dragging());
    }

    #[test]
    fn test_resize_reallocates_and_renders() {
        let mut controller = origin_controller();

        assert!(controller.handle_event(ViewerEvent::Resize {
            width: 64,
            height: 32
        }));

        assert_eq!(controller.frame().len(), 64 * 32);
        assert_eq!(controller.presenter().sizes.last(), Some(&(64, 32)));
        assert_eq!(controller.presenter().frames.last().map(Vec::len), Some(64 * 32 * 4));
    }

    #[test]
    fn test_resize_to_non_positive_is_ignored() {
        let mut controller = origin_controller();

        assert!(!controller.handle_event(ViewerEvent::Resize { width: 0, height: 100 }));
        assert!(!controller.handle_event(ViewerEvent::Resize { width: 100, height: -1 }));

        assert_eq!(controller.frame().width(), 200);
        assert_eq!(controller.frame().height(), 200);
        assert_eq!(controller.frames_rendered(), 1);
    }

    #[test]
    fn test_drag_across_extreme_coordinates_does_not_overflow() {
        let mut controller = origin_controller();

        controller.pointer_down(Point::new(i32::MIN, i32::MIN));
        assert!(controller.pointer_move(Point::new(i32::MAX, i32::MAX)));

        assert!(controller.view().center_real.is_finite());
        assert!(controller.view().center_real < 0.0);
        assert!(controller.view().center_imag < 0.0);
    }

    #[test]
    fn test_resize_too_large_to_allocate_is_ignored() {
        let mut controller = origin_controller();
        let before = controller.frame().clone();

        assert!(!controller.handle_event(ViewerEvent::Resize {
            width: i32::MAX,
            height: i32::MAX
        }));

        assert_eq!(controller.frame(), &before);
        assert_eq!(controller.frames_rendered(), 1);
        assert_eq!(controller.presenter().sizes, vec![(200, 200)]);
    }

    #[test]
    fn test_render_mode_follows_config() {
        let config = ViewerConfig {
            width: 20,
            height: 10,
            render_mode: RenderMode::Serial,
            ..ViewerConfig::default()
        };

        let controller = ViewController::new(config, RecordingPresenter::default()).unwrap();

        assert_eq!(controller.render_mode(), RenderMode::Serial);
    }

    #[test]
    fn test_resize_keeps_drag_state() {
        let mut controller = origin_controller();

        controller.pointer_down(Point::new(5, 5));
        controller.resize(100, 100);

        assert!(controller.interaction().is_dragging());
    }

    #[test]
    fn test_unchanged_view_presents_identical_frames() {
        let mut controller = origin_controller();

        controller.handle_event(ViewerEvent::PointerDown(Point::new(10, 10)));
        controller.handle_event(ViewerEvent::PointerMove(Point::new(10, 10)));

        let frames = &controller.presenter().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], frames[1]);
    }

    #[test]
    fn test_reset_view_restores_initial_view() {
        let mut controller = origin_controller();
        let initial = controller.view();

        controller.wheel(WheelDirection::Forward);
        controller.pointer_down(Point::new(0, 0));
        controller.pointer_move(Point::new(30, 30));
        controller.reset_view();

        assert_eq!(controller.view(), initial);
        assert_eq!(controller.frames_rendered(), 4);
    }

    #[test]
    fn test_set_max_iterations() {
        let mut controller = origin_controller();

        assert!(controller.set_max_iterations(250).is_ok());
        assert_eq!(controller.view().max_iterations, 250);
        assert_eq!(controller.frames_rendered(), 2);

        // unchanged value does not re-render
        assert!(controller.set_max_iterations(250).is_ok());
        assert_eq!(controller.frames_rendered(), 2);
    }

    #[test]
    fn test_set_max_iterations_rejects_zero() {
        let mut controller = origin_controller();

        assert_eq!(
            controller.set_max_iterations(0),
            Err(ViewStateError::ZeroMaxIterations)
        );
        assert_eq!(controller.view().max_iterations, 100);
        assert_eq!(controller.frames_rendered(), 1);
    }

    #[test]
    fn test_set_colour_map_rerenders_only_on_change() {
        let mut controller = origin_controller();

        controller.set_colour_map(MandelbrotColourMapKind::FireGradient);
        assert_eq!(controller.frames_rendered(), 1);

        controller.set_colour_map(MandelbrotColourMapKind::BlueWhiteGradient);
        assert_eq!(controller.frames_rendered(), 2);
        assert_eq!(
            controller.colour_map_kind(),
            MandelbrotColourMapKind::BlueWhiteGradient
        );

        let frames = &controller.presenter().frames;
        assert_ne!(frames[0], frames[1]);
    }

    #[test]
    fn test_last_render_tracks_frame_size() {
        let mut controller = origin_controller();

        controller.resize(30, 20);

        let stats = controller.last_render();
        assert_eq!((stats.width, stats.height), (30, 20));
    }
}

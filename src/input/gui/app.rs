//! Main GUI application loop.

use std::error::Error;
use std::fmt;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, info};
use winit::{
    dpi::LogicalSize,
    error::{EventLoopError, OsError},
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::data::viewer_config::{ViewerConfig, ViewerConfigError};
use crate::controllers::interactive::view_controller::ViewController;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapKind;
use crate::input::gui::pointer_input::{GuiAction, PointerInput, resize_action};
use crate::presenters::pixels::presenter::PixelsPresenter;

const MAX_ITERATIONS_SLIDER_LIMIT: u32 = 5000;

#[derive(Debug)]
pub enum GuiError {
    EventLoop(EventLoopError),
    Window(OsError),
    Surface(pixels::Error),
    Config(ViewerConfigError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop error: {}", err),
            Self::Window(err) => write!(f, "could not create window: {}", err),
            Self::Surface(err) => write!(f, "could not create pixels surface: {}", err),
            Self::Config(err) => write!(f, "{}", err),
        }
    }
}

impl Error for GuiError {}

impl From<EventLoopError> for GuiError {
    fn from(err: EventLoopError) -> Self {
        Self::EventLoop(err)
    }
}

impl From<OsError> for GuiError {
    fn from(err: OsError) -> Self {
        Self::Window(err)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(err: pixels::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<ViewerConfigError> for GuiError {
    fn from(err: ViewerConfigError) -> Self {
        Self::Config(err)
    }
}

/// Settings chosen in the overlay during one egui pass.
struct PanelChanges {
    max_iterations: u32,
    colour_map: MandelbrotColourMapKind,
    reset: bool,
}

struct GuiApp {
    controller: ViewController<PixelsPresenter>,
    pointer_input: PointerInput,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    fn new(window: &'static Window, event_loop: &EventLoop<()>, config: ViewerConfig) -> Result<Self, GuiError> {
        let scale_factor = window.scale_factor();
        let size = window.inner_size();

        // The frame buffer matches the physical window size, not the logical size asked for.
        let config = ViewerConfig {
            width: i32::try_from(size.width).unwrap_or(config.width),
            height: i32::try_from(size.height).unwrap_or(config.height),
            ..config
        };

        let presenter = PixelsPresenter::new(window)?;
        let controller = ViewController::new(config, presenter)?;

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            controller,
            pointer_input: PointerInput::default(),
            egui_ctx,
            egui_state,
        })
    }

    fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.controller.presenter_mut().render(egui_output, &self.egui_ctx)
    }

    fn resize(&mut self, width: u32, height: u32) -> bool {
        self.controller.presenter_mut().resize_surface(width, height);
        self.apply(resize_action(width, height))
    }

    /// Returns true when a new frame needs to reach the screen.
    fn apply(&mut self, action: GuiAction) -> bool {
        match action {
            GuiAction::Viewer(event) => self.controller.handle_event(event),
            GuiAction::ResetView => {
                self.controller.reset_view();
                true
            }
        }
    }

    /// Routes window input to the viewer unless egui consumed it.
    fn handle_input(&mut self, event: &WindowEvent, egui_consumed: bool) -> bool {
        let action = match event {
            WindowEvent::CursorMoved { position, .. } => {
                let action = self.pointer_input.cursor_moved(*position);
                (!egui_consumed || self.controller.interaction().is_dragging()).then_some(action)
            }
            WindowEvent::MouseInput { state, button, .. } if !egui_consumed => {
                self.pointer_input.mouse_button(*button, *state)
            }
            // Over the overlay the left button can only end a drag.
            WindowEvent::MouseInput { button, .. } if *button == winit::event::MouseButton::Left => {
                self.controller.pointer_up();
                None
            }
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                self.pointer_input.mouse_wheel(*delta)
            }
            WindowEvent::KeyboardInput { event, .. } if !egui_consumed && !event.repeat => {
                match event.physical_key {
                    PhysicalKey::Code(key_code) => self.pointer_input.key(key_code, event.state),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            _ => None,
        };

        action.is_some_and(|action| self.apply(action))
    }

    fn update_ui(&mut self, window: &Window) -> (egui::FullOutput, PanelChanges) {
        let raw_input = self.egui_state.take_egui_input(window);

        let view = self.controller.view();
        let stats = self.controller.last_render();
        let frames_rendered = self.controller.frames_rendered();
        let render_mode = self.controller.render_mode();
        let mut changes = PanelChanges {
            max_iterations: view.max_iterations,
            colour_map: self.controller.colour_map_kind(),
            reset: false,
        };

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 220.0])
                .show(ctx, |ui| {
                    ui.label(format!("Center: {:.6} {:+.6}i", view.center_real, view.center_imag));
                    ui.label(format!("Zoom: {:.3}x", view.zoom));
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Max iterations:");
                        ui.add(
                            egui::Slider::new(
                                &mut changes.max_iterations,
                                1..=MAX_ITERATIONS_SLIDER_LIMIT,
                            )
                            .logarithmic(true),
                        );
                    });

                    ui.horizontal(|ui| {
                        ui.label("Colour map:");
                        egui::ComboBox::from_id_source("mandelbrot_colour_map")
                            .selected_text(changes.colour_map.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in MandelbrotColourMapKind::ALL {
                                    ui.selectable_value(
                                        &mut changes.colour_map,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    if ui.button("Reset view (R)").clicked() {
                        changes.reset = true;
                    }

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", stats.width, stats.height));
                    ui.label(format!("Frames rendered: {} ({})", frames_rendered, render_mode));
                    ui.label(format!("Last render: {} ms", stats.duration.as_millis()));
                });
        });

        (output, changes)
    }

    fn apply_panel_changes(&mut self, changes: PanelChanges) {
        if let Err(err) = self.controller.set_max_iterations(changes.max_iterations) {
            error!("rejected iteration limit: {}", err);
        }

        self.controller.set_colour_map(changes.colour_map);

        if changes.reset {
            self.controller.reset_view();
        }
    }

    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}

/// Opens the viewer window and runs until it is closed.
pub fn run_gui(config: ViewerConfig) -> Result<(), GuiError> {
    config.validate()?;

    let event_loop = EventLoop::new()?;

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Viewer")
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = GuiApp::new(window, &event_loop, config)?;
    let mut redraw_pending = true;

    info!("viewer window open");

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

            if egui_repaint {
                redraw_pending = true;
            }

            match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    redraw_pending = false;

                    let (egui_output, changes) = app.update_ui(window);
                    app.apply_panel_changes(changes);

                    app.egui_state
                        .handle_platform_output(window, egui_output.platform_output.clone());

                    if egui_output
                        .viewport_output
                        .values()
                        .any(|v| v.repaint_delay.is_zero())
                    {
                        redraw_pending = true;
                    }

                    if let Err(err) = app.render(egui_output) {
                        error!("render error: {}", err);
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    app.resize(size.width, size.height);
                    redraw_pending = true;
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                    let size = window.inner_size();
                    app.resize(size.width, size.height);
                    redraw_pending = true;
                }
                _ => {
                    if app.handle_input(event, egui_consumed) {
                        redraw_pending = true;
                    }
                }
            }
        }
        Event::AboutToWait => {
            if redraw_pending {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    info!("viewer closed after {} frames", app.controller.frames_rendered());
    Ok(())
}

use crate::controllers::interactive::ports::frame_presenter::FramePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::pixel_format::PixelFormat;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::{debug, warn};
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

/// Shows finished frames in a window through a `pixels` surface, with the
/// egui overlay drawn on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    buffer_width: u32,
    buffer_height: u32,
}

impl FramePresenterPort for PixelsPresenter {
    fn present(&mut self, frame: &FrameBuffer) {
        if frame.width() != self.buffer_width || frame.height() != self.buffer_height {
            if let Err(err) = self.pixels.resize_buffer(frame.width(), frame.height()) {
                warn!(
                    "could not resize pixel buffer to {}x{}: {}",
                    frame.width(),
                    frame.height(),
                    err
                );
                return;
            }

            self.buffer_width = frame.width();
            self.buffer_height = frame.height();
        }

        if let Err(err) = frame.write_display_bytes(PixelFormat::Rgba8, self.pixels.frame_mut()) {
            warn!("dropping frame: {}", err);
        }
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            buffer_width: size.width,
            buffer_height: size.height,
        })
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    /// Resizes the window surface. The pixel buffer follows the next
    /// presented frame.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        match self.pixels.resize_surface(width, height) {
            Ok(()) => {
                debug!("surface resized to {}x{}", width, height);
                self.surface_width = width;
                self.surface_height = height;
            }
            Err(err) => warn!("could not resize surface to {}x{}: {}", width, height, err),
        }
    }
}

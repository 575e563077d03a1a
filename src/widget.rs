use crate::geometry::Point2;
use crate::graphics::{clear, draw_circle_outline, draw_line, plot_point};
use crate::state::{AppState, SimulationState};
use druid::text::FontFamily;
use druid::widget::prelude::*;
use druid::{
    commands,
    piet::{InterpolationMode, Text, TextLayout, TextLayoutBuilder},
    Color, RenderContext, Widget,
};
use std::time::Instant;

const FRAME_INTERVAL: std::time::Duration = std::time::Duration::from_millis(16);

const BACKGROUND: Color = Color::rgb8(240, 248, 255); // alice blue
const CIRCLE_COLOR: Color = Color::BLACK;
const TRIANGLE_COLOR: Color = Color::rgb8(255, 0, 0);
const POINT_COLOR: Color = Color::rgb8(0, 0, 255);

/// Chaos-game widget: owns the simulation and repaints the accumulated
/// point cloud once per timer tick.
pub struct ChaosWidget {
    sim: SimulationState,
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl ChaosWidget {
    pub fn new(sim: SimulationState) -> Self {
        ChaosWidget {
            sim,
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        }
    }

    /// World coordinates keep the triangle's apex pointing up; the pixel
    /// buffer's y axis points down, so plotting flips y.
    fn to_screen(&self, p: Point2) -> Point2 {
        [p[0], self.sim.world.height - p[1]]
    }
}

impl Widget<AppState> for ChaosWidget {
    /// Handle events for the chaos-game widget
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        match event {
            Event::WindowConnected => {
                ctx.request_timer(FRAME_INTERVAL);
                // Request focus to receive keyboard events
                ctx.request_focus();
            }
            Event::Timer(_) => {
                if !data.paused {
                    data.iterations += self.sim.advance_batch() as u64;
                    ctx.request_paint();
                }
                ctx.request_timer(FRAME_INTERVAL);
            }
            Event::KeyDown(key_event) => {
                if let druid::keyboard_types::Key::Character(s) = &key_event.key {
                    match s.as_str() {
                        "d" | "D" => {
                            data.debug = !data.debug;
                            ctx.request_paint();
                        }
                        "p" | "P" => {
                            data.paused = !data.paused;
                            ctx.request_paint();
                        }
                        "q" | "Q" => {
                            // Submit the QUIT_APP command to exit the application
                            ctx.submit_command(commands::QUIT_APP);
                        }
                        "r" | "R" => {
                            if !data.paused {
                                self.sim.reset();
                                data.iterations = 0;
                                ctx.request_paint();
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        _event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &AppState, _data: &AppState, _env: &Env) {
    }

    /// Determines the layout constraints for the chaos-game widget
    fn layout(
        &mut self,
        _layout_ctx: &mut LayoutCtx,
        bc: &BoxConstraints,
        _data: &AppState,
        _env: &Env,
    ) -> Size {
        bc.max()
    }

    /// Paint the circle, the inscribed triangle, and the point cloud
    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppState, _env: &Env) {
        // Update FPS calculation
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }

        let size = ctx.size();
        let width = size.width as usize;
        let height = size.height as usize;

        // Rebuild the pixel buffer from the accumulated simulation state.
        let mut pixel_data = vec![0u8; width * height * 4];
        clear(&mut pixel_data, BACKGROUND);

        let world = &self.sim.world;
        let center = self.to_screen(world.center());
        draw_circle_outline(
            center,
            world.radius(),
            world.thickness,
            &mut pixel_data,
            width,
            height,
            CIRCLE_COLOR,
        );

        let triangle = self.sim.triangle;
        let a = self.to_screen(triangle.a);
        let b = self.to_screen(triangle.b);
        let c = self.to_screen(triangle.c);
        for (from, to) in [(a, b), (b, c), (c, a)] {
            draw_line(
                from[0],
                from[1],
                to[0],
                to[1],
                &mut pixel_data,
                width,
                height,
                TRIANGLE_COLOR,
            );
        }

        for &p in &self.sim.points {
            let p = self.to_screen(p);
            plot_point(
                p,
                world.thickness,
                &mut pixel_data,
                width,
                height,
                POINT_COLOR,
            );
        }

        // Create and draw the image
        let image = ctx
            .make_image(
                width,
                height,
                &pixel_data,
                druid::piet::ImageFormat::RgbaSeparate,
            )
            .unwrap();
        ctx.draw_image(&image, size.to_rect(), InterpolationMode::NearestNeighbor);

        // Add debug info if debug mode is enabled
        if data.debug {
            let text = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::BLACK)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 10.0));

            // Draw iteration count
            let text = format!("Iterations: {}", data.iterations);
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::BLACK)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 30.0));

            // Draw the current orbit point and where it last moved
            let p = self.sim.orbit.current();
            let vertex = self
                .sim
                .orbit
                .last_vertex()
                .map(|v| ["A", "B", "C"][v])
                .unwrap_or("-");
            let inside = self.sim.triangle.contains(p);
            let text = format!(
                "Point: ({:.1}, {:.1}) vertex {} inside {}",
                p[0], p[1], vertex, inside
            );
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::BLACK)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 50.0));

            // Draw FPS
            let text = format!("FPS: {:.2}", self.fps);
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 12.0)
                .text_color(Color::BLACK)
                .build()
                .unwrap();
            ctx.draw_text(&text_layout, (10.0, 70.0));
        }

        // Display 'Paused' if the simulation is paused
        if data.paused {
            // Draw a semi-transparent overlay
            let overlay_color = Color::rgba8(0, 0, 0, 150);
            ctx.fill(size.to_rect(), &overlay_color);

            // Draw 'Paused' text
            let text = "Paused";
            let text_layout = ctx
                .text()
                .new_text_layout(text)
                .font(FontFamily::SYSTEM_UI, 36.0)
                .default_attribute(druid::piet::FontWeight::BOLD)
                .text_color(Color::WHITE)
                .build()
                .unwrap();
            let text_size = text_layout.size();
            let pos = (
                (size.width - text_size.width) / 2.0,
                (size.height - text_size.height) / 2.0,
            );
            ctx.draw_text(&text_layout, pos);
        }
    }
}

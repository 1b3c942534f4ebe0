// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

//! Fixed-point arc and beam rasterization, and the astronomical watch face
//! built on it.
//!
//! The drawing core ([`arc`], [`project`], [`beam`]) writes straight into any
//! [`Surface`] using integer trigonometry from a [`TrigSource`]. [`Face`]
//! composes a full face from supplied sky angles and clock time, and
//! [`Orrery`] shows it in a window.

pub mod arc;
pub mod beam;
pub mod command;
pub mod config;
pub mod error;
pub mod face;
pub mod geometry;
pub mod log;
pub mod project;
pub mod surface;
pub mod trig;

// External crate imports
use pixels::{Pixels, SurfaceTexture};

// Standard library imports
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Instant;

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

pub use arc::{draw_arc_ccw, draw_arc_cw};
pub use beam::{beam_polygon, draw_beam, BeamPolygon};
pub use config::{Color, FaceConfig, Theme};
pub use error::{Error, Result};
pub use face::{BodyAngles, ClockTime, Face, FaceCommand, SkyState};
pub use geometry::{Point, Rect};
pub use project::project_to_edge;
pub use surface::{Canvas, Surface};
pub use trig::{Angle, FixedTrig, FloatTrig, TrigSource, FULL_TURN, TRIG_MAX_RATIO};

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Windowed watch face. Holds the sky until the window takes over.
#[derive(Debug, Clone)]
pub struct Orrery {
    config: FaceConfig,
    sky: SkyState,
}

impl Orrery {
    pub fn new(config: FaceConfig) -> Self {
        Self {
            config,
            sky: SkyState::default(),
        }
    }

    pub fn sky(&self) -> &SkyState {
        &self.sky
    }

    pub fn apply(&mut self, command: FaceCommand) {
        self.sky.apply(command);
    }

    pub fn show(&mut self) -> Result<()> {
        self.run_window(None)
    }

    pub fn show_with_commands(&mut self, receiver: Receiver<FaceCommand>) -> Result<()> {
        self.run_window(Some(receiver))
    }

    fn run_window(&self, receiver: Option<Receiver<FaceCommand>>) -> Result<()> {
        let bounds = self.config.bounds();
        let (face_width, face_height) = (bounds.width.max(1) as u32, bounds.height.max(1) as u32);
        let scale = self.config.window_scale.max(1);

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                (face_width * scale) as f64,
                (face_height * scale) as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)?;

        let window = Arc::new(window);

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(face_width, face_height, surface_texture)?;
        log::debug!(face_width, face_height, scale, "window opened");

        let face = Face::new(self.config.clone());
        let trig = FixedTrig::new();
        let mut sky = self.sky;
        let utc_offset = self.config.utc_offset_minutes;
        let interval = self.config.redraw_interval;
        let mut last_frame = Instant::now();
        window.request_redraw();

        let window_clone = window.clone();
        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::WaitUntil(last_frame + interval));
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        log::debug!("close requested");
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                            log::warn!("surface resize failed: {err}");
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        if let Some(ref receiver) = receiver {
                            drain_commands(receiver, &mut sky);
                        }

                        let frame = pixels.frame_mut();
                        let mut canvas =
                            Canvas::new(frame, face_width as usize, face_height as usize);
                        face.render(&mut canvas, &trig, &sky, ClockTime::now(utc_offset));
                        if let Err(err) = pixels.render() {
                            log::warn!("render failed: {err}");
                            window_target.exit();
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= interval {
                        window_clone.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

/// Apply every pending command without blocking
pub fn drain_commands(receiver: &Receiver<FaceCommand>, sky: &mut SkyState) {
    while let Ok(command) = receiver.try_recv() {
        log::debug!(?command, "sky update");
        sky.apply(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn drained_commands_reach_the_sky() {
        let (sender, receiver) = mpsc::channel();
        sender.send(FaceCommand::SetSun(Angle::DEG_90)).unwrap();
        sender.send(FaceCommand::SetSunset(Angle::DEG_180)).unwrap();
        sender.send(FaceCommand::SetSun(Angle::DEG_45)).unwrap();

        let mut sky = SkyState::default();
        drain_commands(&receiver, &mut sky);
        assert_eq!(sky.bodies.map(|b| b.sun), Some(Angle::DEG_45));
        assert_eq!(sky.sunset, Angle::DEG_180);

        drop(sender);
        drain_commands(&receiver, &mut sky);
    }

    #[test]
    fn orrery_collects_updates_before_showing() {
        let mut orrery = Orrery::new(FaceConfig::default());
        assert_eq!(orrery.sky().bodies, None);
        orrery.apply(FaceCommand::SetVenus(Angle(1234)));
        assert_eq!(orrery.sky().bodies.map(|b| b.venus), Some(Angle(1234)));
    }
}

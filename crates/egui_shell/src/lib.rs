//! A single-window [`egui`] shell: one frame loop, one window, one OpenGL context.
//!
//! The loop itself ([`FrameLoop`]) is backend agnostic. It is driven by an
//! [`EventSource`], a [`PlatformAdapter`] that turns events into [`egui::RawInput`],
//! a [`RenderAdapter`] that turns [`DrawData`] into pixels, and a [`Presenter`].
//!
//! With the `sdl2` feature (on by default) you get the real thing:
//! [`GlWindow`](native::GlWindow), [`Sdl2Platform`](native::Sdl2Platform) and
//! [`GlowRenderer`](native::GlowRenderer), all wired together by [`run_native`].
//!
//! The [`headless`] backend runs the same loop without a display, which is what the tests use.
//!
//! ## Feature flags
//! * `sdl2`: SDL2 window and input, `egui_glow` rendering.

mod draw_data;
mod error;
mod frame_loop;
pub mod headless;
mod options;

#[cfg(feature = "sdl2")]
pub mod native;

pub use draw_data::{DrawData, DrawStats};
pub use error::SetupError;
pub use frame_loop::{
    EventSource, FrameLoop, PlatformAdapter, Presenter, RenderAdapter, TerminationEvent,
};
pub use options::{GlProfile, ShellOptions};

pub use egui;

#[cfg(feature = "sdl2")]
pub use native::run_native;

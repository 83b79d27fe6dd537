//! A backend without a display: scripted events in, draw statistics out.
//!
//! Runs the exact same [`FrameLoop`](crate::FrameLoop) as the native backend,
//! which makes it useful for tests and for checking what a UI emits.
//!
//! ```
//! use egui_shell::FrameLoop;
//! use egui_shell::headless::{
//!     CountingPresenter, HeadlessEvent, HeadlessPlatform, RecordingRenderer, ScriptedEvents,
//! };
//!
//! let events = ScriptedEvents::new([vec![], vec![HeadlessEvent::CloseRequested]]);
//! let frame_loop = FrameLoop::new(
//!     CountingPresenter::default(),
//!     events,
//!     egui::Context::default(),
//!     HeadlessPlatform::new([800, 600]),
//!     RecordingRenderer::default(),
//! );
//! let frames = frame_loop.run(|ctx| {
//!     egui::CentralPanel::default().show(ctx, |ui| ui.label("Hello"));
//! });
//! assert_eq!(frames, 2);
//! ```

use std::collections::{HashSet, VecDeque};

use crate::{DrawData, DrawStats, EventSource, PlatformAdapter, Presenter, RenderAdapter};

/// Events understood by [`HeadlessPlatform`].
#[derive(Clone, Debug, PartialEq)]
pub enum HeadlessEvent {
    Quit,
    CloseRequested,

    /// Forwarded to egui as-is.
    Input(egui::Event),
}

impl crate::TerminationEvent for HeadlessEvent {
    fn is_termination(&self) -> bool {
        matches!(self, Self::Quit | Self::CloseRequested)
    }
}

// ----------------------------------------------------------------------------

/// Replays one batch of events per polling pass.
///
/// Once the script runs out every pass is empty.
#[derive(Default)]
pub struct ScriptedEvents {
    batches: VecDeque<Vec<HeadlessEvent>>,
    pending: VecDeque<HeadlessEvent>,
    loaded: bool,
}

impl ScriptedEvents {
    /// One entry per frame.
    pub fn new(batches: impl IntoIterator<Item = Vec<HeadlessEvent>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
            pending: VecDeque::new(),
            loaded: false,
        }
    }
}

impl EventSource for ScriptedEvents {
    type Event = HeadlessEvent;

    fn poll_event(&mut self) -> Option<HeadlessEvent> {
        if !self.loaded {
            self.pending = self.batches.pop_front().unwrap_or_default().into();
            self.loaded = true;
        }
        let event = self.pending.pop_front();
        if event.is_none() {
            // This pass is drained, the next poll starts the next batch.
            self.loaded = false;
        }
        event
    }
}

// ----------------------------------------------------------------------------

/// A [`PlatformAdapter`] with a fixed screen and a fixed time step.
pub struct HeadlessPlatform {
    raw_input: egui::RawInput,
    screen_size_px: [u32; 2],
    pixels_per_point: f32,

    /// Seconds per frame.
    time_step: f64,
    frame_nr: u64,

    forwarded_events: usize,
}

impl HeadlessPlatform {
    pub fn new(screen_size_px: [u32; 2]) -> Self {
        Self {
            raw_input: egui::RawInput::default(),
            screen_size_px,
            pixels_per_point: 1.0,
            time_step: 1.0 / 60.0,
            frame_nr: 0,
            forwarded_events: 0,
        }
    }

    /// Screen scale, as reported by a HiDPI display. The screen rect shrinks accordingly.
    #[inline]
    pub fn with_pixels_per_point(mut self, pixels_per_point: f32) -> Self {
        self.pixels_per_point = pixels_per_point;
        self
    }

    /// How much [`egui::RawInput::time`] advances per frame.
    #[inline]
    pub fn with_time_step(mut self, seconds: f64) -> Self {
        self.time_step = seconds;
        self
    }

    /// Total number of events handed to [`PlatformAdapter::handle_event`].
    pub fn forwarded_events(&self) -> usize {
        self.forwarded_events
    }
}

impl PlatformAdapter<HeadlessEvent> for HeadlessPlatform {
    fn handle_event(&mut self, event: &HeadlessEvent) {
        self.forwarded_events += 1;
        if let HeadlessEvent::Input(event) = event {
            self.raw_input.events.push(event.clone());
        }
    }

    fn take_egui_input(&mut self) -> egui::RawInput {
        let [width, height] = self.screen_size_px;
        let size_in_points = egui::vec2(width as f32, height as f32) / self.pixels_per_point;

        self.raw_input.time = Some(self.frame_nr as f64 * self.time_step);
        self.raw_input.screen_rect = Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            size_in_points,
        ));
        if let Some(viewport) = self.raw_input.viewports.get_mut(&egui::ViewportId::ROOT) {
            viewport.native_pixels_per_point = Some(self.pixels_per_point);
        }
        self.frame_nr += 1;
        self.raw_input.take()
    }

    fn screen_size_in_pixels(&self) -> [u32; 2] {
        self.screen_size_px
    }
}

// ----------------------------------------------------------------------------

/// A [`RenderAdapter`] that records what it was asked to draw.
#[derive(Default)]
pub struct RecordingRenderer {
    frames: Vec<DrawStats>,
    begun_frames: usize,

    /// Texture ids currently uploaded.
    textures: HashSet<egui::TextureId>,
}

impl RecordingRenderer {
    /// Stats of every rendered frame, oldest first.
    pub fn frames(&self) -> &[DrawStats] {
        &self.frames
    }

    /// Number of times [`RenderAdapter::begin_frame`] was called.
    pub fn begun_frames(&self) -> usize {
        self.begun_frames
    }

    /// Number of textures that have been set and not yet freed.
    pub fn live_textures(&self) -> usize {
        self.textures.len()
    }
}

impl RenderAdapter for RecordingRenderer {
    fn begin_frame(&mut self, _screen_size_px: [u32; 2]) {
        self.begun_frames += 1;
    }

    fn render(&mut self, draw_data: &DrawData) {
        for (id, _) in &draw_data.textures_delta.set {
            self.textures.insert(*id);
        }
        self.frames.push(draw_data.stats());
        for id in &draw_data.textures_delta.free {
            self.textures.remove(id);
        }
    }
}

// ----------------------------------------------------------------------------

/// A [`Presenter`] that only counts.
#[derive(Default)]
pub struct CountingPresenter {
    presented: u64,
}

impl CountingPresenter {
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Presenter for CountingPresenter {
    fn present(&mut self) {
        self.presented += 1;
    }
}

use crate::DrawData;

/// A non-blocking source of platform events.
pub trait EventSource {
    type Event;

    /// Returns the next pending event, or `None` if the queue is empty right now.
    ///
    /// Must never block.
    fn poll_event(&mut self) -> Option<Self::Event>;
}

/// Events that can end the frame loop.
pub trait TerminationEvent {
    /// Is this a quit request or a window-close request?
    fn is_termination(&self) -> bool;
}

/// Translates platform events into egui input.
pub trait PlatformAdapter<E> {
    /// Accumulate the effect of one event (pointer, keys, focus, …).
    fn handle_event(&mut self, event: &E);

    /// Hand over everything accumulated since the last frame,
    /// stamped with the current time and screen rectangle.
    fn take_egui_input(&mut self) -> egui::RawInput;

    /// React to what egui wants from the platform (cursor icon, scale changes, …).
    fn handle_platform_output(
        &mut self,
        egui_ctx: &egui::Context,
        platform_output: egui::PlatformOutput,
    ) {
        _ = (egui_ctx, platform_output);
    }

    /// Size of the drawable area in physical pixels.
    fn screen_size_in_pixels(&self) -> [u32; 2];
}

/// Turns egui draw data into draw calls.
pub trait RenderAdapter {
    /// Per-frame GPU preparation, called right after the egui pass has begun.
    fn begin_frame(&mut self, screen_size_px: [u32; 2]);

    fn render(&mut self, draw_data: &DrawData);
}

/// Shows the frame that was just rendered.
pub trait Presenter {
    fn present(&mut self);
}

// ----------------------------------------------------------------------------

/// Drives one egui frame per iteration until a [`TerminationEvent`] is seen.
///
/// Fields are declared in reverse acquisition order, so dropping a [`FrameLoop`]
/// releases the render adapter first and the presenter (window) last.
pub struct FrameLoop<S, P, R, W> {
    renderer: R,
    platform: P,
    egui_ctx: egui::Context,
    events: S,
    presenter: W,

    running: bool,
    frame_nr: u64,
}

impl<S, P, R, W> FrameLoop<S, P, R, W>
where
    S: EventSource,
    S::Event: TerminationEvent,
    P: PlatformAdapter<S::Event>,
    R: RenderAdapter,
    W: Presenter,
{
    /// Arguments are in acquisition order: window first, renderer last.
    pub fn new(
        presenter: W,
        events: S,
        egui_ctx: egui::Context,
        platform: P,
        renderer: R,
    ) -> Self {
        Self {
            renderer,
            platform,
            egui_ctx,
            events,
            presenter,
            running: true,
            frame_nr: 0,
        }
    }

    pub fn egui_ctx(&self) -> &egui::Context {
        &self.egui_ctx
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn presenter(&self) -> &W {
        &self.presenter
    }

    /// `false` once a termination event has been drained.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of frames presented so far.
    pub fn frame_nr(&self) -> u64 {
        self.frame_nr
    }

    /// Run frames until a termination event arrives. Returns the number of frames presented.
    pub fn run(mut self, mut build_ui: impl FnMut(&egui::Context)) -> u64 {
        log::debug!("Entering frame loop");
        while self.running {
            self.run_frame(&mut build_ui);
        }
        log::debug!("Leaving frame loop after {} frames", self.frame_nr);
        self.frame_nr
    }

    /// Drain events, then build, render and present exactly one frame.
    ///
    /// If the UI asks to discard its pass, `build_ui` runs again before anything is drawn,
    /// up to [`egui::Options::max_passes`] times. Render prep happens once per frame.
    ///
    /// A termination event stops the loop only after this frame is presented,
    /// and the remaining queued events are still forwarded.
    pub fn run_frame(&mut self, build_ui: &mut impl FnMut(&egui::Context)) {
        while let Some(event) = self.events.poll_event() {
            if event.is_termination() {
                log::debug!("Termination requested");
                self.running = false;
            }
            self.platform.handle_event(&event);
        }

        let mut raw_input = self.platform.take_egui_input();
        let screen_size_px = self.platform.screen_size_in_pixels();
        let mut full_output = egui::FullOutput::default();
        loop {
            self.egui_ctx.begin_pass(raw_input.take());
            if full_output.platform_output.num_completed_passes == 0 {
                self.renderer.begin_frame(screen_size_px);
            }

            build_ui(&self.egui_ctx);

            full_output.append(self.egui_ctx.end_pass());

            // A discarded pass (e.g. a window sizing itself) is never shown.
            let max_passes = self.egui_ctx.options(|o| o.max_passes.get());
            if !full_output.platform_output.requested_discard()
                || max_passes <= full_output.platform_output.num_completed_passes
            {
                break;
            }
            log::trace!(
                "Frame {}: pass discarded: {:?}",
                self.frame_nr,
                full_output.platform_output.request_discard_reasons
            );
        }

        let egui::FullOutput {
            platform_output,
            textures_delta,
            shapes,
            pixels_per_point,
            ..
        } = full_output;

        self.platform.handle_platform_output(&self.egui_ctx, platform_output);

        let draw_data = DrawData {
            clipped_primitives: self.egui_ctx.tessellate(shapes, pixels_per_point),
            textures_delta,
            pixels_per_point,
            screen_size_px,
        };
        log::trace!("Frame {}: {}", self.frame_nr, draw_data.stats());

        self.renderer.render(&draw_data);
        self.presenter.present();
        self.frame_nr += 1;
    }
}

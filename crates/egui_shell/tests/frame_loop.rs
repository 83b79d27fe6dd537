//! Frame loop contract: event draining, termination, teardown order.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use egui_shell::headless::{
    CountingPresenter, HeadlessEvent, HeadlessPlatform, RecordingRenderer, ScriptedEvents,
};
use egui_shell::{
    DrawData, EventSource, FrameLoop, PlatformAdapter, Presenter, RenderAdapter, TerminationEvent,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Acquire(&'static str),
    Release(&'static str),
    Event(u32),
    TakeInput,
    BeginFrame,
    Render,
    Present,
}

type Journal = Rc<RefCell<Vec<Call>>>;

#[derive(Clone, Copy, Debug)]
enum TestEvent {
    Input(u32),
    Quit,
    Close,
}

impl TerminationEvent for TestEvent {
    fn is_termination(&self) -> bool {
        matches!(self, Self::Quit | Self::Close)
    }
}

fn id(event: TestEvent) -> u32 {
    match event {
        TestEvent::Input(id) => id,
        TestEvent::Quit => 1000,
        TestEvent::Close => 2000,
    }
}

struct Events {
    journal: Journal,
    frames: VecDeque<Vec<TestEvent>>,
    current: Option<VecDeque<TestEvent>>,
}

impl Events {
    fn new(journal: &Journal, frames: Vec<Vec<TestEvent>>) -> Self {
        journal.borrow_mut().push(Call::Acquire("events"));
        Self {
            journal: journal.clone(),
            frames: frames.into(),
            current: None,
        }
    }
}

impl EventSource for Events {
    type Event = TestEvent;

    fn poll_event(&mut self) -> Option<TestEvent> {
        let frames = &mut self.frames;
        let current = self
            .current
            .get_or_insert_with(|| frames.pop_front().unwrap_or_default().into());
        let event = current.pop_front();
        if event.is_none() {
            self.current = None;
        }
        event
    }
}

impl Drop for Events {
    fn drop(&mut self) {
        self.journal.borrow_mut().push(Call::Release("events"));
    }
}

struct Platform {
    journal: Journal,
}

impl Platform {
    fn new(journal: &Journal) -> Self {
        journal.borrow_mut().push(Call::Acquire("platform"));
        Self {
            journal: journal.clone(),
        }
    }
}

impl PlatformAdapter<TestEvent> for Platform {
    fn handle_event(&mut self, event: &TestEvent) {
        self.journal.borrow_mut().push(Call::Event(id(*event)));
    }

    fn take_egui_input(&mut self) -> egui::RawInput {
        self.journal.borrow_mut().push(Call::TakeInput);
        egui::RawInput::default()
    }

    fn screen_size_in_pixels(&self) -> [u32; 2] {
        [800, 600]
    }
}

impl Drop for Platform {
    fn drop(&mut self) {
        self.journal.borrow_mut().push(Call::Release("platform"));
    }
}

struct Renderer {
    journal: Journal,
}

impl Renderer {
    fn new(journal: &Journal) -> Self {
        journal.borrow_mut().push(Call::Acquire("renderer"));
        Self {
            journal: journal.clone(),
        }
    }
}

impl RenderAdapter for Renderer {
    fn begin_frame(&mut self, _screen_size_px: [u32; 2]) {
        self.journal.borrow_mut().push(Call::BeginFrame);
    }

    fn render(&mut self, _draw_data: &DrawData) {
        self.journal.borrow_mut().push(Call::Render);
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.journal.borrow_mut().push(Call::Release("renderer"));
    }
}

struct Window {
    journal: Journal,
}

impl Window {
    fn new(journal: &Journal) -> Self {
        journal.borrow_mut().push(Call::Acquire("window"));
        Self {
            journal: journal.clone(),
        }
    }
}

impl Presenter for Window {
    fn present(&mut self) {
        self.journal.borrow_mut().push(Call::Present);
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.journal.borrow_mut().push(Call::Release("window"));
    }
}

/// Acquire everything in the same order as the native backend does.
fn journaled_loop(
    frames: Vec<Vec<TestEvent>>,
) -> (Journal, FrameLoop<Events, Platform, Renderer, Window>) {
    let journal = Journal::default();
    let window = Window::new(&journal);
    let events = Events::new(&journal, frames);
    let platform = Platform::new(&journal);
    let renderer = Renderer::new(&journal);
    let frame_loop = FrameLoop::new(
        window,
        events,
        egui::Context::default(),
        platform,
        renderer,
    );
    (journal, frame_loop)
}

fn count(journal: &Journal, call: &Call) -> usize {
    journal.borrow().iter().filter(|c| *c == call).count()
}

#[test]
fn all_queued_events_are_forwarded_before_the_frame_begins() {
    let batch: Vec<TestEvent> = (0..5).map(TestEvent::Input).collect();
    let (journal, frame_loop) = journaled_loop(vec![batch, vec![TestEvent::Quit]]);
    frame_loop.run(|_| {});

    let calls = journal.borrow();
    let first_frame: Vec<&Call> = calls
        .iter()
        .skip_while(|c| matches!(c, Call::Acquire(_)))
        .take(6)
        .collect();
    assert_eq!(
        first_frame,
        [
            &Call::Event(0),
            &Call::Event(1),
            &Call::Event(2),
            &Call::Event(3),
            &Call::Event(4),
            &Call::TakeInput,
        ]
    );
}

#[test]
fn frame_phases_run_in_order() {
    let (journal, mut frame_loop) = journaled_loop(vec![vec![TestEvent::Input(7)]]);
    journal.borrow_mut().clear();

    frame_loop.run_frame(&mut |_| {});

    assert_eq!(
        *journal.borrow(),
        [
            Call::Event(7),
            Call::TakeInput,
            Call::BeginFrame,
            Call::Render,
            Call::Present,
        ]
    );
    assert!(frame_loop.is_running());
    assert_eq!(frame_loop.frame_nr(), 1);
}

#[test]
fn termination_finishes_the_current_frame_and_drains_the_batch() {
    let (journal, frame_loop) = journaled_loop(vec![
        vec![TestEvent::Input(1)],
        vec![TestEvent::Input(2), TestEvent::Close, TestEvent::Input(3)],
        vec![TestEvent::Input(4)],
    ]);

    let frames = frame_loop.run(|_| {});

    assert_eq!(frames, 2, "no frame after the one that saw the close");
    assert_eq!(count(&journal, &Call::Event(3)), 1, "rest of the batch drained");
    assert_eq!(count(&journal, &Call::Event(4)), 0, "next batch never polled");
    assert_eq!(count(&journal, &Call::Render), 2);
    assert_eq!(count(&journal, &Call::Present), 2);
}

#[test]
fn quit_on_first_frame_still_presents_once() {
    let (journal, frame_loop) = journaled_loop(vec![vec![TestEvent::Quit]]);
    assert_eq!(frame_loop.run(|_| {}), 1);
    assert_eq!(count(&journal, &Call::Present), 1);
}

#[test]
fn release_mirrors_acquisition() {
    let (journal, frame_loop) = journaled_loop(vec![vec![], vec![TestEvent::Close]]);
    frame_loop.run(|_| {});

    let calls = journal.borrow();
    let acquired: Vec<&str> = calls
        .iter()
        .filter_map(|c| match c {
            Call::Acquire(name) => Some(*name),
            _ => None,
        })
        .collect();
    let mut released: Vec<&str> = calls
        .iter()
        .filter_map(|c| match c {
            Call::Release(name) => Some(*name),
            _ => None,
        })
        .collect();

    assert_eq!(acquired.len(), released.len(), "every resource is released");
    released.reverse();
    assert_eq!(acquired, released, "released in reverse order");
}

#[test]
fn release_happens_even_if_the_loop_never_runs() {
    let (journal, frame_loop) = journaled_loop(vec![]);
    drop(frame_loop);
    assert_eq!(
        journal
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Release(_)))
            .count(),
        4
    );
}

#[test]
fn close_event_end_to_end() {
    let mut frame_loop = FrameLoop::new(
        CountingPresenter::default(),
        ScriptedEvents::new([vec![HeadlessEvent::CloseRequested]]),
        egui::Context::default(),
        HeadlessPlatform::new([800, 600]),
        RecordingRenderer::default(),
    );
    let mut ui = |ctx: &egui::Context| {
        egui::Window::new("Hello").show(ctx, |ui| {
            ui.label("world");
        });
    };
    while frame_loop.is_running() {
        frame_loop.run_frame(&mut ui);
    }

    assert_eq!(frame_loop.frame_nr(), 1);
    assert_eq!(frame_loop.platform().forwarded_events(), 1);
    assert_eq!(frame_loop.renderer().begun_frames(), 1);
    assert_eq!(frame_loop.renderer().frames().len(), 1);
    assert_eq!(frame_loop.presenter().presented(), 1);
}

#[test]
fn close_on_first_frame_renders_once_then_releases_everything() {
    let (journal, frame_loop) = journaled_loop(vec![vec![TestEvent::Close]]);
    assert_eq!(frame_loop.run(|_| {}), 1);

    let calls = journal.borrow();
    let after_acquire: Vec<&Call> = calls
        .iter()
        .skip_while(|c| matches!(c, Call::Acquire(_)))
        .collect();
    assert_eq!(
        after_acquire,
        [
            &Call::Event(2000),
            &Call::TakeInput,
            &Call::BeginFrame,
            &Call::Render,
            &Call::Present,
            &Call::Release("renderer"),
            &Call::Release("platform"),
            &Call::Release("events"),
            &Call::Release("window"),
        ]
    );
}

#[test]
fn discarded_pass_is_rebuilt_before_anything_is_drawn() {
    let (journal, mut frame_loop) = journaled_loop(vec![]);
    journal.borrow_mut().clear();

    let mut passes = 0;
    frame_loop.run_frame(&mut |ctx: &egui::Context| {
        passes += 1;
        if passes == 1 {
            ctx.request_discard("layout changed");
        }
    });

    assert_eq!(passes, 2);
    assert_eq!(
        *journal.borrow(),
        [Call::TakeInput, Call::BeginFrame, Call::Render, Call::Present]
    );
    assert_eq!(frame_loop.frame_nr(), 1);
}

#[test]
fn discarding_every_pass_is_capped() {
    let (journal, mut frame_loop) = journaled_loop(vec![]);
    let max_passes = frame_loop.egui_ctx().options(|o| o.max_passes.get());

    let mut passes = 0;
    frame_loop.run_frame(&mut |ctx: &egui::Context| {
        passes += 1;
        ctx.request_discard("never settles");
    });

    assert_eq!(passes, max_passes);
    assert_eq!(count(&journal, &Call::Render), 1);
    assert_eq!(count(&journal, &Call::Present), 1);
}

#[test]
fn headless_counters() {
    let mut frame_loop = FrameLoop::new(
        CountingPresenter::default(),
        ScriptedEvents::new([
            vec![
                HeadlessEvent::Input(egui::Event::PointerMoved(egui::pos2(10.0, 10.0))),
                HeadlessEvent::Input(egui::Event::PointerGone),
            ],
            vec![],
            vec![HeadlessEvent::Quit],
        ]),
        egui::Context::default(),
        HeadlessPlatform::new([640, 480]),
        RecordingRenderer::default(),
    );

    let mut ui = |ctx: &egui::Context| {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Hello");
        });
    };
    while frame_loop.is_running() {
        frame_loop.run_frame(&mut ui);
    }

    assert_eq!(frame_loop.frame_nr(), 3);
    assert_eq!(frame_loop.platform().forwarded_events(), 3);
    assert_eq!(frame_loop.renderer().begun_frames(), 3);
    assert_eq!(frame_loop.renderer().frames().len(), 3);
    assert_eq!(frame_loop.presenter().presented(), 3);
    assert!(
        frame_loop.renderer().live_textures() >= 1,
        "the font atlas is uploaded on the first frame"
    );
    assert!(frame_loop.renderer().frames()[0].vertices > 0);
}

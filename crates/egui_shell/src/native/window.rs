use std::sync::Arc;

use egui_glow::glow;
use sdl2::video::{GLContext, GLProfile, SwapInterval, Window};

use crate::{GlProfile as Profile, Presenter, SetupError, ShellOptions};

/// An SDL window with a current OpenGL context.
///
/// Fields are dropped in declaration order: context, window, video, SDL.
/// None of these are `Send`, so everything stays on the thread that created it.
pub struct GlWindow {
    _gl_context: GLContext,
    window: Window,
    video: sdl2::VideoSubsystem,
    sdl: sdl2::Sdl,
}

impl GlWindow {
    /// Initialize SDL and its video subsystem, then open a window with a current GL context.
    ///
    /// # Errors
    /// The first step that fails: [`SetupError::SdlInit`], [`SetupError::VideoInit`],
    /// [`SetupError::WindowCreation`], [`SetupError::GlContext`] or [`SetupError::MakeCurrent`].
    /// Failing to set the swap interval is only logged.
    pub fn new(options: &ShellOptions) -> Result<Self, SetupError> {
        let sdl = sdl2::init().map_err(SetupError::SdlInit)?;
        let video = sdl.video().map_err(SetupError::VideoInit)?;
        log::debug!("SDL video driver: {}", video.current_video_driver());

        // Must be set before the window is created.
        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(match options.gl_profile {
            Profile::Core => GLProfile::Core,
            Profile::Compatibility => GLProfile::Compatibility,
            Profile::GlEs => GLProfile::GLES,
        });
        let (major, minor) = options.gl_version;
        gl_attr.set_context_version(major, minor);
        log::debug!(
            "Requesting an OpenGL {major}.{minor} {:?} context",
            options.gl_profile
        );

        let [width, height] = options.inner_size;
        let mut builder = video.window(&options.title, width, height);
        builder.opengl().allow_highdpi();
        if options.resizable {
            builder.resizable();
        }
        let window = builder.build()?;

        let gl_context = window.gl_create_context().map_err(SetupError::GlContext)?;
        window
            .gl_make_current(&gl_context)
            .map_err(SetupError::MakeCurrent)?;

        let swap_interval = if options.vsync {
            SwapInterval::VSync
        } else {
            SwapInterval::Immediate
        };
        if let Err(err) = video.gl_set_swap_interval(swap_interval) {
            log::warn!("Failed to set swap interval to {swap_interval:?}: {err}");
        }

        log::info!("Created a {width}x{height} window with an OpenGL context");

        Ok(Self {
            _gl_context: gl_context,
            window,
            video,
            sdl,
        })
    }

    /// Load the OpenGL function pointers for our context.
    ///
    /// Taking `&self` means this can only happen after the context has been created
    /// and made current, and every GL call goes through the returned bindings.
    #[expect(unsafe_code)]
    pub fn load_gl(&self) -> Arc<glow::Context> {
        // SAFETY: our context is current on this thread, and the loader returns
        // pointers that are valid for as long as that context lives.
        let gl = unsafe {
            glow::Context::from_loader_function(|s| self.video.gl_get_proc_address(s).cast())
        };

        {
            use glow::HasContext as _;
            // SAFETY: `gl` was just loaded for the current context.
            let version = unsafe { gl.get_parameter_string(glow::VERSION) };
            log::info!("OpenGL version: {version}");
        }

        Arc::new(gl)
    }

    /// The source of all SDL events. Only one may exist at a time.
    ///
    /// # Errors
    /// [`SetupError::EventPump`] if SDL refuses, e.g. because a pump already exists.
    pub fn event_pump(&self) -> Result<sdl2::EventPump, SetupError> {
        self.sdl.event_pump().map_err(SetupError::EventPump)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Presenter for GlWindow {
    fn present(&mut self) {
        self.window.gl_swap_window();
    }
}

impl Drop for GlWindow {
    fn drop(&mut self) {
        log::trace!("Destroying the OpenGL context and window");
    }
}

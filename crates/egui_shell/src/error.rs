/// A failure during one-time setup.
///
/// None of these are recoverable: a shell that cannot open a window
/// or get a graphics context has nothing else to do.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to initialize SDL: {0}")]
    SdlInit(String),

    #[error("failed to initialize the SDL video subsystem: {0}")]
    VideoInit(String),

    #[cfg(feature = "sdl2")]
    #[error("failed to create the window: {0}")]
    WindowCreation(#[from] ::sdl2::video::WindowBuildError),

    #[error("failed to create the OpenGL context: {0}")]
    GlContext(String),

    #[error("failed to make the OpenGL context current: {0}")]
    MakeCurrent(String),

    #[error("failed to obtain the SDL event pump: {0}")]
    EventPump(String),

    #[error("failed to initialize the glow painter: {0}")]
    Painter(String),
}

//! Opens an 800x600 window showing a single egui label.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::process::ExitCode;

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let options = egui_shell::ShellOptions {
        title: hello_sdl2::WINDOW_TITLE.to_owned(),
        inner_size: [800, 600],
        gl_version: (2, 1),
        gl_profile: egui_shell::GlProfile::Core,
        ..Default::default()
    };

    match egui_shell::run_native(&options, hello_sdl2::hello_ui) {
        Ok(frames) => {
            log::info!("Window closed after {frames} frames");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

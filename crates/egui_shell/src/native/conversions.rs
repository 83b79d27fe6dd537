use egui::Modifiers;
use sdl2::keyboard::{Mod, Scancode};
use sdl2::mouse::{MouseButton, SystemCursor};

/// Map a physical key to an egui key.
///
/// We go by scancode so that shortcuts sit on the same physical keys on every layout.
pub fn key_from_scancode(scancode: Scancode) -> Option<egui::Key> {
    use egui::Key;

    Some(match scancode {
        Scancode::Left => Key::ArrowLeft,
        Scancode::Up => Key::ArrowUp,
        Scancode::Right => Key::ArrowRight,
        Scancode::Down => Key::ArrowDown,

        Scancode::Escape => Key::Escape,
        Scancode::Tab => Key::Tab,
        Scancode::Backspace => Key::Backspace,
        Scancode::Space => Key::Space,
        Scancode::Return | Scancode::KpEnter => Key::Enter,

        Scancode::Insert => Key::Insert,
        Scancode::Home => Key::Home,
        Scancode::Delete => Key::Delete,
        Scancode::End => Key::End,
        Scancode::PageDown => Key::PageDown,
        Scancode::PageUp => Key::PageUp,

        Scancode::Kp0 | Scancode::Num0 => Key::Num0,
        Scancode::Kp1 | Scancode::Num1 => Key::Num1,
        Scancode::Kp2 | Scancode::Num2 => Key::Num2,
        Scancode::Kp3 | Scancode::Num3 => Key::Num3,
        Scancode::Kp4 | Scancode::Num4 => Key::Num4,
        Scancode::Kp5 | Scancode::Num5 => Key::Num5,
        Scancode::Kp6 | Scancode::Num6 => Key::Num6,
        Scancode::Kp7 | Scancode::Num7 => Key::Num7,
        Scancode::Kp8 | Scancode::Num8 => Key::Num8,
        Scancode::Kp9 | Scancode::Num9 => Key::Num9,

        Scancode::A => Key::A,
        Scancode::B => Key::B,
        Scancode::C => Key::C,
        Scancode::D => Key::D,
        Scancode::E => Key::E,
        Scancode::F => Key::F,
        Scancode::G => Key::G,
        Scancode::H => Key::H,
        Scancode::I => Key::I,
        Scancode::J => Key::J,
        Scancode::K => Key::K,
        Scancode::L => Key::L,
        Scancode::M => Key::M,
        Scancode::N => Key::N,
        Scancode::O => Key::O,
        Scancode::P => Key::P,
        Scancode::Q => Key::Q,
        Scancode::R => Key::R,
        Scancode::S => Key::S,
        Scancode::T => Key::T,
        Scancode::U => Key::U,
        Scancode::V => Key::V,
        Scancode::W => Key::W,
        Scancode::X => Key::X,
        Scancode::Y => Key::Y,
        Scancode::Z => Key::Z,

        _ => {
            return None;
        }
    })
}

pub fn modifiers_from_keymod(keymod: Mod) -> Modifiers {
    let alt = keymod.intersects(Mod::LALTMOD | Mod::RALTMOD);
    let ctrl = keymod.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD);
    let shift = keymod.intersects(Mod::LSHIFTMOD | Mod::RSHIFTMOD);
    let mac_cmd = cfg!(target_os = "macos") && keymod.intersects(Mod::LGUIMOD | Mod::RGUIMOD);

    Modifiers {
        alt,
        ctrl,
        shift,
        mac_cmd,
        command: if cfg!(target_os = "macos") {
            mac_cmd
        } else {
            ctrl
        },
    }
}

pub fn pointer_button(button: MouseButton) -> Option<egui::PointerButton> {
    match button {
        MouseButton::Left => Some(egui::PointerButton::Primary),
        MouseButton::Right => Some(egui::PointerButton::Secondary),
        MouseButton::Middle => Some(egui::PointerButton::Middle),
        MouseButton::X1 => Some(egui::PointerButton::Extra1),
        MouseButton::X2 => Some(egui::PointerButton::Extra2),
        MouseButton::Unknown => None,
    }
}

/// `None` means the cursor should be hidden.
pub fn system_cursor(cursor_icon: egui::CursorIcon) -> Option<SystemCursor> {
    use egui::CursorIcon;

    match cursor_icon {
        CursorIcon::None => None,

        CursorIcon::Crosshair => Some(SystemCursor::Crosshair),
        CursorIcon::Grab | CursorIcon::PointingHand => Some(SystemCursor::Hand),
        CursorIcon::Grabbing | CursorIcon::Move | CursorIcon::AllScroll => {
            Some(SystemCursor::SizeAll)
        }
        CursorIcon::ResizeHorizontal
        | CursorIcon::ResizeColumn
        | CursorIcon::ResizeEast
        | CursorIcon::ResizeWest => Some(SystemCursor::SizeWE),
        CursorIcon::ResizeVertical
        | CursorIcon::ResizeRow
        | CursorIcon::ResizeNorth
        | CursorIcon::ResizeSouth => Some(SystemCursor::SizeNS),
        CursorIcon::ResizeNeSw | CursorIcon::ResizeNorthEast | CursorIcon::ResizeSouthWest => {
            Some(SystemCursor::SizeNESW)
        }
        CursorIcon::ResizeNwSe | CursorIcon::ResizeNorthWest | CursorIcon::ResizeSouthEast => {
            Some(SystemCursor::SizeNWSE)
        }
        CursorIcon::Text | CursorIcon::VerticalText => Some(SystemCursor::IBeam),
        CursorIcon::NotAllowed | CursorIcon::NoDrop => Some(SystemCursor::No),
        CursorIcon::Wait => Some(SystemCursor::Wait),
        CursorIcon::Progress => Some(SystemCursor::WaitArrow),

        _ => Some(SystemCursor::Arrow),
    }
}

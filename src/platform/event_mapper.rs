//=========================================================================
// Platform Event Mapper
//
// Converts Winit keyboard events to engine-level `InputEvent` types.
//
// Responsibilities:
// - Translate physical key codes
// - Drop OS key-repeat events (states see one KeyDown per press)
// - Provide `Unidentified` for unmapped keys
//
//=========================================================================

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use crate::core::input::{InputEvent, KeyCode};

//=== Key Conversion ======================================================

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        match code {
            WinitKeyCode::KeyW => Self::KeyW,
            WinitKeyCode::KeyA => Self::KeyA,
            WinitKeyCode::KeyS => Self::KeyS,
            WinitKeyCode::KeyD => Self::KeyD,
            WinitKeyCode::KeyQ => Self::KeyQ,
            WinitKeyCode::ArrowUp => Self::ArrowUp,
            WinitKeyCode::ArrowLeft => Self::ArrowLeft,
            WinitKeyCode::ArrowDown => Self::ArrowDown,
            WinitKeyCode::ArrowRight => Self::ArrowRight,
            WinitKeyCode::Escape => Self::Escape,
            WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => Self::Enter,
            WinitKeyCode::Space => Self::Space,
            WinitKeyCode::Tab => Self::Tab,
            WinitKeyCode::Backspace => Self::Backspace,
            _ => Self::Unidentified,
        }
    }
}

impl From<PhysicalKey> for KeyCode {
    fn from(key: PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            PhysicalKey::Unidentified(_) => KeyCode::Unidentified,
        }
    }
}

//=== Full Event Conversion ===============================================

/// Converts a Winit key event, or returns `None` for OS key repeats.
pub(crate) fn map_key_event(event: &KeyEvent) -> Option<InputEvent> {
    if event.repeat {
        return None;
    }

    let key = KeyCode::from(event.physical_key);
    Some(key_transition(key, event.state))
}

fn key_transition(key: KeyCode, state: ElementState) -> InputEvent {
    match state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

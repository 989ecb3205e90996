//=========================================================================
// Input Events
//
// Engine-owned representation of the key events forwarded to states.
// The platform layer converts windowing-library events into these types
// so that states never depend on the windowing library directly.
//
//=========================================================================

//=== KeyCode Enum ========================================================
// Physical keyboard key in a simplified, cross-platform form.
//
// Only keys the client's states react to are listed; everything else
// maps to `Unidentified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Camera panning ---------------------------------------------------
    KeyW, KeyA, KeyS, KeyD,
    ArrowUp, ArrowLeft, ArrowDown, ArrowRight,

    //--- Menus and dialogs ------------------------------------------------
    Escape, Enter, Space, Tab, Backspace,

    //--- Quick quit -------------------------------------------------------
    KeyQ,

    Unidentified,
}

//=== InputEvent Enum =====================================================
// A key transition observed by the platform during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
}

impl InputEvent {
    /// Returns the key this event refers to.
    pub fn key(&self) -> KeyCode {
        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => *key,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_shared_by_down_and_up() {
        assert_eq!(InputEvent::KeyDown(KeyCode::Escape).key(), KeyCode::Escape);
        assert_eq!(InputEvent::KeyUp(KeyCode::KeyQ).key(), KeyCode::KeyQ);
    }

    #[test]
    fn down_and_up_are_distinct() {
        assert_ne!(
            InputEvent::KeyDown(KeyCode::Enter),
            InputEvent::KeyUp(KeyCode::Enter)
        );
    }
}

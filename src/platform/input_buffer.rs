//=========================================================================
// Input Buffer
//
// Collects key events between two frame boundaries.
//
// Notes:
// The buffer lives for one frame and is emptied by `drain()` when the
// platform runs the next engine frame.
//=========================================================================

use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================

pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // Appends an event. Identical consecutive events are ignored.
    //
    pub fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns the frame's events in arrival order and clears the buffer.
    //
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    #[test]
    fn new_buffer_is_empty() {
        assert!(InputBuffer::new().is_empty());
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push(InputEvent::KeyUp(KeyCode::KeyA));
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));

        assert_eq!(
            buffer.drain(),
            vec![
                InputEvent::KeyDown(KeyCode::KeyA),
                InputEvent::KeyUp(KeyCode::KeyA),
                InputEvent::KeyDown(KeyCode::KeyA),
            ]
        );
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::Escape));

        assert_eq!(buffer.drain().len(), 1);
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_empty());
    }
}

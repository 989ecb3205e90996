//=========================================================================
// State Context
//=========================================================================
//
// Per-frame data handed to the current state's `update()`.
//
// States request transitions here during updates. The manager applies
// the pending request at the start of the next `update_state()` call, so
// a switch never happens while a state is still running.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::StateHandle;
use crate::core::input::{InputEvent, KeyCode};

//=== StateContext ========================================================

/// Data and requests exchanged between the manager and the current state.
///
/// # Available Data
///
/// - `frame()`: number of the frame being updated (first frame is 1)
/// - `input()`: key events collected by the platform since the last frame
///
/// # Requests
///
/// - `request_state_change()`: switch states at the next frame boundary
/// - `request_exit()`: ask the surrounding application to shut down
#[derive(Debug, Default)]
pub struct StateContext {
    pending: Option<StateHandle>,
    input: Vec<InputEvent>,
    frame: u64,
    exit_requested: bool,
}

impl StateContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    //--- Requests ---------------------------------------------------------

    /// Records `state` as the state to switch to at the next frame.
    ///
    /// Does not call `enter` or `exit`. If called several times before the
    /// next frame, the last request wins.
    pub fn request_state_change(&mut self, state: StateHandle) {
        assert!(
            state.is_alive(),
            "Requested a state change to {}, which is not alive",
            state.name()
        );

        if let Some(previous) = self.pending.replace(state) {
            debug!(
                "Pending state change to {} overwritten by {}",
                previous.name(),
                self.pending.as_ref().map_or("<none>", StateHandle::name)
            );
        }
    }

    /// Asks the application loop to shut down after this frame.
    ///
    /// The current state stays current; the application calls its `exit`
    /// during shutdown.
    pub fn request_exit(&mut self) {
        debug!("Application exit requested");
        self.exit_requested = true;
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the state waiting to become current, if any.
    pub fn pending_state(&self) -> Option<&StateHandle> {
        self.pending.as_ref()
    }

    /// Returns true once a state has asked the application to shut down.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Returns the number of the frame currently being updated.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Returns the key events received since the previous frame, in order.
    pub fn input(&self) -> &[InputEvent] {
        &self.input
    }

    /// Returns true if `key` went down since the previous frame.
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.input.contains(&InputEvent::KeyDown(key))
    }

    //--- Manager Access ---------------------------------------------------

    pub(crate) fn take_pending(&mut self) -> Option<StateHandle> {
        self.pending.take()
    }

    pub(crate) fn begin_frame(&mut self, input: &[InputEvent]) {
        self.frame += 1;
        self.input.clear();
        self.input.extend_from_slice(input);
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::State;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Idle;

    impl State for Idle {
        fn enter(&mut self) {}
        fn update(&mut self, _ctx: &mut StateContext) {}
        fn exit(&mut self) {}
    }

    #[test]
    fn new_context_is_empty() {
        let ctx = StateContext::new();
        assert!(ctx.pending_state().is_none());
        assert!(!ctx.exit_requested());
        assert_eq!(ctx.frame(), 0);
        assert!(ctx.input().is_empty());
    }

    #[test]
    fn last_request_wins() {
        let a = Rc::new(RefCell::new(Idle));
        let b = Rc::new(RefCell::new(Idle));
        let mut ctx = StateContext::new();

        ctx.request_state_change(StateHandle::new(&a));
        ctx.request_state_change(StateHandle::new(&b));

        assert_eq!(ctx.pending_state(), Some(&StateHandle::new(&b)));
        assert_eq!(ctx.take_pending(), Some(StateHandle::new(&b)));
        assert!(ctx.pending_state().is_none());
    }

    #[test]
    #[should_panic(expected = "which is not alive")]
    fn requesting_dangling_state_panics() {
        let mut ctx = StateContext::new();
        ctx.request_state_change(StateHandle::dangling());
    }

    #[test]
    fn begin_frame_replaces_input_and_counts_frames() {
        let mut ctx = StateContext::new();

        ctx.begin_frame(&[InputEvent::KeyDown(KeyCode::Escape)]);
        assert_eq!(ctx.frame(), 1);
        assert!(ctx.key_pressed(KeyCode::Escape));

        ctx.begin_frame(&[InputEvent::KeyUp(KeyCode::Escape)]);
        assert_eq!(ctx.frame(), 2);
        assert!(!ctx.key_pressed(KeyCode::Escape));
        assert_eq!(ctx.input(), &[InputEvent::KeyUp(KeyCode::Escape)]);
    }

    #[test]
    fn exit_request_is_sticky() {
        let mut ctx = StateContext::new();
        ctx.request_exit();
        ctx.begin_frame(&[]);
        assert!(ctx.exit_requested());
    }
}

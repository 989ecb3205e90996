//=========================================================================
// State Manager
//=========================================================================
//
// Owns the "current state" slot and applies deferred transitions.
//
// Ordering contract:
//   - a request made during frame N is applied before frame N+1's update
//   - exit(old) always precedes enter(new)
//   - switching to the current state is a no-op
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{StateContext, StateHandle};
use crate::core::input::InputEvent;

//=== State Manager =======================================================

/// Drives a single active [`State`](super::State) through its lifecycle.
///
/// The manager never owns states. Dropping it does not call `exit` on the
/// current state; the application must do that itself during shutdown.
///
/// # Example
///
/// ```rust
/// # use std::cell::RefCell;
/// # use std::rc::Rc;
/// # use campaign_client::prelude::*;
/// # struct Menu;
/// # impl State for Menu {
/// #     fn enter(&mut self) {}
/// #     fn update(&mut self, _ctx: &mut StateContext) {}
/// #     fn exit(&mut self) {}
/// # }
/// let menu = Rc::new(RefCell::new(Menu));
/// let mut manager = StateManager::new();
///
/// manager.startup(StateHandle::new(&menu));
/// manager.update_state();
///
/// assert_eq!(manager.current_state(), Some(&StateHandle::new(&menu)));
/// ```
#[derive(Debug, Default)]
pub struct StateManager {
    current: Option<StateHandle>,
    context: StateContext,
}

impl StateManager {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with no current state.
    pub fn new() -> Self {
        Self {
            current: None,
            context: StateContext::new(),
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Makes `first` the current state and calls its `enter`.
    ///
    /// # Panics
    ///
    /// Panics if the manager was already started or `first` is not alive.
    pub fn startup(&mut self, first: StateHandle) {
        assert!(
            self.current.is_none(),
            "State manager already started with {}",
            self.current.as_ref().map_or("<none>", StateHandle::name)
        );
        assert!(
            first.is_alive(),
            "Cannot start state manager with {}, which is not alive",
            first.name()
        );

        info!("Starting state manager with initial state: {}", first.name());
        self.current = Some(first.clone());
        first.enter();
    }

    //--- Update Loop ------------------------------------------------------

    /// Applies any pending transition, then updates the current state.
    ///
    /// # Panics
    ///
    /// Panics if called before [`startup`](Self::startup).
    pub fn update_state(&mut self) {
        self.update_state_with(&[]);
    }

    /// Like [`update_state`](Self::update_state), exposing `input` to the
    /// current state through its context.
    pub fn update_state_with(&mut self, input: &[InputEvent]) {
        assert!(
            self.current.is_some(),
            "update_state called before the state manager was started"
        );

        if let Some(pending) = self.context.take_pending() {
            self.switch_to_new_state(pending);
        }

        self.context.begin_frame(input);

        if let Some(current) = &self.current {
            current.update(&mut self.context);
        }
    }

    //--- Transition Requests ----------------------------------------------

    /// Records `new_state` to become current at the next
    /// [`update_state`](Self::update_state). Last request wins.
    ///
    /// States request changes through their [`StateContext`] instead, since
    /// the manager is borrowed while they run.
    ///
    /// # Panics
    ///
    /// Panics if called before [`startup`](Self::startup) or if `new_state`
    /// is not alive.
    pub fn request_state_change(&mut self, new_state: StateHandle) {
        assert!(
            self.current.is_some(),
            "State change to {} requested before the state manager was started",
            new_state.name()
        );
        self.context.request_state_change(new_state);
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the current state, or `None` before startup.
    pub fn current_state(&self) -> Option<&StateHandle> {
        self.current.as_ref()
    }

    /// Returns the state waiting to become current, if any.
    pub fn pending_state(&self) -> Option<&StateHandle> {
        self.context.pending_state()
    }

    /// Returns true once the manager has been started.
    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    /// Returns true once a state has asked the application to shut down.
    pub fn exit_requested(&self) -> bool {
        self.context.exit_requested()
    }

    //--- Internal Helpers -------------------------------------------------

    fn switch_to_new_state(&mut self, new_state: StateHandle) {
        let Some(old_state) = self.current.as_ref() else {
            return;
        };

        if *old_state == new_state {
            debug!("State {} is already current, skipping switch", new_state.name());
            return;
        }

        // Must hold before the old state is exited
        assert!(
            new_state.is_alive(),
            "Cannot switch to {}, which is not alive",
            new_state.name()
        );

        debug!("Switching state {} -> {}", old_state.name(), new_state.name());

        old_state.exit();
        self.current = Some(new_state.clone());
        new_state.enter();
    }
}

//=== Tests ===============================================================

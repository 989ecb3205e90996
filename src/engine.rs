//=========================================================================
// Campaign Client Engine
//
// Main entry point and coordinator for the client.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(first)──>  [Event Loop]
//         │                          │
//         ├─ with_title()            ├─ startup(first)
//         └─ with_options()          ├─ frame(input)  (per redraw)
//                                    └─ shutdown()    (exit final state)
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::options::Options;
use crate::core::state::{StateHandle, StateManager};
use crate::platform::{Platform, PlatformError};

//=== FrameControl ========================================================

/// Outcome of a single engine frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Keep running frames.
    Continue,

    /// A state requested shutdown, or the engine is already shut down.
    Exit,
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: "Campaign Client"
/// - **Options**: [`Options::default()`]
///
/// # Examples
///
/// ```no_run
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use campaign_client::prelude::*;
///
/// struct MainMenu;
/// impl State for MainMenu {
///     fn enter(&mut self) {}
///     fn update(&mut self, _ctx: &mut StateContext) {}
///     fn exit(&mut self) {}
/// }
///
/// let menu = Rc::new(RefCell::new(MainMenu));
///
/// EngineBuilder::new()
///     .with_title("My Campaign")
///     .build()
///     .run(StateHandle::new(&menu))
///     .expect("event loop failed");
/// ```
pub struct EngineBuilder {
    title: String,
    options: Options,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Campaign Client".to_string(),
            options: Options::default(),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the client options used for window creation.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Builds the engine instance. No state is active until
    /// [`Engine::startup`] or [`Engine::run`].
    pub fn build(self) -> Engine {
        info!("Building engine (title: {:?})", self.title);

        Engine {
            title: self.title,
            options: self.options,
            state_manager: StateManager::new(),
            shut_down: false,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Client runtime owning the [`StateManager`].
///
/// The engine is the "surrounding application" of the state manager: it
/// starts it, feeds it one update per frame, and calls `exit` on the final
/// state when shutting down.
pub struct Engine {
    title: String,
    options: Options,
    state_manager: StateManager,
    shut_down: bool,
}

impl Engine {
    //--- Lifecycle --------------------------------------------------------

    /// Activates the first state.
    ///
    /// # Panics
    ///
    /// Panics if the engine was already started or `first` is not alive.
    pub fn startup(&mut self, first: StateHandle) {
        self.state_manager.startup(first);
    }

    /// Runs one frame: applies pending transitions and updates the current
    /// state with the frame's input.
    ///
    /// # Panics
    ///
    /// Panics if called before [`startup`](Self::startup).
    pub fn frame(&mut self, input: &[InputEvent]) -> FrameControl {
        if self.shut_down {
            return FrameControl::Exit;
        }

        self.state_manager.update_state_with(input);

        if self.state_manager.exit_requested() {
            FrameControl::Exit
        } else {
            FrameControl::Continue
        }
    }

    /// Calls `exit` on the final current state. Only the first call has an
    /// effect.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        match self.state_manager.current_state() {
            Some(state) if state.is_alive() => {
                info!("Shutting down, leaving state {}", state.name());
                state.exit();
            }
            Some(state) => {
                warn!("Final state {} was dropped before shutdown", state.name());
            }
            None => info!("Shutting down before any state was started"),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts up with `first` and runs the window event loop until the
    /// window closes or a state requests exit.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails. The final state is exited in every case.
    pub fn run(mut self, first: StateHandle) -> Result<(), PlatformError> {
        info!("Starting client runtime");

        self.startup(first);
        let result = Platform::new(self).run();

        info!("Client shutdown complete");
        result
    }

    //--- Accessors --------------------------------------------------------

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Read access to the state manager.
    pub fn state_manager(&self) -> &StateManager {
        &self.state_manager
    }

    /// Mutable access, e.g. to request a state change from outside a state.
    pub fn state_manager_mut(&mut self) -> &mut StateManager {
        &mut self.state_manager
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::options::WindowMode;
    use crate::core::state::{State, StateContext};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counter {
        enters: u32,
        updates: u32,
        exits: u32,
    }

    impl State for Counter {
        fn enter(&mut self) {
            self.enters += 1;
        }

        fn update(&mut self, ctx: &mut StateContext) {
            self.updates += 1;
            if ctx.key_pressed(KeyCode::KeyQ) {
                ctx.request_exit();
            }
        }

        fn exit(&mut self) {
            self.exits += 1;
        }
    }

    fn counter() -> Rc<RefCell<Counter>> {
        Rc::new(RefCell::new(Counter::default()))
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let engine = EngineBuilder::new().build();
        assert_eq!(engine.title(), "Campaign Client");
        assert_eq!(engine.options(), &Options::default());
        assert!(!engine.state_manager().is_started());
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let options = Options {
            window_mode: WindowMode::Windowed,
            ..Options::default()
        };
        let engine = EngineBuilder::new()
            .with_title("Skirmish")
            .with_options(options.clone())
            .build();

        assert_eq!(engine.title(), "Skirmish");
        assert_eq!(engine.options(), &options);
    }

    //=====================================================================
    // Engine Tests
    //=====================================================================

    #[test]
    fn frames_update_current_state() {
        let state = counter();
        let mut engine = EngineBuilder::new().build();

        engine.startup(StateHandle::new(&state));
        assert_eq!(engine.frame(&[]), FrameControl::Continue);
        assert_eq!(engine.frame(&[]), FrameControl::Continue);

        let state = state.borrow();
        assert_eq!((state.enters, state.updates, state.exits), (1, 2, 0));
    }

    #[test]
    fn exit_request_ends_frame_loop() {
        let state = counter();
        let mut engine = EngineBuilder::new().build();

        engine.startup(StateHandle::new(&state));
        assert_eq!(
            engine.frame(&[InputEvent::KeyDown(KeyCode::KeyQ)]),
            FrameControl::Exit
        );
    }

    #[test]
    fn shutdown_exits_final_state_once() {
        let first = counter();
        let second = counter();
        let mut engine = EngineBuilder::new().build();

        engine.startup(StateHandle::new(&first));
        engine
            .state_manager_mut()
            .request_state_change(StateHandle::new(&second));
        engine.frame(&[]);

        engine.shutdown();
        engine.shutdown();

        assert!(engine.is_shut_down());
        assert_eq!(first.borrow().exits, 1);
        assert_eq!(second.borrow().exits, 1);
        assert_eq!(engine.frame(&[]), FrameControl::Exit);
        assert_eq!(second.borrow().updates, 1, "No frames run after shutdown");
    }

    #[test]
    fn shutdown_before_startup_is_harmless() {
        let mut engine = EngineBuilder::new().build();
        engine.shutdown();
        assert!(engine.is_shut_down());
    }

    #[test]
    fn shutdown_tolerates_dropped_final_state() {
        let state = counter();
        let mut engine = EngineBuilder::new().build();

        engine.startup(StateHandle::new(&state));
        drop(state);
        engine.shutdown();
    }

    #[test]
    #[should_panic(expected = "before the state manager was started")]
    fn frame_before_startup_panics() {
        let mut engine = EngineBuilder::new().build();
        engine.frame(&[]);
    }
}

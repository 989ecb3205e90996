//=========================================================================
// State System
//=========================================================================
//
// Drives exactly one active application state through its lifecycle.
//
// Architecture:
//   StateManager
//     ├─ current: Option<StateHandle>
//     └─ context: StateContext
//           └─ pending: Option<StateHandle>
//
// Flow:
//   update_state() → apply pending switch → State::update(ctx)
//
// States are owned by the application (`Rc<RefCell<T>>`). The manager
// only keeps weak handles to them.
//
//=========================================================================

//=== Module Declarations =================================================

mod context;
mod handle;
mod state_manager;

//=== Public API ==========================================================

pub use context::StateContext;
pub use handle::StateHandle;
pub use state_manager::StateManager;

//=== State Trait =========================================================

/// One discrete mode of the running client (main menu, loading screen,
/// in-match play, ...).
///
/// All three hooks are required. The manager guarantees that `enter` and
/// `exit` strictly alternate for a given state and that `update` is only
/// called between them.
///
/// # Example
///
/// ```rust
/// # use campaign_client::prelude::*;
/// struct MainMenu {
///     next: Option<StateHandle>,
/// }
///
/// impl State for MainMenu {
///     fn enter(&mut self) {}
///
///     fn update(&mut self, ctx: &mut StateContext) {
///         if ctx.key_pressed(KeyCode::Enter) {
///             if let Some(next) = &self.next {
///                 ctx.request_state_change(next.clone());
///             }
///         }
///     }
///
///     fn exit(&mut self) {}
/// }
/// ```
pub trait State {
    /// Called once when the state becomes current.
    fn enter(&mut self);

    /// Called once per frame while the state is current.
    ///
    /// Transitions requested through `ctx` are applied at the start of the
    /// next frame, never during this call.
    fn update(&mut self, ctx: &mut StateContext);

    /// Called once when the state stops being current.
    fn exit(&mut self);
}

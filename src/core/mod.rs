//=========================================================================
// Client Core
//
// Engine-independent building blocks of the client.
//
// Responsibilities:
// - Drive the active application state (`state`)
// - Describe the input forwarded to states each frame (`input`)
// - Load and persist user options (`options`)
// - Install the logging backend (`logging`)
//
// Notes:
// Nothing in here talks to the windowing library. The platform layer
// converts its events into `input` types and calls into the engine.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod input;
pub mod logging;
pub mod options;
pub mod state;

//=== Public API ==========================================================

pub use input::{InputEvent, KeyCode};
pub use options::{Options, OptionsError, WindowMode};
pub use state::{State, StateContext, StateHandle, StateManager};

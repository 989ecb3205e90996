//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use campaign_client::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder, FrameControl};

// State system
pub use crate::core::state::{State, StateContext, StateHandle, StateManager};

// Input forwarded to states
pub use crate::core::input::{InputEvent, KeyCode};

// Options
pub use crate::core::options::{Options, OptionsError, WindowMode};

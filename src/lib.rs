//=========================================================================
// Campaign Client — Library Root
//
// This crate defines the client core of a 3D strategy game.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the state lifecycle core (`State`, `StateManager`)
// - Keep the windowing integration (`platform`) hidden from game code
//
// Typical usage:
// ```no_run
// use std::cell::RefCell;
// use std::rc::Rc;
// use campaign_client::prelude::*;
//
// struct MainMenu;
// impl State for MainMenu {
//     fn enter(&mut self) {}
//     fn update(&mut self, _ctx: &mut StateContext) {}
//     fn exit(&mut self) {}
// }
//
// fn main() -> Result<(), Box<dyn std::error::Error>> {
//     let menu = Rc::new(RefCell::new(MainMenu));
//     EngineBuilder::new().build().run(StateHandle::new(&menu))?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the engine-independent systems (states, input types,
// options, logging). Game code mostly goes through the prelude.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the Winit window and event loop and is not part of the
// public API surface. `engine` ties the platform to the state manager.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, FrameControl};
pub use platform::PlatformError;

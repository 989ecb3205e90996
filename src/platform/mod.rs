//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS window and events) with the engine's frame loop.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌──────────────────────────────┐
//  │  Winit Event Loop            │
//  │   ↓                          │
//  │  KeyboardInput               │
//  │   └─ event_mapper → buffer   │
//  │   ↓                          │
//  │  RedrawRequested             │
//  │   ├─ drain buffer            │
//  │   └─ Engine::frame(input)    │
//  │        └─ StateManager       │
//  │   ↓                          │
//  │  CloseRequested / exit req.  │
//  │   └─ Engine::shutdown()      │
//  └──────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: input collected since the last
//   redraw is handed to exactly one engine frame
// - **Single thread**: states run on the event loop thread, so the state
//   manager needs no locking
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod input_buffer;

//=== External Crates =====================================================

use log::*;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Fullscreen, Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::options::WindowMode;
use crate::engine::{Engine, FrameControl};
use input_buffer::InputBuffer;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop the client cannot run.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// Event loop execution error.
    #[error("Event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),
}

//=== Platform ============================================================

/// Window owner and frame driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(engine)`
/// 2. **Execution**: `platform.run()` - blocks until the loop exits
/// 3. **Frames**: every `RedrawRequested` runs one engine frame
/// 4. **Shutdown**: window closed or exit requested → `Engine::shutdown()`
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Key events collected since the last frame.
    buffer: InputBuffer,

    engine: Engine,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a platform driving `engine`. The window is created lazily.
    pub fn new(engine: Engine) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            engine,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or a state requests exit.
    ///
    /// The engine is shut down before returning, also on error.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let result = EventLoop::new()
            .map_err(PlatformError::EventLoopCreation)
            .and_then(|event_loop| {
                event_loop
                    .run_app(&mut self)
                    .map_err(PlatformError::EventLoopExecution)
            });

        self.engine.shutdown();
        result
    }

    //--- Internal Helpers -------------------------------------------------

    /// Builds window attributes from the engine's title and options.
    fn window_attributes(&self) -> WindowAttributes {
        let options = self.engine.options();
        let mut attrs = WindowAttributes::default().with_title(self.engine.title());

        if let Some((width, height)) = options.resolution() {
            attrs = attrs.with_inner_size(LogicalSize::new(width, height));
        }

        match options.window_mode {
            WindowMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
            WindowMode::Borderless => attrs.with_decorations(false),
            WindowMode::Windowed => attrs,
        }
    }

    /// Hands the buffered input to one engine frame.
    fn advance_frame(&mut self) -> FrameControl {
        if self.buffer.is_empty() {
            return self.engine.frame(&[]);
        }

        let input = self.buffer.drain();
        trace!(target: "platform::input", "Running frame with {} input events", input.len());
        self.engine.frame(&input)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let options = self.engine.options();
        debug!(
            target: "platform",
            "Window mode {:?}, vsync {}, FSAA {}x",
            options.window_mode,
            options.vertical_sync,
            options.full_screen_anti_aliasing
        );

        match event_loop.create_window(self.window_attributes()) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.engine.shutdown();
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.engine.shutdown();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = event_mapper::map_key_event(key_event) {
                    self.buffer.push(event);
                }
            }

            WindowEvent::RedrawRequested => {
                if let FrameControl::Exit = self.advance_frame() {
                    info!(target: "platform", "Exit requested by state");
                    self.engine.shutdown();
                    event_loop.exit();
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, Focused, mouse, etc.
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

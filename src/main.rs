//! Demo client: main menu → loading screen → match, driven by the
//! state manager.
//!
//! Keys: `Enter` starts a match from the menu, `Escape` leaves the match
//! (or quits from the menu).

use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

use campaign_client::core::logging;
use campaign_client::prelude::*;
use log::{error, info, warn};

//=== States ==============================================================

struct MainMenu {
    loading: Option<StateHandle>,
}

impl State for MainMenu {
    fn enter(&mut self) {
        info!("Main menu: press Enter to start, Escape to quit");
    }

    fn update(&mut self, ctx: &mut StateContext) {
        if ctx.key_pressed(KeyCode::Escape) {
            ctx.request_exit();
        } else if ctx.key_pressed(KeyCode::Enter) {
            if let Some(loading) = &self.loading {
                ctx.request_state_change(loading.clone());
            }
        }
    }

    fn exit(&mut self) {
        info!("Leaving main menu");
    }
}

struct Loading {
    frames_needed: u32,
    progress: u32,
    game: Option<StateHandle>,
}

impl State for Loading {
    fn enter(&mut self) {
        self.progress = 0;
        info!("Loading match...");
    }

    fn update(&mut self, ctx: &mut StateContext) {
        self.progress += 1;
        if self.progress >= self.frames_needed {
            if let Some(game) = &self.game {
                ctx.request_state_change(game.clone());
            }
        }
    }

    fn exit(&mut self) {
        info!("Loading finished after {} frames", self.progress);
    }
}

struct Match {
    started_at: u64,
    menu: Option<StateHandle>,
}

impl State for Match {
    fn enter(&mut self) {
        self.started_at = 0;
        info!("Match started: press Escape to return to the menu");
    }

    fn update(&mut self, ctx: &mut StateContext) {
        if self.started_at == 0 {
            self.started_at = ctx.frame();
        }
        if ctx.key_pressed(KeyCode::Escape) {
            if let Some(menu) = &self.menu {
                ctx.request_state_change(menu.clone());
            }
        }
    }

    fn exit(&mut self) {
        info!("Match ended (started at frame {})", self.started_at);
    }
}

//=== Options =============================================================

fn load_options() -> Options {
    let Some(path) = Options::default_path() else {
        warn!("No configuration directory, using default options");
        return Options::default();
    };

    match Options::load_or_default(&path) {
        Ok(options) => {
            if !path.exists() {
                if let Err(e) = options.save(&path) {
                    warn!("Could not write default options: {}", e);
                }
            }
            options
        }
        Err(e) => {
            warn!("{}; using default options", e);
            Options::default()
        }
    }
}

//=== Entry Point =========================================================

fn main() -> ExitCode {
    logging::init();

    info!("Booting campaign client");
    let options = load_options();

    // The client owns the states; the manager only sees weak handles.
    let menu = Rc::new(RefCell::new(MainMenu { loading: None }));
    let loading = Rc::new(RefCell::new(Loading {
        frames_needed: 120,
        progress: 0,
        game: None,
    }));
    let game = Rc::new(RefCell::new(Match {
        started_at: 0,
        menu: None,
    }));

    menu.borrow_mut().loading = Some(StateHandle::new(&loading));
    loading.borrow_mut().game = Some(StateHandle::new(&game));
    game.borrow_mut().menu = Some(StateHandle::new(&menu));

    let result = EngineBuilder::new()
        .with_options(options)
        .build()
        .run(StateHandle::new(&menu));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// State Handle
//=========================================================================
//
// Non-owning reference to an application-owned state.
//
// The application keeps the `Rc<RefCell<T>>`; the manager only ever holds
// the weak side. Two handles are equal when they point at the same
// allocation.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

//=== Internal Dependencies ===============================================

use super::{State, StateContext};

//=== StateHandle =========================================================

/// Weak, cloneable reference to a [`State`] owned elsewhere.
///
/// # Example
///
/// ```rust
/// # use std::cell::RefCell;
/// # use std::rc::Rc;
/// # use campaign_client::prelude::*;
/// # struct Loading;
/// # impl State for Loading {
/// #     fn enter(&mut self) {}
/// #     fn update(&mut self, _ctx: &mut StateContext) {}
/// #     fn exit(&mut self) {}
/// # }
/// let loading = Rc::new(RefCell::new(Loading));
/// let handle = StateHandle::new(&loading);
///
/// assert!(handle.is_alive());
/// assert_eq!(handle, StateHandle::new(&loading));
/// ```
#[derive(Clone)]
pub struct StateHandle {
    state: Weak<RefCell<dyn State>>,
    name: &'static str,
}

impl StateHandle {
    //--- Construction -----------------------------------------------------

    /// Creates a handle to `state` without taking ownership of it.
    pub fn new<T>(state: &Rc<RefCell<T>>) -> Self
    where
        T: State + 'static,
    {
        let state: Rc<RefCell<dyn State>> = state.clone();
        Self {
            state: Rc::downgrade(&state),
            name: short_type_name::<T>(),
        }
    }

    /// Creates a handle that never points at a live state.
    ///
    /// Handing it to the manager is a contract violation and panics.
    pub fn dangling() -> Self {
        Self {
            state: Weak::<RefCell<Detached>>::new(),
            name: "<dangling>",
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the type name of the referenced state, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true while the owning application still holds the state.
    pub fn is_alive(&self) -> bool {
        self.state.strong_count() > 0
    }

    //--- Lifecycle Dispatch -----------------------------------------------

    pub(crate) fn enter(&self) {
        self.upgrade("enter").borrow_mut().enter();
    }

    pub(crate) fn update(&self, ctx: &mut StateContext) {
        self.upgrade("update").borrow_mut().update(ctx);
    }

    pub(crate) fn exit(&self) {
        self.upgrade("exit").borrow_mut().exit();
    }

    fn upgrade(&self, hook: &str) -> Rc<RefCell<dyn State>> {
        match self.state.upgrade() {
            Some(state) => state,
            None => panic!(
                "State {} was dropped before `{}` could be called on it",
                self.name, hook
            ),
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for StateHandle {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for StateHandle {}

impl fmt::Debug for StateHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateHandle({})", self.name)
    }
}

//--- Helpers -------------------------------------------------------------

// Placeholder type for `dangling()`; `Weak::new` needs a sized type.
struct Detached;

impl State for Detached {
    fn enter(&mut self) {}
    fn update(&mut self, _ctx: &mut StateContext) {}
    fn exit(&mut self) {}
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

//=== Tests ===============================================================

//! Ambient composition locals.
//!
//! The only local Trellis carries is the tab controller: descendants of a
//! bottom-navigation scaffold can read and change the active tab without the
//! controller being threaded through every widget in between. The scope is a
//! thread-local frame stack; `with_tab_controller` pushes a frame for the
//! duration of one subtree build and pops it on the way out, including on
//! unwind.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::signal::{Signal, signal};

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(t, v);
            st.borrow_mut().push(m);
        }
    });
}

/// Handle to the active tab of the nearest enclosing bottom-navigation
/// scaffold. Cloning shares the underlying slot.
#[derive(Clone)]
pub struct TabController {
    index: Signal<usize>,
}

impl TabController {
    pub fn new(initial: usize) -> Self {
        Self {
            index: signal(initial),
        }
    }

    pub fn current_index(&self) -> usize {
        self.index.get()
    }

    pub fn set_current_index(&self, i: usize) {
        self.index.set(i);
    }
}

/// Runs `f` with `ctrl` visible to `tab_controller()` in the subtree built
/// inside the closure.
pub fn with_tab_controller<R>(ctrl: TabController, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<TabController>(), Box::new(ctrl));
        f()
    })
}

/// Non-strict accessor: `None` outside any bottom-navigation subtree.
pub fn tab_controller() -> Option<TabController> {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<TabController>())
                && let Some(c) = v.downcast_ref::<TabController>()
            {
                return Some(c.clone());
            }
        }
        None
    })
}

/// Strict accessor. Panics when called outside a bottom-navigation subtree:
/// that is structural misuse of tab-scoped content, not a recoverable
/// condition.
pub fn require_tab_controller() -> TabController {
    tab_controller()
        .unwrap_or_else(|| panic!("tab controller requested outside a bottom-navigation scaffold"))
}

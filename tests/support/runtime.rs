//! Shared Tokio runtime helper for behavioural tests.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Ensures a Tokio runtime is initialised in `slot` and returns it.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created.
pub fn ensure_runtime(slot: &Slot<SharedRuntime>) -> Result<SharedRuntime, io::Error> {
    if slot.with_ref(|_| ()).is_none() {
        slot.set(SharedRuntime::new(Runtime::new()?));
    }

    slot.get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))
}

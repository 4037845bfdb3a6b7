//! Support modules for review action BDD tests.

pub(crate) mod state;

pub(crate) use state::{ActionState, reviews};

//! Deferred work returned by the page's update function.
//!
//! Handlers never await. Work that must suspend (a request to the site) is
//! returned as a [`Command`]: a future resolving to the message that
//! completes the interaction. The caller decides when to drive it, so every
//! optimistic state change is visible before the request resolves.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use super::messages::PageMsg;

type BoxedMessageFuture = Pin<Box<dyn Future<Output = PageMsg> + Send + 'static>>;

/// A pending request that resolves to its completion message.
pub struct Command(BoxedMessageFuture);

impl Command {
    /// Wraps a future producing a page message.
    pub fn new(future: impl Future<Output = PageMsg> + Send + 'static) -> Self {
        Self(Box::pin(future))
    }

    /// Drives the command to completion.
    pub async fn resolve(self) -> PageMsg {
        self.0.await
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Command(..)")
    }
}

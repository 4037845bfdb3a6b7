//! Scripted gateway for behavioural tests.
//!
//! Outcomes are queued per operation; when a queue is empty the request
//! succeeds. Every request is recorded so tests can assert on what the
//! controller sent.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::PageError;
use crate::reviews::FlagReason;

use super::{FlagReceipt, ReviewActionGateway};

/// A request observed by [`ScriptedGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    /// A deletion POST.
    Delete {
        /// URL the request targeted.
        url: String,
    },
    /// A flag POST.
    Flag {
        /// URL the request targeted.
        url: String,
        /// Reason carried in the form body.
        reason: FlagReason,
    },
}

#[derive(Debug, Default)]
struct Script {
    delete_outcomes: VecDeque<Result<(), PageError>>,
    flag_outcomes: VecDeque<Result<FlagReceipt, PageError>>,
    requests: Vec<RecordedRequest>,
}

/// Gateway returning queued outcomes and recording requests.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    script: Mutex<Script>,
}

impl ScriptedGateway {
    /// Creates a gateway where every request succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the outcome of the next deletion request.
    pub fn push_delete_outcome(&self, outcome: Result<(), PageError>) {
        self.with_script(|script| script.delete_outcomes.push_back(outcome));
    }

    /// Queues the outcome of the next flag request.
    pub fn push_flag_outcome(&self, outcome: Result<FlagReceipt, PageError>) {
        self.with_script(|script| script.flag_outcomes.push_back(outcome));
    }

    /// Returns every request observed so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.with_script(|script| script.requests.clone())
    }

    fn with_script<T>(&self, f: impl FnOnce(&mut Script) -> T) -> T {
        let mut guard = self
            .script
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut guard)
    }
}

#[async_trait]
impl ReviewActionGateway for ScriptedGateway {
    async fn delete_review(&self, delete_url: &str) -> Result<(), PageError> {
        self.with_script(|script| {
            script.requests.push(RecordedRequest::Delete {
                url: delete_url.to_owned(),
            });
            script.delete_outcomes.pop_front().unwrap_or(Ok(()))
        })
    }

    async fn flag_review(
        &self,
        flag_url: &str,
        reason: FlagReason,
    ) -> Result<FlagReceipt, PageError> {
        self.with_script(|script| {
            script.requests.push(RecordedRequest::Flag {
                url: flag_url.to_owned(),
                reason,
            });
            script
                .flag_outcomes
                .pop_front()
                .unwrap_or_else(|| Ok(FlagReceipt::default()))
        })
    }
}

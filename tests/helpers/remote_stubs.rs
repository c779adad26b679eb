//! Scripted remote sessions for exercising the dispatch layer.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use xref::search::RemoteError;
use xref::search::remote::{DeclarationResponse, RemoteSession, RemoteSessionProvider};
use xref::workspace::Workspace;

/// What a stub session does when invoked.
#[derive(Clone)]
pub enum Behavior {
    /// `try_acquire` returns `None`; no session is ever created.
    Unavailable,
    /// Respond with this declaration response.
    Respond(DeclarationResponse),
    /// Respond with this raw JSON value (for malformed/mismatched
    /// payload tests).
    RespondRaw(serde_json::Value),
    /// Fail the round-trip.
    FailTransport,
    /// Cancel the given token, then fail the round-trip.
    CancelThenFail(CancellationToken),
}

/// A provider handing out scripted sessions, recording every probe and
/// every invocation.
pub struct StubProvider {
    behavior: Behavior,
    pub acquires: Arc<AtomicUsize>,
    pub invocations: Arc<AtomicUsize>,
    /// (operation, payload) of each invocation.
    pub requests: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
}

impl StubProvider {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            acquires: Arc::new(AtomicUsize::new(0)),
            invocations: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn unavailable() -> Arc<Self> {
        Self::new(Behavior::Unavailable)
    }

    pub fn respond(response: DeclarationResponse) -> Arc<Self> {
        Self::new(Behavior::Respond(response))
    }

    pub fn failing() -> Arc<Self> {
        Self::new(Behavior::FailTransport)
    }

    pub fn acquire_count(&self) -> usize {
        self.acquires.load(Ordering::SeqCst)
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteSessionProvider for StubProvider {
    async fn try_acquire(&self, _workspace: &Workspace) -> Option<Box<dyn RemoteSession>> {
        self.acquires.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Unavailable => None,
            behavior => Some(Box::new(StubSession {
                behavior: behavior.clone(),
                invocations: self.invocations.clone(),
                requests: self.requests.clone(),
            })),
        }
    }
}

struct StubSession {
    behavior: Behavior,
    invocations: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
}

#[async_trait]
impl RemoteSession for StubSession {
    async fn invoke(
        &self,
        operation: &str,
        payload: serde_json::Value,
        _cancel: &CancellationToken,
    ) -> Result<serde_json::Value, RemoteError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push((operation.to_owned(), payload));
        match &self.behavior {
            Behavior::Unavailable => Err(RemoteError::Unavailable),
            Behavior::Respond(response) => {
                Ok(serde_json::to_value(response).expect("response serializes"))
            }
            Behavior::RespondRaw(value) => Ok(value.clone()),
            Behavior::FailTransport => Err(RemoteError::Transport("stub failure".into())),
            Behavior::CancelThenFail(token) => {
                token.cancel();
                Err(RemoteError::Transport("stub failure after cancel".into()))
            }
        }
    }
}

//! # Core Actor Framework
//!
//! ## Key Types
//!
//! - [`ActorState`]: State that a single task owns and mutates in response to requests.
//! - [`Actor`]: The event loop that owns the state and the receiving half of the mailbox.
//! - [`Mailbox`]: The cloneable sending half, used by clients.
//! - [`FrameworkError`]: Transport failures (actor gone, reply dropped).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// State that can be driven by an [`Actor`].
///
/// Requests carry their own reply channel, so `handle` answers by sending on
/// it. Handling is synchronous: the actor finishes one request before it
/// looks at the next, which makes every `handle` call a critical section
/// without any lock.
pub trait ActorState: Send + 'static {
    /// The message type accepted by this state.
    type Request: Send + Debug + 'static;

    /// Applies one request.
    fn handle(&mut self, request: Self::Request);

    /// Number of records held, reported in lifecycle logs.
    fn size(&self) -> usize {
        0
    }
}

// =============================================================================
// 2. ERRORS & REPLIES
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}

/// One-shot channel on which an actor answers a single request.
pub type Reply<T> = oneshot::Sender<T>;

// =============================================================================
// 3. THE ACTOR SERVER
// =============================================================================

/// Owns the state and the receiver end of the mailbox.
///
/// **Concurrency Model**: many clients may send at once, but the loop
/// processes requests one by one, so the state needs no `Mutex`.
pub struct Actor<S: ActorState> {
    receiver: mpsc::Receiver<S::Request>,
    state: S,
}

impl<S: ActorState> Actor<S> {
    /// Creates the actor and the mailbox that feeds it.
    ///
    /// A `buffer_size` of zero is raised to one.
    pub fn new(buffer_size: usize, state: S) -> (Self, Mailbox<S::Request>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, state };
        (actor, Mailbox::new(sender))
    }

    /// Runs the event loop until every [`Mailbox`] has been dropped, then
    /// hands the final state back.
    pub async fn run(mut self) -> S {
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        while let Some(request) = self.receiver.recv().await {
            debug!(state_type, ?request, "Request");
            self.state.handle(request);
        }

        info!(state_type, size = self.state.size(), "Shutdown");
        self.state
    }
}

// =============================================================================
// 4. THE CLIENT HALF
// =============================================================================

/// Sending half of an actor's mailbox.
pub struct Mailbox<R> {
    sender: mpsc::Sender<R>,
}

// Manual impl: deriving would require `R: Clone`.
impl<R> Clone for Mailbox<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R> Mailbox<R> {
    pub fn new(sender: mpsc::Sender<R>) -> Self {
        Self { sender }
    }

    /// Sends the request built by `make` and waits for the reply.
    ///
    /// # Errors
    /// - [`FrameworkError::ActorClosed`] if the actor has stopped.
    /// - [`FrameworkError::ActorDropped`] if the request was dropped unanswered.
    pub async fn request<T>(&self, make: impl FnOnce(Reply<T>) -> R) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// True once the actor side has gone away.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

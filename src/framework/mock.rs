//! # Mock Framework
//!
//! Utilities for testing clients without spawning the real actor.
//!
//! A [`MockMailbox`] answers each incoming request with the next scripted
//! handler, in order. Requests that arrive with no handler left are recorded
//! and dropped, so the caller sees [`FrameworkError::ActorDropped`](crate::framework::FrameworkError).
//!
//! ```ignore
//! let mut mock = MockMailbox::<LogisticsRequest>::new();
//! mock.expect(|request| match request {
//!     LogisticsRequest::TrackOrder { order_id, respond_to } => {
//!         let _ = respond_to.send(Err(LogisticsError::OrderNotFound(order_id)));
//!     }
//!     other => panic!("unexpected request: {other:?}"),
//! });
//!
//! let client = LogisticsClient::new(mock.mailbox());
//! // Use client in tests...
//! mock.verify(); // Ensures all expectations were met
//! ```

use crate::framework::Mailbox;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Handler<R> = Box<dyn FnOnce(R) + Send>;

/// A mailbox whose "actor" replays scripted handlers.
pub struct MockMailbox<R> {
    mailbox: Mailbox<R>,
    expectations: Arc<Mutex<VecDeque<Handler<R>>>>,
    unexpected: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<R: Debug + Send + 'static> MockMailbox<R> {
    /// Creates a new mock with no expectations. Must be called inside a
    /// Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<R>(100);
        let expectations: Arc<Mutex<VecDeque<Handler<R>>>> = Arc::new(Mutex::new(VecDeque::new()));
        let unexpected = Arc::new(Mutex::new(Vec::new()));

        let pending = expectations.clone();
        let strays = unexpected.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = pending.lock().expect("mock lock poisoned").pop_front();
                match next {
                    Some(handler) => handler(request),
                    None => strays
                        .lock()
                        .expect("mock lock poisoned")
                        .push(format!("{request:?}")),
                }
            }
        });

        Self {
            mailbox: Mailbox::new(sender),
            expectations,
            unexpected,
            _handle: handle,
        }
    }

    /// Queues a handler for the next request.
    pub fn expect(&mut self, handler: impl FnOnce(R) + Send + 'static) -> &mut Self {
        self.expectations
            .lock()
            .expect("mock lock poisoned")
            .push_back(Box::new(handler));
        self
    }

    /// Returns the mailbox for use in tests.
    pub fn mailbox(&self) -> Mailbox<R> {
        self.mailbox.clone()
    }

    /// Panics if a handler was never used or a request arrived unscripted.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock lock poisoned").len();
        assert_eq!(remaining, 0, "{remaining} expected request(s) never arrived");

        let unexpected = self.unexpected.lock().expect("mock lock poisoned");
        assert!(unexpected.is_empty(), "unexpected requests: {unexpected:?}");
    }
}

impl<R: Debug + Send + 'static> Default for MockMailbox<R> {
    fn default() -> Self {
        Self::new()
    }
}

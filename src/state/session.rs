//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route gates and user-aware components coordinate on this state: gated
//! pages wait for the pending resolution before constructing, and the
//! authenticator is the only writer.
//!
//! DESIGN
//! ======
//! The session is exactly one of unauthenticated, pending, or
//! authenticated. Each authentication attempt gets a fresh oneshot future
//! and an attempt token; a resolution carrying a stale token is discarded,
//! so a slow response from a superseded login can never apply to the
//! current attempt. The future always resolves — an abandoned attempt's
//! future resolves to `None` for anyone still awaiting it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::{BoxFuture, Shared};

use crate::net::types::User;

/// Token identifying one authentication attempt. Returned by
/// [`SessionState::begin_attempt`] and required by
/// [`SessionState::finish_attempt`].
pub type AttemptId = u64;

type Resolution = Shared<oneshot::Receiver<Option<User>>>;

/// Authentication state tracking the current user and the in-flight
/// resolution, shared via `RwSignal` context.
#[derive(Clone, Debug)]
pub struct SessionState {
    /// The authenticated user, if the latest attempt resolved with one.
    pub active_user: Option<User>,
    /// True while an authentication attempt is unresolved.
    pub pending: bool,
    attempt: AttemptId,
    sender: Arc<Mutex<Option<oneshot::Sender<Option<User>>>>>,
    resolution: Resolution,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// A fresh session starts pending, awaiting the cookie bootstrap.
    pub fn new() -> Self {
        let (sender, receiver) = oneshot::channel();
        Self {
            active_user: None,
            pending: true,
            attempt: 0,
            sender: Arc::new(Mutex::new(Some(sender))),
            resolution: receiver.shared(),
        }
    }

    /// The token of the current (pending or most recently resolved)
    /// attempt.
    pub fn current_attempt(&self) -> AttemptId {
        self.attempt
    }

    /// Reset to pending with a fresh unresolved future and return the new
    /// attempt's token. Dropping the previous sender resolves any
    /// still-held handle on the superseded future to `None`.
    pub fn begin_attempt(&mut self) -> AttemptId {
        let (sender, receiver) = oneshot::channel();
        self.active_user = None;
        self.pending = true;
        self.attempt += 1;
        self.sender = Arc::new(Mutex::new(Some(sender)));
        self.resolution = receiver.shared();
        self.attempt
    }

    /// Resolve the attempt identified by `attempt` with `user` (possibly
    /// `None` for unauthenticated). A stale token is discarded; returns
    /// whether the resolution applied.
    ///
    /// Resolving the same attempt twice keeps the first future value but
    /// still replaces `active_user`.
    pub fn finish_attempt(&mut self, attempt: AttemptId, user: Option<User>) -> bool {
        if attempt != self.attempt {
            log::debug!("discarding resolution for superseded auth attempt {attempt}");
            return false;
        }
        if let Ok(mut slot) = self.sender.lock() {
            if let Some(sender) = slot.take() {
                let _ = sender.send(user.clone());
            }
        }
        self.active_user = user;
        self.pending = false;
        true
    }

    /// A future for the current attempt's outcome. Resolves exactly once,
    /// to the authenticated user or `None`; never errors.
    pub fn user_future(&self) -> BoxFuture<'static, Option<User>> {
        let resolution = self.resolution.clone();
        async move { resolution.await.unwrap_or(None) }.boxed()
    }
}

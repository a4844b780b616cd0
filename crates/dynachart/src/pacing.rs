//! Frame pacing and cooperative cancellation

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

use dynachart_core::{Error, Result};

/// Shared flag used to stop an animation between frames
///
/// Cloning yields a handle to the same flag, so another thread can call
/// [`cancel`](Self::cancel) while the animation runs.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake any pacer waiting on this token
    pub fn cancel(&self) {
        let (lock, cvar) = &*self.inner;
        *lock.lock().unwrap_or_else(PoisonError::into_inner) = true;
        cvar.notify_all();
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        *self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Block for `timeout` or until cancelled; returns true if cancelled
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let deadline = Instant::now() + timeout;
        let mut cancelled = lock.lock().unwrap_or_else(PoisonError::into_inner);
        while !*cancelled {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _) = cvar
                .wait_timeout(cancelled, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            cancelled = guard;
        }
        true
    }
}

/// Inter-frame delay primitive
pub trait Pacer {
    /// Suspend for at least `delay`
    ///
    /// Returns [`Error::Cancelled`] if the wait was cut short.
    fn pause(&mut self, delay: Duration) -> Result<()>;
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, delay: Duration) -> Result<()> {
        (**self).pause(delay)
    }
}

/// Sleeps the current thread, waking early on cancellation
#[derive(Debug, Clone, Default)]
pub struct ThreadPacer {
    cancel: Option<CancelToken>,
}

impl ThreadPacer {
    /// A pacer that always sleeps the full delay
    pub fn new() -> Self {
        Self::default()
    }

    /// A pacer that stops waiting when `token` is cancelled
    pub fn cancellable(token: CancelToken) -> Self {
        Self {
            cancel: Some(token),
        }
    }
}

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) -> Result<()> {
        if delay.is_zero() {
            return Ok(());
        }
        match &self.cancel {
            Some(token) => {
                if token.wait_timeout(delay) {
                    Err(Error::Cancelled)
                } else {
                    Ok(())
                }
            }
            None => {
                std::thread::sleep(delay);
                Ok(())
            }
        }
    }
}

/// Never waits
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&mut self, _delay: Duration) -> Result<()> {
        Ok(())
    }
}

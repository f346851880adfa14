//! Library lifecycle guard.
//!
//! Indicator functions in [`crate::indicators`] are pure and never consult
//! global state. Hosts that need an explicit initialize/shutdown window (the
//! registry dispatch in `tacalc-registry`, or callers wrapping the library for
//! another runtime) thread a [`Context`] through their calls and gate each
//! computation on [`Context::ensure_ready`].
//!
//! The context is a three-state machine. Only the transitions
//! `Uninitialized -> Ready -> ShutDown` are accepted; every other request is a
//! [`Error::Lifecycle`]. State lives in an atomic, so a context may be shared
//! across threads without a lock.
//!
//! # Example
//!
//! ```
//! use tacalc::context::{Context, ContextState};
//!
//! let ctx = Context::new();
//! assert!(ctx.ensure_ready().is_err());
//!
//! ctx.initialize().unwrap();
//! let sum = ctx.run(|| Ok(1 + 1)).unwrap();
//! assert_eq!(sum, 2);
//!
//! ctx.shutdown().unwrap();
//! assert_eq!(ctx.state(), ContextState::ShutDown);
//! assert!(ctx.run(|| Ok(())).is_err());
//! ```

use std::sync::atomic::{AtomicU8, Ordering};

use strum::Display;

use crate::error::{Error, Result};

/// Lifecycle state of a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ContextState {
    /// Created, not yet initialized. Computation is rejected.
    #[strum(serialize = "uninitialized")]
    Uninitialized,
    /// Initialized. Computation is permitted.
    #[strum(serialize = "ready")]
    Ready,
    /// Shut down. Terminal; computation is rejected.
    #[strum(serialize = "shut down")]
    ShutDown,
}

impl ContextState {
    const fn to_u8(self) -> u8 {
        match self {
            Self::Uninitialized => 0,
            Self::Ready => 1,
            Self::ShutDown => 2,
        }
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Uninitialized,
            1 => Self::Ready,
            _ => Self::ShutDown,
        }
    }
}

/// Explicit initialize/shutdown guard for computation calls.
#[derive(Debug)]
pub struct Context {
    state: AtomicU8,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context in the [`ContextState::Uninitialized`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(ContextState::Uninitialized.to_u8()),
        }
    }

    /// Creates a context that is already [`ContextState::Ready`].
    #[must_use]
    pub const fn ready() -> Self {
        Self {
            state: AtomicU8::new(ContextState::Ready.to_u8()),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> ContextState {
        ContextState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Returns `true` when computation is permitted.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state() == ContextState::Ready
    }

    /// Moves the context from `Uninitialized` to `Ready`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lifecycle`] if the context was already initialized or
    /// has been shut down.
    pub fn initialize(&self) -> Result<()> {
        self.transition(
            ContextState::Uninitialized,
            ContextState::Ready,
            "initialize",
        )
    }

    /// Moves the context from `Ready` to `ShutDown`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lifecycle`] if the context was never initialized or
    /// is already shut down.
    pub fn shutdown(&self) -> Result<()> {
        self.transition(ContextState::Ready, ContextState::ShutDown, "shut down")
    }

    /// Fails fast unless the context is `Ready`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lifecycle`] carrying the current state.
    pub fn ensure_ready(&self) -> Result<()> {
        match self.state() {
            ContextState::Ready => Ok(()),
            state => Err(Error::Lifecycle {
                state,
                operation: "compute",
            }),
        }
    }

    /// Runs `f` if the context is ready.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lifecycle`] without calling `f` when the context is
    /// not ready, otherwise whatever `f` returns.
    pub fn run<R>(&self, f: impl FnOnce() -> Result<R>) -> Result<R> {
        self.ensure_ready()?;
        f()
    }

    fn transition(
        &self,
        from: ContextState,
        to: ContextState,
        operation: &'static str,
    ) -> Result<()> {
        match self.state.compare_exchange(
            from.to_u8(),
            to.to_u8(),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                log::debug!("context {from} -> {to}");
                Ok(())
            }
            Err(raw) => {
                let state = ContextState::from_u8(raw);
                log::warn!("rejected context transition: cannot {operation} while {state}");
                Err(Error::Lifecycle { state, operation })
            }
        }
    }
}

static GLOBAL: Context = Context::new();

/// Returns the process-wide context used by [`initialize`] and [`shutdown`].
#[must_use]
pub fn global() -> &'static Context {
    &GLOBAL
}

/// Initializes the process-wide context.
///
/// Call once at startup, before any concurrent computation begins.
///
/// # Errors
///
/// Returns [`Error::Lifecycle`] if the process-wide context has already been
/// initialized or shut down.
pub fn initialize() -> Result<()> {
    GLOBAL.initialize()
}

/// Shuts the process-wide context down. Terminal.
///
/// # Errors
///
/// Returns [`Error::Lifecycle`] if the process-wide context is not ready.
pub fn shutdown() -> Result<()> {
    GLOBAL.shutdown()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_rejects_compute() {
        let ctx = Context::new();
        assert_eq!(ctx.state(), ContextState::Uninitialized);
        let err = ctx.ensure_ready().unwrap_err();
        assert_eq!(
            err,
            Error::Lifecycle {
                state: ContextState::Uninitialized,
                operation: "compute",
            }
        );
    }

    #[test]
    fn test_full_lifecycle() {
        let ctx = Context::new();
        ctx.initialize().unwrap();
        assert!(ctx.is_ready());
        assert!(ctx.ensure_ready().is_ok());
        ctx.shutdown().unwrap();
        assert_eq!(ctx.state(), ContextState::ShutDown);
        assert!(ctx.ensure_ready().is_err());
    }

    #[test]
    fn test_double_initialize_rejected() {
        let ctx = Context::new();
        ctx.initialize().unwrap();
        let err = ctx.initialize().unwrap_err();
        assert!(matches!(
            err,
            Error::Lifecycle {
                state: ContextState::Ready,
                operation: "initialize",
            }
        ));
    }

    #[test]
    fn test_shutdown_before_initialize_rejected() {
        let ctx = Context::new();
        assert!(ctx.shutdown().is_err());
        assert_eq!(ctx.state(), ContextState::Uninitialized);
    }

    #[test]
    fn test_shutdown_is_terminal() {
        let ctx = Context::ready();
        ctx.shutdown().unwrap();
        assert!(ctx.initialize().is_err());
        assert!(ctx.shutdown().is_err());
        assert_eq!(ctx.state(), ContextState::ShutDown);
    }

    #[test]
    fn test_run_skips_closure_when_not_ready() {
        let ctx = Context::new();
        let mut called = false;
        let result = ctx.run(|| {
            called = true;
            Ok(())
        });
        assert!(result.is_err());
        assert!(!called);
    }

    #[test]
    fn test_concurrent_initialize_has_single_winner() {
        use std::sync::Arc;
        use std::thread;

        let ctx = Arc::new(Context::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ctx = Arc::clone(&ctx);
                thread::spawn(move || ctx.initialize().is_ok())
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();
        assert_eq!(winners, 1);
        assert!(ctx.is_ready());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ContextState::Uninitialized.to_string(), "uninitialized");
        assert_eq!(ContextState::Ready.to_string(), "ready");
        assert_eq!(ContextState::ShutDown.to_string(), "shut down");
    }
}

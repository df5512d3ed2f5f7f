//! Background scroll lock.
//!
//! [`ScrollLock`] is a guard: acquiring it hides the page overflow and
//! dropping it restores whatever value was there before, so the page is
//! released on every exit path including teardown.

use crate::error::Result;

/// Overflow value applied while the lock is held.
pub const LOCKED_OVERFLOW: &str = "hidden";

/// The page element whose overflow style is locked.
pub trait ScrollHost {
    /// Current inline overflow value (empty when unset).
    fn overflow(&self) -> Result<String>;

    /// Replace the inline overflow value.
    fn set_overflow(&self, value: &str) -> Result<()>;
}

/// Held while the modal is open.
#[derive(Debug)]
pub struct ScrollLock<H: ScrollHost> {
    host: H,
    previous: String,
}

impl<H: ScrollHost> ScrollLock<H> {
    /// Lock scrolling on `host`.
    pub fn acquire(host: H) -> Result<Self> {
        let previous = host.overflow()?;
        host.set_overflow(LOCKED_OVERFLOW)?;
        log::trace!("scroll locked (previous overflow {previous:?})");
        Ok(Self { host, previous })
    }
}

impl<H: ScrollHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        match self.host.set_overflow(&self.previous) {
            Ok(()) => log::trace!("scroll unlocked"),
            Err(e) => log::warn!("failed to restore page scrolling: {e}"),
        }
    }
}

/// Optional lock kept in step with the modal's open flag.
#[derive(Debug)]
pub struct ScrollLockSlot<H: ScrollHost> {
    lock: Option<ScrollLock<H>>,
}

impl<H: ScrollHost> Default for ScrollLockSlot<H> {
    fn default() -> Self {
        Self { lock: None }
    }
}

impl<H: ScrollHost> ScrollLockSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire or release so that the slot is locked exactly when `locked`.
    ///
    /// `host` is only called when a new lock has to be acquired.
    pub fn sync(&mut self, locked: bool, host: impl FnOnce() -> Result<H>) -> Result<()> {
        match (locked, self.lock.is_some()) {
            (true, false) => self.lock = Some(ScrollLock::acquire(host()?)?),
            (false, true) => self.release(),
            _ => {}
        }
        Ok(())
    }

    /// Drop the held lock, if any.
    pub fn release(&mut self) {
        self.lock = None;
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }
}

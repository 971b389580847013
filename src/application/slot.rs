//! Run-once holder for the composed application.

use super::{Application, StartupError, StartupResult};
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::warn;

/// Holds at most one [`Application`] for the life of the slot.
///
/// Startup runs under an admission lock so concurrent initialisers cannot
/// both compose. A failed startup leaves the slot empty.
#[derive(Debug, Default)]
pub struct ApplicationSlot {
    cell: OnceLock<Application>,
    admission: Mutex<()>,
}

impl ApplicationSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            admission: Mutex::new(()),
        }
    }

    /// Runs `startup` and stores its application.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::AlreadyInitialized`] without running
    /// `startup` when the slot is already filled, or the error `startup`
    /// returned.
    pub fn initialize<F>(&self, startup: F) -> StartupResult<&Application>
    where
        F: FnOnce() -> StartupResult<Application>,
    {
        let _admitted = self
            .admission
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.cell.get().is_some() {
            warn!("application startup requested twice");
            return Err(StartupError::AlreadyInitialized);
        }

        let application = startup()?;
        self.cell
            .set(application)
            .map_err(|_| StartupError::AlreadyInitialized)?;
        self.get()
    }

    /// Returns the stored application.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::NotInitialized`] before a successful
    /// [`Self::initialize`].
    pub fn get(&self) -> StartupResult<&Application> {
        self.cell.get().ok_or(StartupError::NotInitialized)
    }

    /// Reports whether the slot holds an application.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

static APPLICATION: ApplicationSlot = ApplicationSlot::new();

/// Initialises the process-wide application.
///
/// # Errors
///
/// See [`ApplicationSlot::initialize`].
pub fn initialize<F>(startup: F) -> StartupResult<&'static Application>
where
    F: FnOnce() -> StartupResult<Application>,
{
    APPLICATION.initialize(startup)
}

/// Returns the process-wide application.
///
/// # Errors
///
/// Returns [`StartupError::NotInitialized`] before [`initialize`] succeeds.
pub fn application() -> StartupResult<&'static Application> {
    APPLICATION.get()
}

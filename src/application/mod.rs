//! Application startup for gropius.
//!
//! Startup reads [`StartupSettings`], loads the declared configuration,
//! composes the service units into a fresh root, and applies startup
//! extensions. The resulting [`Application`] is stored once in an
//! [`ApplicationSlot`]; the process-wide slot is reached through
//! [`initialize`] and [`application`].

mod settings;
mod slot;
mod startup;

pub use settings::{CONFIG_VAR, EXTENSIONS_VAR, ROOT_KIND_VAR, StartupSettings};
pub use slot::{ApplicationSlot, application, initialize};
pub use startup::{Application, Startup, StartupError, StartupResult};

#[cfg(test)]
mod tests;

//! # System Lifecycle
//!
//! Creating, wiring and stopping the actors, plus the ambient setup around them:
//!
//! - [`RestaurantSystem`] - starts every actor with its dependencies and shuts them down
//! - [`SystemConfig`] - mailbox sizing, from defaults or the environment
//! - [`setup_tracing`] - the log subscriber used by the binary
//!
//! Dependencies are injected when an actor starts (`run(context)`), never at
//! construction, so all actors can be created before any of them is wired.

pub mod config;
pub mod restaurant_system;
pub mod tracing;

pub use self::config::*;
pub use self::restaurant_system::*;
pub use self::tracing::*;

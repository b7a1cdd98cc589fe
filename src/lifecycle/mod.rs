//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Tests drive shutdown through the broadcast channel instead of signals
//! - In-flight submissions finish their delay before the server exits

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;

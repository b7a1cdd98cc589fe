//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; filter configurable through the env
//! - Request ID flows through request and response headers
//! - Metrics are cheap (atomic increments) and off by default

pub mod logging;
pub mod metrics;

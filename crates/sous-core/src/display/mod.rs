//! Display formatting for models, snapshots and operation feedback.
//!
//! Domain types implement [`std::fmt::Display`] directly and produce
//! markdown; small newtype wrappers cover values that need a specific
//! format (clock readouts, duration labels, local times).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Session         │    │ SessionSnapshot │    │   Markdown      │
//! │ (mutable state) │───▶│ (derived, owned)│───▶│ (terminal/JSON) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`time`]: `MM:SS` clock, duration labels, local wall-clock times
//! - [`models`]: Display implementations for recipes, steps, statuses
//! - [`snapshot`]: Display of a whole session screen
//! - [`status`]: Success/error feedback lines (OperationStatus)
//!
//! ## Usage Examples
//!
//! ```rust
//! use sous_core::display::{Clock, DurationLabel, OperationStatus};
//!
//! assert_eq!(Clock(1800).to_string(), "30:00");
//! assert_eq!(DurationLabel(660).to_string(), "11 minutes");
//!
//! let status = OperationStatus::failure("Please check off all ingredients before starting!");
//! assert!(status.to_string().starts_with("Error:"));
//! ```

pub mod models;
pub mod snapshot;
pub mod status;
pub mod time;

pub use status::OperationStatus;
pub use time::{Clock, DurationLabel, LocalTime};

//! `airlift-output` — rendering and persistence collaborators.
//!
//! The engine only exposes data; everything user-facing lives here:
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`console`]| `ConsoleObserver` — per-tick state lines and summary block |
//! | [`series`] | `WaitSeriesWriter` — raw wait-time series as CSV files     |
//! | [`batch`]  | `JsonBatchWriter` — `{parameter: [RunSummary]}` JSON       |
//! | [`error`]  | `OutputError`, `OutputResult`                              |
//!
//! Histogram rendering itself is out of scope; the CSV series are written so
//! an external plotting tool can bin them.

pub mod batch;
pub mod console;
pub mod error;
pub mod series;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use batch::JsonBatchWriter;
pub use console::ConsoleObserver;
pub use error::{OutputError, OutputResult};
pub use series::WaitSeriesWriter;

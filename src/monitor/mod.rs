// src/monitor/mod.rs
//! State observation pipeline
//!
//! Philosophers produce state-change events; a single drain loop consumes
//! them in batches and hands them to a renderer:
//!
//! ```text
//! Philosopher → record() → EventLog ── swap ──→ Monitor ──→ Renderer
//!   (any thread, short lock)  (Mutex<Vec> + Condvar)    (render outside lock)
//! ```
//!
//! - **Event Log**: locked queue, appended by any philosopher, swapped out
//!   wholesale by the drain loop
//! - **Monitor**: drain loop with an idle-timeout liveness watchdog
//! - **Renderer**: pluggable batch output, one line per event or a
//!   fixed-width waterfall snapshot

pub mod event_log;
pub mod renderer;
pub mod watcher;

// Re-export commonly used types
pub use event_log::{EventLog, StateEvent};
pub use renderer::{LineRenderer, Renderer, WaterfallRenderer};
pub use watcher::Monitor;

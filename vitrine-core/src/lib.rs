//! Vitrine Core — content model and presentational controller state machines.
//!
//! Each controller owns its state explicitly (no shared globals) and is
//! driven by a caller-supplied monotonic clock in milliseconds:
//! - mutate via operations (`request`, `select`, `submit`, ...)
//! - advance deferred completions via `advance(now_ms)`
//! - read a declarative visual snapshot via `visual_state(now_ms)`
//!
//! Adapters (the TUI, the CLI script runner) render the snapshots; the
//! controllers never touch a display themselves.

pub mod carousel;
pub mod clock;
pub mod content;
pub mod counter;
pub mod easing;
pub mod filter;
pub mod form;
pub mod geometry;
pub mod particles;
pub mod preloader;
pub mod reveal;
pub mod scrollstate;
pub mod typewriter;

//! Global assembly of all scanners into one frame.
//!
//! ## Resolution loop
//!
//! ```text
//!   resolved: [root]              unresolved: {1, 2, 3, ...}
//!        │                               │
//!        └──────────┬────────────────────┘
//!                   ▼
//!          every (resolved, unresolved) pair not tried before
//!                   │
//!                   ▼  OverlapMatcher::match_pair
//!          overlap? ──no──▶ remember pair
//!                   │yes
//!                   ▼
//!          global = reference.global ∘ local ──▶ move to resolved
//! ```
//!
//! A pass that places nothing while scanners remain is a stall: those
//! scanners are not connected to the root through any chain of overlaps.
//!
//! With `worker_threads > 1` the pairs of one pass are matched on scoped
//! worker threads. Placement stays on the calling thread, and each candidate
//! is placed through its earliest-resolved overlapping reference, so the
//! result does not depend on thread timing.

mod assembler;
mod config;
mod parallel;
mod types;

pub use assembler::GlobalAssembler;
pub use config::AssemblyConfig;
pub use types::{Assembly, AssemblyStats};

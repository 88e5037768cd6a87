//! Global assembly configuration.

use serde::{Deserialize, Serialize};

use crate::core::ScannerId;

/// Configuration for the global assembler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// Scanner whose frame becomes the global frame.
    /// `None` = the first scanner in the input.
    #[serde(default)]
    pub root: Option<ScannerId>,

    /// Threads used for pairwise matching within a pass.
    /// 1 = sequential, 0 = one per available core.
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,

    /// Never retry a (resolved, unresolved) pair that already failed.
    /// The overlap of two scanners depends only on their beacon lists.
    #[serde(default = "default_true")]
    pub skip_tried_pairs: bool,
}

fn default_worker_threads() -> usize {
    1
}

fn default_true() -> bool {
    true
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            root: None,
            worker_threads: default_worker_threads(),
            skip_tried_pairs: true,
        }
    }
}

impl AssemblyConfig {
    /// Parallel matching with one worker per available core.
    pub fn parallel() -> Self {
        Self {
            worker_threads: 0,
            ..Default::default()
        }
    }

    /// Use `root` as the global frame.
    pub fn with_root(mut self, root: impl Into<ScannerId>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Number of worker threads to actually run.
    pub fn effective_workers(&self) -> usize {
        match self.worker_threads {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }
}

//! Configuration loading for VastuBeacon.
//!
//! Everything has a built-in default; a YAML file only needs the fields it
//! changes.
//!
//! ```rust,ignore
//! use vastu_beacon::config::RegistrationConfig;
//!
//! // configs/registration.yaml, or defaults when the file is absent
//! let config = RegistrationConfig::load_default()?;
//! let assembler = GlobalAssembler::from_config(&config);
//! ```
//!
//! ## Sections
//!
//! | Section | Type | Description |
//! |---------|------|-------------|
//! | `overlap` | [`OverlapConfig`](crate::matching::OverlapConfig) | Pairwise matching thresholds |
//! | `assembly` | [`AssemblyConfig`](crate::assembly::AssemblyConfig) | Root choice, worker threads |
//!
//! ## Example YAML
//!
//! ```yaml
//! overlap:
//!   min_shared_beacons: 12
//!   min_distance_matches: 11
//!   verify_correspondences: true
//! assembly:
//!   root: 0
//!   worker_threads: 4
//! ```

mod error;
mod registration;

pub use error::ConfigLoadError;
pub use registration::{DEFAULT_CONFIG_PATH, RegistrationConfig};

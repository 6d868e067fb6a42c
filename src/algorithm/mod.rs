//! Tunnel computation algorithms
//!
//! Leaf modules first: status resolution and track classification feed the
//! sequence builder, whose output the activation scan and progress value
//! turn into the tunnel view. The timeline merge and the duplicate scan
//! run independently over the same person's records.

pub mod activation;
pub mod duplicate;
pub mod sequence;
pub mod status;
pub mod timeline;
pub mod track;
pub mod tunnel;

pub use activation::{mark_active_step, progress};
pub use duplicate::{duplicate_reference, find_duplicate_reference};
pub use sequence::{StepStatusSource, StepTemplate, build_steps, layout};
pub use status::resolve;
pub use timeline::merge_timeline;
pub use track::classify;
pub use tunnel::{attempted_tiers, build_tunnel};

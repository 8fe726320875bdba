//! Transient editor state and pointer dismissal
//!
//! Independent of the terminal front end so the state machine can be
//! driven and tested without a screen.

pub mod affordance;
pub mod regions;

pub use affordance::{Affordance, Dismissed, InteractionState};
pub use regions::{Bounds, RegionKind, RegionRegistry};

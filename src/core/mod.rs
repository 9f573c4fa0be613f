//! Frontend-agnostic session logic.
//!
//! Everything in here is pure state: input events, the navigation state
//! machine, and the symmetric-row reducer. Rendering lives in `crate::ui`.

pub mod events;
pub mod navigation;
pub mod pairing;

pub use events::SheetEvent;
pub use navigation::{Flow, NavTarget, Navigator};

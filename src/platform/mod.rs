//! Platform abstraction layer
//!
//! Handles the host-facing side of a session:
//! - Time/ticks (velocity-paced enemy moves)
//! - Visibility/focus detection (pause on focus loss)
//! - Game-over hand-off to high score storage
//! - Pointer input mapping and the browser host loop

pub mod input;
pub mod ticker;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{hold_event, tap_event};
pub use ticker::Ticker;

//! Library exports for the inkmask drawing surface.
//!
//! The crate is split the same way a host embeds it: [`input::InputState`]
//! receives pointer events and owns the stroke store, [`draw`] holds the
//! stroke model, compositor and Cairo painting, and [`export`] renders a
//! surface headlessly. [`replay`] drives a surface from a TOML script.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
pub use input::InputState;

//! Hardcoded content for the neonfolio page.
//!
//! Every record in this crate is a `'static` literal. Nothing here is mutated
//! at runtime; components read these tables when they mount.

mod color;
mod content;

pub use color::{Accent, ColorParseError, Rgb, palette};
pub use content::*;

//! Time-driven text and widget effects.
//!
//! Everything here is a pure state machine over a millisecond clock; the web
//! crate feeds it timer and pointer events and writes the results to the DOM.

mod counter;
mod glitch;
mod hero;
mod matrix_rain;
mod progress_ring;
mod radar;
pub mod syntax;
mod tilt;
mod typing;

pub use counter::CounterAnimation;
pub use glitch::{GlitchLayers, GlitchState};
pub use hero::{CURSOR_BLINK_MS, HeroFrame, HeroTerminal};
pub use matrix_rain::{MatrixRain, RainGlyph};
pub use progress_ring::ProgressRing;
pub use radar::RadarChart;
pub use tilt::{CardRect, TiltState};
pub use typing::{TypingEffect, TypingEvent};

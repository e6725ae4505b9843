//! Platform-agnostic core of the neonfolio page.
//!
//! Animation timelines, scroll and navigation state, the decorative scene
//! catalog and its glow renderer. Nothing here touches the DOM; the web crate
//! drives these types from browser events and writes the results back.

pub mod background;
pub mod boundary;
pub mod contact;
pub mod effects;
pub mod error;
pub mod gl;
pub mod nav;
pub mod random;
pub mod reveal;
pub mod scene;
pub mod scroll;

pub use background::{BackgroundMode, BackgroundPlan, GlowOrb, Layer, OrbAnchor};
pub use boundary::Boundary;
pub use contact::{ContactDraft, ContactForm, ContactTransport, FormPhase, SubmitOutcome};
pub use error::Error;
pub use gl::{Drawable, GlState, RenderContext, SceneRenderer};
pub use nav::{ActiveSectionTracker, MenuState, SectionRect};
pub use random::RandomSource;
pub use reveal::RevealTracker;
pub use scene::{Camera, Frame, Scene};
pub use scroll::{ScrollObservable, ScrollSnapshot, Subscription, nav_backdrop_alpha};

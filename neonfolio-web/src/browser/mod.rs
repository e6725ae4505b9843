//! RAII handles over browser callbacks.
//!
//! Every listener, timer and animation frame registration is owned by a
//! handle that deregisters it on drop, so unmounting a component is just
//! dropping it.

mod context_loss;
mod frame;
mod listener;
mod timer;

pub(crate) use context_loss::ContextLossHandler;
pub(crate) use frame::AnimationFrameLoop;
pub(crate) use listener::EventListener;
pub(crate) use timer::{Interval, Timeout};

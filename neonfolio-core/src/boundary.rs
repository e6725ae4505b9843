//! Failure containment for independently mounted parts of the page.

use std::fmt::Display;

use compact_str::{CompactString, ToCompactString};

/// Wraps a component so that its failure only replaces that component.
///
/// A boundary starts live when its constructor succeeds. The first error,
/// whether from mounting or from a later update, is logged and switches the
/// boundary permanently to crashed; the wrapped value is dropped, which
/// releases its resources. There is no retry.
#[derive(Debug)]
pub struct Boundary<T> {
    label: &'static str,
    state: State<T>,
}

#[derive(Debug)]
enum State<T> {
    Live(T),
    Crashed(CompactString),
}

impl<T> Boundary<T> {
    /// Runs a fallible constructor inside the boundary.
    pub fn mount<E: Display>(label: &'static str, init: impl FnOnce() -> Result<T, E>) -> Self {
        let state = match init() {
            Ok(value) => State::Live(value),
            Err(e) => trip(label, &e),
        };

        Self { label, state }
    }

    /// Runs a fallible update against the live value.
    ///
    /// Does nothing once the boundary has crashed.
    pub fn update<E: Display>(&mut self, f: impl FnOnce(&mut T) -> Result<(), E>) {
        if let State::Live(value) = &mut self.state
            && let Err(e) = f(value)
        {
            self.state = trip(self.label, &e);
        }
    }

    /// Forces the boundary into the crashed state.
    pub fn crash<E: Display>(&mut self, error: &E) {
        if self.is_live() {
            self.state = trip(self.label, error);
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self.state, State::Live(_))
    }

    #[must_use]
    pub fn as_live(&self) -> Option<&T> {
        match &self.state {
            State::Live(value) => Some(value),
            State::Crashed(_) => None,
        }
    }

    pub fn as_live_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            State::Live(value) => Some(value),
            State::Crashed(_) => None,
        }
    }

    /// The error message, if the boundary has crashed.
    #[must_use]
    pub fn crash_reason(&self) -> Option<&str> {
        match &self.state {
            State::Live(_) => None,
            State::Crashed(reason) => Some(reason),
        }
    }
}

fn trip<T, E: Display>(label: &'static str, error: &E) -> State<T> {
    tracing::error!(boundary = label, error = %error, "boundary caught an error");
    State::Crashed(error.to_compact_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn failing_constructor_leaves_siblings_live() {
        let scene: Boundary<u32> = Boundary::mount("scene", || Err(Error::context_lost()));
        let hero = Boundary::mount("hero", || Ok::<_, Error>("hero"));
        let contact = Boundary::mount("contact", || Ok::<_, Error>("contact"));

        assert!(!scene.is_live());
        assert_eq!(scene.crash_reason(), Some("Scene error: rendering context lost"));
        assert_eq!(hero.as_live(), Some(&"hero"));
        assert_eq!(contact.as_live(), Some(&"contact"));
    }

    #[test]
    fn update_error_trips_permanently() {
        let mut counter = Boundary::mount("counter", || Ok::<_, Error>(0u32));

        counter.update(|n| {
            *n += 1;
            Ok::<_, Error>(())
        });
        assert_eq!(counter.as_live(), Some(&1));

        counter.update(|_| Err(Error::context_lost()));
        assert!(!counter.is_live());

        let mut ran = false;
        counter.update(|_| {
            ran = true;
            Ok::<_, Error>(())
        });
        assert!(!ran);
        assert_eq!(counter.label(), "counter");
    }

    #[test]
    fn crash_is_idempotent() {
        let mut b = Boundary::mount("b", || Ok::<_, Error>(()));
        b.crash(&"first");
        b.crash(&"second");
        assert_eq!(b.crash_reason(), Some("first"));
    }
}

//! Page-wide scroll observation.
//!
//! One [`ScrollObservable`] exists per mounted page. The browser scroll
//! listener publishes into it and every consumer (scene, orbs, navigation,
//! progress bar, reveal trackers) receives a [`ScrollSnapshot`] by value.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

/// Scroll offset at the time of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSnapshot {
    /// Vertical scroll offset in CSS pixels, `window.scrollY`.
    pub offset: f32,
    /// Largest reachable offset, `scrollHeight - innerHeight`.
    pub max_offset: f32,
}

impl ScrollSnapshot {
    #[must_use]
    pub fn new(offset: f32, max_offset: f32) -> Self {
        Self { offset: offset.max(0.0), max_offset: max_offset.max(0.0) }
    }

    /// Fraction of the page scrolled, `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.max_offset <= 0.0 {
            0.0
        } else {
            (self.offset / self.max_offset).clamp(0.0, 1.0)
        }
    }
}

/// Offset at which the navigation bar backdrop reaches full strength.
pub const NAV_BACKDROP_FULL_AT: f32 = 100.0;
/// Opacity of the navigation backdrop when fully visible.
pub const NAV_BACKDROP_MAX_ALPHA: f32 = 0.95;

/// Backdrop opacity of the navigation bar for a scroll offset.
#[must_use]
pub fn nav_backdrop_alpha(offset: f32) -> f32 {
    (offset / NAV_BACKDROP_FULL_AT).clamp(0.0, 1.0) * NAV_BACKDROP_MAX_ALPHA
}

type Callback = Box<dyn FnMut(ScrollSnapshot)>;

struct Subscriber {
    id: u64,
    callback: Callback,
}

#[derive(Default)]
struct Inner {
    next_id: Cell<u64>,
    latest: Cell<ScrollSnapshot>,
    subscribers: RefCell<Vec<Subscriber>>,
    publishing: Cell<bool>,
    // subscriptions dropped while a publish is in flight
    pending_removal: RefCell<Vec<u64>>,
}

/// Shared scroll signal with subscribe/unsubscribe semantics.
#[derive(Clone, Default)]
pub struct ScrollObservable {
    inner: Rc<Inner>,
}

impl ScrollObservable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback for every future scroll update.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl FnMut(ScrollSnapshot) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        self.inner
            .subscribers
            .borrow_mut()
            .push(Subscriber { id, callback: Box::new(callback) });

        Subscription { id, observable: Rc::downgrade(&self.inner) }
    }

    /// Delivers a snapshot to every live subscriber.
    pub fn publish(&self, snapshot: ScrollSnapshot) {
        self.inner.latest.set(snapshot);

        // detach the list so callbacks may subscribe or unsubscribe
        let mut active = std::mem::take(&mut *self.inner.subscribers.borrow_mut());
        self.inner.publishing.set(true);
        for subscriber in &mut active {
            (subscriber.callback)(snapshot);
        }
        self.inner.publishing.set(false);

        let mut subscribers = self.inner.subscribers.borrow_mut();
        active.append(&mut subscribers);
        let removed = std::mem::take(&mut *self.inner.pending_removal.borrow_mut());
        active.retain(|s| !removed.contains(&s.id));
        *subscribers = active;
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn latest(&self) -> ScrollSnapshot {
        self.inner.latest.get()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        let removed = self.inner.pending_removal.borrow();
        self.inner
            .subscribers
            .borrow()
            .iter()
            .filter(|s| !removed.contains(&s.id))
            .count()
    }
}

impl fmt::Debug for ScrollObservable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollObservable")
            .field("latest", &self.latest())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle of a registered scroll callback; unsubscribes on drop.
pub struct Subscription {
    id: u64,
    observable: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.observable.upgrade() else {
            return;
        };

        if inner.publishing.get() {
            inner.pending_removal.borrow_mut().push(self.id);
        } else {
            inner.subscribers.borrow_mut().retain(|s| s.id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_receive_snapshots() {
        let scroll = ScrollObservable::new();
        let seen = Rc::new(Cell::new(0.0));

        let sink = seen.clone();
        let _sub = scroll.subscribe(move |s| sink.set(s.offset));
        scroll.publish(ScrollSnapshot::new(240.0, 1000.0));

        assert_eq!(seen.get(), 240.0);
        assert_eq!(scroll.latest().progress(), 0.24);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let scroll = ScrollObservable::new();
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        let sub = scroll.subscribe(move |_| counter.set(counter.get() + 1));
        scroll.publish(ScrollSnapshot::new(1.0, 10.0));
        drop(sub);
        scroll.publish(ScrollSnapshot::new(2.0, 10.0));

        assert_eq!(calls.get(), 1);
        assert_eq!(scroll.subscriber_count(), 0);
    }

    #[test]
    fn unsubscribe_during_publish() {
        let scroll = ScrollObservable::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let calls = Rc::new(Cell::new(0));

        let (own_slot, counter) = (slot.clone(), calls.clone());
        *slot.borrow_mut() = Some(scroll.subscribe(move |_| {
            counter.set(counter.get() + 1);
            own_slot.borrow_mut().take();
        }));

        scroll.publish(ScrollSnapshot::new(5.0, 10.0));
        scroll.publish(ScrollSnapshot::new(6.0, 10.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn backdrop_alpha_ramps_to_full() {
        assert_eq!(nav_backdrop_alpha(0.0), 0.0);
        assert!((nav_backdrop_alpha(50.0) - 0.475).abs() < 1e-6);
        assert_eq!(nav_backdrop_alpha(100.0), NAV_BACKDROP_MAX_ALPHA);
        assert_eq!(nav_backdrop_alpha(4000.0), NAV_BACKDROP_MAX_ALPHA);
    }

    #[test]
    fn progress_of_unscrollable_page_is_zero() {
        assert_eq!(ScrollSnapshot::new(30.0, 0.0).progress(), 0.0);
    }
}

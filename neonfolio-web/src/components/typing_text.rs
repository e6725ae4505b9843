use std::{cell::RefCell, rc::Rc};

use neonfolio_core::effects::{TypingEffect, TypingEvent};
use web_sys::Element;

use crate::{
    browser::Interval,
    dom::{self, El},
    error::Error,
    js,
};

/// Inline terminal line typed out after a `>` prefix.
///
/// A check mark appears once the text is complete; the cursor lingers for
/// a moment and then disappears.
pub(crate) struct TypingText {
    root: Element,
    _ticker: Interval,
}

impl TypingText {
    pub(crate) fn new(text: &str, prefix: &str) -> Result<Self, Error> {
        let typed = El::new("span")?.class("typing-text");
        let cursor = El::new("span")?.class("typing-cursor").text("█");
        let check = El::new("span")?.class("typing-check hidden").text("✓");
        let root = El::new("span")?
            .class("typing")
            .child(El::new("span")?.class("text-secondary").text(&format!("{prefix} ")))
            .child(typed.clone())
            .child(cursor.clone())
            .child(check.clone())
            .build();
        let (typed, cursor, check) = (typed.build(), cursor.build(), check.build());

        let effect = Rc::new(RefCell::new(TypingEffect::new(
            text,
            TypingEffect::TERMINAL_CHAR_MS,
            js::now(),
        )));

        let period = TypingEffect::TERMINAL_CHAR_MS as i32;
        let ticker = Interval::new(period, move || {
            let mut effect = effect.borrow_mut();
            match effect.tick(js::now()) {
                Some(TypingEvent::Progress) => dom::set_text(&typed, effect.visible()),
                Some(TypingEvent::Typed) => {
                    dom::set_text(&typed, effect.visible());
                    dom::toggle_class(&check, "hidden", false);
                },
                Some(TypingEvent::Completed) => {
                    dom::toggle_class(&cursor, "hidden", true);
                    tracing::trace!("typing completed");
                },
                None => {},
            }
            !effect.is_complete()
        })?;

        Ok(Self { root, _ticker: ticker })
    }

    pub(crate) fn root(&self) -> &Element {
        &self.root
    }
}

use std::{cell::RefCell, rc::Rc};

use neonfolio_core::{
    RevealTracker, Subscription,
    effects::{TypingEffect, TypingEvent, syntax},
};
use neonfolio_data::{ABOUT_SOURCE, ABOUT_SOURCE_NAME, STATS};
use web_sys::Element;

use super::{
    Component, PageContext, avatar::avatar, counter::Counter, hero::window_header,
    reveal::on_scroll_into_view, section_heading,
};
use crate::{
    browser::Interval,
    dom::{self, El},
    error::Error,
    js,
};

/// Avatar, an editor window typing out the profile source, and stat counters.
pub(crate) struct About {
    root: Element,
    _counters: Vec<Counter>,
    _typing: Rc<RefCell<Option<Interval>>>,
    _reveal: Subscription,
}

impl About {
    pub(crate) fn mount(ctx: &PageContext) -> Result<Self, Error> {
        let code = El::new("div")?.class("code-block").build();
        let cursor = El::new("span")?.class("code-cursor").build();

        let editor = El::new("div")?
            .class("editor glass")
            .child(window_header(ABOUT_SOURCE_NAME)?)
            .child(
                El::new("div")?
                    .class("editor-body")
                    .child(El::wrap(code.clone()))
                    .child(El::wrap(cursor.clone())),
            )
            .child(El::new("div")?.class("editor-glow editor-glow-primary"))
            .child(El::new("div")?.class("editor-glow editor-glow-secondary"));

        let counters = STATS
            .iter()
            .map(|stat| Counter::new(stat, &ctx.scroll))
            .collect::<Result<Vec<_>, _>>()?;
        let stats = counters.iter().map(|c| El::wrap(c.root().clone()));

        let root = El::new("section")?
            .id("about")
            .class("section reveal")
            .child(
                El::new("div")?
                    .class("container")
                    .child(section_heading(2, "About Me")?)
                    .child(
                        El::new("div")?
                            .class("about-grid")
                            .child(El::new("div")?.class("about-avatar").child(avatar()?))
                            .child(editor),
                    )
                    .child(El::new("div")?.class("stats-grid").children(stats)),
            )
            .build();

        let typing: Rc<RefCell<Option<Interval>>> = Rc::default();
        let slot = typing.clone();
        let reveal = on_scroll_into_view(&ctx.scroll, &root, RevealTracker::section(), move || {
            let mut view = CodeView::new(code.clone(), cursor.clone());
            let mut effect = TypingEffect::new(ABOUT_SOURCE, TypingEffect::SOURCE_CHAR_MS, js::now());

            let period = TypingEffect::SOURCE_CHAR_MS as i32;
            let started = Interval::new(period, move || {
                match effect.tick(js::now()) {
                    Some(TypingEvent::Progress) => view.render(effect.visible()),
                    Some(TypingEvent::Typed) => {
                        view.render(effect.visible());
                        view.finish();
                    },
                    _ => {},
                }
                !effect.is_typed()
            });

            match started {
                Ok(interval) => *slot.borrow_mut() = Some(interval),
                Err(e) => tracing::warn!(error = %e, "source typing not started"),
            }
        });

        Ok(Self { root, _counters: counters, _typing: typing, _reveal: reveal })
    }
}

impl Component for About {
    fn root(&self) -> &Element {
        &self.root
    }
}

/// Numbered, highlighted source lines that grow as text is typed.
struct CodeView {
    block: Element,
    cursor: Element,
    rows: Vec<Element>,
    /// Rows whose text can no longer change.
    settled: usize,
}

impl CodeView {
    fn new(block: Element, cursor: Element) -> Self {
        Self { block, cursor, rows: Vec::new(), settled: 0 }
    }

    fn render(&mut self, visible: &str) {
        let lines: Vec<&str> = visible.split('\n').collect();
        let last = lines.len() - 1;

        while self.rows.len() < lines.len() {
            match self.add_row() {
                Ok(row) => self.rows.push(row),
                Err(e) => {
                    tracing::warn!(error = %e, "code row not created");
                    return;
                },
            }
        }

        for (row, line) in self.rows.iter().zip(&lines).skip(self.settled) {
            fill_row(row, line);
        }
        self.settled = last;
    }

    fn finish(&self) {
        dom::toggle_class(&self.cursor, "hidden", true);
    }

    fn add_row(&self) -> Result<Element, Error> {
        let number = (self.rows.len() + 1).to_string();
        let text = El::new("span")?.class("code-text");
        El::new("div")?
            .class("code-line")
            .child(El::new("span")?.class("line-number").text(&number))
            .child(text.clone())
            .append_to(&self.block);
        Ok(text.build())
    }
}

fn fill_row(row: &Element, line: &str) {
    row.set_text_content(None);
    for token in syntax::highlight(line) {
        let span = match token.kind.class() {
            Some(class) => El::new("span").map(|el| el.class(class)),
            None => El::new("span"),
        };
        if let Ok(span) = span {
            span.text(token.text).append_to(row);
        }
    }
}

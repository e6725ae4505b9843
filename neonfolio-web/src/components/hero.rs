use std::{cell::RefCell, rc::Rc};

use neonfolio_core::effects::{HeroFrame, HeroTerminal};
use neonfolio_data::{HERO_LINKS, HERO_SCRIPT, HeroLine, HeroLineKind, PROFILE};
use web_sys::{Element, MouseEvent};

use super::{Component, PageContext, navigation::scroll_to_section};
use crate::{
    browser::{EventListener, Interval},
    dom::{self, El},
    error::Error,
    js,
};

/// Repaint period of the terminal; finer than the typing rate. Keeps
/// running after the script ends to blink the cursor.
const TICK_MS: i32 = 30;

pub(crate) struct Hero {
    root: Element,
    _ticker: Interval,
    _listeners: Vec<EventListener>,
}

struct TerminalView {
    timeline: HeroTerminal,
    started_at: f64,
    rendered: usize,
    lines: Element,
    prompt: Element,
    typed: Element,
    cursors: [Element; 2],
    links: Element,
}

impl Hero {
    pub(crate) fn mount(_ctx: &PageContext) -> Result<Self, Error> {
        let root = El::new("section")?.id("hero").class("hero").build();
        let window = El::new("div")?.class("terminal-window hero-terminal").append_to(&root);
        window_header(&format!("{}@engineer: bash", PROFILE.user))?.append_to(&window);

        let body = El::new("div")?.class("terminal-body").append_to(&window);
        let lines = El::new("div")?.class("terminal-lines").append_to(&body);

        let typed = El::new("span")?.class("terminal-typed");
        let typing_cursor = cursor()?;
        let prompt = prompt()?
            .child(typed.clone())
            .child(typing_cursor.clone())
            .append_to(&body);

        let (links, explore_cursor, listeners) = link_listing()?;
        let links = links.append_to(&body);

        El::new("div")?.class("scroll-indicator").text("⌄").append_to(&root);

        let view = Rc::new(RefCell::new(TerminalView {
            timeline: HeroTerminal::new(HERO_SCRIPT),
            started_at: js::now(),
            rendered: 0,
            lines,
            prompt,
            typed: typed.build(),
            cursors: [typing_cursor.build(), explore_cursor.build()],
            links,
        }));

        let ticker = Interval::new(TICK_MS, move || {
            let mut view = view.borrow_mut();
            let elapsed = (js::now() - view.started_at).max(0.0) as u32;
            let frame = view.timeline.frame(elapsed);
            view.render(frame, elapsed);
            true
        })?;

        Ok(Self { root, _ticker: ticker, _listeners: listeners })
    }
}

impl Component for Hero {
    fn root(&self) -> &Element {
        &self.root
    }
}

impl TerminalView {
    fn render(&mut self, frame: HeroFrame, elapsed: u32) {
        let script = self.timeline.script();
        while self.rendered < frame.committed {
            if let Ok(line) = script_line(&script[self.rendered]) {
                line.append_to(&self.lines);
            }
            self.rendered += 1;
        }

        let typed = match frame.typing {
            Some((index, bytes)) => &script[index].content[..bytes],
            None => "",
        };
        if self.typed.text_content().as_deref() != Some(typed) {
            dom::set_text(&self.typed, typed);
        }

        let running = frame.committed < script.len();
        dom::toggle_class(&self.prompt, "hidden", !running);
        dom::toggle_class(&self.links, "visible", frame.show_links);

        let lit = HeroTerminal::cursor_visible(elapsed);
        for cursor in &self.cursors {
            dom::toggle_class(cursor, "off", !lit);
        }
    }
}

fn script_line(line: &HeroLine) -> Result<El, Error> {
    let row = El::new("div")?.class("terminal-line");
    Ok(match line.kind {
        HeroLineKind::Input => row.child(
            prompt()?.child(El::new("span")?.class("terminal-command").text(line.content)),
        ),
        HeroLineKind::Ascii => row.child(El::new("pre")?.class("terminal-ascii").text(line.content)),
        HeroLineKind::Info => {
            let mut badges = El::new("div")?.class("terminal-info");
            for (index, role) in line.content.split('|').map(str::trim).enumerate() {
                if index > 0 {
                    badges = badges.child(El::new("span")?.class("muted").text("|"));
                }
                let accent = if index % 2 == 0 { "primary" } else { "secondary" };
                badges = badges.child(
                    El::new("span")?
                        .class("role-badge")
                        .class(accent)
                        .child(El::new("span")?.class("pulse-dot"))
                        .child(El::new("span")?.text(role)),
                );
            }
            row.child(badges)
        },
        HeroLineKind::Output => row.child(El::new("div")?.class("terminal-output").text(line.content)),
    })
}

/// `user@host:~$` with room for a command after it.
fn prompt() -> Result<El, Error> {
    Ok(El::new("div")?
        .class("terminal-prompt")
        .child(El::new("span")?.class("text-primary").text(&format!("{}@{}", PROFILE.user, PROFILE.host)))
        .child(El::new("span")?.class("muted").text(":"))
        .child(El::new("span")?.class("text-secondary").text("~"))
        .child(El::new("span")?.class("muted").text("$")))
}

fn cursor() -> Result<El, Error> {
    Ok(El::new("span")?.class("terminal-cursor").text("▋"))
}

/// Traffic-light dots and a centered title.
pub(crate) fn window_header(title: &str) -> Result<El, Error> {
    Ok(El::new("div")?
        .class("window-header")
        .child(
            El::new("div")?
                .class("window-dots")
                .child(El::new("span")?.class("dot dot-red"))
                .child(El::new("span")?.class("dot dot-amber"))
                .child(El::new("span")?.class("dot dot-green")),
        )
        .child(El::new("span")?.class("window-title").text(title)))
}

/// The `ls -la` output, the `./explore.sh` prompt and the call-to-action links.
fn link_listing() -> Result<(El, El, Vec<EventListener>), Error> {
    let mut listeners = Vec::new();
    let mut buttons = Vec::with_capacity(HERO_LINKS.len());
    for (index, link) in HERO_LINKS.iter().enumerate() {
        let icon = if link.is_dir { "▸" } else { "≡" };
        let button = El::new("button")?
            .class("terminal-link")
            .class(&format!("text-{}", link.accent.class()))
            .attr("type", "button")
            .style("transition-delay", &format!("{}ms", index * 100))
            .child(El::new("span")?.class("terminal-link-icon").text(icon))
            .child(El::new("span")?.class("terminal-link-label").text(link.label));

        let section = link.section;
        listeners.push(EventListener::new(button.element(), "click", move |_: MouseEvent| {
            scroll_to_section(section);
        })?);
        buttons.push(button);
    }

    let explore_cursor = cursor()?;
    let explore = prompt()?
        .class("terminal-explore")
        .child(El::new("span")?.class("text-neon-green").text("./explore.sh"))
        .child(explore_cursor.clone());

    let actions = El::new("div")?
        .class("hero-actions")
        .child(El::link("#projects")?.class("button-primary").text("View Projects"))
        .child(El::link("#contact")?.class("button-outline secondary").text("Contact Me"));

    let listing = El::new("div")?
        .class("terminal-listing")
        .child(El::new("div")?.class("terminal-links").children(buttons))
        .child(explore)
        .child(actions);

    Ok((listing, explore_cursor, listeners))
}

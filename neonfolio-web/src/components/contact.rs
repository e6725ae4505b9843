use std::{cell::RefCell, rc::Rc};

use neonfolio_core::{ContactDraft, ContactForm, ContactTransport, SubmitOutcome, Subscription};
use neonfolio_data::{LANGUAGES, PROFILE, SOCIALS, SocialLink};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Event, EventTarget, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement};

use super::{Component, PageContext, badge, reveal::reveal, section_heading, typing_text::TypingText};
use crate::{
    browser::{EventListener, Timeout},
    dom::El,
    error::Error,
    js,
};

const SEND_LABEL: &str = "Send Message ➤";
const SENDING_LABEL: &str = "Sending...";

/// Contact form, social links and availability.
pub(crate) struct Contact {
    root: Element,
    _availability: TypingText,
    _listeners: Vec<EventListener>,
    _reveal: Subscription,
}

impl Contact {
    pub(crate) fn mount(ctx: &PageContext) -> Result<Self, Error> {
        let (transport, confirmation): (Rc<dyn ContactTransport>, &'static str) =
            match &ctx.config.contact_endpoint {
                Some(endpoint) => {
                    tracing::info!(%endpoint, "contact form posts to endpoint");
                    (Rc::new(FetchTransport::new(endpoint)), ContactForm::CONFIRMATION)
                },
                None => (Rc::new(SimulatedTransport::default()), ContactForm::DEMO_CONFIRMATION),
            };

        let fields = FormFields::new()?;
        let button = El::new("button")?
            .class("button-primary button-block")
            .attr("type", "submit")
            .text(SEND_LABEL);
        let form_element = El::new("form")?
            .class("contact-form")
            .child(labelled("Name", El::wrap(fields.name.clone().into()))?)
            .child(labelled("Email", El::wrap(fields.email.clone().into()))?)
            .child(labelled("Message", El::wrap(fields.message.clone().into()))?)
            .child(button.clone());

        let view = FormView {
            fields,
            button: button
                .build()
                .dyn_into::<HtmlButtonElement>()
                .map_err(|_| Error::element_creation_failed("button"))?,
        };
        let form = Rc::new(RefCell::new(ContactForm::new()));
        let mut listeners = view.edit_listeners(&form)?;
        listeners.push(submit_listener(form_element.element(), form, view, transport, confirmation)?);

        let availability = TypingText::new(PROFILE.availability, ">")?;

        let root = El::new("section")?
            .id("contact")
            .class("section reveal")
            .child(
                El::new("div")?
                    .class("container container-narrow")
                    .child(section_heading(5, "Get In Touch")?)
                    .child(
                        El::new("div")?
                            .class("contact-intro")
                            .child(El::new("h3")?.class("neon-flicker text-secondary").text("Let's Build Something"))
                            .child(El::new("p")?.class("muted").text(
                                "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision.",
                            )),
                    )
                    .child(
                        El::new("div")?
                            .class("contact-grid")
                            .child(form_element)
                            .child(
                                El::new("div")?
                                    .class("contact-info")
                                    .child(connect_panel()?)
                                    .child(location_panel()?)
                                    .child(
                                        El::new("div")?
                                            .class("availability")
                                            .child(El::new("span")?.class("pulse-dot green"))
                                            .child(El::wrap(availability.root().clone())),
                                    ),
                            ),
                    ),
            )
            .build();

        let reveal = reveal(&ctx.scroll, &root);

        Ok(Self { root, _availability: availability, _listeners: listeners, _reveal: reveal })
    }
}

impl Component for Contact {
    fn root(&self) -> &Element {
        &self.root
    }
}

struct FormFields {
    name: HtmlInputElement,
    email: HtmlInputElement,
    message: HtmlTextAreaElement,
}

impl FormFields {
    fn new() -> Result<Self, Error> {
        let input = |kind: &str, placeholder: &str| -> Result<HtmlInputElement, Error> {
            El::new("input")?
                .class("form-input")
                .attr("type", kind)
                .attr("placeholder", placeholder)
                .attr("required", "")
                .build()
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| Error::element_creation_failed("input"))
        };

        let message = El::new("textarea")?
            .class("form-input")
            .attr("rows", "5")
            .attr("placeholder", "Your message...")
            .attr("required", "")
            .build()
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| Error::element_creation_failed("textarea"))?;

        Ok(Self {
            name: input("text", "Your name")?,
            email: input("email", "your@email.com")?,
            message,
        })
    }

    fn clear(&self) {
        self.name.set_value("");
        self.email.set_value("");
        self.message.set_value("");
    }

    fn set_disabled(&self, disabled: bool) {
        self.name.set_disabled(disabled);
        self.email.set_disabled(disabled);
        self.message.set_disabled(disabled);
    }
}

/// DOM side of the form; mirrors [`ContactForm`] state.
struct FormView {
    fields: FormFields,
    button: HtmlButtonElement,
}

impl FormView {
    fn edit_listeners(&self, form: &Rc<RefCell<ContactForm>>) -> Result<Vec<EventListener>, Error> {
        Ok(vec![
            edit_listener(&self.fields.name, form, HtmlInputElement::value, |d, v| d.name = v)?,
            edit_listener(&self.fields.email, form, HtmlInputElement::value, |d, v| d.email = v)?,
            edit_listener(&self.fields.message, form, HtmlTextAreaElement::value, |d, v| d.message = v)?,
        ])
    }

    fn sync(&self, submitting: bool) {
        self.fields.set_disabled(submitting);
        self.button.set_disabled(submitting);
        self.button
            .set_text_content(Some(if submitting { SENDING_LABEL } else { SEND_LABEL }));
    }
}

/// Copies a control's value into the draft on every keystroke.
fn edit_listener<F>(
    field: &F,
    form: &Rc<RefCell<ContactForm>>,
    read: fn(&F) -> String,
    apply: fn(&mut ContactDraft, String),
) -> Result<EventListener, Error>
where
    F: AsRef<EventTarget> + Clone + 'static,
{
    let (control, form) = (field.clone(), form.clone());
    EventListener::new(field.as_ref(), "input", move |_: Event| {
        let value = read(&control);
        form.borrow_mut().edit(|draft| apply(draft, value));
    })
}

fn submit_listener(
    target: &Element,
    form: Rc<RefCell<ContactForm>>,
    view: FormView,
    transport: Rc<dyn ContactTransport>,
    confirmation: &'static str,
) -> Result<EventListener, Error> {
    let view = Rc::new(view);
    EventListener::new(target, "submit", move |event: Event| {
        event.prevent_default();

        let draft = match form.borrow_mut().submit() {
            Ok(draft) => draft,
            Err(e) => {
                tracing::debug!(error = %e, "contact form rejected");
                js::alert(&e.to_string());
                return;
            },
        };
        view.sync(true);

        let (form, view) = (form.clone(), view.clone());
        transport.send(
            draft,
            Box::new(move |outcome| {
                form.borrow_mut().finish(&outcome);
                view.sync(false);
                match outcome {
                    SubmitOutcome::Delivered => {
                        view.fields.clear();
                        js::alert(confirmation);
                    },
                    SubmitOutcome::Failed(reason) => {
                        js::alert(&format!("Message could not be sent: {reason}"));
                    },
                }
            }),
        );
    })
}

/// Pretends to deliver after a fixed delay.
#[derive(Default)]
struct SimulatedTransport {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl ContactTransport for SimulatedTransport {
    fn send(&self, _draft: ContactDraft, done: Box<dyn FnOnce(SubmitOutcome)>) {
        let delay = ContactForm::SIMULATED_DELAY_MS as i32;
        match Timeout::new(delay, move || done(SubmitOutcome::Delivered)) {
            Ok(timeout) => *self.pending.borrow_mut() = Some(timeout),
            Err(e) => tracing::error!(error = %e, "simulated delivery not scheduled"),
        }
    }
}

/// Posts the draft as JSON to an HTTP endpoint.
struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    fn new(endpoint: &str) -> Self {
        Self { endpoint: endpoint.to_string() }
    }
}

impl ContactTransport for FetchTransport {
    fn send(&self, draft: ContactDraft, done: Box<dyn FnOnce(SubmitOutcome)>) {
        let endpoint = self.endpoint.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match post_json(&endpoint, &draft).await {
                Ok(()) => SubmitOutcome::Delivered,
                Err(e) => SubmitOutcome::Failed(e.to_string()),
            };
            done(outcome);
        });
    }
}

async fn post_json(endpoint: &str, draft: &ContactDraft) -> Result<(), Error> {
    let body = serde_json::json!({
        "name": draft.name.trim(),
        "email": draft.email.trim(),
        "message": draft.message,
    });

    let headers = web_sys::Headers::new().map_err(Error::request_failed)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(Error::request_failed)?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&body.to_string()));

    let request =
        web_sys::Request::new_with_str_and_init(endpoint, &init).map_err(Error::request_failed)?;
    let response = JsFuture::from(js::window()?.fetch_with_request(&request))
        .await
        .map_err(Error::request_failed)?
        .dyn_into::<web_sys::Response>()
        .map_err(Error::request_failed)?;

    if response.ok() {
        Ok(())
    } else {
        Err(Error::unexpected_status(response.status()))
    }
}

fn labelled(label: &str, control: El) -> Result<El, Error> {
    Ok(El::new("label")?
        .class("form-field")
        .child(El::new("span")?.class("form-label muted").text(label))
        .child(control))
}

fn connect_panel() -> Result<El, Error> {
    let links = SOCIALS.iter().map(social_row).collect::<Result<Vec<_>, _>>()?;
    Ok(El::new("div")?
        .class("glass panel")
        .child(El::new("h4")?.text("Connect With Me"))
        .child(El::new("div")?.class("social-rows").children(links)))
}

fn social_row(social: &SocialLink) -> Result<El, Error> {
    let accent = social.accent.class();
    Ok(El::link(social.href)?
        .class("social-row")
        .class(&format!("accent-{accent}"))
        .child(El::new("span")?.class(&format!("social-glyph text-{accent}")).text(social.glyph))
        .child(El::new("span")?.text(social.name))
        .child(El::new("span")?.class(&format!("social-external text-{accent}")).text("↗")))
}

fn location_panel() -> Result<El, Error> {
    let languages = LANGUAGES
        .iter()
        .map(|language| {
            badge(
                &format!("{} ({})", language.name, language.level),
                &format!("badge-{}", language.accent.class()),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(El::new("div")?
        .class("glass panel")
        .child(El::new("h4")?.text("Location"))
        .child(
            El::new("p")?
                .class("muted")
                .child(El::new("span")?.text("Based in "))
                .child(El::new("span")?.class("text-primary").text(PROFILE.location)),
        )
        .child(El::new("p")?.class("muted small").text("Open to remote opportunities worldwide"))
        .child(
            El::new("div")?
                .class("languages")
                .child(El::new("h5")?.class("muted").text("Languages"))
                .child(El::new("div")?.class("tech-list").children(languages)),
        ))
}

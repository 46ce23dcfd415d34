use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::interactions::forms::{
    optional, ContactRequest, Field, FormFlow, JoinRequest, LocalAcknowledgement, Role, Submission,
};

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>().map(|i| i.value()).unwrap_or_default()
}

fn textarea_value(node: &NodeRef) -> String {
    node.cast::<HtmlTextAreaElement>().map(|t| t.value()).unwrap_or_default()
}

fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>().map(|s| s.value()).unwrap_or_default()
}

fn is_checked(node: &NodeRef) -> bool {
    node.cast::<HtmlInputElement>().map(|i| i.checked()).unwrap_or(false)
}

/// Browsers normally block the submit event on invalid forms already; this
/// covers the ones that don't (e.g. `novalidate` injected by extensions).
fn passes_native_validation(form: &NodeRef) -> bool {
    match form.cast::<HtmlFormElement>() {
        Some(form) if !form.check_validity() => {
            form.report_validity();
            false
        }
        _ => true,
    }
}

/// Sets the browser's validation message on a form control; `""` clears it.
fn set_custom_message(control: &JsValue, message: &str) {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        input.set_custom_validity(message);
    } else if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        select.set_custom_validity(message);
    } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
        area.set_custom_validity(message);
    }
}

// A flagged control stays invalid until the user edits it.
fn clear_flag_on_input() -> Callback<InputEvent> {
    Callback::from(|e: InputEvent| {
        if let Some(target) = e.target() {
            set_custom_message(target.as_ref(), "");
        }
    })
}

fn submit_locally(
    flow: &UseStateHandle<FormFlow>,
    form: &NodeRef,
    submission: Submission,
    form_name: &str,
    control_for: impl Fn(Field) -> Option<NodeRef>,
) {
    match (**flow).submit(&submission, &LocalAcknowledgement) {
        Ok(next) => {
            log::info!("{} form acknowledged", form_name);
            flow.set(next);
        }
        Err(err) => {
            log::warn!("{} form not sent: {}", form_name, err);
            let control = err.field().and_then(control_for).and_then(|node| node.get());
            if let Some(control) = control {
                set_custom_message(control.as_ref(), &err.to_string());
                if let Some(form) = form.cast::<HtmlFormElement>() {
                    form.report_validity();
                }
            }
        }
    }
}

#[function_component(JoinForm)]
pub fn join_form() -> Html {
    let flow = use_state(FormFlow::default);
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let role_ref = use_node_ref();
    let org_ref = use_node_ref();
    let message_ref = use_node_ref();
    let consent_ref = use_node_ref();

    if flow.is_sent() {
        return html! {
            <div class="confirmation confirmation-success">
                <p class="confirmation-title">{"You are in"}</p>
                <p class="confirmation-body">
                    {"Thanks for joining Networkof.One. We will follow up with next steps and early access updates. Check your inbox for a welcome email."}
                </p>
            </div>
        };
    }

    let onsubmit = {
        let flow = flow.clone();
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let role_ref = role_ref.clone();
        let org_ref = org_ref.clone();
        let message_ref = message_ref.clone();
        let consent_ref = consent_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !passes_native_validation(&form_ref) {
                return;
            }
            let submission = Submission::Join(JoinRequest {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                role: Role::from_value(&select_value(&role_ref)),
                organization: optional(input_value(&org_ref)),
                message: optional(textarea_value(&message_ref)),
                consent: is_checked(&consent_ref),
            });
            submit_locally(&flow, &form_ref, submission, "join", |field| match field {
                Field::Name => Some(name_ref.clone()),
                Field::Email => Some(email_ref.clone()),
                Field::Role => Some(role_ref.clone()),
                Field::Consent => Some(consent_ref.clone()),
                Field::Subject | Field::Message => None,
            });
        })
    };

    html! {
        <form class="form-grid" ref={form_ref} {onsubmit} oninput={clear_flag_on_input()} data-reveal="">
            <label class="sr-only" for="join-name">{"Full name"}</label>
            <input id="join-name" ref={name_ref} class="form-input" required=true placeholder="Full name" />

            <label class="sr-only" for="join-email">{"Email"}</label>
            <input id="join-email" ref={email_ref} class="form-input" required=true type="email" placeholder="Email" />

            <label class="sr-only" for="join-role">{"Role"}</label>
            <select id="join-role" ref={role_ref} class="form-input" required=true>
                <option value="" disabled=true selected=true>{"Role - select one"}</option>
                {
                    Role::ALL.iter().map(|role| html! {
                        <option value={role.value()}>{role.label()}</option>
                    }).collect::<Html>()
                }
            </select>

            <label class="sr-only" for="join-org">{"Organization"}</label>
            <input id="join-org" ref={org_ref} class="form-input" placeholder="Organization - optional" />

            <label class="sr-only" for="join-msg">{"Message"}</label>
            <textarea
                id="join-msg"
                ref={message_ref}
                class="form-input form-wide form-tall"
                placeholder="Tell us how you would like to be involved"
            />

            <div class="form-wide form-consent">
                <input id="privacy" ref={consent_ref} type="checkbox" required=true />
                <label for="privacy">
                    {"I understand my information will be kept confidential and used only for Networkof.One participation and updates."}
                </label>
            </div>
            <div class="form-wide">
                <button type="submit" class="btn btn-primary">
                    <span class="spark" aria-hidden="true"></span>
                    {"Submit"}
                </button>
            </div>
        </form>
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let flow = use_state(FormFlow::default);
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let subject_ref = use_node_ref();
    let message_ref = use_node_ref();

    if flow.is_sent() {
        return html! {
            <div class="confirmation confirmation-info">
                <p class="confirmation-title">{"Message received"}</p>
                <p class="confirmation-body">{"We will get back to you shortly."}</p>
            </div>
        };
    }

    let onsubmit = {
        let flow = flow.clone();
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let subject_ref = subject_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !passes_native_validation(&form_ref) {
                return;
            }
            let submission = Submission::Contact(ContactRequest {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                subject: input_value(&subject_ref),
                message: textarea_value(&message_ref),
            });
            submit_locally(&flow, &form_ref, submission, "contact", |field| match field {
                Field::Name => Some(name_ref.clone()),
                Field::Email => Some(email_ref.clone()),
                Field::Subject => Some(subject_ref.clone()),
                Field::Message => Some(message_ref.clone()),
                Field::Role | Field::Consent => None,
            });
        })
    };

    html! {
        <form class="form-grid" ref={form_ref} {onsubmit} oninput={clear_flag_on_input()} data-reveal="">
            <label class="sr-only" for="c-name">{"Full name"}</label>
            <input id="c-name" ref={name_ref} class="form-input" required=true placeholder="Full name" />

            <label class="sr-only" for="c-email">{"Email"}</label>
            <input id="c-email" ref={email_ref} class="form-input" required=true type="email" placeholder="Email" />

            <label class="sr-only" for="c-subj">{"Subject"}</label>
            <input id="c-subj" ref={subject_ref} class="form-input form-wide" required=true placeholder="Subject" />

            <label class="sr-only" for="c-msg">{"Your message"}</label>
            <textarea
                id="c-msg"
                ref={message_ref}
                class="form-input form-wide form-tall"
                required=true
                placeholder="Your message"
            />

            <div class="form-wide">
                <button type="submit" class="btn btn-dark">{"Send message"}</button>
            </div>
        </form>
    }
}

use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_search_param;

use crate::components::notification::{Notification, Toast};
use crate::config::{BUSINESS, WHATSAPP_GREETING};
use crate::quote::form::MAX_NOTES_LEN;
use crate::quote::models::UnknownOption;
use crate::quote::{
    format_ghs, AddOn, Field, FormErrors, Frequency, PropertyType, QuoteForm, QuoteResult,
    ServiceType, TimeWindow,
};
use crate::whatsapp::{build_whatsapp_url, copy_to_clipboard, open_whatsapp};

type TextSetter = fn(&mut QuoteForm, String);
type SelectSetter = fn(&mut QuoteForm, &str) -> Result<(), UnknownOption>;

fn on_text(form: &UseStateHandle<QuoteForm>, apply: TextSetter) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

fn on_select(form: &UseStateHandle<QuoteForm>, apply: SelectSetter) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        match apply(&mut next, &select.value()) {
            Ok(()) => form.set(next),
            Err(err) => warn!("Ignoring select change: {}", err),
        }
    })
}

fn on_check(form: &UseStateHandle<QuoteForm>, apply: fn(&mut QuoteForm, bool)) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.checked());
        form.set(next);
    })
}

fn field_error(errors: &FormErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(error) => html! { <p class="field-error">{error.to_string()}</p> },
        None => html! {},
    }
}

fn signed_ghs(amount: i64) -> String {
    if amount < 0 {
        format!("-{}", format_ghs(-amount))
    } else {
        format_ghs(amount)
    }
}

fn quote_json(quote: &QuoteResult) -> serde_json::Result<String> {
    serde_json::to_string(quote)
}

#[function_component(QuotePage)]
pub fn quote_page() -> Html {
    let service_param = use_search_param("service".to_string());
    let form = use_state(|| QuoteForm::with_service_param(service_param.as_deref()));
    let attempted = use_state(|| false);
    let toast = use_state(|| None::<Toast>);

    let quote = form.quote();
    let request = form.quote_request();
    let preview = form.message_preview();

    {
        let logged = quote.clone();
        let total = quote.total;
        use_effect_with_deps(
            move |_| {
                match quote_json(&logged) {
                    Ok(json) => debug!("Quote updated: {}", json),
                    Err(e) => warn!("Could not serialize quote: {}", e),
                }
                || ()
            },
            (request.clone(), total),
        );
    }

    // Errors only show once the customer has tried to send, then track their edits.
    let errors = if *attempted {
        form.validate().err().unwrap_or_default()
    } else {
        FormErrors::default()
    };

    let onsubmit = {
        let form = form.clone();
        let attempted = attempted.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            attempted.set(true);
            match form.validate() {
                Ok(submission) => {
                    info!(
                        "Sending {} quote for {}",
                        submission.request.service_type,
                        format_ghs(form.quote().total)
                    );
                    toast.set(Some(Toast::info(
                        "Opening WhatsApp",
                        "Your quote is included. Tap send to commit, then attach photos if you’d like.",
                    )));
                    let url = build_whatsapp_url(BUSINESS.whatsapp_number, &submission.message());
                    open_whatsapp(&url);
                }
                Err(errors) => {
                    warn!(
                        "Quote form has {} invalid field(s): {:?}",
                        errors.len(),
                        errors.fields().collect::<Vec<_>>()
                    );
                    toast.set(Some(Toast::destructive(
                        "Missing information",
                        "Please fill all required fields.",
                    )));
                }
            }
        })
    };

    let on_copy = {
        let toast = toast.clone();
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| {
            let toast = toast.clone();
            let text = preview.clone();
            spawn_local(async move {
                match copy_to_clipboard(&text).await {
                    Ok(()) => toast.set(Some(Toast::info(
                        "Copied",
                        "Your WhatsApp message is copied. Paste it into WhatsApp to send.",
                    ))),
                    Err(e) => {
                        warn!("{}", e);
                        toast.set(Some(Toast::destructive(
                            "Copy failed",
                            "Please select the message and copy it manually.",
                        )));
                    }
                }
            });
        })
    };

    let on_switch = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            if next.apply_recommendation() {
                info!("Switched to recommended service {}", next.service_type);
                form.set(next);
            }
        })
    };

    let on_notes = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.notes = input.value();
            form.set(next);
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let chat_href = build_whatsapp_url(BUSINESS.whatsapp_number, WHATSAPP_GREETING);

    html! {
        <div class="quote-page">
            <style>
                {r#"
                    .quote-layout {
                        display: grid;
                        grid-template-columns: 7fr 5fr;
                        gap: 1.5rem;
                        align-items: start;
                    }
                    .quote-summary { position: sticky; top: 6rem; }
                    .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .form-row.three { grid-template-columns: 1fr 1fr 1fr; }
                    .form-group { display: flex; flex-direction: column; gap: 0.35rem; margin-bottom: 1rem; }
                    .form-group input, .form-group select, .form-group textarea {
                        padding: 0.65rem 0.8rem;
                        border: 1px solid #d6dcd9;
                        border-radius: 10px;
                        font: inherit;
                    }
                    .form-group textarea { min-height: 110px; }
                    .field-error { color: #c43232; font-size: 0.85rem; margin: 0; }
                    .hint { color: #667; font-size: 0.85rem; margin: 0; }
                    .recommend-box {
                        margin-top: 0.5rem;
                        padding: 0.75rem;
                        border-radius: 12px;
                        border: 1px solid rgba(46, 125, 107, 0.3);
                        background: rgba(46, 125, 107, 0.08);
                    }
                    .check-row { display: flex; gap: 0.6rem; align-items: flex-start; margin-bottom: 0.75rem; }
                    .add-on-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; }
                    .quote-total { font-size: 2rem; font-weight: bold; margin: 0.25rem 0; }
                    .line-item { display: flex; justify-content: space-between; gap: 1rem; font-size: 0.95rem; }
                    .line-item .negative { color: #667; }
                    .message-preview {
                        white-space: pre-wrap;
                        padding: 1rem;
                        border-radius: 12px;
                        border: 1px solid #e3e7e5;
                        background: #f7faf9;
                        font-size: 0.9rem;
                        line-height: 1.5;
                    }
                    .form-actions { display: flex; gap: 0.75rem; flex-wrap: wrap; }
                    @media (max-width: 900px) {
                        .quote-layout { grid-template-columns: 1fr; }
                        .quote-summary { position: static; }
                        .form-row, .form-row.three, .add-on-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>

            <div class="quote-layout">
                <section class="card">
                    <h1>{"Request a Quote"}</h1>
                    <p class="hint">
                        {"Fastest response is on WhatsApp. Fill this form once, then send your request as a WhatsApp message."}
                    </p>

                    <form onsubmit={onsubmit} novalidate={true}>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="full-name">{"Your name"}</label>
                                <input
                                    id="full-name"
                                    type="text"
                                    placeholder="e.g., Ama Mensah"
                                    value={form.full_name.clone()}
                                    oninput={on_text(&form, |f, v| f.full_name = v)}
                                />
                                { field_error(&errors, Field::FullName) }
                            </div>
                            <div class="form-group">
                                <label for="phone">{"Phone/WhatsApp"}</label>
                                <input
                                    id="phone"
                                    type="tel"
                                    inputmode="tel"
                                    placeholder="e.g., 059 123 4567"
                                    value={form.phone.clone()}
                                    oninput={on_text(&form, |f, v| f.phone = v)}
                                />
                                { field_error(&errors, Field::Phone) }
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="service-type">{"Service"}</label>
                                <select id="service-type" onchange={on_select(&form, QuoteForm::set_service_type)}>
                                    { for ServiceType::ALL.iter().map(|s| html! {
                                        <option value={s.value()} selected={*s == form.service_type}>{s.label()}</option>
                                    }) }
                                </select>
                                if quote.suggests_switch(&request) {
                                    <div class="recommend-box">
                                        <strong>{format!("Recommended: {}", quote.recommended_service_label)}</strong>
                                        <p class="hint">{quote.recommendation_reason}</p>
                                        <button type="button" class="btn btn-outline btn-small" onclick={on_switch}>
                                            {"Switch to recommended"}
                                        </button>
                                    </div>
                                } else {
                                    <p class="hint">
                                        {format!("Recommended: {}. {}", quote.recommended_service_label, quote.recommendation_reason)}
                                    </p>
                                }
                            </div>
                            <div class="form-group">
                                <label for="property-type">{"Property type"}</label>
                                <select id="property-type" onchange={on_select(&form, QuoteForm::set_property_type)}>
                                    { for PropertyType::ALL.iter().map(|p| html! {
                                        <option value={p.value()} selected={*p == form.property_type}>{p.label()}</option>
                                    }) }
                                </select>
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="bedrooms">{"Bedrooms"}</label>
                                <input
                                    id="bedrooms"
                                    type="number"
                                    min="0"
                                    max="20"
                                    value={form.bedrooms.clone()}
                                    oninput={on_text(&form, |f, v| f.bedrooms = v)}
                                />
                                { field_error(&errors, Field::Bedrooms) }
                            </div>
                            <div class="form-group">
                                <label for="bathrooms">{"Bathrooms"}</label>
                                <input
                                    id="bathrooms"
                                    type="number"
                                    min="0"
                                    max="20"
                                    value={form.bathrooms.clone()}
                                    oninput={on_text(&form, |f, v| f.bathrooms = v)}
                                />
                                { field_error(&errors, Field::Bathrooms) }
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="location">{"Area / location (Kumasi)"}</label>
                            <input
                                id="location"
                                type="text"
                                placeholder="e.g., Asokwa, Ahodwo, Adum…"
                                value={form.location.clone()}
                                oninput={on_text(&form, |f, v| f.location = v)}
                            />
                            { field_error(&errors, Field::Location) }
                        </div>

                        <div class="form-row three">
                            <div class="form-group">
                                <label for="preferred-date">{"Preferred date (optional)"}</label>
                                <input
                                    id="preferred-date"
                                    type="date"
                                    value={form.preferred_date.clone()}
                                    oninput={on_text(&form, |f, v| f.preferred_date = v)}
                                />
                                { field_error(&errors, Field::PreferredDate) }
                            </div>
                            <div class="form-group">
                                <label for="time-window">{"Time window"}</label>
                                <select id="time-window" onchange={on_select(&form, QuoteForm::set_time_window)}>
                                    { for TimeWindow::ALL.iter().map(|w| html! {
                                        <option value={w.value()} selected={Some(*w) == form.time_window}>{w.label()}</option>
                                    }) }
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="frequency">{"Frequency"}</label>
                                <select id="frequency" onchange={on_select(&form, QuoteForm::set_frequency)}>
                                    { for Frequency::ALL.iter().map(|fr| html! {
                                        <option value={fr.value()} selected={Some(*fr) == form.frequency}>{fr.label()}</option>
                                    }) }
                                </select>
                            </div>
                        </div>

                        <div class="form-group">
                            <span>{"Add-ons (optional)"}</span>
                            <div class="add-on-grid">
                                { for AddOn::ALL.iter().map(|add_on| {
                                    let add_on = *add_on;
                                    let onchange = {
                                        let form = form.clone();
                                        Callback::from(move |e: Event| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            let mut next = (*form).clone();
                                            next.set_add_on(add_on, input.checked());
                                            form.set(next);
                                        })
                                    };
                                    html! {
                                        <label class="check-row">
                                            <input
                                                type="checkbox"
                                                checked={form.add_ons.is_enabled(add_on)}
                                                {onchange}
                                            />
                                            <span>{add_on.label()}</span>
                                        </label>
                                    }
                                }) }
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="notes">{"Priority areas / notes (optional)"}</label>
                            <textarea
                                id="notes"
                                placeholder="e.g., focus on kitchen + bathrooms, strong pet hair, guest check-in at 3pm…"
                                value={form.notes.clone()}
                                oninput={on_notes}
                            />
                            <p class="hint">{format!("{}/{}", form.notes.chars().count(), MAX_NOTES_LEN)}</p>
                            { field_error(&errors, Field::Notes) }
                        </div>

                        <label class="check-row">
                            <input
                                type="checkbox"
                                checked={form.send_via_whatsapp}
                                onchange={on_check(&form, |f, v| f.send_via_whatsapp = v)}
                            />
                            <span>
                                <strong>{"Send via WhatsApp (required)"}</strong>
                                <p class="hint">{"We prefer receiving quote requests on WhatsApp for the fastest response."}</p>
                                { field_error(&errors, Field::SendViaWhatsApp) }
                            </span>
                        </label>
                        <label class="check-row">
                            <input
                                type="checkbox"
                                checked={form.confirm_commitment}
                                onchange={on_check(&form, |f, v| f.confirm_commitment = v)}
                            />
                            <span>
                                <strong>{"I understand the commitment"}</strong>
                                <p class="hint">
                                    {format!(
                                        "By sending the WhatsApp message, I’m committing to this quote, scope, and terms. {} will reply to confirm date/time and access details.",
                                        BUSINESS.name
                                    )}
                                </p>
                                { field_error(&errors, Field::ConfirmCommitment) }
                            </span>
                        </label>

                        <div class="form-actions">
                            <button type="submit" class="btn btn-primary">{"Send quote via WhatsApp"}</button>
                            <button type="button" class="btn btn-outline" onclick={on_copy}>{"Copy message"}</button>
                        </div>
                        <p class="hint">
                            {"Prefer to message immediately? "}
                            <a href={chat_href} target="_blank" rel="noopener noreferrer">{"Open WhatsApp chat"}</a>
                            {"."}
                        </p>
                    </form>
                </section>

                <aside class="card quote-summary">
                    <h2>{"Your quote"}</h2>
                    <p class="hint">{"Clear pricing and terms, generated from your answers."}</p>
                    <p class="hint">{"Total"}</p>
                    <p class="quote-total">{format_ghs(quote.total)}</p>
                    <p class="hint">
                        {"Recommended: "}<strong>{quote.recommended_service_label}</strong>
                    </p>
                    <div class="line-items">
                        { for quote.line_items.iter().map(|item| html! {
                            <div class="line-item">
                                <span>{&item.label}</span>
                                <span class={classes!((item.amount < 0).then(|| "negative"))}>
                                    {signed_ghs(item.amount)}
                                </span>
                            </div>
                        }) }
                    </div>

                    <h3>{"Terms & conditions (summary)"}</h3>
                    <ul>
                        { for quote.terms.iter().map(|term| html! { <li>{*term}</li> }) }
                    </ul>

                    <h3>{"WhatsApp message preview"}</h3>
                    <div class="message-preview">{preview}</div>
                </aside>
            </div>

            <Notification toast={(*toast).clone()} on_dismiss={dismiss_toast} />
        </div>
    }
}

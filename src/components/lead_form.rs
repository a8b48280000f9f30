//! Demo-request form posting leads as JSON.
//!
//! Inputs are uncontrolled: on submit the form is read back through
//! `FormData`, so `primary_interests` arrives once per checked box.

use leptos::prelude::*;

use super::trigger::{has_fired, seq_memo};
use crate::net::types::LeadPayload;
use crate::state::lead_form::LeadFormState;

pub const INDUSTRY_SEGMENTS: [&str; 4] = [
    "City Vehicle Fleet",
    "Business Campus / Workplace",
    "Residential Complex / Multi-Unit Dwelling",
    "Hotel / Hospitality",
];

pub const CHARGING_STATUSES: [&str; 3] = ["Zero Infrastructure", "Fixed Chargers (Insufficient)", "Planning Phase"];

pub const PRIMARY_INTERESTS: [&str; 4] = [
    "Employee Productivity / Time Savings",
    "Virtual Power Plant (VPP) / Grid Support Revenue",
    "Zero CapEx Subscription (CaaS)",
    "Carbon Reduction Reporting",
];

pub const TIMELINES: [&str; 3] = ["Within 1 week", "1-3 months", "Budgeting for 2027"];

/// Read every `(name, value)` pair the browser would submit, in order.
fn read_form_entries(form_ref: NodeRef<leptos::html::Form>) -> Option<Vec<(String, String)>> {
    #[cfg(feature = "csr")]
    {
        let form_el = form_ref.get_untracked()?;
        let data = web_sys::FormData::new_with_form(&form_el).ok()?;
        let entries = data
            .entries()
            .into_iter()
            .flatten()
            .filter_map(|item| {
                let pair = js_sys::Array::from(&item);
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect();
        Some(entries)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = form_ref;
        None
    }
}

fn dispatch(form: RwSignal<LeadFormState>, url: String, payload: LeadPayload) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::types::LeadOutcome;

        let outcome = crate::net::api::submit_lead(&crate::net::transport::BrowserTransport, &url, &payload).await;
        match &outcome {
            Ok(LeadOutcome::Accepted { id }) => log::debug!("lead accepted: id={id:?}"),
            Ok(LeadOutcome::Rejected(message)) => log::warn!("lead rejected: {message}"),
            Err(err) => log::warn!("lead submission to {url} failed: {err}"),
        }
        form.update(|f| f.finish_submit(outcome));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, payload);
        form.update(|f| f.finish_submit(Err(crate::net::error::ApiError::Unavailable)));
    }
}

fn select_options(options: &'static [&'static str]) -> impl IntoView {
    options.iter().map(|opt| view! { <option value=*opt>{*opt}</option> }).collect::<Vec<_>>()
}

#[component]
pub fn LeadForm(endpoint: String) -> impl IntoView {
    let form = RwSignal::new(LeadFormState::default());
    let endpoint = StoredValue::new(endpoint);
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let status_ref = NodeRef::<leptos::html::Div>::new();
    let reset = seq_memo(form, LeadFormState::reset_seq);
    let reveal = seq_memo(form, LeadFormState::reveal_seq);

    Effect::new(move || {
        if !has_fired(reset.get()) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            if let Some(form_el) = form_ref.get_untracked() {
                form_el.reset();
            }
        }
    });

    Effect::new(move || {
        if !has_fired(reveal.get()) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            if let Some(status_el) = status_ref.get_untracked() {
                let opts = web_sys::ScrollIntoViewOptions::new();
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                opts.set_block(web_sys::ScrollLogicalPosition::Nearest);
                status_el.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(entries) = read_form_entries(form_ref) else {
            return;
        };
        let Some(payload) = form.try_update(|f| f.begin_submit(&entries)).flatten() else {
            return;
        };
        dispatch(form, endpoint.get_value(), payload);
    };

    let status_class = move || {
        form.with(|f| match f.status.class() {
            Some(class) => class.to_owned(),
            None => "hidden".to_owned(),
        })
    };

    view! {
        <form id="demo-form" class="demo-form" node_ref=form_ref on:submit=on_submit>
            <fieldset class="demo-form__group">
                <legend>"Primary Contact"</legend>
                <input name="full_name" type="text" placeholder="Full name" required/>
                <input name="email" type="email" placeholder="Work email" required/>
                <input name="phone" type="tel" placeholder="Phone"/>
            </fieldset>
            <fieldset class="demo-form__group">
                <legend>"Organization"</legend>
                <input name="company_name" type="text" placeholder="Company name"/>
                <select name="industry_segment">
                    <option value="">"Industry segment"</option>
                    {select_options(&INDUSTRY_SEGMENTS)}
                </select>
            </fieldset>
            <fieldset class="demo-form__group">
                <legend>"Operations"</legend>
                <input name="fleet_size" type="text" placeholder="Fleet size / EV drivers"/>
                <input name="location_zip" type="text" placeholder="Site ZIP code"/>
                <select name="current_charging_status">
                    <option value="">"Current charging status"</option>
                    {select_options(&CHARGING_STATUSES)}
                </select>
            </fieldset>
            <fieldset class="demo-form__group">
                <legend>"Primary Interests"</legend>
                {PRIMARY_INTERESTS
                    .iter()
                    .map(|interest| {
                        view! {
                            <label class="demo-form__check">
                                <input type="checkbox" name="primary_interests" value=*interest/>
                                <span>{*interest}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </fieldset>
            <fieldset class="demo-form__group">
                <legend>"Timeline"</legend>
                <select name="timeline">
                    <option value="">"Deployment timeline"</option>
                    {select_options(&TIMELINES)}
                </select>
                <textarea name="comments" rows="3" placeholder="Anything else we should know?"></textarea>
            </fieldset>
            <button type="submit" class="btn btn--primary" disabled=move || form.with(LeadFormState::is_submitting)>
                {move || form.with(LeadFormState::submit_label)}
            </button>
            <div id="form-status" class=status_class node_ref=status_ref>
                {move || form.with(|f| f.status.text().to_owned())}
            </div>
        </form>
    }
}

//! Registration form with WhatsApp and email submit channels.

use leptos::prelude::*;

use crate::state::lead::{LeadFields, LeadState, PROPERTY_OPTIONS};
use crate::util::browser::{inquiry_date, open_in_new_context};

#[component]
pub fn LeadForm() -> impl IntoView {
    let lead = RwSignal::new(LeadState::default());
    let sending = Memo::new(move |_| lead.with(|l| l.email_in_flight));

    // Each new notice replaces the pending dismissal; dropping a Timeout cancels it.
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        use crate::state::lead::NOTICE_TIMEOUT_MS;

        let dismissal = StoredValue::new_local(None::<Timeout>);
        let shown = Memo::new(move |_| lead.with(|l| l.notice.is_some().then_some(l.notice_seq())));
        Effect::new(move || {
            let timer = shown.get().map(|seq| {
                Timeout::new(NOTICE_TIMEOUT_MS, move || {
                    lead.update(|l| {
                        l.dismiss_notice_if(seq);
                    });
                })
            });
            dismissal.update_value(|pending| *pending = timer);
        });
        on_cleanup(move || {
            dismissal.update_value(|pending| *pending = None);
        });
    }

    let field = move |get: fn(&LeadFields) -> &String| move || lead.with(|l| get(&l.fields).clone());
    let set_field = move |set: fn(&mut LeadFields, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            lead.update(|l| set(&mut l.fields, value));
        }
    };

    let on_whatsapp = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let Some(Ok(url)) = lead.try_update(LeadState::prepare_whatsapp) else {
            return;
        };
        let opened = open_in_new_context(&url, None);
        lead.update(|l| l.finish_whatsapp(opened));
    };

    let on_email = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let date = inquiry_date();
        let payload = match lead.try_update(|l| l.begin_email(&date)) {
            Some(Ok(payload)) => payload,
            Some(Err(e)) => {
                leptos::logging::log!("inquiry not sent: {e}");
                return;
            }
            None => return,
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_inquiry(&payload).await;
            lead.update(|l| l.finish_email(result));
        });
        #[cfg(not(feature = "hydrate"))]
        lead.update(|l| l.finish_email(Err(format!("inquiry for {} not sent outside the browser", payload.from_name))));
    };

    view! {
        <form class="lead-form" on:submit=on_email>
            <div class="lead-form__row">
                <label class="lead-form__field">
                    <span>"Full Name *"</span>
                    <input
                        type="text"
                        placeholder="Your full name"
                        prop:value=field(|f| &f.name)
                        on:input=set_field(|f, v| f.name = v)
                    />
                </label>
                <label class="lead-form__field">
                    <span>"Email Address *"</span>
                    <input
                        type="email"
                        placeholder="your@email.com"
                        prop:value=field(|f| &f.email)
                        on:input=set_field(|f, v| f.email = v)
                    />
                </label>
            </div>
            <div class="lead-form__row">
                <label class="lead-form__field">
                    <span>"Phone Number *"</span>
                    <input
                        type="tel"
                        placeholder="+60 12-345 6789"
                        prop:value=field(|f| &f.phone)
                        on:input=set_field(|f, v| f.phone = v)
                    />
                </label>
                <label class="lead-form__field">
                    <span>"Property Type"</span>
                    <select prop:value=field(|f| &f.property_type) on:change=set_field(|f, v| f.property_type = v)>
                        <option value="">"Select property type"</option>
                        {PROPERTY_OPTIONS
                            .iter()
                            .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <label class="lead-form__field">
                <span>"Message"</span>
                <textarea
                    rows="4"
                    placeholder="Tell us about your requirements..."
                    prop:value=field(|f| &f.message)
                    on:input=set_field(|f, v| f.message = v)
                ></textarea>
            </label>

            {move || {
                lead.with(|l| l.notice.clone())
                    .map(|notice| {
                        view! {
                            <div class=notice.kind.class()>
                                <span>{notice.text}</span>
                                <button
                                    type="button"
                                    class="lead-notice__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| lead.update(LeadState::dismiss_notice)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}

            <div class="lead-form__actions">
                <button type="button" class="lead-form__whatsapp" on:click=on_whatsapp>
                    "Send via WhatsApp"
                </button>
                <button type="submit" class="lead-form__email" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send via Email" }}
                </button>
            </div>
            <p class="lead-form__note">"* Required. WhatsApp needs your name and phone number only."</p>
        </form>
    }
}

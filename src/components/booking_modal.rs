use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::{service_options, BookingField, BookingIntake};
use crate::catalog::Service;

/// Booking dialog. The intake state lives in the page; this component only
/// renders the current snapshot and reports edits, submit and cancel back up.
/// A backdrop click counts as cancel, so typed input survives it.
#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub intake: BookingIntake,
    /// Service catalog used for the dropdown options; empty falls back to
    /// the fixed service list.
    #[prop_or_default]
    pub services: Vec<Service>,
    pub on_edit: Callback<(BookingField, String)>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    if !props.intake.is_open() {
        return html! {};
    }

    let form = props.intake.form();
    let options = service_options(&props.services);

    let edit_input = |field: BookingField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        })
    };
    let edit_textarea = |field: BookingField| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((field, area.value()));
        })
    };
    let select_service = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit((BookingField::Service, select.value()));
        })
    };

    let submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };
    let backdrop_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="booking-backdrop" onclick={backdrop_cancel}>
            <style>
                {r#"
                    .booking-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(4px);
                    }
                    .booking-dialog {
                        width: 100%;
                        max-width: 480px;
                        max-height: 85vh;
                        overflow-y: auto;
                        background: #fff;
                        border-radius: 16px;
                        padding: 2rem;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.35);
                        animation: dialog-in 0.3s ease-out;
                    }
                    @keyframes dialog-in {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .booking-dialog h2 {
                        text-align: center;
                        margin: 0 0 0.5rem;
                        background: linear-gradient(45deg, #1e6fd9, #e67e22);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .booking-dialog .title-rule {
                        width: 6rem;
                        height: 4px;
                        margin: 0 auto 1.5rem;
                        border-radius: 999px;
                        background: linear-gradient(90deg, #1e6fd9, #e67e22);
                    }
                    .booking-field { margin-bottom: 1.1rem; }
                    .booking-field label {
                        display: block;
                        font-size: 0.9rem;
                        font-weight: 600;
                        color: #333;
                        margin-bottom: 0.35rem;
                    }
                    .booking-field input,
                    .booking-field select,
                    .booking-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.6rem 0.75rem;
                        border: 1px solid rgba(30, 111, 217, 0.25);
                        border-radius: 8px;
                        font-size: 0.95rem;
                        font-family: inherit;
                        transition: border-color 0.3s;
                    }
                    .booking-field input:focus,
                    .booking-field select:focus,
                    .booking-field textarea:focus {
                        outline: none;
                        border-color: #1e6fd9;
                    }
                    .booking-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .booking-actions {
                        display: flex;
                        gap: 0.75rem;
                        margin-top: 1.5rem;
                    }
                    .booking-actions button {
                        flex: 1;
                        padding: 0.75rem;
                        border-radius: 8px;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: opacity 0.3s, transform 0.3s;
                    }
                    .booking-cancel {
                        background: none;
                        border: 1px solid rgba(30, 111, 217, 0.25);
                        color: #333;
                    }
                    .booking-cancel:hover { background: rgba(30, 111, 217, 0.05); }
                    .booking-submit {
                        border: none;
                        color: #fff;
                        font-weight: 600;
                        background: linear-gradient(90deg, #1e6fd9, #e67e22);
                    }
                    .booking-submit:hover { opacity: 0.9; transform: translateY(-1px); }
                    @media (max-width: 600px) {
                        .booking-row { grid-template-columns: 1fr; }
                        .booking-dialog { padding: 1.5rem; }
                    }
                "#}
            </style>
            <div class="booking-dialog" onclick={keep_open}>
                <h2>{"Book Our Services"}</h2>
                <div class="title-rule"></div>
                <form onsubmit={submit}>
                    <div class="booking-row">
                        <div class="booking-field">
                            <label for="booking-name">{"Full Name *"}</label>
                            <input
                                id="booking-name"
                                type="text"
                                placeholder="Enter your name"
                                value={form.name.clone()}
                                oninput={edit_input(BookingField::Name)}
                            />
                        </div>
                        <div class="booking-field">
                            <label for="booking-phone">{"Phone Number *"}</label>
                            <input
                                id="booking-phone"
                                type="tel"
                                placeholder="+91 98765 43210"
                                value={form.phone.clone()}
                                oninput={edit_input(BookingField::Phone)}
                            />
                        </div>
                    </div>
                    <div class="booking-field">
                        <label for="booking-email">{"Email Address"}</label>
                        <input
                            id="booking-email"
                            type="email"
                            placeholder="your.email@example.com"
                            value={form.email.clone()}
                            oninput={edit_input(BookingField::Email)}
                        />
                    </div>
                    <div class="booking-field">
                        <label for="booking-service">{"Type of Service *"}</label>
                        <select
                            id="booking-service"
                            value={form.service.clone()}
                            onchange={select_service}
                        >
                            <option value="" selected={form.service.is_empty()}>
                                {"Select a service"}
                            </option>
                            {
                                options.iter().map(|&title| {
                                    html! {
                                        <option
                                            value={title}
                                            selected={form.service == title}
                                        >
                                            {title}
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <div class="booking-field">
                        <label for="booking-address">{"Service Address"}</label>
                        <textarea
                            id="booking-address"
                            rows="2"
                            placeholder="Enter the address where service is needed"
                            value={form.address.clone()}
                            oninput={edit_textarea(BookingField::Address)}
                        />
                    </div>
                    <div class="booking-field">
                        <label for="booking-message">{"Additional Details"}</label>
                        <textarea
                            id="booking-message"
                            rows="3"
                            placeholder="Tell us more about your requirements..."
                            value={form.message.clone()}
                            oninput={edit_textarea(BookingField::Message)}
                        />
                    </div>
                    <div class="booking-actions">
                        <button type="button" class="booking-cancel" onclick={cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="booking-submit">
                            {"Submit Booking"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

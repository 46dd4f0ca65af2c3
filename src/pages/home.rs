use gloo_console::log;
use yew::prelude::*;

use crate::booking::{BookingField, BookingIntake};
use crate::catalog::{SERVICES, TESTIMONIALS};
use crate::components::booking_modal::BookingModal;
use crate::components::project_gallery::ProjectGallery;
use crate::components::service_card::ServiceCard;
use crate::components::testimonial_card::TestimonialCard;
use crate::components::toast::{Notice, Toast};
use crate::config;
use crate::Nav;

const HERO_STATS: &[(&str, &str)] = &[
    ("1000+", "Happy Clients"),
    ("50+", "Expert Team"),
    ("10+", "Years Experience"),
    ("100%", "Satisfaction"),
];

const QUICK_LINKS: &[(&str, &str)] = &[
    ("#", "Home"),
    ("#services", "Services"),
    ("#projects", "Projects"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

fn current_year() -> u32 {
    web_sys::js_sys::Date::new_0().get_full_year()
}

#[function_component(Home)]
pub fn home() -> Html {
    let intake = use_state(BookingIntake::new);
    let notice = use_state(|| None::<Notice>);

    // Opens the modal, optionally preselecting a service.
    let open_booking = {
        let intake = intake.clone();
        Callback::from(move |preselected: Option<String>| {
            let mut next = (*intake).clone();
            next.open(preselected.as_deref());
            intake.set(next);
        })
    };

    let book_now = {
        let open_booking = open_booking.clone();
        Callback::from(move |_: ()| {
            open_booking.emit(None);
        })
    };

    let edit_field = {
        let intake = intake.clone();
        Callback::from(move |(field, value): (BookingField, String)| {
            let mut next = (*intake).clone();
            next.update_field(field, value);
            intake.set(next);
        })
    };

    let submit_booking = {
        let intake = intake.clone();
        let notice = notice.clone();
        Callback::from(move |_: ()| {
            let mut next = (*intake).clone();
            match next.submit() {
                Ok(request) => {
                    // Simulated dispatch: log the payload a real backend
                    // would receive.
                    if let Ok(payload) = serde_json::to_string(&request) {
                        log!("booking request:", payload);
                    }
                    notice.set(Some(Notice::success(
                        "Booking Submitted!",
                        "We'll contact you within 24 hours to confirm your appointment.",
                    )));
                }
                Err(err) => {
                    notice.set(Some(Notice::error("Error", err.message())));
                }
            }
            intake.set(next);
        })
    };

    let cancel_booking = {
        let intake = intake.clone();
        Callback::from(move |_: ()| {
            let mut next = (*intake).clone();
            next.cancel();
            intake.set(next);
        })
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_: ()| {
            notice.set(None);
        })
    };

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page {
                        color: #1a1a1a;
                        background: #fff;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        color: #fff;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-image: url('/assets/hero-services.jpg');
                        background-size: cover;
                        background-position: center;
                        filter: brightness(0.5);
                    }
                    .hero-background::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(30, 111, 217, 0.7), rgba(230, 126, 34, 0.55));
                        mix-blend-mode: multiply;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 860px;
                        padding: 6rem 1.5rem 3rem;
                    }
                    .hero-badge {
                        display: inline-block;
                        padding: 0.5rem 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.25);
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(6px);
                        font-size: 0.85rem;
                        letter-spacing: 0.1em;
                        margin-bottom: 2rem;
                    }
                    .hero h1 {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        line-height: 1.1;
                        margin: 0 0 1rem;
                    }
                    .hero h1 .accent { color: #f5b041; }
                    .hero-subtitle {
                        font-size: 1.35rem;
                        font-weight: 300;
                        opacity: 0.9;
                        margin-bottom: 1.5rem;
                    }
                    .hero-description {
                        padding: 1.25rem;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.06);
                        backdrop-filter: blur(6px);
                        margin-bottom: 2.5rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .hero-cta {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 12px;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .hero-cta.primary {
                        background: #e67e22;
                        color: #fff;
                    }
                    .hero-cta.secondary {
                        background: rgba(255, 255, 255, 0.12);
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        color: #fff;
                        text-decoration: none;
                        display: inline-flex;
                        align-items: center;
                    }
                    .hero-cta:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        margin-top: 4rem;
                    }
                    .hero-stat p { margin: 0; }
                    .hero-stat .value { font-size: 1.9rem; font-weight: bold; }
                    .hero-stat .label { font-size: 0.85rem; opacity: 0.7; }
                    @media (max-width: 700px) {
                        .hero-stats { grid-template-columns: repeat(2, 1fr); }
                    }
                    .section {
                        padding: 4rem 1rem;
                    }
                    .section-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 2.5rem;
                    }
                    .section-heading h2 {
                        font-size: 2rem;
                        margin: 0 0 1rem;
                    }
                    .section-heading p {
                        color: #666;
                        max-width: 620px;
                        margin: 0 auto;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .contact-section { background: #f4f6fa; }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2.5rem;
                    }
                    @media (max-width: 800px) {
                        .contact-grid { grid-template-columns: 1fr; }
                    }
                    .contact-cards {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .contact-card {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        background: #fff;
                        border-radius: 12px;
                        padding: 1.25rem;
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                        transition: transform 0.3s;
                    }
                    .contact-card:hover { transform: translateY(-3px); }
                    .contact-card .badge {
                        width: 48px;
                        height: 48px;
                        border-radius: 999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                        background: rgba(30, 111, 217, 0.08);
                        flex-shrink: 0;
                    }
                    .contact-card h4 { margin: 0 0 0.25rem; }
                    .contact-card p { margin: 0; color: #666; font-size: 0.9rem; }
                    .map-placeholder {
                        background: #fff;
                        border-radius: 12px;
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.06);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 2rem;
                        min-height: 320px;
                        color: #666;
                    }
                    .map-placeholder h4 { color: #1a1a1a; margin: 0.75rem 0 0.5rem; }
                    .footer {
                        background: #10161f;
                        color: rgba(255, 255, 255, 0.75);
                        padding: 4rem 1rem 2rem;
                    }
                    .footer-grid {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2.5rem;
                    }
                    .footer h3 {
                        color: #fff;
                        font-size: 1.05rem;
                        margin: 0 0 1rem;
                    }
                    .footer-brand {
                        font-weight: bold;
                        font-size: 1.4rem;
                        background: linear-gradient(90deg, #7eb2ff, #f5b041);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        margin-bottom: 1rem;
                        display: inline-block;
                    }
                    .footer ul { list-style: none; margin: 0; padding: 0; }
                    .footer li { margin-bottom: 0.6rem; font-size: 0.9rem; }
                    .footer a {
                        color: rgba(255, 255, 255, 0.75);
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .footer a:hover { color: #7eb2ff; }
                    .footer-bottom {
                        max-width: 1100px;
                        margin: 3rem auto 0;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        font-size: 0.85rem;
                    }
                "#}
            </style>

            <Nav on_book_now={book_now.clone()} />

            <header class="hero">
                <div class="hero-background"></div>
                <div class="hero-content">
                    <span class="hero-badge">
                        {"★ TRUSTED BY 1000+ CUSTOMERS IN CHANDIGARH ★"}
                    </span>
                    <h1>
                        {"The Client "}<span class="accent">{"Company"}</span>
                    </h1>
                    <p class="hero-subtitle">{"Professional Home & Commercial Services"}</p>
                    <p class="hero-description">
                        {"We provide top-quality home and commercial services in Chandigarh \
                          with a focus on reliability, professionalism, and customer \
                          satisfaction. Our team of experts is ready to transform your space."}
                    </p>
                    <div class="hero-cta-group">
                        <button
                            class="hero-cta primary"
                            onclick={{
                                let book_now = book_now.clone();
                                Callback::from(move |_: MouseEvent| book_now.emit(()))
                            }}
                        >
                            {"Book Our Services"}
                        </button>
                        <a class="hero-cta secondary" href="#services">
                            {"Explore Services"}
                        </a>
                    </div>
                    <div class="hero-stats">
                        {
                            HERO_STATS.iter().map(|&(value, label)| {
                                html! {
                                    <div class="hero-stat">
                                        <p class="value">{value}</p>
                                        <p class="label">{label}</p>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </header>

            <section id="services" class="section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"Our Professional Services"}</h2>
                        <p>
                            {"We provide comprehensive home and commercial services across \
                              Chandigarh with skilled professionals and quality materials."}
                        </p>
                    </div>
                    <div class="card-grid">
                        {
                            SERVICES.iter().map(|service| {
                                let on_book_now = {
                                    let open_booking = open_booking.clone();
                                    let title = service.title;
                                    Callback::from(move |_: ()| {
                                        open_booking.emit(Some(title.to_string()));
                                    })
                                };
                                html! {
                                    <ServiceCard
                                        key={service.title}
                                        service={*service}
                                        {on_book_now}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <ProjectGallery />

            <section id="testimonials" class="section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"What Our Clients Say"}</h2>
                        <p>
                            {"Don't just take our word for it. Here's what our satisfied \
                              customers have to say about our services."}
                        </p>
                    </div>
                    <div class="card-grid">
                        {
                            TESTIMONIALS.iter().map(|testimonial| {
                                html! {
                                    <TestimonialCard
                                        key={testimonial.name}
                                        testimonial={*testimonial}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="contact" class="section contact-section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{"Get In Touch"}</h2>
                        <p>{"Ready to get started? Contact us today for a free consultation and quote."}</p>
                    </div>
                    <div class="contact-grid">
                        <div class="contact-cards">
                            <div class="contact-card">
                                <span class="badge">{"📞"}</span>
                                <div>
                                    <h4>{"Phone"}</h4>
                                    <p>{config::PHONE}</p>
                                </div>
                            </div>
                            <div class="contact-card">
                                <span class="badge">{"✉️"}</span>
                                <div>
                                    <h4>{"Email"}</h4>
                                    <p>{config::EMAIL}</p>
                                </div>
                            </div>
                            <div class="contact-card">
                                <span class="badge">{"📍"}</span>
                                <div>
                                    <h4>{"Location"}</h4>
                                    <p>{config::LOCATION}</p>
                                </div>
                            </div>
                            <div class="contact-card">
                                <span class="badge">{"🕐"}</span>
                                <div>
                                    <h4>{"Working Hours"}</h4>
                                    <p>{config::WORKING_HOURS}</p>
                                    <p>{config::EMERGENCY_HOURS}</p>
                                </div>
                            </div>
                        </div>
                        <div class="map-placeholder">
                            <div>
                                <span style="font-size: 2.5rem;">{"📍"}</span>
                                <h4>{"Service Areas"}</h4>
                                <p>
                                    {"We serve all sectors of Chandigarh, Mohali, and surrounding areas."}
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-grid">
                    <div>
                        <span class="footer-brand">{config::COMPANY_NAME}</span>
                        <p>
                            {"Professional services for all your home and office needs in \
                              Chandigarh. Quality work, timely delivery, and customer \
                              satisfaction guaranteed."}
                        </p>
                    </div>
                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            {
                                QUICK_LINKS.iter().map(|&(href, label)| {
                                    html! {
                                        <li><a href={href}>{label}</a></li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div>
                        <h3>{"Services"}</h3>
                        <ul>
                            {
                                SERVICES.iter().map(|service| {
                                    html! {
                                        <li><a href="#services">{service.title}</a></li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div>
                        <h3>{"Contact Info"}</h3>
                        <ul>
                            <li>{config::ADDRESS}</li>
                            <li>{config::PHONE}</li>
                            <li>{config::EMAIL}</li>
                            <li>{config::WORKING_HOURS}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", current_year(), config::COMPANY_NAME)}</p>
                    <p>{"Privacy Policy · Terms of Service · Sitemap"}</p>
                </div>
            </footer>

            <BookingModal
                intake={(*intake).clone()}
                services={SERVICES.to_vec()}
                on_edit={edit_field}
                on_submit={submit_booking}
                on_cancel={cancel_booking}
            />

            {
                if let Some(notice) = (*notice).clone() {
                    html! { <Toast {notice} on_dismiss={dismiss_notice} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

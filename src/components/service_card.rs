use yew::prelude::*;

use crate::catalog::Service;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    /// Fired when the card's Book Now is clicked; the page opens the booking
    /// modal preselected with this card's service.
    pub on_book_now: Callback<()>,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;

    let book_now = {
        let on_book_now = props.on_book_now.clone();
        Callback::from(move |_: MouseEvent| {
            on_book_now.emit(());
        })
    };

    html! {
        <div class="service-card">
            <style>
                {r#"
                    .service-card {
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                        background: #fff;
                        border-radius: 16px;
                        overflow: hidden;
                        box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
                        transition: transform 0.4s, box-shadow 0.4s;
                    }
                    .service-card:hover {
                        transform: translateY(-6px);
                        box-shadow: 0 12px 32px rgba(30, 111, 217, 0.18);
                    }
                    .service-card-image {
                        position: relative;
                        height: 200px;
                        overflow: hidden;
                    }
                    .service-card-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.6s ease-in-out;
                    }
                    .service-card:hover .service-card-image img {
                        transform: scale(1.08);
                    }
                    .service-card-body {
                        display: flex;
                        flex-direction: column;
                        flex: 1;
                        padding: 1.25rem;
                    }
                    .service-card-title {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                        margin-bottom: 0.75rem;
                    }
                    .service-card-title .icon {
                        font-size: 1.5rem;
                        padding: 0.4rem;
                        border-radius: 999px;
                        background: rgba(30, 111, 217, 0.08);
                    }
                    .service-card-title h3 {
                        margin: 0;
                        font-size: 1.2rem;
                        color: #1a1a1a;
                    }
                    .service-card-description {
                        font-size: 0.9rem;
                        color: #666;
                        background: rgba(30, 111, 217, 0.04);
                        border-radius: 8px;
                        padding: 0.6rem;
                        margin-bottom: 0.9rem;
                    }
                    .service-card-list h4 {
                        margin: 0 0 0.5rem;
                        font-size: 0.8rem;
                        color: #1a1a1a;
                        text-transform: uppercase;
                        letter-spacing: 0.04em;
                    }
                    .service-card-list ul {
                        list-style: none;
                        margin: 0 0 1rem;
                        padding: 0;
                    }
                    .service-card-list li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.85rem;
                        color: #555;
                        padding: 0.2rem 0;
                    }
                    .service-card-list li::before {
                        content: '';
                        width: 6px;
                        height: 6px;
                        border-radius: 999px;
                        background: linear-gradient(90deg, #1e6fd9, #e67e22);
                        flex-shrink: 0;
                    }
                    .service-card-book {
                        margin-top: auto;
                        width: 100%;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 8px;
                        color: #fff;
                        font-size: 0.95rem;
                        font-weight: 600;
                        cursor: pointer;
                        background: linear-gradient(90deg, #1e6fd9, #e67e22);
                        transition: opacity 0.3s, transform 0.3s;
                    }
                    .service-card-book:hover {
                        opacity: 0.9;
                        transform: translateY(-1px);
                    }
                "#}
            </style>
            <div class="service-card-image">
                <img src={service.image} alt={format!("{} illustration", service.title)} loading="lazy" />
            </div>
            <div class="service-card-body">
                <div class="service-card-title">
                    <span class="icon">{service.icon}</span>
                    <h3>{service.title}</h3>
                </div>
                <p class="service-card-description">{service.description}</p>
                <div class="service-card-list">
                    <h4>{"Services Include:"}</h4>
                    <ul>
                        {
                            service.services.iter().map(|&item| {
                                html! { <li>{item}</li> }
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
                <button class="service-card-book" onclick={book_now}>
                    {"Book Now →"}
                </button>
            </div>
        </div>
    }
}

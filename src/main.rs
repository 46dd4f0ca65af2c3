use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod booking;
mod catalog;
mod config;
mod filter;
mod components {
    pub mod booking_modal;
    pub mod project_gallery;
    pub mod service_card;
    pub mod testimonial_card;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

/// Scroll offset past which the nav switches to its solid style.
const NAV_SCROLL_THRESHOLD: i32 = 80;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#projects", "Projects"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_book_now: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let document = window.document().expect("no document");

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(root) = document.document_element() {
                        is_scrolled.set(root.scroll_top() > NAV_SCROLL_THRESHOLD);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .expect("failed to attach scroll listener");

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let book_now = {
        let on_book_now = props.on_book_now.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_book_now.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.12);
                        backdrop-filter: blur(10px);
                        transition: background 0.3s, box-shadow 0.3s;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    }
                    .top-nav.scrolled .nav-link { color: #1a1a1a; }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        height: 72px;
                        padding: 0 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.4rem;
                        font-weight: bold;
                        background: linear-gradient(90deg, #1e6fd9, #e67e22);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-link {
                        padding: 0.5rem 1rem;
                        border-radius: 8px;
                        color: #fff;
                        text-decoration: none;
                        transition: background 0.3s, color 0.3s;
                    }
                    .nav-link:hover {
                        background: #1e6fd9;
                        color: #fff;
                    }
                    .nav-book-button {
                        padding: 0.6rem 1.4rem;
                        border: none;
                        border-radius: 8px;
                        background: #1e6fd9;
                        color: #fff;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.3s;
                    }
                    .nav-book-button:hover { background: #185bb5; }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #fff;
                    }
                    .top-nav.scrolled .burger-menu span { background: #1a1a1a; }
                    @media (max-width: 800px) {
                        .burger-menu { display: flex; }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 72px;
                            left: 0;
                            width: 100%;
                            flex-direction: column;
                            align-items: stretch;
                            padding: 1rem;
                            background: rgba(255, 255, 255, 0.98);
                            box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                        }
                        .nav-right.mobile-menu-open { display: flex; }
                        .nav-right .nav-link { color: #1a1a1a; text-align: center; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo">{config::BRAND}</a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|&(href, label)| {
                            let close_menu = close_menu.clone();
                            html! {
                                <a href={href} class="nav-link" onclick={close_menu}>
                                    {label}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                    <button class="nav-book-button" onclick={book_now}>
                        {"Book Now"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! { <Home /> }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

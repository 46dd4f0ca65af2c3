use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a notice stays on screen before it dismisses itself.
const AUTO_DISMISS_MS: u32 = 4500;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient user-visible notification. Non-blocking: it overlays the page
/// and never interrupts the flow that raised it.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: &str, message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Notice,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    // Auto-dismiss; replacing the notice re-arms the timer and the cleanup
    // drops the stale one.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(AUTO_DISMISS_MS, move || {
                    on_dismiss.emit(());
                });
                move || drop(timer)
            },
            props.notice.clone(),
        );
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| {
            on_dismiss.emit(());
        })
    };

    let kind_class = match props.notice.kind {
        NoticeKind::Success => "toast-success",
        NoticeKind::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", kind_class)}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 200;
                        min-width: 280px;
                        max-width: 380px;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: rgba(30, 30, 30, 0.95);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                        color: #fff;
                        animation: toast-in 0.3s ease-out;
                    }
                    @keyframes toast-in {
                        from { transform: translateY(1rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast-success { border: 1px solid rgba(46, 204, 113, 0.4); }
                    .toast-error { border: 1px solid rgba(231, 76, 60, 0.4); }
                    .toast-title {
                        font-weight: bold;
                        margin-bottom: 0.25rem;
                        padding-right: 1.5rem;
                    }
                    .toast-success .toast-title { color: #2ecc71; }
                    .toast-error .toast-title { color: #e74c3c; }
                    .toast-message {
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .toast-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .toast-close:hover { color: #fff; }
                "#}
            </style>
            <button class="toast-close" onclick={dismiss}>{"✕"}</button>
            <div class="toast-title">{&props.notice.title}</div>
            <div class="toast-message">{&props.notice.message}</div>
        </div>
    }
}

use yew::prelude::*;
use gloo_timers::callback::Timeout;

const DISMISS_AFTER_MS: u32 = 5000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    Info,
    Destructive,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Toast {
    pub fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: Variant::Info,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: Variant::Destructive,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

/// Bottom-corner toast that clears itself after a few seconds.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |toast: &Option<Toast>| {
                let timeout = toast.as_ref().map(|_| {
                    Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(()))
                });
                // Dropping the timeout cancels it when the toast changes first.
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let variant_class = match toast.variant {
        Variant::Info => "toast-info",
        Variant::Destructive => "toast-destructive",
    };

    html! {
        <div class={classes!("toast", variant_class)} role="status">
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        max-width: 360px;
                        padding: 1rem 1.25rem;
                        border-radius: 16px;
                        background: #ffffff;
                        box-shadow: 0 16px 32px rgba(0,0,0,0.15);
                        animation: slideIn 0.4s ease-out forwards;
                        z-index: 50;
                    }
                    .toast-info { border: 1px solid rgba(46, 125, 107, 0.3); }
                    .toast-destructive { border: 1px solid rgba(200, 50, 50, 0.5); background: #fff5f5; }
                    .toast-title { font-weight: bold; margin-bottom: 0.25rem; }
                    .toast-description { color: #555; font-size: 0.9rem; }
                    .toast-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.75rem;
                        border: none;
                        background: none;
                        cursor: pointer;
                    }
                    @keyframes slideIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <button class="toast-close" onclick={close}>{"✕"}</button>
            <div class="toast-title">{&toast.title}</div>
            <div class="toast-description">{&toast.description}</div>
        </div>
    }
}

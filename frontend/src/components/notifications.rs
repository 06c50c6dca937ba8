//! Toast notifications.
//!
//! A [`Notifier`] handle is provided via context at app startup so any
//! component or handler can surface success/error messages. Toasts are
//! auto-dismissed after a configured interval and can be closed manually.

use leptos::*;

use crate::config::{MAX_TOASTS, TOAST_DISMISS_MS};
use crate::types::{Toast, ToastLevel};

/// Handle for pushing toasts from anywhere in the app.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{}", message);
        self.push(ToastLevel::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get_value();
        self.next_id.update_value(|next| *next += 1);

        let toasts = self.toasts;
        toasts.update(|list| {
            list.push(Toast {
                id,
                level,
                message,
                timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            });
            if list.len() > MAX_TOASTS {
                list.remove(0);
            }
        });

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }
}

/// Create the notifier and put it into context. Call once, in `App`.
pub fn provide_notifier() -> Notifier {
    let notifier = Notifier::new();
    provide_context(notifier);
    notifier
}

/// Grab the notifier from context.
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

/// Renders the current toasts in a fixed stack.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifier = use_notifier();
    let toasts = notifier.toasts;

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.level.css_class())>
                            <span class="toast-time">"[" {toast.timestamp.clone()} "] "</span>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button class="toast-close" on:click=move |_| notifier.dismiss(id)>
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

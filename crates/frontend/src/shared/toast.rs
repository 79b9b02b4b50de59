use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays on screen before auto-dismissing.
const TOAST_LIFETIME_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast--success",
            ToastLevel::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
}

/// Service for transient notifications, provided once at the app root.
///
/// Usage:
/// ```rust,no_run
/// use leptos::prelude::*;
/// use frontend::shared::toast::ToastService;
/// let toasts = use_context::<ToastService>().expect("ToastService not provided");
/// toasts.success("Copied to clipboard", "The response has been copied.");
/// ```
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastLevel::Success, title.into(), message.into());
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(ToastLevel::Error, title.into(), message.into());
    }

    fn push(&self, level: ToastLevel, title: String, message: String) {
        let id = Uuid::new_v4();
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                level,
                title,
                message,
            })
        });

        let toasts = self.toasts;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the active toasts in a fixed corner stack. Clicking a toast
/// dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toaster">
            <For each=move || service.toasts.get() key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.level.class())
                            on:click=move |_| service.dismiss(id)
                        >
                            <span class="toast__title">{toast.title.clone()}</span>
                            <span class="toast__message">{toast.message.clone()}</span>
                        </div>
                    }
                }
            </For>
        </div>
    }
}

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen, in milliseconds.
const TOAST_LIFETIME_MS: u32 = 4_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

/// Card modifier class per level
pub fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast toast--success",
        ToastLevel::Error => "toast toast--error",
        ToastLevel::Info => "toast toast--info",
    }
}

#[derive(Debug, Clone)]
struct ToastEntry {
    id: u64,
    level: ToastLevel,
    message: String,
}

/// Toast notification service.
///
/// Every mutation boundary reports its outcome here; entries dismiss
/// themselves after a few seconds or on click.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| {
            t.push(ToastEntry {
                id,
                level,
                message: message.into(),
            });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| {
            t.retain(|e| e.id != id);
        });
    }
}

/// Renders the toast stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-stack">
            <For
                each=move || svc.toasts.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <div class=level_class(entry.level) on:click=move |_| svc.dismiss(id)>
                            <span class="toast__message">{entry.message.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_classes_are_distinct() {
        assert_ne!(level_class(ToastLevel::Success), level_class(ToastLevel::Error));
        assert_ne!(level_class(ToastLevel::Error), level_class(ToastLevel::Info));
        assert!(level_class(ToastLevel::Success).starts_with("toast "));
    }
}

//! Transient toast notifications: a context holding the active stack, a host
//! component that renders it top-right, and auto-expiry after three seconds.

use std::time::Duration;

use dioxus::prelude::*;

const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn show_success(mut toasts: Signal<Toasts>, message: impl Into<String>) {
    toasts.write().push(ToastLevel::Success, message);
}

pub fn show_error(mut toasts: Signal<Toasts>, message: impl Into<String>) {
    toasts.write().push(ToastLevel::Error, message);
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
    }
}

/// Renders the active toast stack. Mount once in the app shell so dismissal
/// timers outlive the view that raised the toast.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();

    rsx! {
        div {
            class: "toast-host",
            for toast in toasts().entries().iter().cloned() {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    use_future(move || async move {
        sleep(TOAST_TTL).await;
        toasts.write().dismiss(id);
    });

    rsx! {
        div {
            class: toast.level.class(),
            onclick: move |_| toasts.write().dismiss(id),
            "{toast.message}"
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Success, "saved");
        let b = toasts.push(ToastLevel::Error, "failed");
        assert!(b > a);
        assert_eq!(toasts.entries().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastLevel::Success, "one");
        let b = toasts.push(ToastLevel::Success, "two");
        toasts.dismiss(a);
        let remaining: Vec<u64> = toasts.entries().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![b]);
        // dismissing an unknown id is a no-op
        toasts.dismiss(999);
        assert_eq!(toasts.entries().len(), 1);
    }
}

use std::time::Duration;

use leptos::*;

const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// Context handle for transient notifications. One toast is visible at a
/// time; showing a new one replaces the current one and restarts the clock.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toaster {
    pub fn success(&self, title: &str, message: &str) {
        self.push(ToastKind::Success, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(ToastKind::Error, title, message);
    }

    pub fn info(&self, title: &str, message: &str) {
        self.push(ToastKind::Info, title, message);
    }

    fn push(&self, kind: ToastKind, title: &str, message: &str) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);
        self.current.set(Some(Toast {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
        }));

        // Only dismiss if this toast is still the one on screen.
        let current = self.current;
        set_timeout(
            move || {
                current.update(|slot| {
                    if slot.as_ref().map(|t| t.id) == Some(id) {
                        *slot = None;
                    }
                });
            },
            DISMISS_AFTER,
        );
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        current: create_rw_signal(None),
        next_id: create_rw_signal(0),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    let card_style = "
        position: fixed;
        top: 1.5rem;
        right: 1.5rem;
        z-index: 1000;
        min-width: 280px;
        max-width: 380px;
        padding: 1rem 1.25rem;
        background: var(--bg-surface);
        border-radius: var(--radius-md);
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.15);
    ";

    view! {
        {move || {
            toaster.current.get().map(|toast| {
                let accent = match toast.kind {
                    ToastKind::Success => "border-left: 4px solid var(--indian-green);",
                    ToastKind::Error => "border-left: 4px solid var(--indian-red);",
                    ToastKind::Info => "border-left: 4px solid var(--brand-dark);",
                };
                view! {
                    <div style=format!("{card_style} {accent}")>
                        <p style="margin: 0 0 0.25rem 0; font-weight: 600; color: var(--text-heading);">
                            {toast.title}
                        </p>
                        <p style="margin: 0; font-size: 0.9rem; color: var(--text-muted);">
                            {toast.message}
                        </p>
                    </div>
                }
            })
        }}
    }
}

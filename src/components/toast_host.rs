//! Fixed-position toast stack rendering the shared notice store.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::notify::{NoticeKind, Notifier};

fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Info => "toast--info",
        NoticeKind::Success => "toast--success",
        NoticeKind::Error => "toast--error",
    }
}

/// Renders every live notice with a dismiss affordance.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = Notifier::expect_from_context();

    view! {
        <div class="toast-host" role="status">
            <For
                each=move || notify.notices()
                key=|notice| notice.id
                children=move |notice| {
                    let dismiss_id = notice.id;
                    let class = format!("toast {}", kind_class(notice.kind));
                    view! {
                        <div class=class>
                            <span class="toast__message">{notice.message}</span>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| notify.dismiss(dismiss_id)
                                aria-label="Dismiss"
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Flash-notice list rendered above the routed content.
//!
//! DESIGN
//! ======
//! Pages write to the shared [`MessageLog`]; this component renders it and
//! arms one auto-dismiss timer per notice in the browser. Dismissal is
//! id-targeted so a timer never removes a newer notice.

#[cfg(test)]
#[path = "flash_messages_test.rs"]
mod flash_messages_test;

use std::collections::HashSet;
use std::time::Duration;

use leptos::prelude::*;

use crate::state::messages::{MessageLog, Severity};

/// How long a notice stays up before browser-side auto-dismiss.
pub const DISMISS_AFTER: Duration = Duration::from_secs(8);

pub(crate) fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "flash flash--error",
        Severity::Info => "flash flash--info",
    }
}

fn schedule_dismiss(messages: RwSignal<MessageLog>, id: u64) {
    #[cfg(feature = "browser")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(DISMISS_AFTER).await;
        messages.update(|log| log.dismiss(id));
    });
    #[cfg(not(feature = "browser"))]
    {
        let _ = (messages, id);
    }
}

#[component]
pub fn FlashMessages() -> impl IntoView {
    let messages = expect_context::<RwSignal<MessageLog>>();

    let scheduled = StoredValue::new(HashSet::<u64>::new());
    Effect::new(move || {
        let ids: Vec<u64> = messages.with(|log| log.messages.iter().map(|m| m.id).collect());
        for id in ids {
            let fresh = scheduled
                .try_update_value(|seen| seen.insert(id))
                .unwrap_or(false);
            if fresh {
                schedule_dismiss(messages, id);
            }
        }
    });

    view! {
        <div class="flash-list">
            <For
                each=move || messages.get().messages
                key=|message| message.id
                children=move |message| {
                    let id = message.id;
                    view! {
                        <div class=severity_class(message.severity)>
                            <span class="flash__text">{message.text.clone()}</span>
                            <button
                                class="flash__dismiss"
                                on:click=move |_| messages.update(|log| log.dismiss(id))
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

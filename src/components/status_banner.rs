//! Status Banner
//!
//! Shows the latest request failure. Nothing is retried; the banner only
//! tells the user that the last action did not go through.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

const AUTO_DISMISS_MS: u32 = 6_000;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_app_context();
    let status = Memo::new(move |_| ctx.state.with(|s| s.status.clone()));

    // Auto-dismiss; a newer message keeps its own timer
    Effect::new(move |_| {
        if let Some(seq) = status.with(|s| s.as_ref().map(|m| m.seq)) {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                ctx.with(|c| c.dismiss_status(seq));
            });
        }
    });

    view! {
        {move || status.get().map(|message| {
            let seq = message.seq;
            view! {
                <div class="status-banner" role="alert">
                    <span class="status-text">{message.text}</span>
                    <button class="close-btn" on:click=move |_| ctx.with(|c| c.dismiss_status(seq))>"×"</button>
                </div>
            }
        })}
    }
}

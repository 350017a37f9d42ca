//! Scripted assistant chat dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every chat surface renders this one component; the [`ResponderProfile`]
//! prop selects phrasing strategy, context awareness, and thinking delay.
//! Listings come from the parent and are only read.

use std::time::Duration;

use leptos::prelude::*;

use crate::responder::{Responder, ResponderProfile};
use crate::state::chat::{ChatSession, PendingReply, Sender};
use crate::types::Listing;
use crate::util::clock::now_ms;
use crate::util::markdown::render_markdown_html;

/// Chat dialog with message history and an input row.
#[component]
pub fn ChatDialog(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] listings: Signal<Vec<Listing>>,
    #[prop(optional)] profile: Option<ResponderProfile>,
) -> impl IntoView {
    let profile = profile.unwrap_or_default();
    let chat = RwSignal::new(ChatSession::default());
    let responder = StoredValue::new(Responder::new(profile));
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        if open.get() {
            chat.update(|c| c.open(profile.welcome, now_ms()));
        } else {
            chat.update(ChatSession::close);
            input.set(String::new());
        }
    });

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        if !chat.with_untracked(|c| c.can_send(&text, profile.block_input_while_thinking)) {
            return;
        }
        let history = chat.with_untracked(|c| c.messages.clone());
        let mut sent = None;
        chat.update(|c| sent = c.push_user(&text, now_ms()));
        let Some(sent) = sent else {
            return;
        };
        input.set(String::new());

        let mut reply = None;
        listings.with_untracked(|items| {
            responder.update_value(|r| reply = Some(r.reply(&sent.text, items, &history)));
        });
        let Some(reply) = reply else {
            return;
        };

        let mut pending = None;
        chat.update(|c| pending = Some(c.begin_reply()));
        if let Some(pending) = pending {
            deliver(chat, pending, reply.text, profile.thinking_delay);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        match ev.key().as_str() {
            "Enter" if !ev.shift_key() => {
                ev.prevent_default();
                do_send();
            }
            "Escape" => {
                ev.prevent_default();
                on_close.run(());
            }
            _ => {}
        }
    };

    let can_send = move || chat.with(|c| c.can_send(&input.get(), profile.block_input_while_thinking));
    let input_locked = move || profile.block_input_while_thinking && chat.with(ChatSession::is_thinking);

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog chat-dialog"
                    role="dialog"
                    aria-label="KindBite assistant"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="chat-dialog__header">
                        <span class="chat-dialog__title">"KindBite AI"</span>
                        <span class="chat-dialog__subtitle">
                            {move || format!("{} listings loaded", listings.with(Vec::len))}
                        </span>
                        <button class="chat-dialog__close" title="Close chat" on:click=move |_| on_close.run(())>
                            "✕"
                        </button>
                    </div>

                    <div class="chat-dialog__messages" node_ref=messages_ref>
                        {move || {
                            chat.get()
                                .messages
                                .into_iter()
                                .map(|msg| {
                                    let is_ai = msg.sender == Sender::Ai;
                                    view! {
                                        <div
                                            class="chat-dialog__message"
                                            class:chat-dialog__message--ai=is_ai
                                            class:chat-dialog__message--user=!is_ai
                                        >
                                            {if is_ai {
                                                let rendered = render_markdown_html(&msg.text);
                                                view! { <div class="chat-dialog__markdown" inner_html=rendered></div> }
                                                    .into_any()
                                            } else {
                                                view! { <span>{msg.text}</span> }.into_any()
                                            }}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}

                        {move || {
                            chat.with(ChatSession::is_thinking)
                                .then(|| view! { <div class="chat-dialog__typing">"KindBite AI is typing..."</div> })
                        }}
                    </div>

                    <div class="chat-dialog__input-row">
                        <input
                            class="chat-dialog__input"
                            type="text"
                            placeholder="Ask about food, reservations, stats..."
                            disabled=input_locked
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn btn--primary chat-dialog__send"
                            on:click=move |_| do_send()
                            disabled=move || !can_send()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Append `text` once the profile's thinking delay has elapsed.
fn deliver(chat: RwSignal<ChatSession>, pending: PendingReply, text: String, delay: Option<Duration>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(delay) = delay {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                chat.update(|c| {
                    c.finish_reply(pending, text, now_ms());
                });
            });
            return;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        if let Some(delay) = delay {
            log::debug!("no browser timer, skipping {}ms thinking delay", delay.as_millis());
        }
    }
    chat.update(|c| {
        c.finish_reply(pending, text, now_ms());
    });
}

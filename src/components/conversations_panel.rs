//! Conversations Panel Component

use leptos::prelude::*;

use crate::components::activity_panel::{ready_len, status_view, PanelHeader};
use crate::context::{use_app_context, use_observable};
use crate::format;
use crate::markdown::parse_markdown_inline;

#[component]
pub fn ConversationsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let conversations = use_observable(ctx.conversations.state());

    view! {
        <section class="panel conversations-panel">
            <PanelHeader title="Conversations" count=Signal::derive(move || conversations.with(ready_len)) />
            {move || conversations.with(|state| status_view(state, "conversations"))}
            <ul class="panel-list">
                <For
                    each=move || conversations.with(|s| s.ready().map(|l| l.to_vec()).unwrap_or_default())
                    key=|c| c.id
                    children=move |conversation| {
                        let unread = conversation.unread;
                        view! {
                            <li class="conversation" class:unread={unread > 0}>
                                <div class="conversation-top">
                                    <span class="conversation-contact">{conversation.contact_name.clone()}</span>
                                    <span class="conversation-channel">{conversation.channel.clone()}</span>
                                    <span class="conversation-time">{format::timestamp(&conversation.timestamp)}</span>
                                </div>
                                <div class="conversation-subject">
                                    {conversation.subject.clone()}
                                    <Show when={move || unread > 0}>
                                        <span class="unread-badge">{unread}</span>
                                    </Show>
                                </div>
                                <p class="conversation-preview" inner_html=parse_markdown_inline(&conversation.last_message)></p>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

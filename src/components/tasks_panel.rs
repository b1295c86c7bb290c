//! Tasks Panel Component

use leptos::prelude::*;

use crate::components::activity_panel::{ready_len, status_view, PanelHeader};
use crate::context::{use_app_context, use_observable};
use crate::format;

#[component]
pub fn TasksPanel() -> impl IntoView {
    let ctx = use_app_context();
    let tasks = use_observable(ctx.tasks.state());
    let open_count = move || tasks.with(|s| s.ready().map(|l| l.iter().filter(|t| !t.completed).count()));

    view! {
        <section class="panel tasks-panel">
            <PanelHeader title="Tasks" count=Signal::derive(move || tasks.with(ready_len)) />
            {move || open_count().map(|n| view! { <p class="panel-subtitle">{format!("{} open", n)}</p> })}
            {move || tasks.with(|state| status_view(state, "tasks"))}
            <ul class="panel-list">
                <For
                    each=move || tasks.with(|s| s.ready().map(|l| l.to_vec()).unwrap_or_default())
                    key=|t| t.id
                    children=move |task| {
                        let due = task.due_date.as_ref().map(format::due_date);
                        view! {
                            <li class="task" class:completed=task.completed>
                                <span class="task-check">{if task.completed { "☑" } else { "☐" }}</span>
                                <div class="task-text">
                                    <span class="task-title">{task.title.clone()}</span>
                                    <div class="task-meta">
                                        <span class=format!("task-status status-{}", task.status.to_lowercase().replace(' ', "-"))>
                                            {task.status.clone()}
                                        </span>
                                        {due.map(|d| view! { <span class="task-due">"Due " {d}</span> })}
                                        {task.assignee.clone().map(|a| view! { <span class="task-assignee">{a}</span> })}
                                    </div>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

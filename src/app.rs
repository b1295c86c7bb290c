//! Contact Desk App
//!
//! Root component: wires services into context and mounts the layout.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::MockApi;
use crate::components::LayoutSwitcher;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::ViewState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let view_state = ViewState::new(&config.default_layout);

    let ctx = AppContext::new(config, Arc::new(MockApi::with_fixtures()));
    provide_context(ctx.clone());
    provide_context(Store::new(view_state));

    ctx.load_all();

    view! {
        <div class="app-layout">
            <LayoutSwitcher />
        </div>
    }
}

//! Taskpad Frontend App
//!
//! Provides the shared contexts and renders the page for the current route.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::{AuthContext, LocalStorageTokens};
use crate::components::Header;
use crate::config::ApiConfig;
use crate::pages::{LoginPage, NewTaskPage, TasksPage};
use crate::routes::{guard, Route, Router};
use crate::store::TaskListState;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    tracing::info!(api = config.base_url(), "using backend");

    let auth = AuthContext::new(config, Arc::new(LocalStorageTokens::default()));
    let router = Router::from_location();
    let store = Store::new(TaskListState::new());

    // Provide context to all children
    provide_context(auth.clone());
    provide_context(router);
    provide_context(store);

    // Route guard: protected pages need a stored token
    let route = Memo::new(move |_| guard(router.requested(), auth.is_authenticated()));
    Effect::new(move |_| router.sync_location(route.get()));

    view! {
        <Header />
        <main class="app-main">
            {move || match route.get() {
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Tasks => view! { <TasksPage /> }.into_any(),
                Route::NewTask => view! { <NewTaskPage /> }.into_any(),
            }}
        </main>
    }
}

//! Header Component
//!
//! Top bar with the sign-out button, hidden on the login page.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::routes::{use_router, Route};
use crate::store::{store_reset, TaskStore};

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let store = use_context::<TaskStore>();

    let sign_out = {
        let auth = auth.clone();
        Callback::new(move |_: ()| {
            auth.logout();
            if let Some(store) = store {
                store_reset(&store);
            }
            router.navigate(Route::Login);
        })
    };

    view! {
        <Show when=move || auth.is_authenticated()>
            <header class="header">
                <div class="header-content">
                    <button class="logout-button" on:click=move |_| sign_out.run(())>
                        "Sign Out"
                    </button>
                </div>
            </header>
        </Show>
    }
}

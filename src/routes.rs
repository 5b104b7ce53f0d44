//! Routes
//!
//! Hash-based navigation between the app's pages, plus the auth guard.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// App pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Tasks,
    NewTask,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Tasks => "/tasks",
            Route::NewTask => "/tasks/new",
        }
    }

    /// `/` and unknown paths land on the task list
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_start_matches('#');
        let path = path.trim_end_matches('/');
        match path {
            "/login" => Route::Login,
            "/tasks/new" => Route::NewTask,
            _ => Route::Tasks,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Where a navigation to `requested` actually ends up
pub fn guard(requested: Route, authenticated: bool) -> Route {
    match (requested.requires_auth(), authenticated) {
        (true, false) => Route::Login,
        (false, true) => Route::Tasks,
        _ => requested,
    }
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

fn set_hash(route: Route) {
    if let Some(win) = web_sys::window() {
        let target = format!("#{}", route.path());
        if current_hash() != target {
            let _ = win.location().set_hash(route.path());
        }
    }
}

/// Router state provided via context
#[derive(Clone, Copy)]
pub struct Router {
    requested: RwSignal<Route>,
}

impl Router {
    /// Router starting from the current `location.hash`, following `hashchange`
    pub fn from_location() -> Self {
        let router = Self {
            requested: RwSignal::new(Route::from_path(&current_hash())),
        };
        router.bind_hashchange();
        router
    }

    /// Requested route (tracked), before the auth guard
    pub fn requested(&self) -> Route {
        self.requested.get()
    }

    pub fn navigate(&self, route: Route) {
        tracing::debug!(path = route.path(), "navigate");
        self.requested.try_set(route);
        set_hash(route);
    }

    /// Reflect a guard redirect in the address bar
    pub fn sync_location(&self, resolved: Route) {
        if resolved != self.requested.get_untracked() {
            self.requested.try_set(resolved);
        }
        set_hash(resolved);
    }

    fn bind_hashchange(&self) {
        use wasm_bindgen::closure::Closure;

        let requested = self.requested;
        let on_hashchange = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            let route = Route::from_path(&current_hash());
            if requested.try_get_untracked() != Some(route) {
                requested.try_set(route);
            }
        });

        if let Some(win) = web_sys::window() {
            let _ = win.add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
        }
        on_hashchange.forget();
    }
}

/// Get the router from context
pub fn use_router() -> Router {
    expect_context::<Router>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_mapping() {
        assert_eq!(Route::from_path("#/login"), Route::Login);
        assert_eq!(Route::from_path("/tasks/new/"), Route::NewTask);
        assert_eq!(Route::from_path("#/tasks"), Route::Tasks);
        assert_eq!(Route::from_path(""), Route::Tasks);
        assert_eq!(Route::from_path("/"), Route::Tasks);
        assert_eq!(Route::from_path("/nowhere"), Route::Tasks);

        for route in [Route::Login, Route::Tasks, Route::NewTask] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_guard_redirects_unauthenticated() {
        assert_eq!(guard(Route::Tasks, false), Route::Login);
        assert_eq!(guard(Route::NewTask, false), Route::Login);
        assert_eq!(guard(Route::Login, false), Route::Login);
    }

    #[test]
    fn test_guard_authenticated() {
        assert_eq!(guard(Route::Tasks, true), Route::Tasks);
        assert_eq!(guard(Route::NewTask, true), Route::NewTask);
        assert_eq!(guard(Route::Login, true), Route::Tasks);
    }
}

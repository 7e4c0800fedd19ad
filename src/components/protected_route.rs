//! Role-scoped route gate

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::guard::{self, RouteAccess};
use crate::state::AppState;
use crate::types::Role;

/// Gate a subtree behind authentication and a role allow-list.
///
/// The decision is re-evaluated reactively on every navigation and auth
/// change; denied access turns into a replace-navigation, so protected
/// content is never rendered for the wrong role.
#[component]
pub fn ProtectedRoute(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        {move || match guard::check(state.is_authenticated(), state.role(), allowed) {
            RouteAccess::Grant => children().into_any(),
            RouteAccess::RedirectToLogin => view! { <Redirect path="/login" /> }.into_any(),
            RouteAccess::RedirectTo(path) => view! { <Redirect path=path /> }.into_any(),
        }}
    }
}

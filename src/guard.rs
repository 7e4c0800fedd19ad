//! Route access decisions.
//!
//! Pure function of the auth state; re-evaluated on every navigation and
//! never cached. The rendering side lives in `components::protected_route`.

use crate::types::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// Render the protected subtree
    Grant,
    /// Not logged in: go to the login page
    RedirectToLogin,
    /// Logged in with the wrong role: go to that role's own dashboard
    RedirectTo(String),
}

pub fn check(is_authenticated: bool, role: Option<Role>, allowed: &[Role]) -> RouteAccess {
    if !is_authenticated {
        return RouteAccess::RedirectToLogin;
    }
    match role {
        // authenticated without a user record violates the session
        // invariant; treat it as logged out
        None => RouteAccess::RedirectToLogin,
        Some(role) if allowed.contains(&role) => RouteAccess::Grant,
        Some(role) => RouteAccess::RedirectTo(role.dashboard_path()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_goes_to_login() {
        assert_eq!(
            check(false, None, &[Role::Member]),
            RouteAccess::RedirectToLogin
        );
        // a stale role without a token must not grant access
        assert_eq!(
            check(false, Some(Role::Admin), &[Role::Admin]),
            RouteAccess::RedirectToLogin
        );
    }

    #[test]
    fn allowed_role_is_granted() {
        assert_eq!(
            check(true, Some(Role::Member), &[Role::Member]),
            RouteAccess::Grant
        );
        assert_eq!(
            check(true, Some(Role::Admin), &[Role::Member, Role::Admin]),
            RouteAccess::Grant
        );
    }

    #[test]
    fn wrong_role_is_sent_to_its_own_dashboard() {
        assert_eq!(
            check(true, Some(Role::Trainer), &[Role::Member]),
            RouteAccess::RedirectTo("/dashboard/trainer".into())
        );
        assert_eq!(
            check(true, Some(Role::Staff), &[Role::Admin]),
            RouteAccess::RedirectTo("/dashboard/staff".into())
        );
    }

    #[test]
    fn missing_user_record_is_treated_as_logged_out() {
        assert_eq!(
            check(true, None, &[Role::Member]),
            RouteAccess::RedirectToLogin
        );
    }
}

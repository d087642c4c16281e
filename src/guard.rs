/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Route access rules, checked before a protected view is rendered or a
//! role-gated command runs. Role checks are exact; an admin session does
//! not satisfy an employer-only route.

use crate::session::{Role, SessionCredential, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Login and registration forms; an active session is sent away.
    GuestOnly,
    Role(Role),
    AnyRole(&'static [Role]),
}

#[derive(Debug)]
pub struct Route {
    pub path: &'static str,
    pub access: RouteAccess,
    /// Where an unauthenticated visitor is sent to sign in.
    pub login: &'static str,
    /// Rendered in place of the view on a role mismatch, instead of
    /// redirecting, when set.
    pub fallback: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Render,
    RedirectToLogin {
        login: &'static str,
        return_to: &'static str,
    },
    RedirectUnauthorized {
        from: &'static str,
        required: String,
    },
    ShowFallback(&'static str),
    RedirectAway {
        to: &'static str,
    },
}

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Employer, Role::JobSeeker];

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        access: RouteAccess::Public,
        login: "/login",
        fallback: None,
    },
    Route {
        path: "/jobs",
        access: RouteAccess::Public,
        login: "/login",
        fallback: None,
    },
    Route {
        path: "/jobs/:id",
        access: RouteAccess::Public,
        login: "/login",
        fallback: None,
    },
    Route {
        path: "/categories",
        access: RouteAccess::Public,
        login: "/login",
        fallback: None,
    },
    Route {
        path: "/category/:slug",
        access: RouteAccess::Public,
        login: "/login",
        fallback: None,
    },
    Route {
        path: "/create-cv",
        access: RouteAccess::Public,
        login: "/login",
        fallback: None,
    },
    Route {
        path: "/login",
        access: RouteAccess::GuestOnly,
        login: "/login",
        fallback: None,
    },
    Route {
        path: "/register",
        access: RouteAccess::GuestOnly,
        login: "/login",
        fallback: None,
    },
    Route {
        path: "/employer-login",
        access: RouteAccess::GuestOnly,
        login: "/employer-login",
        fallback: None,
    },
    Route {
        path: "/employer-register",
        access: RouteAccess::GuestOnly,
        login: "/employer-login",
        fallback: None,
    },
    Route {
        path: "/admin-login",
        access: RouteAccess::GuestOnly,
        login: "/admin-login",
        fallback: None,
    },
    Route {
        path: "/profile",
        access: RouteAccess::AnyRole(ALL_ROLES),
        login: "/login",
        fallback: None,
    },
    Route {
        path: "/profile/saved-jobs",
        access: RouteAccess::Role(Role::JobSeeker),
        login: "/login",
        fallback: None,
    },
    Route {
        path: "/profile/applications",
        access: RouteAccess::Role(Role::JobSeeker),
        login: "/login",
        fallback: None,
    },
    Route {
        path: "/employer-dashboard",
        access: RouteAccess::Role(Role::Employer),
        login: "/employer-login",
        fallback: None,
    },
    Route {
        path: "/employer/jobs/create",
        access: RouteAccess::Role(Role::Employer),
        login: "/employer-login",
        fallback: None,
    },
    Route {
        path: "/employer/applications",
        access: RouteAccess::Role(Role::Employer),
        login: "/employer-login",
        fallback: None,
    },
    Route {
        path: "/admin-dashboard",
        access: RouteAccess::Role(Role::Admin),
        login: "/admin-login",
        fallback: None,
    },
    Route {
        path: "/admin/users",
        access: RouteAccess::Role(Role::Admin),
        login: "/admin-login",
        fallback: None,
    },
    Route {
        path: "/admin/applications",
        access: RouteAccess::Role(Role::Admin),
        login: "/admin-login",
        fallback: None,
    },
];

pub fn find(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

fn describe(access: &RouteAccess) -> String {
    match access {
        RouteAccess::Role(role) => role.as_wire().to_string(),
        RouteAccess::AnyRole(roles) => roles
            .iter()
            .map(|role| role.as_wire())
            .collect::<Vec<_>>()
            .join(", "),
        RouteAccess::Public | RouteAccess::GuestOnly => String::new(),
    }
}

/// Decides what happens when a session (or none) hits a route. Pure; the
/// caller supplies the freshly-read credential.
pub fn evaluate(route: &Route, session: Option<&SessionCredential>) -> Outcome {
    match route.access {
        RouteAccess::Public => Outcome::Render,
        RouteAccess::GuestOnly => match session {
            Some(_) => Outcome::RedirectAway { to: "/" },
            None => Outcome::Render,
        },
        RouteAccess::Role(required) => match session {
            None => Outcome::RedirectToLogin {
                login: route.login,
                return_to: route.path,
            },
            Some(credential) if credential.role == required => Outcome::Render,
            Some(_) => mismatch(route),
        },
        RouteAccess::AnyRole(allowed) => match session {
            None => Outcome::RedirectToLogin {
                login: route.login,
                return_to: route.path,
            },
            Some(credential) if allowed.contains(&credential.role) => Outcome::Render,
            Some(_) => mismatch(route),
        },
    }
}

fn mismatch(route: &Route) -> Outcome {
    match route.fallback {
        Some(view) => Outcome::ShowFallback(view),
        None => Outcome::RedirectUnauthorized {
            from: route.path,
            required: describe(&route.access),
        },
    }
}

/// Store-backed variant: reads the session fresh on every check rather
/// than trusting anything cached by the caller.
pub fn check(route: &Route, store: &SessionStore) -> Outcome {
    evaluate(route, store.get().as_ref())
}

/*
 * spdx-filecopyrighttext: 2025 vieclam team <dev@vieclam.io>
 *
 * spdx-license-identifier: agpl-3.0-only
 */

pub mod account;
pub mod admin;
pub mod application;
pub mod base;
pub mod cv;
pub mod employer;
pub mod job;

use crate::config::{ConfigKey, load_config, set_get_value};
use crate::guard::{self, Outcome};
use crate::input::{ask_for_input, get_request_config};
use crate::session::SessionStore;
use crate::views;
use connector::{ApiError, RequestConfig};
use std::process::exit;

fn login_hint(login: &str) -> &'static str {
    match login {
        "/admin-login" => "vieclam admin login",
        "/employer-login" => "vieclam employer login",
        _ => "vieclam login",
    }
}

/// Runs the route guard for a command's backing route and exits with the
/// redirect outcome when access is denied.
pub fn gate(path: &str, store: &SessionStore) {
    let Some(route) = guard::find(path) else {
        eprintln!("Unknown route: {}", path);
        exit(1);
    };

    match guard::check(route, store) {
        Outcome::Render => {}
        Outcome::RedirectToLogin { login, return_to } => {
            eprintln!(
                "Chưa đăng nhập. Dùng `{} --return-to {}` để đăng nhập và quay lại.",
                login_hint(login),
                return_to
            );
            exit(1);
        }
        Outcome::RedirectUnauthorized { from, required } => {
            eprint!("{}", views::render_unauthorized(from, &required));
            exit(1);
        }
        Outcome::ShowFallback(view) => {
            eprintln!("{}", view);
            exit(1);
        }
        Outcome::RedirectAway { to } => {
            eprintln!(
                "Đã đăng nhập rồi (quay về {}). Dùng `vieclam logout` để đổi tài khoản.",
                to
            );
            exit(1);
        }
    }
}

/// Login and register prompt for the server URL on first use instead of
/// failing on the missing key.
pub fn ensure_server_url() {
    let server_url = set_get_value(ConfigKey::Server, None, true);

    if server_url.is_none() {
        set_get_value(ConfigKey::Server, Some(ask_for_input("Server URL")), true);
    }
}

pub fn require_config() -> RequestConfig {
    get_request_config(load_config()).unwrap_or_else(|e| {
        eprintln!("{}", e);
        exit(1)
    })
}

/// Prints an API error and exits. An authentication failure also drops
/// the stored session, the token is no longer worth keeping.
pub fn api_fail(store: &SessionStore, err: ApiError) -> ! {
    eprintln!("{}", err);

    if err.is_authentication() {
        store.clear();
        eprintln!("Phiên đăng nhập đã hết hạn. Vui lòng đăng nhập lại.");
    }

    exit(1)
}

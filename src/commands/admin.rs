/*
 * SPDX-FileCopyrightText: 2026 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{api_fail, ensure_server_url, gate, require_config};
use crate::consts;
use crate::fetch::ListState;
use crate::input::*;
use crate::session::{Role, SessionCredential, SessionStore};
use crate::validators;
use crate::views::{self, ViewSupervisor};
use clap::{Subcommand, arg};
use connector::*;
use std::process::exit;
use std::str::FromStr;

#[derive(Subcommand, Debug)]
pub enum Commands {
    Login {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(long)]
        return_to: Option<String>,
    },
    User {
        #[command(subcommand)]
        cmd: UserCommands,
    },
    Application {
        #[command(subcommand)]
        cmd: ApplicationCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    List {
        #[arg(short, long, default_value_t = 1)]
        page: i64,
        #[arg(short, long)]
        limit: Option<i64>,
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long)]
        role: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ApplicationCommands {
    List {
        #[arg(short, long, default_value_t = 1)]
        page: i64,
        #[arg(short, long)]
        limit: Option<i64>,
        #[arg(short, long)]
        status: Option<String>,
        #[arg(short = 'q', long)]
        search: Option<String>,
    },
    SetStatus {
        id: i64,
        status: String,
    },
    Delete {
        id: i64,
    },
}

async fn show_users(store: &SessionStore) {
    let mut state = ListState::new(1, consts::USERS_PER_PAGE);

    match admin::get_users(require_config(), 1, consts::USERS_PER_PAGE, None, None).await {
        Ok(res) => state.apply(Ok(res)),
        Err(e) if e.is_authentication() => api_fail(store, e),
        Err(e) => state.apply(Err(e)),
    }

    print!("{}", views::render_users(&state));
}

async fn show_applications(store: &SessionStore) {
    let mut state = ListState::new(1, consts::APPLICATIONS_PER_PAGE);

    match admin::get_applications(
        require_config(),
        1,
        consts::APPLICATIONS_PER_PAGE,
        None,
        None,
    )
    .await
    {
        Ok(res) => state.apply(Ok(res)),
        Err(e) if e.is_authentication() => api_fail(store, e),
        Err(e) => state.apply(Err(e)),
    }

    let mut supervisor = ViewSupervisor::new();
    print!(
        "{}",
        supervisor.mount(|| views::render_admin_applications(&state))
    );
}

pub async fn handle(cmd: Commands) {
    let store = SessionStore::open();

    match cmd {
        Commands::Login { email, return_to } => {
            gate("/admin-login", &store);
            ensure_server_url();

            let email = match email {
                Some(email) => email,
                None => ask_for_input("Email"),
            };
            let password = ask_for_password();

            if let Err(errors) = validators::validate_login(&email, &password) {
                eprintln!("{}", errors);
                exit(1);
            }

            let res = admin::post_login(require_config(), email, password)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            if !res.success {
                eprintln!(
                    "Đăng nhập thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            let role = Role::from_wire(&res.user.role);
            store.set(SessionCredential {
                token: res.token,
                role,
                user: res.user,
            });

            println!("{}", consts::LOGIN_SUCCESS_MESSAGE);

            if let Some(return_to) = return_to {
                println!("Tiếp tục tại {}", return_to);
            }
        }

        Commands::User { cmd } => {
            match cmd {
                UserCommands::List {
                    page,
                    limit,
                    search,
                    role,
                } => {
                    gate("/admin/users", &store);

                    if role.is_some()
                        && role.as_ref().unwrap() != "user"
                        && role.as_ref().unwrap() != "employer"
                        && role.as_ref().unwrap() != "admin"
                    {
                        eprintln!("Role must be either 'user', 'employer' or 'admin'.");
                        exit(1);
                    }

                    let limit = limit.unwrap_or(consts::USERS_PER_PAGE);
                    let mut state = ListState::new(page, limit);

                    match admin::get_users(require_config(), page, limit, search, role).await {
                        Ok(res) => state.apply(Ok(res)),
                        Err(e) if e.is_authentication() => api_fail(&store, e),
                        Err(e) => state.apply(Err(e)),
                    }

                    print!("{}", views::render_users(&state));

                    if state.error.is_some() {
                        exit(1);
                    }
                }

                UserCommands::Delete { id } => {
                    gate("/admin/users", &store);

                    let res = match admin::delete_user(require_config(), id).await {
                        Ok(res) => res,
                        Err(e) => api_fail(&store, e),
                    };

                    if !res.success {
                        eprintln!(
                            "Xóa người dùng thất bại: {}",
                            res.message
                                .as_deref()
                                .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                        );
                        exit(1);
                    }

                    println!("{}", consts::DELETE_SUCCESS_MESSAGE);
                    show_users(&store).await;
                }
            }
        }

        Commands::Application { cmd } => {
            match cmd {
                ApplicationCommands::List {
                    page,
                    limit,
                    status,
                    search,
                } => {
                    gate("/admin/applications", &store);

                    let status = match status {
                        Some(raw) => match applications::ApplicationStatus::from_str(&raw) {
                            Ok(status) => Some(status),
                            Err(message) => {
                                eprintln!("{}", message);
                                exit(1);
                            }
                        },
                        None => None,
                    };

                    let limit = limit.unwrap_or(consts::APPLICATIONS_PER_PAGE);
                    let mut state = ListState::new(page, limit);

                    match admin::get_applications(require_config(), page, limit, status, search)
                        .await
                    {
                        Ok(res) => state.apply(Ok(res)),
                        Err(e) if e.is_authentication() => api_fail(&store, e),
                        Err(e) => state.apply(Err(e)),
                    }

                    let mut supervisor = ViewSupervisor::new();
                    print!(
                        "{}",
                        supervisor.mount(|| views::render_admin_applications(&state))
                    );

                    if state.error.is_some() || supervisor.last_failure().is_some() {
                        exit(1);
                    }
                }

                ApplicationCommands::SetStatus { id, status } => {
                    gate("/admin/applications", &store);

                    let status = match applications::ApplicationStatus::from_str(&status) {
                        Ok(status) => status,
                        Err(message) => {
                            eprintln!("{}", message);
                            exit(1);
                        }
                    };

                    let res =
                        match admin::put_application_status(require_config(), id, status).await {
                            Ok(res) => res,
                            Err(e) => api_fail(&store, e),
                        };

                    if !res.success {
                        eprintln!(
                            "Cập nhật trạng thái thất bại: {}",
                            res.message
                                .as_deref()
                                .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                        );
                        exit(1);
                    }

                    println!("{}", consts::UPDATE_SUCCESS_MESSAGE);
                    show_applications(&store).await;
                }

                ApplicationCommands::Delete { id } => {
                    gate("/admin/applications", &store);

                    let res = match admin::delete_application(require_config(), id).await {
                        Ok(res) => res,
                        Err(e) => api_fail(&store, e),
                    };

                    if !res.success {
                        eprintln!(
                            "Xóa đơn thất bại: {}",
                            res.message
                                .as_deref()
                                .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                        );
                        exit(1);
                    }

                    println!("{}", consts::DELETE_SUCCESS_MESSAGE);
                    show_applications(&store).await;
                }
            }
        }
    }
}

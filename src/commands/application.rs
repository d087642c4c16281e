/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{api_fail, gate, require_config};
use crate::consts;
use crate::fetch::ListState;
use crate::session::SessionStore;
use crate::views::{self, ViewSupervisor};
use clap::{Subcommand, arg};
use connector::*;
use std::process::exit;
use std::str::FromStr;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        #[arg(short, long, default_value_t = 1)]
        page: i64,
        #[arg(short, long)]
        limit: Option<i64>,
        #[arg(short, long)]
        status: Option<String>,
    },
    Withdraw {
        id: i64,
    },
}

pub async fn handle(cmd: Commands) {
    let store = SessionStore::open();

    match cmd {
        Commands::List {
            page,
            limit,
            status,
        } => {
            gate("/profile/applications", &store);

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

            match applications::get_my(require_config(), page, limit, status).await {
                Ok(res) => state.apply(Ok(res)),
                Err(e) if e.is_authentication() => api_fail(&store, e),
                Err(e) => state.apply(Err(e)),
            }

            let mut supervisor = ViewSupervisor::new();
            let output = supervisor.mount(|| views::render_applications(&state));
            print!("{}", output);

            if state.error.is_some() || supervisor.last_failure().is_some() {
                exit(1);
            }
        }

        Commands::Withdraw { id } => {
            gate("/profile/applications", &store);

            let res = match applications::delete_withdraw(require_config(), id).await {
                Ok(res) => res,
                Err(e) => api_fail(&store, e),
            };

            if !res.success {
                eprintln!(
                    "Rút đơn thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            println!("Đã rút đơn ứng tuyển.");

            // The list is re-fetched rather than patched locally, the
            // server may have moved rows between pages.
            let limit = consts::APPLICATIONS_PER_PAGE;
            let mut state = ListState::new(1, limit);
            state.apply(applications::get_my(require_config(), 1, limit, None).await);

            let mut supervisor = ViewSupervisor::new();
            print!("{}", supervisor.mount(|| views::render_applications(&state)));
        }
    }
}

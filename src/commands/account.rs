/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{api_fail, gate, require_config};
use crate::consts;
use crate::input::*;
use crate::session::{SessionCredential, SessionStore};
use crate::validators;
use clap::{Subcommand, arg};
use connector::*;
use std::process::exit;

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    Edit {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PasswordCommands {
    Change,
    Forgot {
        #[arg(short, long)]
        email: Option<String>,
    },
    Reset {
        token: String,
    },
}

pub async fn handle_profile(cmd: ProfileCommands) {
    let store = SessionStore::open();

    match cmd {
        ProfileCommands::Edit { name, email, phone } => {
            gate("/profile", &store);

            let credential = match store.get() {
                Some(credential) => credential,
                None => {
                    eprintln!("Chưa đăng nhập.");
                    exit(1);
                }
            };

            let input_fields = [
                (
                    "Name",
                    Some(name.unwrap_or(credential.user.name.clone().unwrap_or_default())),
                ),
                (
                    "Email",
                    Some(email.unwrap_or(credential.user.email.clone())),
                ),
                (
                    "Phone",
                    Some(phone.unwrap_or(credential.user.phone.clone().unwrap_or_default())),
                ),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

            let input = handle_input(input_fields, false);

            let name = input.get("Name").unwrap().clone();
            let email = input.get("Email").unwrap().clone();
            let phone = input.get("Phone").unwrap().clone();

            if let Err(errors) = validators::validate_profile_update(&name, &email, &phone) {
                eprintln!("{}", errors);
                exit(1);
            }

            let res = match auth::put_profile(
                require_config(),
                Some(name),
                Some(email),
                (!phone.is_empty()).then_some(phone),
            )
            .await
            {
                Ok(res) => res,
                Err(e) => api_fail(&store, e),
            };

            if !res.success {
                eprintln!(
                    "Cập nhật thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            store.set(SessionCredential {
                user: res.user,
                ..credential
            });

            println!("{}", consts::UPDATE_SUCCESS_MESSAGE);
        }
    }
}

pub async fn handle_password(cmd: PasswordCommands) {
    let store = SessionStore::open();

    match cmd {
        PasswordCommands::Change => {
            gate("/profile", &store);

            let current_password = ask_for_password_with_prompt("Mật khẩu hiện tại");
            let new_password = ask_for_password_with_prompt("Mật khẩu mới");
            let confirm_password = ask_for_password_with_prompt("Xác nhận mật khẩu mới");

            if let Err(errors) = validators::validate_change_password(
                &current_password,
                &new_password,
                &confirm_password,
            ) {
                eprintln!("{}", errors);
                exit(1);
            }

            let res = match auth::post_change_password(
                require_config(),
                current_password,
                new_password,
            )
            .await
            {
                Ok(res) => res,
                Err(e) => api_fail(&store, e),
            };

            if !res.success {
                eprintln!(
                    "Đổi mật khẩu thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            println!("Đổi mật khẩu thành công!");
        }

        PasswordCommands::Forgot { email } => {
            let email = match email {
                Some(email) => email,
                None => ask_for_input("Email"),
            };

            if let Err(message) = validators::validate_email(&email) {
                eprintln!("{}", message);
                exit(1);
            }

            let res = auth::post_forgot_password(require_config(), email)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            if !res.success {
                eprintln!(
                    "Yêu cầu thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            println!(
                "{}",
                res.message
                    .as_deref()
                    .unwrap_or("Đã gửi hướng dẫn đặt lại mật khẩu qua email.")
            );
        }

        PasswordCommands::Reset { token } => {
            let new_password = ask_for_password_with_prompt("Mật khẩu mới");
            let confirm_password = ask_for_password_with_prompt("Xác nhận mật khẩu mới");

            if let Err(message) = validators::validate_password(&new_password) {
                eprintln!("{}", message);
                exit(1);
            }

            if let Err(message) =
                validators::validate_confirm_password(&new_password, &confirm_password)
            {
                eprintln!("{}", message);
                exit(1);
            }

            let res = auth::post_reset_password(require_config(), token, new_password)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            if !res.success {
                eprintln!(
                    "Đặt lại mật khẩu thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            println!("Đặt lại mật khẩu thành công! Vui lòng đăng nhập lại.");
        }
    }
}

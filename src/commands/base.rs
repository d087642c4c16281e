/*
 * spdx-filecopyrighttext: 2025 vieclam team <dev@vieclam.io>
 *
 * spdx-license-identifier: agpl-3.0-only
 */

use super::*;
use crate::config::*;
use crate::consts;
use crate::input::*;
use crate::session::{Role, SessionCredential, SessionStore};
use crate::validators;
use crate::views;
use clap::{CommandFactory, Parser, Subcommand, arg};
use clap_complete::{Shell, generate};
use connector::*;
use std::io;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(name = "ViecLam", display_name = "ViecLam", bin_name = "vieclam", author = "ViecLam Team", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<MainCommands>,
    #[arg(long, value_enum)]
    generate_completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
enum MainCommands {
    Config {
        key: String,
        value: Option<String>,
    },
    Status,
    Register {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
    },
    Login {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(long)]
        return_to: Option<String>,
    },
    Logout,
    Info,
    Profile {
        #[command(subcommand)]
        cmd: account::ProfileCommands,
    },
    Password {
        #[command(subcommand)]
        cmd: account::PasswordCommands,
    },
    Job {
        #[command(subcommand)]
        cmd: job::Commands,
    },
    Application {
        #[command(subcommand)]
        cmd: application::Commands,
    },
    Employer {
        #[command(subcommand)]
        cmd: employer::Commands,
    },
    Admin {
        #[command(subcommand)]
        cmd: admin::Commands,
    },
    Cv {
        #[command(subcommand)]
        cmd: cv::Commands,
    },
}

pub async fn run_cli() -> std::io::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.generate_completions {
        let mut app = Cli::command();
        let bin_name = app.get_name().to_string();
        generate(shell, &mut app, bin_name, &mut io::stdout());
        return Ok(());
    }

    if let Some(cmd) = cli.cmd {
        match cmd {
            MainCommands::Config { key, value } => {
                set_get_value_from_string(key, value, false)
                    .map_err(|_| {
                        exit(1);
                    })
                    .unwrap();
            }

            MainCommands::Status => {
                let server_url = set_get_value(ConfigKey::Server, None, true);

                if server_url.is_none() {
                    eprintln!(
                        "Server URL is not set. Use `vieclam config server <url>` to set it."
                    );
                    exit(1);
                }

                health(require_config())
                    .await
                    .map_err(|e| {
                        eprintln!("{}", e);
                        exit(1);
                    })
                    .unwrap();

                println!("Server online.");

                let store = SessionStore::open();
                match store.get() {
                    Some(credential) => println!(
                        "Đã đăng nhập: {} ({})",
                        credential.user.email, credential.role
                    ),
                    None => println!("Not logged in. Use `vieclam login` to log in."),
                }
            }

            MainCommands::Register {
                name,
                username,
                email,
                phone,
            } => {
                let store = SessionStore::open();
                gate("/register", &store);
                ensure_server_url();

                let input_fields = [
                    ("Name", name),
                    ("Username", username),
                    ("Email", email),
                    ("Phone", phone),
                ]
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect();

                let input = handle_input(input_fields, true);
                let password = ask_for_password();
                let confirm_password = ask_for_password_with_prompt("Xác nhận mật khẩu");

                let name = input.get("Name").unwrap().clone();
                let username = input.get("Username").unwrap().clone();
                let email = input.get("Email").unwrap().clone();
                let phone = input.get("Phone").unwrap().clone();

                if let Err(errors) = validators::validate_registration(
                    &name,
                    &email,
                    &password,
                    &confirm_password,
                    &phone,
                ) {
                    eprintln!("{}", errors);
                    exit(1);
                }

                let res = auth::post_register(
                    require_config(),
                    name,
                    (!username.is_empty()).then_some(username),
                    email,
                    password,
                    (!phone.is_empty()).then_some(phone),
                )
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

                if !res.success {
                    eprintln!(
                        "Đăng ký thất bại: {}",
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

                println!("{}", consts::REGISTER_SUCCESS_MESSAGE);
            }

            MainCommands::Login { email, return_to } => {
                let store = SessionStore::open();
                gate("/login", &store);
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

                let res = auth::post_login(require_config(), email, password)
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

            MainCommands::Logout => {
                let store = SessionStore::open();

                if store.get().is_some() {
                    // Server notification is best effort; the local
                    // session goes away regardless.
                    let _ = auth::post_logout(require_config()).await;
                }

                store.clear();
                println!("Logged out.");
            }

            MainCommands::Info => {
                let store = SessionStore::open();
                gate("/profile", &store);

                match auth::get_verify(require_config()).await {
                    Ok(res) => {
                        if let Some(credential) = store.get() {
                            store.set(SessionCredential {
                                user: res.user.clone(),
                                ..credential
                            });
                        }

                        print!("{}", views::render_profile(&res.user));
                    }
                    // Verify rejections fall back to the cached profile
                    // instead of ending the session; the cache is cleared
                    // only when there is nothing to fall back to.
                    Err(e) => match store.get() {
                        Some(credential) => {
                            eprintln!("{}", e);
                            println!("Hiển thị hồ sơ đã lưu:");
                            print!("{}", views::render_profile(&credential.user));
                        }
                        None => {
                            store.clear();
                            eprintln!("{}", e);
                            exit(1);
                        }
                    },
                }
            }

            MainCommands::Profile { cmd } => account::handle_profile(cmd).await,
            MainCommands::Password { cmd } => account::handle_password(cmd).await,
            MainCommands::Job { cmd } => job::handle(cmd).await,
            MainCommands::Application { cmd } => application::handle(cmd).await,
            MainCommands::Employer { cmd } => employer::handle(cmd).await,
            MainCommands::Admin { cmd } => admin::handle(cmd).await,
            MainCommands::Cv { cmd } => cv::handle(cmd).await,
        }
    } else {
        eprintln!("No subcommand provided");
        exit(1);
    }

    exit(0);
}

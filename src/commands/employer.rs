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
use connector::employer::MakeJobRequest;
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
    Register {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        company_name: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
        #[arg(short, long)]
        address: Option<String>,
        #[arg(short, long)]
        tax_code: Option<String>,
        #[arg(short, long)]
        website: Option<String>,
        #[arg(short = 'd', long)]
        description: Option<String>,
    },
    Job {
        #[command(subcommand)]
        cmd: JobCommands,
    },
    Application {
        #[command(subcommand)]
        cmd: ApplicationCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum JobCommands {
    List {
        #[arg(short, long, default_value_t = 1)]
        page: i64,
        #[arg(short, long)]
        limit: Option<i64>,
        #[arg(short, long)]
        status: Option<String>,
    },
    Create {
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
    },
    Edit {
        id: i64,
    },
    Delete {
        id: i64,
    },
    Close {
        id: i64,
    },
    Reopen {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ApplicationCommands {
    List {
        #[arg(short, long)]
        job: Option<i64>,
        #[arg(short, long, default_value_t = 1)]
        page: i64,
        #[arg(short, long)]
        limit: Option<i64>,
    },
    SetStatus {
        id: i64,
        status: String,
        #[arg(short, long)]
        job: i64,
    },
}

fn parse_salary_field(label: &str, raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("{} phải là một số.", label);
            exit(1);
        }
    }
}

/// Shared by create and edit: turns the submitted form into the request
/// body, validating before anything leaves the machine.
fn job_request_from_input(input: &std::collections::HashMap<String, String>) -> MakeJobRequest {
    let title = input.get("Title").unwrap().clone();
    let description = input.get("Description").unwrap().clone();
    let category = input.get("Category").unwrap().clone();
    let location = input.get("Location").unwrap().clone();
    let min_salary = parse_salary_field("Lương tối thiểu", input.get("Min Salary").unwrap());
    let max_salary = parse_salary_field("Lương tối đa", input.get("Max Salary").unwrap());
    let job_type = input.get("Job Type").unwrap().clone();
    let experience = input.get("Experience").unwrap().clone();
    let requirements = input.get("Requirements").unwrap().clone();
    let benefits = input.get("Benefits").unwrap().clone();
    let deadline = input.get("Deadline").unwrap().clone();

    if let Err(errors) = validators::validate_job_posting(
        &title,
        &description,
        &category,
        &location,
        min_salary,
        max_salary,
        &requirements,
        &benefits,
    ) {
        eprintln!("{}", errors);
        exit(1);
    }

    MakeJobRequest {
        title,
        description,
        category: Some(category),
        location: Some(location),
        salary: None,
        min_salary,
        max_salary,
        job_type: (!job_type.is_empty()).then_some(job_type),
        experience: (!experience.is_empty()).then_some(experience),
        requirements: (!requirements.is_empty()).then_some(requirements),
        benefits: (!benefits.is_empty()).then_some(benefits),
        deadline: (!deadline.is_empty()).then_some(deadline),
    }
}

pub async fn handle(cmd: Commands) {
    let store = SessionStore::open();

    match cmd {
        Commands::Login { email, return_to } => {
            gate("/employer-login", &store);
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

            let res = employer::post_login(require_config(), email, password)
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

        Commands::Register {
            email,
            company_name,
            phone,
            address,
            tax_code,
            website,
            description,
        } => {
            gate("/employer-register", &store);
            ensure_server_url();

            let input_fields = [
                ("Email", email),
                ("Company Name", company_name),
                ("Phone", phone),
                ("Address", address),
                ("Tax Code", tax_code),
                ("Website", website),
                ("Description", description),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

            let input = handle_input(input_fields, true);
            let password = ask_for_password();
            let confirm_password = ask_for_password_with_prompt("Xác nhận mật khẩu");

            let email = input.get("Email").unwrap().clone();
            let company_name = input.get("Company Name").unwrap().clone();
            let phone = input.get("Phone").unwrap().clone();
            let address = input.get("Address").unwrap().clone();
            let tax_code = input.get("Tax Code").unwrap().clone();
            let website = input.get("Website").unwrap().clone();
            let description = input.get("Description").unwrap().clone();

            if let Err(errors) = validators::validate_employer_registration(
                &email,
                &company_name,
                &phone,
                &password,
                &confirm_password,
                &address,
                &tax_code,
                &website,
                &description,
            ) {
                eprintln!("{}", errors);
                exit(1);
            }

            let res = employer::post_register(
                require_config(),
                email,
                password,
                company_name,
                phone,
                address,
                tax_code,
                (!website.is_empty()).then_some(website),
                (!description.is_empty()).then_some(description),
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

        Commands::Job { cmd } => handle_job(cmd, &store).await,
        Commands::Application { cmd } => handle_application(cmd, &store).await,
    }
}

async fn handle_job(cmd: JobCommands, store: &SessionStore) {
    match cmd {
        JobCommands::List {
            page,
            limit,
            status,
        } => {
            gate("/employer-dashboard", store);

            let status = match status {
                Some(raw) => match jobs::JobStatus::from_str(&raw) {
                    Ok(status) => Some(status),
                    Err(message) => {
                        eprintln!("{}", message);
                        exit(1);
                    }
                },
                None => None,
            };

            let limit = limit.unwrap_or(consts::JOBS_PER_PAGE);
            let mut state = ListState::new(page, limit);

            match employer::get_jobs(require_config(), page, limit, status).await {
                Ok(res) => state.apply(Ok(res)),
                Err(e) if e.is_authentication() => api_fail(store, e),
                Err(e) => state.apply(Err(e)),
            }

            let mut supervisor = ViewSupervisor::new();
            print!("{}", supervisor.mount(|| views::render_employer_jobs(&state)));

            if state.error.is_some() || supervisor.last_failure().is_some() {
                exit(1);
            }
        }

        JobCommands::Create {
            title,
            category,
            location,
        } => {
            gate("/employer/jobs/create", store);

            let input_fields = [
                ("Title", title),
                ("Description", None),
                ("Category", category),
                ("Location", location),
                ("Min Salary", None),
                ("Max Salary", None),
                ("Job Type", None),
                ("Experience", None),
                ("Requirements", None),
                ("Benefits", None),
                ("Deadline", None),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

            let input = handle_input(input_fields, true);
            let job = job_request_from_input(&input);

            let res = match employer::post_job(require_config(), job).await {
                Ok(res) => res,
                Err(e) => api_fail(store, e),
            };

            if !res.success {
                eprintln!(
                    "Đăng tin thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            println!("Đã tạo tin tuyển dụng #{}.", res.data.id);
        }

        JobCommands::Edit { id } => {
            gate("/employer-dashboard", store);

            let current = jobs::get_job(require_config(), id)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            if !current.success {
                eprintln!(
                    "{}",
                    current
                        .message
                        .as_deref()
                        .unwrap_or("Không tìm thấy việc làm!")
                );
                exit(1);
            }

            let job = current.data;

            let input_fields = [
                ("Title", Some(job.title)),
                ("Description", Some(job.description.unwrap_or_default())),
                ("Category", Some(job.category.unwrap_or_default())),
                ("Location", Some(job.location.unwrap_or_default())),
                (
                    "Min Salary",
                    Some(
                        job.min_salary
                            .map(|v| v.to_string())
                            .unwrap_or_default(),
                    ),
                ),
                (
                    "Max Salary",
                    Some(
                        job.max_salary
                            .map(|v| v.to_string())
                            .unwrap_or_default(),
                    ),
                ),
                ("Job Type", Some(job.job_type.unwrap_or_default())),
                ("Experience", Some(job.experience.unwrap_or_default())),
                ("Requirements", Some(job.requirements.unwrap_or_default())),
                ("Benefits", Some(job.benefits.unwrap_or_default())),
                ("Deadline", Some(job.deadline.unwrap_or_default())),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();

            let input = handle_input(input_fields, false);
            let job = job_request_from_input(&input);

            let res = match employer::put_job(require_config(), id, job).await {
                Ok(res) => res,
                Err(e) => api_fail(store, e),
            };

            if !res.success {
                eprintln!(
                    "Cập nhật tin thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            println!("{}", consts::UPDATE_SUCCESS_MESSAGE);
        }

        JobCommands::Delete { id } => {
            gate("/employer-dashboard", store);

            let res = match employer::delete_job(require_config(), id).await {
                Ok(res) => res,
                Err(e) => api_fail(store, e),
            };

            if !res.success {
                eprintln!(
                    "Xóa tin thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            println!("{}", consts::DELETE_SUCCESS_MESSAGE);
        }

        JobCommands::Close { id } => {
            gate("/employer-dashboard", store);

            let res = match employer::put_job_close(require_config(), id).await {
                Ok(res) => res,
                Err(e) => api_fail(store, e),
            };

            if !res.success {
                eprintln!(
                    "Đóng tin thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            println!("Đã đóng tin tuyển dụng.");
        }

        JobCommands::Reopen { id } => {
            gate("/employer-dashboard", store);

            let res = match employer::put_job_reopen(require_config(), id).await {
                Ok(res) => res,
                Err(e) => api_fail(store, e),
            };

            if !res.success {
                eprintln!(
                    "Mở lại tin thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            println!("Đã mở lại tin tuyển dụng.");
        }
    }
}

async fn handle_application(cmd: ApplicationCommands, store: &SessionStore) {
    match cmd {
        ApplicationCommands::List { job, page, limit } => {
            gate("/employer/applications", store);

            let limit = limit.unwrap_or(consts::APPLICATIONS_PER_PAGE);
            let mut state = ListState::new(page, limit);

            let result = match job {
                Some(job_id) => {
                    applications::get_for_job(require_config(), job_id, page, limit).await
                }
                None => employer::get_applications(require_config(), page, limit).await,
            };

            match result {
                Ok(res) => state.apply(Ok(res)),
                Err(e) if e.is_authentication() => api_fail(store, e),
                Err(e) => state.apply(Err(e)),
            }

            let mut supervisor = ViewSupervisor::new();
            print!(
                "{}",
                supervisor.mount(|| views::render_employer_applications(&state))
            );

            if state.error.is_some() || supervisor.last_failure().is_some() {
                exit(1);
            }
        }

        ApplicationCommands::SetStatus { id, status, job } => {
            gate("/employer/applications", store);

            let status = match applications::ApplicationStatus::from_str(&status) {
                Ok(status) => status,
                Err(message) => {
                    eprintln!("{}", message);
                    exit(1);
                }
            };

            let current = match applications::get_for_job(require_config(), job, 1, 100).await {
                Ok(res) => res,
                Err(e) => api_fail(store, e),
            };

            if !current.success {
                eprintln!(
                    "{}",
                    current
                        .message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            // The server has the final word, this only catches transitions
            // that can never succeed.
            if let Some(row) = current.data.iter().find(|application| application.id == id) {
                if let Ok(from) = applications::ApplicationStatus::from_str(&row.status) {
                    if from.is_terminal() {
                        eprintln!(
                            "Đơn #{} đã ở trạng thái kết thúc ({}), không thể thay đổi.",
                            id,
                            views::application_status_label(from)
                        );
                        exit(1);
                    }
                    if from == status {
                        eprintln!("Đơn #{} đã ở trạng thái này.", id);
                        exit(1);
                    }
                }
            }

            let res = match applications::put_status(require_config(), id, status).await {
                Ok(res) => res,
                Err(e) => api_fail(store, e),
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

            let mut state = ListState::new(1, consts::APPLICATIONS_PER_PAGE);
            state.apply(
                applications::get_for_job(require_config(), job, 1, consts::APPLICATIONS_PER_PAGE)
                    .await,
            );

            let mut supervisor = ViewSupervisor::new();
            print!(
                "{}",
                supervisor.mount(|| views::render_employer_applications(&state))
            );
        }
    }
}

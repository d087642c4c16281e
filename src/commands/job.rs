/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{api_fail, gate, require_config};
use crate::config::*;
use crate::consts;
use crate::fetch::ListState;
use crate::input::*;
use crate::session::SessionStore;
use crate::views::{self, ViewSupervisor};
use clap::{Subcommand, arg};
use connector::*;
use std::process::exit;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        #[arg(short, long, default_value_t = 1)]
        page: i64,
        #[arg(short, long)]
        limit: Option<i64>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(short, long)]
        sort: Option<String>,
        #[arg(short, long)]
        order: Option<String>,
    },
    Search {
        q: String,
        #[arg(short, long, default_value_t = 1)]
        page: i64,
        #[arg(short, long)]
        limit: Option<i64>,
    },
    Show {
        id: i64,
    },
    Category {
        slug: String,
        #[arg(short, long, default_value_t = 1)]
        page: i64,
        #[arg(short, long)]
        limit: Option<i64>,
    },
    Save {
        id: i64,
    },
    Unsave {
        id: i64,
    },
    Saved,
    Apply {
        id: i64,
        #[arg(short, long)]
        cover_letter: Option<String>,
    },
}

fn saved_ids() -> Vec<i64> {
    set_get_value(ConfigKey::SavedJobs, None, true)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn remember_saved(ids: Vec<i64>) {
    if let Ok(raw) = serde_json::to_string(&ids) {
        set_get_value(ConfigKey::SavedJobs, Some(raw), true);
    }
}

fn remember_search(q: &str) {
    let mut history: Vec<String> = set_get_value(ConfigKey::SearchHistory, None, true)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();

    history.retain(|entry| entry != q);
    history.insert(0, q.to_string());
    history.truncate(5);

    if let Ok(raw) = serde_json::to_string(&history) {
        set_get_value(ConfigKey::SearchHistory, Some(raw), true);
    }
}

pub async fn handle(cmd: Commands) {
    let store = SessionStore::open();

    match cmd {
        Commands::List {
            page,
            limit,
            category,
            location,
            sort,
            order,
        } => {
            let limit = limit.unwrap_or(consts::JOBS_PER_PAGE);

            let mut state = ListState::new(page, limit);
            state.apply(
                jobs::get(
                    require_config(),
                    page,
                    limit,
                    sort,
                    order,
                    category,
                    location,
                )
                .await,
            );

            print!("{}", views::render_job_list(&state));

            if state.error.is_some() {
                exit(1);
            }
        }

        Commands::Search { q, page, limit } => {
            let limit = limit.unwrap_or(consts::JOBS_PER_PAGE);
            remember_search(&q);

            let mut state = ListState::new(page, limit);
            state.apply(jobs::get_search(require_config(), q, page, limit).await);

            print!("{}", views::render_job_list(&state));

            if state.error.is_some() {
                exit(1);
            }
        }

        Commands::Show { id } => {
            let res = jobs::get_job(require_config(), id)
                .await
                .map_err(|e| {
                    eprintln!("{}", e);
                    exit(1);
                })
                .unwrap();

            if !res.success {
                eprintln!(
                    "{}",
                    res.message.as_deref().unwrap_or("Không tìm thấy việc làm!")
                );
                exit(1);
            }

            let mut supervisor = ViewSupervisor::new();
            let output = supervisor.mount(|| views::render_job_detail(&res.data));
            print!("{}", output);

            if supervisor.last_failure().is_some() {
                exit(1);
            }
        }

        Commands::Category { slug, page, limit } => {
            let category = match consts::category_value_for_slug(&slug) {
                Some(category) => category,
                None => {
                    eprintln!("Danh mục không tồn tại. Các danh mục:");
                    for (_, category_slug, value) in consts::JOB_CATEGORIES {
                        eprintln!("  {}  ({})", category_slug, value);
                    }
                    exit(1);
                }
            };

            let limit = limit.unwrap_or(consts::JOBS_PER_PAGE);

            let mut state = ListState::new(page, limit);
            state.apply(jobs::get_category(require_config(), slug, page, limit).await);

            println!("Danh mục: {}", category);
            print!("{}", views::render_job_list(&state));

            if state.error.is_some() {
                exit(1);
            }
        }

        Commands::Save { id } => {
            gate("/profile/saved-jobs", &store);

            let res = match jobs::post_save(require_config(), id).await {
                Ok(res) => res,
                Err(e) => api_fail(&store, e),
            };

            if !res.success {
                eprintln!(
                    "Lưu thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            let mut ids = saved_ids();
            if !ids.contains(&id) {
                ids.push(id);
            }
            remember_saved(ids);

            println!("{}", consts::SAVE_SUCCESS_MESSAGE);
        }

        Commands::Unsave { id } => {
            gate("/profile/saved-jobs", &store);

            let res = match jobs::delete_unsave(require_config(), id).await {
                Ok(res) => res,
                Err(e) => api_fail(&store, e),
            };

            if !res.success {
                eprintln!(
                    "Bỏ lưu thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            let mut ids = saved_ids();
            ids.retain(|saved| *saved != id);
            remember_saved(ids);

            println!("Đã bỏ lưu việc làm.");
        }

        Commands::Saved => {
            gate("/profile/saved-jobs", &store);

            let res = match jobs::get_saved(require_config()).await {
                Ok(res) => res,
                Err(e) => api_fail(&store, e),
            };

            if !res.success {
                eprintln!(
                    "{}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            remember_saved(res.data.iter().map(|job| job.id).collect());
            print!("{}", views::render_saved_jobs(&res.data));
        }

        Commands::Apply { id, cover_letter } => {
            gate("/profile/applications", &store);

            let cover_letter = match cover_letter {
                Some(cover_letter) => Some(cover_letter),
                None => {
                    let text = ask_for_optional_input("Thư giới thiệu (bỏ trống để bỏ qua)");
                    (!text.is_empty()).then_some(text)
                }
            };

            let res = match applications::post_apply(require_config(), id, cover_letter).await {
                Ok(res) => res,
                Err(e) => api_fail(&store, e),
            };

            if !res.success {
                eprintln!(
                    "Ứng tuyển thất bại: {}",
                    res.message
                        .as_deref()
                        .unwrap_or(consts::UNKNOWN_ERROR_MESSAGE)
                );
                exit(1);
            }

            println!("{}", consts::APPLY_SUCCESS_MESSAGE);
        }
    }
}

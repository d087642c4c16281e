/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::get_config_file;
use crate::consts;
use crate::draft::{self, CvDraft};
use crate::input::*;
use crate::validators;
use crate::views;
use clap::Subcommand;
use std::process::exit;
use std::time::Duration;
use tokio::sync::watch;

#[derive(Subcommand, Debug)]
pub enum Commands {
    Show,
    Edit,
    Clear,
}

pub async fn handle(cmd: Commands) {
    match cmd {
        Commands::Show => {
            let draft = draft::load_draft().unwrap_or_default();
            print!("{}", views::render_cv_draft(&draft));
        }

        Commands::Edit => {
            let current = draft::load_draft().unwrap_or_default();

            let input_fields = [
                ("Full Name", current.full_name),
                ("Position", current.position),
                ("Email", current.email),
                ("Phone", current.phone),
                ("Address", current.address),
                ("Objective", current.objective),
                ("Experience", current.experience),
                ("Education", current.education),
                ("Skills", current.skills),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.clone())))
            .collect();

            let input = handle_input(input_fields, false);

            let updated = CvDraft {
                full_name: input.get("Full Name").unwrap().clone(),
                position: input.get("Position").unwrap().clone(),
                email: input.get("Email").unwrap().clone(),
                phone: input.get("Phone").unwrap().clone(),
                address: input.get("Address").unwrap().clone(),
                objective: input.get("Objective").unwrap().clone(),
                experience: input.get("Experience").unwrap().clone(),
                education: input.get("Education").unwrap().clone(),
                skills: input.get("Skills").unwrap().clone(),
            };

            if !updated.email.trim().is_empty() {
                if let Err(message) = validators::validate_email(&updated.email) {
                    eprintln!("{}", message);
                    exit(1);
                }
            }

            if !updated.should_persist() {
                eprintln!("Bản nháp trống, chưa lưu. Điền họ tên hoặc email.");
                exit(1);
            }

            // The edit goes through the same debounced pipeline the
            // interactive builder uses; dropping the sender flushes it.
            let (tx, rx) = watch::channel(CvDraft::default());
            let saver = tokio::spawn(draft::autosave_loop(
                rx,
                get_config_file(),
                Duration::from_millis(consts::DRAFT_AUTOSAVE_MS),
            ));

            tx.send_replace(updated);
            drop(tx);

            if saver.await.is_err() {
                eprintln!("Không thể lưu CV nháp.");
                exit(1);
            }

            println!("Đã lưu CV nháp.");
        }

        Commands::Clear => {
            draft::clear_draft();
            println!("Đã xóa CV nháp.");
        }
    }
}

/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod commands;
mod config;
mod consts;
mod draft;
mod fetch;
mod guard;
mod input;
mod session;
mod validators;
mod views;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    commands::base::run_cli().await
}

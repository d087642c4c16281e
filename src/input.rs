/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::config::*;
use connector::RequestConfig;
use rpassword::read_password;
use std::collections::HashMap;
use std::io::Write;
use std::process::Command;
use std::process::exit;
use std::{fs, io};

/// Collects a multi-field form through `$EDITOR`. Fields already supplied
/// on the command line are prefilled; with `skip` set and every field
/// prefilled the editor is not opened at all. Empty values are kept as
/// empty strings, the form validators decide what is actually required.
pub fn handle_input(values: Vec<(String, Option<String>)>, skip: bool) -> HashMap<String, String> {
    if values.is_empty() {
        println!("No input fields");
        exit(1);
    }

    if skip && !values.iter().any(|(_, v)| v.is_none()) {
        return values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone().unwrap_or_default()))
            .collect();
    }

    let input_fields: String = values
        .iter()
        .map(|(k, v)| format!("{}: {}\n", k, v.clone().unwrap_or_default()))
        .collect();

    let name = format!("/tmp/VIECLAM-FORM-{}", std::process::id());

    let mut file = fs::File::create(name.clone()).unwrap();
    file.write_all(input_fields.as_bytes()).unwrap();

    let editor = match std::env::var("EDITOR") {
        Ok(editor) => editor,
        Err(_) => {
            eprintln!("EDITOR is not set.");
            exit(1);
        }
    };

    let output = Command::new(editor.clone())
        .arg(name.clone())
        .status()
        .unwrap();

    if !output.success() {
        println!("Failed to open editor {}", editor);
        exit(1);
    }

    let contents = fs::read_to_string(name.clone()).unwrap();
    fs::remove_file(name).unwrap();

    let mut result: HashMap<String, String> = HashMap::new();
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            eprintln!("Invalid input line: {}", line);
            exit(1);
        };
        let key = key.trim();

        if !values.iter().any(|(k, _)| k == key) {
            eprintln!("Invalid input field: {}", key);
            exit(1);
        }

        result.insert(key.to_string(), value.trim().to_string());
    }

    // Fields deleted in the editor count as left empty.
    for (key, _) in &values {
        result.entry(key.clone()).or_default();
    }

    result
}

pub fn ask_for_password() -> String {
    ask_for_password_with_prompt("Mật khẩu")
}

pub fn ask_for_password_with_prompt(prompt: &str) -> String {
    print!("{}: ", prompt);
    std::io::stdout().flush().unwrap();
    let inp = read_password().unwrap();

    if inp.is_empty() {
        eprintln!("Mật khẩu là bắt buộc");
        exit(1);
    }

    inp
}

pub fn ask_for_input(prompt: &str) -> String {
    let inp = ask_for_optional_input(prompt);

    if inp.is_empty() {
        eprintln!("{} cannot be empty.", prompt);
        exit(1);
    }

    inp
}

/// Line prompt that accepts an empty answer, for optional fields.
pub fn ask_for_optional_input(prompt: &str) -> String {
    print!("{}: ", prompt);
    std::io::stdout().flush().unwrap();
    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .unwrap_or_else(|_| panic!("Failed to read {}.", prompt));
    inp.trim().to_string()
}

pub fn get_request_config(
    config: HashMap<ConfigKey, Option<String>>,
) -> Result<RequestConfig, String> {
    let server_url: String =
        if let Some(server_url) = config.get(&ConfigKey::Server).cloned().flatten() {
            server_url
        } else {
            return Err(
                "Server URL not set. Use `vieclam config server <url>` to set it.".to_string(),
            );
        };

    let token = set_get_value(ConfigKey::AuthToken, None, true);

    Ok(RequestConfig { server_url, token })
}

/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::config::{get_config_file, load_config_at, save_config_at, ConfigKey};
use connector::auth::UserInfo;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::sync::watch;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Employer,
    JobSeeker,
}

impl Role {
    pub fn as_wire(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employer => "employer",
            Role::JobSeeker => "user",
        }
    }

    /// Server role strings are trusted; anything unrecognized is treated as
    /// an ordinary job seeker rather than rejected.
    pub fn from_wire(raw: &str) -> Role {
        match raw {
            "admin" => Role::Admin,
            "employer" => Role::Employer,
            _ => Role::JobSeeker,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

/// Everything the client keeps about a signed-in account: the bearer token,
/// the role it was issued for and the profile snapshot from login/verify.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionCredential {
    pub token: String,
    pub role: Role,
    pub user: UserInfo,
}

/// Persistent session state. Token, role and profile are written and removed
/// together in a single config write, so no reader can observe a token
/// without its role. Changes are published over a watch channel.
pub struct SessionStore {
    config_file: PathBuf,
    tx: watch::Sender<Option<SessionCredential>>,
}

impl SessionStore {
    pub fn open() -> SessionStore {
        SessionStore::open_at(get_config_file())
    }

    pub fn open_at(config_file: PathBuf) -> SessionStore {
        let current = read_credential(&config_file);
        let (tx, _) = watch::channel(current);

        SessionStore { config_file, tx }
    }

    /// Reads the credential from disk on every call, so a login or logout
    /// performed by another process is picked up immediately.
    pub fn get(&self) -> Option<SessionCredential> {
        read_credential(&self.config_file)
    }

    pub fn token(&self) -> Option<String> {
        self.get().map(|credential| credential.token)
    }

    pub fn role(&self) -> Option<Role> {
        self.get().map(|credential| credential.role)
    }

    pub fn set(&self, credential: SessionCredential) {
        let profile = serde_json::to_string(&credential.user)
            .expect("Failed to serialize user profile");

        let mut config = load_config_at(&self.config_file);
        config.insert(ConfigKey::AuthToken, Some(credential.token.clone()));
        config.insert(
            ConfigKey::UserRole,
            Some(credential.role.as_wire().to_string()),
        );
        config.insert(ConfigKey::UserProfile, Some(profile));
        save_config_at(&self.config_file, &config);

        self.tx.send_replace(Some(credential));
    }

    pub fn clear(&self) {
        let mut config = load_config_at(&self.config_file);
        config.insert(ConfigKey::AuthToken, None);
        config.insert(ConfigKey::UserRole, None);
        config.insert(ConfigKey::UserProfile, None);
        save_config_at(&self.config_file, &config);

        self.tx.send_replace(None);
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<SessionCredential>> {
        self.tx.subscribe()
    }
}

fn read_credential(config_file: &Path) -> Option<SessionCredential> {
    let config = load_config_at(config_file);

    let token = config.get(&ConfigKey::AuthToken).cloned().flatten()?;
    let role = config
        .get(&ConfigKey::UserRole)
        .cloned()
        .flatten()
        .map(|raw| Role::from_wire(&raw))?;

    // A stored token whose profile no longer parses is worthless, so the
    // whole credential is dropped and the user has to sign in again.
    let profile = config.get(&ConfigKey::UserProfile).cloned().flatten()?;
    let user: UserInfo = serde_json::from_str(&profile).ok()?;

    Some(SessionCredential { token, role, user })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "vieclam-session-{}-{}.toml",
            name,
            std::process::id()
        ))
    }

    fn sample_user(role: &str) -> UserInfo {
        UserInfo {
            id: 7,
            username: Some("nguyenvana".to_string()),
            email: "a@example.com".to_string(),
            name: Some("Nguyễn Văn A".to_string()),
            role: role.to_string(),
            phone: Some("0901234567".to_string()),
        }
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::Admin.as_wire(), "admin");
        assert_eq!(Role::JobSeeker.as_wire(), "user");
        assert_eq!(Role::from_wire("employer"), Role::Employer);
        assert_eq!(Role::from_wire("moderator"), Role::JobSeeker);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let path = temp_config("roundtrip");
        let _ = std::fs::remove_file(&path);

        let store = SessionStore::open_at(path.clone());
        assert_eq!(store.get(), None);

        store.set(SessionCredential {
            token: "tok-1".to_string(),
            role: Role::JobSeeker,
            user: sample_user("user"),
        });

        assert_eq!(store.token(), Some("tok-1".to_string()));
        assert_eq!(store.role(), Some(Role::JobSeeker));

        // A second store opened on the same file sees the persisted session.
        let reopened = SessionStore::open_at(path.clone());
        let credential = reopened.get().unwrap();
        assert_eq!(credential.token, "tok-1");
        assert_eq!(credential.user.email, "a@example.com");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_clear_removes_all_three_keys() {
        let path = temp_config("clear");
        let _ = std::fs::remove_file(&path);

        let store = SessionStore::open_at(path.clone());
        store.set(SessionCredential {
            token: "tok-2".to_string(),
            role: Role::Employer,
            user: sample_user("employer"),
        });
        store.clear();

        assert_eq!(store.get(), None);

        let config = load_config_at(&path);
        assert_eq!(config.get(&ConfigKey::AuthToken).cloned().flatten(), None);
        assert_eq!(config.get(&ConfigKey::UserRole).cloned().flatten(), None);
        assert_eq!(config.get(&ConfigKey::UserProfile).cloned().flatten(), None);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_profile_counts_as_signed_out() {
        let path = temp_config("corrupt");
        let _ = std::fs::remove_file(&path);

        let mut config = load_config_at(&path);
        config.insert(ConfigKey::AuthToken, Some("tok-3".to_string()));
        config.insert(ConfigKey::UserRole, Some("user".to_string()));
        config.insert(ConfigKey::UserProfile, Some("{not json".to_string()));
        save_config_at(&path, &config);

        let store = SessionStore::open_at(path.clone());
        assert_eq!(store.get(), None);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_watch_sees_login_and_logout() {
        let path = temp_config("watch");
        let _ = std::fs::remove_file(&path);

        let store = SessionStore::open_at(path.clone());
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.set(SessionCredential {
            token: "tok-4".to_string(),
            role: Role::Admin,
            user: sample_user("admin"),
        });
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update()
                .as_ref()
                .map(|credential| credential.token.clone()),
            Some("tok-4".to_string())
        );

        store.clear();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_none());

        let _ = std::fs::remove_file(&path);
    }
}

/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

/// Profile snapshot the server attaches to login/verify responses and that
/// the client caches for the lifetime of the session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i64,
    pub username: Option<String>,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    pub user: UserInfo,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub user: UserInfo,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeRegisterRequest {
    pub name: String,
    pub username: Option<String>,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct ChangePasswordRequest {
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct ResetPasswordRequest {
    pub token: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

pub async fn post_login(
    config: RequestConfig,
    email: String,
    password: String,
) -> ApiResult<LoginResponse> {
    let req = MakeLoginRequest { email, password };

    let res = get_client(config, "auth/login".to_string(), RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

/// Job-seeker registration; the server answers with the same token/user
/// payload as login.
pub async fn post_register(
    config: RequestConfig,
    name: String,
    username: Option<String>,
    email: String,
    password: String,
    phone: Option<String>,
) -> ApiResult<LoginResponse> {
    let req = MakeRegisterRequest {
        name,
        username,
        email,
        password,
        phone,
        role: "user".to_string(),
    };

    let res = get_client(
        config,
        "auth/register".to_string(),
        RequestType::POST,
        false,
    )?
    .json(&req)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn get_verify(config: RequestConfig) -> ApiResult<UserResponse> {
    let res = get_client(config, "auth/verify".to_string(), RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn put_profile(
    config: RequestConfig,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> ApiResult<UserResponse> {
    let req = UpdateProfileRequest { name, email, phone };

    let res = get_client(config, "auth/profile".to_string(), RequestType::PUT, true)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post_change_password(
    config: RequestConfig,
    current_password: String,
    new_password: String,
) -> ApiResult<BaseResponse> {
    let req = ChangePasswordRequest {
        current_password,
        new_password,
    };

    let res = get_client(
        config,
        "auth/change-password".to_string(),
        RequestType::POST,
        true,
    )?
    .json(&req)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn post_forgot_password(config: RequestConfig, email: String) -> ApiResult<BaseResponse> {
    let req = ForgotPasswordRequest { email };

    let res = get_client(
        config,
        "auth/forgot-password".to_string(),
        RequestType::POST,
        false,
    )?
    .json(&req)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn post_reset_password(
    config: RequestConfig,
    token: String,
    new_password: String,
) -> ApiResult<BaseResponse> {
    let req = ResetPasswordRequest {
        token,
        new_password,
    };

    let res = get_client(
        config,
        "auth/reset-password".to_string(),
        RequestType::POST,
        false,
    )?
    .json(&req)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn post_logout(config: RequestConfig) -> ApiResult<BaseResponse> {
    let res = get_client(config, "auth/logout".to_string(), RequestType::POST, true)?
        .send()
        .await?;

    parse_response(res).await
}

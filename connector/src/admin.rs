/*
 * SPDX-FileCopyrightText: 2026 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::applications::ApplicationStatus;
use crate::auth::LoginResponse;
use crate::*;
use serde::{Deserialize, Serialize};

/// One row of the moderation user list; employer columns are null for
/// plain accounts.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AdminUserItem {
    pub id: i64,
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: String,
    pub role: String,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub contact_person: Option<String>,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    pub created_at: Option<String>,
}

/// Application row joined with applicant and job columns. The applied-at
/// column keeps its Vietnamese name on the wire.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AdminApplicationItem {
    pub id: i64,
    pub user_id: Option<i64>,
    pub job_id: Option<i64>,
    pub status: String,
    #[serde(rename = "ngay_ung_tuyen")]
    pub applied_at: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_phone: Option<String>,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

pub async fn post_login(
    config: RequestConfig,
    email: String,
    password: String,
) -> ApiResult<LoginResponse> {
    let req = MakeLoginRequest { email, password };

    let res = get_client(config, "admin/login".to_string(), RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get_users(
    config: RequestConfig,
    page: i64,
    limit: i64,
    search: Option<String>,
    role: Option<String>,
) -> ApiResult<Paged<AdminUserItem>> {
    let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];

    if let Some(search) = search {
        query.push(("search", search));
    }

    if let Some(role) = role {
        query.push(("role", role));
    }

    let res = get_client(config, "admin/users".to_string(), RequestType::GET, true)?
        .query(&query)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn delete_user(config: RequestConfig, user_id: i64) -> ApiResult<BaseResponse> {
    let res = get_client(
        config,
        format!("admin/users/{}", user_id),
        RequestType::DELETE,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}

pub async fn get_applications(
    config: RequestConfig,
    page: i64,
    limit: i64,
    status: Option<ApplicationStatus>,
    search: Option<String>,
) -> ApiResult<Paged<AdminApplicationItem>> {
    let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];

    if let Some(status) = status {
        query.push(("status", status.to_string()));
    }

    if let Some(search) = search {
        query.push(("search", search));
    }

    let res = get_client(
        config,
        "admin/applications".to_string(),
        RequestType::GET,
        true,
    )?
    .query(&query)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn put_application_status(
    config: RequestConfig,
    application_id: i64,
    status: ApplicationStatus,
) -> ApiResult<BaseResponse> {
    let req = UpdateStatusRequest { status };

    let res = get_client(
        config,
        format!("admin/applications/{}/status", application_id),
        RequestType::PUT,
        true,
    )?
    .json(&req)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn delete_application(
    config: RequestConfig,
    application_id: i64,
) -> ApiResult<BaseResponse> {
    let res = get_client(
        config,
        format!("admin/applications/{}", application_id),
        RequestType::DELETE,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}

/*
 * SPDX-FileCopyrightText: 2026 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::applications::ApplicationItem;
use crate::auth::LoginResponse;
use crate::jobs::{JobItem, JobStatus};
use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration body; field names follow the form the server destructures.
#[derive(Serialize, Deserialize, Debug)]
struct MakeEmployerRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub phone: String,
    pub address: String,
    #[serde(rename = "taxCode")]
    pub tax_code: String,
    pub website: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeJobRequest {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub job_type: Option<String>,
    pub experience: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub deadline: Option<String>,
}

pub async fn post_login(
    config: RequestConfig,
    email: String,
    password: String,
) -> ApiResult<LoginResponse> {
    let req = MakeLoginRequest { email, password };

    let res = get_client(
        config,
        "employer/login".to_string(),
        RequestType::POST,
        false,
    )?
    .json(&req)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn post_register(
    config: RequestConfig,
    email: String,
    password: String,
    company_name: String,
    phone: String,
    address: String,
    tax_code: String,
    website: Option<String>,
    description: Option<String>,
) -> ApiResult<LoginResponse> {
    let req = MakeEmployerRequest {
        email,
        password,
        company_name,
        phone,
        address,
        tax_code,
        website,
        description,
    };

    let res = get_client(
        config,
        "employer/register".to_string(),
        RequestType::POST,
        false,
    )?
    .json(&req)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn get_jobs(
    config: RequestConfig,
    page: i64,
    limit: i64,
    status: Option<JobStatus>,
) -> ApiResult<Paged<JobItem>> {
    let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];

    if let Some(status) = status {
        query.push(("status", status.to_string()));
    }

    let res = get_client(
        config,
        "employer/me/jobs".to_string(),
        RequestType::GET,
        true,
    )?
    .query(&query)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn post_job(
    config: RequestConfig,
    job: MakeJobRequest,
) -> ApiResult<DataResponse<JobItem>> {
    let res = get_client(
        config,
        "employer/me/jobs".to_string(),
        RequestType::POST,
        true,
    )?
    .json(&job)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn put_job(
    config: RequestConfig,
    job_id: i64,
    job: MakeJobRequest,
) -> ApiResult<BaseResponse> {
    let res = get_client(
        config,
        format!("employer/me/jobs/{}", job_id),
        RequestType::PUT,
        true,
    )?
    .json(&job)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn delete_job(config: RequestConfig, job_id: i64) -> ApiResult<BaseResponse> {
    let res = get_client(
        config,
        format!("employer/me/jobs/{}", job_id),
        RequestType::DELETE,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}

pub async fn put_job_close(config: RequestConfig, job_id: i64) -> ApiResult<BaseResponse> {
    let res = get_client(
        config,
        format!("employer/me/jobs/{}/close", job_id),
        RequestType::PUT,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}

pub async fn put_job_reopen(config: RequestConfig, job_id: i64) -> ApiResult<BaseResponse> {
    let res = get_client(
        config,
        format!("employer/me/jobs/{}/reopen", job_id),
        RequestType::PUT,
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
) -> ApiResult<Paged<ApplicationItem>> {
    let query = vec![("page", page.to_string()), ("limit", limit.to_string())];

    let res = get_client(
        config,
        "employer/me/applications".to_string(),
        RequestType::GET,
        true,
    )?
    .query(&query)
    .send()
    .await?;

    parse_response(res).await
}

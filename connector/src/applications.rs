/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Shortlisted,
    Interview,
    Offered,
    Rejected,
    Accepted,
    Withdrawn,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 8] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Reviewing,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Interview,
        ApplicationStatus::Offered,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
        ApplicationStatus::Withdrawn,
    ];

    /// Terminal statuses stay where they are; the server is authoritative,
    /// this only stops the obvious mistakes before they go out.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Accepted | ApplicationStatus::Withdrawn)
    }

    pub fn can_transition(&self, to: ApplicationStatus) -> bool {
        !self.is_terminal() && *self != to
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offered => "offered",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Withdrawn => "withdrawn",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .iter()
            .find(|status| status.to_string() == s.to_lowercase())
            .copied()
            .ok_or_else(|| format!("`{}` is not an application status", s))
    }
}

/// One row of an application list. Job fields are filled for the job
/// seeker's view, applicant fields for the employer's inbox.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationItem {
    pub id: i64,
    pub job_id: Option<i64>,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub created_at: Option<String>,
    pub cv_used: Option<String>,
    pub status: String,
    pub cover_letter: Option<String>,
    pub expected_salary: Option<i64>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct MakeApplicationRequest {
    #[serde(rename = "coverLetter")]
    pub cover_letter: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

pub async fn post_apply(
    config: RequestConfig,
    job_id: i64,
    cover_letter: Option<String>,
) -> ApiResult<BaseResponse> {
    let req = MakeApplicationRequest { cover_letter };

    let res = get_client(
        config,
        format!("applications/apply/{}", job_id),
        RequestType::POST,
        true,
    )?
    .json(&req)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn get_my(
    config: RequestConfig,
    page: i64,
    limit: i64,
    status: Option<ApplicationStatus>,
) -> ApiResult<Paged<ApplicationItem>> {
    let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];

    if let Some(status) = status {
        query.push(("status", status.to_string()));
    }

    let res = get_client(
        config,
        "applications/my-applications".to_string(),
        RequestType::GET,
        true,
    )?
    .query(&query)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn delete_withdraw(config: RequestConfig, application_id: i64) -> ApiResult<BaseResponse> {
    let res = get_client(
        config,
        format!("applications/{}", application_id),
        RequestType::DELETE,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}

/// Employer view of a job's inbox.
pub async fn get_for_job(
    config: RequestConfig,
    job_id: i64,
    page: i64,
    limit: i64,
) -> ApiResult<Paged<ApplicationItem>> {
    let query = vec![("page", page.to_string()), ("limit", limit.to_string())];

    let res = get_client(
        config,
        format!("applications/job/{}", job_id),
        RequestType::GET,
        true,
    )?
    .query(&query)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn put_status(
    config: RequestConfig,
    application_id: i64,
    status: ApplicationStatus,
) -> ApiResult<BaseResponse> {
    let req = UpdateStatusRequest { status };

    let res = get_client(
        config,
        format!("applications/{}/status", application_id),
        RequestType::PUT,
        true,
    )?
    .json(&req)
    .send()
    .await?;

    parse_response(res).await
}

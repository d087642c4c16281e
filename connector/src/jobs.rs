/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JobItem {
    pub id: i64,
    pub title: String,
    pub company_id: Option<i64>,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
    pub salary: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub experience: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub deadline: Option<String>,
    pub posted_at: Option<String>,
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Draft,
    Pending,
    Active,
    Closed,
    Rejected,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobStatus::Draft => "draft",
            JobStatus::Pending => "pending",
            JobStatus::Active => "active",
            JobStatus::Closed => "closed",
            JobStatus::Rejected => "rejected",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(JobStatus::Draft),
            "pending" => Ok(JobStatus::Pending),
            "active" => Ok(JobStatus::Active),
            "closed" => Ok(JobStatus::Closed),
            "rejected" => Ok(JobStatus::Rejected),
            other => Err(format!("`{}` is not a job status", other)),
        }
    }
}

pub async fn get(
    config: RequestConfig,
    page: i64,
    limit: i64,
    sort: Option<String>,
    order: Option<String>,
    category: Option<String>,
    location: Option<String>,
) -> ApiResult<Paged<JobItem>> {
    let mut query = vec![("page", page.to_string()), ("limit", limit.to_string())];

    if let Some(sort) = sort {
        query.push(("sort", sort));
    }

    if let Some(order) = order {
        query.push(("order", order));
    }

    if let Some(category) = category {
        query.push(("category", category));
    }

    if let Some(location) = location {
        query.push(("location", location));
    }

    let res = get_client(config, "jobs".to_string(), RequestType::GET, false)?
        .query(&query)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get_search(
    config: RequestConfig,
    q: String,
    page: i64,
    limit: i64,
) -> ApiResult<Paged<JobItem>> {
    let query = vec![
        ("q", q),
        ("page", page.to_string()),
        ("limit", limit.to_string()),
    ];

    let res = get_client(config, "jobs/search".to_string(), RequestType::GET, false)?
        .query(&query)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get_category(
    config: RequestConfig,
    slug: String,
    page: i64,
    limit: i64,
) -> ApiResult<Paged<JobItem>> {
    let query = vec![("page", page.to_string()), ("limit", limit.to_string())];

    let res = get_client(
        config,
        format!("jobs/category/{}", slug),
        RequestType::GET,
        false,
    )?
    .query(&query)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn get_job(config: RequestConfig, job_id: i64) -> ApiResult<DataResponse<JobItem>> {
    let res = get_client(config, format!("jobs/{}", job_id), RequestType::GET, false)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post_save(config: RequestConfig, job_id: i64) -> ApiResult<BaseResponse> {
    let res = get_client(
        config,
        format!("jobs/save/{}", job_id),
        RequestType::POST,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}

pub async fn delete_unsave(config: RequestConfig, job_id: i64) -> ApiResult<BaseResponse> {
    let res = get_client(
        config,
        format!("jobs/unsave/{}", job_id),
        RequestType::DELETE,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}

pub async fn get_saved(config: RequestConfig) -> ApiResult<DataResponse<Vec<JobItem>>> {
    let res = get_client(config, "jobs/saved".to_string(), RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_round_trip() {
        for status in [
            JobStatus::Draft,
            JobStatus::Pending,
            JobStatus::Active,
            JobStatus::Closed,
            JobStatus::Rejected,
        ] {
            assert_eq!(JobStatus::from_str(&status.to_string()).unwrap(), status);
        }

        assert!(JobStatus::from_str("archived").is_err());
    }

    #[test]
    fn test_job_item_tolerates_nulls() {
        let json = r#"{
            "id": 7,
            "title": "Lập trình viên Rust",
            "company_id": null,
            "company_name": "FPT Software",
            "description": null,
            "min_salary": 15000000,
            "max_salary": 30000000,
            "salary": null,
            "job_type": "fulltime",
            "location": "Hà Nội",
            "category": "Công nghệ thông tin",
            "experience": null,
            "posted_at": "2025-06-01T08:00:00.000Z",
            "status": "active"
        }"#;

        let job: JobItem = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, 7);
        assert_eq!(job.company_name.as_deref(), Some("FPT Software"));
        assert!(job.description.is_none());
    }
}

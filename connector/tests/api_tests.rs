/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use connector::*;
use serde_json::{Value, json};
use std::collections::HashMap;
use tokio::net::TcpListener;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn config(server_url: String, token: Option<&str>) -> RequestConfig {
    RequestConfig {
        server_url,
        token: token.map(String::from),
    }
}

#[tokio::test]
async fn test_login_round_trip() {
    let app = Router::new().route(
        "/api/auth/login",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "success": true,
                "message": "Đăng nhập thành công",
                "token": "jwt-abc",
                "user": {
                    "id": 1,
                    "username": "ngoc",
                    "email": body["email"],
                    "name": "Ngọc Trần",
                    "role": "user",
                    "phone": null
                }
            }))
        }),
    );
    let url = serve(app).await;

    let res = auth::post_login(
        config(url, None),
        "ngoc@example.com".to_string(),
        "secret123".to_string(),
    )
    .await
    .unwrap();

    assert!(res.success);
    assert_eq!(res.token, "jwt-abc");
    assert_eq!(res.user.email, "ngoc@example.com");
    assert_eq!(res.user.role, "user");
    assert!(res.user.phone.is_none());
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let app = Router::new().route(
        "/api/jobs/saved",
        get(|headers: HeaderMap| async move {
            let authorized = headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                == Some("Bearer token-123");

            if authorized {
                (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "data": [{ "id": 5, "title": "Nhân viên kinh doanh" }]
                    })),
                )
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "success": false, "message": "Token không hợp lệ" })),
                )
            }
        }),
    );
    let url = serve(app).await;

    let res = jobs::get_saved(config(url, Some("token-123"))).await.unwrap();

    assert_eq!(res.data.len(), 1);
    assert_eq!(res.data[0].id, 5);
    assert_eq!(res.data[0].title, "Nhân viên kinh doanh");
}

#[tokio::test]
async fn test_expired_token_maps_to_authentication() {
    let app = Router::new().route(
        "/api/auth/verify",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "success": false, "message": "Token đã hết hạn" })),
            )
        }),
    );
    let url = serve(app).await;

    let err = auth::get_verify(config(url, Some("stale")))
        .await
        .unwrap_err();

    assert!(err.is_authentication());
    assert_eq!(err.to_string(), "Token đã hết hạn");
}

#[tokio::test]
async fn test_forbidden_maps_to_authorization() {
    let app = Router::new().route(
        "/api/admin/users",
        get(|| async {
            (
                StatusCode::FORBIDDEN,
                Json(json!({ "success": false, "message": "Bạn không có quyền truy cập" })),
            )
        }),
    );
    let url = serve(app).await;

    let err = admin::get_users(config(url, Some("user-token")), 1, 15, None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Authorization(_)));
    assert!(!err.is_authentication());
    assert_eq!(err.to_string(), "Bạn không có quyền truy cập");
}

#[tokio::test]
async fn test_job_list_passes_paging_query() {
    let app = Router::new().route(
        "/api/jobs",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let page: i64 = params["page"].parse().unwrap();
            let limit: i64 = params["limit"].parse().unwrap();

            Json(json!({
                "success": true,
                "data": [{
                    "id": 42,
                    "title": "Kỹ sư phần mềm",
                    "category": params.get("category"),
                    "location": "Hà Nội"
                }],
                "pagination": { "page": page, "limit": limit, "total": 35, "totalPages": 4 }
            }))
        }),
    );
    let url = serve(app).await;

    let res = jobs::get(
        config(url, None),
        2,
        10,
        None,
        None,
        Some("Công nghệ thông tin".to_string()),
        None,
    )
    .await
    .unwrap();

    assert_eq!(res.pagination.page, 2);
    assert_eq!(res.pagination.limit, 10);
    assert_eq!(res.pagination.total, 35);
    assert_eq!(res.pagination.total_pages, 4);
    assert_eq!(res.data.len(), 1);
    assert_eq!(res.data[0].category.as_deref(), Some("Công nghệ thông tin"));
}

#[tokio::test]
async fn test_job_create_sends_snake_case_body() {
    let app = Router::new().route(
        "/api/employer/me/jobs",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "success": true,
                "message": "Đăng tin thành công",
                "data": {
                    "id": 77,
                    "title": body["title"],
                    "min_salary": body["min_salary"],
                    "max_salary": body["max_salary"],
                    "job_type": body["job_type"],
                    "status": "pending"
                }
            }))
        }),
    );
    let url = serve(app).await;

    let job = employer::MakeJobRequest {
        title: "Lập trình viên Rust cho hệ thống backend".to_string(),
        description: "Phát triển và vận hành các dịch vụ backend của sàn tuyển dụng.".to_string(),
        category: Some("Công nghệ thông tin".to_string()),
        location: Some("Hà Nội".to_string()),
        salary: None,
        min_salary: Some(20_000_000),
        max_salary: Some(40_000_000),
        job_type: Some("full-time".to_string()),
        experience: None,
        requirements: None,
        benefits: None,
        deadline: None,
    };

    let res = employer::post_job(config(url, Some("employer-token")), job)
        .await
        .unwrap();

    assert!(res.success);
    assert_eq!(res.data.id, 77);
    assert_eq!(res.data.min_salary, Some(20_000_000));
    assert_eq!(res.data.max_salary, Some(40_000_000));
    assert_eq!(res.data.job_type.as_deref(), Some("full-time"));
}

#[tokio::test]
async fn test_status_update_sends_lowercase_status() {
    let app = Router::new().route(
        "/api/applications/{id}/status",
        axum::routing::put(|Json(body): Json<Value>| async move {
            if body["status"] == "shortlisted" {
                Json(json!({ "success": true, "message": "Cập nhật trạng thái thành công" }))
            } else {
                Json(json!({ "success": false, "message": "Trạng thái không hợp lệ" }))
            }
        }),
    );
    let url = serve(app).await;

    let res = applications::put_status(
        config(url, Some("employer-token")),
        12,
        applications::ApplicationStatus::Shortlisted,
    )
    .await
    .unwrap();

    assert!(res.success);
}

#[tokio::test]
async fn test_missing_total_pages_defaults_to_zero() {
    let app = Router::new().route(
        "/api/applications/my-applications",
        get(|| async {
            Json(json!({
                "success": true,
                "data": [{ "id": 9, "job_title": "Kế toán tổng hợp", "status": "pending" }],
                "pagination": { "page": 1, "limit": 10, "total": 1 }
            }))
        }),
    );
    let url = serve(app).await;

    let res = applications::get_my(config(url, Some("token-123")), 1, 10, None)
        .await
        .unwrap();

    assert_eq!(res.pagination.total_pages, 0);
    assert_eq!(res.data[0].status, "pending");
    assert!(res.data[0].job_id.is_none());
}

#[tokio::test]
async fn test_plain_text_error_passes_through() {
    let app = Router::new().route(
        "/api/jobs/999999",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let url = serve(app).await;

    let err = jobs::get_job(config(url, None), 999999).await.unwrap_err();

    assert!(matches!(err, ApiError::Server(_)));
    assert_eq!(err.to_string(), "Internal Server Error");
}

#[tokio::test]
async fn test_unreachable_server_maps_to_network() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = health(config(format!("http://{}", addr), None))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
}

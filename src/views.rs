/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Text views for everything the CLI displays. Renderers that can run
//! into bad or missing data return `Result`; the supervisor turns a
//! failure into the fallback view instead of aborting the command.

use crate::draft::CvDraft;
use crate::fetch::ListState;
use connector::admin::{AdminApplicationItem, AdminUserItem};
use connector::applications::{ApplicationItem, ApplicationStatus};
use connector::auth::UserInfo;
use connector::jobs::{JobItem, JobStatus};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    MissingData {
        view: &'static str,
        what: &'static str,
    },
    BadValue {
        view: &'static str,
        what: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingData { view, what } => {
                write!(f, "Không thể hiển thị {}: thiếu {}", view, what)
            }
            RenderError::BadValue { view, what } => {
                write!(
                    f,
                    "Không thể hiển thị {}: giá trị không hợp lệ ({})",
                    view, what
                )
            }
        }
    }
}

impl std::error::Error for RenderError {}

pub type ViewResult = Result<String, RenderError>;

/// Mounts views and absorbs render failures. The failed view is replaced
/// by a fallback screen and the error is kept until `reset`.
#[derive(Debug, Default)]
pub struct ViewSupervisor {
    last_failure: Option<RenderError>,
}

impl ViewSupervisor {
    pub fn new() -> ViewSupervisor {
        ViewSupervisor { last_failure: None }
    }

    pub fn mount<F>(&mut self, render: F) -> String
    where
        F: FnOnce() -> ViewResult,
    {
        match render() {
            Ok(view) => view,
            Err(err) => {
                let fallback = fallback_view(&err);
                self.last_failure = Some(err);
                fallback
            }
        }
    }

    pub fn last_failure(&self) -> Option<&RenderError> {
        self.last_failure.as_ref()
    }

    pub fn reset(&mut self) {
        self.last_failure = None;
    }
}

fn fallback_view(err: &RenderError) -> String {
    let mut out = section("Lỗi hiển thị");
    out.push_str(&format!("{}\n", err));
    out.push_str("Vui lòng quay lại trang trước hoặc thử lại.\n");
    out
}

fn section(title: &str) -> String {
    format!("===== {} =====\n", title)
}

pub fn application_status_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "Chờ xét duyệt",
        ApplicationStatus::Reviewing => "Đang xem xét",
        ApplicationStatus::Shortlisted => "Đã chọn",
        ApplicationStatus::Interview => "Mời phỏng vấn",
        ApplicationStatus::Offered => "Đã offer",
        ApplicationStatus::Rejected => "Từ chối",
        ApplicationStatus::Accepted => "Chấp nhận",
        ApplicationStatus::Withdrawn => "Đã rút",
    }
}

pub fn job_status_label(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Draft => "Nháp",
        JobStatus::Pending => "Chờ duyệt",
        JobStatus::Active => "Đang tuyển",
        JobStatus::Closed => "Đã đóng",
        JobStatus::Rejected => "Bị từ chối",
    }
}

/// Display names for the stored job type values. Unrecognized values show
/// as they came, the field is free text on older rows.
pub fn job_type_label(job_type: &str) -> &str {
    match job_type {
        "fulltime" | "full-time" => "Full-time",
        "parttime" | "part-time" => "Part-time",
        "remote" => "Remote",
        "freelance" => "Freelance",
        "contract" => "Hợp đồng",
        "internship" => "Thực tập",
        other => other,
    }
}

fn format_number(number: i64) -> String {
    let raw = number.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    let mut grouped = String::new();
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}", sign, grouped)
}

fn format_salary_value(salary: i64) -> String {
    const MILLION: i64 = 1_000_000;
    const BILLION: i64 = 1_000_000_000;

    if salary >= BILLION {
        if salary % BILLION == 0 {
            format!("{} tỷ", salary / BILLION)
        } else {
            format!("{:.1} tỷ", salary as f64 / BILLION as f64)
        }
    } else if salary >= MILLION {
        if salary % MILLION == 0 {
            format!("{} triệu", salary / MILLION)
        } else {
            format!("{:.1} triệu", salary as f64 / MILLION as f64)
        }
    } else {
        format_number(salary)
    }
}

/// "15 - 30 triệu VND" from the stored bounds; open ends render as
/// "Từ ..."/"Lên đến ..." and no bounds at all as "Thỏa thuận".
pub fn format_salary(min_salary: Option<i64>, max_salary: Option<i64>) -> String {
    let min = min_salary.filter(|v| *v > 0);
    let max = max_salary.filter(|v| *v > 0);

    match (min, max) {
        (None, None) => "Thỏa thuận".to_string(),
        (Some(min), None) => format!("Từ {} VND", format_salary_value(min)),
        (None, Some(max)) => format!("Lên đến {} VND", format_salary_value(max)),
        (Some(min), Some(max)) => format!(
            "{} - {} VND",
            format_salary_value(min),
            format_salary_value(max)
        ),
    }
}

fn job_salary(job: &JobItem) -> String {
    match &job.salary {
        Some(text) if !text.trim().is_empty() => text.clone(),
        _ => format_salary(job.min_salary, job.max_salary),
    }
}

fn list_footer(total: i64, page: i64, total_pages: i64, noun: &str) -> String {
    format!("Trang {}/{} ({} {})\n", page, total_pages.max(1), total, noun)
}

pub fn render_job_list(state: &ListState<JobItem>) -> String {
    let mut out = section("Việc làm");

    if let Some(error) = &state.error {
        out.push_str(&format!("Lỗi: {}\n", error));
        return out;
    }

    if state.items.is_empty() {
        out.push_str("Không tìm thấy việc làm nào\n");
        return out;
    }

    for job in &state.items {
        out.push_str(&format!(
            "#{}  {} | {} | {} | {}\n",
            job.id,
            job.title,
            job.company_name.as_deref().unwrap_or("Chưa cập nhật"),
            job.location.as_deref().unwrap_or("Chưa cập nhật"),
            job_salary(job),
        ));
    }

    out.push_str(&list_footer(
        state.total,
        state.page,
        state.total_pages,
        "việc làm",
    ));
    out
}

/// Saved jobs come back as a plain list, the server does not page them.
pub fn render_saved_jobs(jobs: &[JobItem]) -> String {
    let mut out = section("Việc làm đã lưu");

    if jobs.is_empty() {
        out.push_str("Bạn chưa lưu việc làm nào\n");
        return out;
    }

    for job in jobs {
        out.push_str(&format!(
            "#{}  {} | {} | {}\n",
            job.id,
            job.title,
            job.company_name.as_deref().unwrap_or("Chưa cập nhật"),
            job_salary(job),
        ));
    }

    out.push_str(&format!("{} việc làm đã lưu\n", jobs.len()));
    out
}

pub fn render_job_detail(job: &JobItem) -> ViewResult {
    if job.title.trim().is_empty() {
        return Err(RenderError::MissingData {
            view: "chi tiết việc làm",
            what: "tiêu đề",
        });
    }

    let mut out = section(&job.title);
    out.push_str(&format!(
        "Công ty: {}\n",
        job.company_name.as_deref().unwrap_or("Chưa cập nhật")
    ));
    out.push_str(&format!(
        "Địa điểm: {}\n",
        job.location.as_deref().unwrap_or("Chưa cập nhật")
    ));
    out.push_str(&format!(
        "Danh mục: {}\n",
        job.category.as_deref().unwrap_or("Chưa cập nhật")
    ));
    if let Some(job_type) = &job.job_type {
        out.push_str(&format!("Loại hình: {}\n", job_type_label(job_type)));
    }
    if let Some(experience) = &job.experience {
        out.push_str(&format!("Kinh nghiệm: {}\n", experience));
    }
    out.push_str(&format!("Mức lương: {}\n", job_salary(job)));

    if let Some(raw) = &job.status {
        let status = JobStatus::from_str(raw).map_err(|_| RenderError::BadValue {
            view: "chi tiết việc làm",
            what: format!("trạng thái `{}`", raw),
        })?;
        out.push_str(&format!("Trạng thái: {}\n", job_status_label(status)));
    }

    if let Some(posted_at) = &job.posted_at {
        out.push_str(&format!("Đăng ngày: {}\n", posted_at));
    }
    if let Some(deadline) = &job.deadline {
        out.push_str(&format!("Hạn nộp: {}\n", deadline));
    }
    if let Some(description) = &job.description {
        out.push_str(&format!("\nMô tả:\n{}\n", description));
    }
    if let Some(requirements) = &job.requirements {
        out.push_str(&format!("\nYêu cầu:\n{}\n", requirements));
    }
    if let Some(benefits) = &job.benefits {
        out.push_str(&format!("\nQuyền lợi:\n{}\n", benefits));
    }

    Ok(out)
}

pub fn render_applications(state: &ListState<ApplicationItem>) -> ViewResult {
    let mut out = section("Đơn ứng tuyển");

    if let Some(error) = &state.error {
        out.push_str(&format!("Lỗi: {}\n", error));
        return Ok(out);
    }

    if state.items.is_empty() {
        out.push_str("Chưa có đơn ứng tuyển nào\n");
        return Ok(out);
    }

    for application in &state.items {
        let status =
            ApplicationStatus::from_str(&application.status).map_err(|_| RenderError::BadValue {
                view: "đơn ứng tuyển",
                what: format!("trạng thái `{}`", application.status),
            })?;

        out.push_str(&format!(
            "#{}  {} | {} | {} | {}\n",
            application.id,
            application.job_title.as_deref().unwrap_or("Chưa cập nhật"),
            application
                .company_name
                .as_deref()
                .unwrap_or("Chưa cập nhật"),
            application_status_label(status),
            application.created_at.as_deref().unwrap_or("-"),
        ));
    }

    out.push_str(&list_footer(
        state.total,
        state.page,
        state.total_pages,
        "đơn",
    ));
    Ok(out)
}

/// The employer's job board: one row per posting with its lifecycle state.
pub fn render_employer_jobs(state: &ListState<JobItem>) -> ViewResult {
    let mut out = section("Tin tuyển dụng của tôi");

    if let Some(error) = &state.error {
        out.push_str(&format!("Lỗi: {}\n", error));
        return Ok(out);
    }

    if state.items.is_empty() {
        out.push_str("Bạn chưa đăng tin tuyển dụng nào\n");
        return Ok(out);
    }

    for job in &state.items {
        let status = match &job.status {
            Some(raw) => {
                let status = JobStatus::from_str(raw).map_err(|_| RenderError::BadValue {
                    view: "tin tuyển dụng",
                    what: format!("trạng thái `{}`", raw),
                })?;
                job_status_label(status)
            }
            None => "-",
        };

        out.push_str(&format!(
            "#{}  {} | {} | {} | {}\n",
            job.id,
            job.title,
            status,
            job.location.as_deref().unwrap_or("Chưa cập nhật"),
            job_salary(job),
        ));
    }

    out.push_str(&list_footer(
        state.total,
        state.page,
        state.total_pages,
        "tin",
    ));
    Ok(out)
}

pub fn render_employer_applications(state: &ListState<ApplicationItem>) -> ViewResult {
    let mut out = section("Đơn ứng tuyển nhận được");

    if let Some(error) = &state.error {
        out.push_str(&format!("Lỗi: {}\n", error));
        return Ok(out);
    }

    if state.items.is_empty() {
        out.push_str("Chưa có đơn ứng tuyển nào\n");
        return Ok(out);
    }

    for application in &state.items {
        let status =
            ApplicationStatus::from_str(&application.status).map_err(|_| RenderError::BadValue {
                view: "đơn ứng tuyển nhận được",
                what: format!("trạng thái `{}`", application.status),
            })?;

        out.push_str(&format!(
            "#{}  {} | {} | {} | {}\n",
            application.id,
            application.user_name.as_deref().unwrap_or("Ẩn danh"),
            application.job_title.as_deref().unwrap_or("Chưa cập nhật"),
            application_status_label(status),
            application.created_at.as_deref().unwrap_or("-"),
        ));
    }

    out.push_str(&list_footer(
        state.total,
        state.page,
        state.total_pages,
        "đơn",
    ));
    Ok(out)
}

pub fn render_users(state: &ListState<AdminUserItem>) -> String {
    let mut out = section("Người dùng");

    if let Some(error) = &state.error {
        out.push_str(&format!("Lỗi: {}\n", error));
        return out;
    }

    if state.items.is_empty() {
        out.push_str("Không có người dùng nào\n");
        return out;
    }

    for user in &state.items {
        out.push_str(&format!(
            "#{}  {} | {} | {} | {}\n",
            user.id,
            user.name.as_deref().unwrap_or("Chưa cập nhật"),
            user.email,
            user.role,
            user.phone.as_deref().unwrap_or("-"),
        ));
    }

    out.push_str(&list_footer(
        state.total,
        state.page,
        state.total_pages,
        "người dùng",
    ));
    out
}

pub fn render_admin_applications(state: &ListState<AdminApplicationItem>) -> ViewResult {
    let mut out = section("Đơn ứng tuyển (quản trị)");

    if let Some(error) = &state.error {
        out.push_str(&format!("Lỗi: {}\n", error));
        return Ok(out);
    }

    if state.items.is_empty() {
        out.push_str("Không có đơn ứng tuyển nào\n");
        return Ok(out);
    }

    for application in &state.items {
        let status =
            ApplicationStatus::from_str(&application.status).map_err(|_| RenderError::BadValue {
                view: "đơn ứng tuyển (quản trị)",
                what: format!("trạng thái `{}`", application.status),
            })?;

        out.push_str(&format!(
            "#{}  {} | {} | {} | {}\n",
            application.id,
            application.user_name.as_deref().unwrap_or("Chưa cập nhật"),
            application.job_title.as_deref().unwrap_or("Chưa cập nhật"),
            application_status_label(status),
            application.applied_at.as_deref().unwrap_or("-"),
        ));
    }

    out.push_str(&list_footer(
        state.total,
        state.page,
        state.total_pages,
        "đơn",
    ));
    Ok(out)
}

pub fn render_profile(user: &UserInfo) -> String {
    let mut out = section("Hồ sơ");
    out.push_str(&format!(
        "Tên: {}\n",
        user.name.as_deref().unwrap_or("Chưa cập nhật")
    ));
    out.push_str(&format!("Email: {}\n", user.email));
    out.push_str(&format!("Vai trò: {}\n", user.role));
    out.push_str(&format!(
        "Số điện thoại: {}\n",
        user.phone.as_deref().unwrap_or("Chưa cập nhật")
    ));
    out
}

pub fn render_unauthorized(from: &str, required: &str) -> String {
    let mut out = section("Không có quyền truy cập");
    out.push_str(&format!("Trang: {}\n", from));
    out.push_str(&format!("Yêu cầu vai trò: {}\n", required));
    out.push_str("Vui lòng đăng nhập bằng tài khoản phù hợp.\n");
    out
}

pub fn render_cv_draft(draft: &CvDraft) -> String {
    let mut out = section("CV nháp");

    let field = |label: &str, value: &str| {
        if value.trim().is_empty() {
            format!("{}: Chưa có\n", label)
        } else {
            format!("{}: {}\n", label, value)
        }
    };

    out.push_str(&field("Họ tên", &draft.full_name));
    out.push_str(&field("Vị trí", &draft.position));
    out.push_str(&field("Email", &draft.email));
    out.push_str(&field("Số điện thoại", &draft.phone));
    out.push_str(&field("Địa chỉ", &draft.address));
    out.push_str(&field("Mục tiêu", &draft.objective));
    out.push_str(&field("Kinh nghiệm", &draft.experience));
    out.push_str(&field("Học vấn", &draft.education));
    out.push_str(&field("Kỹ năng", &draft.skills));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use connector::Pagination;

    fn job(id: i64, title: &str) -> JobItem {
        JobItem {
            id,
            title: title.to_string(),
            company_id: Some(1),
            company_name: Some("FPT Software".to_string()),
            description: Some("Phát triển dịch vụ backend.".to_string()),
            min_salary: Some(15_000_000),
            max_salary: Some(30_000_000),
            salary: None,
            job_type: Some("fulltime".to_string()),
            location: Some("Hà Nội".to_string()),
            category: Some("Công nghệ thông tin".to_string()),
            experience: Some("2 năm".to_string()),
            requirements: Some("Thành thạo Rust và SQL.".to_string()),
            benefits: Some("Thưởng dự án, bảo hiểm đầy đủ.".to_string()),
            deadline: Some("2025-07-01".to_string()),
            posted_at: Some("2025-06-01".to_string()),
            status: Some("active".to_string()),
        }
    }

    #[test]
    fn test_format_salary() {
        assert_eq!(
            format_salary(Some(15_000_000), Some(30_000_000)),
            "15 triệu - 30 triệu VND"
        );
        assert_eq!(format_salary(Some(10_000_000), None), "Từ 10 triệu VND");
        assert_eq!(
            format_salary(None, Some(1_500_000_000)),
            "Lên đến 1.5 tỷ VND"
        );
        assert_eq!(format_salary(None, None), "Thỏa thuận");
        assert_eq!(format_salary(Some(0), Some(0)), "Thỏa thuận");
        assert_eq!(format_salary(Some(500_000), None), "Từ 500,000 VND");
    }

    #[test]
    fn test_render_job_detail() {
        let rendered = render_job_detail(&job(7, "Lập trình viên Rust")).unwrap();
        assert!(rendered.starts_with("===== Lập trình viên Rust =====\n"));
        assert!(rendered.contains("Công ty: FPT Software"));
        assert!(rendered.contains("Loại hình: Full-time"));
        assert!(rendered.contains("Mức lương: 15 triệu - 30 triệu VND"));
        assert!(rendered.contains("Trạng thái: Đang tuyển"));
    }

    #[test]
    fn test_render_job_detail_rejects_blank_title() {
        let broken = JobItem {
            title: "  ".to_string(),
            ..job(1, "x")
        };
        assert_eq!(
            render_job_detail(&broken).unwrap_err(),
            RenderError::MissingData {
                view: "chi tiết việc làm",
                what: "tiêu đề",
            }
        );
    }

    #[test]
    fn test_render_job_detail_rejects_unknown_status() {
        let broken = JobItem {
            status: Some("archived".to_string()),
            ..job(1, "Tuyển kế toán")
        };
        let err = render_job_detail(&broken).unwrap_err();
        assert_eq!(
            err,
            RenderError::BadValue {
                view: "chi tiết việc làm",
                what: "trạng thái `archived`".to_string(),
            }
        );
    }

    #[test]
    fn test_render_job_list_shows_error_banner() {
        let mut state = ListState::new(1, 12);
        state.apply(Err(connector::ApiError::Server(
            "Lỗi khi lấy danh sách việc làm".to_string(),
        )));

        let rendered = render_job_list(&state);
        assert!(rendered.contains("Lỗi: Lỗi khi lấy danh sách việc làm"));
        assert!(!rendered.contains('#'));
    }

    #[test]
    fn test_render_job_list_footer() {
        let mut state = ListState::new(2, 12);
        state.apply(Ok(connector::Paged {
            success: true,
            message: None,
            data: vec![job(1, "Một"), job(2, "Hai")],
            pagination: Pagination {
                page: 2,
                limit: 12,
                total: 26,
                total_pages: 3,
            },
        }));

        let rendered = render_job_list(&state);
        assert!(rendered.contains("#1  Một | FPT Software | Hà Nội"));
        assert!(rendered.contains("Trang 2/3 (26 việc làm)"));
    }

    #[test]
    fn test_supervisor_falls_back_and_resets() {
        let mut supervisor = ViewSupervisor::new();

        let ok = supervisor.mount(|| Ok("nội dung".to_string()));
        assert_eq!(ok, "nội dung");
        assert!(supervisor.last_failure().is_none());

        let fallback = supervisor.mount(|| {
            Err(RenderError::MissingData {
                view: "chi tiết việc làm",
                what: "tiêu đề",
            })
        });
        assert!(fallback.contains("===== Lỗi hiển thị ====="));
        assert!(fallback.contains("Không thể hiển thị chi tiết việc làm: thiếu tiêu đề"));
        assert!(fallback.contains("Vui lòng quay lại trang trước hoặc thử lại."));
        assert!(supervisor.last_failure().is_some());

        supervisor.reset();
        assert!(supervisor.last_failure().is_none());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(
            application_status_label(ApplicationStatus::Pending),
            "Chờ xét duyệt"
        );
        assert_eq!(
            application_status_label(ApplicationStatus::Withdrawn),
            "Đã rút"
        );
        assert_eq!(job_status_label(JobStatus::Active), "Đang tuyển");
        assert_eq!(job_type_label("contract"), "Hợp đồng");
        assert_eq!(job_type_label("tự do"), "tự do");
    }

    #[test]
    fn test_render_unauthorized_names_required_role() {
        let rendered = render_unauthorized("/admin/users", "admin");
        assert!(rendered.contains("Trang: /admin/users"));
        assert!(rendered.contains("Yêu cầu vai trò: admin"));
    }
}

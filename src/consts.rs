/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub const JOBS_PER_PAGE: i64 = 12;
pub const APPLICATIONS_PER_PAGE: i64 = 10;
pub const USERS_PER_PAGE: i64 = 15;

/// Quiet period after the last edit before a CV draft is written out.
pub const DRAFT_AUTOSAVE_MS: u64 = 1000;

pub const UNKNOWN_ERROR_MESSAGE: &str = "Đã có lỗi xảy ra!";

pub const LOGIN_SUCCESS_MESSAGE: &str = "Đăng nhập thành công!";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Đăng ký thành công!";
pub const UPDATE_SUCCESS_MESSAGE: &str = "Cập nhật thành công!";
pub const DELETE_SUCCESS_MESSAGE: &str = "Xóa thành công!";
pub const APPLY_SUCCESS_MESSAGE: &str = "Ứng tuyển thành công!";
pub const SAVE_SUCCESS_MESSAGE: &str = "Lưu thành công!";

/// Browsable job categories: display name, URL slug and the category value
/// jobs are stored under on the server.
pub const JOB_CATEGORIES: &[(&str, &str, &str)] = &[
    ("IT - Phần mềm", "cong-nghe-thong-tin", "Công nghệ thông tin"),
    ("Marketing", "marketing-truyen-thong", "Marketing - Truyền thông"),
    ("Kinh doanh", "kinh-doanh-ban-hang", "Kinh doanh - Bán hàng"),
    ("Thiết kế", "thiet-ke-do-hoa", "Thiết kế - Đồ hoạ"),
    ("Tài chính", "ke-toan-tai-chinh", "Kế toán - Tài chính - Ngân hàng"),
    ("Nhân sự", "nhan-su-hanh-chinh", "Nhân sự - Hành chính"),
    ("Giáo dục", "giao-duc-dao-tao", "Giáo dục - Đào tạo"),
    ("Y tế", "y-te", "Y tế"),
];

pub fn category_value_for_slug(slug: &str) -> Option<&'static str> {
    JOB_CATEGORIES
        .iter()
        .find(|(_, category_slug, _)| *category_slug == slug)
        .map(|(_, _, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        assert_eq!(
            category_value_for_slug("cong-nghe-thong-tin"),
            Some("Công nghệ thông tin")
        );
        assert_eq!(category_value_for_slug("khong-ton-tai"), None);
    }
}

/*
 * SPDX-FileCopyrightText: 2025 ViecLam Team <dev@vieclam.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Field-level form validation. Every check is pure and returns the
//! Vietnamese message the server-side validation uses for the same field,
//! so a form rejected locally reads exactly like one rejected remotely.

use crate::consts;
use std::fmt;

/// Field name to message mapping for a rejected form, in form order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<(&'static str, String)>,
}

impl FormErrors {
    fn add(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.errors.push((field, message));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.errors.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, (field, message)) in self.errors.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email là bắt buộc".to_string());
    }
    if !email_shape_ok(email) {
        return Err("Email không hợp lệ".to_string());
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Tên không được để trống".to_string());
    }
    let length = trimmed.chars().count();
    if !(2..=50).contains(&length) {
        return Err("Tên phải từ 2-50 ký tự".to_string());
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace())
    {
        return Err("Tên chỉ chứa chữ cái".to_string());
    }
    Ok(())
}

pub fn validate_company_name(company_name: &str) -> Result<(), String> {
    if company_name.trim().is_empty() {
        return Err("Tên công ty là bắt buộc".to_string());
    }
    if company_name.trim().chars().count() < 2 {
        return Err("Tên công ty phải có ít nhất 2 ký tự".to_string());
    }
    if company_name.chars().count() > 100 {
        return Err("Tên công ty không được vượt quá 100 ký tự".to_string());
    }
    Ok(())
}

/// Vietnamese mobile numbers: `0` or `+84` followed by nine digits.
/// Whitespace is stripped before checking, so `0912 345 678` passes.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.trim().is_empty() {
        return Err("Số điện thoại là bắt buộc".to_string());
    }
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    let rest = compact
        .strip_prefix("+84")
        .or_else(|| compact.strip_prefix('0'));
    let ok = match rest {
        Some(digits) => digits.len() == 9 && digits.chars().all(|c| c.is_ascii_digit()),
        None => false,
    };
    if !ok {
        return Err("Số điện thoại không hợp lệ (VD: 0912345678)".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.trim().is_empty() {
        return Err("Mật khẩu là bắt buộc".to_string());
    }
    let length = password.chars().count();
    if length < 6 {
        return Err("Mật khẩu phải có ít nhất 6 ký tự".to_string());
    }
    if length > 50 {
        return Err("Mật khẩu không được vượt quá 50 ký tự".to_string());
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_number = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_number {
        return Err("Mật khẩu phải chứa cả chữ và số".to_string());
    }
    Ok(())
}

pub fn validate_confirm_password(password: &str, confirm_password: &str) -> Result<(), String> {
    if confirm_password.trim().is_empty() {
        return Err("Xác nhận mật khẩu là bắt buộc".to_string());
    }
    if password != confirm_password {
        return Err("Mật khẩu xác nhận không khớp".to_string());
    }
    Ok(())
}

pub fn validate_address(address: &str) -> Result<(), String> {
    if address.trim().is_empty() {
        return Err("Địa chỉ là bắt buộc".to_string());
    }
    if address.trim().chars().count() < 5 {
        return Err("Địa chỉ phải có ít nhất 5 ký tự".to_string());
    }
    if address.chars().count() > 200 {
        return Err("Địa chỉ không được vượt quá 200 ký tự".to_string());
    }
    Ok(())
}

/// Optional field: empty input is valid.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Ok(());
    }
    if description.chars().count() > 1000 {
        return Err("Mô tả không được vượt quá 1000 ký tự".to_string());
    }
    Ok(())
}

/// Optional field: empty input is valid. Scheme may be omitted; the host
/// needs a dot and a two-to-six letter suffix.
pub fn validate_website(website: &str) -> Result<(), String> {
    if website.trim().is_empty() {
        return Ok(());
    }
    let rest = website
        .strip_prefix("https://")
        .or_else(|| website.strip_prefix("http://"))
        .unwrap_or(website);
    let host = rest.split('/').next().unwrap_or("");
    let ok = match host.rsplit_once('.') {
        Some((name, tld)) => {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
                && (2..=6).contains(&tld.len())
                && tld.chars().all(|c| c.is_ascii_lowercase())
        }
        None => false,
    };
    if !ok {
        return Err("Website không hợp lệ (VD: https://example.com)".to_string());
    }
    Ok(())
}

/// Company tax codes are ten digits, or thirteen for branch offices.
pub fn validate_tax_code(tax_code: &str) -> Result<(), String> {
    if tax_code.trim().is_empty() {
        return Err("Mã số thuế là bắt buộc".to_string());
    }
    let all_digits = tax_code.chars().all(|c| c.is_ascii_digit());
    if !all_digits || !(tax_code.len() == 10 || tax_code.len() == 13) {
        return Err("Mã số thuế không hợp lệ (10 hoặc 13 chữ số)".to_string());
    }
    Ok(())
}

pub fn validate_job_title(title: &str) -> Result<(), String> {
    let length = title.trim().chars().count();
    if length == 0 {
        return Err("Tiêu đề công việc là bắt buộc".to_string());
    }
    if length < 10 {
        return Err("Tiêu đề phải có ít nhất 10 ký tự".to_string());
    }
    if length > 200 {
        return Err("Tiêu đề không được vượt quá 200 ký tự".to_string());
    }
    Ok(())
}

pub fn validate_job_description(description: &str) -> Result<(), String> {
    let length = description.trim().chars().count();
    if length == 0 {
        return Err("Mô tả công việc là bắt buộc".to_string());
    }
    if length < 50 {
        return Err("Mô tả phải có ít nhất 50 ký tự".to_string());
    }
    if length > 5000 {
        return Err("Mô tả không được vượt quá 5000 ký tự".to_string());
    }
    Ok(())
}

pub fn validate_job_category(category: &str) -> Result<(), String> {
    if category.trim().is_empty() {
        return Err("Danh mục công việc là bắt buộc".to_string());
    }
    let known = consts::JOB_CATEGORIES
        .iter()
        .any(|(_, _, value)| *value == category);
    if !known {
        return Err("Danh mục không hợp lệ. Vui lòng chọn từ danh sách có sẵn".to_string());
    }
    Ok(())
}

/// Bounds in VND. Either end may be open.
pub fn validate_salary_range(
    min_salary: Option<i64>,
    max_salary: Option<i64>,
) -> Result<(), String> {
    if let Some(min) = min_salary {
        if min < 0 {
            return Err("Lương tối thiểu phải là số dương".to_string());
        }
        if min < 1_000_000 {
            return Err("Lương tối thiểu phải ít nhất 1.000.000 VNĐ".to_string());
        }
    }
    if let Some(max) = max_salary {
        if max < 0 {
            return Err("Lương tối đa phải là số dương".to_string());
        }
        if max > 1_000_000_000 {
            return Err("Lương tối đa không được vượt quá 1.000.000.000 VNĐ".to_string());
        }
    }
    if let (Some(min), Some(max)) = (min_salary, max_salary) {
        if min >= max {
            return Err("Lương tối thiểu phải nhỏ hơn lương tối đa".to_string());
        }
    }
    Ok(())
}

fn require_password(password: &str) -> Result<(), String> {
    if password.trim().is_empty() {
        return Err("Mật khẩu là bắt buộc".to_string());
    }
    Ok(())
}

/// Login only checks presence of the password; its shape was enforced at
/// registration time.
pub fn validate_login(email: &str, password: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.add("email", validate_email(email));
    errors.add("password", require_password(password));
    errors.into_result()
}

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    phone: &str,
) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.add("name", validate_name(name));
    errors.add("email", validate_email(email));
    errors.add("password", validate_password(password));
    errors.add(
        "confirmPassword",
        validate_confirm_password(password, confirm_password),
    );
    if !phone.trim().is_empty() {
        errors.add("phone", validate_phone(phone));
    }
    errors.into_result()
}

#[allow(clippy::too_many_arguments)]
pub fn validate_employer_registration(
    email: &str,
    company_name: &str,
    phone: &str,
    password: &str,
    confirm_password: &str,
    address: &str,
    tax_code: &str,
    website: &str,
    description: &str,
) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.add("email", validate_email(email));
    errors.add("companyName", validate_company_name(company_name));
    errors.add("phone", validate_phone(phone));
    errors.add("password", validate_password(password));
    errors.add(
        "confirmPassword",
        validate_confirm_password(password, confirm_password),
    );
    errors.add("address", validate_address(address));
    errors.add("taxCode", validate_tax_code(tax_code));
    if !website.trim().is_empty() {
        errors.add("website", validate_website(website));
    }
    if !description.trim().is_empty() {
        errors.add("description", validate_description(description));
    }
    errors.into_result()
}

/// Phone stays optional after registration, so an emptied field is not an
/// error here.
pub fn validate_profile_update(name: &str, email: &str, phone: &str) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.add("name", validate_name(name));
    errors.add("email", validate_email(email));
    if !phone.trim().is_empty() {
        errors.add("phone", validate_phone(phone));
    }
    errors.into_result()
}

#[allow(clippy::too_many_arguments)]
pub fn validate_job_posting(
    title: &str,
    description: &str,
    category: &str,
    location: &str,
    min_salary: Option<i64>,
    max_salary: Option<i64>,
    requirements: &str,
    benefits: &str,
) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    errors.add("title", validate_job_title(title));
    errors.add("description", validate_job_description(description));
    errors.add("category", validate_job_category(category));
    if location.trim().is_empty() {
        errors.add(
            "location",
            Err("Địa điểm làm việc là bắt buộc".to_string()),
        );
    }
    errors.add("salary", validate_salary_range(min_salary, max_salary));
    if requirements.chars().count() > 5000 {
        errors.add(
            "requirements",
            Err("Yêu cầu không được vượt quá 5000 ký tự".to_string()),
        );
    }
    if benefits.chars().count() > 5000 {
        errors.add(
            "benefits",
            Err("Quyền lợi không được vượt quá 5000 ký tự".to_string()),
        );
    }
    errors.into_result()
}

pub fn validate_change_password(
    current_password: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    if current_password.trim().is_empty() {
        errors.add(
            "currentPassword",
            Err("Mật khẩu hiện tại không được để trống".to_string()),
        );
    }
    errors.add("newPassword", validate_password(new_password));
    errors.add(
        "confirmPassword",
        validate_confirm_password(new_password, confirm_password),
    );
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("nguyen.van.a@congty.vn").is_ok());

        assert_eq!(
            validate_email("").unwrap_err(),
            "Email là bắt buộc".to_string()
        );
        assert_eq!(
            validate_email("no-at-sign").unwrap_err(),
            "Email không hợp lệ".to_string()
        );
        assert!(validate_email("user@domain").is_err());
        assert!(validate_email("user name@domain.com").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user@domain.").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("abc123").is_ok());

        assert_eq!(
            validate_password("abcdef").unwrap_err(),
            "Mật khẩu phải chứa cả chữ và số".to_string()
        );
        assert_eq!(
            validate_password("12345").unwrap_err(),
            "Mật khẩu phải có ít nhất 6 ký tự".to_string()
        );
        assert_eq!(
            validate_password("").unwrap_err(),
            "Mật khẩu là bắt buộc".to_string()
        );
        assert_eq!(
            validate_password(&"a1".repeat(26)).unwrap_err(),
            "Mật khẩu không được vượt quá 50 ký tự".to_string()
        );
    }

    #[test]
    fn test_validate_confirm_password() {
        assert!(validate_confirm_password("x", "x").is_ok());
        assert_eq!(
            validate_confirm_password("x", "y").unwrap_err(),
            "Mật khẩu xác nhận không khớp".to_string()
        );
        assert_eq!(
            validate_confirm_password("x", "").unwrap_err(),
            "Xác nhận mật khẩu là bắt buộc".to_string()
        );
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Nguyễn Văn A").is_ok());
        assert_eq!(
            validate_name("A").unwrap_err(),
            "Tên phải từ 2-50 ký tự".to_string()
        );
        assert_eq!(
            validate_name("Anh 123").unwrap_err(),
            "Tên chỉ chứa chữ cái".to_string()
        );
        assert_eq!(
            validate_name("  ").unwrap_err(),
            "Tên không được để trống".to_string()
        );
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0912345678").is_ok());
        assert!(validate_phone("+84912345678").is_ok());
        assert!(validate_phone("0912 345 678").is_ok());

        assert_eq!(
            validate_phone("12345").unwrap_err(),
            "Số điện thoại không hợp lệ (VD: 0912345678)".to_string()
        );
        assert!(validate_phone("091234567").is_err());
        assert!(validate_phone("09123456789").is_err());
        assert!(validate_phone("+8491234567a").is_err());
        assert_eq!(
            validate_phone("").unwrap_err(),
            "Số điện thoại là bắt buộc".to_string()
        );
    }

    #[test]
    fn test_validate_tax_code() {
        assert!(validate_tax_code("0123456789").is_ok());
        assert!(validate_tax_code("0123456789012").is_ok());

        assert_eq!(
            validate_tax_code("12345678901").unwrap_err(),
            "Mã số thuế không hợp lệ (10 hoặc 13 chữ số)".to_string()
        );
        assert!(validate_tax_code("01234abcde").is_err());
        assert_eq!(
            validate_tax_code("").unwrap_err(),
            "Mã số thuế là bắt buộc".to_string()
        );
    }

    #[test]
    fn test_validate_website_optional() {
        assert!(validate_website("").is_ok());
        assert!(validate_website("https://example.com").is_ok());
        assert!(validate_website("http://congty.vn/tuyen-dung").is_ok());
        assert!(validate_website("example.com").is_ok());

        assert_eq!(
            validate_website("not a url").unwrap_err(),
            "Website không hợp lệ (VD: https://example.com)".to_string()
        );
        assert!(validate_website("https://nodot").is_err());
    }

    #[test]
    fn test_validate_description_optional() {
        assert!(validate_description("").is_ok());
        assert!(validate_description("Công ty phần mềm").is_ok());
        assert_eq!(
            validate_description(&"x".repeat(1001)).unwrap_err(),
            "Mô tả không được vượt quá 1000 ký tự".to_string()
        );
    }

    #[test]
    fn test_validate_login_checks_presence_only() {
        assert!(validate_login("user@example.com", "x").is_ok());

        let errors = validate_login("bad-email", "").unwrap_err();
        assert_eq!(errors.get("email"), Some("Email không hợp lệ"));
        assert_eq!(errors.get("password"), Some("Mật khẩu là bắt buộc"));
    }

    #[test]
    fn test_validate_registration() {
        assert!(
            validate_registration(
                "Nguyễn Văn A",
                "a@example.com",
                "abc123",
                "abc123",
                "0912345678",
            )
            .is_ok()
        );

        // Phone is optional for job seekers.
        assert!(validate_registration("Nguyễn Văn A", "a@example.com", "abc123", "abc123", "")
            .is_ok());

        let errors =
            validate_registration("A", "a@example.com", "abcdef", "abc123", "").unwrap_err();
        assert_eq!(errors.get("name"), Some("Tên phải từ 2-50 ký tự"));
        assert_eq!(
            errors.get("password"),
            Some("Mật khẩu phải chứa cả chữ và số")
        );
        assert_eq!(
            errors.get("confirmPassword"),
            Some("Mật khẩu xác nhận không khớp")
        );
        assert_eq!(errors.get("email"), None);
    }

    #[test]
    fn test_validate_employer_registration() {
        assert!(
            validate_employer_registration(
                "hr@congty.vn",
                "Công ty TNHH ABC",
                "0912345678",
                "abc123",
                "abc123",
                "12 Lý Thường Kiệt, Hà Nội",
                "0123456789",
                "",
                "",
            )
            .is_ok()
        );

        let errors =
            validate_employer_registration("", "", "", "", "", "", "", "", "").unwrap_err();
        assert_eq!(errors.get("email"), Some("Email là bắt buộc"));
        assert_eq!(errors.get("companyName"), Some("Tên công ty là bắt buộc"));
        assert_eq!(errors.get("phone"), Some("Số điện thoại là bắt buộc"));
        assert_eq!(errors.get("password"), Some("Mật khẩu là bắt buộc"));
        assert_eq!(
            errors.get("confirmPassword"),
            Some("Xác nhận mật khẩu là bắt buộc")
        );
        assert_eq!(errors.get("address"), Some("Địa chỉ là bắt buộc"));
        assert_eq!(errors.get("taxCode"), Some("Mã số thuế là bắt buộc"));
        // Optional fields left empty produce no entries.
        assert_eq!(errors.get("website"), None);
        assert_eq!(errors.get("description"), None);

        let errors = validate_employer_registration(
            "hr@congty.vn",
            "Công ty TNHH ABC",
            "0912345678",
            "abc123",
            "abc123",
            "12 Lý Thường Kiệt, Hà Nội",
            "0123456789",
            "not a url",
            "",
        )
        .unwrap_err();
        assert_eq!(
            errors.get("website"),
            Some("Website không hợp lệ (VD: https://example.com)")
        );
    }

    #[test]
    fn test_validate_change_password() {
        assert!(validate_change_password("old123", "new456", "new456").is_ok());

        let errors = validate_change_password("", "short", "short").unwrap_err();
        assert_eq!(
            errors.get("currentPassword"),
            Some("Mật khẩu hiện tại không được để trống")
        );
        assert_eq!(
            errors.get("newPassword"),
            Some("Mật khẩu phải có ít nhất 6 ký tự")
        );
    }

    #[test]
    fn test_form_errors_display_in_form_order() {
        let errors = validate_login("", "").unwrap_err();
        let rendered = errors.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec!["email: Email là bắt buộc", "password: Mật khẩu là bắt buộc"]
        );
    }

    #[test]
    fn test_validate_job_title() {
        assert!(validate_job_title("Tuyển lập trình viên backend").is_ok());

        assert_eq!(
            validate_job_title("").unwrap_err(),
            "Tiêu đề công việc là bắt buộc"
        );
        assert_eq!(
            validate_job_title("Tuyển gấp").unwrap_err(),
            "Tiêu đề phải có ít nhất 10 ký tự"
        );
        assert_eq!(
            validate_job_title(&"a".repeat(201)).unwrap_err(),
            "Tiêu đề không được vượt quá 200 ký tự"
        );
    }

    #[test]
    fn test_validate_salary_range() {
        assert!(validate_salary_range(Some(15_000_000), Some(30_000_000)).is_ok());
        assert!(validate_salary_range(None, None).is_ok());
        assert!(validate_salary_range(Some(2_000_000), None).is_ok());

        assert_eq!(
            validate_salary_range(Some(500_000), None).unwrap_err(),
            "Lương tối thiểu phải ít nhất 1.000.000 VNĐ"
        );
        assert_eq!(
            validate_salary_range(None, Some(2_000_000_000)).unwrap_err(),
            "Lương tối đa không được vượt quá 1.000.000.000 VNĐ"
        );
        assert_eq!(
            validate_salary_range(Some(30_000_000), Some(15_000_000)).unwrap_err(),
            "Lương tối thiểu phải nhỏ hơn lương tối đa"
        );
    }

    #[test]
    fn test_validate_job_posting() {
        let description = "Phát triển và vận hành các dịch vụ backend cho nền tảng tuyển dụng.";
        assert!(
            validate_job_posting(
                "Lập trình viên Rust (Hà Nội)",
                description,
                "Công nghệ thông tin",
                "Hà Nội",
                Some(15_000_000),
                Some(30_000_000),
                "",
                "",
            )
            .is_ok()
        );

        let errors = validate_job_posting(
            "Tuyển gấp",
            "Mô tả ngắn",
            "Danh mục lạ",
            "",
            Some(500_000),
            None,
            "",
            "",
        )
        .unwrap_err();
        assert_eq!(
            errors.get("title"),
            Some("Tiêu đề phải có ít nhất 10 ký tự")
        );
        assert_eq!(
            errors.get("description"),
            Some("Mô tả phải có ít nhất 50 ký tự")
        );
        assert_eq!(
            errors.get("category"),
            Some("Danh mục không hợp lệ. Vui lòng chọn từ danh sách có sẵn")
        );
        assert_eq!(
            errors.get("location"),
            Some("Địa điểm làm việc là bắt buộc")
        );
        assert_eq!(
            errors.get("salary"),
            Some("Lương tối thiểu phải ít nhất 1.000.000 VNĐ")
        );
    }
}

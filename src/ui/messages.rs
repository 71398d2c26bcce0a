//! Localized user-facing strings.

/// Alert shown when either field is empty after trimming.
pub const VALIDATION_ALERT: &str = "الرجاء إدخال رقم الهاتف والرسالة";

/// Status while the request is in flight.
pub const SENDING: &str = "جاري الإرسال...";

/// Status when the endpoint answers with a truthy `ok`.
pub const SENT: &str = "تم الإرسال بنجاح ✅";

/// Status when the endpoint answers with a falsy `ok`.
pub const SEND_FAILED: &str = "فشل الإرسال ❌";

/// Prefix placed before the error message when the request itself fails.
pub const ERROR_PREFIX: &str = "خطأ: ";

/// Status text for a failed request.
pub fn error_status(error: &impl std::fmt::Display) -> String {
    format!("{}{}", ERROR_PREFIX, error)
}

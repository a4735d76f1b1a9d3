/// Header carrying the shared admin password on create requests
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// How long browsers may cache a preflight response (24 hours)
pub const PREFLIGHT_MAX_AGE_SECS: u64 = 86_400;

// =============================================================================
// Messages
// =============================================================================

/// Returned for any HTTP method the endpoint does not serve
pub const ERR_METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Returned when the admin password is missing, unset or wrong
pub const ERR_INVALID_ADMIN_PASSWORD: &str = "Неверный пароль администратора";

/// Returned when any of the five record fields is missing or empty
pub const ERR_ALL_FIELDS_REQUIRED: &str = "Все поля обязательны для заполнения";

/// Returned for backend failures; details go to the log only
pub const ERR_INTERNAL: &str = "Internal server error";

/// Success message for a created record
pub const MSG_TRANSLATION_ADDED: &str = "Русификатор успешно добавлен";

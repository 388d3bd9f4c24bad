pub mod cookie;
pub mod error;
pub mod i18n;

pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use i18n::{current_locale, scope_locale};

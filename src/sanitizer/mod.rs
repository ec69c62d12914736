//! 清洗模块：白名单 HTML 清洗（解析、改写、序列化）
pub mod allowlist;
pub mod cleaner;
pub mod depth;
pub mod dom;

// 导出核心接口
pub use self::allowlist::{is_allowed_attr, is_allowed_tag, ALLOWED_ATTRS, ALLOWED_TAGS};
pub use self::cleaner::{escape_text, sanitize, visible_text, SanitizeReport, Sanitizer};
pub use self::depth::DEFAULT_MAX_DEPTH;
pub use self::dom::parse_body;

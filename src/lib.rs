//! portfolio-kit - 双语个人主页行为层
//! 白名单 HTML 清洗、本人编辑模式、语言切换、弹窗与滚动高亮状态

// 日志宏需在其他模块之前声明
#[macro_use]
mod log;

// 导出全局错误类型
pub use self::error::{PortfolioError, PfResult};

// 导出配置模块
pub use self::config::{SiteConfig, ConfigManager, CustomConfigBuilder};

// 导出清洗模块核心接口
pub use self::sanitizer::{
    sanitize, escape_text, visible_text, parse_body, Sanitizer, SanitizeReport, DEFAULT_MAX_DEPTH,
    is_allowed_tag, is_allowed_attr,
};

// 导出存储模块核心接口
pub use self::storage::{KeyValueStore, MemoryStore, StoreSnapshotManager};

// 导出工具模块核心接口
pub use self::utils::{PageQuery, Throttle};

// 导出页面模块核心接口
pub use self::page::{
    Lang, LangText, ModalKind, ModalState, PageState, PageInit, HostCommand, KeyOutcome,
    KeyInput, ShortcutAction, FocusBox, FocusContent, OwnerView, SavedFocus, ToolbarLabels,
    ScrollSpy, SectionOffset,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod sanitizer;
pub mod storage;
pub mod utils;
pub mod page;

//! 工具模块：查询参数解析、节流
pub mod query;
pub mod throttle;

// 导出核心接口
pub use self::query::PageQuery;
pub use self::throttle::Throttle;

//! 存储模块：键值存储接口、键名常量、本地快照读写
pub mod keys;
pub mod store;
pub mod cache;

// 导出核心接口
pub use self::keys::{FLAG_ON, FOCUS_EN_KEY, FOCUS_ZH_KEY, LANG_KEY, OWNER_KEY};
pub use self::store::{KeyValueStore, MemoryStore};
pub use self::cache::StoreSnapshotManager;

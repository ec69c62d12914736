//! 键值存储
//! 对应浏览器 localStorage：字符串键、字符串值，读写都不会失败

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 键值存储接口
pub trait KeyValueStore {
    /// 读取键值，不存在返回 None
    fn get_item(&self, key: &str) -> Option<String>;
    /// 写入键值（覆盖旧值）
    fn set_item(&mut self, key: &str, value: &str);
    /// 删除键
    fn remove_item(&mut self, key: &str);
    /// 全部键名（有序）
    fn keys(&self) -> Vec<String>;
}

/// 内存键值存储，可整体序列化为快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.items.keys().cloned().collect()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MemoryStore {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self {
            items: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

//! 全局配置管理,存储页面行为层的所有可配置项

use std::path::PathBuf;
use std::time::Duration;

use crate::page::lang::Lang;

/// 默认跟踪的页面分区（滚动高亮按此顺序判断）
pub const DEFAULT_SECTION_IDS: [&str; 6] = [
    "#home", "#education", "#current", "#projects", "#notes", "#posts",
];

/// 全局配置
#[derive(Debug, Clone)]
pub struct SiteConfig {
    // 本地存储快照路径（对应浏览器 localStorage）
    pub store_path: PathBuf,
    // 无查询参数、无存储记录时的默认语言
    pub default_lang: Lang,
    // 顶部导航高度（像素），滚动定位时扣除
    pub nav_offset: f64,
    // 滚动高亮提前量（像素）
    pub scroll_lookahead: f64,
    // 滚动事件节流间隔
    pub scroll_throttle: Duration,
    // 参与滚动高亮的分区 id
    pub section_ids: Vec<String>,
    // 提示条显示时长
    pub toast_duration: Duration,
    // 单个编辑区允许保存的最大 HTML 长度（字节）
    pub max_focus_len: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("portfolio_store.json"),
            default_lang: Lang::Zh,
            nav_offset: 90.0,
            scroll_lookahead: 120.0,
            scroll_throttle: Duration::from_millis(100),
            section_ids: DEFAULT_SECTION_IDS.iter().map(|s| s.to_string()).collect(),
            toast_duration: Duration::from_millis(1500),
            max_focus_len: 64 * 1024,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> SiteConfig {
        SiteConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: SiteConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SiteConfig::default(),
        }
    }

    pub fn store_path(mut self, path: PathBuf) -> Self {
        self.config.store_path = path;
        self
    }

    pub fn default_lang(mut self, lang: Lang) -> Self {
        self.config.default_lang = lang;
        self
    }

    pub fn nav_offset(mut self, offset: f64) -> Self {
        self.config.nav_offset = offset;
        self
    }

    pub fn scroll_lookahead(mut self, lookahead: f64) -> Self {
        self.config.scroll_lookahead = lookahead;
        self
    }

    pub fn scroll_throttle(mut self, wait: Duration) -> Self {
        self.config.scroll_throttle = wait;
        self
    }

    pub fn section_ids(mut self, ids: Vec<String>) -> Self {
        self.config.section_ids = ids;
        self
    }

    pub fn toast_duration(mut self, duration: Duration) -> Self {
        self.config.toast_duration = duration;
        self
    }

    pub fn max_focus_len(mut self, len: usize) -> Self {
        self.config.max_focus_len = len;
        self
    }

    pub fn build(self) -> SiteConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert_eq!(config.default_lang, Lang::Zh);
        assert_eq!(config.nav_offset, 90.0);
        assert_eq!(config.scroll_lookahead, 120.0);
        assert_eq!(config.scroll_throttle, Duration::from_millis(100));
        assert_eq!(config.section_ids.first().map(String::as_str), Some("#home"));
        assert_eq!(config.section_ids.len(), 6);
    }

    #[test]
    fn test_custom_builder() {
        let config = ConfigManager::custom()
            .store_path(PathBuf::from("/tmp/other.json"))
            .default_lang(Lang::En)
            .nav_offset(60.0)
            .max_focus_len(10)
            .build();

        assert_eq!(config.store_path, PathBuf::from("/tmp/other.json"));
        assert_eq!(config.default_lang, Lang::En);
        assert_eq!(config.nav_offset, 60.0);
        assert_eq!(config.max_focus_len, 10);
        // 未设置的项保持默认
        assert_eq!(config.scroll_lookahead, 120.0);
    }
}

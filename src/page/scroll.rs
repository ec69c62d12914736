//! 平滑滚动与导航高亮

use std::time::Instant;

use crate::config::SiteConfig;
use crate::utils::Throttle;

/// 无分区命中时高亮的锚点
pub const DEFAULT_SECTION: &str = "#home";

/// 分区位置
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    /// 分区锚点（含 `#`）
    pub id: String,
    /// 分区相对文档顶部的偏移
    pub offset_top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

/// 当前应高亮的分区：按顺序取最后一个 offset_top <= scroll_y + lookahead 的分区
pub fn active_section(scroll_y: f64, lookahead: f64, sections: &[SectionOffset]) -> &str {
    let pos = scroll_y + lookahead;
    sections
        .iter()
        .filter(|section| section.offset_top <= pos)
        .last()
        .map(|section| section.id.as_str())
        .unwrap_or(DEFAULT_SECTION)
}

/// 点击导航锚点后的滚动目标，扣除顶部导航高度
pub fn scroll_target(target_viewport_top: f64, scroll_y: f64, nav_offset: f64) -> f64 {
    target_viewport_top + scroll_y - nav_offset
}

/// 只有页内锚点链接（`#` 开头）走平滑滚动
pub fn is_in_page_link(href: &str) -> bool {
    href.starts_with('#')
}

/// 滚动高亮：节流后的滚动事件驱动当前分区
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    lookahead: f64,
    nav_offset: f64,
    throttle: Throttle,
    sections: Vec<SectionOffset>,
    current: String,
}

impl ScrollSpy {
    /// 按配置中的分区顺序建立；页面上不存在的分区（offsets 中缺失）被跳过
    pub fn new(config: &SiteConfig, offsets: &[SectionOffset]) -> Self {
        let sections = config
            .section_ids
            .iter()
            .filter_map(|id| offsets.iter().find(|o| &o.id == id).cloned())
            .collect();
        Self {
            lookahead: config.scroll_lookahead,
            nav_offset: config.nav_offset,
            throttle: Throttle::new(config.scroll_throttle),
            sections,
            current: DEFAULT_SECTION.to_string(),
        }
    }

    /// 处理一次滚动事件；被节流时返回 None，否则返回当前高亮分区
    pub fn on_scroll(&mut self, now: Instant, scroll_y: f64) -> Option<&str> {
        if !self.throttle.try_acquire(now) {
            return None;
        }
        let active = active_section(scroll_y, self.lookahead, &self.sections);
        if active != self.current {
            trace!("导航高亮切换：{} -> {}", self.current, active);
            self.current = active.to_string();
        }
        Some(self.current.as_str())
    }

    /// 点击导航锚点后的滚动目标，按配置的导航高度扣除
    pub fn scroll_target(&self, target_viewport_top: f64, scroll_y: f64) -> f64 {
        scroll_target(target_viewport_top, scroll_y, self.nav_offset)
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// 导航链接是否高亮
    pub fn is_link_active(&self, href: &str) -> bool {
        href == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use std::time::Duration;

    fn page_sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset::new("#home", 0.0),
            SectionOffset::new("#education", 800.0),
            SectionOffset::new("#projects", 1600.0),
        ]
    }

    #[test]
    fn test_active_section() {
        let sections = page_sections();
        assert_eq!(active_section(0.0, 120.0, &sections), "#home");
        assert_eq!(active_section(679.0, 120.0, &sections), "#home");
        assert_eq!(active_section(680.0, 120.0, &sections), "#education");
        assert_eq!(active_section(5000.0, 120.0, &sections), "#projects");
        assert_eq!(active_section(0.0, 120.0, &[]), DEFAULT_SECTION);
        assert_eq!(
            active_section(0.0, 0.0, &[SectionOffset::new("#notes", 50.0)]),
            DEFAULT_SECTION
        );
    }

    #[test]
    fn test_scroll_target_and_links() {
        assert_eq!(scroll_target(300.0, 1000.0, 90.0), 1210.0);
        assert!(is_in_page_link("#notes"));
        assert!(!is_in_page_link("https://example.com/#notes"));
    }

    #[test]
    fn test_scroll_spy_target_uses_nav_offset() {
        let spy = ScrollSpy::new(&ConfigManager::get_default(), &page_sections());
        assert_eq!(spy.scroll_target(300.0, 1000.0), 1210.0);

        let config = ConfigManager::custom().nav_offset(60.0).build();
        let spy = ScrollSpy::new(&config, &page_sections());
        assert_eq!(spy.scroll_target(300.0, 1000.0), 1240.0);
    }

    #[test]
    fn test_scroll_spy_throttles_and_tracks() {
        let config = ConfigManager::get_default();
        let mut spy = ScrollSpy::new(&config, &page_sections());
        let start = Instant::now();

        assert_eq!(spy.on_scroll(start, 900.0), Some("#education"));
        // 100ms 内的事件被丢弃，高亮不变
        assert_eq!(spy.on_scroll(start + Duration::from_millis(10), 2000.0), None);
        assert_eq!(spy.current(), "#education");
        assert_eq!(
            spy.on_scroll(start + Duration::from_millis(120), 2000.0),
            Some("#projects")
        );
        assert!(spy.is_link_active("#projects"));
        assert!(!spy.is_link_active("#home"));
    }

    #[test]
    fn test_scroll_spy_uses_configured_order() {
        let config = ConfigManager::custom()
            .section_ids(vec!["#home".to_string(), "#posts".to_string()])
            .build();
        let mut spy = ScrollSpy::new(&config, &page_sections());
        // #education / #projects 不在配置中，不参与高亮
        assert_eq!(spy.on_scroll(Instant::now(), 5000.0), Some("#home"));
    }
}

//! “最近在忙”本人编辑模式
//! 编辑内容保存前必须经过白名单清洗；加载时再清洗一次，存储内容可被本地篡改

use std::time::Duration;

use crate::config::SiteConfig;
use crate::error::{PfResult, PortfolioError};
use crate::page::lang::Lang;
use crate::sanitizer::{escape_text, Sanitizer};
use crate::storage::{KeyValueStore, FLAG_ON, FOCUS_EN_KEY, FOCUS_ZH_KEY, OWNER_KEY};
use crate::utils::PageQuery;

/// 保存成功提示
pub const SAVED_TOAST: &str = "已保存 / Saved";
/// 工具栏标题
pub const TOOLBAR_LABEL: &str = "编辑模式 (Owner)";
/// 保存按钮
pub const SAVE_BUTTON_LABEL: &str = "保存 Ctrl+S";
/// 退出按钮
pub const EXIT_BUTTON_LABEL: &str = "退出";

/// 查询参数 owner=1 或存储开关为 "1" 时处于编辑模式
pub fn is_owner_mode(query: &PageQuery, store: &impl KeyValueStore) -> bool {
    query.owner_requested() || store.get_item(OWNER_KEY).as_deref() == Some(FLAG_ON)
}

/// 写入编辑模式开关：开启写 "1"，关闭删除键
pub fn set_owner_mode(store: &mut impl KeyValueStore, on: bool) {
    if on {
        store.set_item(OWNER_KEY, FLAG_ON);
    } else {
        store.remove_item(OWNER_KEY);
    }
    debug!("编辑模式：{}", if on { "开启" } else { "关闭" });
}

/// 粘贴只接受纯文本，转义后插入
pub fn paste_as_text(text: &str) -> String {
    escape_text(text)
}

/// 编辑区渲染状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerView {
    /// 中英文编辑区是否可编辑
    pub editable: bool,
    /// 是否显示编辑工具栏
    pub show_toolbar: bool,
    /// 帖子卡片始终只读
    pub posts_read_only: bool,
}

impl OwnerView {
    pub fn new(owner_mode: bool) -> Self {
        Self {
            editable: owner_mode,
            show_toolbar: owner_mode,
            posts_read_only: true,
        }
    }

    /// 工具栏文案；不显示工具栏时为 None
    pub fn toolbar_labels(&self) -> Option<ToolbarLabels> {
        self.show_toolbar.then_some(ToolbarLabels {
            title: TOOLBAR_LABEL,
            save: SAVE_BUTTON_LABEL,
            exit: EXIT_BUTTON_LABEL,
        })
    }
}

/// 编辑工具栏文案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarLabels {
    pub title: &'static str,
    pub save: &'static str,
    pub exit: &'static str,
}

/// 编辑区内容（中英文各一份），None 表示沿用页面自带内容
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusContent {
    pub zh: Option<String>,
    pub en: Option<String>,
}

impl FocusContent {
    pub fn get(&self, lang: Lang) -> Option<&str> {
        match lang {
            Lang::Zh => self.zh.as_deref(),
            Lang::En => self.en.as_deref(),
        }
    }
}

/// 保存结果：清洗后的内容需回写到编辑区
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFocus {
    pub zh: String,
    pub en: String,
    pub toast: &'static str,
    /// 提示条显示时长
    pub toast_duration: Duration,
}

/// 编辑区读写
pub struct FocusBox<'a> {
    sanitizer: &'a Sanitizer,
    max_len: usize,
    toast_duration: Duration,
}

impl<'a> FocusBox<'a> {
    pub fn new(config: &SiteConfig, sanitizer: &'a Sanitizer) -> Self {
        Self {
            sanitizer,
            max_len: config.max_focus_len,
            toast_duration: config.toast_duration,
        }
    }

    /// 读取已保存内容；缺失或为空时为 None
    pub fn load(&self, store: &impl KeyValueStore) -> FocusContent {
        let read = |key: &str| {
            store
                .get_item(key)
                .filter(|saved| !saved.is_empty())
                .map(|saved| self.sanitizer.clean(&saved))
        };
        FocusContent {
            zh: read(FOCUS_ZH_KEY),
            en: read(FOCUS_EN_KEY),
        }
    }

    /// 清洗并保存两个编辑区的内容
    pub fn save(
        &self,
        store: &mut impl KeyValueStore,
        zh_dirty: &str,
        en_dirty: &str,
    ) -> PfResult<SavedFocus> {
        for (lang, dirty) in [(Lang::Zh, zh_dirty), (Lang::En, en_dirty)] {
            if dirty.len() > self.max_len {
                return Err(PortfolioError::InvalidInput(format!(
                    "{}编辑区内容过长：{} 字节，上限 {} 字节",
                    lang,
                    dirty.len(),
                    self.max_len
                )));
            }
        }

        let zh = self.sanitizer.clean(zh_dirty);
        let en = self.sanitizer.clean(en_dirty);
        store.set_item(FOCUS_ZH_KEY, &zh);
        store.set_item(FOCUS_EN_KEY, &en);
        debug!("编辑区已保存，中文{}字节，英文{}字节", zh.len(), en.len());

        Ok(SavedFocus {
            zh,
            en,
            toast: SAVED_TOAST,
            toast_duration: self.toast_duration,
        })
    }
}

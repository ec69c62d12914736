//! 语言切换
//! 解析顺序：查询参数 lang -> 存储中的 ws_lang -> 默认语言

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;
use crate::storage::{KeyValueStore, LANG_KEY};
use crate::utils::PageQuery;

/// 页面语言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Zh,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }

    /// 切换到另一种语言
    pub fn toggled(&self) -> Lang {
        match self {
            Lang::Zh => Lang::En,
            Lang::En => Lang::Zh,
        }
    }

    /// `<html lang>` 的取值
    pub fn document_lang(&self) -> &'static str {
        match self {
            Lang::Zh => "zh-CN",
            Lang::En => "en",
        }
    }

    /// 切换按钮上显示的目标语言名
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Lang::Zh => "English",
            Lang::En => "中文",
        }
    }

    /// 分语种内容块（data-lang）是否显示
    pub fn shows_block(&self, block_lang: &str) -> bool {
        block_lang == self.as_str()
    }

    /// 按查询参数、存储、默认值的顺序确定当前语言
    /// 存储中的非法值视为未设置
    pub fn resolve(query: &PageQuery, store: &impl KeyValueStore, default: Lang) -> Lang {
        if let Some(lang) = query.lang.as_deref().and_then(|v| v.parse().ok()) {
            return lang;
        }
        match store.get_item(LANG_KEY) {
            Some(saved) => saved.parse().unwrap_or_else(|_| {
                warn!("存储中的语言值无效：{}，使用默认语言", saved);
                default
            }),
            None => default,
        }
    }
}

impl FromStr for Lang {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh" => Ok(Lang::Zh),
            "en" => Ok(Lang::En),
            other => Err(PortfolioError::InvalidInput(format!("不支持的语言：{}", other))),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 双语文案（对应元素上的 data-zh / data-en）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangText {
    pub zh: String,
    pub en: String,
}

impl LangText {
    pub fn new(zh: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            zh: zh.into(),
            en: en.into(),
        }
    }

    pub fn pick(&self, lang: Lang) -> &str {
        match lang {
            Lang::Zh => &self.zh,
            Lang::En => &self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_lang_basics() {
        assert_eq!(Lang::Zh.toggled(), Lang::En);
        assert_eq!(Lang::En.toggled().toggled(), Lang::En);
        assert_eq!(Lang::Zh.document_lang(), "zh-CN");
        assert_eq!(Lang::En.document_lang(), "en");
        assert_eq!(Lang::Zh.toggle_label(), "English");
        assert_eq!(Lang::En.toggle_label(), "中文");
        assert!(Lang::En.shows_block("en"));
        assert!(!Lang::En.shows_block("zh"));
        assert!("fr".parse::<Lang>().is_err());
        assert_eq!(Lang::En.to_string(), "en");
    }

    #[test]
    fn test_resolve_order() {
        let empty = MemoryStore::new();
        let saved_en = MemoryStore::from([(LANG_KEY, "en")]);
        let garbage = MemoryStore::from([(LANG_KEY, "klingon")]);

        let no_query = PageQuery::default();
        let query_zh = PageQuery::from_query_str("lang=zh");
        let query_bad = PageQuery::from_query_str("lang=de");

        assert_eq!(Lang::resolve(&no_query, &empty, Lang::Zh), Lang::Zh);
        assert_eq!(Lang::resolve(&no_query, &saved_en, Lang::Zh), Lang::En);
        assert_eq!(Lang::resolve(&query_zh, &saved_en, Lang::Zh), Lang::Zh);
        assert_eq!(Lang::resolve(&query_bad, &saved_en, Lang::Zh), Lang::En);
        assert_eq!(Lang::resolve(&no_query, &garbage, Lang::En), Lang::En);
    }

    #[test]
    fn test_lang_text_pick() {
        let text = LangText::new("教育经历", "Education");
        assert_eq!(text.pick(Lang::Zh), "教育经历");
        assert_eq!(text.pick(Lang::En), "Education");
    }
}

//! 页面查询参数解析
//! 只读取 lang / owner / view 三个参数和锚点，重复参数取第一个值

use url::{form_urlencoded, Url};

use crate::error::PfResult;

/// 页面查询参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub lang: Option<String>,
    pub owner: Option<String>,
    pub view: Option<String>,
    /// 锚点（含 `#`），为空时为 None
    pub hash: Option<String>,
}

impl PageQuery {
    /// 从完整 URL 解析
    pub fn from_url(url: &str) -> PfResult<Self> {
        let url = Url::parse(url)?;
        let mut query = Self::from_pairs(url.query_pairs());
        query.hash = url
            .fragment()
            .filter(|f| !f.is_empty())
            .map(|f| format!("#{}", f));
        Ok(query)
    }

    /// 从查询串解析（可带前导 `?`）
    pub fn from_query_str(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: Iterator<Item = (std::borrow::Cow<'a, str>, std::borrow::Cow<'a, str>)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "lang" => &mut query.lang,
                "owner" => &mut query.owner,
                "view" => &mut query.view,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        query
    }

    /// owner=1 时开启编辑模式
    pub fn owner_requested(&self) -> bool {
        self.owner.as_deref() == Some("1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_url() {
        let url = "https://example.com/?lang=en&owner=1&view=pro#projects";
        let query = PageQuery::from_url(url).unwrap();
        assert_eq!(query.lang.as_deref(), Some("en"));
        assert!(query.owner_requested());
        assert_eq!(query.view.as_deref(), Some("pro"));
        assert_eq!(query.hash.as_deref(), Some("#projects"));
    }

    #[test]
    fn test_from_query_str_first_value_wins() {
        let query = PageQuery::from_query_str("?lang=zh&lang=en&owner=0&utm=x");
        assert_eq!(query.lang.as_deref(), Some("zh"));
        assert!(!query.owner_requested());
        assert_eq!(query.view, None);
        assert_eq!(query.hash, None);
    }

    #[test]
    fn test_empty_fragment_and_bad_url() {
        let query = PageQuery::from_url("https://example.com/#").unwrap();
        assert_eq!(query.hash, None);
        assert!(PageQuery::from_url("no scheme here").is_err());
    }
}

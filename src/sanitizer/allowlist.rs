//! 白名单常量
//! 进程级只读集合，首次使用时初始化，之后不再修改

use std::collections::HashSet;

use markup5ever::{local_name, LocalName};
use once_cell::sync::Lazy;

/// 允许保留的标签（HTML 命名空间，小写）
pub static ALLOWED_TAGS: Lazy<HashSet<LocalName>> = Lazy::new(|| {
    [
        local_name!("h1"),
        local_name!("h2"),
        local_name!("h3"),
        local_name!("h4"),
        local_name!("h5"),
        local_name!("h6"),
        local_name!("p"),
        local_name!("ul"),
        local_name!("ol"),
        local_name!("li"),
        local_name!("strong"),
        local_name!("em"),
        local_name!("b"),
        local_name!("i"),
        local_name!("u"),
        local_name!("br"),
        local_name!("hr"),
        local_name!("blockquote"),
        local_name!("code"),
        local_name!("pre"),
    ]
    .into_iter()
    .collect()
});

/// 允许保留的属性：为空，任何属性都不保留
pub static ALLOWED_ATTRS: Lazy<HashSet<LocalName>> = Lazy::new(HashSet::new);

/// 标签是否在白名单内（大小写不敏感）
pub fn is_allowed_tag(tag: &str) -> bool {
    ALLOWED_TAGS.contains(&LocalName::from(tag.to_ascii_lowercase()))
}

/// 属性是否在白名单内（大小写不敏感）
pub fn is_allowed_attr(attr: &str) -> bool {
    ALLOWED_ATTRS.contains(&LocalName::from(attr.to_ascii_lowercase()))
}

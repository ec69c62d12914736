//! 惰性 HTML 文档树
//! 用 markup5ever_rcdom 承载解析结果，按浏览器规则解析但不执行任何脚本
//! 这里只补充 body 上下文解析与几个遍历工具，遍历一律走显式栈，深层嵌套不会爆栈

use std::cell::RefCell;

use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_document, ParseOpts};
use markup5ever::{local_name, ns};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};
use tendril::{StrTendril, TendrilSink};

/// 以 <body> 为插入上下文按 HTML5 规则解析片段（等价于给编辑区设置 innerHTML）
/// 先送入一个 body 起始标签：首部空白得以保留，script/style/title 等留在 body 内而不会被移进 head
/// 关闭脚本标志（与浏览器中脱离页面的解析一致），noscript 按普通元素处理
pub fn parse_body(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut parser = parse_document(RcDom::default(), opts);
    parser.process(StrTendril::from_slice("<body>"));
    parser.process(StrTendril::from(html));
    parser.finish()
}

/// 找到 <body> 元素；解析器总会补全 html/body，这里仍按 Option 返回
pub fn body(dom: &RcDom) -> Option<Handle> {
    let html = find_html_child(&dom.document, "html")?;
    find_html_child(&html, "body")
}

fn find_html_child(parent: &Handle, local: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|node| html_local_name(node) == Some(local))
        .cloned()
}

/// HTML 命名空间下的元素名（小写）
pub fn html_local_name(node: &Node) -> Option<&str> {
    match node.data {
        NodeData::Element { ref name, .. } if name.ns == ns!(html) => Some(&*name.local),
        _ => None,
    }
}

/// 新建一个脱离文档的文本节点
pub fn new_text(text: impl Into<StrTendril>) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(text.into()),
    })
}

/// 子树的可见文本（等价于 DOM 的 textContent，注释与模板内容不计入）
pub fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    let mut stack: Vec<Handle> = node.children.borrow().iter().rev().cloned().collect();
    while let Some(current) = stack.pop() {
        if let NodeData::Text { ref contents } = current.data {
            out.push_str(&contents.borrow());
        }
        stack.extend(current.children.borrow().iter().rev().cloned());
    }
    out
}

/// 判断元素是否为 <pre>（序列化时需要补回被解析器吞掉的首个换行）
pub fn is_pre(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { ref name, .. }
        if name.ns == ns!(html) && name.local == local_name!("pre"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_body(html: &str) -> (RcDom, Handle) {
        let dom = parse_body(html);
        let body = body(&dom).unwrap();
        (dom, body)
    }

    #[test]
    fn test_parse_places_content_in_body() {
        let (_dom, body) = parsed_body("<p>hi</p>");
        let children = body.children.borrow();
        assert_eq!(children.len(), 1);
        assert_eq!(html_local_name(&children[0]), Some("p"));
        assert_eq!(text_content(&body), "hi");
    }

    #[test]
    fn test_head_only_tags_stay_in_body() {
        let (_dom, body) = parsed_body("<script>alert(1)</script><title>t</title>hello");
        assert_eq!(body.children.borrow().len(), 3);
        assert_eq!(text_content(&body), "alert(1)thello");
    }

    #[test]
    fn test_leading_whitespace_is_kept() {
        let (_dom, body) = parsed_body("  <p>x</p>");
        assert_eq!(text_content(&body), "  x");
    }

    #[test]
    fn test_text_content_skips_comments() {
        let (_dom, body) = parsed_body("<p>a<!-- hidden -->b<b>c</b></p>");
        assert_eq!(text_content(&body), "abc");
    }

    #[test]
    fn test_adjacent_text_is_merged() {
        let (_dom, body) = parsed_body("a&amp;b");
        assert_eq!(body.children.borrow().len(), 1);
        assert_eq!(text_content(&body), "a&b");
    }

    #[test]
    fn test_misnested_markup_is_recovered() {
        let (dom, body) = parsed_body("<b><i>x</b>y</i>");
        assert_eq!(text_content(&body), "xy");
        assert!(!dom.errors.borrow().is_empty());
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        // span 不触发作用域查找，解析是线性的；遍历与析构都不能递归
        let depth = 20_000;
        let html = format!("{}x{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let (dom, body) = parsed_body(&html);
        assert_eq!(text_content(&body), "x");
        drop(body);
        drop(dom);
    }

    #[test]
    fn test_template_contents_are_not_visible_text() {
        let (_dom, body) = parsed_body("<template><p>inner</p></template>after");
        assert_eq!(text_content(&body), "after");
    }

    #[test]
    fn test_new_text_is_detached() {
        let node = new_text("x");
        assert!(node.parent.take().is_none());
        assert_eq!(html_local_name(&node), None);
    }
}

//! 白名单 HTML 清洗器
//! 解析 -> 前序遍历（显式工作栈）-> 序列化，任何输入都返回某个清洗结果，从不报错
//!
//! 规则：
//! 1. 白名单外的元素整棵替换为一个文本节点，内容为其全部后代文本，原子节点不再单独保留
//! 2. 白名单内的元素删除全部非白名单属性（当前白名单为空，即删除所有属性），继续处理子节点
//! 3. 注释节点直接丢弃，文本节点原样保留
//!
//! 白名单元素之间也可能被再次解析重排（如 <p> 内的 <li>），因此重复清洗直到输出不再变化；
//! 嵌套过深或多轮仍不收敛时降级为转义后的纯文本

use std::collections::HashSet;
use std::io;
use std::rc::Rc;

use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use markup5ever::{ns, LocalName, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData};

use super::allowlist::{ALLOWED_ATTRS, ALLOWED_TAGS};
use super::depth::{self, DEFAULT_MAX_DEPTH};
use super::dom::{body, is_pre, new_text, parse_body, text_content};

/// 输出收敛前最多允许的改写轮数
const MAX_PASSES: usize = 4;

/// 单次清洗的统计信息（元素与属性计数取自第一轮）
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeReport {
    /// 保留下来的元素数
    pub kept_elements: usize,
    /// 被展平成文本的元素数
    pub flattened_elements: usize,
    /// 删除的属性数
    pub stripped_attrs: usize,
    /// 丢弃的注释数
    pub dropped_comments: usize,
    /// 解析阶段的语法错误数
    pub parse_errors: usize,
    /// 输出发生变化的轮数，1 表示第一轮结果即稳定
    pub passes: usize,
    /// 是否降级为纯文本输出
    pub text_only: bool,
}

impl SanitizeReport {
    /// 输入是否已经是干净的（没有任何结构被改动）
    pub fn is_untouched(&self) -> bool {
        self.flattened_elements == 0
            && self.stripped_attrs == 0
            && self.dropped_comments == 0
            && self.passes <= 1
            && !self.text_only
    }
}

/// 白名单清洗器
#[derive(Debug, Clone, Copy)]
pub struct Sanitizer {
    tags: &'static HashSet<LocalName>,
    attrs: &'static HashSet<LocalName>,
    max_depth: usize,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer {
    pub fn new() -> Self {
        Self {
            tags: &ALLOWED_TAGS,
            attrs: &ALLOWED_ATTRS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// 设置允许的最大嵌套深度，超过时整段降级为纯文本
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// 清洗 HTML 片段
    pub fn clean(&self, dirty: &str) -> String {
        self.clean_with_report(dirty).0
    }

    /// 清洗 HTML 片段，并返回统计信息
    pub fn clean_with_report(&self, dirty: &str) -> (String, SanitizeReport) {
        if dirty.is_empty() {
            return (String::new(), SanitizeReport::default());
        }

        let scan = depth::scan(dirty);
        if scan.max_depth > self.max_depth {
            warn!(
                "HTML嵌套深度{}超过上限{}，降级为纯文本",
                scan.max_depth, self.max_depth
            );
            let report = SanitizeReport {
                text_only: true,
                ..Default::default()
            };
            return (escape_text(&scan.text), report);
        }

        let (mut clean, mut report) = self.pass(dirty);
        report.passes = 1;
        loop {
            let (next, _) = self.pass(&clean);
            if next == clean {
                break;
            }
            if report.passes >= MAX_PASSES {
                warn!("HTML清洗{}轮后仍未收敛，降级为纯文本", MAX_PASSES);
                clean = escape_text(&visible_text(&next));
                report.text_only = true;
                break;
            }
            clean = next;
            report.passes += 1;
        }

        debug!(
            "HTML清洗完成：{}->{}字节，保留{}，展平{}，删属性{}，删注释{}，轮数{}",
            dirty.len(),
            clean.len(),
            report.kept_elements,
            report.flattened_elements,
            report.stripped_attrs,
            report.dropped_comments,
            report.passes
        );

        (clean, report)
    }

    /// 字节输入：非法 UTF-8 序列替换为 U+FFFD 后再清洗
    pub fn clean_bytes(&self, dirty: &[u8]) -> String {
        self.clean(&String::from_utf8_lossy(dirty))
    }

    /// 一轮：解析 -> 改写 -> 序列化
    fn pass(&self, dirty: &str) -> (String, SanitizeReport) {
        let mut report = SanitizeReport::default();
        let dom = parse_body(dirty);
        report.parse_errors = dom.errors.borrow().len();

        let Some(body) = body(&dom) else {
            warn!("解析结果缺少 body 元素，返回空字符串");
            return (String::new(), report);
        };

        self.walk(&body, &mut report);
        (serialize_children(&body), report)
    }

    /// 遍历 root 的后代，按白名单改写
    /// 每个父节点只处理一次：取出子节点列表，逐个决定保留/展平/丢弃，再写回
    fn walk(&self, root: &Handle, report: &mut SanitizeReport) {
        let mut pending = vec![root.clone()];

        while let Some(parent) = pending.pop() {
            let children = std::mem::take(&mut *parent.children.borrow_mut());
            let mut kept = Vec::with_capacity(children.len());

            for child in children {
                match child.data {
                    NodeData::Element { ref name, ref attrs, .. } => {
                        if !self.allows(name) {
                            // 展平：整棵子树替换为其可见文本
                            let text = text_content(&child);
                            trace!("展平元素 <{}>，文本长度{}", name.local, text.len());
                            report.flattened_elements += 1;
                            if !text.is_empty() {
                                kept.push(new_text(text));
                            }
                            continue;
                        }

                        let mut attrs = attrs.borrow_mut();
                        let before = attrs.len();
                        attrs.retain(|attr| self.attrs.contains(&attr.name.local));
                        report.stripped_attrs += before - attrs.len();
                        drop(attrs);

                        report.kept_elements += 1;
                        pending.push(child.clone());
                        kept.push(child);
                    }
                    NodeData::Text { .. } => kept.push(child),
                    NodeData::Comment { .. } => {
                        report.dropped_comments += 1;
                    }
                    // doctype / 处理指令不会出现在 body 内，出现也直接丢弃
                    _ => {}
                }
            }

            for child in &kept {
                child.parent.set(Some(Rc::downgrade(&parent)));
            }
            *parent.children.borrow_mut() = kept;
        }
    }

    fn allows(&self, name: &QualName) -> bool {
        name.ns == ns!(html) && self.tags.contains(&name.local)
    }
}

/// 用默认白名单清洗 HTML 片段
pub fn sanitize(dirty: &str) -> String {
    Sanitizer::new().clean(dirty)
}

/// 解析 HTML 片段并返回 body 的可见文本
pub fn visible_text(html: &str) -> String {
    let dom = parse_body(html);
    body(&dom).map(|body| text_content(&body)).unwrap_or_default()
}

/// 把纯文本转成惰性的 HTML 文本，只做转义，不产生任何标签
pub fn escape_text(text: &str) -> String {
    let root = Node::new(NodeData::Document);
    if !text.is_empty() {
        let child = new_text(text);
        child.parent.set(Some(Rc::downgrade(&root)));
        root.children.borrow_mut().push(child);
    }
    serialize_children(&root)
}

/// 序列化节点的全部子节点
fn serialize_children(root: &Handle) -> String {
    let mut buf = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };

    if let Err(e) = serialize(&mut buf, &SerializableNode(root.clone()), opts) {
        warn!("HTML序列化失败：{}，返回已写出的部分", e);
    }

    match String::from_utf8(buf) {
        Ok(html) => html,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// 可序列化的节点包装：在默认序列化之外补回 <pre> 的首个换行
struct SerializableNode(Handle);

enum SerializeOp {
    Open(Handle),
    Close(QualName),
}

fn open_children(handle: &Handle) -> impl Iterator<Item = SerializeOp> + '_ {
    // 调用方按栈弹出，所以这里逆序压入
    let children: Vec<Handle> = handle.children.borrow().iter().rev().cloned().collect();
    children.into_iter().map(SerializeOp::Open)
}

impl Serialize for SerializableNode {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let mut ops: Vec<SerializeOp> = match traversal_scope {
            TraversalScope::IncludeNode => vec![SerializeOp::Open(self.0.clone())],
            TraversalScope::ChildrenOnly(_) => open_children(&self.0).collect(),
        };

        while let Some(op) = ops.pop() {
            match op {
                SerializeOp::Open(handle) => match handle.data {
                    NodeData::Element { ref name, ref attrs, .. } => {
                        {
                            let attrs = attrs.borrow();
                            serializer.start_elem(
                                name.clone(),
                                attrs.iter().map(|attr| (&attr.name, &attr.value[..])),
                            )?;
                        }

                        // 解析器会吞掉 <pre> 后的第一个换行，这里补一个以保证再解析结果不变
                        if is_pre(&handle) && starts_with_newline(&handle) {
                            serializer.write_text("\n")?;
                        }

                        ops.push(SerializeOp::Close(name.clone()));
                        ops.extend(open_children(&handle));
                    }
                    NodeData::Text { ref contents } => serializer.write_text(&contents.borrow())?,
                    NodeData::Comment { ref contents } => serializer.write_comment(contents)?,
                    NodeData::Doctype { ref name, .. } => serializer.write_doctype(name)?,
                    NodeData::Document => ops.extend(open_children(&handle)),
                    NodeData::ProcessingInstruction {
                        ref target,
                        ref contents,
                    } => serializer.write_processing_instruction(target, contents)?,
                },
                SerializeOp::Close(name) => serializer.end_elem(name)?,
            }
        }

        Ok(())
    }
}

fn starts_with_newline(handle: &Handle) -> bool {
    match handle.children.borrow().first() {
        Some(first) => matches!(
            first.data,
            NodeData::Text { ref contents } if contents.borrow().starts_with('\n')
        ),
        None => false,
    }
}

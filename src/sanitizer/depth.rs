//! 嵌套深度预扫描
//! 树构建器对每个起始标签都要回溯打开元素栈，嵌套越深越慢（深度的平方级）
//! 建树之前先用分词器线性扫一遍：估算最大嵌套深度，同时收集全部字符数据，超限时直接降级为纯文本

use std::cell::{Cell, RefCell};

use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use tendril::StrTendril;

/// 默认允许的最大嵌套深度
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// 不产生嵌套的空元素
fn is_void(name: &str) -> bool {
    matches!(
        name,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "keygen" | "link"
            | "meta" | "param" | "source" | "track" | "wbr"
    )
}

/// 扫描结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DepthScan {
    /// 按起止标签配对估算的最大深度（只会高估，不会低估未闭合的嵌套）
    pub max_depth: usize,
    /// 全部字符数据（实体已解码，NUL 已丢弃）
    pub text: String,
}

#[derive(Debug, Default)]
struct DepthScanner {
    depth: Cell<usize>,
    max_depth: Cell<usize>,
    text: RefCell<String>,
}

impl TokenSink for DepthScanner {
    type Handle = ();

    fn process_token(&self, token: Token, _line: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(Tag {
                kind: TagKind::StartTag,
                name,
                self_closing,
                ..
            }) => {
                if !self_closing && !is_void(&name) {
                    let depth = self.depth.get() + 1;
                    self.depth.set(depth);
                    self.max_depth.set(self.max_depth.get().max(depth));
                }
            }
            Token::TagToken(Tag {
                kind: TagKind::EndTag,
                ..
            }) => self.depth.set(self.depth.get().saturating_sub(1)),
            Token::CharacterTokens(text) => self.text.borrow_mut().push_str(&text),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// 线性扫描一段 HTML
pub fn scan(html: &str) -> DepthScan {
    let tokenizer = Tokenizer::new(DepthScanner::default(), TokenizerOpts::default());
    let queue = BufferQueue::default();
    queue.push_back(StrTendril::from(html));

    let _ = tokenizer.feed(&queue);
    tokenizer.end();

    let sink = tokenizer.sink;
    DepthScan {
        max_depth: sink.max_depth.get(),
        text: sink.text.into_inner(),
    }
}

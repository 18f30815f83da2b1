//! HTML 文档遍历
//!
//! 用 html5ever 的分词器按文档顺序读取记号，并在遇到以下内容时回调
//! [`DocumentHandler`]：
//!
//! - 每个开始标签（标签名 + 开始标签所在行）
//! - `<img>`/`<source>` 的 `src`、`srcset`，以及 `body`/`table`/`td`/`th` 的 `background`
//! - 非空的 `style` 属性（作为内联 CSS 块）
//! - `<style>` 元素的全部文本内容（作为样式表 CSS 块）
//!
//! 分词器本身不知道哪些元素的内容是原始文本，需要由接收端在开始标签处切换状态。

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use crate::parsers::css::CssChunk;
use crate::parsers::images::ImageSourceKind;
use crate::utils::LineIndex;

use super::tag_locator::TagLocator;
use super::utils::{has_background_attr, is_image_element, raw_text_kind};

/// 文档遍历回调
pub trait DocumentHandler {
    /// 开始标签（小写标签名）
    fn html_tag(&mut self, tag_name: &str, line: usize);
    /// 引用图片的属性值
    fn image_source(&mut self, value: &str, kind: ImageSourceKind, line: usize);
    /// `<style>` 内容或 `style` 属性值
    fn css_chunk(&mut self, chunk: &CssChunk<'_>);
}

/// 正在收集内容的 `<style>` 元素
#[derive(Debug)]
struct PendingStyle {
    base_line: usize,
    text: String,
}

struct WalkerState<'a, 'h, H> {
    locator: TagLocator<'a>,
    lines: &'a LineIndex,
    handler: &'h mut H,
    style: Option<PendingStyle>,
    raw_element: Option<String>,
}

impl<H: DocumentHandler> WalkerState<'_, '_, H> {
    fn process(&mut self, token: Token, tokenizer_line: usize) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => return self.start_tag(&tag, tokenizer_line),
                TagKind::EndTag => self.end_tag(&tag),
            },
            Token::CharacterTokens(text) => {
                if let Some(style) = self.style.as_mut() {
                    style.text.push_str(&text);
                }
            }
            Token::CommentToken(_) | Token::DoctypeToken(_) => self.locator.skip_declaration(),
            Token::EOFToken => self.flush_style(),
            Token::NullCharacterToken | Token::ParseError(_) => {}
        }

        TokenSinkResult::Continue
    }

    fn start_tag(&mut self, tag: &Tag, tokenizer_line: usize) -> TokenSinkResult<()> {
        let name: &str = &tag.name;
        let span = self.locator.find_start_tag(name);
        let line = match span {
            Some(span) => self.lines.line_of(span.start),
            None => {
                tracing::debug!(tag = name, tokenizer_line, "start tag not found in source");
                tokenizer_line
            }
        };

        self.handler.html_tag(name, line);

        for attr in &tag.attrs {
            let value: &str = &attr.value;
            match &*attr.name.local {
                "style" if !value.trim().is_empty() => {
                    self.handler.css_chunk(&CssChunk::inline(value, line));
                }
                "src" if is_image_element(name) => {
                    self.handler.image_source(value, ImageSourceKind::Url, line);
                }
                "srcset" if is_image_element(name) => {
                    self.handler.image_source(value, ImageSourceKind::SrcSet, line);
                }
                "background" if has_background_attr(name) => {
                    self.handler.image_source(value, ImageSourceKind::Url, line);
                }
                _ => {}
            }
        }

        if name == "style" {
            // 上一个未结束的 <style> 不会出现在这里：原始文本中不识别标签
            let base_line = match span {
                Some(span) => self.lines.line_of(span.end),
                None => tokenizer_line,
            };
            self.style = Some(PendingStyle {
                base_line,
                text: String::new(),
            });
        }

        if name == "plaintext" {
            return TokenSinkResult::Plaintext;
        }

        match raw_text_kind(name) {
            Some(kind) => {
                self.raw_element = Some(name.to_string());
                TokenSinkResult::RawData(kind)
            }
            None => TokenSinkResult::Continue,
        }
    }

    fn end_tag(&mut self, tag: &Tag) {
        let name: &str = &tag.name;

        if self.raw_element.as_deref() == Some(name) {
            self.raw_element = None;
            // 原始文本内容中的 `<...>` 不能被当作标签
            self.locator.find_end_tag(name);
        }

        if name == "style" {
            self.flush_style();
        }
    }

    fn flush_style(&mut self) {
        if let Some(style) = self.style.take() {
            self.handler
                .css_chunk(&CssChunk::style_sheet(&style.text, style.base_line));
        }
    }
}

struct DocumentSink<'a, 'h, H> {
    state: RefCell<WalkerState<'a, 'h, H>>,
}

impl<H: DocumentHandler> TokenSink for DocumentSink<'_, '_, H> {
    type Handle = ();

    fn process_token(&self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        self.state
            .borrow_mut()
            .process(token, line_number as usize)
    }
}

/// 按文档顺序遍历 HTML 文本
///
/// # 参数
///
/// * `text` - 已解码的文档文本
/// * `lines` - 由同一文本建立的行索引
/// * `handler` - 接收标签、图片和 CSS 块的回调
pub fn walk_document<H: DocumentHandler>(text: &str, lines: &LineIndex, handler: &mut H) {
    let sink = DocumentSink {
        state: RefCell::new(WalkerState {
            locator: TagLocator::new(text),
            lines,
            handler,
            style: None,
            raw_element: None,
        }),
    };

    let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(text));

    let _ = tokenizer.feed(&input);
    tokenizer.end();
}

//! CSS 规则解析器
//!
//! 在 cssparser 分词器之上实现的递归下降解析器。它只关心报告需要的结构：
//! 规则（选择器列表 + 声明块）、`@` 规则（名称 + 前导部分 + 可选的嵌套块）
//! 以及声明值中的 `url()` 引用。
//!
//! 解析器对格式错误的输入是容错的：单条规则或声明出错时会产生一个
//! [`CssFault`]，记录到日志后跳到下一个顶层 `;` 或 `{}` 块继续解析，
//! 从不放弃整个文本块。

use cssparser::{ParseError, Parser, ParserInput, Token};
use thiserror::Error;

use super::chunk::{ChunkKind, CssChunk};
use crate::utils::LineIndex;

/// 块内容为声明列表的 `@` 规则（去掉厂商前缀后比较）
const DECLARATION_AT_RULES: &[&str] = &[
    "font-face",
    "page",
    "counter-style",
    "property",
    "viewport",
    "font-palette-values",
    // @page 内的页边距盒
    "top-left-corner",
    "top-left",
    "top-center",
    "top-right",
    "top-right-corner",
    "bottom-left-corner",
    "bottom-left",
    "bottom-center",
    "bottom-right",
    "bottom-right-corner",
    "left-top",
    "left-middle",
    "left-bottom",
    "right-top",
    "right-middle",
    "right-bottom",
];

/// 参数中的字符串被视为 URL 的函数
const URL_FUNCTIONS: &[&str] = &["url", "src", "image", "image-set", "-webkit-image-set"];

/// 解析回调
///
/// 解析器只负责识别结构，分类和记录由实现者完成。所有行号都已换算为文档行号。
pub trait CssHandler {
    /// 一条规则的选择器列表原文及规则开始的行
    fn selector(&mut self, selector_list: &str, line: usize);
    /// 一条声明的属性名和值原文（值中保留 `!important`）
    fn declaration(&mut self, property: &str, value: &str, line: usize);
    /// `@` 规则关键字（小写，包含 `@`）
    fn at_rule(&mut self, keyword: &str, line: usize);
    /// 声明值中 `url()` 等函数引用的地址，行号为所在声明的行
    fn url(&mut self, url: &str, line: usize);
}

/// 可恢复的 CSS 语法错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CssFault {
    #[error("rule has an empty selector")]
    EmptySelector,

    #[error("`{selector}` is not followed by a declaration block")]
    MissingBlock { selector: String },

    #[error("declaration `{property}` has no colon")]
    MissingColon { property: String },

    #[error("declaration `{property}` has no value")]
    EmptyValue { property: String },

    #[error("unexpected `{found}`")]
    UnexpectedToken { found: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockContent {
    Rules,
    Declarations,
    Keyframes,
}

impl BlockContent {
    fn for_at_rule(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        let unprefixed = strip_vendor_prefix(&name);

        if unprefixed == "keyframes" {
            BlockContent::Keyframes
        } else if DECLARATION_AT_RULES.contains(&unprefixed) {
            BlockContent::Declarations
        } else {
            BlockContent::Rules
        }
    }
}

fn strip_vendor_prefix(name: &str) -> &str {
    name.strip_prefix('-')
        .and_then(|rest| rest.split_once('-'))
        .map(|(_, unprefixed)| unprefixed)
        .unwrap_or(name)
}

fn is_url_function(name: &str) -> bool {
    URL_FUNCTIONS.iter().any(|f| name.eq_ignore_ascii_case(f))
}

/// 解析一个 CSS 文本块，把发现的结构交给 `handler`
///
/// `<style>` 内容按规则列表解析，`style` 属性按声明列表解析。
pub fn parse_chunk<H: CssHandler>(chunk: &CssChunk<'_>, handler: &mut H) {
    let mut input = ParserInput::new(chunk.text());
    let mut parser = Parser::new(&mut input);
    let mut rules = RuleParser {
        chunk: *chunk,
        lines: LineIndex::new(chunk.text()),
        handler,
    };

    match chunk.kind() {
        ChunkKind::StyleSheet => rules.parse_rule_list(&mut parser, true),
        ChunkKind::Inline => rules.parse_declaration_list(&mut parser),
    }
}

/// 跳过输入直到下一个 `;`、`{}` 块或多余的 `}` 之后
///
/// 调用时解析器应停在出错的位置之前，这样至少会消费一个记号。
fn skip_to_boundary(input: &mut Parser<'_, '_>) {
    loop {
        match input.next() {
            Ok(&Token::Semicolon) | Ok(&Token::CurlyBracketBlock) | Ok(&Token::CloseCurlyBracket) => {
                return
            }
            Ok(_) => {}
            Err(_) => return,
        }
    }
}

/// 收集函数参数中的 URL
fn collect_urls<'i>(input: &mut Parser<'i, '_>, in_url_function: bool, urls: &mut Vec<String>) {
    loop {
        let token = match input.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::QuotedString(value) if in_url_function => urls.push(value.to_string()),
            Token::UnquotedUrl(value) => urls.push(value.to_string()),
            Token::Function(name) => {
                let nested_is_url = is_url_function(&name);
                let _ = input.parse_nested_block(|args| {
                    collect_urls(args, nested_is_url, urls);
                    Ok::<(), ParseError<'i, ()>>(())
                });
            }
            Token::ParenthesisBlock | Token::SquareBracketBlock | Token::CurlyBracketBlock => {
                let _ = input.parse_nested_block(|args| {
                    collect_urls(args, false, urls);
                    Ok::<(), ParseError<'i, ()>>(())
                });
            }
            _ => {}
        }
    }
}

struct RuleParser<'c, 'h, H> {
    chunk: CssChunk<'c>,
    lines: LineIndex,
    handler: &'h mut H,
}

impl<H: CssHandler> RuleParser<'_, '_, H> {
    /// 下一个记号所在的文档行
    ///
    /// 按字节偏移查行索引，而不是用 cssparser 自己的行计数：后者把换页符也算作换行。
    fn line(&self, input: &Parser<'_, '_>) -> usize {
        let relative = self.lines.line_of(input.position().byte_index());
        self.chunk.absolute_line(relative)
    }

    fn report_fault(&self, fault: &CssFault, line: usize) {
        tracing::debug!(line, fault = %fault, "skipping malformed CSS");
    }

    /// 规则列表：样式表顶层、条件 `@` 规则的块以及关键帧块
    fn parse_rule_list<'i>(&mut self, input: &mut Parser<'i, '_>, dispatch_selectors: bool) {
        loop {
            input.skip_whitespace();
            let line = self.line(input);
            let start = input.state();
            let token = match input.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };

            let outcome = match token {
                Token::CDO | Token::CDC | Token::Semicolon => Ok(()),
                Token::CloseCurlyBracket | Token::CloseParenthesis | Token::CloseSquareBracket => {
                    let found = input.slice_from(start.position()).to_string();
                    self.report_fault(&CssFault::UnexpectedToken { found }, line);
                    Ok(())
                }
                Token::AtKeyword(name) => self.parse_at_rule(&name, line, input),
                _ => {
                    input.reset(&start);
                    self.parse_qualified_rule(line, input, dispatch_selectors)
                }
            };

            if let Err(fault) = outcome {
                self.report_fault(&fault, line);
                skip_to_boundary(input);
            }
        }
    }

    /// 声明列表：规则块、声明型 `@` 规则的块以及 `style` 属性
    fn parse_declaration_list<'i>(&mut self, input: &mut Parser<'i, '_>) {
        loop {
            input.skip_whitespace();
            let line = self.line(input);
            let start = input.state();
            let token = match input.next() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };

            let outcome = match token {
                Token::Semicolon => Ok(()),
                Token::Ident(name) => match self.parse_declaration(&name, line, input) {
                    // 不是 `属性: 值`，按嵌套规则再试一次
                    Err(CssFault::MissingColon { .. }) => {
                        input.reset(&start);
                        self.parse_qualified_rule(line, input, true)
                    }
                    outcome => outcome,
                },
                Token::AtKeyword(name) => self.parse_at_rule(&name, line, input),
                Token::CloseCurlyBracket | Token::CloseParenthesis | Token::CloseSquareBracket => {
                    let found = input.slice_from(start.position()).to_string();
                    self.report_fault(&CssFault::UnexpectedToken { found }, line);
                    Ok(())
                }
                _ => {
                    input.reset(&start);
                    self.parse_qualified_rule(line, input, true)
                }
            };

            if let Err(fault) = outcome {
                self.report_fault(&fault, line);
                skip_to_boundary(input);
            }
        }
    }

    /// 选择器列表 + `{}` 块
    ///
    /// 出错时解析器停在出错的 `;`、`}` 或 `{` 之前。
    fn parse_qualified_rule<'i>(
        &mut self,
        line: usize,
        input: &mut Parser<'i, '_>,
        dispatch_selector: bool,
    ) -> Result<(), CssFault> {
        let start = input.position();

        loop {
            let before = input.state();
            let token = match input.next_including_whitespace_and_comments() {
                Ok(token) => token.clone(),
                Err(_) => {
                    let selector = input.slice_from(start).trim().to_string();
                    return Err(CssFault::MissingBlock { selector });
                }
            };

            match token {
                Token::CurlyBracketBlock => {
                    let selector = input.slice(start..before.position()).trim();
                    if selector.is_empty() {
                        input.reset(&before);
                        return Err(CssFault::EmptySelector);
                    }

                    if dispatch_selector {
                        self.handler.selector(selector, line);
                    }
                    let _ = input.parse_nested_block(|block| {
                        self.parse_declaration_list(block);
                        Ok::<(), ParseError<'i, ()>>(())
                    });
                    return Ok(());
                }
                Token::Semicolon => {
                    let selector = input.slice(start..before.position()).trim().to_string();
                    input.reset(&before);
                    return Err(CssFault::MissingBlock { selector });
                }
                Token::CloseCurlyBracket => {
                    input.reset(&before);
                    return Err(CssFault::UnexpectedToken {
                        found: "}".to_string(),
                    });
                }
                _ => {}
            }
        }
    }

    /// `属性: 值`，属性名已被消费
    fn parse_declaration<'i>(
        &mut self,
        property: &str,
        line: usize,
        input: &mut Parser<'i, '_>,
    ) -> Result<(), CssFault> {
        match input.next() {
            Ok(&Token::Colon) => {}
            _ => {
                return Err(CssFault::MissingColon {
                    property: property.to_string(),
                })
            }
        }

        let start = input.position();
        let mut end = start;
        let mut urls = Vec::new();

        loop {
            end = input.position();
            let token = match input.next_including_whitespace_and_comments() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };

            match token {
                Token::Semicolon => break,
                Token::UnquotedUrl(url) => urls.push(url.to_string()),
                Token::Function(name) => {
                    let in_url_function = is_url_function(&name);
                    let _ = input.parse_nested_block(|args| {
                        collect_urls(args, in_url_function, &mut urls);
                        Ok::<(), ParseError<'i, ()>>(())
                    });
                }
                Token::ParenthesisBlock | Token::SquareBracketBlock | Token::CurlyBracketBlock => {
                    let _ = input.parse_nested_block(|args| {
                        collect_urls(args, false, &mut urls);
                        Ok::<(), ParseError<'i, ()>>(())
                    });
                }
                _ => {}
            }
        }

        let value = input.slice(start..end).trim();
        if value.is_empty() {
            // 分号已被消费，无需再同步
            self.report_fault(
                &CssFault::EmptyValue {
                    property: property.to_string(),
                },
                line,
            );
            return Ok(());
        }

        self.handler.declaration(property, value, line);
        for url in &urls {
            self.handler.url(url, line);
        }

        Ok(())
    }

    /// `@名称 前导部分 ;` 或 `@名称 前导部分 { ... }`，关键字已被消费
    fn parse_at_rule<'i>(
        &mut self,
        name: &str,
        line: usize,
        input: &mut Parser<'i, '_>,
    ) -> Result<(), CssFault> {
        self.handler
            .at_rule(&format!("@{}", name.to_ascii_lowercase()), line);

        loop {
            let before = input.state();
            let token = match input.next() {
                Ok(token) => token.clone(),
                Err(_) => return Ok(()),
            };

            match token {
                Token::Semicolon => return Ok(()),
                Token::CurlyBracketBlock => {
                    let content = BlockContent::for_at_rule(name);
                    let _ = input.parse_nested_block(|block| {
                        match content {
                            BlockContent::Rules => self.parse_rule_list(block, true),
                            BlockContent::Keyframes => self.parse_rule_list(block, false),
                            BlockContent::Declarations => self.parse_declaration_list(block),
                        }
                        Ok::<(), ParseError<'i, ()>>(())
                    });
                    return Ok(());
                }
                Token::CloseCurlyBracket => {
                    input.reset(&before);
                    return Err(CssFault::UnexpectedToken {
                        found: "}".to_string(),
                    });
                }
                _ => {}
            }
        }
    }
}

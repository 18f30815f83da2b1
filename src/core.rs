use std::collections::BTreeSet;

use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;

use crate::env::{report as report_env, EnvError, EnvVar};
use crate::parsers::css::{
    classify_selector_list, extract_units, normalize_declaration, parse_chunk, strip_important,
    CssChunk, CssHandler,
};
use crate::parsers::html::{get_charset, html_to_dom, walk_document, DocumentHandler};
use crate::parsers::images::{detect_formats, ImageSourceKind};
use crate::report::{Report, ReportBuilder};
use crate::utils::LineIndex;

/// 默认按值记录的属性
pub const DEFAULT_VALUE_SENSITIVE_PROPERTIES: &[&str] = &["display"];

/// 默认可折叠方向长写的简写属性根
pub const DEFAULT_SHORTHAND_ROOTS: &[&str] = &[
    "margin",
    "padding",
    "border",
    "inset",
    "scroll-margin",
    "scroll-padding",
];

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// The byte stream cannot be read as an HTML document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HtmlParseError {
    #[error("input is not text: NUL byte at offset {offset}")]
    BinaryContent { offset: usize },
}

/// Errors visible to callers of the report entry points
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Html(#[from] HtmlParseError),

    #[error(transparent)]
    Env(#[from] EnvError),
}

/// Configuration options for report generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// 这些属性的值（小写、去掉 `!important`）会作为内层键记录
    pub value_sensitive_properties: BTreeSet<String>,
    /// `<根>-{top,right,bottom,left}` 会被折叠为这些根
    pub shorthand_roots: BTreeSet<String>,
    /// 强制使用的文档编码；为空时依次使用 BOM、`<meta>` 声明和 UTF-8
    pub encoding: Option<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            value_sensitive_properties: DEFAULT_VALUE_SENSITIVE_PROPERTIES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            shorthand_roots: DEFAULT_SHORTHAND_ROOTS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            encoding: None,
        }
    }
}

impl ReportOptions {
    /// 默认配置叠加环境变量
    ///
    /// 设置了的变量整体替换对应的默认值。
    pub fn from_env() -> Result<Self, EnvError> {
        let mut options = ReportOptions::default();

        if let Some(properties) = report_env::ValueSensitiveProperties::get()? {
            options.value_sensitive_properties = properties;
        }
        if let Some(roots) = report_env::ShorthandRoots::get()? {
            options.shorthand_roots = roots;
        }
        if let Some(encoding) = report_env::DocumentEncoding::get()? {
            options.encoding = Some(encoding);
        }

        Ok(options)
    }
}

/// Produces a feature usage report with default options
///
/// # Examples
///
/// ```
/// use vmail_parser::core::produce_report;
///
/// let html = b"<html><body>\n<div style=\"background: red\"></div>\n</body></html>";
/// let report = produce_report(html).unwrap();
///
/// assert!(report.css_properties().get("background", "").unwrap().contains(2));
/// assert!(report.html_tags().get("div", "").unwrap().contains(2));
/// ```
pub fn produce_report(data: &[u8]) -> Result<Report, ReportError> {
    produce_report_with_options(data, &ReportOptions::default())
}

/// Produces a feature usage report
///
/// # Arguments
///
/// * `data` - Raw document bytes
/// * `options` - Value sensitive properties, shorthand roots and charset override
///
/// # Returns
///
/// The populated report, or an error if the bytes are not an HTML document.
/// Malformed CSS never fails the call.
pub fn produce_report_with_options(
    data: &[u8],
    options: &ReportOptions,
) -> Result<Report, ReportError> {
    let text = decode_document(data, options.encoding.as_deref())?;
    let lines = LineIndex::new(&text);

    let mut pipeline = Pipeline {
        builder: ReportBuilder::new(),
        options,
        line_count: lines.line_count(),
    };
    walk_document(&text, &lines, &mut pipeline);
    let report = pipeline.builder.finish();

    tracing::debug!(
        lines = lines.line_count(),
        tags = report.html_tags().len(),
        properties = report.css_properties().len(),
        "report produced"
    );

    Ok(report)
}

/// 把原始字节解码为文本
///
/// 顺序：BOM、强制编码、文档中的 `<meta>` 声明、UTF-8。没有 BOM 的输入中出现 NUL
/// 字节时视为二进制数据。
pub fn decode_document(
    data: &[u8],
    forced_encoding: Option<&str>,
) -> Result<String, HtmlParseError> {
    if let Some((encoding, bom_length)) = Encoding::for_bom(data) {
        return Ok(decode_with(encoding, &data[bom_length..]));
    }

    if let Some(offset) = data.iter().position(|&b| b == 0) {
        return Err(HtmlParseError::BinaryContent { offset });
    }

    let encoding = match forced_encoding {
        Some(label) => encoding_for_label(label),
        None => sniff_encoding(data),
    };

    Ok(decode_with(encoding, data))
}

fn decode_with(encoding: &'static Encoding, data: &[u8]) -> String {
    let (text, had_errors) = encoding.decode_without_bom_handling(data);
    if had_errors {
        tracing::warn!(
            encoding = encoding.name(),
            "document contains malformed byte sequences"
        );
    }
    text.into_owned()
}

fn encoding_for_label(label: &str) -> &'static Encoding {
    match Encoding::for_label_no_replacement(label.trim().as_bytes()) {
        // ASCII 兼容的字节流里声明的 UTF-16 按 UTF-8 处理
        Some(encoding) => encoding.output_encoding(),
        None => {
            tracing::warn!(label, "unknown charset, falling back to UTF-8");
            UTF_8
        }
    }
}

/// 从文档的 `<meta>` 声明中读取编码
fn sniff_encoding(data: &[u8]) -> &'static Encoding {
    if data.is_ascii() {
        return UTF_8;
    }

    let preview = String::from_utf8_lossy(data);
    let dom = html_to_dom(&preview);
    match get_charset(&dom.document) {
        Some(charset) => encoding_for_label(&charset),
        None => UTF_8,
    }
}

/// Parses a content type header into media type, charset and base64 flag
pub fn parse_content_type(content_type: &str) -> (String, String, bool) {
    let mut media_type = String::new();
    let mut charset = String::new();
    let mut is_base64 = false;

    let parts: Vec<&str> = content_type.split(';').collect();

    if !parts.is_empty() {
        media_type = parts[0].trim().to_lowercase();
    }

    for part in parts.iter().skip(1) {
        let part = part.trim();
        match part.split_once('=') {
            Some((name, value)) if name.trim().eq_ignore_ascii_case("charset") => {
                charset = value.trim().trim_matches(|c| c == '"' || c == '\'').to_string();
            }
            None if part.eq_ignore_ascii_case("base64") => is_base64 = true,
            _ => {}
        }
    }

    (media_type, charset, is_base64)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
}

/// 把各个解析器的发现写入报告
struct Pipeline<'o> {
    builder: ReportBuilder,
    options: &'o ReportOptions,
    line_count: usize,
}

impl Pipeline<'_> {
    /// 行号始终落在 [1, 总行数] 之内
    fn clamp(&self, line: usize) -> usize {
        line.clamp(1, self.line_count)
    }

    fn record_image(&mut self, value: &str, kind: ImageSourceKind, line: usize) {
        let line = self.clamp(line);
        for format in detect_formats(value, kind) {
            self.builder.record_img_format(&format, line);
        }
    }
}

impl DocumentHandler for Pipeline<'_> {
    fn html_tag(&mut self, tag_name: &str, line: usize) {
        let line = self.clamp(line);
        self.builder.record_html_tag(tag_name, line);
    }

    fn image_source(&mut self, value: &str, kind: ImageSourceKind, line: usize) {
        self.record_image(value, kind, line);
    }

    fn css_chunk(&mut self, chunk: &CssChunk<'_>) {
        parse_chunk(chunk, self);
    }
}

impl CssHandler for Pipeline<'_> {
    fn selector(&mut self, selector_list: &str, line: usize) {
        let line = self.clamp(line);
        let features = classify_selector_list(selector_list);

        for selector_type in features.types {
            self.builder.record_selector_type(selector_type, line);
        }
        for pseudo in &features.pseudo_selectors {
            self.builder.record_pseudo_selector(pseudo, line);
        }
    }

    fn declaration(&mut self, property: &str, value: &str, line: usize) {
        let line = self.clamp(line);
        let normalized = normalize_declaration(property, value, self.options);
        self.builder
            .record_css_property(&normalized.name, &normalized.value_key, line);

        for unit in extract_units(strip_important(value)) {
            self.builder.record_dimension(unit, line);
        }
    }

    fn at_rule(&mut self, keyword: &str, line: usize) {
        let line = self.clamp(line);
        self.builder.record_at_rule(keyword, line);
    }

    fn url(&mut self, url: &str, line: usize) {
        self.record_image(url, ImageSourceKind::Url, line);
    }
}

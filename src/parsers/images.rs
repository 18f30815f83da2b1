//! 图片格式识别
//!
//! 从 `src`、`srcset`、`background` 属性值以及 CSS `url()` 参数中识别引用的图片格式。

use crate::parsers::html::parse_srcset;
use crate::utils::{file_extension, parse_data_url_header};

/// 属性值的形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSourceKind {
    /// 单个 URL（可能是包含逗号的 data URL）
    Url,
    /// 逗号分隔的候选列表
    SrcSet,
}

/// 识别单个候选地址的图片格式
///
/// - 含有 `base64` 的地址记为 `"base64"`
/// - 其他 data URL 取媒体子类型（`image/svg+xml` → `svg`）
/// - 普通地址取路径最后一段的扩展名（小写）
///
/// ```
/// use vmail_parser::parsers::images::detect_format;
///
/// assert_eq!(detect_format("/some/img.AVIF?v=2").as_deref(), Some("avif"));
/// assert_eq!(detect_format("data:image/png;base64,iVBO").as_deref(), Some("base64"));
/// assert_eq!(detect_format("cid:logo"), None);
/// ```
pub fn detect_format(candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return None;
    }

    if candidate.to_ascii_lowercase().contains("base64") {
        return Some("base64".to_string());
    }

    if let Some((media_type, _)) = parse_data_url_header(candidate) {
        let subtype = media_type
            .split_once('/')
            .map(|(_, subtype)| subtype)
            .unwrap_or_default();
        let subtype = subtype.split('+').next().unwrap_or_default();

        return if !subtype.is_empty()
            && subtype
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
        {
            Some(subtype.to_string())
        } else {
            None
        };
    }

    file_extension(candidate)
}

/// 识别属性值中引用的全部图片格式（去重，按出现顺序）
pub fn detect_formats(value: &str, kind: ImageSourceKind) -> Vec<String> {
    let candidates: Vec<&str> = match kind {
        ImageSourceKind::Url => vec![value],
        ImageSourceKind::SrcSet => parse_srcset(value).into_iter().map(|item| item.path).collect(),
    };

    let mut formats: Vec<String> = Vec::new();
    for candidate in candidates {
        match detect_format(candidate) {
            Some(format) => {
                if !formats.contains(&format) {
                    formats.push(format);
                }
            }
            None => tracing::debug!(candidate, "no image format recognised"),
        }
    }

    formats
}

use std::sync::OnceLock;

use regex::Regex;
pub use url::Url;

/// 识别为文件扩展名的最大长度
const MAX_EXTENSION_LEN: usize = 5;

fn data_url_header_regex() -> &'static Regex {
    static DATA_URL_HEADER: OnceLock<Regex> = OnceLock::new();
    DATA_URL_HEADER.get_or_init(|| {
        Regex::new(r"(?i)^\s*data:\s*([^,;]*)((?:;[^,]*)?)").expect("valid data URL regex")
    })
}

/// 判断字符串是否为 data URL
pub fn is_data_url(url: &str) -> bool {
    url.trim_start()
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

/// 解析 data URL 的头部
///
/// 返回小写的媒体类型（可能为空）以及是否声明了 base64 编码。
/// 如果字符串不是 data URL 则返回 `None`。
///
/// ```
/// use vmail_parser::utils::url::parse_data_url_header;
///
/// let (media_type, is_base64) = parse_data_url_header("data:image/png;base64,iVBO").unwrap();
/// assert_eq!(media_type, "image/png");
/// assert!(is_base64);
/// ```
pub fn parse_data_url_header(url: &str) -> Option<(String, bool)> {
    let captures = data_url_header_regex().captures(url)?;
    let media_type = captures
        .get(1)
        .map(|m| m.as_str().trim().to_ascii_lowercase())
        .unwrap_or_default();
    let is_base64 = captures.get(2).is_some_and(|params| {
        params
            .as_str()
            .split(';')
            .any(|param| param.trim().eq_ignore_ascii_case("base64"))
    });

    Some((media_type, is_base64))
}

/// 提取 URL 所指向文件的扩展名（小写）
///
/// 只检查路径的最后一段；查询串、片段以及 `srcset` 描述符都会被忽略。
/// 扩展名必须由 1 到 5 个 ASCII 字母或数字组成，否则返回 `None`。
pub fn file_extension(candidate: &str) -> Option<String> {
    let candidate = candidate
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    if candidate.is_empty() || is_data_url(candidate) {
        return None;
    }

    let owned_path;
    let path: &str = match Url::parse(candidate) {
        Ok(parsed) if !parsed.cannot_be_a_base() => {
            owned_path = parsed.path().to_string();
            &owned_path
        }
        _ => {
            let end = candidate
                .find(|c: char| c == '?' || c == '#' || c.is_whitespace())
                .unwrap_or(candidate.len());
            &candidate[..end]
        }
    };

    let file_name = path.rsplit('/').next().unwrap_or(path);
    let (_, extension) = file_name.rsplit_once('.')?;

    if extension.is_empty()
        || extension.len() > MAX_EXTENSION_LEN
        || !extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }

    Some(extension.to_ascii_lowercase())
}

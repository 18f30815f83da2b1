//! 属性名规范化
//!
//! 把方向长写属性（`margin-top`、`padding-left`……）折叠到简写属性根，去掉值末尾的
//! `!important`，并为值敏感属性生成包含值的内层键。

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::ReportOptions;

/// 可以折叠到简写属性根的方向后缀
const DIRECTIONS: &[&str] = &["top", "right", "bottom", "left"];

static IMPORTANT_RE: OnceLock<Regex> = OnceLock::new();

fn important_regex() -> &'static Regex {
    IMPORTANT_RE.get_or_init(|| {
        Regex::new(r"(?i)\s*!\s*important\s*$").expect("important regex is valid")
    })
}

/// 一条声明在报告中的键
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedProperty {
    /// 规范化后的属性名
    pub name: String,
    /// 值敏感属性为小写去空白的值，否则为空字符串
    pub value_key: String,
}

/// 去掉值末尾的 `!important`（不区分大小写，允许空白）
pub fn strip_important(value: &str) -> &str {
    match important_regex().find(value) {
        Some(found) => &value[..found.start()],
        None => value,
    }
}

/// 规范化属性名
///
/// `<根>-{top,right,bottom,left}` 在根属于 `shorthand_roots` 时折叠为根，
/// 其余属性名只做小写处理。
pub fn canonical_property_name(raw: &str, shorthand_roots: &BTreeSet<String>) -> String {
    let name = raw.trim().to_ascii_lowercase();

    if let Some((root, direction)) = name.rsplit_once('-') {
        if DIRECTIONS.contains(&direction) && shorthand_roots.contains(root) {
            return root.to_string();
        }
    }

    name
}

/// 计算一条声明在 `CssProperties` 中的键
pub fn normalize_declaration(property: &str, value: &str, options: &ReportOptions) -> NormalizedProperty {
    let name = canonical_property_name(property, &options.shorthand_roots);

    let value_key = if options.value_sensitive_properties.contains(&name) {
        strip_important(value).trim().to_lowercase()
    } else {
        String::new()
    };

    NormalizedProperty { name, value_key }
}

use html5ever::tokenizer::states::RawKind;

/// ASCII 空白字符
pub const WHITESPACES: &[char] = &[' ', '\t', '\n', '\x0c', '\r'];

/// `src`/`srcset` 属性引用图片的元素
pub const IMAGE_ELEMENTS: &[&str] = &["img", "source"];

/// 带有旧式 `background` 图片属性的元素（常见于电子邮件模板）
pub const BACKGROUND_ATTR_ELEMENTS: &[&str] = &["body", "table", "td", "th"];

/// 内容不是标记的元素及其文本模式
///
/// 不包含 `noscript`：按禁用脚本的方式解析，其中的标签照常报告。
pub fn raw_text_kind(tag_name: &str) -> Option<RawKind> {
    match tag_name {
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
        "script" => Some(RawKind::ScriptData),
        "title" | "textarea" => Some(RawKind::Rcdata),
        _ => None,
    }
}

/// 判断元素是否通过 `src`/`srcset` 引用图片
pub fn is_image_element(tag_name: &str) -> bool {
    IMAGE_ELEMENTS.contains(&tag_name)
}

/// 判断元素的 `background` 属性是否为图片地址
pub fn has_background_attr(tag_name: &str) -> bool {
    BACKGROUND_ATTR_ELEMENTS.contains(&tag_name)
}

//! HTML 属性值解析
//!
//! 目前只包含响应式图片 `srcset` 属性的解析。

use super::utils::WHITESPACES;

/// `srcset` 中的一个候选项
///
/// ```rust
/// # use vmail_parser::parsers::html::parser::SrcSetItem;
/// let item = SrcSetItem {
///     path: "image-480.jpg",
///     descriptor: "480w",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrcSetItem<'a> {
    /// 图片路径或 URL
    pub path: &'a str,
    /// 宽度描述符（如 "480w"）或像素密度描述符（如 "2x"），没有时为空字符串
    pub descriptor: &'a str,
}

/// 解析 `<img>` 或 `<source>` 元素的 `srcset` 属性
///
/// 候选项之间以逗号分隔，路径与描述符之间以空白分隔。只有 data URL 的路径
/// 可以包含逗号，其中只有紧跟在路径末尾的逗号才表示候选项结束。
///
/// # 参数
///
/// * `srcset` - `srcset` 属性的值
///
/// # 返回值
///
/// 按出现顺序排列的候选项
///
/// ```rust
/// # use vmail_parser::parsers::html::parser::parse_srcset;
/// let items = parse_srcset("small.jpg 480w, large.jpg 800w");
/// assert_eq!(items.len(), 2);
/// assert_eq!(items[0].path, "small.jpg");
/// assert_eq!(items[0].descriptor, "480w");
///
/// let items = parse_srcset("image1.jpg,image2.jpg 2x");
/// assert_eq!(items[0].path, "image1.jpg");
/// assert_eq!(items[1].descriptor, "2x");
/// ```
pub fn parse_srcset(srcset: &str) -> Vec<SrcSetItem<'_>> {
    let mut srcset_items: Vec<SrcSetItem> = vec![];
    let mut rest = srcset;

    loop {
        rest = rest.trim_start_matches(|c: char| WHITESPACES.contains(&c) || c == ',');
        if rest.is_empty() {
            break;
        }

        let path_end = rest.find(WHITESPACES).unwrap_or(rest.len());
        let path = &rest[..path_end];

        // 普通路径中的逗号直接分隔候选项，data URL 的逗号属于 URL 本身
        if !is_data_path(path) {
            if let Some(comma) = path.find(',') {
                srcset_items.push(SrcSetItem {
                    path: &path[..comma],
                    descriptor: "",
                });
                rest = &rest[comma + 1..];
                continue;
            }
        }
        rest = &rest[path_end..];

        // 路径末尾的逗号结束当前候选项
        if path.ends_with(',') {
            srcset_items.push(SrcSetItem {
                path: path.trim_end_matches(','),
                descriptor: "",
            });
            continue;
        }

        // 描述符一直延续到括号外的下一个逗号
        let mut depth = 0usize;
        let mut descriptor_end = rest.len();
        for (i, c) in rest.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    descriptor_end = i;
                    break;
                }
                _ => {}
            }
        }

        srcset_items.push(SrcSetItem {
            path,
            descriptor: rest[..descriptor_end].trim_matches(WHITESPACES),
        });
        rest = &rest[descriptor_end..];
    }

    srcset_items
}

fn is_data_path(path: &str) -> bool {
    path.get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

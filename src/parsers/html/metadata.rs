//! HTML 文档元数据
//!
//! 目前只读取文档自身声明的字符编码，用于在没有 BOM 时决定如何解码原始字节。

use markup5ever_rcdom::Handle;

use crate::core::parse_content_type;

use super::dom::{find_nodes, get_node_attr};

/// 获取文档声明的字符编码
///
/// 支持两种写法：
/// 1. HTML5 格式：`<meta charset="utf-8">`
/// 2. HTML4 格式：`<meta http-equiv="content-type" content="text/html; charset=utf-8">`
///
/// # 参数
///
/// * `node` - HTML 文档的根节点句柄
///
/// # 返回值
///
/// * `Some(String)` - 第一个非空的编码声明
/// * `None` - 文档没有声明编码
pub fn get_charset(node: &Handle) -> Option<String> {
    for meta_node in find_nodes(node, &["html", "head", "meta"]).iter() {
        if let Some(charset) = get_node_attr(meta_node, "charset") {
            let charset = charset.trim();
            if !charset.is_empty() {
                return Some(charset.to_string());
            }
        }

        if get_node_attr(meta_node, "http-equiv")
            .unwrap_or_default()
            .eq_ignore_ascii_case("content-type")
        {
            if let Some(content) = get_node_attr(meta_node, "content") {
                let (_media_type, charset, _is_base64) = parse_content_type(&content);
                if !charset.is_empty() {
                    return Some(charset);
                }
            }
        }
    }

    None
}

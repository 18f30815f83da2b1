//! HTML 解析模块
//!
//! - `utils`: 元素分类常量
//! - `parser`: 属性值解析（`srcset`）
//! - `dom`: 基础 DOM 操作
//! - `metadata`: 文档字符编码声明
//! - `tag_locator`: 开始标签在源文本中的定位
//! - `walker`: 按文档顺序遍历标签、图片属性和 CSS

pub mod dom;
pub mod metadata;
pub mod parser;
pub mod tag_locator;
pub mod utils;
pub mod walker;

pub use dom::{find_nodes, get_node_attr, html_to_dom};
pub use metadata::get_charset;
pub use parser::{parse_srcset, SrcSetItem};
pub use tag_locator::{TagLocator, TagSpan};
pub use utils::{BACKGROUND_ATTR_ELEMENTS, IMAGE_ELEMENTS, WHITESPACES};
pub use walker::{walk_document, DocumentHandler};

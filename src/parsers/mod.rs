//! # 解析器模块
//!
//! 从 HTML 文档中收集特性信息所需的全部解析功能：
//!
//! - `html` - 按文档顺序遍历标签、图片属性和 CSS 文本，读取字符编码声明
//! - `css` - 容错的 CSS 解析、选择器分类、属性规范化和单位提取
//! - `images` - 从 URL 和 `srcset` 中识别图片格式

pub mod css;
pub mod html;
pub mod images;

pub use css::{classify_selector_list, extract_units, normalize_declaration, parse_chunk, CssChunk};
pub use html::{get_charset, html_to_dom, walk_document, DocumentHandler};
pub use images::{detect_format, detect_formats, ImageSourceKind};

//! CSS 解析器模块
//!
//! 此模块负责从 `<style>` 元素和 `style` 属性中提取出的 CSS 文本里收集特性信息：
//! 规则的选择器、声明的属性和值、`@` 规则以及 `url()` 引用。所有位置都会被换算
//! 成原始文档中的行号。
//!
//! # 模块组织
//!
//! - `chunk` - 带有行号换算信息的 CSS 文本块
//! - `parser` - 基于 cssparser 分词器的容错递归下降解析器
//! - `selectors` - 选择器分类
//! - `properties` - 属性名规范化与值敏感属性
//! - `dimensions` - 长度单位提取

pub mod chunk;
pub mod dimensions;
pub mod parser;
pub mod properties;
pub mod selectors;

pub use chunk::{ChunkKind, CssChunk};
pub use dimensions::{extract_units, CSS_UNITS};
pub use parser::{parse_chunk, CssFault, CssHandler};
pub use properties::{canonical_property_name, normalize_declaration, strip_important, NormalizedProperty};
pub use selectors::{classify_selector_list, SelectorFeatures};

//! # 工具模块
//!
//! 这个模块包含各种工具函数和实用程序：
//!
//! - 行号映射（字节偏移量 → 行号）
//! - data URL 头部解析
//! - URL 文件扩展名提取
//!
//! # 模块组织
//!
//! - `lines` - 文档行索引
//! - `url` - URL处理、data URL解析等工具函数

pub mod lines;
pub mod url;

// Re-export commonly used items for convenience
pub use lines::LineIndex;
pub use url::{file_extension, is_data_url, parse_data_url_header, Url};

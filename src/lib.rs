//! # vmail-parser
//!
//! 报告 HTML 文档（通常是电子邮件）用到了哪些 HTML 与 CSS 特性，以及每个特性出现在哪些行。
//!
//! ## 模块组织
//!
//! - `core` - 解码文档并驱动各个解析器生成报告
//! - `report` - 报告数据模型
//! - `parsers` - HTML 遍历、CSS 解析与图片格式识别
//! - `env` - 环境变量配置
//! - `utils` - 行号索引与 URL 工具

pub mod core;
pub mod env;
pub mod parsers;
pub mod report;
pub mod utils;

// Re-export commonly used items for convenience
pub use self::core::{
    produce_report, produce_report_with_options, HtmlParseError, ReportError, ReportOptions,
};
pub use self::report::{FeatureTable, FlatTable, LineSet, Report, SelectorType};

//! 统一的环境变量管理系统
//!
//! 提供类型安全、可验证的环境变量读取，用于在不修改调用代码的情况下
//! 调整报告生成的配置（值敏感属性、简写属性根、文档编码、日志级别）。

use std::collections::BTreeSet;
use std::env;
use std::fmt;

use encoding_rs::Encoding;

/// 环境变量解析错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    /// 读取并解析变量；未设置时返回 `Ok(None)`
    fn get() -> EnvResult<Option<T>> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value).map(Some),
            Err(_) => Ok(None),
        }
    }

    fn get_or_default(default: T) -> T {
        match Self::get() {
            Ok(Some(value)) => value,
            _ => default,
        }
    }
}

/// 报告相关环境变量
pub mod report {
    use super::*;

    /// 按值记录的 CSS 属性
    pub struct ValueSensitiveProperties;
    impl EnvVar<BTreeSet<String>> for ValueSensitiveProperties {
        const NAME: &'static str = "VMAIL_VALUE_SENSITIVE_PROPERTIES";
        const DESCRIPTION: &'static str =
            "Comma separated CSS properties whose values are recorded (default: display)";

        fn parse(value: &str) -> EnvResult<BTreeSet<String>> {
            parse_property_list(value, Self::NAME)
        }
    }

    /// 可折叠方向长写的简写属性根
    pub struct ShorthandRoots;
    impl EnvVar<BTreeSet<String>> for ShorthandRoots {
        const NAME: &'static str = "VMAIL_SHORTHAND_ROOTS";
        const DESCRIPTION: &'static str =
            "Comma separated shorthand roots whose -top/-right/-bottom/-left longhands are collapsed";

        fn parse(value: &str) -> EnvResult<BTreeSet<String>> {
            parse_property_list(value, Self::NAME)
        }
    }

    /// 强制使用的文档编码
    pub struct DocumentEncoding;
    impl EnvVar<String> for DocumentEncoding {
        const NAME: &'static str = "VMAIL_ENCODING";
        const DESCRIPTION: &'static str = "Force the document charset (any WHATWG encoding label)";

        fn parse(value: &str) -> EnvResult<String> {
            let label = value.trim();
            match Encoding::for_label(label.as_bytes()) {
                Some(encoding) => Ok(encoding.name().to_string()),
                None => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Unknown encoding label '{}'", label),
                }),
            }
        }
    }
}

/// 日志相关环境变量
pub mod logging {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "VMAIL_LOG_LEVEL";
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn parse(value: &str) -> EnvResult<String> {
            match value.trim().to_lowercase().as_str() {
                level @ ("trace" | "debug" | "info" | "warn" | "error") => Ok(level.to_string()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }
}

/// 解析逗号分隔的 CSS 属性名列表
fn parse_property_list(value: &str, var_name: &str) -> EnvResult<BTreeSet<String>> {
    let mut properties = BTreeSet::new();

    for item in value.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        if !item
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(EnvError {
                variable: var_name.to_string(),
                message: format!("'{}' is not a valid CSS property name", item),
            });
        }
        properties.insert(item.to_ascii_lowercase());
    }

    Ok(properties)
}

/// 所有支持的环境变量及其说明，用于生成文档和 `--help` 输出
pub fn describe_all() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            report::ValueSensitiveProperties::NAME,
            report::ValueSensitiveProperties::DESCRIPTION,
        ),
        (report::ShorthandRoots::NAME, report::ShorthandRoots::DESCRIPTION),
        (
            report::DocumentEncoding::NAME,
            report::DocumentEncoding::DESCRIPTION,
        ),
        (logging::LogLevel::NAME, logging::LogLevel::DESCRIPTION),
    ]
}

//! 特性使用报告模块
//!
//! 报告由六张两级映射表和一张单级映射表组成，每个键最终对应一组从 1 开始的
//! 文档行号。报告在一次 [`produce_report`](crate::core::produce_report) 调用中
//! 由 [`ReportBuilder`] 逐步填充，返回给调用方之后不再提供任何修改接口。

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// 行号集合（去重、按升序排列）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct LineSet(BTreeSet<usize>);

impl LineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个行号，重复插入不会改变集合
    pub fn insert(&mut self, line: usize) -> bool {
        self.0.insert(line)
    }

    /// 合并另一个集合
    pub fn union_with(&mut self, other: &LineSet) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn contains(&self, line: usize) -> bool {
        self.0.contains(&line)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for LineSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        LineSet(iter.into_iter().collect())
    }
}

/// 两级映射表：外层键 → 内层键 → 行号集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct FeatureTable(BTreeMap<String, BTreeMap<String, LineSet>>);

impl FeatureTable {
    /// 查询某个 (外层键, 内层键) 对应的行号集合
    pub fn get(&self, outer: &str, inner: &str) -> Option<&LineSet> {
        self.0.get(outer).and_then(|values| values.get(inner))
    }

    /// 查询某个外层键下的全部内层映射
    pub fn values(&self, outer: &str) -> Option<&BTreeMap<String, LineSet>> {
        self.0.get(outer)
    }

    pub fn contains_key(&self, outer: &str) -> bool {
        self.0.contains_key(outer)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, LineSet>)> {
        self.0.iter().map(|(key, values)| (key.as_str(), values))
    }

    fn insert(&mut self, outer: &str, inner: &str, line: usize) {
        let values = match self.0.get_mut(outer) {
            Some(values) => values,
            None => self.0.entry(outer.to_string()).or_default(),
        };
        match values.get_mut(inner) {
            Some(lines) => {
                lines.insert(line);
            }
            None => {
                values.entry(inner.to_string()).or_default().insert(line);
            }
        }
    }
}

/// 单级映射表：键 → 行号集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct FlatTable(BTreeMap<String, LineSet>);

impl FlatTable {
    pub fn get(&self, key: &str) -> Option<&LineSet> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LineSet)> {
        self.0.iter().map(|(key, lines)| (key.as_str(), lines))
    }

    fn insert(&mut self, key: &str, line: usize) {
        match self.0.get_mut(key) {
            Some(lines) => {
                lines.insert(line);
            }
            None => {
                self.0.entry(key.to_string()).or_default().insert(line);
            }
        }
    }
}

/// CSS 选择器类别
///
/// 一条选择器分支可以同时属于多个类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectorType {
    /// 相邻兄弟组合器 `a + b`
    AdjacentSiblingCombinator,
    /// 属性选择器 `[attr]`
    AttributeSelector,
    /// 连续的类选择器 `.a.b`
    ChainingSelectors,
    /// 子组合器 `a > b`
    ChildCombinator,
    /// 类选择器 `.a`
    ClassSelector,
    /// 后代组合器 `a b`
    DescendantCombinator,
    /// 通用兄弟组合器 `a ~ b`
    GeneralSiblingCombinator,
    /// 选择器分组 `a, b`
    GroupingSelectors,
    /// ID 选择器 `#a`
    IdSelector,
    /// 类型选择器 `a`
    TypeSelector,
    /// 通配选择器 `*`
    UniversalSelectorStar,
}

impl SelectorType {
    pub const ALL: [SelectorType; 11] = [
        SelectorType::AdjacentSiblingCombinator,
        SelectorType::AttributeSelector,
        SelectorType::ChainingSelectors,
        SelectorType::ChildCombinator,
        SelectorType::ClassSelector,
        SelectorType::DescendantCombinator,
        SelectorType::GeneralSiblingCombinator,
        SelectorType::GroupingSelectors,
        SelectorType::IdSelector,
        SelectorType::TypeSelector,
        SelectorType::UniversalSelectorStar,
    ];

    /// 报告中使用的类别标识符
    pub fn as_str(self) -> &'static str {
        match self {
            SelectorType::AdjacentSiblingCombinator => "ADJACENT_SIBLING_COMBINATOR",
            SelectorType::AttributeSelector => "ATTRIBUTE_SELECTOR",
            SelectorType::ChainingSelectors => "CHAINING_SELECTORS",
            SelectorType::ChildCombinator => "CHILD_COMBINATOR",
            SelectorType::ClassSelector => "CLASS_SELECTOR",
            SelectorType::DescendantCombinator => "DESCENDANT_COMBINATOR",
            SelectorType::GeneralSiblingCombinator => "GENERAL_SIBLING_COMBINATOR",
            SelectorType::GroupingSelectors => "GROUPING_SELECTORS",
            SelectorType::IdSelector => "ID_SELECTOR",
            SelectorType::TypeSelector => "TYPE_SELECTOR",
            SelectorType::UniversalSelectorStar => "UNIVERSAL_SELECTOR_STAR",
        }
    }
}

impl fmt::Display for SelectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 特性使用报告
///
/// 所有行号都是原始文档中的行号（从 1 开始）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "PascalCase"))]
pub struct Report {
    html_tags: FeatureTable,
    css_properties: FeatureTable,
    css_selector_types: FeatureTable,
    css_pseudo_selectors: FeatureTable,
    at_rule_css_statements: FeatureTable,
    css_dimensions: FeatureTable,
    img_formats: FlatTable,
}

impl Report {
    /// 小写标签名 → `""` → 行号
    pub fn html_tags(&self) -> &FeatureTable {
        &self.html_tags
    }

    /// 规范化属性名 → 值（值敏感属性）或 `""` → 行号
    pub fn css_properties(&self) -> &FeatureTable {
        &self.css_properties
    }

    /// 选择器类别标识符 → `""` → 行号
    pub fn css_selector_types(&self) -> &FeatureTable {
        &self.css_selector_types
    }

    /// 伪类/伪元素名（不含冒号）→ `""` → 行号
    pub fn css_pseudo_selectors(&self) -> &FeatureTable {
        &self.css_pseudo_selectors
    }

    /// `@` 规则关键字（含 `@`）→ `""` → 行号
    pub fn at_rule_css_statements(&self) -> &FeatureTable {
        &self.at_rule_css_statements
    }

    /// 长度/单位 → `""` → 行号
    pub fn css_dimensions(&self) -> &FeatureTable {
        &self.css_dimensions
    }

    /// 图片格式 → 行号
    pub fn img_formats(&self) -> &FlatTable {
        &self.img_formats
    }

    /// 选择器类别的便捷查询
    pub fn selector_type_lines(&self, selector_type: SelectorType) -> Option<&LineSet> {
        self.css_selector_types.get(selector_type.as_str(), "")
    }

    /// 报告中记录的最大行号
    pub fn max_line(&self) -> Option<usize> {
        let tables = [
            &self.html_tags,
            &self.css_properties,
            &self.css_selector_types,
            &self.css_pseudo_selectors,
            &self.at_rule_css_statements,
            &self.css_dimensions,
        ];

        let two_level = tables
            .into_iter()
            .flat_map(|table| table.0.values())
            .flat_map(|values| values.values())
            .filter_map(|lines| lines.0.last().copied());
        let flat = self
            .img_formats
            .0
            .values()
            .filter_map(|lines| lines.0.last().copied());

        two_level.chain(flat).max()
    }

    /// 报告是否为空
    pub fn is_empty(&self) -> bool {
        self.html_tags.is_empty()
            && self.css_properties.is_empty()
            && self.css_selector_types.is_empty()
            && self.css_pseudo_selectors.is_empty()
            && self.at_rule_css_statements.is_empty()
            && self.css_dimensions.is_empty()
            && self.img_formats.is_empty()
    }
}

/// 报告累加器
///
/// 解析流水线中唯一可变的状态。所有写入都是幂等的。
#[derive(Debug, Default)]
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_html_tag(&mut self, tag_name: &str, line: usize) {
        self.report.html_tags.insert(tag_name, "", line);
    }

    pub fn record_css_property(&mut self, property: &str, value_key: &str, line: usize) {
        self.report.css_properties.insert(property, value_key, line);
    }

    pub fn record_selector_type(&mut self, selector_type: SelectorType, line: usize) {
        self.report
            .css_selector_types
            .insert(selector_type.as_str(), "", line);
    }

    pub fn record_pseudo_selector(&mut self, name: &str, line: usize) {
        self.report.css_pseudo_selectors.insert(name, "", line);
    }

    pub fn record_at_rule(&mut self, keyword: &str, line: usize) {
        self.report.at_rule_css_statements.insert(keyword, "", line);
    }

    pub fn record_dimension(&mut self, unit: &str, line: usize) {
        self.report.css_dimensions.insert(unit, "", line);
    }

    pub fn record_img_format(&mut self, format: &str, line: usize) {
        self.report.img_formats.insert(format, line);
    }

    /// 结束累加，交出不可变的报告
    pub fn finish(self) -> Report {
        self.report
    }
}

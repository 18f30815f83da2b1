//! 选择器分类
//!
//! 把一条规则的选择器列表原文归入固定的 11 个类别，并收集其中的伪类和伪元素名。
//! 分类是基于存在性的：同一个分支可以同时属于多个类别。
//!
//! 处理顺序：
//! 1. 在顶层逗号处拆分出分支，多于一个分支即为 `GROUPING_SELECTORS`
//! 2. 去掉每个分支中的伪类/伪元素（连同其参数），记录它们的名称
//! 3. 把剩余文本切分为复合选择器和组合器，再逐个运行类别检测函数

use std::collections::BTreeSet;
use std::iter::Peekable;
use std::str::Chars;

use crate::report::SelectorType;

/// 一个选择器列表的分类结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorFeatures {
    /// 命中的选择器类别
    pub types: BTreeSet<SelectorType>,
    /// 伪类/伪元素名（小写，不含冒号），按出现顺序
    pub pseudo_selectors: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
    AdjacentSibling,
    GeneralSibling,
}

impl Combinator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(Combinator::Child),
            '+' => Some(Combinator::AdjacentSibling),
            '~' => Some(Combinator::GeneralSibling),
            _ => None,
        }
    }
}

/// 复合选择器中的简单选择器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Simple {
    Type,
    Universal,
    Class,
    Id,
    Attribute,
    Other,
}

#[derive(Debug, Default)]
struct Branch {
    compounds: Vec<Vec<Simple>>,
    combinators: Vec<Combinator>,
}

type Detector = fn(&Branch) -> bool;

/// 类别检测函数，彼此独立
const DETECTORS: &[(SelectorType, Detector)] = &[
    (SelectorType::TypeSelector, has_type_selector),
    (SelectorType::UniversalSelectorStar, is_universal),
    (SelectorType::ClassSelector, has_class),
    (SelectorType::IdSelector, has_id),
    (SelectorType::AttributeSelector, has_attribute),
    (SelectorType::ChildCombinator, has_child_combinator),
    (SelectorType::AdjacentSiblingCombinator, has_adjacent_sibling_combinator),
    (SelectorType::GeneralSiblingCombinator, has_general_sibling_combinator),
    (SelectorType::DescendantCombinator, has_descendant_combinator),
    (SelectorType::ChainingSelectors, has_chained_classes),
];

/// 只由后代组合器连接，且至少有一个复合选择器是裸标识符
///
/// `a`、`.cover img` 命中；`h1 + p` 不命中。
fn has_type_selector(branch: &Branch) -> bool {
    branch
        .combinators
        .iter()
        .all(|c| *c == Combinator::Descendant)
        && branch
            .compounds
            .iter()
            .any(|compound| compound.as_slice() == [Simple::Type])
}

fn is_universal(branch: &Branch) -> bool {
    branch.compounds.len() == 1 && branch.compounds[0].as_slice() == [Simple::Universal]
}

fn has_simple(branch: &Branch, kind: Simple) -> bool {
    branch.compounds.iter().flatten().any(|simple| *simple == kind)
}

fn has_class(branch: &Branch) -> bool {
    has_simple(branch, Simple::Class)
}

fn has_id(branch: &Branch) -> bool {
    has_simple(branch, Simple::Id)
}

fn has_attribute(branch: &Branch) -> bool {
    has_simple(branch, Simple::Attribute)
}

fn has_child_combinator(branch: &Branch) -> bool {
    branch.combinators.contains(&Combinator::Child)
}

fn has_adjacent_sibling_combinator(branch: &Branch) -> bool {
    branch.combinators.contains(&Combinator::AdjacentSibling)
}

fn has_general_sibling_combinator(branch: &Branch) -> bool {
    branch.combinators.contains(&Combinator::GeneralSibling)
}

/// 空白分隔且未被显式组合器吸收
fn has_descendant_combinator(branch: &Branch) -> bool {
    branch.combinators.contains(&Combinator::Descendant)
}

/// 同一个复合选择器中紧挨着的两个类选择器，如 `.a.b`
///
/// `.button[disabled]` 这类类选择器后接其他简单选择器的情况不算。
fn has_chained_classes(branch: &Branch) -> bool {
    branch
        .compounds
        .iter()
        .any(|compound| compound.windows(2).any(|w| w == [Simple::Class, Simple::Class]))
}

/// 对选择器列表分类
///
/// # 参数
///
/// * `selector_list` - 规则 `{` 之前的原文
///
/// # 返回值
///
/// 命中的类别和伪选择器名称
pub fn classify_selector_list(selector_list: &str) -> SelectorFeatures {
    let mut features = SelectorFeatures::default();
    let text = strip_comments(selector_list);

    let branches: Vec<&str> = split_top_level_commas(&text)
        .into_iter()
        .map(str::trim)
        .filter(|branch| !branch.is_empty())
        .collect();

    if branches.len() > 1 {
        features.types.insert(SelectorType::GroupingSelectors);
    }

    for branch in branches {
        let (stripped, pseudos) = strip_pseudo_selectors(branch);
        features.pseudo_selectors.extend(pseudos);

        let shape = parse_branch(&stripped);
        for (selector_type, detector) in DETECTORS {
            if detector(&shape) {
                features.types.insert(*selector_type);
            }
        }
    }

    features
}

/// 去掉 `/* ... */` 注释
fn strip_comments(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => {
                result.push(' ');
                rest = &rest[start + 2 + end + 2..];
            }
            None => return result,
        }
    }
    result.push_str(rest);

    result
}

/// 在不处于 `()`、`[]` 或字符串内部的逗号处拆分
fn split_top_level_commas(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' | '\'' => match quote {
                Some(q) if q == c => quote = None,
                None => quote = Some(c),
                _ => {}
            },
            _ if quote.is_some() => {}
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);

    parts
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

/// 去掉分支中的伪类和伪元素，返回剩余文本和伪选择器名称
fn strip_pseudo_selectors(branch: &str) -> (String, Vec<String>) {
    let mut stripped = String::with_capacity(branch.len());
    let mut names = Vec::new();
    let mut chars = branch.chars().peekable();
    let mut bracket_depth = 0usize;
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            stripped.push(c);
            if c == '\\' {
                if let Some(next) = chars.next() {
                    stripped.push(next);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '\\' => {
                stripped.push(c);
                if let Some(next) = chars.next() {
                    stripped.push(next);
                }
            }
            '"' | '\'' if bracket_depth > 0 => {
                quote = Some(c);
                stripped.push(c);
            }
            '[' => {
                bracket_depth += 1;
                stripped.push(c);
            }
            ']' => {
                bracket_depth = bracket_depth.saturating_sub(1);
                stripped.push(c);
            }
            ':' if bracket_depth == 0 => {
                if chars.peek() == Some(&':') {
                    chars.next();
                }

                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if !is_ident_char(next) {
                        break;
                    }
                    name.push(next.to_ascii_lowercase());
                    chars.next();
                }

                // 参数整体丢弃
                if chars.peek() == Some(&'(') {
                    let mut depth = 0usize;
                    let mut arg_quote: Option<char> = None;
                    for next in chars.by_ref() {
                        match (arg_quote, next) {
                            (Some(q), n) if n == q => arg_quote = None,
                            (Some(_), _) => {}
                            (None, '"' | '\'') => arg_quote = Some(next),
                            (None, '(') => depth += 1,
                            (None, ')') => {
                                depth -= 1;
                                if depth == 0 {
                                    break;
                                }
                            }
                            _ => {}
                        }
                    }
                }

                if !name.is_empty() {
                    names.push(name);
                }
            }
            _ => stripped.push(c),
        }
    }

    (stripped, names)
}

/// 把去掉伪选择器之后的分支切分为复合选择器和组合器
///
/// 相邻的多个组合器折叠为一个：显式组合器优先于空白，第一个显式组合器生效。
/// 开头和结尾的组合器被丢弃。
fn parse_branch(text: &str) -> Branch {
    let mut branch = Branch::default();
    let mut current = String::new();
    let mut pending: Option<Combinator> = None;
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    let flush = |current: &mut String, pending: &mut Option<Combinator>, branch: &mut Branch| {
        if current.is_empty() {
            return;
        }
        if !branch.compounds.is_empty() {
            if let Some(combinator) = pending.take() {
                branch.combinators.push(combinator);
            }
        }
        *pending = None;
        branch.compounds.push(parse_compound(current));
        current.clear();
    };

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            current.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '\\' => {
                current.push(c);
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            '"' | '\'' if depth > 0 => {
                quote = Some(c);
                current.push(c);
            }
            '[' | '(' => {
                depth += 1;
                current.push(c);
            }
            ']' | ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            _ if depth > 0 => current.push(c),
            _ if c.is_whitespace() => {
                flush(&mut current, &mut pending, &mut branch);
                if pending.is_none() {
                    pending = Some(Combinator::Descendant);
                }
            }
            _ => match Combinator::from_char(c) {
                Some(combinator) => {
                    flush(&mut current, &mut pending, &mut branch);
                    if matches!(pending, None | Some(Combinator::Descendant)) {
                        pending = Some(combinator);
                    }
                }
                None => current.push(c),
            },
        }
    }
    flush(&mut current, &mut pending, &mut branch);

    branch
}

/// 跳过一个标识符，返回跳过的字符数
fn skip_ident(chars: &mut Peekable<Chars<'_>>) -> usize {
    let mut length = 0;
    while let Some(&c) = chars.peek() {
        if c == '\\' {
            chars.next();
            chars.next();
        } else if is_ident_char(c) {
            chars.next();
        } else {
            break;
        }
        length += 1;
    }
    length
}

/// 把复合选择器文本拆分为简单选择器
fn parse_compound(text: &str) -> Vec<Simple> {
    let mut simples = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '.' | '#' => {
                chars.next();
                if skip_ident(&mut chars) > 0 {
                    simples.push(if c == '.' { Simple::Class } else { Simple::Id });
                } else {
                    simples.push(Simple::Other);
                }
            }
            '[' => {
                let mut depth = 0usize;
                let mut quote: Option<char> = None;
                let mut balanced = false;
                for next in chars.by_ref() {
                    match (quote, next) {
                        (Some(q), n) if n == q => quote = None,
                        (Some(_), _) => {}
                        (None, '"' | '\'') => quote = Some(next),
                        (None, '[') => depth += 1,
                        (None, ']') => {
                            depth -= 1;
                            if depth == 0 {
                                balanced = true;
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                simples.push(if balanced {
                    Simple::Attribute
                } else {
                    Simple::Other
                });
            }
            '*' => {
                chars.next();
                simples.push(Simple::Universal);
            }
            _ if c.is_alphabetic() || c == '_' || c == '\\' || (c == '-' && simples.is_empty()) => {
                skip_ident(&mut chars);
                simples.push(Simple::Type);
            }
            _ => {
                chars.next();
                simples.push(Simple::Other);
            }
        }
    }

    simples
}

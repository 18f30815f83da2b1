//! 长度与单位提取

use cssparser::{ParseError, Parser, ParserInput, Token};

/// 识别的 CSS 单位（小写），`%` 单独处理
pub const CSS_UNITS: &[&str] = &[
    // 绝对长度
    "px", "cm", "mm", "q", "in", "pt", "pc",
    // 字体相对长度
    "em", "rem", "ex", "rex", "cap", "ch", "ic", "lh", "rlh",
    // 视口长度
    "vw", "vh", "vi", "vb", "vmin", "vmax",
    "svw", "svh", "svi", "svb", "svmin", "svmax",
    "lvw", "lvh", "lvi", "lvb", "lvmin", "lvmax",
    "dvw", "dvh", "dvi", "dvb", "dvmin", "dvmax",
    // 容器查询长度
    "cqw", "cqh", "cqi", "cqb", "cqmin", "cqmax",
    // 角度
    "deg", "grad", "rad", "turn",
    // 时间
    "s", "ms",
    // 频率
    "hz", "khz",
    // 分辨率
    "dpi", "dpcm", "dppx", "x",
    // 弹性长度
    "fr",
    "%",
];

fn registered_unit(unit: &str) -> Option<&'static str> {
    CSS_UNITS
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(unit))
}

/// 提取声明值中出现的单位（去重，按出现顺序）
///
/// 数字紧跟单位才算，`calc()` 等函数的参数会被递归扫描。不在单位表中的
/// 后缀被忽略。
///
/// ```
/// use vmail_parser::parsers::css::extract_units;
///
/// assert_eq!(extract_units("calc(100vh - 2rem) 50%"), vec!["vh", "rem", "%"]);
/// ```
pub fn extract_units(value: &str) -> Vec<&'static str> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut units = Vec::new();

    collect_units(&mut parser, &mut units);

    units
}

fn push_unit(units: &mut Vec<&'static str>, unit: &'static str) {
    if !units.contains(&unit) {
        units.push(unit);
    }
}

fn collect_units<'i>(input: &mut Parser<'i, '_>, units: &mut Vec<&'static str>) {
    loop {
        let token = match input.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::Dimension { ref unit, .. } => {
                if let Some(unit) = registered_unit(unit) {
                    push_unit(units, unit);
                }
            }
            Token::Percentage { .. } => push_unit(units, "%"),
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                let _ = input.parse_nested_block(|nested| {
                    collect_units(nested, units);
                    Ok::<(), ParseError<'i, ()>>(())
                });
            }
            _ => {}
        }
    }
}

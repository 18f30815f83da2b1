//! 开始标签定位
//!
//! html5ever 的分词器只报告记号结束时所在的行，而报告需要开始标签 `<` 所在的行
//! （属性可能跨越多行）。[`TagLocator`] 按分词器输出记号的顺序在源文本中向前
//! 查找对应的标签，得到其字节偏移。游标只会前进，注释、文档类型声明以及原始文本
//! 元素的内容在对应记号到达时被跳过，所以其中类似标签的文本不会被误认。

/// 标签在源文本中的字节范围，`end` 指向 `>` 之后
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan {
    pub start: usize,
    pub end: usize,
}

/// 只前进的标签查找游标
#[derive(Debug, Clone)]
pub struct TagLocator<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> TagLocator<'a> {
    pub fn new(source: &'a str) -> Self {
        TagLocator { source, cursor: 0 }
    }

    /// 查找下一个名为 `name` 的开始标签并把游标移到其后
    ///
    /// 找不到时游标保持不变。
    pub fn find_start_tag(&mut self, name: &str) -> Option<TagSpan> {
        let start = self.find_tag_open(name, false)?;
        let end = self.tag_end(start + 1 + name.len());
        self.cursor = end;

        Some(TagSpan { start, end })
    }

    /// 查找下一个名为 `name` 的结束标签并把游标移到其后
    pub fn find_end_tag(&mut self, name: &str) -> Option<TagSpan> {
        let start = self.find_tag_open(name, true)?;
        let bytes = self.source.as_bytes();
        let end = bytes[start..]
            .iter()
            .position(|&b| b == b'>')
            .map(|offset| start + offset + 1)
            .unwrap_or(bytes.len());
        self.cursor = end;

        Some(TagSpan { start, end })
    }

    /// 跳过下一个注释、文档类型声明或处理指令
    ///
    /// `</` 后跟非字母（如 `</ p>`）会被分词器当作伪注释，同样到下一个 `>` 结束。
    pub fn skip_declaration(&mut self) {
        let bytes = self.source.as_bytes();
        let mut i = self.cursor;

        while i + 1 < bytes.len() {
            let opens_declaration = bytes[i + 1] == b'!' || bytes[i + 1] == b'?';
            if bytes[i] == b'<' && (opens_declaration || is_bogus_end_tag(&bytes[i..])) {
                let rest = &self.source[i..];
                self.cursor = if rest.starts_with("<!--") {
                    // `<!-->` 和 `<!--->` 是空注释
                    let body = i + 4;
                    let short_close = ["-->", ">"]
                        .iter()
                        .filter(|close| self.source[body..].starts_with(**close))
                        .map(|close| body + close.len())
                        .next();
                    short_close.unwrap_or_else(|| {
                        self.source[body..]
                            .find("-->")
                            .map(|offset| body + offset + 3)
                            .unwrap_or(bytes.len())
                    })
                } else {
                    rest.find('>')
                        .map(|offset| i + offset + 1)
                        .unwrap_or(bytes.len())
                };
                return;
            }
            i += 1;
        }
    }

    /// 查找 `<name` 或 `</name`，名称不区分大小写且其后必须是分隔符
    fn find_tag_open(&self, name: &str, closing: bool) -> Option<usize> {
        let bytes = self.source.as_bytes();
        let name = name.as_bytes();
        let prefix_len = if closing { 2 } else { 1 };
        let mut i = self.cursor;

        while i < bytes.len() {
            let offset = bytes[i..].iter().position(|&b| b == b'<')?;
            i += offset;

            let name_start = i + prefix_len;
            let name_end = name_start + name.len();
            let prefix_matches = !closing || bytes.get(i + 1) == Some(&b'/');

            if prefix_matches
                && name_end <= bytes.len()
                && bytes[name_start..name_end].eq_ignore_ascii_case(name)
                && bytes
                    .get(name_end)
                    .map_or(true, |&b| b.is_ascii_whitespace() || b == b'/' || b == b'>')
            {
                return Some(i);
            }
            i += 1;
        }

        None
    }

    /// 从标签名之后找到标签结束的 `>`，跳过带引号的属性值
    fn tag_end(&self, from: usize) -> usize {
        let bytes = self.source.as_bytes();
        let mut i = from;

        while i < bytes.len() {
            match bytes[i] {
                b'>' => return i + 1,
                b'=' => {
                    i += 1;
                    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                        i += 1;
                    }
                    if let Some(&quote @ (b'"' | b'\'')) = bytes.get(i) {
                        match bytes[i + 1..].iter().position(|&b| b == quote) {
                            Some(offset) => i += offset + 2,
                            None => return bytes.len(),
                        }
                    }
                }
                _ => i += 1,
            }
        }

        bytes.len()
    }
}

/// `</` 后跟既不是字母也不是 `>` 的字节
fn is_bogus_end_tag(bytes: &[u8]) -> bool {
    matches!(bytes, [b'<', b'/', next, ..] if !next.is_ascii_alphabetic() && *next != b'>')
}

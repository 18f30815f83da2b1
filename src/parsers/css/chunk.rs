/// CSS 文本块的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// `<style>` 元素的内容：规则列表，块内的换行对应文档中的换行
    StyleSheet,
    /// `style` 属性的值：声明列表，无论内部如何换行都视为位于元素所在的一行
    Inline,
}

/// 从文档中提取出的一段 CSS 文本，附带把块内行号换算为文档行号所需的信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssChunk<'a> {
    text: &'a str,
    base_line: usize,
    kind: ChunkKind,
}

impl<'a> CssChunk<'a> {
    /// `<style>` 元素内容，`base_line` 是内容第一个字符所在的行
    pub fn style_sheet(text: &'a str, base_line: usize) -> Self {
        CssChunk {
            text,
            base_line,
            kind: ChunkKind::StyleSheet,
        }
    }

    /// `style` 属性值，`line` 是元素开始标签所在的行
    pub fn inline(text: &'a str, line: usize) -> Self {
        CssChunk {
            text,
            base_line: line,
            kind: ChunkKind::Inline,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn base_line(&self) -> usize {
        self.base_line
    }

    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    /// 把块内行号（从 1 开始）换算为文档行号
    pub fn absolute_line(&self, relative_line: usize) -> usize {
        match self.kind {
            ChunkKind::StyleSheet => self.base_line + relative_line.saturating_sub(1),
            ChunkKind::Inline => self.base_line,
        }
    }
}

//! 行号映射模块
//!
//! 将文档中的字节偏移量转换为从 1 开始的行号。换行符的位置只计算一次，
//! 之后每次查询都通过二分查找完成。
//!
//! `\n`、`\r\n` 和单独的 `\r` 都被视为一个换行，这与 html5ever
//! 分词器对输入流的预处理方式保持一致。

/// 文档行索引
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// 每个换行序列结束后下一个字节的偏移量（即每一行的起始偏移，第 1 行除外）
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// 为给定文本建立行索引
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(i + 1);
                }
                _ => {}
            }
            i += 1;
        }

        LineIndex {
            line_starts,
            len: bytes.len(),
        }
    }

    /// 返回包含 `offset` 的行号（从 1 开始）
    ///
    /// 超出文档长度的偏移量映射到最后一行。
    pub fn line_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.len);
        // 行起始偏移 <= offset 的数量就是该偏移之前的换行数
        self.line_starts.partition_point(|&start| start <= offset) + 1
    }

    /// 文档总行数（空文档也算一行）
    pub fn line_count(&self) -> usize {
        self.line_starts.len() + 1
    }
}

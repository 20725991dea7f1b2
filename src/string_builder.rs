//! 改写 SQL 时使用的字符串缓冲。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    /// 预留与原始 SQL 相近的容量；改写通常只会让长度小幅变化。
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            buf: String::with_capacity(n),
        }
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub(crate) fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// 写入 `$<n>` 形式的序号占位符。
    pub(crate) fn write_ordinal(&mut self, prefix: char, n: usize) {
        self.buf.push(prefix);
        self.buf.push_str(&n.to_string());
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

//! 占位符风格：决定改写后 SQL 中位置参数的文本形式。

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// 改写后的位置参数形式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaceholderStyle {
    /// 保留 `:name` 文本，仅登记位置。
    ColonName,
    /// 按出现次序写成 `$1`、`$2` ……（同名参数重复出现也各占一个序号）。
    DollarOrdinal,
    /// 每处都写成 `?`。
    #[default]
    QuestionMark,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("named query unknown placeholder style {0:?}")]
pub struct StyleParseError(pub String);

static DEFAULT_STYLE: AtomicU8 = AtomicU8::new(PlaceholderStyle::QuestionMark as u8);
static DEFAULT_STYLE_LOCK: Mutex<()> = Mutex::new(());

impl PlaceholderStyle {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::ColonName,
            1 => Self::DollarOrdinal,
            _ => Self::QuestionMark,
        }
    }

    fn to_u8(self) -> u8 {
        self as u8
    }

    /// 按单字符指示符选择风格：`":"`、`"$"`，其余一律视为 `?`。
    pub fn from_indicator(indicator: &str) -> Self {
        match indicator {
            ":" => Self::ColonName,
            "$" => Self::DollarOrdinal,
            _ => Self::QuestionMark,
        }
    }
}

impl FromStr for PlaceholderStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ":" => return Ok(Self::ColonName),
            "$" => return Ok(Self::DollarOrdinal),
            "?" => return Ok(Self::QuestionMark),
            _ => {}
        }
        match s.to_ascii_lowercase().as_str() {
            "colon" => Ok(Self::ColonName),
            "dollar" => Ok(Self::DollarOrdinal),
            "question" => Ok(Self::QuestionMark),
            _ => Err(StyleParseError(s.to_string())),
        }
    }
}

impl fmt::Display for PlaceholderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ColonName => ":name",
            Self::DollarOrdinal => "$n",
            Self::QuestionMark => "?",
        };
        f.write_str(s)
    }
}

/// 获取当前全局默认风格（`NamedQuery::new` 使用）。
pub fn default_style() -> PlaceholderStyle {
    PlaceholderStyle::from_u8(DEFAULT_STYLE.load(Ordering::Relaxed))
}

/// 设置全局默认风格，返回旧值。
pub fn set_default_style(style: PlaceholderStyle) -> PlaceholderStyle {
    let old = DEFAULT_STYLE.swap(style.to_u8(), Ordering::Relaxed);
    PlaceholderStyle::from_u8(old)
}

/// 修改全局默认风格的 RAII guard（持有全局锁，避免并行测试互相干扰）。
pub struct DefaultStyleGuard {
    _lock: MutexGuard<'static, ()>,
    old: PlaceholderStyle,
}

impl Drop for DefaultStyleGuard {
    fn drop(&mut self) {
        set_default_style(self.old);
    }
}

/// 在一个作用域内临时设置默认风格，退出作用域后自动恢复。
pub fn set_default_style_scoped(style: PlaceholderStyle) -> DefaultStyleGuard {
    let lock = DEFAULT_STYLE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let old = set_default_style(style);
    DefaultStyleGuard { _lock: lock, old }
}

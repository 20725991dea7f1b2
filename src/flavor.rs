//! SQL Flavor（方言）：按目标数据库选择占位符风格。

use crate::style::PlaceholderStyle;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
    Oracle,
    ClickHouse,
    Presto,
}

impl Flavor {
    /// 该方言驱动接受的位置参数形式。
    pub fn placeholder_style(self) -> PlaceholderStyle {
        match self {
            Self::PostgreSQL => PlaceholderStyle::DollarOrdinal,
            Self::Oracle => PlaceholderStyle::ColonName,
            Self::MySQL | Self::SQLite | Self::ClickHouse | Self::Presto => {
                PlaceholderStyle::QuestionMark
            }
        }
    }
}

impl From<Flavor> for PlaceholderStyle {
    fn from(flavor: Flavor) -> Self {
        flavor.placeholder_style()
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLite => "SQLite",
            Self::Oracle => "Oracle",
            Self::ClickHouse => "ClickHouse",
            Self::Presto => "Presto",
        };
        f.write_str(s)
    }
}

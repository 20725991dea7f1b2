//! NamedQuery：持有改写后的 SQL 与位置参数槽位，按名字写入参数值。
//!
//! ```
//! use halo_named_query::{NamedQuery, PlaceholderStyle, SqlValue};
//!
//! let mut q = NamedQuery::with_style(
//!     "SELECT * FROM user WHERE id = :id OR parent_id = :id",
//!     PlaceholderStyle::DollarOrdinal,
//! );
//! q.set_value("id", 42_i64);
//!
//! assert_eq!(q.revised_query(), "SELECT * FROM user WHERE id = $1 OR parent_id = $2");
//! assert_eq!(
//!     q.resolved_values().unwrap(),
//!     vec![SqlValue::I64(42), SqlValue::I64(42)],
//! );
//! ```
//!
//! 同一个 `NamedQuery` 可以反复绑定、反复取值；改写后的 SQL 不会变化。
//! 内部没有锁：绑定需要 `&mut self`，多线程共享时由调用方负责同步。

use crate::arg::Arg;
use crate::flavor::Flavor;
use crate::scanner::{Scanned, scan};
use crate::style::{PlaceholderStyle, default_style};
use crate::value::SqlValue;
use crate::valuer::ValuerError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct NamedQuery {
    original_query: String,
    revised_query: String,
    style: PlaceholderStyle,
    positions: HashMap<String, Vec<usize>>,
    /// `None` 表示尚未绑定。
    slots: Vec<Option<Arg>>,
}

impl NamedQuery {
    /// 使用全局默认风格（见 `set_default_style`）。
    pub fn new(query: impl Into<String>) -> Self {
        Self::with_style(query, default_style())
    }

    pub fn with_style(query: impl Into<String>, style: PlaceholderStyle) -> Self {
        let original_query = query.into();
        let Scanned {
            revised,
            positions,
            slot_count,
        } = scan(&original_query, style);

        tracing::trace!(
            %style,
            slots = slot_count,
            names = positions.len(),
            "named query rewritten"
        );

        Self {
            original_query,
            revised_query: revised,
            style,
            positions,
            slots: vec![None; slot_count],
        }
    }

    pub fn for_flavor(query: impl Into<String>, flavor: Flavor) -> Self {
        Self::with_style(query, flavor.placeholder_style())
    }

    /// 把 `value` 写入 `name` 对应的全部槽位，覆盖旧值。
    ///
    /// SQL 中没有该参数时什么也不做，方便同一组参数复用于多条查询。
    pub fn set_value(&mut self, name: &str, value: impl Into<Arg>) {
        let Some(indexes) = self.positions.get(name) else {
            tracing::trace!(name, "named query has no such parameter, value ignored");
            return;
        };
        let value = value.into();
        for &i in indexes {
            self.slots[i] = Some(value.clone());
        }
    }

    /// 把所有槽位重置为未绑定。
    pub fn clear_values(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    pub fn original_query(&self) -> &str {
        &self.original_query
    }

    pub fn revised_query(&self) -> &str {
        &self.revised_query
    }

    pub fn style(&self) -> PlaceholderStyle {
        self.style
    }

    /// 当前槽位，按改写后 SQL 中占位符的先后顺序排列。
    pub fn slots(&self) -> &[Option<Arg>] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn positions(&self) -> &HashMap<String, Vec<usize>> {
        &self.positions
    }

    pub fn positions_of(&self, name: &str) -> Option<&[usize]> {
        self.positions.get(name).map(Vec::as_slice)
    }

    /// SQL 中出现过的参数名（无序）。
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    /// 取出交给驱动的参数列表：valuer 在此时求值，未绑定的槽位为 `Null`。
    pub fn resolved_values(&self) -> Result<Vec<SqlValue>, ValuerError> {
        self.slots
            .iter()
            .map(|slot| match slot {
                Some(arg) => arg.resolve(),
                None => Ok(SqlValue::Null),
            })
            .collect()
    }

    /// 拆出改写后的 SQL 与槽位。
    pub fn into_parts(self) -> (String, Vec<Option<Arg>>) {
        (self.revised_query, self.slots)
    }
}

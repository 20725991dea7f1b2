//! SqlValuer：绑定时只存放、取参数列表时才求值的参数。
//!
//! `NamedQuery::set_value` 把 valuer 原样放进槽位；直到 `NamedQuery::resolved_values`
//! 才调用 `value()`，因此同一个查询每次取值都会重新计算。任一 valuer 失败时整个参数列表失败。

use crate::value::SqlValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("named query sql valuer error: {0}")]
pub struct ValuerError(pub String);

/// 延迟求值的参数。要求 `Send + Sync`，使持有它的 `NamedQuery` 可以跨线程移动与共享。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug + Send + Sync {
    fn value(&self) -> Result<SqlValue, ValuerError>;
}

dyn_clone::clone_trait_object!(SqlValuer);

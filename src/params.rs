//! 批量绑定：从 key/value 集合或 struct 字段一次写入多个参数。
//!
//! Rust 没有运行时反射，struct 字段通过 `named_params!` 宏生成的元数据枚举：
//!
//! ```
//! use halo_named_query::{NamedQuery, PlaceholderStyle, named_params};
//!
//! #[derive(Clone)]
//! struct Filter {
//!     pub id: i64,
//!     pub first_name: String,
//! }
//!
//! named_params! {
//!     impl Filter {
//!         pub id: {},
//!         pub first_name: { param: "firstName" },
//!     }
//! }
//!
//! let mut q = NamedQuery::with_style(
//!     "SELECT * FROM user WHERE id = :id AND first_name = :firstName",
//!     PlaceholderStyle::QuestionMark,
//! );
//! q.set_values_from_struct(&Filter { id: 1, first_name: "Alice".into() }).unwrap();
//! assert_eq!(q.slots().iter().filter(|s| s.is_some()).count(), 2);
//! ```

use crate::arg::Arg;
use crate::query::NamedQuery;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("named query unable to bind values from {type_name}: value is not a struct")]
    InvalidArgument { type_name: &'static str },
}

/// 字段元数据（由 `named_params!` 生成）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamField {
    /// Rust 字段名
    pub rust: &'static str,
    /// 显式指定的参数名；为空时使用 `rust`。
    pub param: Option<&'static str>,
    /// 非 `pub` 字段不参与绑定。
    pub public: bool,
}

impl ParamField {
    pub fn param_name(&self) -> &'static str {
        self.param.unwrap_or(self.rust)
    }
}

/// 能以“字段名 -> 值”形式暴露自身的类型。
///
/// 非 struct 类型（标量、字符串、集合）返回 `None`，批量绑定时会被拒绝。
pub trait ParamStruct {
    fn param_fields(&self) -> Option<&'static [ParamField]>;

    /// 按 `param_fields` 的顺序返回字段值。
    fn param_values(&self) -> Vec<Arg>;
}

macro_rules! not_a_struct {
    ($($t:ty),+ $(,)?) => {
        $(impl ParamStruct for $t {
            fn param_fields(&self) -> Option<&'static [ParamField]> {
                None
            }

            fn param_values(&self) -> Vec<Arg> {
                Vec::new()
            }
        })+
    };
}

not_a_struct!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    str,
    String,
);

impl<T> ParamStruct for Option<T> {
    fn param_fields(&self) -> Option<&'static [ParamField]> {
        None
    }

    fn param_values(&self) -> Vec<Arg> {
        Vec::new()
    }
}

impl<T> ParamStruct for [T] {
    fn param_fields(&self) -> Option<&'static [ParamField]> {
        None
    }

    fn param_values(&self) -> Vec<Arg> {
        Vec::new()
    }
}

impl<T> ParamStruct for Vec<T> {
    fn param_fields(&self) -> Option<&'static [ParamField]> {
        None
    }

    fn param_values(&self) -> Vec<Arg> {
        Vec::new()
    }
}

impl<K, V, S> ParamStruct for HashMap<K, V, S> {
    fn param_fields(&self) -> Option<&'static [ParamField]> {
        None
    }

    fn param_values(&self) -> Vec<Arg> {
        Vec::new()
    }
}

impl<K, V> ParamStruct for BTreeMap<K, V> {
    fn param_fields(&self) -> Option<&'static [ParamField]> {
        None
    }

    fn param_values(&self) -> Vec<Arg> {
        Vec::new()
    }
}

impl<T: ParamStruct + ?Sized> ParamStruct for &T {
    fn param_fields(&self) -> Option<&'static [ParamField]> {
        (**self).param_fields()
    }

    fn param_values(&self) -> Vec<Arg> {
        (**self).param_values()
    }
}

impl NamedQuery {
    /// 对每个 key/value 调用 `set_value`；SQL 中不存在的 key 被忽略。
    pub fn set_values_from_map<K, V>(&mut self, params: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<Arg>,
    {
        for (name, value) in params {
            self.set_value(name.as_ref(), value);
        }
    }

    /// 用 struct 的公开字段绑定参数：字段有 `param` 时用它作参数名，否则用字段名。
    pub fn set_values_from_struct<T: ParamStruct + ?Sized>(
        &mut self,
        params: &T,
    ) -> Result<(), BindError> {
        let Some(fields) = params.param_fields() else {
            let type_name = std::any::type_name::<T>();
            tracing::debug!(type_name, "named query rejected non-struct parameters");
            return Err(BindError::InvalidArgument { type_name });
        };

        for (field, value) in fields.iter().zip(params.param_values()) {
            if field.public {
                self.set_value(field.param_name(), value);
            }
        }
        Ok(())
    }
}

/// 为 struct 实现 `ParamStruct`。
///
/// 每个字段写成 `[pub] 字段名: { [param: "参数名"] }`。
///
/// 是否绑定只看宏里写的可见性标记，而不是 struct 定义：只有单独的 `pub` 会绑定，
/// 不写或写 `pub(crate)`、`pub(super)` 的字段都会被跳过。
/// 字段类型需要 `Clone + Into<Arg>`。
#[macro_export]
macro_rules! named_params {
    (
        impl $ty:ty {
            $(
                $vis:vis $field:ident : { $(param: $param:literal)? $(,)? }
            ),* $(,)?
        }
    ) => {
        impl $crate::params::ParamStruct for $ty {
            fn param_fields(&self) -> Option<&'static [$crate::params::ParamField]> {
                const FIELDS: &[$crate::params::ParamField] = &[
                    $(
                        $crate::params::ParamField {
                            rust: stringify!($field),
                            param: $crate::__named_params_param!($($param)?),
                            public: matches!(stringify!($vis).as_bytes(), b"pub"),
                        }
                    ),*
                ];
                Some(FIELDS)
            }

            fn param_values(&self) -> Vec<$crate::arg::Arg> {
                vec![
                    $(
                        $crate::arg::Arg::from(self.$field.clone())
                    ),*
                ]
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __named_params_param {
    () => {
        None
    };
    ($param:literal) => {
        Some($param)
    };
}

//! Scanner：单遍扫描 SQL，把 `:name` 改写为位置参数并登记每个名字对应的槽位。
//!
//! 扫描只有两种状态：
//! - 普通状态：遇到 `:` 时读取紧随其后的字母/数字作为参数名；遇到 `'` 进入字符串状态。
//! - 字符串状态：原样输出，直到下一个 `'`。不处理任何转义，`''` 会被视为先关闭再打开。
//!
//! 任何输入都被接受，未闭合的字符串会原样输出到结尾。

use crate::string_builder::StringBuilder;
use crate::style::PlaceholderStyle;
use std::collections::HashMap;
use unicode_general_category::{GeneralCategory, get_general_category};

const PARAM_SIGIL: char = ':';
const QUOTE: char = '\'';

/// 一次扫描的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanned {
    /// 改写后的 SQL。
    pub revised: String,
    /// 参数名 -> 槽位下标（从 0 开始，按出现顺序递增）。
    pub positions: HashMap<String, Vec<usize>>,
    /// 槽位总数，等于 `:` 出现的次数（同名重复出现各占一个槽位）。
    pub slot_count: usize,
}

/// 参数名字符：字母（L*）或十进制数字（Nd）。`²`、`Ⅻ` 等其他数字以及组合附加符号都不算。
fn is_ident_char(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// 扫描 `query`，按 `style` 输出位置参数。
pub fn scan(query: &str, style: PlaceholderStyle) -> Scanned {
    let mut out = StringBuilder::with_capacity(query.len());
    let mut positions: HashMap<String, Vec<usize>> = HashMap::new();
    let mut slot_count = 0usize;
    let mut chars = query.chars();

    'scan: while let Some(mut c) = chars.next() {
        if c == PARAM_SIGIL {
            let mut name = String::new();
            let terminator = loop {
                match chars.next() {
                    Some(n) if is_ident_char(n) => name.push(n),
                    other => break other,
                }
            };

            match style {
                PlaceholderStyle::ColonName => {
                    out.write_char(PARAM_SIGIL);
                    out.write_str(&name);
                }
                PlaceholderStyle::DollarOrdinal => out.write_ordinal('$', slot_count + 1),
                PlaceholderStyle::QuestionMark => out.write_char('?'),
            }
            positions.entry(name).or_default().push(slot_count);
            slot_count += 1;

            // 终止字符按普通字符输出，但不会再被当作新的 `:`。
            match terminator {
                Some(t) => c = t,
                None => break,
            }
        }

        out.write_char(c);

        if c == QUOTE {
            loop {
                match chars.next() {
                    Some(q) => {
                        out.write_char(q);
                        if q == QUOTE {
                            break;
                        }
                    }
                    None => break 'scan,
                }
            }
        }
    }

    Scanned {
        revised: out.into_string(),
        positions,
        slot_count,
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::scan;
    use crate::style::PlaceholderStyle;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn positions(entries: &[(&str, &[usize])]) -> HashMap<String, Vec<usize>> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_vec()))
            .collect()
    }

    #[test]
    fn scan_without_sigils_is_identity() {
        let cases = [
            "",
            "SELECT 1",
            "SELECT * FROM t WHERE a = 'x' AND b = ?",
            "SELECT '日本語' FROM dual",
        ];
        for sql in cases {
            for style in [
                PlaceholderStyle::ColonName,
                PlaceholderStyle::DollarOrdinal,
                PlaceholderStyle::QuestionMark,
            ] {
                let s = scan(sql, style);
                assert_eq!(s.revised, sql);
                assert_eq!(s.slot_count, 0);
                assert!(s.positions.is_empty());
            }
        }
    }

    #[test]
    fn scan_repeated_name_per_style() {
        let expected = positions(&[("a", &[0, 2]), ("b", &[1])]);
        let cases = [
            (PlaceholderStyle::DollarOrdinal, "$1 $2 $3"),
            (PlaceholderStyle::QuestionMark, "? ? ?"),
            (PlaceholderStyle::ColonName, ":a :b :a"),
        ];

        for (style, revised) in cases {
            let s = scan(":a :b :a", style);
            assert_eq!(s.revised, revised);
            assert_eq!(s.positions, expected);
            assert_eq!(s.slot_count, 3);
        }
    }

    #[test]
    fn scan_select_with_in_list() {
        let s = scan(
            "SELECT * FROM t WHERE x = :foo AND y IN (:a, :b, :a)",
            PlaceholderStyle::QuestionMark,
        );
        assert_eq!(s.revised, "SELECT * FROM t WHERE x = ? AND y IN (?, ?, ?)");
        assert_eq!(
            s.positions,
            positions(&[("foo", &[0]), ("a", &[1, 3]), ("b", &[2])])
        );
        assert_eq!(s.slot_count, 4);
    }

    #[test]
    fn scan_dollar_ordinals_follow_occurrence() {
        let s = scan(
            "UPDATE t SET a = :x, b = :y WHERE a <> :x",
            PlaceholderStyle::DollarOrdinal,
        );
        assert_eq!(s.revised, "UPDATE t SET a = $1, b = $2 WHERE a <> $3");
        assert_eq!(s.positions, positions(&[("x", &[0, 2]), ("y", &[1])]));
    }

    #[test]
    fn scan_skips_quoted_literal() {
        let sql = "WHERE name = ':foo' AND id = :id";
        let s = scan(sql, PlaceholderStyle::QuestionMark);
        assert_eq!(s.revised, "WHERE name = ':foo' AND id = ?");
        assert_eq!(s.positions, positions(&[("id", &[0])]));
        assert_eq!(s.slot_count, 1);

        let s = scan(sql, PlaceholderStyle::DollarOrdinal);
        assert_eq!(s.revised, "WHERE name = ':foo' AND id = $1");
    }

    #[test]
    fn scan_terminator_quote_opens_literal() {
        // `:a'` 中的引号结束参数名，同时打开字符串。
        let s = scan(":a':b' :c", PlaceholderStyle::QuestionMark);
        assert_eq!(s.revised, "?':b' ?");
        assert_eq!(s.positions, positions(&[("a", &[0]), ("c", &[1])]));
    }

    #[test]
    fn scan_doubled_quote_closes_and_reopens_literal() {
        // `''` 不作为转义：第一个引号关闭字符串，第二个立即重新打开，`:x` 仍在字符串内。
        let s = scan(
            "SELECT 'it''s :x' FROM t WHERE id = :id",
            PlaceholderStyle::QuestionMark,
        );
        assert_eq!(s.revised, "SELECT 'it''s :x' FROM t WHERE id = ?");
        assert_eq!(s.positions, positions(&[("id", &[0])]));
        assert_eq!(s.slot_count, 1);
    }

    #[test]
    fn scan_backslash_quote_closes_literal() {
        // `\'` 同样会关闭字符串：`:x` 被当成参数，其后的引号又打开一个未闭合的字符串。
        let s = scan(
            "SELECT 'it\\'s :x' WHERE id = :id",
            PlaceholderStyle::QuestionMark,
        );
        assert_eq!(s.revised, "SELECT 'it\\'s ?' WHERE id = :id");
        assert_eq!(s.positions, positions(&[("x", &[0])]));
        assert_eq!(s.slot_count, 1);
    }

    #[test]
    fn scan_unterminated_literal_copies_rest() {
        let s = scan("SELECT ':a, :b", PlaceholderStyle::DollarOrdinal);
        assert_eq!(s.revised, "SELECT ':a, :b");
        assert_eq!(s.slot_count, 0);
    }

    #[test]
    fn scan_trailing_sigil_registers_empty_name() {
        let s = scan("SELECT :", PlaceholderStyle::QuestionMark);
        assert_eq!(s.revised, "SELECT ?");
        assert_eq!(s.positions, positions(&[("", &[0])]));
        assert_eq!(s.slot_count, 1);

        let s = scan("a = :", PlaceholderStyle::ColonName);
        assert_eq!(s.revised, "a = :");
    }

    #[test]
    fn scan_name_at_end_of_input() {
        let s = scan("id = :id", PlaceholderStyle::DollarOrdinal);
        assert_eq!(s.revised, "id = $1");
        assert_eq!(s.positions, positions(&[("id", &[0])]));
    }

    #[test]
    fn scan_name_stops_at_non_alphanumeric() {
        let s = scan(
            "(:first_name,:id2)",
            PlaceholderStyle::ColonName,
        );
        // `_` 不属于参数名。
        assert_eq!(s.revised, "(:first_name,:id2)");
        assert_eq!(
            s.positions,
            positions(&[("first", &[0]), ("id2", &[1])])
        );

        let s = scan("(:first_name,:id2)", PlaceholderStyle::QuestionMark);
        assert_eq!(s.revised, "(?_name,?)");
    }

    #[test]
    fn scan_unicode_names() {
        let s = scan(
            "SELECT * FROM t WHERE a = :名前 AND b = :café1",
            PlaceholderStyle::DollarOrdinal,
        );
        assert_eq!(s.revised, "SELECT * FROM t WHERE a = $1 AND b = $2");
        assert_eq!(s.positions, positions(&[("名前", &[0]), ("café1", &[1])]));
    }

    #[test]
    fn scan_name_uses_letter_and_decimal_digit_categories() {
        // 上标数字（No）和罗马数字（Nl）结束参数名，并原样输出。
        let s = scan("a = :x² AND b = :nⅫ", PlaceholderStyle::QuestionMark);
        assert_eq!(s.revised, "a = ?² AND b = ?Ⅻ");
        assert_eq!(s.positions, positions(&[("x", &[0]), ("n", &[1])]));

        // 组合附加符号（Mn）同样不属于参数名；全角数字属于 Nd。
        let s = scan(":e\u{301} :id１２", PlaceholderStyle::ColonName);
        assert_eq!(s.revised, ":e\u{301} :id１２");
        assert_eq!(s.positions, positions(&[("e", &[0]), ("id１２", &[1])]));
    }

    #[test]
    fn scan_double_colon_cast() {
        // 终止参数名的 `:` 原样输出，不再作为新参数的开始；其后的 `:int` 是新参数。
        let s = scan("SELECT :a::int", PlaceholderStyle::QuestionMark);
        assert_eq!(s.revised, "SELECT ?:?");
        assert_eq!(s.positions, positions(&[("a", &[0]), ("int", &[1])]));
        assert_eq!(s.slot_count, 2);
    }

    #[test]
    fn scan_slot_indices_are_in_range() {
        let s = scan(
            ":a, ':skip', :b, :a, :c, :b",
            PlaceholderStyle::QuestionMark,
        );
        assert_eq!(s.slot_count, 5);
        let mut all: Vec<usize> = s.positions.values().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }
}

//! Diacritic- and case-insensitive keyword matching.
//!
//! The same folding is applied on both sides of the comparison: the keyword is
//! folded in Rust before it reaches SQL, and each searched column is folded in
//! SQL through a generated REPLACE chain. Folding strips Vietnamese tone and
//! vowel marks and maps `đ` to `d`, so `nguyen` finds `Nguyễn` and `Nguyễn`
//! finds `nguyen` regardless of how the row was stored.

use sea_orm::Condition;
use sea_orm::sea_query::SimpleExpr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

// Basic safety limit on keyword length
const MAX_KEYWORD_LENGTH: usize = 10_000;

/// Columns the keyword is matched against. A row matches when any one of them
/// contains the folded keyword as a substring.
pub const SEARCH_COLUMNS: &[&str] = &["Code", "Language", "Education", "CreatedBy", "ModifiedBy"];

/// Vietnamese accented characters and the lowercase base letter each folds
/// to. Both cases are listed so the generated SQL never depends on a
/// backend's Unicode-awareness of LOWER().
const FOLD_GROUPS: &[(&str, char)] = &[
    ("àáảãạăằắẳẵặâầấẩẫậÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬ", 'a'),
    ("èéẻẽẹêềếểễệÈÉẺẼẸÊỀẾỂỄỆ", 'e'),
    ("ìíỉĩịÌÍỈĨỊ", 'i'),
    ("òóỏõọôồốổỗộơờớởỡợÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢ", 'o'),
    ("ùúủũụưừứửữựÙÚỦŨỤƯỪỨỬỮỰ", 'u'),
    ("ỳýỷỹỵỲÝỶỸỴ", 'y'),
    ("đĐ", 'd'),
];

/// Folds a raw keyword for matching: Unicode decomposition with combining
/// marks stripped, `đ`/`Đ` mapped to `d`, then trimmed and lowercased.
///
/// Returns an empty string for whitespace-only input, which callers treat as
/// "no keyword".
#[must_use]
pub fn normalize_keyword(raw: &str) -> String {
    let truncated = &raw[..floor_char_boundary(raw, MAX_KEYWORD_LENGTH)];
    let mut folded = String::with_capacity(truncated.len());
    for ch in truncated.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        match ch {
            'đ' => folded.push('d'),
            'Đ' => folded.push('D'),
            _ => folded.push(ch),
        }
    }
    folded.trim().to_lowercase()
}

/// Builds the OR-of-columns predicate for an already-folded keyword.
///
/// Every searched column goes through the same fold the keyword went through
/// in [`normalize_keyword`], so the comparison is accent- and case-blind on
/// both sides. The keyword itself only needs LIKE-escaping and quoting here.
#[must_use]
pub fn keyword_condition(folded_keyword: &str) -> Condition {
    // Escape both LIKE wildcards and SQL quotes
    let escaped = escape_like_wildcards(folded_keyword).replace('\'', "''");
    let mut any_column = Condition::any();
    for column in SEARCH_COLUMNS {
        let like_sql = format!(
            "{} LIKE '%{escaped}%' ESCAPE '\\'",
            folded_column_expr(column)
        );
        any_column = any_column.add(SimpleExpr::Custom(like_sql));
    }
    any_column
}

/// Escape LIKE wildcards to prevent wildcard injection attacks
/// Escapes: % (match any) and _ (match single char)
fn escape_like_wildcards(input: &str) -> String {
    input
        .replace('\\', "\\\\") // Escape backslash first
        .replace('%', "\\%") // Escape %
        .replace('_', "\\_") // Escape _
}

/// Wraps a column in the REPLACE chain that strips Vietnamese diacritics,
/// then LOWER() for the remaining ASCII.
fn folded_column_expr(column: &str) -> String {
    let mut expr = format!("\"{column}\"");
    for (accented, base) in FOLD_GROUPS {
        for ch in accented.chars() {
            expr = format!("REPLACE({expr}, '{ch}', '{base}')");
        }
    }
    format!("LOWER({expr})")
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    (0..=max).rev().find(|i| s.is_char_boundary(*i)).unwrap_or(0)
}

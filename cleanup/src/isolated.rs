use unicode_cleanup_source::CanonicalTables;

/// U+25CC DOTTED CIRCLE - основа для изолированного комбинирующего знака
pub const DOTTED_CIRCLE: char = '\u{25CC}';

/// вставить U+25CC перед каждым комбинирующим знаком, которому не предшествует буква, цифра,
/// знак препинания, символ, пробел, другой комбинирующий знак, ZWNJ или ZWJ
pub fn prepend_isolated_combining(input: String, tables: &CanonicalTables) -> String
{
    let is_isolated = |previous: Option<char>, c: char| {
        tables.is_combining_mark(c)
            && !previous.is_some_and(|p| tables.can_precede_combining(p))
    };

    let mut previous = None;
    let mut isolated = 0;

    for c in input.chars() {
        if is_isolated(previous, c) {
            isolated += 1;
        }

        previous = Some(c);
    }

    if isolated == 0 {
        return input;
    }

    tracing::trace!(isolated, "dotted circle inserted before isolated combining marks");

    let mut result = String::with_capacity(input.len() + isolated * DOTTED_CIRCLE.len_utf8());
    let mut previous = None;

    for c in input.chars() {
        if is_isolated(previous, c) {
            result.push(DOTTED_CIRCLE);
        }

        result.push(c);
        previous = Some(c);
    }

    result
}

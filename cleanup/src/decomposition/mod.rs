use unicode_cleanup_source::{CanonicalTables, Decompositions};

use crate::codepoint::Codepoint;
use hangul::{decompose_hangul, is_hangul_syllable};

pub mod hangul;

/// декомпозиция текста по таблице (канонической или совместимости), слоги хангыль раскладываются алгоритмически
///
/// классы комбинирования берутся из канонических таблиц, порядок нестартеров не меняется
pub fn decompose(input: &str, decompositions: &Decompositions, tables: &CanonicalTables) -> Vec<Codepoint>
{
    let mut result = Vec::with_capacity(input.len());

    for c in input.chars() {
        if c.is_ascii() {
            result.push(Codepoint::starter(c));
            continue;
        }

        match decompositions.get(&c) {
            Some(expansion) => {
                result.extend(expansion.iter().map(|&c| Codepoint::new(c, tables.ccc(c))));
            }
            None => match is_hangul_syllable(c as u32) {
                true => decompose_hangul(c as u32, &mut result),
                false => result.push(Codepoint::new(c, tables.ccc(c))),
            },
        }
    }

    result
}

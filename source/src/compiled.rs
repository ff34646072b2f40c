use icu_normalizer::properties::{CanonicalCombiningClassMap, CanonicalComposition, CanonicalDecomposition, Decomposed};
use icu_normalizer::DecomposingNormalizer;
use icu_properties::{maps, GeneralCategory, GeneralCategoryGroup};

use crate::tables::*;

/// последний кодпоинт Unicode
const LAST_CODEPOINT: u32 = 0x10FFFF;
/// первый слог хангыль
const HANGUL_S_FIRST: u32 = 0xAC00;
/// последний слог хангыль
const HANGUL_S_LAST: u32 = 0xD7A3;
/// ZERO WIDTH NON-JOINER
pub(crate) const ZWNJ: u32 = 0x200C;
/// ZERO WIDTH JOINER
pub(crate) const ZWJ: u32 = 0x200D;
/// U+FFFD REPLACEMENT CHARACTER
const REPLACEMENT: char = '\u{FFFD}';

/// канонические таблицы из данных Unicode, вкомпилированных в ICU4X
pub fn canonical() -> CanonicalTables
{
    let decomposition = CanonicalDecomposition::new();
    let composition = CanonicalComposition::new();
    let ccc = CanonicalCombiningClassMap::new();
    let gc = maps::general_category();

    let mut tables = CanonicalTables::default();
    let mut expansion = vec![];

    for code in 0 ..= LAST_CODEPOINT {
        let c = match char::from_u32(code) {
            Some(c) => c,
            None => continue,
        };

        let category = gc.get(c);

        if can_precede_combining(category) || code == ZWNJ || code == ZWJ {
            tables.can_precede_combining.push(code);
        }

        if GeneralCategoryGroup::Mark.contains(category) {
            tables.combining_marks.push(code);
        }

        let class = ccc.get(c).0;

        if class != 0 {
            tables.combining_classes.insert(c, class);
        }

        // слоги хангыль раскладываются и собираются алгоритмически, в таблицы попадают
        // только завершающие чамо V и T, которые могут скомбинироваться с предыдущим символом
        if (HANGUL_S_FIRST ..= HANGUL_S_LAST).contains(&code) {
            if let Decomposed::Expansion(_, second) = decomposition.decompose(c) {
                tables.quick_checks.entry(second).or_insert(QuickCheck::Maybe);
            }

            continue;
        }

        match decompose(&decomposition, c) {
            Decomposed::Default => continue,
            // первичный композит: второй символ пары может скомбинироваться с предыдущим
            Decomposed::Expansion(first, second) if composition.compose(first, second) == Some(c) => {
                tables.compositions.insert((first, second), c);
                tables.quick_checks.entry(second).or_insert(QuickCheck::Maybe);
            }
            // синглтоны, исключения композиции, декомпозиции, начинающиеся с нестартера
            _ => {
                tables.quick_checks.insert(c, QuickCheck::No);
            }
        }

        expansion.clear();
        expand(&decomposition, c, &mut expansion);

        tables.decompositions.insert(c, expansion.as_slice().into());
    }

    let stats = tables.stats();

    tracing::debug!(
        combining_classes = stats.combining_classes,
        decompositions = stats.decompositions,
        compositions = stats.compositions,
        quick_checks = stats.quick_checks,
        "canonical tables loaded"
    );

    tables
}

/// таблицы совместимости, полные декомпозиции получаем нормализатором NFKD
pub fn compatibility() -> CompatibilityTables
{
    let nfkd = DecomposingNormalizer::new_nfkd();
    let gc = maps::general_category();

    let mut tables = CompatibilityTables::default();
    let mut buffer = [0; 4];

    for code in 0 ..= LAST_CODEPOINT {
        let c = match char::from_u32(code) {
            Some(c) => c,
            None => continue,
        };

        if (HANGUL_S_FIRST ..= HANGUL_S_LAST).contains(&code) {
            continue;
        }

        match gc.get(c) {
            GeneralCategory::Unassigned | GeneralCategory::PrivateUse | GeneralCategory::Surrogate => continue,
            _ => (),
        }

        let source: &str = c.encode_utf8(&mut buffer);

        if nfkd.is_normalized(source) {
            continue;
        }

        let decomposed: Box<[char]> = nfkd.normalize(source).chars().collect();

        tables.decompositions.insert(c, decomposed);
    }

    tracing::debug!(decompositions = tables.decompositions.len(), "compatibility tables loaded");

    tables
}

/// каноническая декомпозиция символа (один шаг)
///
/// данные ICU4X 1.5 для нестартеров без декомпозиции могут вернуть U+FFFD вместо самого символа,
/// такой результат означает отсутствие декомпозиции
#[inline]
fn decompose(decomposition: &CanonicalDecomposition, c: char) -> Decomposed
{
    match decomposition.decompose(c) {
        Decomposed::Singleton(REPLACEMENT) if c != REPLACEMENT => Decomposed::Default,
        Decomposed::Expansion(first, second) if first == REPLACEMENT || second == REPLACEMENT => Decomposed::Default,
        decomposed => decomposed,
    }
}

/// рекурсивная каноническая декомпозиция символа
fn expand(decomposition: &CanonicalDecomposition, c: char, result: &mut Vec<char>)
{
    match decompose(decomposition, c) {
        Decomposed::Default => result.push(c),
        Decomposed::Singleton(single) => expand(decomposition, single, result),
        Decomposed::Expansion(first, second) => {
            expand(decomposition, first, result);
            expand(decomposition, second, result);
        }
    }
}

/// L, N, P, S, Zs, M - символы, после которых комбинирующий знак не изолирован
fn can_precede_combining(category: GeneralCategory) -> bool
{
    [
        GeneralCategoryGroup::Letter,
        GeneralCategoryGroup::Number,
        GeneralCategoryGroup::Punctuation,
        GeneralCategoryGroup::Symbol,
        GeneralCategoryGroup::Mark,
    ]
    .iter()
    .any(|group| group.contains(category))
        || category == GeneralCategory::SpaceSeparator
}

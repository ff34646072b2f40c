//! построение таблиц из текстовых файлов UCD:
//! UnicodeData.txt, CompositionExclusions.txt, DerivedNormalizationProps.txt

mod composition_exclusions;
mod expansion;
mod quick_checks;
mod unicode_data;

use std::collections::HashMap;

use crate::properties::PropertiesError;
use crate::tables::*;
use crate::TableSource;

/// ошибка разбора файлов UCD
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UcdError
{
    #[error("{file}, line {line}: {source}")]
    Property
    {
        file: &'static str,
        line: usize,
        #[source]
        source: PropertiesError,
    },
    #[error("{file}, line {line}: missing field `{field}`")]
    MissingField
    {
        file: &'static str,
        line: usize,
        field: &'static str,
    },
    #[error("UnicodeData.txt, line {line}: invalid combining class `{value}`")]
    InvalidCombiningClass
    {
        line: usize,
        value: String,
    },
    #[error("UnicodeData.txt, line {line}: range `{name}` is not closed")]
    UnclosedRange
    {
        line: usize,
        name: String,
    },
}

/// таблицы, построенные из файлов UCD
#[derive(Debug)]
pub struct UcdTables
{
    canonical: CanonicalTables,
    compatibility: CompatibilityTables,
}

impl TableSource for UcdTables
{
    fn canonical(&self) -> &CanonicalTables
    {
        &self.canonical
    }

    fn compatibility(&self) -> &CompatibilityTables
    {
        &self.compatibility
    }
}

/// разбор содержимого UnicodeData.txt, CompositionExclusions.txt и DerivedNormalizationProps.txt
pub fn parse(
    unicode_data: &str,
    composition_exclusions: &str,
    normalization_props: &str,
) -> Result<UcdTables, UcdError>
{
    let quick_checks = quick_checks::nfc_quick_checks(normalization_props)?;
    let exclusions = composition_exclusions::composition_exclusions(composition_exclusions)?;
    let entries = unicode_data::entries(unicode_data)?;

    let mut combining_classes = HashMap::new();
    let mut canonical: HashMap<char, Vec<char>> = HashMap::new();
    let mut compatibility: HashMap<char, Vec<char>> = HashMap::new();
    let mut compositions = HashMap::new();
    let mut can_precede = vec![];
    let mut marks = vec![];

    for entry in entries.iter() {
        for code in entry.codes() {
            if entry.gc.can_precede_combining() {
                can_precede.push(code);
            }

            if entry.gc.is_mark() {
                marks.push(code);
            }
        }

        // суррогаты не являются символами и не имеют ни классов, ни декомпозиций
        let c = match char::from_u32(entry.first) {
            Some(c) => c,
            None => continue,
        };

        if entry.ccc != 0 {
            for code in entry.codes() {
                if let Some(c) = char::from_u32(code) {
                    combining_classes.insert(c, entry.ccc);
                }
            }
        }

        if entry.decomposition.is_empty() {
            continue;
        }

        let codes: Vec<char> = entry.decomposition.codes.iter().filter_map(|&code| char::from_u32(code)).collect();

        if !entry.decomposition.compatibility {
            if let [first, second] = codes[..] {
                if !exclusions.contains(&entry.first) {
                    compositions.insert((first, second), c);
                }
            }

            canonical.insert(c, codes.clone());
        }

        // канонические декомпозиции входят и в декомпозиции совместимости
        compatibility.insert(c, codes);
    }

    let decompositions = expansion::expand(canonical);

    tracing::debug!(
        entries = entries.len(),
        decompositions = decompositions.len(),
        compositions = compositions.len(),
        "UCD canonical tables parsed"
    );

    Ok(UcdTables {
        canonical: CanonicalTables {
            combining_classes,
            decompositions,
            compositions,
            quick_checks,
            can_precede_combining: can_precede
                .into_iter()
                .chain([crate::compiled::ZWNJ, crate::compiled::ZWJ])
                .collect(),
            combining_marks: marks.into_iter().collect(),
        },
        compatibility: CompatibilityTables {
            decompositions: expansion::expand(compatibility),
        },
    })
}

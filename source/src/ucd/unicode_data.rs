use core::ops::RangeInclusive;

use super::UcdError;
use crate::properties::*;

const FILE: &str = "UnicodeData.txt";

/// запись UnicodeData.txt - отдельный символ или диапазон <..., First> ..= <..., Last>
#[derive(Debug, Clone)]
pub struct Entry
{
    pub first: u32,
    pub last: u32,
    /// общая категория
    pub gc: GeneralCategory,
    /// класс канонического комбинирования
    pub ccc: u8,
    /// декомпозиция (не раскрытая)
    pub decomposition: Decomposition,
}

impl Entry
{
    #[inline]
    pub fn codes(&self) -> RangeInclusive<u32>
    {
        self.first ..= self.last
    }
}

/// разбор UnicodeData.txt
pub fn entries(data: &str) -> Result<Vec<Entry>, UcdError>
{
    let mut entries = vec![];

    // открытый диапазон: номер строки, первая запись, название
    let mut range_start: Option<(usize, Entry, String)> = None;

    for (index, line) in data.lines().enumerate() {
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        let props: Vec<&str> = line.split(';').collect();

        let field = |n: usize, title: &'static str| {
            props.get(n).copied().ok_or(UcdError::MissingField {
                file: FILE,
                line: line_number,
                field: title,
            })
        };

        let code = parse_code(field(0, "code")?).map_err(property_error(line_number))?;
        let name = field(1, "name")?;

        let gc = GeneralCategory::try_from(field(2, "general category")?).map_err(property_error(line_number))?;

        let ccc = field(3, "canonical combining class")?;
        let ccc = ccc.parse::<u8>().map_err(|_| UcdError::InvalidCombiningClass {
            line: line_number,
            value: ccc.to_owned(),
        })?;

        let decomposition = Decomposition::try_from(field(5, "decomposition")?).map_err(property_error(line_number))?;

        let entry = Entry {
            first: code,
            last: code,
            gc,
            ccc,
            decomposition,
        };

        // U+3400 ..= U+4DBF CJK Ideograph Extension A, U+AC00 ..= U+D7A3 Hangul Syllable и т.д.
        let is_range = name.starts_with('<');

        if is_range && name.ends_with(", First>") {
            if let Some((line, _, name)) = range_start {
                return Err(UcdError::UnclosedRange { line, name });
            }

            range_start = Some((line_number, entry, name.to_owned()));

            continue;
        }

        if is_range && name.ends_with(", Last>") {
            match range_start.take() {
                Some((_, mut group, _)) => {
                    group.last = code;
                    entries.push(group);
                }
                None => {
                    return Err(UcdError::UnclosedRange {
                        line: line_number,
                        name: name.to_owned(),
                    })
                }
            }

            continue;
        }

        if let Some((line, _, name)) = range_start {
            return Err(UcdError::UnclosedRange { line, name });
        }

        entries.push(entry);
    }

    match range_start {
        Some((line, _, name)) => Err(UcdError::UnclosedRange { line, name }),
        None => Ok(entries),
    }
}

fn property_error(line: usize) -> impl Fn(PropertiesError) -> UcdError
{
    move |source| UcdError::Property {
        file: FILE,
        line,
        source,
    }
}

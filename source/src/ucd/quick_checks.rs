use std::collections::HashMap;

use super::UcdError;
use crate::properties::{parse_code, PropertiesError};
use crate::tables::QuickCheck;

const FILE: &str = "DerivedNormalizationProps.txt";

/// значения NFC_QC = M / N из DerivedNormalizationProps.txt
pub fn nfc_quick_checks(data: &str) -> Result<HashMap<char, QuickCheck>, UcdError>
{
    let mut table = HashMap::new();

    for (index, line) in data.lines().enumerate() {
        let line = match line.split_once('#') {
            Some((line, _)) => line,
            None => line,
        };

        let mut fields = line.split(';').map(str::trim);

        let (codepoints, property, value) = match (fields.next(), fields.next(), fields.next()) {
            (Some(codepoints), Some("NFC_QC"), Some(value)) => (codepoints, property_value(value), value),
            _ => continue,
        };

        let property = property.ok_or_else(|| UcdError::Property {
            file: FILE,
            line: index + 1,
            source: PropertiesError::UnknownPropertyValue(value.to_owned()),
        })?;

        let (from, to) = match codepoints.split_once("..") {
            Some((from, to)) => (from, to),
            None => (codepoints, codepoints),
        };

        let error = |source| UcdError::Property {
            file: FILE,
            line: index + 1,
            source,
        };

        let from = parse_code(from).map_err(error)?;
        let to = parse_code(to).map_err(error)?;

        for code in from ..= to {
            if let Some(c) = char::from_u32(code) {
                table.insert(c, property);
            }
        }
    }

    Ok(table)
}

fn property_value(value: &str) -> Option<QuickCheck>
{
    match value {
        "M" => Some(QuickCheck::Maybe),
        "N" => Some(QuickCheck::No),
        _ => None,
    }
}

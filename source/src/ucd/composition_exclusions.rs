use std::collections::HashSet;

use super::UcdError;
use crate::properties::parse_code;

/// разбор CompositionExclusions.txt
/// исключения композиции не могут быть вычислены, этот список составляется консорциумом Unicode в ручном режиме
pub fn composition_exclusions(data: &str) -> Result<HashSet<u32>, UcdError>
{
    let mut exclusions = HashSet::new();

    for (index, line) in data.lines().enumerate() {
        let code = match line.split_once('#') {
            Some((code, _)) => code,
            None => line,
        };

        if code.trim().is_empty() {
            continue;
        }

        let code = parse_code(code).map_err(|source| UcdError::Property {
            file: "CompositionExclusions.txt",
            line: index + 1,
            source,
        })?;

        exclusions.insert(code);
    }

    Ok(exclusions)
}

use super::{parse_code, PropertiesError};

/// декомпозиция
/// берется из UCD: 5 колонка UnicodeData.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition
{
    /// декомпозиция
    pub codes: Vec<u32>,
    /// есть тег (<compat>, <font>, ...) - декомпозиция совместимости
    pub compatibility: bool,
}

impl Decomposition
{
    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.codes.is_empty()
    }
}

impl TryFrom<&str> for Decomposition
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let value = value.trim();

        let (compatibility, codes) = match value.starts_with('<') {
            true => match value.split_once('>') {
                Some((_, codes)) => (true, codes),
                None => return Err(PropertiesError::UnknownPropertyValue(value.to_owned())),
            },
            false => (false, value),
        };

        let codes = codes
            .split_whitespace()
            .map(parse_code)
            .collect::<Result<Vec<u32>, _>>()?;

        if compatibility && codes.is_empty() {
            return Err(PropertiesError::UnknownPropertyValue(value.to_owned()));
        }

        Ok(Self {
            codes,
            compatibility,
        })
    }
}

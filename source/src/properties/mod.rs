mod decomposition;
mod general_category;

pub use decomposition::Decomposition;
pub use general_category::GeneralCategory;

/// ошибка разбора значения свойства из UCD
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertiesError
{
    #[error("unknown property value `{0}`")]
    UnknownPropertyValue(String),
    #[error("invalid codepoint `{0}`")]
    InvalidCodepoint(String),
}

/// разбор шестнадцатеричного кода символа
pub fn parse_code(value: &str) -> Result<u32, PropertiesError>
{
    match u32::from_str_radix(value.trim(), 16) {
        Ok(code) if code <= 0x10FFFF => Ok(code),
        _ => Err(PropertiesError::InvalidCodepoint(value.to_owned())),
    }
}

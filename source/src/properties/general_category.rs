use super::PropertiesError;

/// основная категория символа (General Category, GC), сведенная к общим категориям
/// берется из UCD: вторая колонка UnicodeData.txt
///
/// для нормализации достаточно общей категории, за исключением разделителей:
/// пробел (Zs) может предшествовать комбинирующему знаку, Zl и Zp - нет
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GeneralCategory
{
    /// L (Lu, Ll, Lt, Lm, Lo) - буквы
    Letter,
    /// M (Mn, Mc, Me) - комбинирующие символы
    Mark,
    /// N (Nd, Nl, No) - цифры, числовые символы
    Number,
    /// P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
    Punctuation,
    /// S (Sm, Sc, Sk, So) - различные символы (математические, валюты и т.д.)
    Symbol,
    /// Zs - разделитель-пробел
    SpaceSeparator,
    /// Zl, Zp - разделители строк и параграфов
    LineSeparator,
    /// C (Cc, Cf, Cs, Co, Cn) - системные символы
    Other,
}

impl GeneralCategory
{
    /// комбинирующий знак?
    #[inline]
    pub fn is_mark(&self) -> bool
    {
        *self == Self::Mark
    }

    /// может ли символ этой категории предшествовать комбинирующему знаку?
    #[inline]
    pub fn can_precede_combining(&self) -> bool
    {
        !matches!(self, Self::LineSeparator | Self::Other)
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(match value {
            "Lu" | "Ll" | "Lt" | "Lm" | "Lo" => Self::Letter,
            "Mn" | "Mc" | "Me" => Self::Mark,
            "Nd" | "Nl" | "No" => Self::Number,
            "Pc" | "Pd" | "Ps" | "Pe" | "Pi" | "Pf" | "Po" => Self::Punctuation,
            "Sm" | "Sc" | "Sk" | "So" => Self::Symbol,
            "Zs" => Self::SpaceSeparator,
            "Zl" | "Zp" => Self::LineSeparator,
            "Cc" | "Cf" | "Cs" | "Co" | "Cn" => Self::Other,
            _ => return Err(PropertiesError::UnknownPropertyValue(value.to_owned())),
        })
    }
}

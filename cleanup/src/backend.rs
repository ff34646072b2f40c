use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};

/// форма нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form
{
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
}

/// реализация нормализации
#[derive(Default)]
pub enum Backend
{
    /// собственная реализация на таблицах [`unicode_cleanup_source::TableSource`]
    #[default]
    Reference,
    /// нормализаторы ICU4X
    Icu(Box<IcuNormalizers>),
}

impl Backend
{
    pub fn icu() -> Self
    {
        Self::Icu(Box::new(IcuNormalizers::new()))
    }
}

impl core::fmt::Debug for Backend
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        match self {
            Self::Reference => f.write_str("Reference"),
            Self::Icu(_) => f.write_str("Icu"),
        }
    }
}

/// нормализаторы ICU4X для всех четырех форм
pub struct IcuNormalizers
{
    nfc: ComposingNormalizer,
    nfkc: ComposingNormalizer,
    nfd: DecomposingNormalizer,
    nfkd: DecomposingNormalizer,
}

impl IcuNormalizers
{
    pub fn new() -> Self
    {
        Self {
            nfc: ComposingNormalizer::new_nfc(),
            nfkc: ComposingNormalizer::new_nfkc(),
            nfd: DecomposingNormalizer::new_nfd(),
            nfkd: DecomposingNormalizer::new_nfkd(),
        }
    }

    pub fn normalize(&self, form: Form, input: &str) -> String
    {
        match form {
            Form::Nfc => self.nfc.normalize(input),
            Form::Nfkc => self.nfkc.normalize(input),
            Form::Nfd => self.nfd.normalize(input),
            Form::Nfkd => self.nfkd.normalize(input),
        }
    }
}

impl Default for IcuNormalizers
{
    fn default() -> Self
    {
        Self::new()
    }
}

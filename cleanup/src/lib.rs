//! проверка и исправление UTF-8, нормализация Unicode (NFC, NFD, NFKC, NFKD)

use unicode_cleanup_source::{CompiledTables, Decompositions, TableSource};

use codepoint::Codepoint;

pub use backend::{Backend, Form, IcuNormalizers};
pub use isolated::DOTTED_CIRCLE;
pub use utf8::tail_length;
pub use validation::REPLACEMENT;

mod backend;
mod codepoint;
mod composition;
mod decomposition;
mod isolated;
mod ordering;
mod quick_check;
mod utf8;
mod validation;

/// нормализатор: источник таблиц и реализация нормализации
///
/// таблицы загружаются лениво и разделяются между потоками, сам нормализатор не хранит состояния
/// между вызовами
pub struct Normalizer<'a>
{
    tables: &'a dyn TableSource,
    backend: Backend,
}

impl core::fmt::Debug for Normalizer<'_>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        f.debug_struct("Normalizer")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl Normalizer<'static>
{
    /// нормализатор на таблицах из вкомпилированных данных Unicode
    pub fn new() -> Self
    {
        Self::from_tables(&CompiledTables)
    }
}

impl Default for Normalizer<'static>
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl<'a> Normalizer<'a>
{
    pub fn from_tables(tables: &'a dyn TableSource) -> Self
    {
        Self {
            tables,
            backend: Backend::Reference,
        }
    }

    pub fn with_backend(self, backend: Backend) -> Self
    {
        Self { backend, ..self }
    }

    pub fn backend(&self) -> &Backend
    {
        &self.backend
    }

    /// нормализация в заданную форму
    pub fn normalize(&self, form: Form, input: &str) -> String
    {
        // текст, состоящий только из ASCII-символов, уже нормализован
        if input.is_ascii() {
            return input.to_owned();
        }

        let icu = match &self.backend {
            Backend::Icu(icu) => icu,
            Backend::Reference => return self.normalize_reference(form, input),
        };

        icu.normalize(form, input)
    }

    pub fn to_nfc(&self, input: &str) -> String
    {
        self.normalize(Form::Nfc, input)
    }

    pub fn to_nfd(&self, input: &str) -> String
    {
        self.normalize(Form::Nfd, input)
    }

    pub fn to_nfkc(&self, input: &str) -> String
    {
        self.normalize(Form::Nfkc, input)
    }

    pub fn to_nfkd(&self, input: &str) -> String
    {
        self.normalize(Form::Nfkd, input)
    }

    /// привести произвольные байты к корректному UTF-8 в NFC, пригодному для XML:
    /// ошибки кодирования и запрещенные управляющие символы заменяются на U+FFFD,
    /// перед изолированными комбинирующими знаками вставляется U+25CC
    pub fn clean_up(&self, input: &[u8]) -> String
    {
        let (is_normalized, text) = self.quick_is_nfc_verify(input);

        if is_normalized {
            return text;
        }

        let text = self.to_nfc(&text);

        isolated::prepend_isolated_combining(text, self.tables.canonical())
    }

    /// быстрая проверка: текст гарантированно в NFC?
    pub fn quick_is_nfc(&self, input: &str) -> bool
    {
        quick_check::quick_is_nfc(input, || self.tables.canonical())
    }

    /// проверка и исправление UTF-8: (текст гарантированно в NFC, исправленный текст)
    pub fn quick_is_nfc_verify(&self, input: &[u8]) -> (bool, String)
    {
        validation::validate(input, || self.tables.canonical())
    }

    fn normalize_reference(&self, form: Form, input: &str) -> String
    {
        match form {
            Form::Nfd => self.decompose(input, self.tables.canonical().decompositions()),
            Form::Nfkd => self.decompose(input, self.tables.compatibility().decompositions()),
            Form::Nfc => match self.quick_is_nfc(input) {
                true => input.to_owned(),
                false => self.compose(input, self.tables.canonical().decompositions()),
            },
            Form::Nfkc => self.compose(input, self.tables.compatibility().decompositions()),
        }
    }

    /// декомпозиция и каноническое упорядочивание
    fn decompose(&self, input: &str, decompositions: &Decompositions) -> String
    {
        self.decompose_ordered(input, decompositions).iter().map(Codepoint::char).collect()
    }

    /// декомпозиция, упорядочивание и каноническая композиция
    fn compose(&self, input: &str, decompositions: &Decompositions) -> String
    {
        let buffer = self.decompose_ordered(input, decompositions);

        composition::compose(&buffer, self.tables.canonical())
    }

    fn decompose_ordered(&self, input: &str, decompositions: &Decompositions) -> Vec<Codepoint>
    {
        let mut buffer = decomposition::decompose(input, decompositions, self.tables.canonical());

        ordering::reorder(&mut buffer);

        buffer
    }
}

/// NFC с таблицами по умолчанию
pub fn to_nfc(input: &str) -> String
{
    Normalizer::new().to_nfc(input)
}

/// NFD с таблицами по умолчанию
pub fn to_nfd(input: &str) -> String
{
    Normalizer::new().to_nfd(input)
}

/// NFKC с таблицами по умолчанию
pub fn to_nfkc(input: &str) -> String
{
    Normalizer::new().to_nfkc(input)
}

/// NFKD с таблицами по умолчанию
pub fn to_nfkd(input: &str) -> String
{
    Normalizer::new().to_nfkd(input)
}

/// исправление и NFC-нормализация произвольных байт с таблицами по умолчанию
pub fn clean_up(input: &[u8]) -> String
{
    Normalizer::new().clean_up(input)
}

pub fn quick_is_nfc(input: &str) -> bool
{
    Normalizer::new().quick_is_nfc(input)
}

pub fn quick_is_nfc_verify(input: &[u8]) -> (bool, String)
{
    Normalizer::new().quick_is_nfc_verify(input)
}

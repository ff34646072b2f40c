use std::collections::HashMap;

/// декомпозиции: кодпоинт -> полная (рекурсивно раскрытая) декомпозиция
pub type Decompositions = HashMap<char, Box<[char]>>;

/// значение свойства NFC_Quick_Check, отличное от "Yes"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickCheck
{
    /// символ может скомбинироваться с предыдущим
    Maybe,
    /// символ не может встречаться в NFC
    No,
}

/// упорядоченный набор непересекающихся диапазонов кодпоинтов
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodepointRanges
{
    ranges: Vec<(u32, u32)>,
}

impl CodepointRanges
{
    /// добавить кодпоинт; кодпоинты должны поступать по возрастанию
    pub fn push(&mut self, code: u32)
    {
        if let Some(last) = self.ranges.last_mut() {
            if last.1 >= code {
                return;
            }

            if last.1 + 1 == code {
                last.1 = code;
                return;
            }
        }

        self.ranges.push((code, code));
    }

    /// входит ли кодпоинт в набор?
    pub fn contains(&self, code: u32) -> bool
    {
        self.ranges
            .binary_search_by(|&(first, last)| match (first > code, last < code) {
                (true, _) => core::cmp::Ordering::Greater,
                (_, true) => core::cmp::Ordering::Less,
                _ => core::cmp::Ordering::Equal,
            })
            .is_ok()
    }

    /// количество диапазонов
    pub fn ranges(&self) -> usize
    {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.ranges.is_empty()
    }
}

impl FromIterator<u32> for CodepointRanges
{
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self
    {
        let mut codes: Vec<u32> = iter.into_iter().collect();

        codes.sort_unstable();
        codes.dedup();

        let mut ranges = Self::default();

        for code in codes {
            ranges.push(code);
        }

        ranges
    }
}

/// таблицы канонической нормализации (NFC, NFD) и проверки корректности текста
#[derive(Debug, Default)]
pub struct CanonicalTables
{
    /// ненулевые классы канонического комбинирования
    pub(crate) combining_classes: HashMap<char, u8>,
    /// канонические декомпозиции
    pub(crate) decompositions: Decompositions,
    /// пары (стартер, комбинируемый символ) -> результат композиции, без исключений
    pub(crate) compositions: HashMap<(char, char), char>,
    /// NFC_Quick_Check = Maybe / No
    pub(crate) quick_checks: HashMap<char, QuickCheck>,
    /// символы, после которых комбинирующий знак не считается изолированным
    pub(crate) can_precede_combining: CodepointRanges,
    /// комбинирующие знаки (общая категория M)
    pub(crate) combining_marks: CodepointRanges,
}

impl CanonicalTables
{
    /// класс канонического комбинирования, 0 - стартер
    #[inline(always)]
    pub fn ccc(&self, c: char) -> u8
    {
        self.combining_classes.get(&c).copied().unwrap_or(0)
    }

    #[inline(always)]
    pub fn decompositions(&self) -> &Decompositions
    {
        &self.decompositions
    }

    /// скомбинировать стартер со следующим символом
    #[inline(always)]
    pub fn compose(&self, starter: char, second: char) -> Option<char>
    {
        self.compositions.get(&(starter, second)).copied()
    }

    /// значение NFC_Quick_Check, None - "Yes"
    #[inline(always)]
    pub fn quick_check(&self, c: char) -> Option<QuickCheck>
    {
        self.quick_checks.get(&c).copied()
    }

    /// символ может нарушить NFC: Maybe / No или нестартер
    #[inline(always)]
    pub fn is_nfc_unsafe(&self, c: char) -> bool
    {
        self.quick_checks.contains_key(&c) || self.combining_classes.contains_key(&c)
    }

    #[inline(always)]
    pub fn can_precede_combining(&self, c: char) -> bool
    {
        self.can_precede_combining.contains(c as u32)
    }

    #[inline(always)]
    pub fn is_combining_mark(&self, c: char) -> bool
    {
        self.combining_marks.contains(c as u32)
    }

    /// количество записей в таблицах - для логов и тестов
    pub fn stats(&self) -> TableStats
    {
        TableStats {
            combining_classes: self.combining_classes.len(),
            decompositions: self.decompositions.len(),
            compositions: self.compositions.len(),
            quick_checks: self.quick_checks.len(),
        }
    }
}

/// таблицы нормализации совместимости (NFKC, NFKD)
#[derive(Debug, Default)]
pub struct CompatibilityTables
{
    /// декомпозиции совместимости, включая канонические
    pub(crate) decompositions: Decompositions,
}

impl CompatibilityTables
{
    #[inline(always)]
    pub fn decompositions(&self) -> &Decompositions
    {
        &self.decompositions
    }
}

/// размеры канонических таблиц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats
{
    pub combining_classes: usize,
    pub decompositions: usize,
    pub compositions: usize,
    pub quick_checks: usize,
}

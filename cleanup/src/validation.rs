use std::borrow::Cow;

use unicode_cleanup_source::CanonicalTables;

use crate::utf8::{decode, is_continuation, tail_length};

/// U+FFFD REPLACEMENT CHARACTER
pub const REPLACEMENT: &str = "\u{FFFD}";

/// наибольшая overlong-последовательность с первым байтом C0, C1
const OVERLONG_2: &[u8] = b"\xC1\xBF";
/// наибольшая overlong-последовательность с первым байтом E0
const OVERLONG_3: &[u8] = b"\xE0\x9F\xBF";
/// наибольшая overlong-последовательность с первым байтом F0
const OVERLONG_4: &[u8] = b"\xF0\x8F\xBF\xBF";
/// U+D800 - первый суррогат
const SURROGATE_FIRST: &[u8] = b"\xED\xA0\x80";
/// нехарактеры U+FFFE, U+FFFF
const NONCHARACTER_FFFE: &[u8] = b"\xEF\xBF\xBE";
const NONCHARACTER_FFFF: &[u8] = b"\xEF\xBF\xBF";
/// U+10FFFF
const LAST_CODEPOINT: &[u8] = b"\xF4\x8F\xBF\xBF";

/// результат проверки: текст гарантированно в NFC (false - неизвестно) и исправленный текст
pub type Validated = (bool, String);

/// проверить байты на корректность UTF-8, исправив ошибки
///
/// запрещенные управляющие символы, некорректные и запрещенные последовательности заменяются на U+FFFD,
/// по одному на каждую неудавшуюся последовательность или отдельный недопустимый байт.
/// таблицы запрашиваются только если в тексте есть не-ASCII символы
pub fn validate<'t>(input: &[u8], tables: impl FnOnce() -> &'t CanonicalTables) -> Validated
{
    let screened = screen_controls(input);

    // только ASCII - текст корректен и нормализован
    if screened.is_ascii() {
        return (true, into_string(screened.into_owned()));
    }

    let mut scanner = Scanner {
        tables: tables(),
        replacements: vec![],
        looks_normal: true,
    };

    for (offset, chunk) in Chunks::new(&screened) {
        scanner.scan_chunk(chunk, offset);
    }

    if !scanner.replacements.is_empty() {
        tracing::trace!(replacements = scanner.replacements.len(), "invalid UTF-8 replaced");
    }

    let text = rebuild(&screened, &scanner.replacements);

    (scanner.looks_normal, text)
}

/// заменить управляющие символы, запрещенные в XML (кроме \t, \n, \r), на U+FFFD
fn screen_controls(input: &[u8]) -> Cow<'_, [u8]>
{
    if !input.iter().any(|&byte| is_forbidden_control(byte)) {
        return Cow::Borrowed(input);
    }

    let mut result = Vec::with_capacity(input.len() + 8);

    for &byte in input {
        match is_forbidden_control(byte) {
            true => result.extend_from_slice(REPLACEMENT.as_bytes()),
            false => result.push(byte),
        }
    }

    Cow::Owned(result)
}

#[inline(always)]
fn is_forbidden_control(byte: u8) -> bool
{
    matches!(byte, 0x00 ..= 0x08 | 0x0B | 0x0C | 0x0E ..= 0x1F)
}

/// фрагмент исходного текста, заменяемый на U+FFFD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Replacement
{
    offset: usize,
    length: usize,
}

/// состояние разбора последовательностей внутри фрагмента
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState
{
    /// ожидаем начало последовательности
    SequenceStart,
    /// ожидаем `remaining` байт продолжения последовательности, начавшейся с `start`
    Continuation
    {
        start: usize,
        remaining: u8,
    },
}

struct Scanner<'t>
{
    tables: &'t CanonicalTables,
    replacements: Vec<Replacement>,
    looks_normal: bool,
}

impl<'t> Scanner<'t>
{
    /// разбор фрагмента, начинающегося с байта >= 0x80
    fn scan_chunk(&mut self, chunk: &[u8], base: usize)
    {
        let mut state = ScanState::SequenceStart;
        let mut i = 0;

        while i < chunk.len() {
            let byte = chunk[i];

            if let ScanState::Continuation { start, remaining } = state {
                // байт не продолжает последовательность: заменяем её, а сам байт (не сдвигая i)
                // разбираем заново как начало новой последовательности
                if !is_continuation(byte) {
                    self.replace(base + start, i - start);
                    state = ScanState::SequenceStart;

                    continue;
                }

                i += 1;

                state = match remaining {
                    1 => {
                        self.accept_sequence(&chunk[start .. i], base + start);
                        ScanState::SequenceStart
                    }
                    _ => ScanState::Continuation {
                        start,
                        remaining: remaining - 1,
                    },
                };

                continue;
            }

            match tail_length(byte) {
                0 => {
                    // байт продолжения без начала последовательности, 0xFE, 0xFF
                    if byte >= 0x80 {
                        self.replace(base + i, 1);
                    }
                }
                tail => {
                    state = ScanState::Continuation {
                        start: i,
                        remaining: tail,
                    }
                }
            }

            i += 1;
        }

        // фрагмент закончился посреди последовательности
        if let ScanState::Continuation { start, .. } = state {
            self.replace(base + start, chunk.len() - start);
        }
    }

    /// последовательность собрана: проверяем на запрещенные значения и нормализацию
    fn accept_sequence(&mut self, sequence: &[u8], offset: usize)
    {
        if is_forbidden(sequence) {
            self.replace(offset, sequence.len());
            return;
        }

        if self.looks_normal {
            if let Some(c) = char::from_u32(decode(sequence)) {
                if self.tables.is_nfc_unsafe(c) {
                    self.looks_normal = false;
                }
            }
        }
    }

    #[inline(always)]
    fn replace(&mut self, offset: usize, length: usize)
    {
        self.replacements.push(Replacement { offset, length });
    }
}

/// overlong, суррогат, U+FFFE / U+FFFF или код больше U+10FFFF
#[inline(always)]
fn is_forbidden(sequence: &[u8]) -> bool
{
    match sequence[0] {
        0xC0 | 0xC1 => sequence <= OVERLONG_2,
        0xE0 => sequence <= OVERLONG_3,
        0xED => sequence >= SURROGATE_FIRST,
        0xEF => sequence == NONCHARACTER_FFFE || sequence == NONCHARACTER_FFFF,
        0xF0 => sequence <= OVERLONG_4,
        0xF1 ..= 0xFF => sequence > LAST_CODEPOINT,
        _ => false,
    }
}

/// собираем результат: исходные байты с примененными заменами
fn rebuild(source: &[u8], replacements: &[Replacement]) -> String
{
    let mut result = Vec::with_capacity(source.len() + replacements.len() * 2);
    let mut position = 0;

    for replacement in replacements {
        result.extend_from_slice(&source[position .. replacement.offset]);
        result.extend_from_slice(REPLACEMENT.as_bytes());

        position = replacement.offset + replacement.length;
    }

    result.extend_from_slice(&source[position ..]);

    into_string(result)
}

/// после замен байты всегда образуют корректный UTF-8
#[inline(always)]
fn into_string(bytes: Vec<u8>) -> String
{
    match String::from_utf8(bytes) {
        Ok(string) => string,
        Err(error) => unreachable!("validated text is not UTF-8: {error}"),
    }
}

/// разбиение текста на фрагменты, требующие проверки. отрезки ASCII пропускаются
///
/// фрагмент начинается с байта >= 0x80 и продолжается до первой латинской буквы: знаки препинания и цифры
/// внутри текста на других языках не дробят его на множество фрагментов
struct Chunks<'a>
{
    source: &'a [u8],
    position: usize,
}

impl<'a> Chunks<'a>
{
    fn new(source: &'a [u8]) -> Self
    {
        Self {
            source,
            position: 0,
        }
    }
}

impl<'a> Iterator for Chunks<'a>
{
    type Item = (usize, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item>
    {
        let rest = &self.source[self.position ..];
        let start = self.position + rest.iter().position(|&byte| byte >= 0x80)?;

        let length = 1 + self.source[start + 1 ..]
            .iter()
            .position(|byte| byte.is_ascii_alphabetic())
            .unwrap_or(self.source.len() - start - 1);

        self.position = start + length;

        Some((start, &self.source[start .. start + length]))
    }
}

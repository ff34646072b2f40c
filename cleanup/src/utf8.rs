/// количество байт продолжения, которые должны следовать за первым байтом последовательности UTF-8
///
/// 5 и 6-байтовые последовательности устарели и всегда недопустимы, но их длину мы должны знать,
/// чтобы заменить такую последовательность целиком
#[inline(always)]
pub fn tail_length(first: u8) -> u8
{
    match first {
        0xC0 ..= 0xDF => 1,
        0xE0 ..= 0xEF => 2,
        0xF0 ..= 0xF7 => 3,
        0xF8 ..= 0xFB => 4,
        0xFC ..= 0xFD => 5,
        _ => 0,
    }
}

/// байт продолжения (0x80 ..= 0xBF)?
#[inline(always)]
pub fn is_continuation(byte: u8) -> bool
{
    byte & !CONT_MASK == 0x80
}

/// код символа из последовательности UTF-8 длиной от 1 до 6 байт, без проверок корректности
#[inline(always)]
pub fn decode(sequence: &[u8]) -> u32
{
    let (&first, tail) = match sequence.split_first() {
        Some(split) => split,
        None => return 0,
    };

    if tail.is_empty() {
        return first as u32;
    }

    tail.iter()
        .fold(utf8_first_byte(first, tail.len() as u32 + 1), |code, &byte| utf8_acc_cont_byte(code, byte))
}

/// маска, использующаяся для получения битов значения первого байта UTF-8
const FIRST_BYTE_VALUE_MASK: u8 = 0x7F;
/// маска, исключащая 2 старших бита в байтах продолжения
const CONT_MASK: u8 = 0x3F;

/// убираем старшие биты первого байта UTF-8 последовательности
#[inline(always)]
fn utf8_first_byte(byte: u8, width: u32) -> u32
{
    (byte & (FIRST_BYTE_VALUE_MASK >> width)) as u32
}

/// убираем 2 старших бита у следующего байта последовательности и комбинируем с предыдущим значением
#[inline(always)]
fn utf8_acc_cont_byte(ch: u32, byte: u8) -> u32
{
    (ch << 6) | (byte & CONT_MASK) as u32
}

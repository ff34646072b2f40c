use crate::codepoint::Codepoint;

/// начало блока слогов хангыль
pub const HANGUL_S_BASE: u32 = 0xAC00;
/// количество слогов хангыль
pub const HANGUL_S_COUNT: u32 = 11172;
/// начало блока ведущих согласных чамо
pub const HANGUL_L_BASE: u32 = 0x1100;
/// количество ведущих согласных
pub const HANGUL_L_COUNT: u32 = 19;
/// начало блока гласных чамо
pub const HANGUL_V_BASE: u32 = 0x1161;
/// количество гласных
pub const HANGUL_V_COUNT: u32 = 21;
/// начало блока завершающих согласных
pub const HANGUL_T_BASE: u32 = 0x11A8;
/// количество завершающих согласных (+1 - слог без завершающей согласной)
pub const HANGUL_T_COUNT: u32 = 28;
/// количество гласных * количество завершающих согласных
pub const HANGUL_N_COUNT: u32 = HANGUL_V_COUNT * HANGUL_T_COUNT;

/// слог хангыль?
#[inline(always)]
pub fn is_hangul_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// декомпозиция слога хангыль на 2 или 3 чамо
#[inline(never)]
pub fn decompose_hangul(code: u32, result: &mut Vec<Codepoint>)
{
    let lvt = code - HANGUL_S_BASE;

    let l = lvt / HANGUL_N_COUNT;
    let v = (lvt % HANGUL_N_COUNT) / HANGUL_T_COUNT;
    let t = lvt % HANGUL_T_COUNT;

    result.push(jamo(HANGUL_L_BASE + l));
    result.push(jamo(HANGUL_V_BASE + v));

    if t != 0 {
        result.push(jamo(HANGUL_T_BASE + t - 1));
    }
}

/// чамо - стартеры
#[inline(always)]
fn jamo(code: u32) -> Codepoint
{
    match char::from_u32(code) {
        Some(c) => Codepoint::starter(c),
        None => unreachable!("jamo U+{code:04X} is out of range"),
    }
}

use crate::decomposition::hangul::*;

/// последняя завершающая согласная
const HANGUL_T_LAST: u32 = HANGUL_T_BASE + HANGUL_T_COUNT - 2;

/// результат комбинирования чамо
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangulComposition
{
    /// ведущая согласная + гласная: слог LV
    LV(char),
    /// слог + завершающая согласная: слог LVT
    LVT(char),
}

/// комбинирование стартера хангыль со следующим чамо
///
/// `t_attached` - к слогу уже присоединена завершающая согласная
#[inline(always)]
pub fn compose_hangul(starter: char, second: char, t_attached: bool) -> Option<HangulComposition>
{
    let starter = starter as u32;
    let second = second as u32;

    // L + V
    if (HANGUL_L_BASE .. HANGUL_L_BASE + HANGUL_L_COUNT).contains(&starter)
        && (HANGUL_V_BASE .. HANGUL_V_BASE + HANGUL_V_COUNT).contains(&second)
    {
        let l = starter - HANGUL_L_BASE;
        let v = second - HANGUL_V_BASE;

        return syllable(HANGUL_S_BASE + l * HANGUL_N_COUNT + v * HANGUL_T_COUNT).map(HangulComposition::LV);
    }

    // LV + T
    if !t_attached && is_hangul_syllable(starter) && (HANGUL_T_BASE ..= HANGUL_T_LAST).contains(&second) {
        return syllable(starter + second - (HANGUL_T_BASE - 1)).map(HangulComposition::LVT);
    }

    None
}

#[inline(always)]
fn syllable(code: u32) -> Option<char>
{
    char::from_u32(code)
}

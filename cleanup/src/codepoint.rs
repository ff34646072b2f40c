/// кодпоинт в виде u32, где CCC хранится в младших битах
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Codepoint(u32);

impl From<Codepoint> for char
{
    #[inline(always)]
    fn from(value: Codepoint) -> Self
    {
        // SAFETY: кодпоинт создается только из char
        unsafe { char::from_u32_unchecked(value.0 >> 8) }
    }
}

impl core::fmt::Debug for Codepoint
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "{{ code: U+{:04X}, ccc: {} }}",
            self.0 >> 8,
            self.0 as u8
        )
    }
}

impl Codepoint
{
    #[inline(always)]
    pub fn new(c: char, ccc: u8) -> Self
    {
        Self((c as u32) << 8 | (ccc as u32))
    }

    #[inline(always)]
    pub fn starter(c: char) -> Self
    {
        Self((c as u32) << 8)
    }

    #[inline(always)]
    pub fn char(&self) -> char
    {
        (*self).into()
    }

    #[inline(always)]
    pub fn ccc(&self) -> u8
    {
        self.0 as u8
    }

    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.0 as u8 == 0
    }
}

use unicode_cleanup_source::CanonicalTables;

/// быстрая проверка: текст гарантированно в NFC?
///
/// false не означает, что текст не нормализован - только то, что его нужно нормализовать, чтобы это выяснить
pub fn quick_is_nfc<'t>(input: &str, tables: impl FnOnce() -> &'t CanonicalTables) -> bool
{
    if input.is_ascii() {
        return true;
    }

    let tables = tables();

    input.chars().all(|c| c.is_ascii() || !tables.is_nfc_unsafe(c))
}

use crate::codepoint::Codepoint;

/// каноническое упорядочивание: каждая последовательность нестартеров стабильно сортируется по CCC,
/// стартеры остаются на своих местах
pub fn reorder(buffer: &mut [Codepoint])
{
    let mut start = 0;

    while start < buffer.len() {
        if buffer[start].is_starter() {
            start += 1;
            continue;
        }

        let length = buffer[start ..]
            .iter()
            .position(|c| c.is_starter())
            .unwrap_or(buffer.len() - start);

        if length > 1 {
            buffer[start .. start + length].sort_by_key(|c| c.ccc());
        }

        start += length;
    }
}

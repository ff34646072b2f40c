use unicode_cleanup_source::CanonicalTables;

use crate::codepoint::Codepoint;
use hangul::{compose_hangul, HangulComposition};

mod hangul;

/// каноническая композиция декомпозированного и упорядоченного текста
pub fn compose(buffer: &[Codepoint], tables: &CanonicalTables) -> String
{
    let mut result = String::with_capacity(buffer.len() * 2);
    let mut composer = Composer::new(tables);

    for &codepoint in buffer {
        composer.push(codepoint, &mut result);
    }

    composer.flush(&mut result);

    result
}

/// состояние композиции: текущий стартер и следующие за ним нескомбинированные нестартеры
struct Composer<'a>
{
    tables: &'a CanonicalTables,
    /// стартер, с которым могут комбинироваться следующие символы
    starter: Option<char>,
    /// нестартеры, которые не удалось скомбинировать со стартером
    pending: Vec<char>,
    /// CCC последнего нескомбинированного символа
    last_class: u8,
    /// к слогу хангыль уже присоединена завершающая согласная
    t_attached: bool,
}

impl<'a> Composer<'a>
{
    fn new(tables: &'a CanonicalTables) -> Self
    {
        Self {
            tables,
            starter: None,
            pending: Vec::with_capacity(8),
            last_class: 0,
            t_attached: false,
        }
    }

    #[inline(always)]
    fn push(&mut self, codepoint: Codepoint, result: &mut String)
    {
        let c = codepoint.char();

        if c.is_ascii() {
            self.start(c, result);
            return;
        }

        match codepoint.ccc() {
            0 => self.push_starter(c, result),
            class => self.push_nonstarter(c, class),
        }
    }

    /// нестартер комбинируется со стартером, если между ними нет символа с таким же или большим CCC
    #[inline(always)]
    fn push_nonstarter(&mut self, c: char, class: u8)
    {
        self.t_attached = false;

        if let Some(starter) = self.starter {
            if self.last_class < class {
                if let Some(composed) = self.tables.compose(starter, c) {
                    self.starter = Some(composed);
                    return;
                }
            }
        }

        self.pending.push(c);
        self.last_class = class;
    }

    /// стартер комбинируется с предыдущим стартером, только если он следует непосредственно за ним
    #[inline(always)]
    fn push_starter(&mut self, c: char, result: &mut String)
    {
        if let Some(starter) = self.starter {
            if self.last_class == 0 && self.pending.is_empty() {
                if let Some(composed) = self.tables.compose(starter, c) {
                    self.starter = Some(composed);
                    self.t_attached = false;
                    return;
                }

                match compose_hangul(starter, c, self.t_attached) {
                    Some(HangulComposition::LV(composed)) => {
                        self.starter = Some(composed);
                        self.t_attached = false;
                        return;
                    }
                    Some(HangulComposition::LVT(composed)) => {
                        self.starter = Some(composed);
                        self.t_attached = true;
                        return;
                    }
                    None => (),
                }
            }
        }

        self.start(c, result);
    }

    /// записываем накопленное и начинаем со следующего стартера
    #[inline(always)]
    fn start(&mut self, c: char, result: &mut String)
    {
        self.flush(result);

        self.starter = Some(c);
        self.last_class = 0;
        self.t_attached = false;
    }

    /// записать стартер и нескомбинированные нестартеры
    fn flush(&mut self, result: &mut String)
    {
        if let Some(starter) = self.starter.take() {
            result.push(starter);
        }

        result.extend(self.pending.drain(..));
    }
}

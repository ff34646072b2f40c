use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};
use unicode_cleanup::{Backend, Form, Normalizer};

/// нормализаторы ICU для всех четырех форм
struct Icu
{
    nfc: ComposingNormalizer,
    nfd: DecomposingNormalizer,
    nfkc: ComposingNormalizer,
    nfkd: DecomposingNormalizer,
}

impl Icu
{
    fn new() -> Self
    {
        Self {
            nfc: ComposingNormalizer::new_nfc(),
            nfd: DecomposingNormalizer::new_nfd(),
            nfkc: ComposingNormalizer::new_nfkc(),
            nfkd: DecomposingNormalizer::new_nfkd(),
        }
    }

    fn normalize(&self, form: Form, input: &str) -> String
    {
        match form {
            Form::Nfc => self.nfc.normalize(input),
            Form::Nfd => self.nfd.normalize(input),
            Form::Nfkc => self.nfkc.normalize(input),
            Form::Nfkd => self.nfkd.normalize(input),
        }
    }
}

const FORMS: [Form; 4] = [Form::Nfc, Form::Nfd, Form::Nfkc, Form::Nfkd];

/// сравниваем с результатами нормализации ICU на текстах и их декомпозициях
#[test]
fn texts()
{
    let icu = Icu::new();
    let normalizer = Normalizer::new();

    for (name, text) in crate::data::files() {
        let variants = [
            text.clone(),
            icu.normalize(Form::Nfd, &text),
            icu.normalize(Form::Nfkd, &text),
        ];

        for (variant, source) in variants.iter().enumerate() {
            for form in FORMS {
                assert_eq!(
                    normalizer.normalize(form, source),
                    icu.normalize(form, source),
                    "{form:?}, {name}, variant {variant}"
                );
            }
        }
    }
}

/// каждый кодпоинт отдельно и перед комбинирующим знаком
#[test]
fn codepoints()
{
    let icu = Icu::new();
    let normalizer = Normalizer::new();

    for code in 0 ..= 0x3FFFF {
        let c = match char::from_u32(code) {
            Some(c) => c,
            None => continue,
        };

        for source in [c.to_string(), format!("{c}\u{0301}"), format!("\u{1100}{c}\u{0323}")] {
            for form in FORMS {
                assert_eq!(
                    normalizer.normalize(form, &source),
                    icu.normalize(form, &source),
                    "{form:?}, U+{code:04X}"
                );
            }
        }
    }
}

/// быстрая проверка не должна утверждать, что текст в NFC, если это не так
#[test]
fn quick_check_is_conservative()
{
    let icu = Icu::new();
    let normalizer = Normalizer::new();

    for code in 0 ..= 0x3FFFF {
        let c = match char::from_u32(code) {
            Some(c) => c,
            None => continue,
        };

        for source in [c.to_string(), format!("a{c}"), format!("{c}\u{0301}")] {
            if normalizer.quick_is_nfc(&source) {
                assert!(icu.nfc.is_normalized(&source), "U+{code:04X}");
            }
        }
    }
}

/// обе реализации дают одинаковый результат очистки
#[test]
fn clean_up_backends()
{
    let forms = Icu::new();
    let reference = Normalizer::new();
    let icu = Normalizer::new().with_backend(Backend::icu());

    for (name, bytes) in crate::data::damaged_files() {
        let clean = reference.clean_up(&bytes);

        assert_eq!(clean, icu.clean_up(&bytes), "{name}");
        assert!(clean.contains('\u{FFFD}'), "{name}");
        // вставка U+25CC не нарушает NFC
        assert!(forms.nfc.is_normalized(&clean), "{name}");
    }

    for (name, text) in crate::data::files() {
        assert_eq!(reference.clean_up(text.as_bytes()), icu.clean_up(text.as_bytes()), "{name}");
    }
}

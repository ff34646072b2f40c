use unicode_cleanup::{Backend, Form, Normalizer, DOTTED_CIRCLE};
use unicode_cleanup_source::ucd;

/// фрагмент UnicodeData.txt: символы, участвующие в проверочных строках
const UNICODE_DATA: &str = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0044;LATIN CAPITAL LETTER D;Lu;0;L;;;;;N;;;;0064;
0065;LATIN SMALL LETTER E;Ll;0;L;;;;;N;;;0045;;0045
0066;LATIN SMALL LETTER F;Ll;0;L;;;;;N;;;0046;;0046
0069;LATIN SMALL LETTER I;Ll;0;L;;;;;N;;;0049;;0049
0073;LATIN SMALL LETTER S;Ll;0;L;;;;;N;;;0053;;0053
00C5;LATIN CAPITAL LETTER A WITH RING ABOVE;Lu;0;L;0041 030A;;;;N;LATIN CAPITAL LETTER A RING;;;00E5;
00E9;LATIN SMALL LETTER E WITH ACUTE;Ll;0;L;0065 0301;;;;N;LATIN SMALL LETTER E ACUTE;;00C9;;00C9
017F;LATIN SMALL LETTER LONG S;Ll;0;L;<compat> 0073;;;;N;;;0053;;0053
01FA;LATIN CAPITAL LETTER A WITH RING ABOVE AND ACUTE;Lu;0;L;00C5 0301;;;;N;;;;01FB;
0301;COMBINING ACUTE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING ACUTE;;;;
0307;COMBINING DOT ABOVE;Mn;230;NSM;;;;;N;NON-SPACING DOT ABOVE;;;;
030A;COMBINING RING ABOVE;Mn;230;NSM;;;;;N;NON-SPACING RING ABOVE;;;;
0323;COMBINING DOT BELOW;Mn;220;NSM;;;;;N;NON-SPACING DOT BELOW;;;;
1100;HANGUL CHOSEONG KIYEOK;Lo;0;L;;;;;N;;;;;
1161;HANGUL JUNGSEONG A;Lo;0;L;;;;;N;;;;;
11A8;HANGUL JONGSEONG KIYEOK;Lo;0;L;;;;;N;;;;;
1E0A;LATIN CAPITAL LETTER D WITH DOT ABOVE;Lu;0;L;0044 0307;;;;N;;;;1E0B;
1E0C;LATIN CAPITAL LETTER D WITH DOT BELOW;Lu;0;L;0044 0323;;;;N;;;;1E0D;
1E63;LATIN SMALL LETTER S WITH DOT BELOW;Ll;0;L;0073 0323;;;;N;;;1E62;;1E62
1E69;LATIN SMALL LETTER S WITH DOT BELOW AND DOT ABOVE;Ll;0;L;1E63 0307;;;;N;;;1E68;;1E68
1E9B;LATIN SMALL LETTER LONG S WITH DOT ABOVE;Ll;0;L;017F 0307;;;;N;;;1E60;;1E60
212B;ANGSTROM SIGN;Lu;0;L;00C5;;;;N;ANGSTROM UNIT;;;00E5;
AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
FB01;LATIN SMALL LIGATURE FI;Ll;0;L;<compat> 0066 0069;;;;N;;;;;
";

const COMPOSITION_EXCLUSIONS: &str = "\
# CompositionExclusions-15.1.0.txt
# Date: 2023-01-05
";

const NORMALIZATION_PROPS: &str = "\
# Derived Property: NFC_Quick_Check
212B          ; NFC_QC; N # Lu       ANGSTROM SIGN

0301          ; NFC_QC; M # Mn       COMBINING ACUTE ACCENT
0307          ; NFC_QC; M # Mn       COMBINING DOT ABOVE
030A          ; NFC_QC; M # Mn       COMBINING RING ABOVE
0323          ; NFC_QC; M # Mn       COMBINING DOT BELOW
1161..1175    ; NFC_QC; M # Lo  [21] HANGUL JUNGSEONG A..HANGUL JUNGSEONG I
11A8..11C2    ; NFC_QC; M # Lo  [27] HANGUL JONGSEONG KIYEOK..HANGUL JONGSEONG HIEUH
";

/// строки в формате NormalizationTest.txt для таблиц, разобранных из фрагментов выше
const UCD_NORMALIZATION_TESTS: &str = "\
@Part0 # Specific cases
1E0A;1E0A;0044 0307;1E0A;0044 0307; # (Ḋ; Ḋ; D◌̇; Ḋ; D◌̇; )
1E0C;1E0C;0044 0323;1E0C;0044 0323; # (Ḍ; Ḍ; D◌̣; Ḍ; D◌̣; )
1E0A 0323;1E0C 0307;0044 0323 0307;1E0C 0307;0044 0323 0307; # (Ḋ◌̣; Ḍ◌̇; D◌̣◌̇; Ḍ◌̇; D◌̣◌̇; )
0044 0307 0323;1E0C 0307;0044 0323 0307;1E0C 0307;0044 0323 0307; # (D◌̇◌̣; Ḍ◌̇; D◌̣◌̇; Ḍ◌̇; D◌̣◌̇; )
00C5;00C5;0041 030A;00C5;0041 030A; # (Å; Å; A◌̊; Å; A◌̊; )
212B;00C5;0041 030A;00C5;0041 030A; # (Å; Å; A◌̊; Å; A◌̊; ) ANGSTROM SIGN
01FA;01FA;0041 030A 0301;01FA;0041 030A 0301; # (Ǻ; Ǻ; A◌̊◌́; Ǻ; A◌̊◌́; )
1E9B 0323;1E9B 0323;017F 0323 0307;1E69;0073 0323 0307; # (ẛ◌̣; ẛ◌̣; ſ◌̣◌̇; ṩ; s◌̣◌̇; )
FB01;FB01;FB01;0066 0069;0066 0069; # (ﬁ; ﬁ; ﬁ; fi; fi; )
0065 0301;00E9;0065 0301;00E9;0065 0301; # (e◌́; é; e◌́; é; e◌́; )
AC00;AC00;1100 1161;AC00;1100 1161; # (가; 가; 가; 가; 가; )
AC01;AC01;1100 1161 11A8;AC01;1100 1161 11A8; # (각; 각; 각; 각; 각; )
1100 1161 11A8;AC01;1100 1161 11A8;AC01;1100 1161 11A8; # (각; 각; 각; 각; 각; )
AC00 11A8;AC01;1100 1161 11A8;AC01;1100 1161 11A8; # (각; 각; 각; 각; 각; )
";

/// NormalizationTest.txt: части 0 - 3 для всех назначенных символов
const NORMALIZATION_TESTS: &str = include_str!("./../../test_data/NormalizationTest.txt");

/// строка проверочных данных
#[derive(Debug)]
struct NormalizationTest
{
    part: String,
    description: String,
    line: usize,
    c: [String; 5],
}

/// разбор данных в формате NormalizationTest.txt
fn normalization_tests(data: &str) -> Vec<NormalizationTest>
{
    let mut result = vec![];
    let mut part = String::new();

    for (i, line) in data.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('@') {
            part = line.to_owned();
            continue;
        }

        let (codes, description) = line.split_once('#').unwrap();
        let codes: Vec<&str> = codes.split(';').collect();

        if codes.len() != 6 {
            panic!("{}: некорректное количество полей теста", i + 1);
        }

        let columns: Vec<String> = codes[.. 5]
            .iter()
            .map(|column| {
                column
                    .split_whitespace()
                    .map(|code| char::from_u32(u32::from_str_radix(code, 16).unwrap()).unwrap())
                    .collect()
            })
            .collect();

        result.push(NormalizationTest {
            part: part.clone(),
            description: description.trim().to_owned(),
            line: i + 1,
            c: columns.try_into().unwrap(),
        });
    }

    result
}

/// проверить нормализатор на строках NormalizationTest
fn check(normalizer: &Normalizer, data: &str)
{
    for t in normalization_tests(data) {
        let [c1, c2, c3, c4, c5] = &t.c;
        let at = format!("line {}, {}: {}", t.line, t.part, t.description);

        // c2 == toNFC(c1) == toNFC(c2) == toNFC(c3), c4 == toNFC(c4) == toNFC(c5)
        for (expected, source) in [(c2, c1), (c2, c2), (c2, c3), (c4, c4), (c4, c5)] {
            assert_eq!(&normalizer.normalize(Form::Nfc, source), expected, "NFC, {at}");
        }

        // c3 == toNFD(c1) == toNFD(c2) == toNFD(c3), c5 == toNFD(c4) == toNFD(c5)
        for (expected, source) in [(c3, c1), (c3, c2), (c3, c3), (c5, c4), (c5, c5)] {
            assert_eq!(&normalizer.normalize(Form::Nfd, source), expected, "NFD, {at}");
        }

        // c4 == toNFKC(c1 ..= c5), c5 == toNFKD(c1 ..= c5)
        for source in &t.c {
            assert_eq!(&normalizer.normalize(Form::Nfkc, source), c4, "NFKC, {at}");
            assert_eq!(&normalizer.normalize(Form::Nfkd, source), c5, "NFKD, {at}");
        }

        // очистка совпадает с NFC, изолированный знак в начале строки получает основу U+25CC
        for (expected, source) in [(c2, c1), (c2, c2), (c2, c3), (c4, c4), (c4, c5)] {
            let clean = normalizer.clean_up(source.as_bytes());

            assert_eq!(clean.trim_start_matches(DOTTED_CIRCLE), expected, "cleanUp, {at}");
        }
    }
}

/// нормализатор на таблицах, разобранных из файлов UCD
#[test]
fn ucd_tables()
{
    let tables = ucd::parse(UNICODE_DATA, COMPOSITION_EXCLUSIONS, NORMALIZATION_PROPS).unwrap();

    check(&Normalizer::from_tables(&tables), UCD_NORMALIZATION_TESTS);
}

/// нормализатор на вкомпилированных таблицах
#[test]
fn compiled_tables()
{
    check(&Normalizer::new(), NORMALIZATION_TESTS);
}

/// нормализатор ICU и очистка на вкомпилированных таблицах
#[test]
fn icu_backend()
{
    check(&Normalizer::new().with_backend(Backend::icu()), NORMALIZATION_TESTS);
}

/// все части файла на месте, в том числе канонический порядок и блокировка композиции
#[test]
fn normalization_test_parts()
{
    let tests = normalization_tests(NORMALIZATION_TESTS);

    for part in ["@Part0", "@Part1", "@Part2", "@Part3"] {
        assert!(tests.iter().any(|t| t.part.starts_with(part)), "{part}");
    }

    // U+0340 раскладывается в U+0300, U+0344 - в U+0308 U+0301
    let character_row = |c: &str| tests.iter().any(|t| t.c[0] == c && t.part.starts_with("@Part1"));

    assert!(character_row("\u{0340}"));
    assert!(character_row("\u{0344}"));

    // композиция A + U+030A заблокирована знаком того же класса
    let blocked = tests.iter().find(|t| t.c[0] == "A\u{0300}\u{030A}").unwrap();

    assert_eq!(blocked.c[1], "\u{00C0}\u{030A}");
}

/// очистка с таблицами из файлов UCD
#[test]
fn ucd_clean_up()
{
    let tables = ucd::parse(UNICODE_DATA, COMPOSITION_EXCLUSIONS, NORMALIZATION_PROPS).unwrap();
    let normalizer = Normalizer::from_tables(&tables);

    assert_eq!(normalizer.clean_up(b"D\xCC\x87\xCC\xA3"), "\u{1E0C}\u{0307}");
    assert_eq!(normalizer.clean_up(b"\xCC\x81e"), "\u{25CC}\u{0301}e");
    assert_eq!(normalizer.clean_up(b"\xC0\x80\x01A"), "\u{FFFD}\u{FFFD}A");
    assert!(!normalizer.quick_is_nfc("\u{212B}"));
    assert!(normalizer.quick_is_nfc("\u{00C5}"));

    // таблицы совместимости строятся из того же файла
    assert_eq!(normalizer.to_nfkd("\u{017F}"), "s");
}

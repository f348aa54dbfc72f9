use casefmt::{parse, CasingMode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLES: [&str; 8] = [
    "simpleTestString",
    "This_is_a_Test_String_with_Underscores",
    "StringWith---Multiple-Hyphens",
    "randomSTRING_withVARIOUS@@symbols&&andNumbers1234",
    "aVery---LongString_withLots__OfDifferentCharacters_1234567890",
    "CapsLOCKStringWITHMixedCAPS_and_NUMBERS4321",
    "NoisyStringWith@@@@Lots$$$of%%%Special###Characters",
    "superLONGStringWithALotOfDifferentTypesOfCharacters1234567890",
];

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("camel_underscore", |b| {
        b.iter(|| parse(black_box(&SAMPLES[..]), Some('_'), CasingMode::Camel, false).unwrap())
    });

    c.bench_function("upper_hyphen_drop_vowels", |b| {
        b.iter(|| parse(black_box(&SAMPLES[..]), Some('-'), CasingMode::Upper, true).unwrap())
    });

    // The full sweep the test suite runs: every symbol separator times
    // every casing mode.
    c.bench_function("separator_sweep", |b| {
        let separators: Vec<Option<char>> = (b'!'..=b'~')
            .map(char::from)
            .filter(|ch| !ch.is_ascii_alphanumeric())
            .map(Some)
            .chain([None])
            .collect();
        let modes = [
            CasingMode::Camel,
            CasingMode::Pascal,
            CasingMode::Lower,
            CasingMode::Upper,
        ];

        b.iter(|| {
            for &sep in &separators {
                for mode in modes {
                    parse(black_box(&SAMPLES[..]), sep, mode, false).unwrap();
                }
            }
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);

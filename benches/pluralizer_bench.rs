use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use plurality::{pluralize_noun, pluralize_noun_phrase, pluralize_verb, Lexicon, Pluralizer};

const NOUNS: &[&str] = &[
    "sword", "boss", "brush", "fox", "life", "loaf", "bluff", "entity", "tray", "terminus",
    "ellipsis", "gas", "person", "fish", "Excalibur", "GLAMDRING",
];

const PHRASES: &[&str] = &[
    "a short sword",
    "a bag of holding",
    "one loaf of crusty bread",
    "an Excalibur",
    "THE GLAMDRING",
    "  a gleaming suit of elven mail",
];

const VERBS: &[&str] = &[
    "relaxes", "blesses", "wrenches", "parries", "assays", "moans", "has", "isn't",
];

fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");
    group.throughput(Throughput::Elements(NOUNS.len() as u64));

    group.bench_function("pluralize_noun", |b| {
        b.iter(|| {
            for word in NOUNS {
                black_box(pluralize_noun(black_box(word), 3));
            }
        })
    });

    group.throughput(Throughput::Elements(PHRASES.len() as u64));
    group.bench_function("pluralize_noun_phrase", |b| {
        b.iter(|| {
            for phrase in PHRASES {
                black_box(pluralize_noun_phrase(black_box(phrase), 7));
            }
        })
    });

    group.throughput(Throughput::Elements(VERBS.len() as u64));
    group.bench_function("pluralize_verb", |b| {
        b.iter(|| {
            for verb in VERBS {
                black_box(pluralize_verb(black_box(verb)));
            }
        })
    });

    group.finish();
}

fn bench_custom_lexicon(c: &mut Criterion) {
    // WHY: a merged table is larger than the built-in one; lookups must stay flat
    let mut nouns = Lexicon::builtin_nouns().clone();
    nouns.extend((0..10_000).map(|i| (format!("thing{i}"), format!("thingz{i}"))));
    let pluralizer = Pluralizer::new(nouns, Lexicon::builtin_verbs().clone());

    c.bench_function("custom_lexicon_phrase", |b| {
        b.iter(|| {
            for phrase in PHRASES {
                black_box(pluralizer.noun_phrase(black_box(phrase), 7));
            }
        })
    });
}

criterion_group!(benches, bench_rules, bench_custom_lexicon);
criterion_main!(benches);

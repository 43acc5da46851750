use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semver_range::{Range, SatisfyOptions, Semver, Version, VersionParser};

fn bench_parse_version(c: &mut Criterion) {
    let parser = VersionParser::new();
    let versions = [
        "v1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "12.4.7-canary.1",
        "1.0.0-alpha.beta.1",
        "1.2.3-rc.1+sha.5114f85",
    ];

    c.bench_function("parse_version", |b| {
        b.iter(|| {
            for version in versions {
                black_box(parser.parse_version(black_box(version)).ok());
            }
        })
    });
}

fn bench_parse_range(c: &mut Criterion) {
    let parser = VersionParser::new();
    let ranges = [
        ">=1.2.3 <2.0.0",
        "^1.2.3 || ~2.4",
        "1.2.* || 2.*",
        "1.2.3 - 2.0.0",
        "~1.2.1 >=1.2.3",
        ">1.0 <3.0 || >=4.0",
        "^0.0.3-alpha",
    ];

    c.bench_function("parse_range", |b| {
        b.iter(|| {
            for range in ranges {
                black_box(parser.parse_range(black_box(range)).ok());
            }
        })
    });
}

fn bench_satisfies(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "^1.2.0"),
        ("12.4.7-canary.1", "^12.4.6"),
        ("2.4.5", "~2.4"),
        ("1.2.3", ">=1.2.3 <2.0.0"),
        ("1.9999.9999", "<2.0.0"),
        ("1.2.3", "1.2.* || 2.*"),
    ];

    c.bench_function("semver_satisfies", |b| {
        b.iter(|| {
            for (version, range) in cases {
                black_box(Semver::satisfies(
                    black_box(version),
                    black_box(range),
                    SatisfyOptions::default(),
                ));
            }
        })
    });
}

fn bench_satisfies_parsed(c: &mut Criterion) {
    let versions: Vec<Version> = [
        "1.2.3",
        "1.2.3-beta",
        "2.4.5",
        "1.9999.9999",
        "1.0.10-canary.1",
        "1.9.0",
        "2.0.0",
    ]
    .iter()
    .map(|v| Version::parse(v).expect("parse version"))
    .collect();

    let range = Range::parse("^1.2").expect("parse range");

    c.bench_function("semver_satisfies_parsed", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(range.satisfies(black_box(version), SatisfyOptions::include_prerelease()));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_parse_version,
    bench_parse_range,
    bench_satisfies,
    bench_satisfies_parsed
);
criterion_main!(benches);

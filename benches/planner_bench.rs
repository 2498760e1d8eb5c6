use criterion::{criterion_group, criterion_main, Criterion};
use editor_launch::core::editor::EditorResolver;
use editor_launch::core::planner::build_invocation;
use std::collections::BTreeMap;
use std::hint::black_box;
use std::path::{Path, PathBuf};

fn never_found(_: &str) -> Option<PathBuf> {
    None
}

fn bench_build_invocation(c: &mut Criterion) {
    let overrides = BTreeMap::new();
    let file = Path::new("/tmp/COMMIT_EDITMSG");

    c.bench_function("build_invocation", |b| {
        b.iter(|| {
            build_invocation(
                black_box("emacsclient -c --alternate-editor=''"),
                file,
                &overrides,
                &never_found,
            )
        });
    });
}

fn bench_resolve_fallback(c: &mut Criterion) {
    let resolver = EditorResolver::default();

    c.bench_function("resolve_fallback_miss", |b| {
        b.iter(|| black_box(resolver.resolve(&never_found)).is_err());
    });
}

criterion_group!(benches, bench_build_invocation, bench_resolve_fallback);
criterion_main!(benches);

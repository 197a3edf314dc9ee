//! Performance benchmarks for ctxsnap

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ctxsnap::test_utils::TestRepo;
use ctxsnap::tree::decode_preview;
use ctxsnap::{OutputConfig, ScanResult, TreeWalker, WalkerConfig, render_json, render_markdown};

const RUST_SOURCE: &str = r#"//! Module documentation
//! with multiple lines

use std::path::Path;

/// Main function documentation
fn main() {
    println!("Hello, world!");
}
"#;

/// Create a project with a few hundred files spread over nested directories,
/// plus ignored directories the walker has to skip.
fn create_test_project() -> TestRepo {
    let repo = TestRepo::new();
    for a in 0..6 {
        for b in 0..6 {
            for f in 0..8 {
                repo.add_file(
                    &format!("src/mod_{a}/sub_{b}/file_{f}.rs"),
                    &RUST_SOURCE.repeat(f + 1),
                );
            }
        }
        repo.add_file(&format!("node_modules/pkg_{a}/index.js"), "module.exports = {};");
    }
    repo.add_file("README.md", &"Project readme line\n".repeat(200));
    repo
}

fn bench_walk(c: &mut Criterion) {
    let repo = create_test_project();

    c.bench_function("walk_with_previews", |b| {
        let walker = TreeWalker::new(WalkerConfig::default()).unwrap();
        b.iter(|| black_box(walker.walk(black_box(repo.path()))))
    });

    c.bench_function("walk_without_previews", |b| {
        let config = WalkerConfig {
            include_content: false,
            ..Default::default()
        };
        let walker = TreeWalker::new(config).unwrap();
        b.iter(|| black_box(walker.walk(black_box(repo.path()))))
    });
}

fn bench_decode_preview(c: &mut Criterion) {
    let text = RUST_SOURCE.repeat(50);
    c.bench_function("decode_preview", |b| {
        b.iter(|| black_box(decode_preview(black_box(text.as_bytes()), 1000)))
    });
}

fn bench_render(c: &mut Criterion) {
    let repo = create_test_project();
    let result = ScanResult::collect(repo.path(), WalkerConfig::default()).unwrap();
    let config = OutputConfig::default();

    c.bench_function("render_json", |b| {
        b.iter(|| black_box(render_json(black_box(&result)).unwrap()))
    });

    c.bench_function("render_markdown", |b| {
        b.iter(|| black_box(render_markdown(black_box(&result), &config).unwrap()))
    });
}

criterion_group!(benches, bench_walk, bench_decode_preview, bench_render);
criterion_main!(benches);

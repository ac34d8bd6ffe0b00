//! Benchmarks for page generation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use refdoc_catalog::{Catalog, CatalogBuilder, Member, MemberKind, TypeDecl, TypeKind, TypeRef};
use refdoc_sections::Document;
use refdoc_site::{Generator, GeneratorConfig, OutputSet};

/// Catalog with `namespaces` namespaces of `types` classes each.
fn create_catalog(namespaces: usize, types: usize) -> Catalog {
    let mut builder = CatalogBuilder::new();
    for n in 0..namespaces {
        let ns = builder.add_namespace(builder.root(), &format!("Lib.Area{n}"));
        for t in 0..types {
            let decl = TypeDecl::new(format!("Type{t}"), TypeKind::Class)
                .with_documentation("Generated type.")
                .with_member(Member::new("Next", MemberKind::Property).with_type(
                    TypeRef::new(format!("Lib.Area{n}"), format!("Type{}", (t + 1) % types)),
                ))
                .with_member(Member::new("Run", MemberKind::Method));
            builder.add_or_merge(ns, decl);
        }
    }
    builder.build()
}

fn create_document(sections: usize) -> Document {
    let mut markdown = String::new();
    for i in 0..sections {
        markdown.push_str(&format!(
            "# Part {i}\n\nIntro.\n\n## Detail {i}\n\n```rust\nlet x = {i};\n```\n\n"
        ));
    }
    Document::from_markdown("Guide", &markdown)
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [10, 50] {
        let catalog = create_catalog(size, size);
        let documents = vec![create_document(size)];
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut output = OutputSet::new();
                Generator::new(&catalog, &documents, GeneratorConfig::default())
                    .generate(&mut output)
            });
        });
    }

    group.finish();
}

fn bench_section_index(c: &mut Criterion) {
    let document = create_document(200);

    c.bench_function("section_index_200", |b| b.iter(|| document.index()));
}

criterion_group!(benches, bench_generate, bench_section_index);
criterion_main!(benches);

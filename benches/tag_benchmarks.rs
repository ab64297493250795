#![allow(missing_docs)]
//! Benchmarks for line parsing and catalog search using Criterion.rs.

use bookcat::{Book, Catalog, Command};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const AUTHORS: [&str; 4] = ["Frank Herbert", "Ursula K. Le Guin", "Stanisław Lem", "Octavia E. Butler"];

/// Build a catalog of `count` books with rotating authors and years.
fn build_catalog(count: u64) -> Catalog {
    let mut catalog = Catalog::new();
    for id in 1..=count {
        let mut book = Book::new();
        book.set_id(&id.to_string());
        book.set_title(&format!("Volume {id} of the Collected Works"));
        book.set_author(AUTHORS[usize::try_from(id).unwrap_or(0) % AUTHORS.len()]);
        book.set_publisher("Ace Books");
        book.set_date(&format!("{}-06", 1950 + id % 70));
        book.validate().expect("benchmark books are valid");
        catalog.insert(book).expect("benchmark ids are unique");
    }
    catalog
}

fn benchmark_parse_add_line(c: &mut Criterion) {
    let line = ":add: :id: 42 :title: The Left Hand of Darkness :author: Ursula K. Le Guin \
                :publisher: Ace Books :date: 1969-03";
    c.bench_function("parse_add_line", |b| {
        b.iter(|| Command::parse(black_box(line)));
    });
}

fn benchmark_search_1k(c: &mut Criterion) {
    let catalog = build_catalog(1_000);
    let command = Command::parse(":author: le guin :date: 1960..1979 :any: works")
        .expect("query parses")
        .expect("query is not blank");

    c.bench_function("search_1k_books", |b| {
        b.iter(|| catalog.search(black_box(command.bundle())).len());
    });
}

criterion_group!(benches, benchmark_parse_add_line, benchmark_search_1k);
criterion_main!(benches);

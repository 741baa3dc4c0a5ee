//! Performance benchmarks for the contact store.
//!
//! These benchmarks measure the cost of the full-reload/full-rewrite policy:
//! - Loading the backing file
//! - Persisting the whole book
//! - Validating an add against a large book

use contact_book::models::{Contact, ContactBook};
use contact_book::repositories::{ContactRepository, CsvContactRepository};
use contact_book::NameValidation;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::tempdir;

/// Build a book of `size` contacts with unique emails and phone numbers.
fn create_test_book(size: usize) -> ContactBook {
    (0..size)
        .map(|i| {
            Contact::new(
                format!("user{}@domain{}.com", i, i % 10),
                format!("First{}", i),
                format!("Last{}", i),
                format!("555-{:03}-{:04}", i / 10_000, i % 10_000),
            )
        })
        .collect()
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [100, 1_000, 10_000] {
        let dir = tempdir().unwrap();
        let repo = CsvContactRepository::new(dir.path().join("contacts.csv"));
        repo.persist(&create_test_book(size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| repo.load().unwrap());
        });
    }

    group.finish();
}

fn bench_persist(c: &mut Criterion) {
    let mut group = c.benchmark_group("persist");

    for size in [100, 1_000, 10_000] {
        let dir = tempdir().unwrap();
        let repo = CsvContactRepository::new(dir.path().join("contacts.csv"));
        let book = create_test_book(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| repo.persist(&book).unwrap());
        });
    }

    group.finish();
}

fn bench_add_validation(c: &mut Criterion) {
    let book = create_test_book(10_000);

    c.bench_function("add_contact_10000", |b| {
        b.iter(|| {
            let mut book = book.clone();
            book.add_contact(
                Contact::new("new@example.com", "New", "Person", "(999) 999-9999"),
                NameValidation::Permissive,
            )
            .unwrap();
        });
    });
}

criterion_group!(benches, bench_load, bench_persist, bench_add_validation);
criterion_main!(benches);

use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
};

use strix::change::{apply_changes, Change};
use strix::model::*;
use strix::ontology::store::AxiomStore;

fn create_many_classes(i: isize) -> AxiomStore {
    let b = Build::new();
    let mut o = AxiomStore::new();
    let changes = (1..i)
        .map(|m| {
            Change::AddAxiom(DeclareClass(b.class(format!("http://example.com/b{}", m))).into())
        })
        .collect();
    apply_changes(&mut o, changes).unwrap();
    o
}

// We start by testing insertion through the change pipeline
fn classes(c: &mut Criterion) {
    let mut group = c.benchmark_group("classes");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for n in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| create_many_classes(n));
        });
    }
}

fn create_chain(n: isize) -> (Build, AxiomStore) {
    let b = Build::new();
    let mut o = AxiomStore::new();
    let changes = (0..n)
        .map(|m| {
            Change::AddAxiom(
                SubClassOf {
                    sup: b.class(format!("http://example.com/a{}", m + 1)).into(),
                    sub: b.class(format!("http://example.com/a{}", m)).into(),
                }
                .into(),
            )
        })
        .collect();
    apply_changes(&mut o, changes).unwrap();
    (b, o)
}

// Indexed queries should not degrade with the size of the ontology
fn queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for n in [100, 1_000, 10_000].iter() {
        let (b, o) = create_chain(*n);
        let middle: ClassExpression = b.class(format!("http://example.com/a{}", n / 2)).into();
        let entity: Entity = b.class(format!("http://example.com/a{}", n / 2)).into();

        group.bench_with_input(BenchmarkId::new("super_classes_of", n), n, |bench, _| {
            bench.iter(|| o.super_classes_of(&middle));
        });
        group.bench_with_input(BenchmarkId::new("axioms_referencing", n), n, |bench, _| {
            bench.iter(|| o.axioms_referencing(&entity));
        });
    }
}

criterion_group!(benches, classes, queries);
criterion_main!(benches);

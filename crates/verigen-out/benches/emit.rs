//! Collection + emission over many definitions that share a few constraints.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use verigen_core::{Constraint, EmitOptions};
use verigen_in::{NamedAttribute, NamedValue, OpDef};
use verigen_out::StaticVerifierEmitter;

fn make_ops(count: usize) -> Vec<OpDef> {
    let conditions = [
        ("$_self.isIntOrFloat()", "an int or float"),
        ("$_self.isSignlessInteger()", "signless integer"),
        ("::llvm::isa<::mlir::IndexType>($_self)", "index"),
        ("::llvm::isa<::mlir::FloatType>($_self)", "floating-point"),
    ];

    (0..count)
        .map(|i| {
            let (cond, summary) = conditions[i % conditions.len()];
            OpDef {
                name: format!("Op{i}"),
                operands: vec![NamedValue {
                    name: "input".to_string(),
                    constraint: Some(Constraint::new(cond, summary)),
                }],
                attributes: vec![NamedAttribute {
                    name: "width".to_string(),
                    constraint: Constraint::new(
                        format!("::llvm::cast<::mlir::IntegerAttr>($_self).getInt() < {}", i % 16),
                        "bounded width",
                    ),
                    derived: false,
                }],
                ..Default::default()
            }
        })
        .collect()
}

fn bench_collect_and_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect_and_emit");
    for count in [100, 1_000, 10_000] {
        let ops = make_ops(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &ops, |b, ops| {
            b.iter(|| {
                let mut emitter =
                    StaticVerifierEmitter::new("BenchOps.td", &EmitOptions::default()).unwrap();
                emitter.collect_op_constraints(black_box(ops));
                let mut out = Vec::new();
                emitter.emit_op_constraints(&mut out).unwrap();
                out
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_collect_and_emit);
criterion_main!(benches);

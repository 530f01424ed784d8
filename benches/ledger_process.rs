//! Benchmarks for batch order processing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stock_ledger::{Ledger, Order, RejectionCollector};

// Run with: cargo bench

fn build_orders(count: usize) -> Vec<Order> {
    let symbols = ["FOOGL", "PAPL", "MSFX", "AMZM"];
    (0..count)
        .map(|i| {
            let symbol = symbols[i % symbols.len()];
            let quantity = (i % 97) as i64 + 1;
            if i % 3 == 0 {
                Order::sell(quantity, symbol, (i % 10) as i32)
            } else {
                Order::buy(quantity, symbol, (i % 10) as i32)
            }
        })
        .collect()
}

fn benchmark_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_process");

    for batch_size in [10, 100, 1_000, 10_000].iter() {
        let orders = build_orders(*batch_size);
        group.bench_with_input(
            BenchmarkId::new("batch", batch_size),
            &orders,
            |b, orders| {
                b.iter(|| {
                    let mut ledger = Ledger::new(|balance: i64| {
                        black_box(balance);
                    });
                    ledger.set_balance(5_000);
                    ledger.set_inventory("FOOGL", 1_000).unwrap();
                    ledger.set_inventory("PAPL", 2_000).unwrap();

                    let mut rejected = RejectionCollector::new();
                    let report = ledger.process(black_box(orders), &mut rejected).unwrap();
                    black_box(report);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_process);
criterion_main!(benches);

//! Performance benchmarks for the salary calculator.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use salary_calculator::calculation::SalaryCalculator;
use salary_calculator::models::Employee;

/// Creates a batch of employees cycling through known and unknown designations.
fn create_employees(count: usize) -> Vec<Employee> {
    ["Developer", "Manager", "Intern", "developer"]
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, designation)| Employee::new(*designation, Decimal::new((i % 4000) as i64, 1)))
        .collect()
}

fn bench_single_calculation(c: &mut Criterion) {
    let calculator = SalaryCalculator::default();
    let developer = Employee::new("Developer", Decimal::from(8));
    let intern = Employee::new("Intern", Decimal::from(8));

    c.bench_function("calculate_salary_recognized", |b| {
        b.iter(|| calculator.calculate_salary(black_box(&developer)))
    });

    c.bench_function("calculate_salary_unrecognized", |b| {
        b.iter(|| calculator.calculate_salary(black_box(&intern)))
    });

    c.bench_function("calculate_salary_with_audit", |b| {
        b.iter(|| calculator.calculate_salary_with_audit(black_box(&developer), 1))
    });
}

fn bench_batch_calculation(c: &mut Criterion) {
    let calculator = SalaryCalculator::default();
    let mut group = c.benchmark_group("batch_calculate_salary");

    for size in [100usize, 1000] {
        let employees = create_employees(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &employees, |b, employees| {
            b.iter(|| {
                employees
                    .iter()
                    .map(|e| calculator.calculate_salary(e))
                    .sum::<Decimal>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_calculation, bench_batch_calculation);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use e8tags::scanner::{scan, ScanOptions};
use e8tags::tag::TagRecord;

fn generate_module(procedures: usize) -> String {
    let mut source = String::from("Перем мКэш Экспорт;\n");
    for i in 0..procedures {
        source.push_str(&format!(
            "// Процедура {i}\nПроцедура Обработать{i}(Параметр) Экспорт\n\
             \tПерем Индекс, Результат;\n\
             \tРезультат = \"Перем Строка; Функция Лишняя()\";\n\
             \tДля Индекс = 1 По 10 Цикл\n\t\tРезультат = Результат + Параметр;\n\tКонецЦикла;\n\
             КонецПроцедуры\n\n"
        ));
    }
    source
}

fn bench_scanner(c: &mut Criterion) {
    let source = generate_module(2000);
    let mut group = c.benchmark_group("scanner");
    for (name, options) in [
        ("default", ScanOptions::default()),
        ("legacy", ScanOptions::legacy()),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut tags: Vec<TagRecord> = Vec::new();
                scan(black_box(&source).lines(), &mut tags, &options);
                tags
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scanner);
criterion_main!(benches);

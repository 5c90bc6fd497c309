//! Read-path benchmarks for the TFT display device

use std::hint::black_box;

use chardev_mock::UserBuffer;
use chardev_runtime::{File, FileFlags, FileOperations};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tft_display::consts::MSG_BUFFER_LEN;
use tft_display::TftDisplay;

fn bench_read(c: &mut Criterion) {
    let device = TftDisplay::new();
    let file = File::new(FileFlags::READ);
    let mut group = c.benchmark_group("read");

    for count in [1usize, 5, MSG_BUFFER_LEN] {
        let mut buf = UserBuffer::new(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| device.read(&file, &mut buf, black_box(count)))
        });
    }
    group.finish();
}

fn bench_open_release(c: &mut Criterion) {
    let device = TftDisplay::new();
    let file = File::new(FileFlags::READ);

    c.bench_function("open_release", |b| {
        b.iter(|| {
            let opened = device.open(black_box(&file));
            device.release(&file);
            opened
        })
    });
}

criterion_group!(benches, bench_read, bench_open_release);
criterion_main!(benches);

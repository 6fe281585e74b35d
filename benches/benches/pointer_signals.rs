// Copyright 2025 the Bounceback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use bounceback::config::{Config, Options};
use bounceback::controller::Controller;
use bounceback::history::Navigator;
use bounceback::mouse::MouseStrategy;
use bounceback::page::Page;
use bounceback::types::{RelatedTarget, Signal};
use bounceback_store::{LocalStore, MemoryStore};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // xorshift64*
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        (x.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn gen_path(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..n)
        .map(|_| Point::new(rng.next_f64() * 1920.0, rng.next_f64() * 1080.0))
        .collect()
}

fn armed_controller() -> Controller<LocalStore<MemoryStore>> {
    let nav: Navigator = Navigator::Unsupported;
    let mut ctl = Controller::new(
        Page::new("Mozilla/5.0 (X11; Linux x86_64)", "bench.example"),
        LocalStore::new(MemoryStore::new()),
        nav,
    );
    ctl.init(Options::new().max_display(0));
    ctl
}

fn bench_pointer_move(c: &mut Criterion) {
    let path = gen_path(10_000, 0x5EED);
    let mut group = c.benchmark_group("pointer_move");
    group.throughput(Throughput::Elements(path.len() as u64));
    group.bench_function("mouse_strategy", |b| {
        b.iter_batched(
            MouseStrategy::new,
            |mut mouse| {
                for p in &path {
                    mouse.on_pointer_move(*p);
                }
                black_box(mouse.len())
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("controller_dispatch", |b| {
        b.iter_batched(
            armed_controller,
            |mut ctl| {
                for p in &path {
                    black_box(ctl.handle(Signal::PointerMove(*p)));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_pointer_leave(c: &mut Criterion) {
    let config = Config::default();
    let mut mouse = MouseStrategy::new();
    for i in 0..10 {
        mouse.on_pointer_move(Point::new(500.0, 400.0 - 40.0 * f64::from(i)));
    }
    let exits = gen_path(1_000, 0xE417);
    let mut group = c.benchmark_group("pointer_leave");
    group.throughput(Throughput::Elements(exits.len() as u64));
    group.bench_function("qualifies", |b| {
        b.iter(|| {
            let mut hits = 0_u32;
            for p in &exits {
                if mouse.qualifies(*p, RelatedTarget::None, Duration::ZERO, &config) {
                    hits += 1;
                }
            }
            black_box(hits)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_pointer_move, bench_pointer_leave);
criterion_main!(benches);

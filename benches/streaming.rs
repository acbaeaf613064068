use criterion::{criterion_group, criterion_main, Criterion, black_box};

use rand::SeedableRng;
use rand::rngs::StdRng;

use tilestream::streaming::Chunk;
use tilestream::{ChunkGenerator, ChunkStreamer, FixedViewport, StreamerConfig, TileGrid};

fn bench_tick_steady_state(c: &mut Criterion) {
    let mut streamer = ChunkStreamer::seeded(
        StreamerConfig::default(),
        FixedViewport::from_width(20.0),
        12345,
    )
    .expect("valid config");

    // Warm the pool so the loop measures reuse only
    for _ in 0..600 {
        streamer.tick(1.0 / 60.0);
    }

    c.bench_function("tick_60fps_width10", |b| {
        b.iter(|| streamer.tick(black_box(1.0 / 60.0)));
    });
}

fn bench_tick_wide_viewport(c: &mut Criterion) {
    let config = StreamerConfig {
        chunk_width: 4,
        speed: 40.0,
        ..Default::default()
    };
    let mut streamer =
        ChunkStreamer::seeded(config, FixedViewport::from_width(400.0), 7).expect("valid config");

    for _ in 0..600 {
        streamer.tick(1.0 / 60.0);
    }

    c.bench_function("tick_60fps_width4_view400", |b| {
        b.iter(|| streamer.tick(black_box(1.0 / 60.0)));
    });
}

fn bench_generate_chunk(c: &mut Criterion) {
    let generator = ChunkGenerator::new(-5, 0.2);
    let mut rng = StdRng::seed_from_u64(1);

    for width in [10u32, 64, 256] {
        let mut chunk = Chunk::new(width, TileGrid::new());
        generator.generate(&mut chunk, &mut rng);

        c.bench_function(&format!("generate_chunk_{}", width), |b| {
            b.iter(|| generator.generate(black_box(&mut chunk), &mut rng));
        });
    }
}

criterion_group!(
    benches,
    bench_tick_steady_state,
    bench_tick_wide_viewport,
    bench_generate_chunk,
);
criterion_main!(benches);

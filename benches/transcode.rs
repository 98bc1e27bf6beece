use criterion::{BenchmarkGroup, Criterion, Throughput, measurement::WallTime};
use enough::Unstoppable;
use zenrgba::PixelLayout;

const W: usize = 1920;
const H: usize = 1080;

fn source(layout: PixelLayout) -> Vec<u8> {
    let n = W * H * layout.bytes_per_pixel();
    (0..n).map(|i| (i % 251) as u8).collect()
}

// === Scalar disable/enable via archmage ===

#[cfg(feature = "simd")]
fn with_scalar_only(f: impl FnOnce()) {
    let _ = archmage::dangerously_disable_tokens_except_wasm(true);
    f();
    let _ = archmage::dangerously_disable_tokens_except_wasm(false);
}

fn bench_encode_layout(group: &mut BenchmarkGroup<WallTime>, layout: PixelLayout) {
    let src = source(layout);
    let name = format!("{layout:?}");
    group.bench_function(&name, |b| {
        b.iter(|| zenrgba::encode(&src, W as u32, H as u32, 0, layout, Unstoppable).unwrap());
    });

    #[cfg(feature = "simd")]
    with_scalar_only(|| {
        group.bench_function(format!("{name}_scalar"), |b| {
            b.iter(|| zenrgba::encode(&src, W as u32, H as u32, 0, layout, Unstoppable).unwrap());
        });
    });
}

fn bench_decode_layout(group: &mut BenchmarkGroup<WallTime>, file: &[u8], layout: PixelLayout) {
    let name = format!("{layout:?}");
    group.bench_function(&name, |b| {
        b.iter(|| zenrgba::decode(file, layout, 0, Unstoppable).unwrap());
    });

    #[cfg(feature = "simd")]
    with_scalar_only(|| {
        group.bench_function(format!("{name}_scalar"), |b| {
            b.iter(|| zenrgba::decode(file, layout, 0, Unstoppable).unwrap());
        });
    });
}

// === Benchmark groups ===

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_1080p");
    group.throughput(Throughput::Bytes((W * H * 4) as u64));
    for layout in PixelLayout::ALL {
        bench_encode_layout(&mut group, layout);
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let file = zenrgba::encode(
        &source(PixelLayout::Rgba8),
        W as u32,
        H as u32,
        0,
        PixelLayout::Rgba8,
        Unstoppable,
    )
    .unwrap();

    let mut group = c.benchmark_group("decode_1080p");
    group.throughput(Throughput::Bytes((W * H * 4) as u64));
    for layout in PixelLayout::ALL {
        bench_decode_layout(&mut group, &file, layout);
    }
    group.finish();
}

fn bench_decode_aligned(c: &mut Criterion) {
    // 1921 RGB pixels = 5763 bytes per row, so every row gets padding.
    let w = W + 1;
    let src: Vec<u8> = (0..w * H * 4).map(|i| (i % 241) as u8).collect();
    let file =
        zenrgba::encode(&src, w as u32, H as u32, 0, PixelLayout::Rgba8, Unstoppable).unwrap();

    let mut group = c.benchmark_group("decode_aligned_rgb8");
    group.throughput(Throughput::Bytes((w * H * 4) as u64));
    for alignment in [1u32, 16, 64] {
        group.bench_function(format!("align_{alignment}"), |b| {
            b.iter(|| zenrgba::decode(&file, PixelLayout::Rgb8, alignment, Unstoppable).unwrap());
        });
    }
    group.finish();
}

fn main() {
    let mut criterion = Criterion::default().configure_from_args();
    bench_encode(&mut criterion);
    bench_decode(&mut criterion);
    bench_decode_aligned(&mut criterion);
    criterion.final_summary();
}

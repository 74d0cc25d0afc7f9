use criterion::{criterion_group, criterion_main, Criterion};
use imgio_image::{GenericImage, Image};
use imgio_io::{Backend, ColorMode, ImageIo, IoConfig};
use std::hint::black_box;

fn bench_read_jpeg(c: &mut Criterion) {
    let mut group = c.benchmark_group("JpegReader");

    let tmp_dir = tempfile::tempdir().unwrap();
    let img_path = tmp_dir.path().join("bench.jpg");

    let data = (0..1280 * 720 * 3).map(|i| (i % 251) as u8).collect();
    let image: GenericImage = Image::<u8, 3>::new([1280, 720].into(), data)
        .unwrap()
        .into();

    let native = ImageIo::new(IoConfig::default());
    native.imwrite(&image, &img_path, &[], true).unwrap();
    let bytes = std::fs::read(&img_path).unwrap();

    for backend in [Backend::NativeCodec, Backend::FastJpeg] {
        let io = native.with_backend(backend);
        for mode in [ColorMode::Color, ColorMode::Grayscale] {
            group.bench_function(format!("imread_{backend}_{mode}"), |b| {
                b.iter(|| black_box(io.imread(&img_path, mode)).unwrap())
            });
        }
        group.bench_function(format!("imfrombytes_{backend}"), |b| {
            b.iter(|| black_box(io.imfrombytes(&bytes, ColorMode::Color)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_read_jpeg);
criterion_main!(benches);

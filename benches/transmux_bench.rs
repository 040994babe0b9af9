//! dualmono 性能基准测试.
//!
//! 覆盖语法遍历、单声道拆分、立体声复制和 ADTS 切分路径.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dualmono::codec::{AdtsHeader, TransmuxMode, scan_raw_data_block, transmux};
use dualmono::core::BitWriter;
use dualmono::format::split_adts;

/// 写入一个长窗口 SCE, 前 `coded_bands` 个频带使用码本 1 (全零四元组)
fn write_sce(bw: &mut BitWriter, tag: u32, coded_bands: u32) {
    let max_sfb = 30;
    bw.write_bits(0, 3);
    bw.write_bits(tag, 4);
    bw.write_bits(120, 8);
    bw.write_bits(0, 4);
    bw.write_bits(max_sfb, 6);
    bw.write_bit(0);

    bw.write_bits(1, 4);
    bw.write_bits(coded_bands, 5);
    bw.write_bits(0, 4);
    bw.write_bits(max_sfb - coded_bands, 5);

    for _ in 0..coded_bands {
        bw.write_bit(0);
    }
    bw.write_bits(0, 3);
    // 48 kHz 长窗口前 8 个频带各 4 条谱线
    for _ in 0..coded_bands {
        bw.write_bit(0);
    }
}

/// 创建双单声道访问单元
fn make_dual_mono_au() -> Vec<u8> {
    let mut bw = BitWriter::new();
    write_sce(&mut bw, 0, 8);
    write_sce(&mut bw, 1, 8);
    bw.write_bits(7, 3);
    AdtsHeader::default().build_frame(0, &bw.finish()).unwrap()
}

fn bench_scan(c: &mut Criterion) {
    let au = make_dual_mono_au();
    let payload = &au[7..];
    c.bench_function("scan_raw_data_block_dual_sce", |b| {
        b.iter(|| scan_raw_data_block(black_box(payload)).unwrap());
    });
}

fn bench_transmux(c: &mut Criterion) {
    let au = make_dual_mono_au();
    c.bench_function("transmux_mono", |b| {
        b.iter(|| transmux(black_box(&au), TransmuxMode::Mono).unwrap());
    });
    c.bench_function("transmux_stereo", |b| {
        b.iter(|| transmux(black_box(&au), TransmuxMode::Stereo).unwrap());
    });
}

fn bench_split(c: &mut Criterion) {
    let au = make_dual_mono_au();
    let stream: Vec<u8> = au.iter().copied().cycle().take(au.len() * 1000).collect();
    c.bench_function("split_adts_1000_frames", |b| {
        b.iter(|| split_adts(black_box(&stream)).count());
    });
}

criterion_group!(benches, bench_scan, bench_transmux, bench_split);
criterion_main!(benches);

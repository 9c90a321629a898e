//! cephwire - Codec Micro-Benchmark Runner
//!
//! Mengukur latency primitive codec:
//! - Fixed-width encode/decode (u16/u32/u64)
//! - Length-prefixed string encode/decode
//! - Filepath + timestamp records di atas mmap region
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]

use std::time::Instant;

use cephwire::protocol::{
    decode_filepath_safe, decode_string_safe, encode_filepath, encode_string,
    filepath_encoded_len, string_encoded_len, Timespec, TIMESPEC_ENCODED_LEN,
};
use cephwire::{DecodeCursor, EncodeCursor, MappedRegion, WireResult};

/// Runner configuration
struct BenchConfig {
    iterations: usize,
    payload_size: usize,
    region_path: String,
    region_size_mb: usize,
    verbose: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            payload_size: 64,
            region_path: "cephwire_bench.dat".to_string(),
            region_size_mb: 16,
            verbose: false,
        }
    }
}

fn parse_args() -> BenchConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = BenchConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-n" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--payload" | "-p" => {
                if i + 1 < args.len() {
                    config.payload_size = args[i + 1].parse().unwrap_or(64);
                    i += 1;
                }
            }
            "--region" | "-r" => {
                if i + 1 < args.len() {
                    config.region_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--region-size" => {
                if i + 1 < args.len() {
                    config.region_size_mb = args[i + 1].parse().unwrap_or(16);
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("cephwire - Little-Endian Cursor Codec Benchmarks\n");
                println!("Usage: cephwire [OPTIONS]\n");
                println!("Options:");
                println!("  -n, --iterations <N>   Operations per benchmark (default: 1000000)");
                println!("  -p, --payload <BYTES>  String payload size (default: 64)");
                println!("  -r, --region <PATH>    Mapped region file (default: cephwire_bench.dat)");
                println!("      --region-size <MB> Mapped region size in MB (default: 16)");
                println!("  -v, --verbose          Debug logging");
                println!("  -h, --help             Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn main() {
    let config = parse_args();

    tracing_subscriber::fmt()
        .with_max_level(if config.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    println!("🚀 cephwire - Cursor Codec PoC");
    println!("==============================\n");

    benchmark_scalars(&config);
    benchmark_strings(&config);

    if let Err(e) = benchmark_region(&config) {
        tracing::error!(error = %e, "mapped region benchmark failed");
        std::process::exit(1);
    }

    tracing::info!(
        iterations = config.iterations,
        payload_size = config.payload_size,
        "benchmarks complete"
    );
    println!("\n✅ All benchmarks complete!");
}

fn report(label: &str, ops: usize, start: Instant) {
    let elapsed = start.elapsed();
    let ns = elapsed.as_nanos() as f64 / ops as f64;
    println!("  {:<16} {:.2} ns/op ({:.3} μs/op)", label, ns, ns / 1000.0);
    tracing::debug!(label, ops, elapsed_ns = elapsed.as_nanos() as u64, "benchmark finished");
}

fn benchmark_scalars(config: &BenchConfig) {
    println!("📊 Fixed-Width Benchmark (u16 + u32 + u64)");
    println!("------------------------------------------");

    const RECORD: usize = 2 + 4 + 8;
    let mut buf = [0u8; RECORD * 256];

    let start = Instant::now();
    for i in 0..config.iterations {
        let mut enc = EncodeCursor::new(&mut buf);
        while enc.remaining() >= RECORD {
            enc.encode_16(i as u16);
            enc.encode_32(i as u32);
            enc.encode_64(i as u64);
        }
    }
    report("encode batch", config.iterations, start);

    let mut checksum = 0u64;
    let start = Instant::now();
    for _ in 0..config.iterations {
        let mut dec = DecodeCursor::new(&buf);
        while let Ok(v) = dec.decode_16_safe() {
            checksum = checksum.wrapping_add(u64::from(v));
            // RECORD-aligned buffer, sisa field pasti ada
            checksum = checksum.wrapping_add(u64::from(dec.decode_32()));
            checksum = checksum.wrapping_add(dec.decode_64());
        }
    }
    report("decode batch", config.iterations, start);
    tracing::debug!(checksum, "scalar decode checksum");
    println!();
}

fn benchmark_strings(config: &BenchConfig) {
    println!("📊 Length-Prefixed String Benchmark");
    println!("-----------------------------------");

    let payload = vec![b'x'; config.payload_size];
    let mut buf = vec![0u8; string_encoded_len(payload.len())];

    let start = Instant::now();
    for _ in 0..config.iterations {
        let mut enc = EncodeCursor::new(&mut buf);
        encode_string(&mut enc, &payload);
    }
    report("encode_string", config.iterations, start);

    let start = Instant::now();
    let mut total = 0usize;
    for _ in 0..config.iterations {
        let mut dec = DecodeCursor::new(&buf);
        if let Ok(s) = decode_string_safe(&mut dec) {
            total += s.len();
        }
    }
    report("decode_string", config.iterations, start);

    println!("  Payload size: {} bytes", config.payload_size);
    println!(
        "  Decode throughput: {:.2} MB/sec\n",
        total as f64 / start.elapsed().as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_region(config: &BenchConfig) -> std::io::Result<()> {
    println!("📊 Mapped Region Benchmark (filepath + timestamp)");
    println!("-------------------------------------------------");

    let path = "/volumes/ceph/data/object";
    let record = filepath_encoded_len(path.len()) + TIMESPEC_ENCODED_LEN;
    let region_len = config.region_size_mb.max(1) * 1024 * 1024;

    let mut region = MappedRegion::create(&config.region_path, region_len)?;
    let stamp = Timespec::now();

    let start = Instant::now();
    let mut written = 0usize;
    {
        let mut enc = region.encoder();
        while enc.remaining() >= record {
            encode_filepath(&mut enc, written as u64, Some(path));
            enc.encode_timespec(&stamp);
            written += 1;
        }
    }
    report("encode region", written.max(1), start);

    let start = Instant::now();
    let decoded = decode_region(region.decoder(), written);
    report("decode region", written.max(1), start);

    match decoded {
        Ok(count) => println!("  Records: {} in {} KB", count, region_len / 1024),
        Err(e) => tracing::warn!(error = %e, "region decode stopped early"),
    }

    region.flush()?;
    drop(region);
    std::fs::remove_file(&config.region_path).ok();
    Ok(())
}

fn decode_region(mut dec: DecodeCursor<'_>, expected: usize) -> WireResult<usize> {
    let mut count = 0;
    while count < expected {
        let fp = decode_filepath_safe(&mut dec)?;
        let _stamp = dec.decode_timespec_safe()?;
        if fp.ino != count as u64 {
            tracing::warn!(ino = fp.ino, expected = count, "unexpected inode order");
        }
        count += 1;
    }
    Ok(count)
}

//! Sample talk folder generator for trying out and stress testing talkrank.
//!
//! Usage: cargo run --features gen-test --bin gen_talks -- [dir] [people] [max_lines]
//! Example: cargo run --features gen-test --bin gen_talks -- talk_upload 12 50000

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const NICKNAMES: &[&str] = &[
    "山田", "田中", "佐藤", "鈴木", "高橋", "Alice", "Bob", "Carol", "けんじ", "ゆい", "Mr. Smith",
    "さくら🌸", "たろう (会社)",
];

const LINES: &[&str] = &[
    "おはよう！",
    "了解です",
    "今日の予定どうする？",
    "[スタンプ]",
    "[写真]",
    "Sounds good 👍",
    "明日は雨らしいよ",
    "www",
    "ありがとうございます！！",
    "Meeting moved to 15:00",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let dir = args.get(1).map(|s| s.as_str()).unwrap_or("talk_upload");
    let people: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(8);
    let max_lines: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(5_000);

    println!("🧪 Talk Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Folder:    {}", dir);
    println!("   People:    {}", people);
    println!("   Max lines: {}", max_lines);
    println!();

    let dir = Path::new(dir);
    fs::create_dir_all(dir).expect("Failed to create output folder");

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut total_lines = 0;

    for i in 0..people {
        let nickname = match NICKNAMES.get(i) {
            Some(name) => (*name).to_string(),
            None => format!("member{:03}", i),
        };
        let lines = rng.gen_range(0..=max_lines);
        // Every third export is legacy Shift_JIS, like old Windows saves
        let shift_jis = i % 3 == 2;

        let path = dir.join(format!("{}.txt", nickname));
        generate_export(&path, lines, shift_jis, &mut rng);
        total_lines += lines;

        println!(
            "   {:<16} {:>8} lines{}",
            nickname,
            lines,
            if shift_jis { "  (Shift_JIS)" } else { "" }
        );
    }

    // One file nothing can decode, to exercise the skip path
    let broken = dir.join("broken.txt");
    fs::write(&broken, [0x41u8, 0x81, 0x0a, 0x81, 0x0a]).expect("Failed to write broken export");
    println!("   {:<16} {:>8}", "broken", "undecodable");

    println!("\n✅ Done!");
    println!("   Lines: {}", total_lines);
    println!("   Time:  {:.2}s", start.elapsed().as_secs_f64());
}

/// Sample lines an export can hold. Shift_JIS has no emoji, and
/// encoding_rs would write them as HTML numeric entities.
fn sample_lines(shift_jis: bool) -> Vec<&'static str> {
    LINES
        .iter()
        .copied()
        .filter(|text| !shift_jis || !encoding_rs::SHIFT_JIS.encode(text).2)
        .collect()
}

fn generate_export(path: &Path, lines: usize, shift_jis: bool, rng: &mut impl Rng) {
    let file = File::create(path).expect("Failed to create export file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let pool = sample_lines(shift_jis);

    for i in 0..lines {
        let text = pool.choose(rng).unwrap();
        let line = format!("{:02}:{:02}\t{}", (i / 60) % 24, i % 60, text);
        // Mix line endings; the last line sometimes has no terminator
        let ending = match i % 4 {
            0 => "\r\n",
            _ => "\n",
        };
        let ending = if i + 1 == lines && rng.gen_bool(0.5) { "" } else { ending };

        let record = format!("{}{}", line, ending);
        if shift_jis {
            let (bytes, _, had_errors) = encoding_rs::SHIFT_JIS.encode(&record);
            debug_assert!(!had_errors, "sample line not representable in Shift_JIS");
            writer.write_all(&bytes).unwrap();
        } else {
            writer.write_all(record.as_bytes()).unwrap();
        }
    }

    writer.flush().unwrap();
}

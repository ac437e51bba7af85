//! Synthetic transcript generator for stress testing chatlens.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt
//!
//! Besides well-formed messages the output mixes in every kind of line the
//! parser must drop: media placeholders, continuation lines, impossible
//! dates, system notices and blank lines.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use rand::Rng;
use rand::seq::SliceRandom;

const EMOJIS: &[&str] = &["😀", "😂", "😍", "🤔", "😱", "🤯", "💀", "👻", "🤖", "🦄", "🌈", "🔥"];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "Jean-Luc",
    "+44 7700 900123",
    "🔥FireUser🔥",
];

const SYSTEM_NOTICES: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
    "Alice created group \"Weekend plans\"",
    "Bob added Carol",
    "Carol left",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", String::as_str);

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();

    let start = Instant::now();
    let mut bytes_written: usize = 0;
    let mut noise_lines: usize = 0;

    for i in 0..count {
        let line = generate_line(&mut rng, i);
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // Occasionally insert a line the parser has to drop
        if i % 50 == 25 {
            let noise = generate_noise_line(&mut rng, i);
            bytes_written += noise.len();
            noise_lines += 1;
            writer.write_all(noise.as_bytes())?;
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size:  {:.2} MB", mb);
    println!("   Noise: {} lines", noise_lines);
    println!("   Time:  {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

/// A message line; every tenth one is a media placeholder.
fn generate_line(rng: &mut impl Rng, index: usize) -> String {
    let sender = SENDERS.choose(rng).copied().unwrap_or("Alice");
    let stamp = timestamp(index);

    if index % 10 == 9 {
        return format!("{} - {}: <Media omitted>\n", stamp, sender);
    }
    format!("{} - {}: {}\n", stamp, sender, generate_body(rng, index))
}

/// Rotates through the layouts seen in real exports.
fn timestamp(index: usize) -> String {
    let day = (index / 1440) % 28 + 1;
    let month = (index / 40_320) % 12 + 1;
    let hour = (index / 60) % 24;
    let minute = index % 60;

    match index % 4 {
        0 => format!("{:02}/{:02}/23 {:02}:{:02}", day, month, hour, minute),
        1 => format!("{}/{}/2023, {}:{:02}", day, month, hour, minute),
        2 => format!("[{:02}/{:02}/23, {:02}:{:02}:00]", day, month, hour, minute),
        _ => format!(
            "{}/{}/23, {}:{:02} {}",
            day,
            month,
            (hour % 12) + 1,
            minute,
            if hour < 12 { "AM" } else { "PM" }
        ),
    }
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 12 {
        0..=3 => format!("Normal message #{} with some text", index),
        4 => format!("Link https://example.com/{} and www.example.org too", index),
        5 => {
            let emojis: String = (0..rng.gen_range(1..=20))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("Emoji spam: {}", emojis)
        }
        6 => format!("Punctuation!!! (lots) of? it... #{}", index),
        7 => format!("Кириллица: Привет мир! #{}", index),
        8 => format!("日本語: こんにちは #{}", index),
        9 => "Ratio 3:2 with a second colon".to_string(),
        10 => "great news, love it".to_string(),
        _ => "this is awful, so sorry".to_string(),
    }
}

fn generate_noise_line(rng: &mut impl Rng, index: usize) -> String {
    match rng.gen_range(0..5) {
        0 => "and this continues the previous message\n".to_string(),
        1 => format!("31/02/23 10:{:02} - Alice: impossible date\n", index % 60),
        2 => format!(
            "12/05/23 10:{:02} - {}\n",
            index % 60,
            SYSTEM_NOTICES.choose(rng).copied().unwrap_or("Carol left")
        ),
        3 => "\n".to_string(),
        _ => "☠️💀👻 random emoji line 👻💀☠️\n".to_string(),
    }
}

//! Basic cmptk example — cleans a post and prints the text after each step.
//!
//! Usage:
//!   cargo run --example basic
//!   cargo run --example basic -- --text "ISLM coin to the moon!!! 🚀"
//!   cargo run --example basic -- --markers '{ "coin": " <ISLM> " }'
//!
//! Set `RUST_LOG=cmptk=trace` to see the per-step log lines.

use cmptk::{PlaceholderMap, TextCleaner};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // ── Parse simple CLI arguments ───────────────────────────────────────────
    let mut args = std::env::args().skip(1);

    let mut text = "Check out https://islamiccoin.net now!!! 😊 @john #ISLMcoin".to_string();
    let mut markers: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text"    => { if let Some(v) = args.next() { text    = v; } }
            "--markers" => { if let Some(v) = args.next() { markers = Some(v); } }
            "--help"    => {
                println!("Usage: basic [--text TEXT] [--markers JSON]");
                return Ok(());
            }
            _ => {}
        }
    }

    let placeholders = match markers {
        Some(json) => PlaceholderMap::from_json(&json)?,
        None => PlaceholderMap::default(),
    };
    let cleaner = TextCleaner::with_placeholders(placeholders);

    println!("Input  : {:?}", text);
    println!();
    for (step, out) in cleaner.clean_traced(&text) {
        println!("{:>16} : {:?}", step.name(), out);
    }
    println!();
    println!("Output : {:?}", cleaner.clean(&text));
    Ok(())
}

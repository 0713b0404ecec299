//! Basic usage of the strparts API

use strparts_api::{split_text, Chunker, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Fixed-length chunks ===");
    for chunk in split_text("The quick brown fox jumps over the lazy dog", 10)? {
        println!("  {chunk:?}");
    }

    println!("\n=== Delimited, delimiters retained ===");
    let config = Config::builder()
        .max_len(5)
        .delimiter(',')
        .retain_delimiter(true)
        .build()?;
    let output = Chunker::with_config(config).process(",one,two,,three,")?;
    for chunk in &output.chunks {
        println!(
            "  {:>2} {:?} ({:?})",
            chunk.char_offset, chunk.text, chunk.kind
        );
    }
    println!("{} chunks using {}", output.len(), output.metadata.policy);

    Ok(())
}

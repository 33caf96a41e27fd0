//! Block parse benchmark.
//!
//! Reads a block hex dump, then times hex conversion plus block decoding over
//! a fixed number of iterations and prints min/average/max in milliseconds.
//! With `json_path` set, the `getblock` JSON of the same block is timed first.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use block_decode::bench::measure;
use block_decode::block_json::parse_block_json;
use block_decode::config::{load_config, DEFAULT_CONFIG_FILE};
use block_decode::hex_input::{decode_hex, read_hex_file};
use block_decode::segwit::calculate_block_weight;
use block_decode::{display_hash, BlockDecoder};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(Path::new(DEFAULT_CONFIG_FILE))?;
    let decoder = BlockDecoder::with_version(config.protocol_version);

    let hex = read_hex_file(&config.block_path)
        .with_context(|| format!("Failed to open block data {}", config.block_path.display()))?;

    // One untimed pass to report on the block and surface malformed input
    let bytes = decode_hex(&hex).context("Block data is not valid hex")?;
    let (block, consumed) = decoder
        .decode_block_partial(&bytes)
        .context("Failed to decode block")?;
    if consumed != bytes.len() {
        let trailing = bytes.len() - consumed;
        if config.require_exact_length {
            bail!("{trailing} trailing bytes after the last transaction");
        }
        warn!(trailing, "trailing bytes after the last transaction");
    }
    let hash = decoder.block_hash(&bytes)?;
    info!(
        hash = %display_hash(&hash),
        transactions = block.transactions.len(),
        size = bytes.len(),
        weight = calculate_block_weight(&block),
        "decoded block"
    );

    if let Some(json_path) = &config.json_path {
        let json = std::fs::read_to_string(json_path)
            .with_context(|| format!("Failed to open block JSON {}", json_path.display()))?;
        let rpc = parse_block_json(&json).context("Failed to parse block JSON")?;
        if rpc.hash != hash || rpc.transactions.len() != block.transactions.len() {
            warn!(
                json_hash = %display_hash(&rpc.hash),
                json_transactions = rpc.transactions.len(),
                "block JSON describes a different block"
            );
        }

        let measurement = measure(config.iterations, || parse_block_json(&json))?
            .context("No iterations were run")?;
        info!(iterations = measurement.iterations, "parse json");
        println!("{measurement}");
    }

    let measurement = measure(config.iterations, || -> Result<_> {
        let bytes = decode_hex(&hex)?;
        Ok(decoder.decode_block(&bytes)?)
    })?
    .context("No iterations were run")?;

    info!(iterations = measurement.iterations, "parse bytes");
    println!("{measurement}");

    Ok(())
}

use anyhow::{Context, Result};
use serde::Serialize;

use stegowav::container::WavFile;
use stegowav::lsb::capacity_bits;

use super::command::{Cli, InfoArgs};

#[derive(Serialize)]
struct WavSummary {
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
    sample_width_bytes: usize,
    sample_count: usize,
    lsb: u8,
    stride: usize,
    capacity_bits: usize,
    capacity_bytes: usize,
}

pub fn cmd_info(args: &InfoArgs, _cli: &Cli) -> Result<()> {
    let input_bytes =
        std::fs::read(&args.input).with_context(|| format!("reading input WAV {:?}", args.input))?;
    let wav = WavFile::parse(&input_bytes)?;
    let fmt = wav.fmt();
    let sample_count = wav.sample_count();
    let capacity = capacity_bits(sample_count, args.lsb, args.stride);

    let summary = WavSummary {
        channels: fmt.channels,
        sample_rate: fmt.sample_rate,
        bits_per_sample: fmt.bits_per_sample,
        sample_width_bytes: fmt.sample_width(),
        sample_count,
        lsb: args.lsb,
        stride: args.stride,
        capacity_bits: capacity,
        capacity_bytes: capacity / 8,
    };

    print!("{}", serde_yaml_ng::to_string(&summary)?);
    Ok(())
}

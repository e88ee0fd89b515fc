use anyhow::{Context, Result};
use std::io::Write;

use stegowav::container::WavFile;
use stegowav::pipeline::{self, ExtractOptions};

use super::command::{Cli, ExtractArgs};
use super::credentials::CliCredentials;

pub fn cmd_extract(args: &ExtractArgs, cli: &Cli) -> Result<()> {
    let input_bytes =
        std::fs::read(&args.input).with_context(|| format!("reading input WAV {:?}", args.input))?;
    let wav = WavFile::parse(&input_bytes)?;

    let credentials = CliCredentials::new(args.test_password.clone());
    let opts = ExtractOptions {
        lsb: args.lsb,
        stride: args.stride,
        strict: cli.strict,
        credentials: &credentials,
    };

    let recovered = pipeline::extract(&wav, &opts)?;

    std::io::stdout().write_all(&recovered)?;
    log::info!("recovered {} bytes from {:?}", recovered.len(), args.input);
    Ok(())
}

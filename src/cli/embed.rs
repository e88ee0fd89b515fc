use anyhow::{Context, Result, bail};

use stegowav::cipher::{EncTag, HashTag};
use stegowav::container::WavFile;
use stegowav::ecc::EcTag;
use stegowav::pipeline::{self, EmbedOptions};

use super::command::{Cli, EcArg, EmbedArgs, EncArg, HashArg};
use super::credentials::CliCredentials;

pub fn cmd_embed(args: &EmbedArgs, cli: &Cli) -> Result<()> {
    if args.output.exists() && !args.overwrite {
        bail!(
            "output path {:?} already exists; pass --overwrite to replace it",
            args.output
        );
    }

    let message = match (&args.message, &args.message_file) {
        (Some(text), None) => text.clone().into_bytes(),
        (None, Some(path)) => {
            std::fs::read(path).with_context(|| format!("reading message file {path:?}"))?
        }
        _ => bail!("exactly one of --message or --message-file is required"),
    };

    let input_bytes =
        std::fs::read(&args.input).with_context(|| format!("reading input WAV {:?}", args.input))?;
    let mut wav = WavFile::parse(&input_bytes)?;

    let ec_tag = match args.ec {
        EcArg::None => EcTag::None,
        EcArg::Hamming => EcTag::Hamming,
    };
    let enc_tag = match args.enc {
        EncArg::None => EncTag::None,
        EncArg::Aead => EncTag::Aead,
    };
    let hash_tag = match args.hash {
        HashArg::None => HashTag::None,
        HashArg::Pbkdf2 => HashTag::Pbkdf2,
    };

    let credentials = CliCredentials::new(args.test_password.clone());
    let opts = EmbedOptions {
        lsb: args.lsb,
        stride: args.stride,
        ec_tag,
        ec_param: args.redundant_bits,
        enc_tag,
        hash_tag,
        repeat_data: args.fill,
        credentials: &credentials,
    };

    pipeline::embed(&mut wav, &message, &opts)?;

    if cli.strict {
        log::debug!("strict mode: frame header will reject a non-zero reserved field on extract");
    }

    std::fs::write(&args.output, wav.serialize())
        .with_context(|| format!("writing output WAV {:?}", args.output))?;

    log::info!(
        "embedded {} bytes into {:?}",
        message.len(),
        args.output
    );
    Ok(())
}

use std::path::PathBuf;

use clap::{Args, Parser as ClapParser, Subcommand, ValueEnum};

#[derive(Debug, ClapParser)]
#[command(
    name       = env!("CARGO_PKG_NAME"),
    version    = env!("CARGO_PKG_VERSION"),
    author     = env!("CARGO_PKG_AUTHORS"),
    about      = "Hide and recover payloads in the LSBs of a WAV file's PCM samples",
    long_about = None,
)]
pub struct Cli {
    /// Set the log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,

    /// Reject frame headers with a non-zero reserved field.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Choose an operation to perform.
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Hide a payload inside a WAV file's sample LSBs.
    Embed(EmbedArgs),

    /// Recover a payload previously hidden with `embed`.
    Extract(ExtractArgs),

    /// Print a WAV file's format metadata and embedding capacity.
    Info(InfoArgs),
}

#[derive(Debug, Args)]
pub struct EmbedArgs {
    /// Input WAV file to use as carrier.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path for the encoded WAV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Overwrite the output path if it already exists.
    #[arg(long)]
    pub overwrite: bool,

    /// Inline message to hide.
    #[arg(short = 'e', long, conflicts_with = "message_file")]
    pub message: Option<String>,

    /// File whose bytes are hidden (mutually exclusive with --message).
    #[arg(long, value_name = "PATH", conflicts_with = "message")]
    pub message_file: Option<PathBuf>,

    /// Bits of each carrier sample byte used per write.
    #[arg(short, long, default_value_t = 1)]
    pub lsb: u8,

    /// Carrier sample stride (1 = every sample, 4 = every fourth, ...).
    #[arg(long, default_value_t = 1)]
    pub stride: usize,

    /// Error-correction algorithm applied to the encoded payload.
    #[arg(short = 'c', long, value_enum, default_value_t = EcArg::None)]
    pub ec: EcArg,

    /// Hamming redundant-bit parameter (only `4` is supported).
    #[arg(short = 'r', long, default_value_t = 4)]
    pub redundant_bits: u8,

    /// Symmetric cipher applied to the plaintext before encoding.
    #[arg(short = 't', long, value_enum, default_value_t = EncArg::None)]
    pub enc: EncArg,

    /// Key-derivation function used alongside the cipher.
    #[arg(short = 'a', long, value_enum, default_value_t = HashArg::Pbkdf2)]
    pub hash: HashArg,

    /// Repeat the payload to fill the carrier's full capacity.
    #[arg(short = 'f', long)]
    pub fill: bool,

    /// Password for a non-interactive run (also read from STEGOWAV_PASSWORD).
    #[arg(long, env = "STEGOWAV_PASSWORD", hide_env_values = true)]
    pub test_password: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input WAV file carrying a hidden payload.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Bits of each carrier sample byte that were used per write.
    #[arg(short, long, default_value_t = 1)]
    pub lsb: u8,

    /// Carrier sample stride that was used when embedding.
    #[arg(long, default_value_t = 1)]
    pub stride: usize,

    /// Password for a non-interactive run (also read from STEGOWAV_PASSWORD).
    #[arg(long, env = "STEGOWAV_PASSWORD", hide_env_values = true)]
    pub test_password: Option<String>,
}

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Input WAV file to inspect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Report capacity assuming this many LSBs per sample.
    #[arg(short, long, default_value_t = 1)]
    pub lsb: u8,

    /// Report capacity assuming this carrier stride.
    #[arg(long, default_value_t = 1)]
    pub stride: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EcArg {
    None,
    Hamming,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EncArg {
    None,
    Aead,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HashArg {
    None,
    Pbkdf2,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Disable logging output.
    Off,
    /// No output except errors.
    Error,
    /// Show warnings and errors.
    Warn,
    /// Show info, warnings and errors (default).
    Info,
    /// Show debug, info, warnings and errors.
    Debug,
    /// Show all log messages including trace.
    Trace,
}

impl LogLevel {
    /// Convert LogLevel to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Colorized human-readable text.
    Plain,
    /// Structured JSON per log record.
    Json,
}

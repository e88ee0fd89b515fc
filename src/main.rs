use anyhow::Result;
use clap::Parser as ClapParser;

use cli::command::{Cli, Commands, LogFormat};
use cli::embed::cmd_embed;
use cli::extract::cmd_extract;
use cli::info::cmd_info;

mod cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_level = cli.loglevel.to_level_filter();

    let mut env_builder = env_logger::Builder::from_default_env();
    env_builder.filter_level(base_level);
    match cli.log_format {
        LogFormat::Plain => {
            env_builder.format_timestamp_secs();
        }
        LogFormat::Json => {
            env_builder.format(|buf, record| {
                use std::io::Write;
                writeln!(
                    buf,
                    "{{\"ts\":{},\"lvl\":\"{}\",\"msg\":\"{}\"}}",
                    buf.timestamp(),
                    record.level(),
                    record.args()
                )
            });
        }
    }
    env_builder.try_init()?;

    let result = match cli.command {
        Commands::Embed(ref args) => cmd_embed(args, &cli),
        Commands::Extract(ref args) => cmd_extract(args, &cli),
        Commands::Info(ref args) => cmd_info(args, &cli),
    };

    if let Err(ref e) = result {
        log::error!("{e}");
    }
    result
}

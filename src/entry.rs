use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use iprotate::args::ProbeArgs;
use iprotate::config::{apply_config, load_config};
use iprotate::error::AppResult;

use crate::app::run_local;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

fn parse_args() -> AppResult<(ProbeArgs, ArgMatches)> {
    let cmd = ProbeArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    let matches = cmd.get_matches_from(raw_args);
    let args = ProbeArgs::from_arg_matches(&matches)?;

    Ok((args, matches))
}

async fn run_async(args: ProbeArgs) -> AppResult<()> {
    let run = run_local(&args).await?;
    tracing::debug!(
        "Run finished: {} ok, {} failed, last egress IP {}",
        run.summary.success_count,
        run.summary.fail_count,
        run.ips().last().map_or("none", String::as_str)
    );
    Ok(())
}

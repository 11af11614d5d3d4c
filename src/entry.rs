use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{OutputFormat, ProbeArgs};
use crate::config;
use crate::error::AppResult;
use crate::probe::{self, ProbePlan};
use crate::system::{logger, summary_output};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    if let Some(config) = config::load_config(args.config.as_deref())? {
        config::apply_config(&mut args, &matches, &config)?;
    }

    logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

async fn run_async(args: ProbeArgs) -> AppResult<()> {
    let plan = ProbePlan::from_args(&args)?;
    let report = probe::run(&plan).await?;

    match args.output_format {
        OutputFormat::Text => summary_output::print_report(&report),
        OutputFormat::Json => println!("{}", summary_output::report_json(&report)?),
        OutputFormat::Quiet => {}
    }

    if let Some(path) = args.export_json.as_deref() {
        std::fs::write(path, summary_output::report_json(&report)?)?;
    }

    Ok(())
}

fn parse_args() -> AppResult<Option<(ProbeArgs, ArgMatches)>> {
    let mut cmd = ProbeArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = ProbeArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !config::default_config_present()
}

use std::io;

use anyhow::{Context, Result};
use chrono::{Local, NaiveTime};
use clap::Parser;
use fern::colors::{Color, ColoredLevelConfig};
use log::{info, LevelFilter};

mod catalog;
mod clock;
mod console;
mod duration;
mod error;
mod input;
mod interpreter;
mod schedule;
mod timetable;

use catalog::Catalog;
use console::{ConsolePresenter, ConsoleTimetable};
use error::TimeParseError;
use input::PromptReader;
use interpreter::Interpreter;

/// 到着時刻から逆算して出発時刻を求めるための対話型CLIアプリケーション。
///
/// # Examples
/// ```
/// $ cargo run
/// $ cargo run -- --time 12:00 -vv
/// ```
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    #[clap(
        short = 't',
        long = "time",
        help = "Sets the initial time point in the format HH[:MM]",
        parse(try_from_str = parse_anchor_time),
    )]
    time: Option<NaiveTime>,

    #[clap(long = "prompt", help = "Sets the input prompt", default_value = "$ ")]
    prompt: String,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Increases the log level, may be repeated",
        parse(from_occurrences)
    )]
    verbose: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logger(args.verbose).context("Failed to set up logger")?;

    let catalog = Catalog::default();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let mut presenter = ConsoleTimetable::new(&mut out, &mut err);
    presenter.show_usage()?;

    let mut interpreter = Interpreter::new(&catalog, presenter);
    if let Some(time) = args.time {
        info!("Initial time point: {}", time.format("%H:%M"));
        interpreter = interpreter.with_anchor_time(time);
    }

    let mut source = PromptReader::new(io::stdin().lock(), io::stdout(), &args.prompt);
    interpreter.run(&mut source)?;

    Ok(())
}

/// `--time`の値をパースする。
fn parse_anchor_time(s: &str) -> Result<NaiveTime, TimeParseError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    clock::parse_clock_time(&tokens)
}

/// ログの出力先をstderrに設定する。
///
/// 対話中の表示を妨げないように、指定がなければwarn以上だけを出力する。
fn setup_logger(verbose: u64) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} {} {}: {}",
                Local::now().format("%H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()?;

    Ok(())
}

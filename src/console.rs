use std::io::Write;

use anyhow::{Context, Result};

use crate::catalog::CustomDuration;
use crate::clock::format_clock_time;
use crate::schedule::Schedule;

const SEPARATOR: &str = "---------------------";

const USAGE: &str = "\t\tcommands:
[q]uit
[e]xit
[s]how\t\tshow full timetable
[d]elete\tdelete all items
[d]elete n\tdelete n-th item
[t]ime hh[:mm]\tset timepoint
-\t\tshow custom durations
-mm\t\tadd time interval
-hh[:mm]\tadd time interval
-name\t\tadd custom interval
";

/// Consoleに時刻表を表示するためのtrait。
pub trait ConsolePresenter {
    /// スケジュールを表示する。項目がない場合は何も表示しない。
    fn show_schedule(&mut self, schedule: &Schedule) -> Result<()>;

    /// プリセットの時間間隔の一覧を表示する。
    fn show_custom_durations(&mut self, entries: &[CustomDuration]) -> Result<()>;

    /// コマンドの使い方を表示する。
    fn show_usage(&mut self) -> Result<()>;

    /// 補完候補を1行に1つずつ表示する。
    fn show_suggestions(&mut self, suggestions: &[String]) -> Result<()>;

    /// 通知メッセージを表示する。
    fn show_message(&mut self, message: &str) -> Result<()>;

    /// 失敗したコマンドのエラーを表示する。
    fn show_error(&mut self, error: &dyn std::error::Error) -> Result<()>;
}

/// 時刻表をタブ区切りのテキストで表示する。
///
/// エラーは`err`に、それ以外は`out`に書き込む。
pub struct ConsoleTimetable<'a, W: Write, E: Write> {
    out: &'a mut W,
    err: &'a mut E,
}

impl<'a, W: Write, E: Write> ConsoleTimetable<'a, W, E> {
    /// 新しい`ConsoleTimetable`を返す。
    pub fn new(out: &'a mut W, err: &'a mut E) -> Self {
        Self { out, err }
    }
}

impl<'a, W: Write, E: Write> ConsolePresenter for ConsoleTimetable<'a, W, E> {
    fn show_schedule(&mut self, schedule: &Schedule) -> Result<()> {
        if schedule.is_empty() {
            return Ok(());
        }

        for line in &schedule.lines {
            let arrival = line
                .arrival_time
                .map(|time| format!("\t{}", format_clock_time(time)))
                .unwrap_or_default();
            writeln!(
                self.out,
                "{})\t{}{} {}",
                line.index,
                line.duration.format(true),
                arrival,
                line.name
            )
            .with_context(|| format!("Failed to write schedule line: {:?}", line))?;
        }

        writeln!(self.out, "{}", SEPARATOR).context("Failed to write separator")?;
        let footer = match schedule.bounds {
            Some((start, end)) => writeln!(
                self.out,
                "{}-->{}  ({})",
                format_clock_time(start),
                format_clock_time(end),
                schedule.total
            ),
            None => writeln!(self.out, "total\t{}", schedule.total),
        };
        footer.context("Failed to write schedule total")?;

        Ok(())
    }

    fn show_custom_durations(&mut self, entries: &[CustomDuration]) -> Result<()> {
        writeln!(self.out, "custom durations:").context("Failed to write header")?;
        for entry in entries {
            writeln!(self.out, "-{:<20}\t{}", entry.name, entry.description)
                .with_context(|| format!("Failed to write custom duration: {}", entry.name))?;
        }
        Ok(())
    }

    fn show_usage(&mut self) -> Result<()> {
        writeln!(self.out, "{}", USAGE).context("Failed to write usage")
    }

    fn show_suggestions(&mut self, suggestions: &[String]) -> Result<()> {
        for suggestion in suggestions {
            writeln!(self.out, "{}", suggestion)
                .with_context(|| format!("Failed to write suggestion: {}", suggestion))?;
        }
        Ok(())
    }

    fn show_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message).context("Failed to write message")
    }

    fn show_error(&mut self, error: &dyn std::error::Error) -> Result<()> {
        writeln!(self.err, "command failed: {}", error).context("Failed to write error")
    }
}

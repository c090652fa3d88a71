use anyhow::{Context, Result};
use chrono::NaiveTime;
use log::{debug, info};

use crate::catalog::Catalog;
use crate::clock::{format_clock_time, parse_clock_time};
use crate::console::ConsolePresenter;
use crate::duration::Duration;
use crate::error::CommandError;
use crate::input::LineSource;
use crate::schedule::Schedule;
use crate::timetable::Timetable;

/// コマンド実行後にセッションを続けるかどうか。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// 1行のコマンドを解釈して時刻表を操作する。
///
/// # Examples
///
/// ```ignore
/// let catalog = Catalog::default();
/// let mut interpreter = Interpreter::new(&catalog, presenter);
/// interpreter.execute("t 12:00")?;
/// interpreter.execute("-1:20 airport")?;
/// ```
pub struct Interpreter<'a, P: ConsolePresenter> {
    catalog: &'a Catalog,
    timetable: Timetable,
    presenter: P,
}

impl<'a, P: ConsolePresenter> Interpreter<'a, P> {
    /// 空の時刻表で新しい`Interpreter`を返す。
    ///
    /// # Arguments
    ///
    /// * `catalog` - `-name`で呼び出すプリセットの時間間隔
    /// * `presenter` - 結果の表示先
    pub fn new(catalog: &'a Catalog, presenter: P) -> Self {
        Self {
            catalog,
            timetable: Timetable::new(),
            presenter,
        }
    }

    /// 基準時刻を設定した状態にする。
    pub fn with_anchor_time(mut self, time: NaiveTime) -> Self {
        self.timetable.set_anchor_time(time);
        self
    }

    /// 入力が終了するか終了コマンドを受け取るまで、コマンドを読み込んで実行する。
    ///
    /// 失敗したコマンドはエラーを表示して続行する。出力に失敗した場合だけ中断する。
    /// タブで終わる行は実行せずに補完候補を表示する。
    pub fn run<S: LineSource>(&mut self, source: &mut S) -> Result<()> {
        while let Some(line) = source.read().context("Failed to read command")? {
            if let Some(partial) = line.strip_suffix('\t') {
                let suggestions = self.complete(partial);
                self.presenter.show_suggestions(&suggestions)?;
                continue;
            }
            match self.execute(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    info!("Exit requested");
                    return Ok(());
                }
                Err(CommandError::Output(err)) => return Err(err),
                Err(err) => {
                    debug!("Command \"{}\" failed: {:?}", line, err);
                    self.presenter.show_error(&err)?;
                }
            }
        }
        info!("End of input");
        Ok(())
    }

    /// 1行のコマンドを実行する。
    ///
    /// 空行の場合は使い方を表示する。
    pub fn execute(&mut self, line: &str) -> Result<Flow, CommandError> {
        if let Some(rest) = line.strip_prefix('-') {
            self.add_duration(rest)?;
            return Ok(Flow::Continue);
        }

        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            self.presenter.show_usage()?;
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = tokens.collect();
        debug!("Command \"{}\" with arguments {:?}", command, args);

        match command {
            "q" | "e" => return Ok(Flow::Exit),
            "s" => self.show()?,
            "d" => self.delete(&args)?,
            "t" => self.set_time(&args)?,
            _ => return Err(CommandError::UnknownCommand(line.to_string())),
        }
        Ok(Flow::Continue)
    }

    /// 入力途中の行に対する補完候補を返す。`-`で始まる行だけが対象になる。
    pub fn complete(&self, line: &str) -> Vec<String> {
        match line.strip_prefix('-') {
            Some(rest) => self.catalog.complete(rest.trim()),
            None => Vec::new(),
        }
    }

    fn add_duration(&mut self, text: &str) -> Result<(), CommandError> {
        if text.trim().is_empty() {
            self.presenter
                .show_custom_durations(self.catalog.entries())?;
            return Ok(());
        }

        let custom = text
            .split_whitespace()
            .next()
            .and_then(|name| self.catalog.lookup(name));
        if let Some(custom) = custom {
            debug!("Adding custom duration \"{}\"", custom.name);
            self.timetable.add_item(custom.duration, &custom.description);
            return self.show();
        }

        let (duration, description) = Duration::parse(text)?;
        self.timetable.add_item(duration, &description);
        self.show()
    }

    fn delete(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let Some(position) = args.first() else {
            self.timetable.clear();
            self.presenter.show_message("all items deleted")?;
            return Ok(());
        };

        let Ok(position) = position.parse::<usize>() else {
            debug!("Ignoring delete of \"{}\"", position);
            return Ok(());
        };
        let before = self.timetable.len();
        self.timetable.delete_item(position);
        if self.timetable.len() < before {
            self.show()?;
        }
        Ok(())
    }

    fn set_time(&mut self, args: &[&str]) -> Result<(), CommandError> {
        if args.is_empty() {
            return Ok(());
        }
        let time = parse_clock_time(args)?;
        info!("Anchor time set to {}", format_clock_time(time));
        self.timetable.set_anchor_time(time);
        self.show()
    }

    fn show(&mut self) -> Result<(), CommandError> {
        let schedule = Schedule::project(&self.timetable);
        self.presenter.show_schedule(&schedule)?;
        Ok(())
    }
}

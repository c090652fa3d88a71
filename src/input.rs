use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// 1行ずつコマンドを読み込むための入力元。
#[cfg_attr(test, mockall::automock)]
pub trait LineSource {
    /// 次の1行を改行を除いて返す。入力が終了した場合は`None`を返す。
    fn read(&mut self) -> Result<Option<String>>;
}

/// プロンプトを表示して、readerから1行ずつ読み込む。
pub struct PromptReader<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    prompt: String,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    /// 新しい`PromptReader`を返す。
    ///
    /// # Arguments
    ///
    /// * `reader` - コマンドを読み込む入力
    /// * `writer` - プロンプトを書き込む出力
    /// * `prompt` - 行の入力前に表示する文字列
    pub fn new(reader: R, writer: W, prompt: &str) -> Self {
        Self {
            reader,
            writer,
            prompt: prompt.to_string(),
        }
    }
}

impl<R: BufRead, W: Write> LineSource for PromptReader<R, W> {
    fn read(&mut self) -> Result<Option<String>> {
        write!(self.writer, "{}", self.prompt).context("Failed to write prompt")?;
        self.writer.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read line")?;
        if read == 0 {
            return Ok(None);
        }

        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }
}

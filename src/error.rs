use std::num::ParseIntError;

use thiserror::Error;

/// 時間間隔のパースに失敗したことを表すエラー。
#[derive(Debug, Error)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,
    #[error("invalid hours \"{token}\": {source}")]
    InvalidHours {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("duration \"{token}\" is too large")]
    TooLarge { token: String },
}

/// 時刻のパースに失敗したことを表すエラー。
#[derive(Debug, Error)]
#[error("invalid time \"{input}\"")]
pub struct TimeParseError {
    pub input: String,
}

/// 1行のコマンドの実行に失敗したことを表すエラー。
///
/// `Output`以外はユーザーに表示してセッションを継続する。
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Duration(#[from] DurationParseError),
    #[error(transparent)]
    Time(#[from] TimeParseError),
    /// 未知のコマンド。メッセージは入力された行そのもの。
    #[error("{0}")]
    UnknownCommand(String),
    /// 結果の出力に失敗した。
    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

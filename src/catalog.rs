use crate::duration::Duration;

/// 名前で呼び出せるプリセットの時間間隔。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomDuration {
    pub name: String,
    pub duration: Duration,
    pub description: String,
}

impl CustomDuration {
    pub fn new(name: &str, duration: Duration, description: &str) -> Self {
        Self {
            name: name.to_string(),
            duration,
            description: description.to_string(),
        }
    }
}

/// プリセットの時間間隔の一覧。
///
/// 起動時に一度だけ作成し、参照で共有する。実行中に変更はできない。
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CustomDuration>,
}

impl Catalog {
    /// 指定したエントリーで新しい`Catalog`を返す。エントリーの順序は保持される。
    pub fn new(entries: Vec<CustomDuration>) -> Self {
        Self { entries }
    }

    /// 補完候補を返す。
    ///
    /// `prefix`の最初のトークンで前方一致する最初のエントリーだけを`-name`の形で返す。
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let Some(token) = prefix.split_whitespace().next() else {
            return Vec::new();
        };
        self.entries
            .iter()
            .find(|entry| entry.name.starts_with(token))
            .map(|entry| vec![format!("-{}", entry.name)])
            .unwrap_or_default()
    }

    /// 名前が完全に一致するエントリーを返す。
    pub fn lookup(&self, name: &str) -> Option<&CustomDuration> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// 宣言順の全エントリー。
    pub fn entries(&self) -> &[CustomDuration] {
        &self.entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            CustomDuration::new("кунцево", Duration::new(0, 10), "до кунцевской"),
            CustomDuration::new("отрадное", Duration::new(0, 30), "до отрадного"),
            CustomDuration::new("электричка", Duration::new(0, 21), "на электричке"),
        ])
    }
}

use chrono::NaiveTime;
use log::debug;

use crate::duration::Duration;

/// 時刻表の1項目。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimetableItem {
    pub name: String,
    pub duration: Duration,
}

/// 時間間隔の並びと、基準となる時刻。
///
/// 項目は追加順に保持され、0の時間間隔は含まれない。
#[derive(Debug, Default)]
pub struct Timetable {
    items: Vec<TimetableItem>,
    anchor_time: Option<NaiveTime>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 項目を末尾に追加する。
    ///
    /// 0の時間間隔は何もせずに捨てる。
    pub fn add_item(&mut self, duration: Duration, name: &str) {
        if !duration.is_valid() {
            debug!("Dropping zero duration \"{}\"", name);
            return;
        }
        self.items.push(TimetableItem {
            name: name.to_string(),
            duration,
        });
    }

    /// 1始まりの位置の項目を削除する。範囲外の場合は何もしない。
    pub fn delete_item(&mut self, position: usize) {
        if position == 0 || position > self.items.len() {
            debug!(
                "Ignoring delete of item {} out of {}",
                position,
                self.items.len()
            );
            return;
        }
        self.items.remove(position - 1);
    }

    /// 全ての項目を削除する。基準時刻はそのまま残す。
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn set_anchor_time(&mut self, time: NaiveTime) {
        self.anchor_time = Some(time);
    }

    pub fn anchor_time(&self) -> Option<NaiveTime> {
        self.anchor_time
    }

    pub fn items(&self) -> &[TimetableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

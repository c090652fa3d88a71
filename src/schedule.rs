use chrono::NaiveTime;

use crate::clock::subtract_minutes;
use crate::duration::Duration;
use crate::timetable::Timetable;

/// 表示用に計算した時刻表の1行。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectedLine {
    /// 1始まりの位置
    pub index: usize,
    pub duration: Duration,
    /// 基準時刻からこの項目までの合計を引いた時刻。基準時刻が未設定の場合は`None`
    pub arrival_time: Option<NaiveTime>,
    pub name: String,
}

/// 基準時刻から逆算したスケジュール。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub lines: Vec<ProjectedLine>,
    pub total: Duration,
    /// 基準時刻と、全項目の合計を引いた最終的な時刻
    pub bounds: Option<(NaiveTime, NaiveTime)>,
}

impl Schedule {
    /// 時刻表からスケジュールを計算する。時刻表は変更しない。
    ///
    /// 項目を順に積算し、各項目の時刻は基準時刻から積算値を引いたものになる。
    pub fn project(timetable: &Timetable) -> Self {
        let anchor = timetable.anchor_time();
        let mut total = Duration::default();
        let mut lines = Vec::with_capacity(timetable.len());

        for (i, item) in timetable.items().iter().enumerate() {
            total = total.add(&item.duration);
            lines.push(ProjectedLine {
                index: i + 1,
                duration: item.duration,
                arrival_time: anchor.map(|time| subtract_minutes(time, total.total_minutes())),
                name: item.name.clone(),
            });
        }

        let bounds = anchor.map(|time| (time, subtract_minutes(time, total.total_minutes())));

        Self {
            lines,
            total,
            bounds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

//! 毫秒时间戳。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 相对于歌曲开始的绝对时间（毫秒）。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// 从毫秒数创建时间戳。
    #[must_use]
    pub const fn new(milliseconds: u64) -> Self {
        Self(milliseconds)
    }

    /// 毫秒数。
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// 秒数（带小数）。
    #[must_use]
    pub fn seconds(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// 格式化为 `分:秒`，秒向下取整并补齐两位，不含小时。
    ///
    /// 例如 65432ms -> "1:05"。
    #[must_use]
    pub fn formatted(self) -> String {
        let total_seconds = self.0 / 1000;
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        format!("{minutes}:{seconds:02}")
    }

    /// 忽略缺失值后取最小值。
    ///
    /// 没有任何有效值时返回 `None`。
    pub fn min<I>(timestamps: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<Self>>,
    {
        timestamps.into_iter().flatten().min()
    }

    /// 忽略缺失值后取最大值。
    ///
    /// 没有任何有效值时返回 `None`。
    pub fn max<I>(timestamps: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<Self>>,
    {
        timestamps.into_iter().flatten().max()
    }

    /// `self - earlier`，结果不小于 0。
    #[must_use]
    pub const fn saturating_sub(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl From<u64> for Timestamp {
    fn from(milliseconds: u64) -> Self {
        Self(milliseconds)
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// 缺失的时间戳按 0 处理。
pub(crate) fn millis_or_zero(ts: Option<Timestamp>) -> u64 {
    ts.map_or(0, Timestamp::as_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_ignore_missing() {
        let values = [Some(Timestamp::new(300)), None, Some(Timestamp::new(100))];
        assert_eq!(Timestamp::min(values), Some(Timestamp::new(100)));
        assert_eq!(Timestamp::max(values), Some(Timestamp::new(300)));
    }

    #[test]
    fn test_min_max_of_nothing() {
        assert_eq!(Timestamp::min([None, None]), None);
        assert_eq!(Timestamp::max(Vec::new()), None);
    }

    #[test]
    fn test_formatted() {
        assert_eq!(Timestamp::new(0).formatted(), "0:00");
        assert_eq!(Timestamp::new(65_432).formatted(), "1:05");
        assert_eq!(Timestamp::new(59_999).formatted(), "0:59");
        assert_eq!(Timestamp::new(3_600_000).formatted(), "60:00");
    }

    #[test]
    fn test_seconds() {
        assert!((Timestamp::new(1500).seconds() - 1.5).abs() < f64::EPSILON);
    }
}

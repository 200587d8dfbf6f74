//! 歌词格式生成器模块

pub mod alrc_generator;
pub mod lqe_generator;
pub mod lrc_generator;
pub mod lyl_generator;
pub mod lys_generator;
pub mod qrc_generator;
pub mod spl_generator;
pub mod srt_generator;
pub mod yrc_generator;

use crate::LineSyncedLine;

/// QRC/YRC 行头使用的 `(开始时间, 持续时间)`。
///
/// 没有开始时间时返回 `None`；缺少结束时间时持续时间为 0。
pub(crate) fn line_start_and_duration(line: &LineSyncedLine) -> Option<(u64, u64)> {
    let start = line.start?;
    let duration = line.end.map_or(0, |end| end.saturating_sub(start));
    Some((start.as_millis(), duration))
}

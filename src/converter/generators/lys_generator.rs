//! # Lyricify Syllable 格式生成器
//!
//! 每行以属性标记 `[属性]` 开头，音节写作 `文本(绝对开始时间,持续时间)`。

use std::fmt::Write;

use crate::{ConvertError, Line, VoiceAgent, model::timestamp::millis_or_zero};

/// 定义 LYS 格式使用的歌词行属性。
///
/// 属性 = 人声基数（主歌词 3，背景 6）+ 视图偏移（左 1，右 2）。
pub mod lys_properties {
    /// 视图：未设置，人声：主歌词
    pub const MAIN_UNSET: u8 = 3;
    /// 视图：左，人声：主歌词
    pub const MAIN_LEFT: u8 = 4;
    /// 视图：右，人声：主歌词
    pub const MAIN_RIGHT: u8 = 5;
    /// 视图：未设置，人声：背景
    pub const BG_UNSET: u8 = 6;
    /// 视图：左，人声：背景
    pub const BG_LEFT: u8 = 7;
    /// 视图：右，人声：背景
    pub const BG_RIGHT: u8 = 8;
}

/// 根据演唱者计算行属性。
///
/// 背景人声使用背景基数；编号为 2 的演唱者放在右侧，其余（包括没有演唱者）放在左侧。
#[must_use]
pub fn lys_property(voice_agent: Option<&VoiceAgent>) -> u8 {
    let base = if voice_agent.is_some_and(VoiceAgent::is_background) {
        lys_properties::BG_UNSET
    } else {
        lys_properties::MAIN_UNSET
    };
    let side = if voice_agent.is_some_and(VoiceAgent::is_duet) {
        2
    } else {
        1
    };
    base + side
}

/// LYS 生成的主入口函数。
///
/// 调用方应先对逐字行进行音节切分。
pub fn generate_lys(lines: &[Line]) -> Result<String, ConvertError> {
    let mut writer = String::new();

    for line in lines {
        write!(writer, "[{}]", lys_property(line.voice_agent()))?;

        match line {
            Line::SyllableSynced(syl_line) => {
                for syl in &syl_line.syllables {
                    let start_ms = millis_or_zero(syl.start);
                    let duration_ms = millis_or_zero(syl.end).saturating_sub(start_ms);
                    write!(writer, "{}({start_ms},{duration_ms})", syl.text)?;
                }
            }
            Line::LineSynced(line_synced) => {
                let start_ms = millis_or_zero(line_synced.start);
                let duration_ms = millis_or_zero(line_synced.end).saturating_sub(start_ms);
                write!(writer, "{}({start_ms},{duration_ms})", line_synced.text)?;
            }
        }

        writeln!(writer)?;
    }

    Ok(writer.trim().to_string())
}

//! # Salt Player Lyrics (SPL) 格式生成器
//!
//! 逐字行写作 `[开始]文本[结束]文本[结束]...`，相邻音节首尾相接时省略开始标记。
//! 翻译紧跟在主歌词行之后单独成行。

use std::fmt::Write;

use tracing::warn;

use crate::{
    ConvertError, Line, LineAnnotationRole, SyllableSyncedLine, model::timestamp::millis_or_zero,
    utils::format_lrc_time_ms,
};

fn write_syllable_line(writer: &mut String, line: &SyllableSyncedLine) -> std::fmt::Result {
    let mut last_mark_ms: Option<u64> = None;

    for syl in &line.syllables {
        let start_ms = syl.start.map(u64::from);
        if start_ms != last_mark_ms {
            writer.push_str(&format_lrc_time_ms(start_ms.unwrap_or(0)));
        }
        let end_ms = millis_or_zero(syl.end);
        write!(writer, "{}{}", syl.text, format_lrc_time_ms(end_ms))?;
        last_mark_ms = Some(end_ms);
    }

    writeln!(writer)
}

/// SPL 生成的主入口函数。
///
/// 需要行的开始和结束时间都存在才会输出主歌词；无论主歌词是否输出，
/// 该行的第一条翻译都会单独写一行。
pub fn generate_spl(lines: &[Line]) -> Result<String, ConvertError> {
    let mut writer = String::new();

    for line in lines {
        let line_synced = line.to_line_synced();

        match (line_synced.start, line_synced.end) {
            (Some(start), Some(end)) => match line {
                Line::SyllableSynced(syl_line) => write_syllable_line(&mut writer, syl_line)?,
                Line::LineSynced(_) => {
                    writeln!(
                        writer,
                        "{}{}{}",
                        format_lrc_time_ms(start.as_millis()),
                        line_synced.text,
                        format_lrc_time_ms(end.as_millis())
                    )?;
                }
            },
            _ => warn!("[SPL 生成] 跳过时间不完整的行: \"{}\"", line_synced.text),
        }

        if let Some(translation) = line.first_annotation_text(LineAnnotationRole::Translation) {
            writeln!(writer, "{translation}")?;
        }
    }

    Ok(writer.trim().to_string())
}

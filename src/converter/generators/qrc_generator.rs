//! # QRC 格式生成器（Lyricify 规范）
//!
//! 行格式为 `[行开始时间,行持续时间]`，其后每个音节写作 `文本(开始时间,持续时间)`。

use std::fmt::Write;

use tracing::warn;

use super::line_start_and_duration;
use crate::{ConvertError, Line, model::timestamp::millis_or_zero};

/// QRC 生成的主入口函数。
///
/// 调用方应先对逐字行进行音节切分。没有开始时间的行会被跳过。
pub fn generate_qrc(lines: &[Line]) -> Result<String, ConvertError> {
    let mut writer = String::new();

    for line in lines {
        let line_synced = line.to_line_synced();
        let Some((line_start_ms, line_duration_ms)) = line_start_and_duration(&line_synced)
        else {
            warn!("[QRC 生成] 跳过没有开始时间的行: \"{}\"", line_synced.text);
            continue;
        };

        write!(writer, "[{line_start_ms},{line_duration_ms}]")?;

        match line {
            Line::SyllableSynced(syl_line) => {
                for syl in &syl_line.syllables {
                    let start_ms = millis_or_zero(syl.start);
                    let duration_ms = syl.duration_ms().unwrap_or(0);
                    write!(writer, "{}({start_ms},{duration_ms})", syl.text)?;
                }
            }
            Line::LineSynced(_) => {
                write!(
                    writer,
                    "{}({line_start_ms},{line_duration_ms})",
                    line_synced.text
                )?;
            }
        }

        writeln!(writer)?;
    }

    Ok(writer.trim().to_string())
}

//! # Lyricify Lines 格式生成器
//!
//! 每行为 `[开始时间,结束时间]歌词文本`。

use std::fmt::Write;

use tracing::warn;

use crate::{ConvertError, Line, model::timestamp::millis_or_zero};

/// LYL 生成的主入口函数。
///
/// 没有开始时间的行会被跳过；缺少结束时间时写 0。
pub fn generate_lyl(lines: &[Line]) -> Result<String, ConvertError> {
    let mut writer = String::new();

    for line in lines.iter().map(Line::to_line_synced) {
        let Some(start) = line.start else {
            warn!("[Lyricify Lines 生成] 跳过没有开始时间的行: \"{}\"", line.text);
            continue;
        };
        let end_ms = millis_or_zero(line.end);
        writeln!(writer, "[{},{end_ms}]{}", start.as_millis(), line.text)?;
    }

    Ok(writer.trim().to_string())
}

//! # LRC 格式生成器

use std::fmt::Write;

use tracing::warn;

use crate::{ConvertError, Line, LineSyncedLine, utils::format_lrc_time_ms};

/// 从逐行歌词生成 LRC。没有开始时间的行会被跳过。
///
/// 同时用于 LQE 中的翻译和发音区块。
pub fn generate_lrc_from_line_synced(lines: &[LineSyncedLine]) -> Result<String, ConvertError> {
    let mut writer = String::new();

    for line in lines {
        let Some(start) = line.start else {
            warn!("[LRC 生成] 跳过没有开始时间的行: \"{}\"", line.text);
            continue;
        };
        writeln!(writer, "{}{}", format_lrc_time_ms(start.as_millis()), line.text)?;
    }

    Ok(writer.trim().to_string())
}

/// LRC 生成的主入口函数。逐字行会先归约为逐行。
pub fn generate_lrc(lines: &[Line]) -> Result<String, ConvertError> {
    let line_synced: Vec<LineSyncedLine> = lines.iter().map(Line::to_line_synced).collect();
    generate_lrc_from_line_synced(&line_synced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineSyncedLineBuilder, Syllable, SyllableSyncedLine};

    #[test]
    fn test_generate_lrc() {
        let lines = vec![
            Line::from(SyllableSyncedLine::new(vec![
                Syllable::new("Hello", 0, 500),
                Syllable::new(" ", 500, 500),
                Syllable::new("World", 500, 1000),
            ])),
            Line::from(
                LineSyncedLineBuilder::default()
                    .text("第二行")
                    .start(61_234u64)
                    .end(65_000u64)
                    .build()
                    .unwrap(),
            ),
        ];

        insta::assert_snapshot!(generate_lrc(&lines).unwrap(), @r"
        [00:00.000]Hello World
        [01:01.234]第二行
        ");
    }

    #[test]
    fn test_lines_without_start_are_dropped() {
        let lines = vec![
            Line::from(LineSyncedLine::from_text("untimed")),
            Line::from(
                LineSyncedLineBuilder::default()
                    .text("timed")
                    .start(1500u64)
                    .build()
                    .unwrap(),
            ),
        ];
        assert_eq!(generate_lrc(&lines).unwrap(), "[00:01.500]timed");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(generate_lrc(&[]).unwrap(), "");
    }
}

//! # SRT 字幕格式生成器

use std::fmt::Write;

use tracing::warn;

use crate::{ConvertError, Line, VoiceAgent, utils::format_srt_time_ms};

/// SRT 生成的主入口函数。
///
/// 每行都会先归约为逐行歌词，缺少开始或结束时间的行会被跳过，序号只计算实际输出的条目。
/// 背景人声的文本会被括号包裹。
pub fn generate_srt(lines: &[Line]) -> Result<String, ConvertError> {
    let mut writer = String::new();
    let mut index = 1;

    for line in lines.iter().map(Line::to_line_synced) {
        let (Some(start), Some(end)) = (line.start, line.end) else {
            warn!("[SRT 生成] 跳过时间不完整的行: \"{}\"", line.text);
            continue;
        };

        let text = line.text.trim();
        let is_background = line.voice_agent.as_ref().is_some_and(VoiceAgent::is_background);

        writeln!(writer, "{index}")?;
        writeln!(
            writer,
            "{} --> {}",
            format_srt_time_ms(start.as_millis()),
            format_srt_time_ms(end.as_millis())
        )?;
        if is_background {
            writeln!(writer, "({text})")?;
        } else {
            writeln!(writer, "{text}")?;
        }
        writeln!(writer)?;

        index += 1;
    }

    Ok(writer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        LineSyncedLine, LineSyncedLineBuilder, Syllable, SyllableSyncedLine, VoiceAgentType,
    };

    #[test]
    fn test_generate_srt() {
        let lines = vec![
            Line::from(
                LineSyncedLineBuilder::default()
                    .text("line")
                    .start(1000u64)
                    .end(2000u64)
                    .build()
                    .unwrap(),
            ),
            Line::from(LineSyncedLine::from_text("skipped")),
            Line::from(
                SyllableSyncedLine::new(vec![
                    Syllable::new(" ah ", 3_600_000, 3_601_500),
                    Syllable::new("ha", 3_601_500, 3_602_250),
                ])
                .with_voice_agent(VoiceAgent::new(VoiceAgentType::BackgroundVocal, 1)),
            ),
        ];

        insta::assert_snapshot!(generate_srt(&lines).unwrap(), @r"
        1
        00:00:01,000 --> 00:00:02,000
        line

        2
        01:00:00,000 --> 01:00:02,250
        (ah ha)
        ");
    }

    #[test]
    fn test_line_without_end_is_skipped() {
        let lines = vec![Line::from(
            LineSyncedLineBuilder::default()
                .text("open")
                .start(1000u64)
                .build()
                .unwrap(),
        )];
        assert_eq!(generate_srt(&lines).unwrap(), "");
    }
}

//! # 音节切分处理器
//!
//! 将一个音节按文字边界重新切分：每个 CJK 字符单独成为一个音节，
//! 连续的非 CJK 文本保持为一段，并按文本长度比例重新分配时间。

use tracing::trace;

use crate::{ConvertError, Line, Syllable, SyllableSyncedLine, Timestamp, utils::is_cjk_char};

const OPEN_PARENS: [&str; 2] = ["(", "（"];
const CLOSE_PARENS: [&str; 2] = [")", "）"];

fn is_paren(c: char) -> bool {
    matches!(c, '(' | ')' | '（' | '）')
}

/// 计算时间权重时使用的长度，括号不计入。
fn weighted_len(text: &str) -> usize {
    text.chars().filter(|&c| !is_paren(c)).count()
}

fn split_text(text: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    let mut buffer = String::new();

    for c in text.chars() {
        if is_cjk_char(c) && !buffer.is_empty() && !OPEN_PARENS.contains(&buffer.as_str()) {
            segments.push(std::mem::take(&mut buffer));
        }
        buffer.push(c);
    }

    if !buffer.is_empty() {
        match segments.last_mut() {
            Some(previous) if CLOSE_PARENS.contains(&buffer.as_str()) => {
                previous.push_str(&buffer);
            }
            _ => segments.push(buffer),
        }
    }

    segments
}

/// 切分单个音节并重新分配时间。
///
/// 音节必须同时有开始和结束时间，否则返回 [`ConvertError::MissingTimestamp`]。
/// 空文本的音节不产生任何片段。
///
/// 每段的起止时间各自四舍五入，累计位置不取整，
/// 因此最后一段的结束时间可能与原音节相差不超过 1ms。
pub fn split_syllable(syllable: &Syllable) -> Result<Vec<Syllable>, ConvertError> {
    let (Some(start), Some(end)) = (syllable.start, syllable.end) else {
        return Err(ConvertError::missing_timestamp(&syllable.text));
    };

    let segments = split_text(&syllable.text);
    let total_duration = end.saturating_sub(start) as f64;
    let total_len = weighted_len(&syllable.text);
    let base = start.as_millis();

    let mut pos = 0.0_f64;
    let result = segments
        .into_iter()
        .map(|text| {
            let weight = if total_len == 0 {
                1.0
            } else {
                weighted_len(&text) as f64 / total_len as f64
            };
            let part_duration = total_duration * weight;

            let seg_start = base + pos.round() as u64;
            let seg_end = base + (pos + part_duration).round() as u64;
            pos += part_duration;

            trace!("[音节切分] \"{text}\" -> ({seg_start}, {seg_end})");

            Syllable {
                text,
                start: Some(Timestamp::new(seg_start)),
                end: Some(Timestamp::new(seg_end)),
                annotations: syllable.annotations.clone(),
            }
        })
        .collect();

    Ok(result)
}

/// 对所有逐字行执行音节切分，逐行行原样保留。
pub fn segment_lines(lines: &[Line]) -> Result<Vec<Line>, ConvertError> {
    lines
        .iter()
        .map(|line| -> Result<Line, ConvertError> {
            match line {
                Line::SyllableSynced(syl_line) => {
                    let mut syllables = Vec::with_capacity(syl_line.syllables.len());
                    for syllable in &syl_line.syllables {
                        syllables.extend(split_syllable(syllable)?);
                    }
                    Ok(Line::SyllableSynced(SyllableSyncedLine {
                        syllables,
                        voice_agent: syl_line.voice_agent,
                        annotations: syl_line.annotations.clone(),
                    }))
                }
                Line::LineSynced(_) => Ok(line.clone()),
            }
        })
        .collect()
}

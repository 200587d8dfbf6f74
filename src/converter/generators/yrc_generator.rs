//! # YRC 格式生成器
//!
//! 与 QRC 结构相同，但每个单元写作 `(开始时间,持续时间,0)文本`。
//! 另外提供网易云 YRC 的 JSON 头部行（作词、作曲）。

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::line_start_and_duration;
use crate::{ConvertError, Line, model::timestamp::millis_or_zero};

/// YRC 生成的主入口函数。
///
/// 调用方应先对逐字行进行音节切分。没有开始时间的行会被跳过。
pub fn generate_yrc(lines: &[Line]) -> Result<String, ConvertError> {
    let mut writer = String::new();

    for line in lines {
        let line_synced = line.to_line_synced();
        let Some((line_start_ms, line_duration_ms)) = line_start_and_duration(&line_synced)
        else {
            warn!("[YRC 生成] 跳过没有开始时间的行: \"{}\"", line_synced.text);
            continue;
        };

        write!(writer, "[{line_start_ms},{line_duration_ms}]")?;

        match line {
            Line::SyllableSynced(syl_line) => {
                for syl in &syl_line.syllables {
                    let start_ms = millis_or_zero(syl.start);
                    let duration_ms = syl.duration_ms().unwrap_or(0);
                    write!(writer, "({start_ms},{duration_ms},0){}", syl.text)?;
                }
            }
            Line::LineSynced(_) => {
                write!(
                    writer,
                    "({line_start_ms},{line_duration_ms},0){}",
                    line_synced.text
                )?;
            }
        }

        writeln!(writer)?;
    }

    Ok(writer.trim().to_string())
}

/// YRC 头部行中的一段文本。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YrcHeaderContentPart {
    /// 文本
    pub tx: String,
    /// 链接
    #[serde(skip_serializing_if = "Option::is_none")]
    pub li: Option<String>,
    /// 原始链接
    #[serde(skip_serializing_if = "Option::is_none")]
    pub or: Option<String>,
}

impl YrcHeaderContentPart {
    fn text(tx: impl Into<String>) -> Self {
        Self {
            tx: tx.into(),
            li: None,
            or: None,
        }
    }
}

/// YRC 的一个 JSON 头部行，例如 `{"t":0,"c":[{"tx":"作词: "},{"tx":"某人"}]}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YrcHeaderLine {
    /// 时间（毫秒）
    pub t: u64,
    /// 内容
    pub c: Vec<YrcHeaderContentPart>,
}

/// 生成 YRC 头部所需的参数。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YrcHeaderParams {
    /// 作词者
    pub lyricists: Vec<String>,
    /// 作曲者
    pub musicians: Vec<String>,
}

fn header_line(label: &str, names: &[String]) -> Option<YrcHeaderLine> {
    if names.is_empty() {
        return None;
    }

    let mut content = vec![YrcHeaderContentPart::text(label)];
    for (idx, name) in names.iter().enumerate() {
        if idx > 0 {
            content.push(YrcHeaderContentPart::text("/"));
        }
        content.push(YrcHeaderContentPart::text(name.as_str()));
    }

    Some(YrcHeaderLine { t: 0, c: content })
}

/// 构建作词、作曲头部行，名单为空的那一行会被省略。
#[must_use]
pub fn create_yrc_header_lines(params: &YrcHeaderParams) -> Vec<YrcHeaderLine> {
    [
        header_line("作词: ", &params.lyricists),
        header_line("作曲: ", &params.musicians),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// 将头部行序列化为每行一个 JSON 对象的文本。
pub fn to_json_lines(lines: &[YrcHeaderLine]) -> Result<String, ConvertError> {
    let mut writer = String::new();
    for line in lines {
        writeln!(writer, "{}", serde_json::to_string(line)?)?;
    }
    Ok(writer.trim_end().to_string())
}

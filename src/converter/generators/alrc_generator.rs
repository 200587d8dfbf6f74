//! # ALRC 格式生成器
//!
//! ALRC 是一种 JSON 歌词格式。这里建模了完整的文件结构，
//! 生成时只填充时间、文本和逐字信息。

use serde::{Deserialize, Serialize};

use crate::{ConvertError, Line, Timestamp, model::timestamp::millis_or_zero};

/// 歌词元数据。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlrcLyricInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proofread: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

/// 样式的显示位置，序列化为数字。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AlrcStylePosition {
    #[default]
    Undefined,
    Left,
    Center,
    Right,
}

impl From<AlrcStylePosition> for u8 {
    fn from(value: AlrcStylePosition) -> Self {
        match value {
            AlrcStylePosition::Undefined => 0,
            AlrcStylePosition::Left => 1,
            AlrcStylePosition::Center => 2,
            AlrcStylePosition::Right => 3,
        }
    }
}

impl TryFrom<u8> for AlrcStylePosition {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Undefined),
            1 => Ok(Self::Left),
            2 => Ok(Self::Center),
            3 => Ok(Self::Right),
            other => Err(format!("无效的 ALRC 样式位置: {other}")),
        }
    }
}

/// 样式的强调方式，序列化为数字。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AlrcStyleAccent {
    #[default]
    Normal,
    Background,
    Whisper,
    Emphasise,
}

impl From<AlrcStyleAccent> for u8 {
    fn from(value: AlrcStyleAccent) -> Self {
        match value {
            AlrcStyleAccent::Normal => 0,
            AlrcStyleAccent::Background => 1,
            AlrcStyleAccent::Whisper => 2,
            AlrcStyleAccent::Emphasise => 3,
        }
    }
}

impl TryFrom<u8> for AlrcStyleAccent {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Background),
            2 => Ok(Self::Whisper),
            3 => Ok(Self::Emphasise),
            other => Err(format!("无效的 ALRC 样式强调: {other}")),
        }
    }
}

/// 行或单词可引用的样式。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlrcStyle {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<AlrcStylePosition>,
    /// 颜色
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<AlrcStyleAccent>,
    /// 是否隐藏
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlrcHeader {
    pub s: Vec<AlrcStyle>,
}

/// 一行中的一个单词。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlrcWord {
    /// 开始时间（毫秒）
    pub f: u64,
    /// 结束时间（毫秒）
    pub t: u64,
    /// 单词文本
    pub w: String,
    /// 样式 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
    /// 音译
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l: Option<String>,
}

/// 一行歌词。
///
/// 字段顺序决定了序列化顺序，`f` 和 `t` 在缺失时输出 `null`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlrcLine {
    /// 行 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 父行 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    /// 行文本
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx: Option<String>,
    /// 逐字信息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<Vec<AlrcWord>>,
    /// 开始时间（毫秒）
    pub f: Option<u64>,
    /// 结束时间（毫秒）
    pub t: Option<u64>,
    /// 样式 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// 音译
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt: Option<String>,
    /// 翻译
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tr: Option<String>,
}

/// 完整的 ALRC 文件。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlrcFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub li: Option<AlrcLyricInfo>,
    /// 自定义歌曲信息
    pub si: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<AlrcHeader>,
    pub l: Vec<AlrcLine>,
}

impl Default for AlrcFile {
    fn default() -> Self {
        Self {
            li: Some(AlrcLyricInfo::default()),
            si: None,
            h: Some(AlrcHeader::default()),
            l: Vec::new(),
        }
    }
}

fn to_alrc_line(line: &Line) -> AlrcLine {
    match line {
        Line::SyllableSynced(syl_line) => AlrcLine {
            w: Some(
                syl_line
                    .syllables
                    .iter()
                    .map(|syl| AlrcWord {
                        f: millis_or_zero(syl.start),
                        t: millis_or_zero(syl.end),
                        w: syl.text.clone(),
                        ..Default::default()
                    })
                    .collect(),
            ),
            f: Timestamp::min(syl_line.syllables.iter().map(|s| s.start)).map(u64::from),
            t: Timestamp::max(syl_line.syllables.iter().map(|s| s.end)).map(u64::from),
            ..Default::default()
        },
        Line::LineSynced(line) => AlrcLine {
            tx: Some(line.text.clone()),
            f: Some(millis_or_zero(line.start)),
            t: Some(millis_or_zero(line.end)),
            ..Default::default()
        },
    }
}

/// ALRC 生成的主入口函数。
///
/// 没有任何行时返回空字符串，而不是空文档骨架。
pub fn generate_alrc(lines: &[Line]) -> Result<String, ConvertError> {
    if lines.is_empty() {
        return Ok(String::new());
    }

    let file = AlrcFile {
        l: lines.iter().map(to_alrc_line).collect(),
        ..Default::default()
    };

    Ok(serde_json::to_string(&file)?)
}

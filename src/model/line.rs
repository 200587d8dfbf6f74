//! 歌词行模型：音节、演唱者、行注解，以及逐字/逐行两种歌词行。

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;

/// 演唱者的类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VoiceAgentType {
    #[default]
    /// 主唱。
    Vocal,
    /// 背景人声。
    BackgroundVocal,
    /// 未指定或其它类型。
    Other,
}

/// 表示一行歌词的演唱者。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct VoiceAgent {
    /// 演唱者类型
    #[serde(rename = "type")]
    pub agent_type: VoiceAgentType,
    /// 演唱者编号。0 表示未知，演唱者从 1 开始编号，2 视为对唱。
    pub n: u32,
}

impl VoiceAgent {
    /// 创建一个演唱者。
    #[must_use]
    pub const fn new(agent_type: VoiceAgentType, n: u32) -> Self {
        Self { agent_type, n }
    }

    /// 是否为背景人声。
    #[must_use]
    pub fn is_background(&self) -> bool {
        self.agent_type == VoiceAgentType::BackgroundVocal
    }

    /// 是否为对唱的第二位演唱者。
    #[must_use]
    pub const fn is_duet(&self) -> bool {
        self.n == 2
    }
}

/// 行注解的角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineAnnotationRole {
    /// 发音（罗马音等）
    #[serde(rename = "pron")]
    Prononciation,
    /// 翻译
    #[serde(rename = "trans")]
    Translation,
}

/// 音节级注解，目前仅作保留，任何生成器都不会读取。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableAnnotation {
    /// 注解文本
    pub syllable: String,
    /// 注解角色
    pub role: LineAnnotationRole,
}

/// 逐字歌词中的一个音节。
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(default)]
pub struct Syllable {
    /// 音节文本，可以包含空格。
    #[builder(setter(into))]
    pub text: String,
    /// 开始时间
    #[builder(setter(into, strip_option))]
    pub start: Option<Timestamp>,
    /// 结束时间
    #[builder(setter(into, strip_option))]
    pub end: Option<Timestamp>,
    /// 音节级注解
    #[serde(default)]
    pub annotations: Vec<SyllableAnnotation>,
}

impl Syllable {
    /// 创建一个带完整时间的音节。
    pub fn new(text: impl Into<String>, start_ms: u64, end_ms: u64) -> Self {
        Self {
            text: text.into(),
            start: Some(Timestamp::new(start_ms)),
            end: Some(Timestamp::new(end_ms)),
            annotations: Vec::new(),
        }
    }

    /// 时长，开始或结束时间缺失时为 `None`。
    #[must_use]
    pub fn duration_ms(&self) -> Option<u64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        }
    }

    /// 该音节是否参与行边界的计算。
    ///
    /// 只有开始、结束时间都为 0 且文本为空白的填充音节会被排除，缺失的时间视为非 0。
    fn is_meaningful(&self) -> bool {
        let is_zero = |ts: Option<Timestamp>| ts.is_some_and(|t| t.as_millis() == 0);
        !is_zero(self.start) || !is_zero(self.end) || !self.text.trim().is_empty()
    }
}

/// 附加在主歌词行上的辅助文本轨道（翻译或发音）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAnnotation {
    /// 角色
    pub role: LineAnnotationRole,
    /// 注解内容，时间通常留空，提取时继承主行时间。
    pub line: LineSyncedLine,
}

impl LineAnnotation {
    /// 创建一个只有文本的翻译注解。
    pub fn translation(text: impl Into<String>) -> Self {
        Self {
            role: LineAnnotationRole::Translation,
            line: LineSyncedLine::from_text(text),
        }
    }

    /// 创建一个只有文本的发音注解。
    pub fn pronunciation(text: impl Into<String>) -> Self {
        Self {
            role: LineAnnotationRole::Prononciation,
            line: LineSyncedLine::from_text(text),
        }
    }
}

/// 逐行歌词：整行只有一个时间范围。
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(default)]
pub struct LineSyncedLine {
    /// 整行文本
    #[builder(setter(into))]
    pub text: String,
    /// 行开始时间
    #[builder(setter(into, strip_option))]
    pub start: Option<Timestamp>,
    /// 行结束时间
    #[builder(setter(into, strip_option))]
    pub end: Option<Timestamp>,
    /// 演唱者
    #[builder(setter(strip_option))]
    pub voice_agent: Option<VoiceAgent>,
    /// 行注解
    #[serde(default)]
    #[builder(setter(each = "annotation"))]
    pub annotations: Vec<LineAnnotation>,
}

impl LineSyncedLine {
    /// 创建一个只有文本、没有时间的行。
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// 两行的时间范围是否重叠。任一边界缺失时返回 `false`。
    #[must_use]
    pub fn check_overlap(a: &Self, b: &Self) -> bool {
        match (a.start, a.end, b.start, b.end) {
            (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) => {
                a_start < b_end && b_start < a_end
            }
            _ => false,
        }
    }

    /// 提取指定角色的注解。
    ///
    /// 返回的是新构造的行，时间取自本行；注解本身不会被修改。
    #[must_use]
    pub fn extract_annotations(&self, role: LineAnnotationRole) -> Vec<Self> {
        self.annotations
            .iter()
            .filter(|a| a.role == role)
            .map(|a| Self {
                start: self.start,
                end: self.end,
                ..a.line.clone()
            })
            .collect()
    }

    /// 第一个指定角色注解的文本。
    #[must_use]
    pub fn first_annotation_text(&self, role: LineAnnotationRole) -> Option<&str> {
        first_annotation_text(&self.annotations, role)
    }
}

/// 逐字歌词：每个音节都有自己的时间。
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableSyncedLine {
    /// 按开始时间排列的音节
    pub syllables: Vec<Syllable>,
    /// 演唱者
    pub voice_agent: Option<VoiceAgent>,
    /// 行注解
    #[serde(default)]
    pub annotations: Vec<LineAnnotation>,
}

impl SyllableSyncedLine {
    /// 由音节列表创建一行，不含演唱者和注解。
    #[must_use]
    pub const fn new(syllables: Vec<Syllable>) -> Self {
        Self {
            syllables,
            voice_agent: None,
            annotations: Vec::new(),
        }
    }

    /// 设置演唱者。
    #[must_use]
    pub fn with_voice_agent(mut self, voice_agent: VoiceAgent) -> Self {
        self.voice_agent = Some(voice_agent);
        self
    }

    /// 追加一个行注解。
    #[must_use]
    pub fn with_annotation(mut self, annotation: LineAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// 拼接后的整行文本，音节之间不加分隔符。
    #[must_use]
    pub fn text(&self) -> String {
        self.syllables.iter().map(|s| s.text.as_str()).collect()
    }

    /// 转换为逐行歌词。
    ///
    /// 行的开始、结束时间只由有意义的音节推导，纯填充音节不参与计算。
    #[must_use]
    pub fn to_line_synced_line(&self) -> LineSyncedLine {
        let meaningful = || self.syllables.iter().filter(|s| s.is_meaningful());

        LineSyncedLine {
            text: self.text(),
            start: Timestamp::min(meaningful().map(|s| s.start)),
            end: Timestamp::max(meaningful().map(|s| s.end)),
            voice_agent: self.voice_agent,
            annotations: self.annotations.clone(),
        }
    }

    /// 提取指定角色的注解，时间取自本行推导出的行边界。
    #[must_use]
    pub fn extract_annotations(&self, role: LineAnnotationRole) -> Vec<LineSyncedLine> {
        self.to_line_synced_line().extract_annotations(role)
    }
}

/// 一行歌词，逐字或逐行。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Line {
    /// 逐字歌词行
    SyllableSynced(SyllableSyncedLine),
    /// 逐行歌词行
    LineSynced(LineSyncedLine),
}

impl Line {
    /// 演唱者
    #[must_use]
    pub const fn voice_agent(&self) -> Option<&VoiceAgent> {
        match self {
            Self::SyllableSynced(line) => line.voice_agent.as_ref(),
            Self::LineSynced(line) => line.voice_agent.as_ref(),
        }
    }

    /// 行注解
    #[must_use]
    pub fn annotations(&self) -> &[LineAnnotation] {
        match self {
            Self::SyllableSynced(line) => &line.annotations,
            Self::LineSynced(line) => &line.annotations,
        }
    }

    /// 逐行视图。逐字行会被归约，逐行行直接克隆。
    #[must_use]
    pub fn to_line_synced(&self) -> LineSyncedLine {
        match self {
            Self::SyllableSynced(line) => line.to_line_synced_line(),
            Self::LineSynced(line) => line.clone(),
        }
    }

    /// 提取指定角色的注解。
    #[must_use]
    pub fn extract_annotations(&self, role: LineAnnotationRole) -> Vec<LineSyncedLine> {
        match self {
            Self::SyllableSynced(line) => line.extract_annotations(role),
            Self::LineSynced(line) => line.extract_annotations(role),
        }
    }

    /// 第一个指定角色注解的文本。
    #[must_use]
    pub fn first_annotation_text(&self, role: LineAnnotationRole) -> Option<&str> {
        first_annotation_text(self.annotations(), role)
    }
}

impl From<SyllableSyncedLine> for Line {
    fn from(line: SyllableSyncedLine) -> Self {
        Self::SyllableSynced(line)
    }
}

impl From<LineSyncedLine> for Line {
    fn from(line: LineSyncedLine) -> Self {
        Self::LineSynced(line)
    }
}

fn first_annotation_text(annotations: &[LineAnnotation], role: LineAnnotationRole) -> Option<&str> {
    annotations
        .iter()
        .find(|a| a.role == role)
        .map(|a| a.line.text.as_str())
}

/// 将所有行中指定角色的注解按顺序展平为一个逐行歌词列表。
#[must_use]
pub fn extract_line_annotations(lines: &[Line], role: LineAnnotationRole) -> Vec<LineSyncedLine> {
    lines
        .iter()
        .flat_map(|line| line.extract_annotations(role))
        .collect()
}

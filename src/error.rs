use std::fmt;

use thiserror::Error;

use crate::LyricFormat;

/// 定义歌词导出过程中可能发生的各种错误。
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 该格式已登记，但没有可用的生成器。
    #[error("不支持导出为 {0} 格式")]
    UnsupportedFormat(LyricFormat),
    /// 音节缺少开始或结束时间，无法重新分配时间。
    #[error("音节 \"{text}\" 缺少开始或结束时间")]
    MissingTimestamp {
        /// 出错音节的文本
        text: String,
    },
    /// 字符串格式化错误。
    #[error("格式错误: {0}")]
    Format(#[from] fmt::Error),
    /// JSON 序列化错误。
    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),
    /// 配置文件解析错误。
    #[error("解析配置失败: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// 内部逻辑错误或未明确分类的错误。
    #[error("错误: {0}")]
    Internal(String),
}

impl From<ConvertError> for std::io::Error {
    fn from(err: ConvertError) -> Self {
        Self::other(err)
    }
}

impl ConvertError {
    /// 创建一个 `MissingTimestamp` 错误。
    #[must_use]
    pub fn missing_timestamp(text: impl Into<String>) -> Self {
        Self::MissingTimestamp { text: text.into() }
    }
}

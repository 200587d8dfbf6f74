use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::ConvertError;

fn default_pronunciation_language() -> String {
    "romaji".to_string()
}

/// LQE 生成选项
///
/// 默认值生成的区块头与 Lyricify 导出的完全一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct LqeGenerationOptions {
    /// 写入 [lyrics] 区块头的语言代码，`None` 时不写。
    pub main_language: Option<String>,
    /// 写入 [translation] 区块头的语言代码，`None` 时不写。
    pub translation_language: Option<String>,
    /// [pronunciation] 区块头的语言。
    #[serde(default = "default_pronunciation_language")]
    pub pronunciation_language: String,
}

impl Default for LqeGenerationOptions {
    fn default() -> Self {
        Self {
            main_language: None,
            translation_language: None,
            pronunciation_language: default_pronunciation_language(),
        }
    }
}

/// 统一管理所有格式的导出选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// LQE 导出选项
    pub lqe: LqeGenerationOptions,
}

impl ConversionOptions {
    /// 从 TOML 文本加载选项，缺省的字段使用默认值。
    pub fn from_toml_str(s: &str) -> Result<Self, ConvertError> {
        Ok(toml::from_str(s)?)
    }
}

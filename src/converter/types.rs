use std::fmt;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// 枚举：表示已登记的歌词格式。
///
/// 注意文件扩展名并不唯一（例如 `Lrc` 与 `Spl` 都使用 `.lrc`），
/// 不能仅凭扩展名推断格式。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum LyricFormat {
    /// `Lyricify Syllable` 格式。
    Lys,
    /// `Lyricify Lines` 格式。
    Lyl,
    /// `Lyricify Quick Export` 格式。
    Lqe,
    /// 标准 LRC 格式。
    Lrc,
    /// ALRC (JSON) 格式。
    Alrc,
    /// 原始 TTML 格式。
    Ttml,
    /// AMLL 规范的 TTML 格式。
    TtmlAmll,
    /// `Apple Syllable` 格式。
    AppleSyllable,
    /// 网易云音乐 YRC 格式。
    Yrc,
    /// QQ 音乐 QRC 格式（Lyricify 规范）。
    Qrc,
    /// 酷狗 KRC 格式。
    Krc,
    /// `SubRip` 字幕格式。
    Srt,
    /// `Salt Player Lyrics` 格式。
    Spl,
}

impl LyricFormat {
    /// 所有已登记的格式，按登记顺序排列。
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// 格式标识符，例如 `ttml_amll`。
    #[must_use]
    pub fn as_id(self) -> &'static str {
        self.into()
    }

    /// 用于展示的名称。
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Lys => "Lyricify Syllable",
            Self::Lyl => "Lyricify Lines",
            Self::Lqe => "Lyricify Quick Export",
            Self::Lrc => "LRC",
            Self::Alrc => "ALRC",
            Self::Ttml => "TTML (Original)",
            Self::TtmlAmll => "TTML (AMLL Standards)",
            Self::AppleSyllable => "Apple Syllable",
            Self::Yrc => "YRC",
            Self::Qrc => "QRC (Lyricify Standards)",
            Self::Krc => "KRC",
            Self::Srt => "SRT",
            Self::Spl => "Salt Player Lyrics",
        }
    }

    /// 该格式常用的文件扩展名（含点）。
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Lys => &[".lys"],
            Self::Lyl => &[".lyl"],
            Self::Lqe => &[".lqe"],
            Self::Lrc | Self::Spl => &[".lrc"],
            Self::Alrc => &[".alrc"],
            Self::Ttml | Self::TtmlAmll => &[".ttml"],
            Self::AppleSyllable => &[".json", ".as", ".asyl"],
            Self::Yrc => &[".yrc"],
            Self::Qrc => &[".qrc"],
            Self::Krc => &[".krc"],
            Self::Srt => &[".srt"],
        }
    }

    /// 导出前是否需要按文字边界重新切分音节。
    #[must_use]
    pub const fn needs_segmentation(self) -> bool {
        match self {
            Self::Lys | Self::Lqe | Self::Yrc | Self::Qrc | Self::Krc => true,
            Self::Lyl
            | Self::Lrc
            | Self::Alrc
            | Self::Ttml
            | Self::TtmlAmll
            | Self::AppleSyllable
            | Self::Srt
            | Self::Spl => false,
        }
    }
}

impl fmt::Display for LyricFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

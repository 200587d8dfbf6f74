//! 格式导出的统一入口。
//!
//! 根据目标格式决定是否先做音节切分，再交给对应的生成器。

pub mod config;
pub mod generators;
pub mod processors;
pub mod types;

use tracing::debug;

use crate::{
    ConversionOptions, ConvertError, Line, LyricFormat,
    converter::{generators::*, processors::syllable_splitter},
};

/// 该格式是否有可用的生成器。
#[must_use]
pub const fn supports_dump(format: LyricFormat) -> bool {
    !matches!(
        format,
        LyricFormat::Ttml | LyricFormat::TtmlAmll | LyricFormat::AppleSyllable | LyricFormat::Krc
    )
}

/// 使用默认选项导出歌词。
pub fn dump(format: LyricFormat, lines: &[Line]) -> Result<String, ConvertError> {
    dump_with_options(format, lines, &ConversionOptions::default())
}

/// 导出歌词的主入口函数。
///
/// 需要音节切分的格式会先对逐字行进行切分，输入本身不会被修改。
/// 没有生成器的格式返回 [`ConvertError::UnsupportedFormat`]。
pub fn dump_with_options(
    format: LyricFormat,
    lines: &[Line],
    options: &ConversionOptions,
) -> Result<String, ConvertError> {
    if !supports_dump(format) {
        return Err(ConvertError::UnsupportedFormat(format));
    }

    let segmented;
    let lines = if format.needs_segmentation() {
        segmented = syllable_splitter::segment_lines(lines)?;
        segmented.as_slice()
    } else {
        lines
    };

    debug!(
        "[导出] 格式: {}, 行数: {}, 音节切分: {}",
        format.as_id(),
        lines.len(),
        format.needs_segmentation()
    );

    match format {
        LyricFormat::Lys => lys_generator::generate_lys(lines),
        LyricFormat::Lyl => lyl_generator::generate_lyl(lines),
        LyricFormat::Lqe => lqe_generator::generate_lqe(lines, &options.lqe),
        LyricFormat::Lrc => lrc_generator::generate_lrc(lines),
        LyricFormat::Alrc => alrc_generator::generate_alrc(lines),
        LyricFormat::Yrc => yrc_generator::generate_yrc(lines),
        LyricFormat::Qrc => qrc_generator::generate_qrc(lines),
        LyricFormat::Srt => srt_generator::generate_srt(lines),
        LyricFormat::Spl => spl_generator::generate_spl(lines),
        LyricFormat::Ttml | LyricFormat::TtmlAmll | LyricFormat::AppleSyllable | LyricFormat::Krc => {
            Err(ConvertError::UnsupportedFormat(format))
        }
    }
}

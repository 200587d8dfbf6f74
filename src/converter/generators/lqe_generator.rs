//! # Lyricify Quick Export 格式生成器
//!
//! 由一个 LYS 主歌词区块和可选的翻译、发音 LRC 区块组成。

use std::fmt::Write;

use crate::{
    ConvertError, Line, LineAnnotationRole, LqeGenerationOptions,
    converter::generators::{lrc_generator, lys_generator},
    extract_line_annotations,
};

/// 构建区块头中的属性列表，例如 `format@LRC, language@romaji`。
#[must_use]
pub fn create_lqe_part_header(attributes: &[(&str, &str)]) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!("{key}@{value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// LQE 生成的主入口函数。
///
/// 调用方应先对逐字行进行音节切分。没有任何行时返回空字符串。
pub fn generate_lqe(lines: &[Line], options: &LqeGenerationOptions) -> Result<String, ConvertError> {
    if lines.is_empty() {
        return Ok(String::new());
    }

    let mut writer = String::new();

    write_main_lyric_block(&mut writer, lines, options)?;
    write_auxiliary_block(&mut writer, lines, options, &AuxiliaryTrackType::Translation)?;
    write_auxiliary_block(&mut writer, lines, options, &AuxiliaryTrackType::Pronunciation)?;

    Ok(writer.trim().to_string())
}

enum AuxiliaryTrackType {
    Translation,
    Pronunciation,
}

fn write_main_lyric_block(
    writer: &mut String,
    lines: &[Line],
    options: &LqeGenerationOptions,
) -> Result<(), ConvertError> {
    let mut attributes = vec![("format", "Lyricify Syllable")];
    if let Some(lang) = options.main_language.as_deref() {
        attributes.push(("language", lang));
    }

    writeln!(writer, "[lyrics: {}]", create_lqe_part_header(&attributes))?;

    let main_content = lys_generator::generate_lys(lines)?;
    writer.push_str(main_content.trim_end());
    writer.push_str("\n\n");

    Ok(())
}

fn write_auxiliary_block(
    writer: &mut String,
    lines: &[Line],
    options: &LqeGenerationOptions,
    track_type: &AuxiliaryTrackType,
) -> Result<(), ConvertError> {
    let (block_name, role, lang) = match track_type {
        AuxiliaryTrackType::Translation => (
            "translation",
            LineAnnotationRole::Translation,
            options.translation_language.as_deref(),
        ),
        AuxiliaryTrackType::Pronunciation => (
            "pronunciation",
            LineAnnotationRole::Prononciation,
            Some(options.pronunciation_language.as_str()),
        ),
    };

    let auxiliary_lines = extract_line_annotations(lines, role);
    if auxiliary_lines.is_empty() {
        return Ok(());
    }

    let mut attributes = vec![("format", "LRC")];
    if let Some(lang) = lang {
        attributes.push(("language", lang));
    }

    writeln!(writer)?;
    writeln!(writer, "[{block_name}: {}]", create_lqe_part_header(&attributes))?;

    let content = lrc_generator::generate_lrc_from_line_synced(&auxiliary_lines)?;
    writer.push_str(content.trim_end());
    writer.push_str("\n\n");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineAnnotation, LqeGenerationOptionsBuilder, Syllable, SyllableSyncedLine};

    fn sample_lines() -> Vec<Line> {
        vec![
            Line::from(
                SyllableSyncedLine::new(vec![
                    Syllable::new("Hello", 0, 500),
                    Syllable::new(" ", 500, 500),
                    Syllable::new("World", 500, 1000),
                ])
                .with_annotation(LineAnnotation::translation("你好世界"))
                .with_annotation(LineAnnotation::pronunciation("ha-ro")),
            ),
            Line::from(SyllableSyncedLine::new(vec![Syllable::new(
                "Bye", 2000, 2500,
            )])),
        ]
    }

    #[test]
    fn test_create_lqe_part_header() {
        assert_eq!(
            create_lqe_part_header(&[("format", "LRC"), ("language", "romaji")]),
            "format@LRC, language@romaji"
        );
        assert_eq!(create_lqe_part_header(&[]), "");
    }

    #[test]
    fn test_generate_lqe_with_all_blocks() {
        let output = generate_lqe(&sample_lines(), &LqeGenerationOptions::default()).unwrap();

        insta::assert_snapshot!(output, @r"
        [lyrics: format@Lyricify Syllable]
        [4]Hello(0,500) (500,0)World(500,500)
        [4]Bye(2000,500)


        [translation: format@LRC]
        [00:00.000]你好世界


        [pronunciation: format@LRC, language@romaji]
        [00:00.000]ha-ro
        ");
    }

    #[test]
    fn test_generate_lqe_main_block_only() {
        let lines = vec![Line::from(SyllableSyncedLine::new(vec![Syllable::new(
            "Bye", 2000, 2500,
        )]))];
        let output = generate_lqe(&lines, &LqeGenerationOptions::default()).unwrap();
        assert_eq!(output, "[lyrics: format@Lyricify Syllable]\n[4]Bye(2000,500)");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(generate_lqe(&[], &LqeGenerationOptions::default()).unwrap(), "");
    }

    #[test]
    fn test_generate_lqe_with_languages() {
        let options = LqeGenerationOptionsBuilder::default()
            .main_language(Some("en".to_string()))
            .translation_language(Some("zh-CN".to_string()))
            .pronunciation_language("ja-Latn")
            .build()
            .unwrap();
        let output = generate_lqe(&sample_lines(), &options).unwrap();

        assert!(output.starts_with("[lyrics: format@Lyricify Syllable, language@en]\n"));
        assert!(output.contains("[translation: format@LRC, language@zh-CN]\n"));
        assert!(output.contains("[pronunciation: format@LRC, language@ja-Latn]\n"));
    }
}

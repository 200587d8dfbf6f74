use lyrics_exporter::{
    ConversionOptions, ConvertError, Line, LineAnnotation, LineSyncedLineBuilder, LyricFormat,
    Syllable, SyllableSyncedLine, VoiceAgent, VoiceAgentType, dump, dump_with_options,
    supports_dump,
};

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
    let _ = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn hello_world() -> Vec<Line> {
    vec![Line::from(SyllableSyncedLine::new(vec![
        Syllable::new("Hello", 0, 500),
        Syllable::new(" ", 500, 500),
        Syllable::new("World", 500, 1000),
    ]))]
}

fn mixed_song() -> Vec<Line> {
    vec![
        Line::from(
            SyllableSyncedLine::new(vec![
                Syllable::new("我爱你", 1000, 1900),
                Syllable::new("Hi你", 1900, 2200),
            ])
            .with_annotation(LineAnnotation::translation("I love you"))
            .with_annotation(LineAnnotation::pronunciation("wo ai ni")),
        ),
        Line::from(
            SyllableSyncedLine::new(vec![Syllable::new("(ooh)", 2200, 2600)])
                .with_voice_agent(VoiceAgent::new(VoiceAgentType::BackgroundVocal, 2)),
        ),
        Line::from(
            LineSyncedLineBuilder::default()
                .text("line")
                .start(3000u64)
                .end(4000u64)
                .build()
                .unwrap(),
        ),
    ]
}

#[test]
fn test_hello_world_to_lrc_and_lys() {
    init_tracing();
    let lines = hello_world();

    assert_eq!(
        dump(LyricFormat::Lrc, &lines).unwrap(),
        "[00:00.000]Hello World"
    );
    assert_eq!(
        dump(LyricFormat::Lys, &lines).unwrap(),
        "[4]Hello(0,500) (500,0)World(500,500)"
    );
}

#[test]
fn test_line_synced_to_srt() {
    let lines = vec![Line::from(
        LineSyncedLineBuilder::default()
            .text("line")
            .start(1000u64)
            .end(2000u64)
            .build()
            .unwrap(),
    )];

    assert_eq!(
        dump(LyricFormat::Srt, &lines).unwrap(),
        "1\n00:00:01,000 --> 00:00:02,000\nline"
    );
}

#[test]
fn test_empty_input_gives_empty_output() {
    for format in LyricFormat::all().filter(|f| supports_dump(*f)) {
        assert_eq!(dump(format, &[]).unwrap(), "", "格式 {format} 的输出应为空");
    }
}

#[test]
fn test_unsupported_formats_return_error() {
    for format in LyricFormat::all().filter(|f| !supports_dump(*f)) {
        match dump(format, &hello_world()) {
            Err(ConvertError::UnsupportedFormat(f)) => assert_eq!(f, format),
            other => panic!("格式 {format} 应该不支持导出，实际得到 {other:?}"),
        }
    }
}

#[test]
fn test_dump_is_deterministic() {
    let lines = mixed_song();
    for format in LyricFormat::all().filter(|f| supports_dump(*f)) {
        let first = dump(format, &lines).unwrap();
        let second = dump(format, &lines).unwrap();
        assert_eq!(first, second, "格式 {format} 的输出不稳定");
    }
}

#[test]
fn test_cjk_segmentation_in_syllable_formats() {
    init_tracing();
    let lines = mixed_song();

    insta::assert_snapshot!(dump(LyricFormat::Qrc, &lines).unwrap(), @r"
    [1000,1200]我(1000,300)爱(1300,300)你(1600,300)Hi(1900,200)你(2100,100)
    [2200,400](ooh)(2200,400)
    [3000,1000]line(3000,1000)
    ");

    insta::assert_snapshot!(dump(LyricFormat::Yrc, &lines).unwrap(), @r"
    [1000,1200](1000,300,0)我(1300,300,0)爱(1600,300,0)你(1900,200,0)Hi(2100,100,0)你
    [2200,400](2200,400,0)(ooh)
    [3000,1000](3000,1000,0)line
    ");

    insta::assert_snapshot!(dump(LyricFormat::Lys, &lines).unwrap(), @r"
    [4]我(1000,300)爱(1300,300)你(1600,300)Hi(1900,200)你(2100,100)
    [8](ooh)(2200,400)
    [4]line(3000,1000)
    ");
}

#[test]
fn test_line_formats_are_not_segmented() {
    let lines = mixed_song();

    insta::assert_snapshot!(dump(LyricFormat::Lyl, &lines).unwrap(), @r"
    [1000,2200]我爱你Hi你
    [2200,2600](ooh)
    [3000,4000]line
    ");

    insta::assert_snapshot!(dump(LyricFormat::Srt, &lines).unwrap(), @r"
    1
    00:00:01,000 --> 00:00:02,200
    我爱你Hi你

    2
    00:00:02,200 --> 00:00:02,600
    ((ooh))

    3
    00:00:03,000 --> 00:00:04,000
    line
    ");

    insta::assert_snapshot!(dump(LyricFormat::Spl, &lines).unwrap(), @r"
    [00:01.000]我爱你[00:01.900]Hi你[00:02.200]
    I love you
    [00:02.200](ooh)[00:02.600]
    [00:03.000]line[00:04.000]
    ");
}

#[test]
fn test_lqe_with_annotations() {
    let lines = mixed_song();

    insta::assert_snapshot!(dump(LyricFormat::Lqe, &lines).unwrap(), @r"
    [lyrics: format@Lyricify Syllable]
    [4]我(1000,300)爱(1300,300)你(1600,300)Hi(1900,200)你(2100,100)
    [8](ooh)(2200,400)
    [4]line(3000,1000)


    [translation: format@LRC]
    [00:01.000]I love you


    [pronunciation: format@LRC, language@romaji]
    [00:01.000]wo ai ni
    ");
}

#[test]
fn test_lqe_options_from_toml() {
    let options = ConversionOptions::from_toml_str(
        r#"
        [lqe]
        main_language = "zh-CN"
        pronunciation_language = "pinyin"
        "#,
    )
    .unwrap();

    let output = dump_with_options(LyricFormat::Lqe, &mixed_song(), &options).unwrap();
    assert!(output.starts_with("[lyrics: format@Lyricify Syllable, language@zh-CN]\n"));
    assert!(output.contains("\n[translation: format@LRC]\n"));
    assert!(output.contains("\n[pronunciation: format@LRC, language@pinyin]\n"));
}

#[test]
fn test_format_lookup_by_id() {
    let format: LyricFormat = "TTML_AMLL".parse().unwrap();
    assert_eq!(format, LyricFormat::TtmlAmll);
    assert!(!supports_dump(format));
    assert!("unknown".parse::<LyricFormat>().is_err());
}

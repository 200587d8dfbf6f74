//! 通用工具函数。

/// 判断字符是否属于 CJK 表意文字、平假名、片假名或谚文音节。
///
/// 分词时这些字符各自被视为一个独立的显示单元。
#[must_use]
pub fn is_cjk_char(c: char) -> bool {
    matches!(
        u32::from(c),
        0x4E00..=0x9FFF        // 基本汉字
            | 0x3400..=0x4DBF  // 扩展 A
            | 0x20000..=0x2A6DF // 扩展 B
            | 0x2A700..=0x2B73F // 扩展 C
            | 0x2B740..=0x2B81F // 扩展 D
            | 0x2B820..=0x2CEAF // 扩展 E
            | 0x2CEB0..=0x2EBEF // 扩展 F
            | 0x2F800..=0x2FA1F // 兼容表意文字补充
            | 0x3040..=0x309F  // 平假名
            | 0x30A0..=0x30FF  // 片假名
            | 0xAC00..=0xD7AF // 谚文音节
    )
}

/// 字符串中是否含有任意 CJK 字符。
#[must_use]
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk_char)
}

/// 将毫秒格式化为 LRC 时间标签 `[mm:ss.SSS]`。
///
/// 分钟至少两位，超过 99 分钟时不会截断。
#[must_use]
pub fn format_lrc_time_ms(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let milliseconds = ms % 1000;
    format!("[{minutes:02}:{seconds:02}.{milliseconds:03}]")
}

/// 将毫秒格式化为 SRT 时间 `HH:MM:SS,mmm`。
#[must_use]
pub fn format_srt_time_ms(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let millis = ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

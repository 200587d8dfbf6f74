//! 歌词处理器模块

pub mod syllable_splitter;

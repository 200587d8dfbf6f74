//! 歌词数据模型。

pub mod line;
pub mod timestamp;

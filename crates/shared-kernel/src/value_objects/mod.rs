pub mod counts;

pub use counts::{ByteCount, CharCount, LineCount, WordCount};

// crates/core/src/counter.rs
use shell_wc_shared_kernel::{
    ByteCount, CharCount, DomainError, DomainResult, LineCount, WordCount,
};

use crate::options::{Mode, ModeList};

/// Raw length of the content.
#[must_use]
pub fn byte_count(content: &[u8]) -> ByteCount {
    ByteCount::new(content.len())
}

/// Unicode code points after decoding as UTF-8.
pub fn char_count(content: &[u8]) -> DomainResult<CharCount> {
    Ok(CharCount::new(decode(content)?.chars().count()))
}

/// Segments after stripping one trailing separator and splitting on `\n`.
///
/// Splitting an empty sequence yields one empty segment, so the minimum
/// count is 1.
#[must_use]
pub fn line_count(content: &[u8]) -> LineCount {
    let trimmed = content.strip_suffix(b"\n").unwrap_or(content);
    LineCount::new(bytecount::count(trimmed, b'\n') + 1)
}

/// Non-empty tokens per line, split strictly on the space character.
///
/// Literal-space tokenization (rather than general whitespace) is part of
/// the emulated behavior.
pub fn word_count(content: &[u8]) -> DomainResult<WordCount> {
    let text = decode(content)?;
    let mut total = WordCount::zero();
    for line in text.split('\n') {
        total += WordCount::new(line.split(' ').filter(|token| !token.is_empty()).count());
    }
    Ok(total)
}

/// Evaluate the requested modes over one content buffer, in list order.
///
/// Only requested dimensions are computed, so byte-only counting never
/// decodes and cannot fail on non-UTF-8 content.
pub fn count_modes(modes: &ModeList, content: &[u8]) -> DomainResult<Vec<usize>> {
    let mut values = Vec::with_capacity(modes.len());
    for mode in modes.iter() {
        let value = match mode {
            Mode::Lines => line_count(content).value(),
            Mode::Words => word_count(content)?.value(),
            Mode::Chars => char_count(content)?.value(),
            Mode::Bytes => byte_count(content).value(),
        };
        values.push(value);
    }
    Ok(values)
}

fn decode(content: &[u8]) -> DomainResult<&str> {
    std::str::from_utf8(content).map_err(|source| DomainError::InvalidUtf8 { source })
}

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};

use disclosure::{Layout, LayoutVersion, ReferenceYear};

use crate::error::Result;

/// Reads the whole input as UTF-8 text.
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_text(file: Option<&str>) -> Result<String> {
    let bytes = match file {
        Some(path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };
    Ok(String::from_utf8(bytes)?)
}

/// The reference year given on the command line, or the current year.
pub(crate) fn reference_year(year: Option<i32>) -> ReferenceYear {
    let reference_year = year.map_or_else(ReferenceYear::current, ReferenceYear::new);
    tracing::debug!(year = reference_year.year(), "resolving two-digit years");
    reference_year
}

pub(crate) fn layout(version: u8) -> Result<&'static Layout> {
    Ok(Layout::for_version(LayoutVersion::try_from(version)?))
}

/// Format bytes as a hexadecimal dump
///
/// 16 bytes per line: offset, hex bytes in two groups of eight, then the
/// printable ASCII characters (`.` for anything else).
pub(crate) fn format_hex_dump(data: &[u8]) -> String {
    const BYTES_PER_LINE: usize = 16;
    let mut output = String::new();

    for (line, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        let _ = write!(output, "{:08x}  ", line * BYTES_PER_LINE);

        for i in 0..BYTES_PER_LINE {
            match chunk.get(i) {
                Some(byte) => {
                    let _ = write!(output, "{byte:02x} ");
                }
                None => output.push_str("   "),
            }
            if i == 7 {
                output.push(' ');
            }
        }

        let ascii: String = chunk
            .iter()
            .map(|b| if b.is_ascii_graphic() || *b == b' ' { *b as char } else { '.' })
            .collect();
        let _ = writeln!(output, " |{ascii}|");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hex_dump() {
        let dump = format_hex_dump(b"USAUSAP<12345678\0F");
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(2, lines.len());
        assert!(lines[0].starts_with("00000000  55 53 41 55 53 41 50 3c  31 32"));
        assert!(lines[0].ends_with("|USAUSAP<12345678|"));
        assert!(lines[1].starts_with("00000010  00 46 "));
        assert!(lines[1].ends_with("|.F|"));
    }
}

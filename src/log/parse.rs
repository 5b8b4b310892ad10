use crate::error::ProfileError;
use crate::log::record::{Profile, Record};

use flate2::read::GzDecoder;
use regex::Regex;
use std::fs::File;
use std::io::Read;

/// Parse a gzip-compressed activity log into a deduplicated profile.
///
/// Relevant lines have the form:
///
/// 12.50ms\tCompileSwift normal x86_64 /path/to/Foo.swift
///
/// i.e. a floating-point millisecond duration anchored at the start of the
/// line, a tab, and a free-form description (which may itself contain tabs).
/// Lines without the anchored duration prefix (headers, blanks, tool chatter)
/// are skipped. The whole file is decompressed and scanned before any record
/// is returned; on error no partial profile is produced.
pub fn read_activity_log(path: &str) -> Result<Profile, ProfileError> {
    let file = File::open(path)?;

    let mut decoder = GzDecoder::new(file);
    let mut bytes = Vec::new();
    decoder
        .read_to_end(&mut bytes)
        .map_err(ProfileError::Decompression)?;

    let text = String::from_utf8(bytes)?;
    extract_records(&text)
}

/// Extract the record set from decompressed log text.
fn extract_records(text: &str) -> Result<Profile, ProfileError> {
    // Anchored duration prefix: digits, a dot, digits, then the "ms" suffix.
    const DURATION_PREFIX_RE: &str = r"^\d+\.\d+ms";
    let re = Regex::new(DURATION_PREFIX_RE)?;

    let mut profile = Profile::new();

    // Split on '\n' only. A trailing '\r' on CRLF input stays in the last
    // field; the log format is LF-separated and this parser preserves that.
    for (lineno, line) in text.split('\n').enumerate() {
        let lno = lineno + 1;

        if !re.is_match(line) {
            continue;
        }

        // A matching line without a tab cannot be split into duration and
        // description; that is a corrupt record, fatal for the whole run.
        let Some((duration_part, description)) = line.split_once('\t') else {
            return Err(malformed(lno, line));
        };

        let duration_ms: f64 = duration_part
            .trim()
            .trim_end_matches("ms")
            .trim()
            .parse()
            .map_err(|_| malformed(lno, line))?;

        profile.insert(Record {
            duration_ms,
            description: description.to_string(),
        });
    }

    Ok(profile)
}

fn malformed(line_no: usize, line: &str) -> ProfileError {
    ProfileError::MalformedRecord {
        line_no,
        line: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    /// Gzip-compress `bytes` and write them to a temp file.
    fn gz_fixture(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(bytes).unwrap();
        let compressed = encoder.finish().unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&compressed).unwrap();
        file.flush().unwrap();
        file
    }

    fn read_fixture(text: &str) -> Result<Profile, ProfileError> {
        let file = gz_fixture(text.as_bytes());
        read_activity_log(file.path().to_str().unwrap())
    }

    #[test]
    fn parses_well_formed_line() {
        let profile = read_fixture("12.50ms\tCompile Foo.swift\n").unwrap();
        let records: Vec<_> = profile.into_iter().collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].duration_ms, 12.5);
        assert_eq!(records[0].description, "Compile Foo.swift");
    }

    #[test]
    fn identical_lines_dedup_to_one_record() {
        let profile =
            read_fixture("12.50ms\tCompile Foo.swift\n12.50ms\tCompile Foo.swift\n").unwrap();
        assert_eq!(profile.len(), 1);
    }

    #[test]
    fn non_matching_lines_yield_empty_profile() {
        let text = "Build started\n\n  indented\nms without digits\n3ms\tno dot\n";
        let profile = read_fixture(text).unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn description_keeps_tabs_after_first_separator() {
        let profile = read_fixture("3.00ms\tLink\tBar\tBaz\n").unwrap();
        let record = profile.into_iter().next().unwrap();
        assert_eq!(record.description, "Link\tBar\tBaz");
    }

    #[test]
    fn trailing_cr_stays_in_description() {
        let profile = read_fixture("3.00ms\tLink Bar\r\n").unwrap();
        let record = profile.into_iter().next().unwrap();
        assert_eq!(record.description, "Link Bar\r");
    }

    #[test]
    fn tab_less_matching_line_is_fatal() {
        let err = read_fixture("1.00ms\tok\n3.00ms\n").unwrap_err();
        match err {
            ProfileError::MalformedRecord { line_no, line } => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "3.00ms");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_activity_log("/no/such/file.xcactivitylog").unwrap_err();
        assert!(matches!(err, ProfileError::Io(_)));
    }

    #[test]
    fn plain_text_file_is_decompression_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"12.50ms\tCompile Foo.swift\n").unwrap();
        file.flush().unwrap();

        let err = read_activity_log(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ProfileError::Decompression(_)));
    }

    #[test]
    fn non_utf8_payload_is_encoding_error() {
        let file = gz_fixture(&[0xff, 0xfe, 0xfd]);
        let err = read_activity_log(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ProfileError::Encoding(_)));
    }
}

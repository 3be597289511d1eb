//! Decoding and parsing of the supported devices CSV
//!
//! The published list is UTF-16 with a byte-order mark and one header row.
//! Columns are `Retail Branding,Marketing Name,Device,Model`; fields are not
//! quoted, so a brand containing a comma splits into an extra column.

use devicename_types::{Device, Error, Result};
use tracing::{debug, trace};

/// Rows read from a CSV document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCsv {
    /// Accepted rows in document order
    pub devices: Vec<Device>,
    /// Rows with an unexpected number of fields
    pub skipped: usize,
}

/// Decode raw CSV bytes to text
///
/// UTF-16 is detected from its byte-order mark, or from a zero byte in the
/// first code unit when the mark is missing. Anything else is read as UTF-8.
pub fn decode(bytes: &[u8]) -> Result<String> {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        [0xEF, 0xBB, 0xBF, rest @ ..] => decode_utf8(rest),
        [_, 0, ..] => decode_utf16(bytes, u16::from_le_bytes),
        [0, _, ..] => decode_utf16(bytes, u16::from_be_bytes),
        _ => decode_utf8(bytes),
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| Error::parse(format!("Invalid UTF-8: {}", e)))
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::parse("UTF-16 input has an odd number of bytes"));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| Error::parse(format!("Invalid UTF-16: {}", e)))
}

/// Parse decoded CSV text, skipping the header row
///
/// Rows with four fields map directly. Rows with five fields carry a brand
/// that contained a comma; its two halves are joined without the comma, so
/// `HTC, Inc.` becomes `HTC Inc.`. Blank lines are ignored and any other
/// shape is counted in [`ParsedCsv::skipped`].
pub fn parse(text: &str) -> ParsedCsv {
    let mut parsed = ParsedCsv::default();

    for (number, line) in text.lines().enumerate().skip(1) {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        let device = match fields.as_slice() {
            [manufacturer, name, codename, model] => {
                Device::new(Some(*manufacturer), *name, *codename, *model)
            }
            [brand, suffix, name, codename, model] => {
                let manufacturer = format!("{}{}", brand, suffix);
                Device::new(Some(manufacturer.as_str()), *name, *codename, *model)
            }
            _ => {
                trace!("Skipping line {} with {} fields", number + 1, fields.len());
                parsed.skipped += 1;
                continue;
            }
        };
        parsed.devices.push(device);
    }

    debug!(
        "Parsed {} devices, skipped {} rows",
        parsed.devices.len(),
        parsed.skipped
    );
    parsed
}

/// Decode and parse in one step
pub fn parse_bytes(bytes: &[u8]) -> Result<ParsedCsv> {
    Ok(parse(&decode(bytes)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    const SAMPLE: &str = "Retail Branding,Marketing Name,Device,Model\n\
        Samsung,Galaxy S6 Edge,zerolte,SM-G925I\n\
        HTC, Inc.,HTC One,m7,HTC One\n\
        broken,row\n\
        \n\
        ,Nameless,solo,S1\r\n";

    fn utf16(text: &str, bom: bool, big_endian: bool) -> Vec<u8> {
        let mut bytes = Vec::new();
        let units = (bom.then_some(0xFEFF_u16)).into_iter().chain(text.encode_utf16());
        for unit in units {
            let pair = if big_endian {
                unit.to_be_bytes()
            } else {
                unit.to_le_bytes()
            };
            bytes.extend_from_slice(&pair);
        }
        bytes
    }

    #[test]
    fn test_parse_rows() {
        let parsed = parse(SAMPLE);
        assert_eq!(parsed.skipped, 1);
        assert_eq!(
            parsed.devices,
            vec![
                Device::new(Some("Samsung"), "Galaxy S6 Edge", "zerolte", "SM-G925I"),
                Device::new(Some("HTC Inc."), "HTC One", "m7", "HTC One"),
                Device::new(None, "Nameless", "solo", "S1"),
            ]
        );
    }

    #[test]
    fn test_header_only() {
        assert_eq!(parse("Retail Branding,Marketing Name,Device,Model"), ParsedCsv::default());
        assert_eq!(parse(""), ParsedCsv::default());
    }

    #[rstest]
    #[case(true, false)]
    #[case(true, true)]
    #[case(false, false)]
    #[case(false, true)]
    fn test_decode_utf16(#[case] bom: bool, #[case] big_endian: bool) {
        let bytes = utf16(SAMPLE, bom, big_endian);
        assert_eq!(decode(&bytes).unwrap(), SAMPLE);
    }

    #[test]
    fn test_decode_utf8_with_and_without_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(SAMPLE.as_bytes());
        assert_eq!(decode(&bytes).unwrap(), SAMPLE);
        assert_eq!(decode(SAMPLE.as_bytes()).unwrap(), SAMPLE);
    }

    #[test]
    fn test_decode_rejects_truncated_utf16() {
        let mut bytes = utf16(SAMPLE, true, false);
        bytes.pop();
        assert!(matches!(decode(&bytes).unwrap_err(), Error::Parse { .. }));
    }

    #[test]
    fn test_parse_bytes_utf16() {
        let parsed = parse_bytes(&utf16(SAMPLE, true, false)).unwrap();
        assert_eq!(parsed.devices.len(), 3);
    }

    proptest! {
        #[test]
        fn test_four_field_rows_roundtrip(
            manufacturer in "[A-Za-z][A-Za-z .]{0,10}",
            name in "[A-Za-z0-9 ]{1,12}",
            codename in "[a-z0-9_]{1,10}",
            model in "[A-Z0-9-]{1,10}",
        ) {
            let text = format!("header\n{},{},{},{}\n", manufacturer, name, codename, model);
            let parsed = parse(&text);
            prop_assert_eq!(parsed.skipped, 0);
            prop_assert_eq!(
                parsed.devices,
                vec![Device::new(Some(manufacturer.as_str()), name, codename, model)]
            );
        }
    }
}

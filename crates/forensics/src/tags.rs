//! Embedded tag decoding.
//!
//! Turns the tag directory of a stored image into a flat mapping from tag
//! name to decoded description string. Tags that do not decode to a
//! non-empty description are omitted entirely; a missing key means a missing
//! tag, never a null value.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{In, Reader};

use crate::error::ForensicsError;

/// Decodes embedded tags from the image at `path`.
///
/// Images without an embedded tag directory yield an empty map rather than
/// an error; only malformed tag data is reported as a failure.
pub fn decode(path: &Path) -> Result<BTreeMap<String, String>, ForensicsError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(&file);

    let parsed = match Reader::new().read_from_container(&mut reader) {
        Ok(parsed) => parsed,
        Err(exif::Error::NotFound(_)) => return Ok(BTreeMap::new()),
        Err(err) => return Err(ForensicsError::Exif(err.to_string())),
    };

    let mut tags = BTreeMap::new();
    for field in parsed.fields() {
        if field.ifd_num != In::PRIMARY {
            continue;
        }
        let description = field.display_value().to_string();
        if description.is_empty() {
            continue;
        }
        tags.insert(field.tag.to_string(), description);
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let result = decode(Path::new("/nonexistent/receipt.jpg"));
        assert!(matches!(result, Err(ForensicsError::Io(_))));
    }

    #[test]
    fn file_without_tags_yields_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.jpg");
        let buffer = image::RgbImage::from_pixel(8, 8, image::Rgb([128, 128, 128]));
        buffer.save(&path).unwrap();

        let tags = decode(&path).unwrap();
        assert!(tags.is_empty());
    }
}

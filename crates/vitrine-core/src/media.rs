//! Media host references
//!
//! Uploaded media lives on an external host; entities store only the
//! `{file, fileId, thumbnail}` triple it hands back. The host itself is an
//! opaque collaborator, so this is the whole interface.

use serde::{Deserialize, Serialize};

/// Reference to a file on the external media host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
	/// Public URL of the file
	#[serde(default)]
	pub file: String,

	/// Host-assigned identifier, used for later deletion/replacement
	#[serde(default, rename = "fileId")]
	pub file_id: String,

	/// Public URL of the host-generated thumbnail
	#[serde(default)]
	pub thumbnail: String,
}

impl MediaRef {
	/// A reference with all three fields set.
	pub fn new(
		file: impl Into<String>,
		file_id: impl Into<String>,
		thumbnail: impl Into<String>,
	) -> Self {
		Self {
			file: file.into(),
			file_id: file_id.into(),
			thumbnail: thumbnail.into(),
		}
	}

	/// Whether this is the "no media yet" placeholder.
	pub fn is_empty(&self) -> bool {
		self.file.is_empty() && self.file_id.is_empty() && self.thumbnail.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_is_empty() {
		assert!(MediaRef::default().is_empty());
		assert!(!MediaRef::new("/img/a.webp", "f_1", "/img/a_t.webp").is_empty());
	}

	#[test]
	fn test_wire_field_names() {
		let media = MediaRef::new("/img/a.webp", "f_1", "/img/a_t.webp");
		let value = serde_json::to_value(&media).unwrap();

		assert_eq!(value["file"], "/img/a.webp");
		assert_eq!(value["fileId"], "f_1");
		assert_eq!(value["thumbnail"], "/img/a_t.webp");
	}

	#[test]
	fn test_partial_json_fills_defaults() {
		let media: MediaRef = serde_json::from_str(r#"{"file": "/img/b.webp"}"#).unwrap();
		assert_eq!(media.file, "/img/b.webp");
		assert!(media.file_id.is_empty());
	}
}

use std::fmt;

#[derive(Debug)]
pub enum CameraError {
	/// Reading or writing a settings file failed.
	Io(std::io::Error),
	/// A settings file was not valid TOML for `CameraSettings`.
	SettingsParse(String),
	/// Settings parsed but describe a camera that can't be built.
	InvalidSettings(String),
	/// The cursor device refused to move the pointer.
	Cursor(String),
}

impl fmt::Display for CameraError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Io(e) => write!(f, "I/O error: {}", e),
			Self::SettingsParse(msg) => write!(f, "settings parse error: {}", msg),
			Self::InvalidSettings(msg) => write!(f, "invalid settings: {}", msg),
			Self::Cursor(msg) => write!(f, "cursor error: {}", msg),
		}
	}
}

impl std::error::Error for CameraError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for CameraError {
	fn from(e: std::io::Error) -> Self {
		Self::Io(e)
	}
}

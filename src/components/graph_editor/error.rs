//! Startup failures. Once the editor is attached nothing in it fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
	/// No global `window`, e.g. not running in a browser.
	#[error("no browser window available")]
	NoWindow,

	/// `getContext("2d")` failed or returned nothing.
	#[error("2d canvas context unavailable")]
	ContextUnavailable,

	/// The host lacks a builtin the editor relies on.
	#[error("unsupported browser: missing {0}")]
	Unsupported(&'static str),
}

impl EditorError {
	/// Text shown to the user in the blocking notice.
	pub fn notice(&self) -> String {
		match self {
			Self::Unsupported(_) => "Use something other than Internet Explorer. Edge works, as do \
				Blink/WebKit or Gecko based browsers."
				.into(),
			other => format!("The graph editor could not start: {other}"),
		}
	}
}

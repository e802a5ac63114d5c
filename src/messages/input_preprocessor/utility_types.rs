use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
	#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
	#[repr(transparent)]
	pub struct ModifierKeys: u8 {
		const SHIFT              = 0b0000_0001;
		const ALT                = 0b0000_0010;
		const CONTROL            = 0b0000_0100;
		const META_OR_COMMAND    = 0b0000_1000;
	}
}

impl ModifierKeys {
	/// True when the platform's zoom chord modifier (Ctrl, or Cmd on Mac) is held.
	pub fn zoom_chord(self) -> bool {
		self.intersects(ModifierKeys::CONTROL | ModifierKeys::META_OR_COMMAND)
	}
}

/// Position and extent of the hosting panel in client space, plus the device pixel
/// ratio its rulers draw at. Reported by the host on mount and on every resize.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
	pub device_pixel_ratio: f64,
}

impl Default for ViewportBounds {
	fn default() -> Self {
		Self {
			left: 0.,
			top: 0.,
			width: 0.,
			height: 0.,
			device_pixel_ratio: 1.,
		}
	}
}

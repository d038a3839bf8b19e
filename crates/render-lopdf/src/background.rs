//! Background images as PDF image XObjects.

use crate::error::RenderError;
use image::{ColorType, ImageFormat};
use lopdf::{Stream, dictionary};

/// A decoded image ready to be placed on a page.
#[derive(Debug, Clone)]
pub struct ImageXObject {
    pub width: u32,
    pub height: u32,
    stream: Stream,
}

impl ImageXObject {
    /// Decodes `bytes` (JPEG or PNG).
    ///
    /// Baseline RGB and greyscale JPEGs are embedded as-is with `DCTDecode`.
    /// Everything else is converted to 8-bit RGB and deflated.
    pub fn decode(bytes: &[u8]) -> Result<Self, RenderError> {
        let format = image::guess_format(bytes)?;
        let decoded = image::load_from_memory_with_format(bytes, format)?;
        let (width, height) = (decoded.width(), decoded.height());
        if width == 0 || height == 0 {
            return Err(RenderError::Image("image has no pixels".to_string()));
        }

        let passthrough = match (format, decoded.color()) {
            (ImageFormat::Jpeg, ColorType::Rgb8) => Some("DeviceRGB"),
            (ImageFormat::Jpeg, ColorType::L8) => Some("DeviceGray"),
            _ => None,
        };

        let stream = match passthrough {
            Some(color_space) => Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => i64::from(width),
                    "Height" => i64::from(height),
                    "ColorSpace" => color_space,
                    "BitsPerComponent" => 8,
                    "Filter" => "DCTDecode",
                },
                bytes.to_vec(),
            ),
            None => {
                let rgb = decoded.to_rgb8().into_raw();
                let mut stream = Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => i64::from(width),
                        "Height" => i64::from(height),
                        "ColorSpace" => "DeviceRGB",
                        "BitsPerComponent" => 8,
                    },
                    rgb,
                );
                stream.compress()?;
                stream
            }
        };

        log::debug!("Decoded {:?} background {}x{}", format, width, height);
        Ok(Self {
            width,
            height,
            stream,
        })
    }

    pub(crate) fn into_stream(self) -> Stream {
        self.stream
    }

    pub fn filter(&self) -> Option<&[u8]> {
        self.stream.dict.get(b"Filter").and_then(|f| f.as_name()).ok()
    }
}

//! sigpaste stamps a signature image onto a document image.
//!
//! The pipeline is a single pure operation:
//!
//! 1. **Decode** both inputs into straight-alpha RGBA8 ([`decode_image`])
//! 2. **Upscale** the document by a fixed [`ScaleFactor`] (1.1) with a Lanczos3 filter
//! 3. **Paste** the signature at an [`Offset`] using its own alpha as the blend mask
//! 4. **Encode** the result as PNG ([`encode_png`])
//!
//! [`composite`] works on decoded images, [`composite_bytes`] on encoded bytes. The
//! [`handle_json`] boundary wraps the same operation in the data-URL JSON envelope the web
//! front end speaks.
//!
//! Placement coordinates are the signature's top-left corner in the original document's
//! pixel space; see [`Offset::from_placement`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod effects;
mod foundation;
mod service;
mod stamp;
mod transform;

pub use assets::data_url::{decode_data_url, encode_png_data_url};
pub use assets::decode::{decode_image, encode_png};
pub use effects::composite::{Rgba8, paste_px, paste_with_alpha};
pub use foundation::core::{Offset, RasterImage, ScaleFactor};
pub use foundation::error::{SigpasteError, SigpasteResult};
pub use service::envelope::{StampRequest, StampResponse, handle_json, handle_request};
pub use service::settings::{DEFAULT_MAX_PAYLOAD_BYTES, StampSettings};
pub use stamp::{composite, composite_bytes};
pub use transform::scale::{MAX_OUTPUT_BYTES, RESAMPLE_FILTER, upscale};

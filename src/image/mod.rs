//! Image views consumed by the transform.
//!
//! The detector only needs row access and a per-pixel "is edge" query, so any
//! buffer implementing [`ImageView`] whose pixel type implements [`EdgePixel`]
//! can be fed to it directly.

pub mod io;
pub mod mask;
pub mod traits;
pub mod u8;

pub use self::mask::EdgeMask;
pub use self::traits::{EdgePixel, ImageView, Rows};
pub use self::u8::ImageU8;

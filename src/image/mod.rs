pub mod decoded;
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::decoded::DecodedImage;
pub use self::f32::ImageF32;
pub use self::traits::{ImageView, Rows};
pub use self::u8::GrayImageU8;

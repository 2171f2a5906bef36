pub mod config;
pub mod constants;
pub mod image_array;
pub mod rgb_image;

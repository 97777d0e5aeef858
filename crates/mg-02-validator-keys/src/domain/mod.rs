pub mod key_map;
pub mod window;

pub mod all;
pub mod class;
pub mod list;
pub mod load;
pub mod sample;

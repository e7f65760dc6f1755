pub mod arpabet;
pub mod shape;

pub mod refresh;
pub mod sort;
pub mod strip;

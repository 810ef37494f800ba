pub mod driver;
pub mod ease;
pub mod ops;
pub mod pose;
pub mod tween;

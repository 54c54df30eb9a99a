pub mod address;
pub mod currency;
pub mod fixed;
pub mod grouping;
pub mod number;
pub mod percent;
pub mod scale;

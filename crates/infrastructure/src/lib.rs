// Nacos Auth - Infrastructure Layer
// Object store backends behind the domain's ObjectStore seam

pub mod store;

pub use store::*;

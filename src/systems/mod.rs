pub mod sdk;
pub mod seed;
pub mod refine;
pub mod spice;

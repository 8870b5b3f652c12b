pub mod dde;

pub use dde::DdeProblem;

mod gcd;

pub use gcd::gcd;

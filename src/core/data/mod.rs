mod literal;

pub use literal::*;

//! Variadic reductions over any number of operands.

pub mod prod;
pub mod sum;

pub use prod::{prod_op, ProdOp};
pub use sum::{sum_op, SumOp};

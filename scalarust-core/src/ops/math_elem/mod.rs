//! Unary elementwise math: square, trigonometric, exponential and logarithm.

pub mod cos;
pub mod exp;
pub mod ln;
pub mod sin;
pub mod square;
pub mod tan;

pub use cos::{cos_op, CosOp};
pub use exp::{exp_op, ExpOp};
pub use ln::{log_op, LogOp};
pub use sin::{sin_op, SinOp};
pub use square::{square_op, SquareOp};
pub use tan::{tan_op, TanOp};

// Export foundational arithmetic operations directly
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod sub;

pub use add::{add_op, AddOp};
pub use div::{div_op, DivOp};
pub use mul::{mul_op, MulOp};
pub use neg::{neg_op, NegOp};
pub use sub::{sub_op, SubOp};

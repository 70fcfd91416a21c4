//! The buffer schema: one view type per node and record, one enum per union.
//!
//! Offsets are fixed by the producer's memory layout and are given relative
//! to the start of each struct.

use crate::{
    Span,
    layout::{Boxed, Seq},
    macros::{fieldless, node, record, tagged_union},
    strings::Str,
};

mod expression;
mod function;
mod jsx;
mod literal;
mod module;
mod module_record;
mod operator;
mod root;
mod statement;

pub use expression::*;
pub use function::*;
pub use jsx::*;
pub use literal::*;
pub use module::*;
pub use module_record::*;
pub use operator::*;
pub use root::*;
pub use statement::*;

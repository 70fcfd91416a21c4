pub(crate) mod support;

mod plain;
mod sequence;
mod strings;
mod unions;

//! Operator enums shared by the expression nodes.

use super::*;

fieldless! {
    /// Operator of an [`AssignmentExpression`](crate::AssignmentExpression).
    pub enum AssignmentOperator {
        Assign = 0 => "=",
        Addition = 1 => "+=",
        Subtraction = 2 => "-=",
        Multiplication = 3 => "*=",
        Division = 4 => "/=",
        Remainder = 5 => "%=",
        Exponential = 6 => "**=",
        ShiftLeft = 7 => "<<=",
        ShiftRight = 8 => ">>=",
        ShiftRightZeroFill = 9 => ">>>=",
        BitwiseOr = 10 => "|=",
        BitwiseXor = 11 => "^=",
        BitwiseAnd = 12 => "&=",
        LogicalOr = 13 => "||=",
        LogicalAnd = 14 => "&&=",
        LogicalNullish = 15 => "??=",
    }
}

fieldless! {
    /// Operator of a [`BinaryExpression`](crate::BinaryExpression).
    pub enum BinaryOperator {
        Equality = 0 => "==",
        Inequality = 1 => "!=",
        StrictEquality = 2 => "===",
        StrictInequality = 3 => "!==",
        LessThan = 4 => "<",
        LessEqualThan = 5 => "<=",
        GreaterThan = 6 => ">",
        GreaterEqualThan = 7 => ">=",
        Addition = 8 => "+",
        Subtraction = 9 => "-",
        Multiplication = 10 => "*",
        Division = 11 => "/",
        Remainder = 12 => "%",
        Exponential = 13 => "**",
        ShiftLeft = 14 => "<<",
        ShiftRight = 15 => ">>",
        ShiftRightZeroFill = 16 => ">>>",
        BitwiseOr = 17 => "|",
        BitwiseXor = 18 => "^",
        BitwiseAnd = 19 => "&",
        In = 20 => "in",
        Instanceof = 21 => "instanceof",
    }
}

fieldless! {
    /// Operator of a [`LogicalExpression`](crate::LogicalExpression).
    pub enum LogicalOperator {
        Or = 0 => "||",
        And = 1 => "&&",
        Coalesce = 2 => "??",
    }
}

fieldless! {
    /// Operator of a [`UnaryExpression`](crate::UnaryExpression).
    pub enum UnaryOperator {
        UnaryPlus = 0 => "+",
        UnaryNegation = 1 => "-",
        LogicalNot = 2 => "!",
        BitwiseNot = 3 => "~",
        Typeof = 4 => "typeof",
        Void = 5 => "void",
        Delete = 6 => "delete",
    }
}

fieldless! {
    /// Operator of an [`UpdateExpression`](crate::UpdateExpression).
    pub enum UpdateOperator {
        Increment = 0 => "++",
        Decrement = 1 => "--",
    }
}

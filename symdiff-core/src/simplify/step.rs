/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a^0 = 1`, where `a` is not a constant
    PowerZero,

    /// `a^1 = a`, where `a` is not a constant
    PowerOne,

    /// `a/1 = a`
    DivideOne,

    /// `0/a = 0`
    DivideZeroDividend,

    /// `ln(e) = 1`
    LnE,

    /// `2+3 = 5`, only when combining the derivatives of a sum or difference
    FoldConstants,
}

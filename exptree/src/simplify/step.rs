/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `3+4 = 7`
    /// `3-4 = -1`
    /// `3*4 = 12`
    FoldConstant,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a-a = 0`
    SubtractSelf,

    /// `0-a = (-a)`
    NegateFromZero,

    /// `a-0 = a`
    SubtractZero,

    /// `a+b = (a+b)`, when no other rule applies
    Combine,
}

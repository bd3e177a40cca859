/// Classifies the literal consumed by [`read_value`](crate::read_value).
///
/// The walker itself never branches on this after the fact; it exists for
/// callers of the lower-level entry point that want to know what kind of
/// literal went by without re-scanning.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    Int,
    Float,
    String,
    BlockString,
    True,
    False,
    Null,
    Enum,
    List,
    InputObject,
    Variable,
}

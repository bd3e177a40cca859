//! Framing bytes for the canonical digest stream.

/// A single framing byte written to the digest ahead of a grammar
/// construct's payload.
///
/// Every marker is a control byte in `0x01..=0x1F`. The bytes `0x09`
/// (tab), `0x0A` (newline), and `0x0D` (carriage return) are excluded
/// because they may legally appear inside string source text; every other
/// control byte is rejected by the string and block-string scanners, so a
/// marker byte in the canonical stream can never be forged from inside a
/// document. Name payloads are ASCII names, numeric payloads are ASCII
/// digits and punctuation, and string payloads have had all control bytes
/// rejected, which makes the stream's framing unambiguous without length
/// prefixes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum FramingMarker {
    Query = 0x01,
    Mutation = 0x02,
    Subscription = 0x03,
    FragmentDefinition = 0x04,
    VariableDefinition = 0x05,
    Directive = 0x06,
    Field = 0x07,
    Type = 0x08,
    FieldAliasedName = 0x0b,
    FragmentSpread = 0x0c,
    InlineFragment = 0x0e,
    Argument = 0x0f,
    SelectionSet = 0x11,
    SelectionSetEnd = 0x12,
    ValueInputObject = 0x13,
    ValueInputObjectField = 0x14,
    ValueInputObjectEnd = 0x15,
    ValueNull = 0x16,
    ValueTrue = 0x17,
    ValueFalse = 0x18,
    ValueInt = 0x19,
    ValueFloat = 0x1a,
    ValueEnum = 0x1b,
    ValueString = 0x1c,
    ValueList = 0x1d,
    ValueListEnd = 0x1e,
    ValueVariable = 0x1f,
}

impl FramingMarker {
    /// Every marker, in byte order.
    pub const ALL: [FramingMarker; 27] = [
        FramingMarker::Query,
        FramingMarker::Mutation,
        FramingMarker::Subscription,
        FramingMarker::FragmentDefinition,
        FramingMarker::VariableDefinition,
        FramingMarker::Directive,
        FramingMarker::Field,
        FramingMarker::Type,
        FramingMarker::FieldAliasedName,
        FramingMarker::FragmentSpread,
        FramingMarker::InlineFragment,
        FramingMarker::Argument,
        FramingMarker::SelectionSet,
        FramingMarker::SelectionSetEnd,
        FramingMarker::ValueInputObject,
        FramingMarker::ValueInputObjectField,
        FramingMarker::ValueInputObjectEnd,
        FramingMarker::ValueNull,
        FramingMarker::ValueTrue,
        FramingMarker::ValueFalse,
        FramingMarker::ValueInt,
        FramingMarker::ValueFloat,
        FramingMarker::ValueEnum,
        FramingMarker::ValueString,
        FramingMarker::ValueList,
        FramingMarker::ValueListEnd,
        FramingMarker::ValueVariable,
    ];

    /// The marker's byte as it appears in the canonical stream.
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

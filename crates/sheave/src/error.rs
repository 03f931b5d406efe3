use thiserror::Error;

/// Construction-time configuration failures.
///
/// Everything past construction is either a silent clamp or an expected
/// "no anchor here" `None`; only an unusable anchor set is a hard error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionSetError {
    #[error("a position set needs at least one anchor")]
    Empty,
    #[error("anchors `{first}` and `{second}` share offset {offset}")]
    DuplicateOffset {
        first: String,
        second: String,
        offset: f32,
    },
    #[error("anchor `{name}` has a non-finite offset ({offset})")]
    NonFiniteOffset { name: String, offset: f32 },
}

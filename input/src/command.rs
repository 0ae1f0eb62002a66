/// The gesture lifecycle commands sent to the peripheral.
///
/// Target relocation is not a command, it only changes what subsequent
/// measurements are computed against (see [`crate::Target`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureCommand {
    /// The contact touched down.
    Down,
    /// The contact moved far enough from its down position to count as a
    /// drag. At most once per contact.
    DragStart,
    /// The contact was released.
    Up,
}

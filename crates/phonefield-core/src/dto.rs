use crate::field::{HiddenField, InputMode};
use crate::mask::{MaskKind, OverflowPolicy};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub mode: InputMode,
    pub mask: MaskKind,
    pub overflow: OverflowPolicy,
    pub display: String,
    pub logical: String,
    pub hidden: HiddenField,
    pub disabled: bool,
}

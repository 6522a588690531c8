//! The closed catalog of column kinds.

use std::fmt;

use crate::traits::Variant;
use crate::variants;

/// One tag per catalog entry.
///
/// [`ColumnKind::name`] and [`ColumnKind::variant`] are exhaustive, so a new
/// kind can't be added without a name and an implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnKind {
    Bg,
    Depends,
    Description,
    Due,
    End,
    Entry,
    Fg,
    Id,
    IMask,
    Mask,
    Parent,
    Priority,
    Project,
    Recur,
    Start,
    Status,
    Tags,
    Until,
    Urgency,
    Uuid,
    Wait,
    /// Static text that doesn't come from a record.
    Literal,
}

impl ColumnKind {
    /// Every kind, in catalog order.
    pub const ALL: [ColumnKind; 22] = [
        ColumnKind::Bg,
        ColumnKind::Depends,
        ColumnKind::Description,
        ColumnKind::Due,
        ColumnKind::End,
        ColumnKind::Entry,
        ColumnKind::Fg,
        ColumnKind::Id,
        ColumnKind::IMask,
        ColumnKind::Mask,
        ColumnKind::Parent,
        ColumnKind::Priority,
        ColumnKind::Project,
        ColumnKind::Recur,
        ColumnKind::Start,
        ColumnKind::Status,
        ColumnKind::Tags,
        ColumnKind::Until,
        ColumnKind::Urgency,
        ColumnKind::Uuid,
        ColumnKind::Wait,
        ColumnKind::Literal,
    ];

    /// Name used in column specifications; also the record attribute read.
    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Bg => "bg",
            ColumnKind::Depends => "depends",
            ColumnKind::Description => "description",
            ColumnKind::Due => "due",
            ColumnKind::End => "end",
            ColumnKind::Entry => "entry",
            ColumnKind::Fg => "fg",
            ColumnKind::Id => "id",
            ColumnKind::IMask => "imask",
            ColumnKind::Mask => "mask",
            ColumnKind::Parent => "parent",
            ColumnKind::Priority => "priority",
            ColumnKind::Project => "project",
            ColumnKind::Recur => "recur",
            ColumnKind::Start => "start",
            ColumnKind::Status => "status",
            ColumnKind::Tags => "tags",
            ColumnKind::Until => "until",
            ColumnKind::Urgency => "urgency",
            ColumnKind::Uuid => "uuid",
            ColumnKind::Wait => "wait",
            ColumnKind::Literal => "string",
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn from_name(name: &str) -> Option<ColumnKind> {
        ColumnKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The implementation behind this kind.
    pub fn variant(&self) -> &'static dyn Variant {
        match self {
            ColumnKind::Bg => &variants::Bg,
            ColumnKind::Depends => &variants::Depends,
            ColumnKind::Description => &variants::Description,
            ColumnKind::Due => &variants::Due,
            ColumnKind::End => &variants::End,
            ColumnKind::Entry => &variants::Entry,
            ColumnKind::Fg => &variants::Fg,
            ColumnKind::Id => &variants::Id,
            ColumnKind::IMask => &variants::IMask,
            ColumnKind::Mask => &variants::Mask,
            ColumnKind::Parent => &variants::Parent,
            ColumnKind::Priority => &variants::Priority,
            ColumnKind::Project => &variants::Project,
            ColumnKind::Recur => &variants::Recur,
            ColumnKind::Start => &variants::Start,
            ColumnKind::Status => &variants::Status,
            ColumnKind::Tags => &variants::Tags,
            ColumnKind::Until => &variants::Until,
            ColumnKind::Urgency => &variants::Urgency,
            ColumnKind::Uuid => &variants::Uuid,
            ColumnKind::Wait => &variants::Wait,
            ColumnKind::Literal => &variants::Literal,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

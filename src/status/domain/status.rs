//! Status column record and the payload used to create or update one.

use super::{StatusColor, StatusId, StatusName};
use serde::{Deserialize, Serialize};

/// A named, colored, ordered column on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    id: StatusId,
    name: StatusName,
    color: StatusColor,
    position: u32,
    is_done: bool,
}

impl Status {
    /// Creates a status record.
    #[must_use]
    pub const fn new(
        id: StatusId,
        name: StatusName,
        color: StatusColor,
        position: u32,
        is_done: bool,
    ) -> Self {
        Self {
            id,
            name,
            color,
            position,
            is_done,
        }
    }

    /// Returns the status identifier.
    #[must_use]
    pub const fn id(&self) -> StatusId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &StatusName {
        &self.name
    }

    /// Returns the display color.
    #[must_use]
    pub const fn color(&self) -> &StatusColor {
        &self.color
    }

    /// Returns the stored position.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Returns whether this status is flagged as the board's done column.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_done
    }

    pub(crate) const fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    pub(crate) fn set_appearance(&mut self, name: StatusName, color: StatusColor) {
        self.name = name;
        self.color = color;
    }

    /// Returns the editable fields as a draft.
    #[must_use]
    pub fn to_draft(&self) -> StatusDraft {
        StatusDraft::new(self.name.clone(), self.color.clone())
    }
}

/// Name and color sent to the status source on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDraft {
    /// Display name.
    pub name: StatusName,
    /// Display color.
    pub color: StatusColor,
}

impl StatusDraft {
    /// Creates a draft from validated parts.
    #[must_use]
    pub const fn new(name: StatusName, color: StatusColor) -> Self {
        Self { name, color }
    }
}

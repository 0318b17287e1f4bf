//! Groups and members
//!
//! The group collaborator owns membership; the allocation engine only ever
//! reads member ids. "Self" is carried as an explicit flag on a member
//! value, never inferred from ambient session state.

use serde::{Deserialize, Serialize};

use core_kernel::{GroupId, MemberId};

/// A person who can be allocated a share of a bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,
    /// Name shown on shares and settlement records
    pub display_name: String,
    /// Whether this member is the user driving the split
    pub is_self: bool,
}

impl Member {
    /// Creates a new member with a fresh identifier
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            display_name: display_name.into(),
            is_self: false,
        }
    }

    /// Marks this member as the acting user
    pub fn as_self(mut self) -> Self {
        self.is_self = true;
        self
    }
}

/// A group of members sharing expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,
    /// Group name
    pub name: String,
    /// Members, in display order
    pub members: Vec<Member>,
}

impl Group {
    /// Creates a new group
    pub fn new(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            members,
        }
    }

    /// Returns the number of members
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the member belongs to this group
    pub fn contains(&self, member_id: &MemberId) -> bool {
        self.members.iter().any(|m| &m.id == member_id)
    }

    /// Looks up a member by id
    pub fn member(&self, member_id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == member_id)
    }

    /// Iterates over member ids in display order
    pub fn member_ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.members.iter().map(|m| m.id)
    }

    /// Returns the member flagged as the acting user, if any
    pub fn self_member(&self) -> Option<&Member> {
        self.members.iter().find(|m| m.is_self)
    }
}

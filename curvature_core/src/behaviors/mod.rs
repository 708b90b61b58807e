//! Behaviors and the groupings that reference them.
//!
//! - **Behavior**: a candidate action owning its considerations
//! - **BehaviorSet**: a reusable membership list of behaviors
//! - **Archetype**: an agent template made of behavior sets

mod archetype;
mod behavior;
mod set;

pub use archetype::*;
pub use behavior::*;
pub use set::*;

/// Insert `id` unless already present. Returns true if it was added.
pub(crate) fn add_member<T: PartialEq + Copy>(members: &mut Vec<T>, id: T) -> bool {
    if members.contains(&id) {
        return false;
    }
    members.push(id);
    true
}

/// Remove `id` from a membership list. Returns true if it was present.
pub(crate) fn remove_member<T: PartialEq>(members: &mut Vec<T>, id: &T) -> bool {
    let before = members.len();
    members.retain(|m| m != id);
    members.len() != before
}

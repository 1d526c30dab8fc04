use crate::model::Shoutout;

/// All shoutouts recorded under one name, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoutGroup {
    pub name: String,
    pub shoutouts: Vec<Shoutout>,
}

/// Group shoutouts by exact name match.
///
/// Groups appear in the order each name was first seen, and entries within a
/// group keep their insertion order. Names are compared verbatim, so "Ana"
/// and "ana" form two groups.
pub fn group_by_name(shoutouts: Vec<Shoutout>) -> Vec<ShoutGroup> {
    let mut groups: Vec<ShoutGroup> = Vec::new();
    for shoutout in shoutouts {
        match groups.iter_mut().find(|group| group.name == shoutout.name) {
            Some(group) => group.shoutouts.push(shoutout),
            None => groups.push(ShoutGroup {
                name: shoutout.name.clone(),
                shoutouts: vec![shoutout],
            }),
        }
    }
    groups
}

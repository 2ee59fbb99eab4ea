//! Canonical body-part roles and the partial role → joint mapping.
//!
//! Every convention names and indexes its joints differently. A [`RoleMap`]
//! attaches a fixed vocabulary on top of the local indices so that callers can
//! ask for "left elbow" without knowing which layout produced the data. Slots
//! are independent and optional: no real convention fills all of them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A canonical body-part role.
///
/// Declaration order is the canonical extraction order for the body roles;
/// the hand slots come last and are not part of that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Hips,
    SpineLow,
    SpineMid,
    SpineHigh,
    Neck,
    Head,

    LClavicle,
    LShoulder,
    LElbow,
    LWrist,

    RClavicle,
    RShoulder,
    RElbow,
    RWrist,

    LHip,
    LKnee,
    LAnkle,
    LFoot,

    RHip,
    RKnee,
    RAnkle,
    RFoot,

    // Optional hand slots, only filled by conventions with a dedicated hand joint.
    LHand,
    RHand,
}

impl Role {
    pub const COUNT: usize = 24;

    pub const ALL: [Role; Role::COUNT] = [
        Role::Hips,
        Role::SpineLow,
        Role::SpineMid,
        Role::SpineHigh,
        Role::Neck,
        Role::Head,
        Role::LClavicle,
        Role::LShoulder,
        Role::LElbow,
        Role::LWrist,
        Role::RClavicle,
        Role::RShoulder,
        Role::RElbow,
        Role::RWrist,
        Role::LHip,
        Role::LKnee,
        Role::LAnkle,
        Role::LFoot,
        Role::RHip,
        Role::RKnee,
        Role::RAnkle,
        Role::RFoot,
        Role::LHand,
        Role::RHand,
    ];

    /// The fixed order used by [`RoleMap::ordered_indices`]: torso and head,
    /// then left arm, right arm, left leg, right leg.
    pub const CANONICAL_ORDER: [Role; 22] = [
        Role::Hips,
        Role::SpineLow,
        Role::SpineMid,
        Role::SpineHigh,
        Role::Neck,
        Role::Head,
        Role::LClavicle,
        Role::LShoulder,
        Role::LElbow,
        Role::LWrist,
        Role::RClavicle,
        Role::RShoulder,
        Role::RElbow,
        Role::RWrist,
        Role::LHip,
        Role::LKnee,
        Role::LAnkle,
        Role::LFoot,
        Role::RHip,
        Role::RKnee,
        Role::RAnkle,
        Role::RFoot,
    ];

    /// Dense slot index of this role inside a [`RoleMap`].
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Whether the role takes part in canonical ordered extraction.
    #[inline]
    pub fn is_canonical(self) -> bool {
        !matches!(self, Role::LHand | Role::RHand)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Hips => "hips",
            Role::SpineLow => "spine_low",
            Role::SpineMid => "spine_mid",
            Role::SpineHigh => "spine_high",
            Role::Neck => "neck",
            Role::Head => "head",
            Role::LClavicle => "l_clavicle",
            Role::LShoulder => "l_shoulder",
            Role::LElbow => "l_elbow",
            Role::LWrist => "l_wrist",
            Role::RClavicle => "r_clavicle",
            Role::RShoulder => "r_shoulder",
            Role::RElbow => "r_elbow",
            Role::RWrist => "r_wrist",
            Role::LHip => "l_hip",
            Role::LKnee => "l_knee",
            Role::LAnkle => "l_ankle",
            Role::LFoot => "l_foot",
            Role::RHip => "r_hip",
            Role::RKnee => "r_knee",
            Role::RAnkle => "r_ankle",
            Role::RFoot => "r_foot",
            Role::LHand => "l_hand",
            Role::RHand => "r_hand",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown role '{s}'"))
    }
}

/// Partial assignment of roles to local joint indices.
///
/// Serialized as an ordered `{ "role": index }` map that omits unset roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Role, usize>", into = "BTreeMap<Role, usize>")]
pub struct RoleMap {
    slots: [Option<usize>; Role::COUNT],
}

impl RoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style assignment, used by the convention tables.
    pub fn with(mut self, role: Role, index: usize) -> Self {
        self.set(role, Some(index));
        self
    }

    pub fn set(&mut self, role: Role, index: Option<usize>) {
        self.slots[role.slot()] = index;
    }

    #[inline]
    pub fn get(&self, role: Role) -> Option<usize> {
        self.slots[role.slot()]
    }

    pub fn is_set(&self, role: Role) -> bool {
        self.get(role).is_some()
    }

    /// Set roles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, usize)> + '_ {
        Role::ALL
            .iter()
            .filter_map(move |&role| self.get(role).map(|index| (role, index)))
    }

    /// Number of set canonical (non-hand) roles.
    pub fn canonical_len(&self) -> usize {
        Role::CANONICAL_ORDER
            .iter()
            .filter(|&&role| self.is_set(role))
            .count()
    }

    /// Indices of the set canonical roles, in [`Role::CANONICAL_ORDER`].
    pub fn ordered_indices(&self) -> Vec<usize> {
        Role::CANONICAL_ORDER
            .iter()
            .filter_map(|&role| self.get(role))
            .collect()
    }

    /// All roles assigned to `index`.
    pub fn roles_at(&self, index: usize) -> Vec<Role> {
        self.iter()
            .filter(|&(_, i)| i == index)
            .map(|(role, _)| role)
            .collect()
    }
}

impl From<BTreeMap<Role, usize>> for RoleMap {
    fn from(map: BTreeMap<Role, usize>) -> Self {
        let mut roles = RoleMap::new();
        for (role, index) in map {
            roles.set(role, Some(index));
        }
        roles
    }
}

impl From<RoleMap> for BTreeMap<Role, usize> {
    fn from(roles: RoleMap) -> Self {
        roles.iter().collect()
    }
}

impl FromIterator<(Role, usize)> for RoleMap {
    fn from_iter<T: IntoIterator<Item = (Role, usize)>>(iter: T) -> Self {
        let mut roles = RoleMap::new();
        for (role, index) in iter {
            roles.set(role, Some(index));
        }
        roles
    }
}

//! Decision variable handles.

use std::fmt;

/// Role of a decision variable in the formulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VarRole {
    /// `U(j,k)`: job `j` occupies position `k`.
    Assignment,
    /// `V(k,t)`: tool `t` is resident while position `k` runs.
    Presence,
    /// `W(k,t)`: tool `t` is switched in before position `k`.
    Switch,
}

/// A binary decision variable tagged with its family and 1-based indices.
///
/// The tag is fixed at declaration time. Solution extraction matches on it
/// directly, so no backend naming convention is ever parsed.
///
/// # Examples
///
/// ```
/// use u_toolswitch::model::{SspVar, VarRole};
///
/// let u = SspVar::Assignment { job: 3, position: 1 };
/// assert_eq!(u.role(), VarRole::Assignment);
/// assert_eq!(u.position(), 1);
/// assert_eq!(u.to_string(), "U(3,1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SspVar {
    /// `U(job, position)`.
    Assignment { job: usize, position: usize },
    /// `V(position, tool)`.
    Presence { position: usize, tool: usize },
    /// `W(position, tool)`.
    Switch { position: usize, tool: usize },
}

impl SspVar {
    /// Family of this variable.
    pub fn role(&self) -> VarRole {
        match self {
            SspVar::Assignment { .. } => VarRole::Assignment,
            SspVar::Presence { .. } => VarRole::Presence,
            SspVar::Switch { .. } => VarRole::Switch,
        }
    }

    /// Position index shared by all three families.
    pub fn position(&self) -> usize {
        match *self {
            SspVar::Assignment { position, .. }
            | SspVar::Presence { position, .. }
            | SspVar::Switch { position, .. } => position,
        }
    }
}

// Display is for logs and debugging only.
impl fmt::Display for SspVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SspVar::Assignment { job, position } => write!(f, "U({job},{position})"),
            SspVar::Presence { position, tool } => write!(f, "V({position},{tool})"),
            SspVar::Switch { position, tool } => write!(f, "W({position},{tool})"),
        }
    }
}

/// Dense index of a declared variable within an [`SspModel`](super::SspModel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarId(pub(crate) usize);

impl VarId {
    /// 0-based declaration order.
    pub fn index(self) -> usize {
        self.0
    }
}

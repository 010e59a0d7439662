//! PRDoc audience vocabulary.
//!
//! Every `doc` entry in a record targets one or more audiences. The set is
//! fixed by the documentation pipeline; anything else is reported as unknown
//! but never rejected here (that decision belongs to the validator).

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Audience {
    NodeDev,
    RuntimeDev,
    NodeOperator,
    RuntimeUser,
    Todo,
}

/// All known audiences in the order changelogs list them.
pub const ALL: [Audience; 5] = [
    Audience::NodeDev,
    Audience::RuntimeDev,
    Audience::NodeOperator,
    Audience::RuntimeUser,
    Audience::Todo,
];

impl Audience {
    pub const fn as_str(self) -> &'static str {
        match self {
            Audience::NodeDev => "Node Dev",
            Audience::RuntimeDev => "Runtime Dev",
            Audience::NodeOperator => "Node Operator",
            Audience::RuntimeUser => "Runtime User",
            Audience::Todo => "Todo",
        }
    }

    /// Exact, case-sensitive lookup of an audience label.
    pub fn parse(label: &str) -> Option<Audience> {
        ALL.into_iter().find(|a| a.as_str() == label)
    }

    pub const fn description(self) -> &'static str {
        match self {
            Audience::NodeDev => "Developers building on or integrating with the node",
            Audience::RuntimeDev => "Developers writing or upgrading runtime code",
            Audience::NodeOperator => "Operators running and maintaining nodes",
            Audience::RuntimeUser => "End users interacting with the runtime",
            Audience::Todo => "Audience not yet decided by the author",
        }
    }

    /// Position in changelog ordering.
    pub fn rank(self) -> usize {
        ALL.iter().position(|a| *a == self).unwrap_or(ALL.len())
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

pub fn is_known(label: &str) -> bool {
    Audience::parse(label).is_some()
}

/// Known audience labels, for error messages.
pub fn known_labels() -> Vec<&'static str> {
    ALL.iter().map(|a| a.as_str()).collect()
}

use std::fmt;
use std::str::FromStr;

/// Boolean composition of nested predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// All arguments must hold (`and`)
    And,
    /// At least one argument must hold (`or`)
    Or,
    /// Negates its argument (`not`)
    Not,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::And, Operator::Or, Operator::Not];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
        }
    }
}

/// Leaf predicate comparing a field to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    /// Equal (`eq`)
    Eq,
    /// Not equal (`ne`)
    Ne,
    /// Greater than (`gt`)
    Gt,
    /// Greater than or equal (`gte`)
    Gte,
    /// Less than (`lt`)
    Lt,
    /// Less than or equal (`lte`)
    Lte,
    /// Substring or element containment (`contain`)
    Contain,
    /// Pattern match (`like`)
    Like,
    /// Membership in a set of values (`in`)
    In,
    /// Non-membership in a set of values (`nin`)
    Nin,
}

impl Comparator {
    pub const ALL: [Comparator; 10] = [
        Comparator::Eq,
        Comparator::Ne,
        Comparator::Gt,
        Comparator::Gte,
        Comparator::Lt,
        Comparator::Lte,
        Comparator::Contain,
        Comparator::Like,
        Comparator::In,
        Comparator::Nin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Eq => "eq",
            Comparator::Ne => "ne",
            Comparator::Gt => "gt",
            Comparator::Gte => "gte",
            Comparator::Lt => "lt",
            Comparator::Lte => "lte",
            Comparator::Contain => "contain",
            Comparator::Like => "like",
            Comparator::In => "in",
            Comparator::Nin => "nin",
        }
    }
}

/// Returned when a name is outside a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {vocabulary} '{name}'")]
pub struct UnknownName {
    pub vocabulary: &'static str,
    pub name: String,
}

impl FromStr for Operator {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownName {
                vocabulary: "operator",
                name: s.to_string(),
            })
    }
}

impl FromStr for Comparator {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Comparator::ALL
            .into_iter()
            .find(|cmp| cmp.as_str() == s)
            .ok_or_else(|| UnknownName {
                vocabulary: "comparator",
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic role of a call name.
///
/// The grammar parses operators and comparators identically; this is where a
/// consumer walking the tree tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Operator(Operator),
    Comparator(Comparator),
}

impl FunctionKind {
    /// Classify a call name, `None` when it belongs to neither vocabulary.
    pub fn classify(name: &str) -> Option<FunctionKind> {
        if let Ok(op) = name.parse::<Operator>() {
            return Some(FunctionKind::Operator(op));
        }
        name.parse::<Comparator>().ok().map(FunctionKind::Comparator)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionKind::Operator(op) => op.as_str(),
            FunctionKind::Comparator(cmp) => cmp.as_str(),
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, FunctionKind::Operator(_))
    }

    pub fn is_comparator(&self) -> bool {
        matches!(self, FunctionKind::Comparator(_))
    }
}

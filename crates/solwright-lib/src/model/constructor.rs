//! Constructor arguments and statements contributed by parents and features.

use std::fmt;

use crate::{Error, Result};

use super::parents::ParentSet;

/// Who contributed a constructor argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Owner {
    /// Forwarded to the named parent's constructor.
    Parent(String),
    /// Used by the contract's own constructor code.
    Own,
}

impl Owner {
    pub fn parent(name: impl Into<String>) -> Self {
        Owner::Parent(name.into())
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Parent(name) => write!(f, "parent `{name}`"),
            Owner::Own => write!(f, "the contract itself"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorArg {
    pub name: String,
    pub ty: String,
}

impl ConstructorArg {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn render(&self) -> String {
        format!("{} {}", self.ty, self.name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConstructorModel {
    args: Vec<(ConstructorArg, Owner)>,
    code: Vec<String>,
}

impl ConstructorModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `arg` for `owner`. Identical re-adds are no-ops; a name clash
    /// with another owner or another type is an error.
    pub fn add_argument(&mut self, arg: ConstructorArg, owner: Owner) -> Result<bool> {
        let found = self.args.iter().find(|(a, _)| a.name == arg.name);
        if let Some((existing, existing_owner)) = found {
            if *existing_owner == owner && *existing == arg {
                return Ok(false);
            }
            let requested = format!("{owner} as `{}`", arg.render());
            return Err(Error::ArgumentNameCollision {
                name: arg.name,
                existing: format!("{existing_owner} as `{}`", existing.render()),
                requested,
            });
        }
        self.args.push((arg, owner));
        Ok(true)
    }

    pub fn add_code(&mut self, stmt: String) {
        self.code.push(stmt);
    }

    pub fn code(&self) -> &[String] {
        &self.code
    }

    /// Arguments in emission order: parent-owned arguments follow parent
    /// order, then arguments owned by the contract itself. Ties keep the
    /// order in which they were added.
    pub fn ordered_args(&self, parents: &ParentSet) -> Vec<&ConstructorArg> {
        let mut args: Vec<(usize, &ConstructorArg)> = self
            .args
            .iter()
            .map(|(arg, owner)| {
                let rank = match owner {
                    Owner::Parent(name) => parents.position(name).unwrap_or(parents.len()),
                    Owner::Own => usize::MAX,
                };
                (rank, arg)
            })
            .collect();
        args.sort_by_key(|(rank, _)| *rank);
        args.into_iter().map(|(_, arg)| arg).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.code.is_empty()
    }
}

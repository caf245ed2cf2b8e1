use std::collections::HashMap;

use crate::{
    errors::errors::{Error, ErrorImpl},
    value::value::Value,
    Position,
};

/// One scope of the chain. Each scope owns its parent, so leaving a scope
/// is taking the parent back out.
#[derive(Debug, Default)]
pub struct Environment {
    /// name -> (mutable, value)
    pub variable_lookup: HashMap<String, (bool, Value)>,
    parent: Option<Box<Environment>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn with_parent(parent: Environment) -> Self {
        Environment {
            variable_lookup: HashMap::new(),
            parent: Some(Box::new(parent)),
        }
    }

    pub fn take_parent(&mut self) -> Option<Environment> {
        self.parent.take().map(|parent| *parent)
    }

    /// Number of scopes in the chain, this one included.
    pub fn depth(&self) -> usize {
        1 + self.parent.as_ref().map_or(0, |parent| parent.depth())
    }

    pub fn declare_variable(
        &mut self,
        variable_name: String,
        value: Value,
        mutable: bool,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.variable_lookup.contains_key(&variable_name) {
            Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: variable_name,
                },
                current_position,
            ))
        } else {
            self.variable_lookup.insert(variable_name, (mutable, value));
            Ok(())
        }
    }

    /// Looks `variable_name` up from this scope outwards.
    pub fn get_variable(&self, variable_name: &str) -> Option<&(bool, Value)> {
        match self.variable_lookup.get(variable_name) {
            Some(entry) => Some(entry),
            None => self
                .parent
                .as_ref()
                .and_then(|parent| parent.get_variable(variable_name)),
        }
    }

    /// Overwrites the nearest binding of `variable_name`.
    pub fn assign_variable(
        &mut self,
        variable_name: &str,
        value: Value,
        current_position: Position,
    ) -> Result<(), Error> {
        if let Some((mutable, slot)) = self.variable_lookup.get_mut(variable_name) {
            if !*mutable {
                return Err(Error::new(
                    ErrorImpl::AssignToImmutable {
                        variable: variable_name.to_string(),
                    },
                    current_position,
                ));
            }

            *slot = value;
            return Ok(());
        }

        match self.parent.as_mut() {
            Some(parent) => parent.assign_variable(variable_name, value, current_position),
            None => Err(Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: variable_name.to_string(),
                },
                current_position,
            )),
        }
    }
}

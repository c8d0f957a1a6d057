use std::collections::{HashMap, HashSet};

use crate::ast::Span;

use super::{
    error::{TypeCheckError, UndefinedVariable},
    types::QualifiedType,
    TypeResult,
};

/// Typing environment: value bindings plus the set of type variables in
/// scope. Scope entry clones the environment, so extensions made inside a
/// branch are never visible to its siblings.
#[derive(Clone, Debug, Default)]
pub struct TypeEnv {
    bindings: HashMap<String, QualifiedType>,
    type_vars: HashSet<String>,
}

impl TypeEnv {
    pub fn new() -> TypeEnv {
        TypeEnv::default()
    }

    /// Bind `name`, shadowing any previous binding.
    pub fn add(&mut self, name: impl ToString, type_id: QualifiedType) {
        self.bindings.insert(name.to_string(), type_id);
    }

    pub fn add_all(&mut self, pairs: impl IntoIterator<Item = (String, QualifiedType)>) {
        for (name, type_id) in pairs {
            self.add(name, type_id);
        }
    }

    pub fn add_type_var(&mut self, name: impl ToString) {
        self.type_vars.insert(name.to_string());
    }

    pub fn has_type_var(&self, name: &str) -> bool {
        self.type_vars.contains(name)
    }

    pub fn get(&self, name: &str) -> Option<&QualifiedType> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn resolve(&self, name: &str, position: &Span) -> TypeResult<QualifiedType> {
        match self.bindings.get(name) {
            Some(type_id) => Ok(type_id.clone()),
            None => Err(TypeCheckError::UndefinedVariable(
                UndefinedVariable {
                    variable_name: name.to_string(),
                },
                position.clone(),
            )),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Span;
    use crate::typechecker::{
        error::TypeCheckError,
        types::{QualifiedType, Type},
    };

    use super::TypeEnv;

    #[test]
    fn test_resolve_after_add() {
        let mut env = TypeEnv::new();
        env.add("owner", QualifiedType::plain(Type::address()));

        assert_eq!(
            env.resolve("owner", &Span::default()),
            Ok(QualifiedType::plain(Type::address()))
        );
    }

    #[test]
    fn test_unbound_name() {
        let env = TypeEnv::new();

        assert!(matches!(
            env.resolve("owner", &Span::default()),
            Err(TypeCheckError::UndefinedVariable(..))
        ));
    }

    #[test]
    fn test_shadowing() {
        let mut env = TypeEnv::new();
        env.add("x", QualifiedType::plain(Type::uint32()));
        env.add("x", QualifiedType::plain(Type::string()));

        assert_eq!(
            env.resolve("x", &Span::default()),
            Ok(QualifiedType::plain(Type::string()))
        );
    }

    #[test]
    fn test_clone_isolation() {
        let mut env = TypeEnv::new();
        env.add("x", QualifiedType::plain(Type::uint32()));

        let mut branch = env.clone();
        branch.add("y", QualifiedType::plain(Type::string()));
        branch.add_type_var("A");

        assert!(!env.contains("y"));
        assert!(!env.has_type_var("A"));
        assert!(branch.contains("x"));
    }
}

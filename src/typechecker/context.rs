//! Checking context: the dual environment (pure values vs. contract
//! fields) plus the ambient dictionaries. Cloned whenever a construct
//! introduces scope, so sibling scopes stay independent; the dictionaries
//! are shared behind `Rc` and never change during a check.

use std::rc::Rc;

use super::env::TypeEnv;
use super::registry::{AdtRegistry, BuiltinDictionary, HostRegistry};

#[derive(Debug, Clone)]
pub struct Context {
    /// Local values, parameters and library bindings.
    pub env: TypeEnv,
    /// Mutable contract fields; only these may be loaded and stored.
    pub fields: TypeEnv,
    pub adts: Rc<AdtRegistry>,
    pub builtins: Rc<BuiltinDictionary>,
    pub host: Rc<HostRegistry>,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            env: TypeEnv::new(),
            fields: TypeEnv::new(),
            adts: Rc::new(AdtRegistry::standard()),
            builtins: Rc::new(BuiltinDictionary),
            host: Rc::new(HostRegistry::default()),
        }
    }
}

impl Context {
    pub fn with_adts(adts: AdtRegistry) -> Context {
        Context {
            adts: Rc::new(adts),
            ..Default::default()
        }
    }
}

impl PartialEq for Context {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for Context {}

//! Type checker for Cinder contract modules.
//!
//! The checker rewrites an untyped AST (`Node<()>`) into a typed one
//! (`Node<TypeInformation>`): every expression, identifier, pattern and
//! statement ends up carrying the qualified type the rules assign to it.
//! Checking a module runs in phases (recursion primitives, libraries,
//! contract parameters, fields, transitions) and keeps going after a
//! failure in one library entry, field initializer or transition, so a
//! single run reports every error.

pub mod context;
pub mod env;
pub mod error;
pub mod registry;
pub mod typed_ast;
pub mod types;

use std::collections::HashSet;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::ast::{Contract, ContractModule, LibEntry, Library};

use self::context::Context;
use self::env::TypeEnv;
use self::error::RecPrimsTypeDecl;

pub use self::error::TypeCheckError;
pub use self::types::{QualifiedType, Type};

pub type TypeResult<T> = Result<T, TypeCheckError>;

/// Annotation attached to every node of the typed AST: the inferred
/// qualified type plus a snapshot of the context it was derived under.
/// Context identity never participates in equality.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInformation {
    pub type_id: QualifiedType,
    #[serde(skip)]
    pub context: Context,
}

impl TypeInformation {
    pub fn new(type_id: QualifiedType, ctx: &Context) -> TypeInformation {
        TypeInformation {
            type_id,
            context: ctx.clone(),
        }
    }

    /// The bare type under the qualification.
    pub fn ty(&self) -> &Type {
        &self.type_id.type_id
    }
}

/// Rewrites an untyped node into its typed counterpart under a context.
/// `revert` strips the annotations again; checking a reverted node under
/// the same context reproduces the typed node.
pub trait TypeCheckable {
    type Typed;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed>;

    fn revert(this: &Self::Typed) -> Self;
}

/// Result of checking a whole module. Entries whose checking failed are
/// omitted from the typed tree; their diagnostics are collected in
/// `errors`. The module is well typed only if `errors` is empty.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub module: ContractModule<TypeInformation>,
    /// Environment accumulated through recursion primitives, libraries and
    /// contract parameters, for downstream analyses.
    pub env: TypeEnv,
    pub errors: Vec<TypeCheckError>,
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(
        self,
    ) -> Result<(ContractModule<TypeInformation>, TypeEnv), Vec<TypeCheckError>> {
        if self.errors.is_empty() {
            Ok((self.module, self.env))
        } else {
            Err(self.errors)
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypeChecker {
    context: Context,
    module: ContractModule<()>,
}

impl TypeChecker {
    pub fn new(module: ContractModule<()>) -> TypeChecker {
        TypeChecker {
            context: Context::default(),
            module,
        }
    }

    /// Check under a non-default context, e.g. one whose registry carries
    /// user-defined algebraic types.
    pub fn with_context(module: ContractModule<()>, context: Context) -> TypeChecker {
        TypeChecker { context, module }
    }

    pub fn check(self) -> CheckResult {
        let TypeChecker { mut context, module } = self;

        let ContractModule {
            name,
            rec_primitives,
            external_libraries,
            library,
            contract,
            position,
        } = module;

        let mut errors = vec![];

        debug!("type checking module '{name}'");

        // recursion primitives bootstrap the standard library and must not
        // declare types of their own
        let mut typed_rec = vec![];
        for entry in rec_primitives {
            match entry {
                LibEntry::Typ(typ) => {
                    errors.push(TypeCheckError::RecPrimsTypeDecl(
                        RecPrimsTypeDecl {
                            name: typ.name.clone(),
                        },
                        typ.position.clone(),
                    ));
                }
                LibEntry::Var(var) => match var.check(&mut context) {
                    Ok(typed) => typed_rec.push(LibEntry::Var(typed)),
                    Err(err) => errors.push(err),
                },
            }
        }

        let mut blacklist = HashSet::new();

        let mut typed_external = vec![];
        for lib in external_libraries {
            typed_external.push(Self::check_library(lib, &mut context, &mut errors, &mut blacklist));
        }

        let typed_library = library
            .map(|lib| Self::check_library(lib, &mut context, &mut errors, &mut blacklist));

        let Contract {
            name: contract_name,
            params,
            fields,
            transitions,
            position: contract_position,
        } = contract;

        debug!("type checking contract '{contract_name}'");

        for (param, ty) in context.host.contract_params().to_vec() {
            context.env.add(param, QualifiedType::plain(ty));
        }

        let mut typed_params = vec![];
        for param in params {
            match param.check(&mut context) {
                Ok(typed) => typed_params.push(typed),
                Err(err) => errors.push(err),
            }
        }

        // field initializers run in the pure environment and cannot see
        // other fields
        let mut fields_env = TypeEnv::new();
        let mut typed_fields = vec![];
        for field in fields {
            let field_name = field.name.name.clone();
            let declared = field.type_name.clone();

            match field.check(&mut context.clone()) {
                Ok(typed) => {
                    fields_env.add(&field_name, typed.name.info.type_id.clone());
                    typed_fields.push(typed);
                }
                Err(err) => {
                    errors.push(err);
                    // keep the declared type visible to transitions so one
                    // broken initializer does not cascade into spurious
                    // unbound-field errors
                    if let Ok(type_id) = QualifiedType::try_from((&declared, &context)) {
                        fields_env.add(&field_name, type_id);
                    }
                }
            }
        }

        let (balance, balance_type) = context.host.balance_field().clone();
        fields_env.add(balance, QualifiedType::plain(balance_type));

        context.fields = fields_env;

        let mut typed_transitions = vec![];
        for transition in transitions {
            let mut transition_ctx = context.clone();
            match transition.check(&mut transition_ctx) {
                Ok(typed) => typed_transitions.push(typed),
                Err(err) => errors.push(err),
            }
        }

        CheckResult {
            module: ContractModule {
                name,
                rec_primitives: typed_rec,
                external_libraries: typed_external,
                library: typed_library,
                contract: Contract {
                    name: contract_name,
                    params: typed_params,
                    fields: typed_fields,
                    transitions: typed_transitions,
                    position: contract_position,
                },
                position,
            },
            env: context.env,
            errors,
        }
    }

    /// Check one library. Failed entries are dropped from the typed output
    /// and their names blacklisted; entries depending on a blacklisted name
    /// are skipped without producing further diagnostics.
    fn check_library(
        lib: Library<()>,
        ctx: &mut Context,
        errors: &mut Vec<TypeCheckError>,
        blacklist: &mut HashSet<String>,
    ) -> Library<TypeInformation> {
        let Library {
            name,
            entries,
            position,
        } = lib;

        debug!("type checking library '{name}'");

        let mut typed_entries = vec![];
        for entry in entries {
            match entry {
                LibEntry::Typ(typ) => {
                    for ctr in &typ.ctr_defs {
                        for arg_type in &ctr.arg_types {
                            if let Err(err) = Type::try_from((arg_type, &*ctx)) {
                                errors.push(err);
                            }
                        }
                    }
                    typed_entries.push(LibEntry::Typ(typ));
                }
                LibEntry::Var(var) => {
                    let entry_name = var.name.name.clone();

                    let free = var.expr.free_vars();
                    if free.iter().any(|name| blacklist.contains(name)) {
                        trace!("skipping '{entry_name}': depends on a failed entry");
                        blacklist.insert(entry_name);
                        continue;
                    }

                    match var.check(ctx) {
                        Ok(typed) => typed_entries.push(LibEntry::Var(typed)),
                        Err(err) => {
                            errors.push(err);
                            blacklist.insert(entry_name);
                        }
                    }
                }
            }
        }

        Library {
            name,
            entries: typed_entries,
            position,
        }
    }
}

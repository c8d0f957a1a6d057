//! Ambient dictionaries the checker consults: algebraic data types,
//! built-in operators, and the host-injected names (implicit parameters,
//! blockchain values, message headers, read-only fields).

use once_cell::sync::Lazy;

use crate::ast::{IntWidth, Span};

use super::{
    error::{ArityMismatch, TypeCheckError, TypeMismatch, UndefinedConstructor},
    types::{PrimType, Type},
    TypeResult,
};

/// A single constructor of an algebraic type. Argument types are schematic
/// in the parent's type parameters, represented as `Type::TypeVar`s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constructor {
    pub name: String,
    pub arg_types: Vec<Type>,
}

impl Constructor {
    pub fn new(name: impl ToString, arg_types: Vec<Type>) -> Constructor {
        Constructor {
            name: name.to_string(),
            arg_types,
        }
    }

    pub fn arity(&self) -> usize {
        self.arg_types.len()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adt {
    pub name: String,
    pub type_params: Vec<String>,
    pub constructors: Vec<Constructor>,
}

impl Adt {
    pub fn new(
        name: impl ToString,
        type_params: Vec<&str>,
        constructors: Vec<Constructor>,
    ) -> Adt {
        Adt {
            name: name.to_string(),
            type_params: type_params.into_iter().map(String::from).collect(),
            constructors,
        }
    }
}

static STANDARD_ADTS: Lazy<Vec<Adt>> = Lazy::new(|| {
    vec![
        Adt::new(
            "Bool",
            vec![],
            vec![Constructor::new("True", vec![]), Constructor::new("False", vec![])],
        ),
        Adt::new(
            "Option",
            vec!["A"],
            vec![
                Constructor::new("Some", vec![Type::tvar("A")]),
                Constructor::new("None", vec![]),
            ],
        ),
        Adt::new(
            "List",
            vec!["A"],
            vec![
                Constructor::new(
                    "Cons",
                    vec![Type::tvar("A"), Type::list_of(Type::tvar("A"))],
                ),
                Constructor::new("Nil", vec![]),
            ],
        ),
        Adt::new(
            "Nat",
            vec![],
            vec![
                Constructor::new("Zero", vec![]),
                Constructor::new("Succ", vec![Type::nat_adt()]),
            ],
        ),
        Adt::new(
            "Pair",
            vec!["A", "B"],
            vec![Constructor::new(
                "Pair",
                vec![Type::tvar("A"), Type::tvar("B")],
            )],
        ),
    ]
});

/// Dictionary of the algebraic types in scope. Registration of user types
/// happens before checking starts; during checking the dictionary is
/// read-only.
#[derive(Clone, Debug)]
pub struct AdtRegistry {
    adts: Vec<Adt>,
}

impl Default for AdtRegistry {
    fn default() -> Self {
        AdtRegistry {
            adts: STANDARD_ADTS.clone(),
        }
    }
}

impl AdtRegistry {
    pub fn standard() -> AdtRegistry {
        AdtRegistry::default()
    }

    /// Later registrations shadow earlier ones of the same name.
    pub fn register(&mut self, adt: Adt) {
        self.adts.push(adt);
    }

    pub fn lookup(&self, name: &str) -> Option<&Adt> {
        self.adts.iter().rev().find(|adt| adt.name == name)
    }

    pub fn lookup_constructor(&self, name: &str) -> Option<(&Adt, &Constructor)> {
        self.adts.iter().rev().find_map(|adt| {
            adt.constructors
                .iter()
                .find(|ctr| ctr.name == name)
                .map(|ctr| (adt, ctr))
        })
    }

    /// The function type a constructor denotes once its parent type is
    /// instantiated with `type_args`:
    /// `a1 -> ... -> an -> Name targ1 .. targk`.
    pub fn elab_constr_type(
        &self,
        name: &str,
        type_args: &[Type],
        position: &Span,
    ) -> TypeResult<Type> {
        let Some((adt, ctr)) = self.lookup_constructor(name) else {
            return Err(TypeCheckError::UndefinedConstructor(
                UndefinedConstructor {
                    constructor_name: name.to_string(),
                },
                position.clone(),
            ));
        };

        if adt.type_params.len() != type_args.len() {
            return Err(TypeCheckError::ArityMismatch(
                ArityMismatch::new(
                    format!("type instantiation of '{name}'"),
                    adt.type_params.len(),
                    type_args.len(),
                ),
                position.clone(),
            ));
        }

        let result = Type::Adt(adt.name.clone(), type_args.to_vec());

        let fun_type = ctr
            .arg_types
            .iter()
            .map(|arg| Self::instantiate(arg, &adt.type_params, type_args))
            .rev()
            .fold(result, |acc, arg| Type::fun(arg, acc));

        Ok(fun_type)
    }

    /// Dual of [`Self::elab_constr_type`]: the argument types a constructor
    /// pattern destructures, given the (already instantiated) scrutinee.
    pub fn constr_pattern_arg_types(
        &self,
        scrutinee: &Type,
        name: &str,
        position: &Span,
    ) -> TypeResult<Vec<Type>> {
        let Some((adt, ctr)) = self.lookup_constructor(name) else {
            return Err(TypeCheckError::UndefinedConstructor(
                UndefinedConstructor {
                    constructor_name: name.to_string(),
                },
                position.clone(),
            ));
        };

        match scrutinee {
            Type::Adt(scrutinee_name, type_args) if *scrutinee_name == adt.name => {
                if type_args.len() != adt.type_params.len() {
                    unreachable!(
                        "instantiation of '{}' with {} argument(s) escaped well-formedness checking",
                        adt.name,
                        type_args.len()
                    );
                }

                Ok(ctr
                    .arg_types
                    .iter()
                    .map(|arg| Self::instantiate(arg, &adt.type_params, type_args))
                    .collect())
            }
            _ => Err(TypeCheckError::TypeMismatch(
                TypeMismatch {
                    expected: Type::Adt(
                        adt.name.clone(),
                        adt.type_params.iter().map(Type::tvar).collect(),
                    ),
                    got: scrutinee.clone(),
                },
                position.clone(),
            )),
        }
    }

    fn instantiate(schema: &Type, params: &[String], type_args: &[Type]) -> Type {
        params
            .iter()
            .zip(type_args)
            .fold(schema.clone(), |acc, (param, arg)| acc.subst(param, arg))
    }
}

/// Resolved signature of a built-in operator for a concrete argument list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltinSig {
    pub params: Vec<Type>,
    pub ret: Type,
}

impl BuiltinSig {
    fn new(params: Vec<Type>, ret: Type) -> Option<BuiltinSig> {
        Some(BuiltinSig { params, ret })
    }
}

/// Built-in operators are overloaded on their argument types; resolution is
/// by operator name plus the full argument type vector.
#[derive(Clone, Debug, Default)]
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    pub fn find_builtin_op(&self, op: &str, arg_types: &[Type]) -> Option<BuiltinSig> {
        use PrimType::*;

        match (op, arg_types) {
            ("eq", [left, right]) if left == right && matches!(left, Type::Prim(_)) => {
                BuiltinSig::new(vec![left.clone(), right.clone()], Type::bool_adt())
            }
            ("lt", [left @ Type::Prim(Int(w1)), Type::Prim(Int(w2))]) if w1 == w2 => {
                BuiltinSig::new(vec![left.clone(), left.clone()], Type::bool_adt())
            }
            ("lt", [left @ Type::Prim(Uint(w1)), Type::Prim(Uint(w2))]) if w1 == w2 => {
                BuiltinSig::new(vec![left.clone(), left.clone()], Type::bool_adt())
            }
            ("add" | "sub" | "mul" | "div" | "rem", [left, right]) if left == right => {
                match left {
                    Type::Prim(Int(_)) | Type::Prim(Uint(_)) => {
                        BuiltinSig::new(vec![left.clone(), right.clone()], left.clone())
                    }
                    _ => None,
                }
            }
            ("pow", [base @ (Type::Prim(Int(_)) | Type::Prim(Uint(_))), Type::Prim(Uint(IntWidth::W32))]) => {
                BuiltinSig::new(vec![base.clone(), Type::uint32()], base.clone())
            }
            ("blt", [Type::Prim(BNum), Type::Prim(BNum)]) => {
                BuiltinSig::new(vec![Type::bnum(), Type::bnum()], Type::bool_adt())
            }
            ("badd", [Type::Prim(BNum), step @ Type::Prim(Uint(_))]) => {
                BuiltinSig::new(vec![Type::bnum(), step.clone()], Type::bnum())
            }
            ("bsub", [Type::Prim(BNum), Type::Prim(BNum)]) => {
                BuiltinSig::new(vec![Type::bnum(), Type::bnum()], Type::int(IntWidth::W256))
            }
            ("concat", [Type::Prim(String), Type::Prim(String)]) => {
                BuiltinSig::new(vec![Type::string(), Type::string()], Type::string())
            }
            ("concat", [Type::Prim(ByStrX(len1)), Type::Prim(ByStrX(len2))]) => BuiltinSig::new(
                vec![Type::bystr_x(*len1), Type::bystr_x(*len2)],
                Type::bystr_x(len1 + len2),
            ),
            ("substr", [Type::Prim(String), Type::Prim(Uint(IntWidth::W32)), Type::Prim(Uint(IntWidth::W32))]) => {
                BuiltinSig::new(
                    vec![Type::string(), Type::uint32(), Type::uint32()],
                    Type::string(),
                )
            }
            ("strlen", [Type::Prim(String)]) => {
                BuiltinSig::new(vec![Type::string()], Type::uint32())
            }
            ("sha256hash", [arg]) => BuiltinSig::new(vec![arg.clone()], Type::bystr_x(32)),
            ("to_bystr", [Type::Prim(ByStrX(len))]) => {
                BuiltinSig::new(vec![Type::bystr_x(*len)], Type::bystr())
            }
            ("to_nat", [Type::Prim(Uint(IntWidth::W32))]) => {
                BuiltinSig::new(vec![Type::uint32()], Type::nat_adt())
            }
            ("to_uint256", [arg @ Type::Prim(Uint(_))]) => {
                BuiltinSig::new(vec![arg.clone()], Type::uint(IntWidth::W256))
            }
            _ => None,
        }
    }
}

/// Whether a message literal denotes an outgoing message or an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Message,
    Event,
}

impl MessageKind {
    pub fn result_type(&self) -> Type {
        match self {
            MessageKind::Message => Type::msg(),
            MessageKind::Event => Type::event(),
        }
    }
}

/// Host-injected names and policies: implicit parameters, the balance
/// field, blockchain values, mandatory message headers and read-only
/// fields. Kept as data so the checker never hard-codes them.
#[derive(Clone, Debug)]
pub struct HostRegistry {
    contract_params: Vec<(String, Type)>,
    transition_params: Vec<(String, Type)>,
    balance_field: (String, Type),
    blockchain_fields: Vec<(String, Type)>,
    message_headers: Vec<(String, Type)>,
    event_headers: Vec<(String, Type)>,
    read_only_fields: Vec<String>,
}

impl Default for HostRegistry {
    fn default() -> Self {
        HostRegistry {
            contract_params: vec![
                ("_this_address".into(), Type::address()),
                ("_creation_block".into(), Type::bnum()),
            ],
            transition_params: vec![
                ("_sender".into(), Type::address()),
                ("_amount".into(), Type::uint128()),
            ],
            balance_field: ("_balance".into(), Type::uint128()),
            blockchain_fields: vec![("BLOCKNUMBER".into(), Type::bnum())],
            message_headers: vec![
                ("_tag".into(), Type::string()),
                ("_recipient".into(), Type::address()),
                ("_amount".into(), Type::uint128()),
            ],
            event_headers: vec![("_eventname".into(), Type::string())],
            read_only_fields: vec!["_balance".into()],
        }
    }
}

impl HostRegistry {
    pub fn contract_params(&self) -> &[(String, Type)] {
        &self.contract_params
    }

    pub fn transition_params(&self) -> &[(String, Type)] {
        &self.transition_params
    }

    pub fn balance_field(&self) -> &(String, Type) {
        &self.balance_field
    }

    pub fn blockchain_field(&self, name: &str) -> Option<&Type> {
        self.blockchain_fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, ty)| ty)
    }

    pub fn is_read_only(&self, field: &str) -> bool {
        self.read_only_fields.iter().any(|name| name == field)
    }

    /// A payload carrying any event header is an event; everything else is
    /// an outgoing message.
    pub fn payload_kind<'a>(&self, mut field_names: impl Iterator<Item = &'a str>) -> MessageKind {
        if field_names.any(|name| self.event_headers.iter().any(|(header, _)| header == name)) {
            MessageKind::Event
        } else {
            MessageKind::Message
        }
    }

    pub fn mandatory_headers(&self, kind: MessageKind) -> &[(String, Type)] {
        match kind {
            MessageKind::Message => &self.message_headers,
            MessageKind::Event => &self.event_headers,
        }
    }

    pub fn header_type(&self, kind: MessageKind, field: &str) -> Option<&Type> {
        self.mandatory_headers(kind)
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, ty)| ty)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Span;
    use crate::typechecker::error::TypeCheckError;
    use crate::typechecker::types::Type;

    use super::{Adt, AdtRegistry, BuiltinDictionary, Constructor, HostRegistry, MessageKind};

    #[test]
    fn test_standard_constructor_lookup() {
        let registry = AdtRegistry::standard();

        let (adt, ctr) = registry.lookup_constructor("Cons").expect("Cons is standard");
        assert_eq!(adt.name, "List");
        assert_eq!(ctr.arity(), 2);
    }

    #[test]
    fn test_elab_constr_type() {
        let registry = AdtRegistry::standard();

        let some = registry
            .elab_constr_type("Some", &[Type::bystr_x(32)], &Span::default())
            .expect("Some is standard");

        assert_eq!(
            some,
            Type::fun(Type::bystr_x(32), Type::option_of(Type::bystr_x(32)))
        );
    }

    #[test]
    fn test_elab_rejects_wrong_type_arity() {
        let registry = AdtRegistry::standard();

        assert!(matches!(
            registry.elab_constr_type("Some", &[], &Span::default()),
            Err(TypeCheckError::ArityMismatch(..))
        ));
    }

    #[test]
    fn test_pattern_arg_types() {
        let registry = AdtRegistry::standard();
        let scrutinee = Type::list_of(Type::uint128());

        let args = registry
            .constr_pattern_arg_types(&scrutinee, "Cons", &Span::default())
            .expect("Cons destructures a list");

        assert_eq!(args, vec![Type::uint128(), Type::list_of(Type::uint128())]);
    }

    #[test]
    fn test_pattern_against_foreign_type() {
        let registry = AdtRegistry::standard();

        assert!(matches!(
            registry.constr_pattern_arg_types(&Type::bool_adt(), "Cons", &Span::default()),
            Err(TypeCheckError::TypeMismatch(..))
        ));
    }

    #[test]
    fn test_user_types_shadow() {
        let mut registry = AdtRegistry::standard();
        registry.register(Adt::new(
            "Color",
            vec![],
            vec![Constructor::new("Red", vec![]), Constructor::new("Blue", vec![])],
        ));

        assert!(registry.lookup("Color").is_some());
        assert!(registry.lookup_constructor("Red").is_some());
    }

    #[test]
    fn test_builtin_resolution() {
        let builtins = BuiltinDictionary;

        let add = builtins
            .find_builtin_op("add", &[Type::uint128(), Type::uint128()])
            .expect("uint addition exists");
        assert_eq!(add.ret, Type::uint128());

        let concat = builtins
            .find_builtin_op("concat", &[Type::bystr_x(16), Type::bystr_x(4)])
            .expect("byte string concat exists");
        assert_eq!(concat.ret, Type::bystr_x(20));

        assert!(builtins
            .find_builtin_op("add", &[Type::string(), Type::uint128()])
            .is_none());
    }

    #[test]
    fn test_payload_kind() {
        let host = HostRegistry::default();

        assert_eq!(
            host.payload_kind(["_tag", "_recipient", "_amount"].into_iter()),
            MessageKind::Message
        );
        assert_eq!(
            host.payload_kind(["_eventname", "code"].into_iter()),
            MessageKind::Event
        );
    }
}

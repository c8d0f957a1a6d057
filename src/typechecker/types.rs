use std::collections::HashMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::ast::{IntWidth, Literal, Span, TypeName};

use super::{
    context::Context,
    error::{ArityMismatch, NotWellFormed, TypeCheckError, TypeMismatch},
    TypeResult,
};

/// The fixed set of primitive types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimType {
    Int(IntWidth),
    Uint(IntWidth),
    String,
    /// Block numbers.
    BNum,
    /// Byte string of arbitrary length.
    ByStr,
    /// Byte string of exactly the given length; `ByStr20` is an address.
    ByStrX(usize),
    Msg,
    Event,
}

impl PrimType {
    /// Resolve a primitive type from its surface name.
    pub fn parse(name: &str) -> Option<PrimType> {
        match name {
            "String" => Some(PrimType::String),
            "BNum" => Some(PrimType::BNum),
            "Message" => Some(PrimType::Msg),
            "Event" => Some(PrimType::Event),
            "ByStr" => Some(PrimType::ByStr),
            _ => {
                if let Some(rest) = name.strip_prefix("ByStr") {
                    return rest.parse::<usize>().ok().filter(|n| *n > 0).map(PrimType::ByStrX);
                }
                if let Some(rest) = name.strip_prefix("Int") {
                    return Self::parse_width(rest).map(PrimType::Int);
                }
                if let Some(rest) = name.strip_prefix("Uint") {
                    return Self::parse_width(rest).map(PrimType::Uint);
                }
                None
            }
        }
    }

    fn parse_width(digits: &str) -> Option<IntWidth> {
        match digits {
            "32" => Some(IntWidth::W32),
            "64" => Some(IntWidth::W64),
            "128" => Some(IntWidth::W128),
            "256" => Some(IntWidth::W256),
            _ => None,
        }
    }
}

impl Display for PrimType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimType::Int(width) => write!(f, "Int{width}"),
            PrimType::Uint(width) => write!(f, "Uint{width}"),
            PrimType::String => write!(f, "String"),
            PrimType::BNum => write!(f, "BNum"),
            PrimType::ByStr => write!(f, "ByStr"),
            PrimType::ByStrX(len) => write!(f, "ByStr{len}"),
            PrimType::Msg => write!(f, "Message"),
            PrimType::Event => write!(f, "Event"),
        }
    }
}

/// Semantic type representation the checker computes with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Prim(PrimType),
    /// Keys are restricted to primitive types.
    Map(Box<Type>, Box<Type>),
    Fun(Box<Type>, Box<Type>),
    /// Named algebraic type with positional type arguments.
    Adt(String, Vec<Type>),
    /// Free only under an enclosing `Poly`.
    TypeVar(String),
    /// Universal quantification over a single type variable.
    Poly(String, Box<Type>),
}

impl Type {
    pub fn int(width: IntWidth) -> Type {
        Type::Prim(PrimType::Int(width))
    }

    pub fn uint(width: IntWidth) -> Type {
        Type::Prim(PrimType::Uint(width))
    }

    pub fn uint32() -> Type {
        Type::uint(IntWidth::W32)
    }

    pub fn uint128() -> Type {
        Type::uint(IntWidth::W128)
    }

    pub fn string() -> Type {
        Type::Prim(PrimType::String)
    }

    pub fn bnum() -> Type {
        Type::Prim(PrimType::BNum)
    }

    pub fn bystr() -> Type {
        Type::Prim(PrimType::ByStr)
    }

    pub fn bystr_x(len: usize) -> Type {
        Type::Prim(PrimType::ByStrX(len))
    }

    pub fn address() -> Type {
        Type::bystr_x(20)
    }

    pub fn msg() -> Type {
        Type::Prim(PrimType::Msg)
    }

    pub fn event() -> Type {
        Type::Prim(PrimType::Event)
    }

    pub fn bool_adt() -> Type {
        Type::Adt("Bool".into(), vec![])
    }

    pub fn nat_adt() -> Type {
        Type::Adt("Nat".into(), vec![])
    }

    pub fn option_of(inner: Type) -> Type {
        Type::Adt("Option".into(), vec![inner])
    }

    pub fn list_of(inner: Type) -> Type {
        Type::Adt("List".into(), vec![inner])
    }

    pub fn pair_of(first: Type, second: Type) -> Type {
        Type::Adt("Pair".into(), vec![first, second])
    }

    pub fn fun(arg: Type, ret: Type) -> Type {
        Type::Fun(Box::new(arg), Box::new(ret))
    }

    pub fn map_of(key: Type, value: Type) -> Type {
        Type::Map(Box::new(key), Box::new(value))
    }

    pub fn tvar(name: impl ToString) -> Type {
        Type::TypeVar(name.to_string())
    }

    pub fn poly(type_var: impl ToString, body: Type) -> Type {
        Type::Poly(type_var.to_string(), Box::new(body))
    }

    /// Semantic equality modulo renaming of `Poly` binders.
    pub fn does_eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }

    /// Rename every `Poly` binder to a positional name so that structural
    /// equality becomes alpha-equivalence.
    fn canonical(&self) -> Type {
        fn go(ty: &Type, renames: &HashMap<String, String>, counter: &mut usize) -> Type {
            match ty {
                Type::Prim(prim) => Type::Prim(*prim),
                Type::Map(key, value) => Type::Map(
                    Box::new(go(key, renames, counter)),
                    Box::new(go(value, renames, counter)),
                ),
                Type::Fun(arg, ret) => Type::Fun(
                    Box::new(go(arg, renames, counter)),
                    Box::new(go(ret, renames, counter)),
                ),
                Type::Adt(name, args) => Type::Adt(
                    name.clone(),
                    args.iter().map(|arg| go(arg, renames, counter)).collect(),
                ),
                Type::TypeVar(name) => Type::TypeVar(
                    renames.get(name).cloned().unwrap_or_else(|| name.clone()),
                ),
                Type::Poly(type_var, body) => {
                    let fresh = format!("_{counter}");
                    *counter += 1;
                    let mut renames = renames.clone();
                    renames.insert(type_var.clone(), fresh.clone());
                    Type::Poly(fresh, Box::new(go(body, &renames, counter)))
                }
            }
        }

        go(self, &HashMap::new(), &mut 0)
    }

    /// Substitute `replacement` for the free occurrences of `type_var`.
    pub fn subst(&self, type_var: &str, replacement: &Type) -> Type {
        match self {
            Type::Prim(_) => self.clone(),
            Type::Map(key, value) => Type::Map(
                Box::new(key.subst(type_var, replacement)),
                Box::new(value.subst(type_var, replacement)),
            ),
            Type::Fun(arg, ret) => Type::Fun(
                Box::new(arg.subst(type_var, replacement)),
                Box::new(ret.subst(type_var, replacement)),
            ),
            Type::Adt(name, args) => Type::Adt(
                name.clone(),
                args.iter()
                    .map(|arg| arg.subst(type_var, replacement))
                    .collect(),
            ),
            Type::TypeVar(name) if name == type_var => replacement.clone(),
            Type::TypeVar(_) => self.clone(),
            // an inner binder of the same name shadows the substitution
            Type::Poly(inner, _) if inner == type_var => self.clone(),
            Type::Poly(inner, body) => Type::Poly(
                inner.clone(),
                Box::new(body.subst(type_var, replacement)),
            ),
        }
    }

    fn arrow_arity(&self) -> usize {
        match self {
            Type::Fun(_, ret) => 1 + ret.arrow_arity(),
            _ => 0,
        }
    }

    fn poly_arity(&self) -> usize {
        match self {
            Type::Poly(_, body) => 1 + body.poly_arity(),
            _ => 0,
        }
    }

    /// Apply a function type to actual argument types, arrow by arrow,
    /// yielding the final codomain.
    pub fn applied_to(&self, actuals: &[Type], position: &Span) -> TypeResult<Type> {
        let mut current = self.clone();

        for actual in actuals {
            match current {
                Type::Fun(arg, ret) => {
                    assert_type_equiv(&arg, actual, position)?;
                    current = *ret;
                }
                _ => {
                    return Err(TypeCheckError::ArityMismatch(
                        ArityMismatch::new("function application", self.arrow_arity(), actuals.len()),
                        position.clone(),
                    ));
                }
            }
        }

        Ok(current)
    }

    /// Instantiate nested `Poly` binders, in order, with the given types.
    pub fn elab_with_type_args(&self, type_args: &[Type], position: &Span) -> TypeResult<Type> {
        let mut current = self.clone();

        for type_arg in type_args {
            match current {
                Type::Poly(type_var, body) => {
                    current = body.subst(&type_var, type_arg);
                }
                _ => {
                    return Err(TypeCheckError::ArityMismatch(
                        ArityMismatch::new("type application", self.poly_arity(), type_args.len()),
                        position.clone(),
                    ));
                }
            }
        }

        Ok(current)
    }

    /// Whether a value of this type may live in a contract field.
    pub fn is_storable(&self) -> bool {
        match self {
            Type::Prim(PrimType::Msg) | Type::Prim(PrimType::Event) => false,
            Type::Prim(_) => true,
            Type::Map(key, value) => key.is_storable() && value.is_storable(),
            Type::Fun(..) | Type::Poly(..) | Type::TypeVar(_) => false,
            Type::Adt(_, args) => args.iter().all(|arg| arg.is_storable()),
        }
    }

    /// Whether a value of this type may cross the contract boundary as a
    /// transition parameter or message payload. Maps are storable but stay
    /// inside the contract.
    pub fn is_serializable(&self) -> bool {
        match self {
            Type::Map(..) => false,
            Type::Adt(_, args) => args.iter().all(|arg| arg.is_serializable()),
            _ => self.is_storable(),
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Prim(prim) => write!(f, "{prim}"),
            Type::Map(key, value) => write!(f, "Map ({key}) ({value})"),
            Type::Fun(arg, ret) => match arg.as_ref() {
                Type::Fun(..) | Type::Poly(..) => write!(f, "({arg}) -> {ret}"),
                _ => write!(f, "{arg} -> {ret}"),
            },
            Type::Adt(name, args) => {
                write!(f, "{name}")?;
                for arg in args {
                    write!(f, " ({arg})")?;
                }
                Ok(())
            }
            Type::TypeVar(name) => write!(f, "'{name}"),
            Type::Poly(type_var, body) => write!(f, "forall '{type_var}. {body}"),
        }
    }
}

/// The qualification slot is reserved for refinements; today every type the
/// checker produces is plain. It must survive decoration untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeQualifier {
    #[default]
    Plain,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedType {
    pub type_id: Type,
    pub qualifier: TypeQualifier,
}

impl QualifiedType {
    pub fn plain(type_id: Type) -> QualifiedType {
        QualifiedType {
            type_id,
            qualifier: TypeQualifier::Plain,
        }
    }
}

impl Display for QualifiedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_id)
    }
}

/// Check two types for semantic equality, producing a mismatch diagnostic
/// anchored at `position` otherwise.
pub fn assert_type_equiv(expected: &Type, got: &Type, position: &Span) -> TypeResult<()> {
    if expected.does_eq(got) {
        Ok(())
    } else {
        Err(TypeCheckError::TypeMismatch(
            TypeMismatch {
                expected: expected.clone(),
                got: got.clone(),
            },
            position.clone(),
        ))
    }
}

/// The type of a literal follows directly from its tag.
pub fn literal_type(literal: &Literal) -> Type {
    match literal {
        Literal::StringLit(_) => Type::string(),
        Literal::IntLit(width, _) => Type::int(*width),
        Literal::UintLit(width, _) => Type::uint(*width),
        Literal::BNumLit(_) => Type::bnum(),
        Literal::ByStrXLit(bytes) => Type::bystr_x(bytes.len()),
    }
}

/// Resolve a syntactic type against the current context. This is where
/// well-formedness is enforced: primitive names must not take arguments,
/// named algebraic types must exist and be fully applied, type variables
/// must be in scope, and map keys must be primitive.
impl TryFrom<(&TypeName, &Context)> for Type {
    type Error = TypeCheckError;

    fn try_from((value, ctx): (&TypeName, &Context)) -> Result<Self, Self::Error> {
        match value {
            TypeName::Named { name, args, position } => {
                if let Some(prim) = PrimType::parse(name) {
                    if !args.is_empty() {
                        return Err(TypeCheckError::ArityMismatch(
                            ArityMismatch::new(format!("type '{name}'"), 0, args.len()),
                            position.clone(),
                        ));
                    }
                    return Ok(Type::Prim(prim));
                }

                let Some(adt) = ctx.adts.lookup(name) else {
                    return Err(TypeCheckError::NotWellFormed(
                        NotWellFormed {
                            type_name: value.clone(),
                        },
                        position.clone(),
                    ));
                };

                if adt.type_params.len() != args.len() {
                    return Err(TypeCheckError::ArityMismatch(
                        ArityMismatch::new(
                            format!("type '{name}'"),
                            adt.type_params.len(),
                            args.len(),
                        ),
                        position.clone(),
                    ));
                }

                let mut type_args = vec![];
                for arg in args {
                    type_args.push((arg, ctx).try_into()?);
                }

                Ok(Type::Adt(name.clone(), type_args))
            }
            TypeName::Var { name, position } => {
                if ctx.env.has_type_var(name) {
                    Ok(Type::TypeVar(name.clone()))
                } else {
                    Err(TypeCheckError::NotWellFormed(
                        NotWellFormed {
                            type_name: value.clone(),
                        },
                        position.clone(),
                    ))
                }
            }
            TypeName::Map { key, value: map_value, .. } => {
                let key_type: Type = (key.as_ref(), ctx).try_into()?;

                if !matches!(key_type, Type::Prim(_)) {
                    return Err(TypeCheckError::NotWellFormed(
                        NotWellFormed {
                            type_name: key.as_ref().clone(),
                        },
                        key.position(),
                    ));
                }

                let value_type: Type = (map_value.as_ref(), ctx).try_into()?;
                Ok(Type::Map(Box::new(key_type), Box::new(value_type)))
            }
            TypeName::Fun { arg, ret, .. } => Ok(Type::Fun(
                Box::new((arg.as_ref(), ctx).try_into()?),
                Box::new((ret.as_ref(), ctx).try_into()?),
            )),
            TypeName::Poly { type_var, body, .. } => {
                let mut inner = ctx.clone();
                inner.env.add_type_var(type_var);

                Ok(Type::Poly(
                    type_var.clone(),
                    Box::new((body.as_ref(), &inner).try_into()?),
                ))
            }
        }
    }
}

impl TryFrom<(&TypeName, &Context)> for QualifiedType {
    type Error = TypeCheckError;

    fn try_from(value: (&TypeName, &Context)) -> Result<Self, Self::Error> {
        Ok(QualifiedType::plain(value.try_into()?))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{IntWidth, Literal, Span, TypeName};
    use crate::typechecker::{
        context::Context,
        error::TypeCheckError,
        types::{assert_type_equiv, literal_type, Type},
    };

    #[test]
    fn test_primitive_names() {
        let ctx = Context::default();

        assert_eq!(
            Type::try_from((&TypeName::named("Uint128"), &ctx)),
            Ok(Type::uint128())
        );
        assert_eq!(
            Type::try_from((&TypeName::named("ByStr20"), &ctx)),
            Ok(Type::address())
        );
        assert_eq!(
            Type::try_from((&TypeName::named("BNum"), &ctx)),
            Ok(Type::bnum())
        );
    }

    #[test]
    fn test_unknown_type_name() {
        let ctx = Context::default();

        assert!(matches!(
            Type::try_from((&TypeName::named("Uint42"), &ctx)),
            Err(TypeCheckError::NotWellFormed(..))
        ));
    }

    #[test]
    fn test_adt_resolution() {
        let ctx = Context::default();
        let option_bystr32 =
            TypeName::named_with_args("Option", vec![TypeName::named("ByStr32")]);

        assert_eq!(
            Type::try_from((&option_bystr32, &ctx)),
            Ok(Type::option_of(Type::bystr_x(32)))
        );
    }

    #[test]
    fn test_adt_type_arg_arity() {
        let ctx = Context::default();

        assert!(matches!(
            Type::try_from((&TypeName::named("Option"), &ctx)),
            Err(TypeCheckError::ArityMismatch(..))
        ));
    }

    #[test]
    fn test_free_type_var_is_rejected() {
        let ctx = Context::default();

        assert!(matches!(
            Type::try_from((&TypeName::var("A"), &ctx)),
            Err(TypeCheckError::NotWellFormed(..))
        ));

        assert_eq!(
            Type::try_from((&TypeName::poly("A", TypeName::var("A")), &ctx)),
            Ok(Type::poly("A", Type::tvar("A")))
        );
    }

    #[test]
    fn test_map_key_must_be_primitive() {
        let ctx = Context::default();
        let bad = TypeName::map(
            TypeName::named_with_args("Option", vec![TypeName::named("Uint32")]),
            TypeName::named("Uint32"),
        );

        assert!(matches!(
            Type::try_from((&bad, &ctx)),
            Err(TypeCheckError::NotWellFormed(..))
        ));
    }

    #[test]
    fn test_alpha_equivalence() {
        let left = Type::poly("A", Type::fun(Type::tvar("A"), Type::tvar("A")));
        let right = Type::poly("B", Type::fun(Type::tvar("B"), Type::tvar("B")));

        assert!(left.does_eq(&right));
        assert!(assert_type_equiv(&left, &right, &Span::default()).is_ok());
    }

    #[test]
    fn test_inequivalent_types() {
        assert!(assert_type_equiv(&Type::uint128(), &Type::uint32(), &Span::default()).is_err());
    }

    #[test]
    fn test_substitution_respects_shadowing() {
        let ty = Type::poly("A", Type::fun(Type::tvar("A"), Type::tvar("B")));
        let substituted = ty.subst("B", &Type::uint32());

        assert_eq!(
            substituted,
            Type::poly("A", Type::fun(Type::tvar("A"), Type::uint32()))
        );

        // the bound variable is untouched
        assert_eq!(ty.subst("A", &Type::uint32()), ty);
    }

    #[test]
    fn test_function_application() {
        let fty = Type::fun(Type::uint32(), Type::fun(Type::uint32(), Type::bool_adt()));

        assert_eq!(
            fty.applied_to(&[Type::uint32(), Type::uint32()], &Span::default()),
            Ok(Type::bool_adt())
        );

        assert!(matches!(
            fty.applied_to(
                &[Type::uint32(), Type::uint32(), Type::uint32()],
                &Span::default()
            ),
            Err(TypeCheckError::ArityMismatch(..))
        ));

        assert!(matches!(
            fty.applied_to(&[Type::string()], &Span::default()),
            Err(TypeCheckError::TypeMismatch(..))
        ));
    }

    #[test]
    fn test_type_function_elaboration() {
        let identity = Type::poly("A", Type::fun(Type::tvar("A"), Type::tvar("A")));

        assert_eq!(
            identity.elab_with_type_args(&[Type::string()], &Span::default()),
            Ok(Type::fun(Type::string(), Type::string()))
        );

        assert!(matches!(
            identity.elab_with_type_args(&[Type::string(), Type::bnum()], &Span::default()),
            Err(TypeCheckError::ArityMismatch(..))
        ));
    }

    #[test]
    fn test_storability() {
        assert!(Type::map_of(Type::address(), Type::uint128()).is_storable());
        assert!(Type::option_of(Type::bnum()).is_storable());
        assert!(!Type::msg().is_storable());
        assert!(!Type::fun(Type::uint32(), Type::uint32()).is_storable());
        assert!(!Type::list_of(Type::event()).is_storable());
    }

    #[test]
    fn test_serializability_excludes_maps() {
        assert!(Type::uint128().is_serializable());
        assert!(!Type::map_of(Type::address(), Type::uint128()).is_serializable());
        assert!(!Type::option_of(Type::map_of(Type::address(), Type::uint128())).is_serializable());
    }

    #[test]
    fn test_literal_types() {
        assert_eq!(literal_type(&Literal::StringLit("hi".into())), Type::string());
        assert_eq!(
            literal_type(&Literal::UintLit(IntWidth::W128, "0".into())),
            Type::uint128()
        );
        assert_eq!(literal_type(&Literal::ByStrXLit(vec![0xab, 0xad])), Type::bystr_x(2));
    }
}

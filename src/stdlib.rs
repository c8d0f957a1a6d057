//! The recursion primitives every module is checked against. They
//! bootstrap the standard library: user code folds over lists and naturals
//! through these bindings instead of writing its own fixpoints.

use crate::ast::{
    App, Expression, FunDef, Fixpoint, Id, LetIn, LibEntry, LibVar, MatchClause, MatchExpr,
    Pattern, Span, TypeFun, TypeName,
};

fn var(name: &str) -> Expression<()> {
    Expression::Var(Id::new(name))
}

fn app(func: &str, args: &[&str]) -> Expression<()> {
    Expression::App(App {
        func: Id::new(func),
        args: args.iter().map(Id::new).collect(),
        info: (),
        position: Span::default(),
    })
}

fn let_in(binder: &str, value: Expression<()>, body: Expression<()>) -> Expression<()> {
    Expression::Let(LetIn {
        binder: Id::new(binder),
        annotation: None,
        value: Box::new(value),
        body: Box::new(body),
        info: (),
        position: Span::default(),
    })
}

fn fun(param: &str, param_type: TypeName, body: Expression<()>) -> Expression<()> {
    Expression::FunDef(FunDef {
        param: Id::new(param),
        param_type,
        body: Box::new(body),
        info: (),
        position: Span::default(),
    })
}

fn fix(binder: &str, annotation: TypeName, body: Expression<()>) -> Expression<()> {
    Expression::Fixpoint(Fixpoint {
        binder: Id::new(binder),
        annotation,
        body: Box::new(body),
        info: (),
        position: Span::default(),
    })
}

fn tfun(type_var: &str, body: Expression<()>) -> Expression<()> {
    Expression::TFun(TypeFun {
        type_var: type_var.into(),
        body: Box::new(body),
        info: (),
        position: Span::default(),
    })
}

fn match_on(scrutinee: &str, clauses: Vec<(Pattern<()>, Expression<()>)>) -> Expression<()> {
    Expression::Match(MatchExpr {
        scrutinee: Id::new(scrutinee),
        clauses: clauses
            .into_iter()
            .map(|(pattern, body)| MatchClause {
                pattern,
                body,
                position: Span::default(),
            })
            .collect(),
        info: (),
        position: Span::default(),
    })
}

fn lib_var(name: &str, expr: Expression<()>) -> LibEntry<()> {
    LibEntry::Var(LibVar {
        name: Id::new(name),
        expr,
        position: Span::default(),
    })
}

fn list_of(element: TypeName) -> TypeName {
    TypeName::named_with_args("List", vec![element])
}

/// `forall 'A. forall 'B. ('B -> 'A -> 'B) -> 'B -> List 'A -> 'B`
fn list_foldl() -> Expression<()> {
    let step = TypeName::fun(
        TypeName::var("B"),
        TypeName::fun(TypeName::var("A"), TypeName::var("B")),
    );
    let go = TypeName::fun(
        step.clone(),
        TypeName::fun(
            TypeName::var("B"),
            TypeName::fun(list_of(TypeName::var("A")), TypeName::var("B")),
        ),
    );

    tfun(
        "A",
        tfun(
            "B",
            fix(
                "go",
                go,
                fun(
                    "f",
                    step,
                    fun(
                        "z",
                        TypeName::var("B"),
                        fun(
                            "xs",
                            list_of(TypeName::var("A")),
                            match_on(
                                "xs",
                                vec![
                                    (
                                        Pattern::constructor(
                                            "Cons",
                                            vec![Pattern::binder("h"), Pattern::binder("t")],
                                        ),
                                        let_in("acc", app("f", &["z", "h"]), app("go", &["f", "acc", "t"])),
                                    ),
                                    (Pattern::constructor("Nil", vec![]), var("z")),
                                ],
                            ),
                        ),
                    ),
                ),
            ),
        ),
    )
}

/// `forall 'A. forall 'B. ('A -> 'B -> 'B) -> 'B -> List 'A -> 'B`
fn list_foldr() -> Expression<()> {
    let step = TypeName::fun(
        TypeName::var("A"),
        TypeName::fun(TypeName::var("B"), TypeName::var("B")),
    );
    let go = TypeName::fun(
        step.clone(),
        TypeName::fun(
            TypeName::var("B"),
            TypeName::fun(list_of(TypeName::var("A")), TypeName::var("B")),
        ),
    );

    tfun(
        "A",
        tfun(
            "B",
            fix(
                "go",
                go,
                fun(
                    "f",
                    step,
                    fun(
                        "z",
                        TypeName::var("B"),
                        fun(
                            "xs",
                            list_of(TypeName::var("A")),
                            match_on(
                                "xs",
                                vec![
                                    (
                                        Pattern::constructor(
                                            "Cons",
                                            vec![Pattern::binder("h"), Pattern::binder("t")],
                                        ),
                                        let_in("rest", app("go", &["f", "z", "t"]), app("f", &["h", "rest"])),
                                    ),
                                    (Pattern::constructor("Nil", vec![]), var("z")),
                                ],
                            ),
                        ),
                    ),
                ),
            ),
        ),
    )
}

/// `forall 'T. ('T -> Nat -> 'T) -> 'T -> Nat -> 'T`
fn nat_fold() -> Expression<()> {
    let step = TypeName::fun(
        TypeName::var("T"),
        TypeName::fun(TypeName::named("Nat"), TypeName::var("T")),
    );
    let go = TypeName::fun(
        step.clone(),
        TypeName::fun(
            TypeName::var("T"),
            TypeName::fun(TypeName::named("Nat"), TypeName::var("T")),
        ),
    );

    tfun(
        "T",
        fix(
            "go",
            go,
            fun(
                "f",
                step,
                fun(
                    "z",
                    TypeName::var("T"),
                    fun(
                        "n",
                        TypeName::named("Nat"),
                        match_on(
                            "n",
                            vec![
                                (
                                    Pattern::constructor("Succ", vec![Pattern::binder("m")]),
                                    let_in("acc", app("f", &["z", "m"]), app("go", &["f", "acc", "m"])),
                                ),
                                (Pattern::constructor("Zero", vec![]), var("z")),
                            ],
                        ),
                    ),
                ),
            ),
        ),
    )
}

/// The entries the module driver types before any user library.
pub fn recursion_primitives() -> Vec<LibEntry<()>> {
    vec![
        lib_var("list_foldl", list_foldl()),
        lib_var("list_foldr", list_foldr()),
        lib_var("nat_fold", nat_fold()),
    ]
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use crate::ast::LibEntry;
    use crate::typechecker::{context::Context, types::Type, TypeCheckable};

    use super::recursion_primitives;

    #[test]
    fn test_primitives_check_cleanly() -> Result<(), Box<dyn Error>> {
        let mut ctx = Context::default();

        for entry in recursion_primitives() {
            let LibEntry::Var(var) = entry else {
                panic!("recursion primitives are value bindings");
            };
            var.check(&mut ctx)?;
        }

        let foldl = ctx.env.resolve("list_foldl", &Default::default())?;
        let step = Type::fun(
            Type::tvar("B"),
            Type::fun(Type::tvar("A"), Type::tvar("B")),
        );
        let expected = Type::poly(
            "A",
            Type::poly(
                "B",
                Type::fun(
                    step,
                    Type::fun(
                        Type::tvar("B"),
                        Type::fun(Type::list_of(Type::tvar("A")), Type::tvar("B")),
                    ),
                ),
            ),
        );

        assert!(foldl.type_id.does_eq(&expected));
        assert!(ctx.env.contains("list_foldr"));
        assert!(ctx.env.contains("nat_fold"));

        Ok(())
    }
}

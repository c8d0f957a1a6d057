use crate::{
    ast::{Id, MapGet, MapUpdate, Span},
    typechecker::{
        context::Context,
        error::{ArityMismatch, TypeCheckError},
        typed_ast::expression::id::add_type_to_ident,
        types::{assert_type_equiv, QualifiedType, Type},
        TypeCheckable, TypeInformation, TypeResult,
    },
};

fn map_depth(ty: &Type) -> usize {
    match ty {
        Type::Map(_, value) => 1 + map_depth(value),
        _ => 0,
    }
}

/// Resolve the key identifiers and walk the map type along them, checking
/// each key against the key type at its depth. Returns the typed keys and
/// the type addressed by the full path.
fn check_access_path(
    map_type: &Type,
    keys: Vec<Id<()>>,
    position: &Span,
    ctx: &mut Context,
) -> TypeResult<(Vec<Id<TypeInformation>>, Type)> {
    let depth = map_depth(map_type);
    if keys.len() > depth {
        return Err(TypeCheckError::ArityMismatch(
            ArityMismatch::new("map access", depth, keys.len()),
            position.clone(),
        ));
    }

    let mut current = map_type.clone();
    let mut typed_keys = vec![];

    for key in keys {
        let Type::Map(key_type, value_type) = current else {
            unreachable!("map access path outlived the checked depth");
        };

        let resolved = ctx.env.resolve(&key.name, &key.position)?;
        assert_type_equiv(&key_type, &resolved.type_id, &key.position)?;

        typed_keys.push(add_type_to_ident(key, resolved, ctx));
        current = *value_type;
    }

    Ok((typed_keys, current))
}

impl TypeCheckable for MapUpdate<()> {
    type Typed = MapUpdate<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let MapUpdate {
            map,
            keys,
            value,
            position,
            ..
        } = self;

        let map_type = ctx.fields.resolve(&map.name, &map.position)?;
        let (keys, addressed) = check_access_path(&map_type.type_id, keys, &position, ctx)?;

        let value = match value {
            Some(value) => {
                let value_type = ctx.env.resolve(&value.name, &value.position)?;
                assert_type_equiv(&addressed, &value_type.type_id, &position)?;
                Some(add_type_to_ident(value, value_type, ctx))
            }
            None => {
                // deletion must address an entry, not an intermediate map
                if matches!(addressed, Type::Map(..)) {
                    return Err(TypeCheckError::ArityMismatch(
                        ArityMismatch::new(
                            "map access",
                            map_depth(&map_type.type_id),
                            keys.len(),
                        ),
                        position,
                    ));
                }
                None
            }
        };

        let map = add_type_to_ident(map, map_type.clone(), ctx);

        Ok(MapUpdate {
            map,
            keys,
            value,
            info: TypeInformation::new(map_type, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let MapUpdate {
            map,
            keys,
            value,
            position,
            ..
        } = this;

        MapUpdate {
            map: TypeCheckable::revert(map),
            keys: keys.iter().map(TypeCheckable::revert).collect(),
            value: value.as_ref().map(TypeCheckable::revert),
            info: (),
            position: position.clone(),
        }
    }
}

impl TypeCheckable for MapGet<()> {
    type Typed = MapGet<TypeInformation>;

    fn check(self, ctx: &mut Context) -> TypeResult<Self::Typed> {
        let MapGet {
            target,
            map,
            keys,
            fetch_value,
            position,
            ..
        } = self;

        let map_type = ctx.fields.resolve(&map.name, &map.position)?;
        let (keys, addressed) = check_access_path(&map_type.type_id, keys, &position, ctx)?;

        let bound = if fetch_value {
            Type::option_of(addressed)
        } else {
            Type::bool_adt()
        };
        let bound = QualifiedType::plain(bound);

        ctx.env.add(&target.name, bound.clone());

        let target = add_type_to_ident(target, bound.clone(), ctx);
        let map = add_type_to_ident(map, map_type, ctx);

        Ok(MapGet {
            target,
            map,
            keys,
            fetch_value,
            info: TypeInformation::new(bound, ctx),
            position,
        })
    }

    fn revert(this: &Self::Typed) -> Self {
        let MapGet {
            target,
            map,
            keys,
            fetch_value,
            position,
            ..
        } = this;

        MapGet {
            target: TypeCheckable::revert(target),
            map: TypeCheckable::revert(map),
            keys: keys.iter().map(TypeCheckable::revert).collect(),
            fetch_value: *fetch_value,
            info: (),
            position: position.clone(),
        }
    }
}

use super::model::Room;

/// The hardcoded mansion map. Allocation failure while building aborts the
/// process through the global allocator, so there is no error path here.
pub fn build_mansion() -> Room {
    Room::new("Hall de Entrada")
        .with_left(
            Room::new("Sala de Estar")
                .with_left(Room::new("Biblioteca").with_left(Room::new("Escritorio Secreto")))
                .with_right(Room::new("Jardim de Inverno")),
        )
        .with_right(
            // Left of the dining room is an empty corridor.
            Room::new("Sala de Jantar")
                .with_right(Room::new("Cozinha").with_left(Room::new("Despensa"))),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Direction::{Left, Right};

    #[test]
    fn mansion_has_expected_shape() {
        let hall = build_mansion();
        assert_eq!(hall.name.as_str(), "Hall de Entrada");
        assert_eq!(hall.count(), 8);

        let dining = hall.child(Right).unwrap();
        assert!(dining.child(Left).is_none());
        assert_eq!(
            dining.child(Right).and_then(|r| r.child(Left)).map(|r| r.name.as_str()),
            Some("Despensa")
        );

        assert_eq!(
            hall.leaf_names(),
            vec!["Escritorio Secreto", "Jardim de Inverno", "Despensa"]
        );
    }
}

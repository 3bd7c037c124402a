use super::model::Room;

/// Consumes the map, releasing every room children-first.
///
/// Dropping the root already frees the tree in this order, since a `Box`
/// drops its fields before its own allocation. This function walks the same
/// post-order explicitly so callers can observe each release.
pub fn release(room: Room, on_release: &mut impl FnMut(&str)) {
    let Room { name, left, right } = room;

    if let Some(child) = left {
        release(*child, on_release);
    }
    if let Some(child) = right {
        release(*child, on_release);
    }

    on_release(name.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::build_mansion;

    #[test]
    fn releases_each_room_once_children_first() {
        let map = build_mansion();
        let built = map.count();

        let mut order: Vec<String> = Vec::new();
        release(map, &mut |name| order.push(name.to_string()));

        assert_eq!(order.len(), built);
        assert_eq!(
            order,
            vec![
                "Escritorio Secreto",
                "Biblioteca",
                "Jardim de Inverno",
                "Sala de Estar",
                "Despensa",
                "Cozinha",
                "Sala de Jantar",
                "Hall de Entrada",
            ]
        );
    }

    #[test]
    fn single_room_is_released() {
        let mut count = 0;
        release(Room::new("Porao"), &mut |_| count += 1);
        assert_eq!(count, 1);
    }
}

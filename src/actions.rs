use diesel::prelude::*;

use crate::models;

/// Run query using Diesel to load every plant, oldest first.
pub fn list_plants(conn: &mut SqliteConnection) -> QueryResult<Vec<models::Plant>> {
    use crate::schema::plants::dsl::*;

    plants
        .order(id.asc())
        .select(models::Plant::as_select())
        .load(conn)
}

/// Run query using Diesel to find plant by id and return it.
pub fn find_plant_by_id(
    conn: &mut SqliteConnection,
    plant_id: i32, // prevent collision with `id` column imported inside the function
) -> QueryResult<Option<models::Plant>> {
    use crate::schema::plants::dsl::*;

    plants
        .find(plant_id)
        .select(models::Plant::as_select())
        .first(conn)
        .optional()
}

/// Run query using Diesel to insert a new database row and return the result.
///
/// The id comes back from the `RETURNING` clause, so it is always the one
/// SQLite assigned.
pub fn insert_new_plant(
    conn: &mut SqliteConnection,
    new_plant: &models::NewPlant,
) -> QueryResult<models::Plant> {
    use crate::schema::plants::dsl::*;

    diesel::insert_into(plants)
        .values(new_plant)
        .returning(models::Plant::as_returning())
        .get_result(conn)
}

/// Removes a plant row. Not routed; used to clean up fixtures.
pub fn delete_plant(conn: &mut SqliteConnection, plant_id: i32) -> QueryResult<usize> {
    use crate::schema::plants::dsl::*;

    diesel::delete(plants.filter(id.eq(plant_id))).execute(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;
    use crate::models::NewPlant;

    fn store() -> Store {
        Store::open(":memory:").unwrap()
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = store();
        let mut conn = store.get().unwrap();

        assert!(list_plants(&mut conn).unwrap().is_empty());
    }

    #[test]
    fn insert_assigns_id_and_keeps_fields() {
        let store = store();
        let mut conn = store.get().unwrap();

        let new_plant = NewPlant::new("Live Oak", "https://example.com/live_oak.jpg", 250.0);
        let plant = insert_new_plant(&mut conn, &new_plant).unwrap();

        assert!(plant.id > 0);
        assert_eq!(plant.name, "Live Oak");
        assert_eq!(plant.image, "https://example.com/live_oak.jpg");
        assert_eq!(plant.price, 250.0);

        let found = find_plant_by_id(&mut conn, plant.id).unwrap();
        assert_eq!(found, Some(plant));
    }

    #[test]
    fn identical_plants_get_distinct_ids() {
        let store = store();
        let mut conn = store.get().unwrap();

        let new_plant = NewPlant::new("Maple", "https://example.com/maple.jpg", 120.0);
        let first = insert_new_plant(&mut conn, &new_plant).unwrap();
        let second = insert_new_plant(&mut conn, &new_plant).unwrap();

        assert_ne!(first.id, second.id);

        let ids: Vec<i32> = list_plants(&mut conn)
            .unwrap()
            .into_iter()
            .map(|plant| plant.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn missing_id_is_none() {
        let store = store();
        let mut conn = store.get().unwrap();

        assert_eq!(find_plant_by_id(&mut conn, 42).unwrap(), None);
    }

    #[test]
    fn delete_removes_only_the_target_row() {
        let store = store();
        let mut conn = store.get().unwrap();

        let fir = insert_new_plant(
            &mut conn,
            &NewPlant::new("Douglas Fir", "https://example.com/fir.jpg", 100.0),
        )
        .unwrap();
        let cedar = insert_new_plant(
            &mut conn,
            &NewPlant::new("Cedar", "https://example.com/cedar.jpg", 180.0),
        )
        .unwrap();

        assert_eq!(delete_plant(&mut conn, fir.id).unwrap(), 1);
        assert_eq!(delete_plant(&mut conn, fir.id).unwrap(), 0);
        assert_eq!(list_plants(&mut conn).unwrap(), vec![cedar]);
    }
}

// Mirrors `CREATE_PLANTS` in `db.rs`.

diesel::table! {
    plants (id) {
        id -> Integer,
        name -> Text,
        image -> Text,
        price -> Double,
    }
}

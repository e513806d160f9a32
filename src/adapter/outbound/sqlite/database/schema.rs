// Columns that share their table's name are mapped through `sql_name`.

diesel::table! {
    address (address_id) {
        address_id -> Integer,
        #[sql_name = "address"]
        address_line -> Text,
        address2 -> Nullable<Text>,
        district -> Text,
        city_id -> Integer,
        postal_code -> Nullable<Text>,
        phone -> Text,
        location -> Nullable<Text>,
        last_update -> Timestamp,
    }
}

diesel::table! {
    city (city_id) {
        city_id -> Integer,
        #[sql_name = "city"]
        name -> Text,
        country_id -> Integer,
        last_update -> Timestamp,
    }
}

diesel::table! {
    country (country_id) {
        country_id -> Integer,
        #[sql_name = "country"]
        name -> Text,
        last_update -> Timestamp,
    }
}

diesel::joinable!(address -> city (city_id));
diesel::joinable!(city -> country (country_id));

diesel::allow_tables_to_appear_in_same_query!(address, city, country,);

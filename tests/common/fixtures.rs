//! User list payloads and fixed timestamps

use chrono::{NaiveDate, NaiveDateTime};

/// Single complete user, as returned by jsonplaceholder
pub const LEANNE_JSON: &str = r#"[{"id":1,"name":"Leanne Graham","username":"Bret","email":"Sincere@april.biz","address":{"city":"Gwenborough"},"company":{"name":"Romaguera-Crona"}}]"#;

/// Three users, the second missing `company` and the third missing `address`
pub const MIXED_USERS_JSON: &str = r#"[
  {
    "id": 1,
    "name": "Leanne Graham",
    "username": "Bret",
    "email": "Sincere@april.biz",
    "address": {"street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough", "zipcode": "92998-3874"},
    "phone": "1-770-736-8031 x56442",
    "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net"}
  },
  {
    "id": 2,
    "name": "Ervin Howell",
    "username": "Antonette",
    "email": "Shanna@melissa.tv",
    "address": {"city": "Wisokyburgh"}
  },
  {
    "id": 3,
    "name": "Clementine Bauch",
    "username": "Samantha",
    "email": "Nathan@yesenia.net",
    "company": {"name": "Romaguera-Jacobson"}
  }
]"#;

/// Fixed report timestamp: 2024-01-15 09:30:00
pub fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .expect("valid fixed timestamp")
}

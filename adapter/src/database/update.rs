use sqlx::{Encode, Postgres, QueryBuilder, Type};

/// `UPDATE <table> SET ...` assembled from the fields a partial update actually carries.
pub struct UpdateBuilder<'a> {
    query: QueryBuilder<'a, Postgres>,
    fields: usize,
}

impl<'a> UpdateBuilder<'a> {
    pub fn new(table: &str) -> Self {
        Self {
            query: QueryBuilder::new(format!("UPDATE {table} SET ")),
            fields: 0,
        }
    }

    fn push_column(&mut self, column: &str) {
        if self.fields > 0 {
            self.query.push(", ");
        }
        self.query.push(column).push(" = ");
        self.fields += 1;
    }

    pub fn set<T>(&mut self, column: &str, value: Option<T>) -> &mut Self
    where
        T: 'a + Encode<'a, Postgres> + Type<Postgres> + Send,
    {
        if let Some(value) = value {
            self.push_column(column);
            self.query.push_bind(value);
        }
        self
    }

    /// Sets a column to a raw SQL expression such as `now()`.
    pub fn set_raw(&mut self, column: &str, expression: &str) -> &mut Self {
        self.push_column(column);
        self.query.push(expression);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields == 0
    }

    pub fn finish<T>(mut self, key_column: &str, key: T) -> QueryBuilder<'a, Postgres>
    where
        T: 'a + Encode<'a, Postgres> + Type<Postgres> + Send,
    {
        self.query
            .push(" WHERE ")
            .push(key_column)
            .push(" = ")
            .push_bind(key);
        self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_supplied_fields_are_set() {
        let mut builder = UpdateBuilder::new("users");
        builder
            .set("first_name", Some("Aiko".to_string()))
            .set::<String>("last_name", None)
            .set("bio", Some("hello".to_string()));
        assert!(!builder.is_empty());

        let query = builder.finish("user_id", 7_i64);
        assert_eq!(
            query.sql(),
            "UPDATE users SET first_name = $1, bio = $2 WHERE user_id = $3"
        );
    }

    #[test]
    fn raw_expressions_take_no_parameter() {
        let mut builder = UpdateBuilder::new("bookings");
        builder
            .set("cancellation_reason", Some("plans changed".to_string()))
            .set_raw("cancelled_at", "now()");

        let query = builder.finish("booking_id", 3_i64);
        assert_eq!(
            query.sql(),
            "UPDATE bookings SET cancellation_reason = $1, cancelled_at = now() WHERE booking_id = $2"
        );
    }

    #[test]
    fn nothing_supplied_is_empty() {
        let mut builder = UpdateBuilder::new("amenities");
        builder.set::<bool>("is_active", None);
        assert!(builder.is_empty());
    }
}

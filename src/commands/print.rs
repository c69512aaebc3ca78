use datebook_core::EventStore;

/// `Print`. Every event as `YYYY-MM-DD name`, in date then name order.
pub fn run(store: &EventStore) -> Vec<String> {
    store.to_string().lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use datebook_core::Date;

    #[test]
    fn test_print_orders_by_date() {
        let mut store = EventStore::new();
        store.add(Date::new(2018, 1, 1).unwrap(), "b");
        store.add(Date::new(17, 5, 5).unwrap(), "a");

        assert_eq!(run(&store), vec!["0017-05-05 a", "2018-01-01 b"]);
    }

    #[test]
    fn test_print_empty_store() {
        assert!(run(&EventStore::new()).is_empty());
    }
}

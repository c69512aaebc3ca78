use datebook_core::{DateResult, EventStore, parse_date};

/// `Find <date>`. One line per event, sorted; no output when there are none.
pub fn run(store: &EventStore, date: &str) -> DateResult<Vec<String>> {
    let date = parse_date(date)?;
    Ok(store.find(&date).into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use datebook_core::Date;

    #[test]
    fn test_find_lists_sorted_events() {
        let mut store = EventStore::new();
        let date = Date::new(2017, 11, 18).unwrap();
        store.add(date, "zoo");
        store.add(date, "art");

        assert_eq!(run(&store, "2017-11-18").unwrap(), vec!["art", "zoo"]);
    }

    #[test]
    fn test_find_nothing() {
        let store = EventStore::new();
        assert!(run(&store, "2017-11-18").unwrap().is_empty());
    }

    #[test]
    fn test_find_missing_date_token() {
        let store = EventStore::new();
        assert_eq!(run(&store, "").unwrap_err().to_string(), "Wrong date format: ");
    }
}

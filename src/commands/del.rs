use datebook_core::{DateResult, EventStore, parse_date};
use tracing::debug;

/// `Del <date> [event]`.
///
/// Without an event the whole date is cleared and the count reported.
pub fn run(store: &mut EventStore, date: &str, event: Option<&str>) -> DateResult<Vec<String>> {
    let date = parse_date(date)?;

    let line = match event {
        None => {
            let count = store.delete_date(&date);
            debug!(%date, count, "deleted date");
            format!("Deleted {} events", count)
        }
        Some(event) => {
            if store.delete_event(&date, event) {
                debug!(%date, event, "deleted event");
                "Deleted successfully".to_string()
            } else {
                "Event not found".to_string()
            }
        }
    };

    Ok(vec![line])
}

#[cfg(test)]
mod tests {
    use super::*;
    use datebook_core::Date;

    fn store_with(events: &[(u32, u32, u32, &str)]) -> EventStore {
        let mut store = EventStore::new();
        for (y, m, d, name) in events {
            store.add(Date::new(*y, *m, *d).unwrap(), *name);
        }
        store
    }

    #[test]
    fn test_delete_date_reports_count() {
        let mut store = store_with(&[(2017, 1, 1, "a"), (2017, 1, 1, "b")]);
        assert_eq!(run(&mut store, "2017-1-1", None).unwrap(), vec!["Deleted 2 events"]);
        assert_eq!(run(&mut store, "2017-1-1", None).unwrap(), vec!["Deleted 0 events"]);
    }

    #[test]
    fn test_delete_single_event() {
        let mut store = store_with(&[(2017, 1, 1, "a")]);
        assert_eq!(
            run(&mut store, "2017-01-01", Some("a")).unwrap(),
            vec!["Deleted successfully"]
        );
        assert_eq!(
            run(&mut store, "2017-01-01", Some("a")).unwrap(),
            vec!["Event not found"]
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_with_bad_date() {
        let mut store = store_with(&[(2017, 1, 1, "a")]);
        assert!(
            run(&mut store, "2017-01-32", Some("a"))
                .unwrap_err()
                .is_invalid_date()
        );
        assert_eq!(store.event_count(), 1);
    }
}

use datebook_core::{DateResult, EventStore, parse_date};
use tracing::debug;

/// `Add <date> <event>`. Produces no output.
pub fn run(store: &mut EventStore, date: &str, event: &str) -> DateResult<Vec<String>> {
    let date = parse_date(date)?;

    if store.add(date, event) {
        debug!(%date, event, "added event");
    } else {
        debug!(%date, event, "event not added: already present or month/day is 0");
    }

    Ok(Vec::new())
}

//! Plain-text rendering of query results.
//!
//! Station search output is tab-delimited for shell scripting; departures
//! are shown as a fixed-width board.

use crate::domain::{Departure, Station, TimeError, parse_clock_time};
use crate::query::DepartureFilter;

/// Shown instead of the clock time when a timestamp cannot be parsed.
const UNKNOWN_TIME: &str = "??:??";

/// Shown instead of the wait when a timestamp cannot be parsed.
const UNKNOWN_WAIT: &str = "?";

/// One `name<TAB>id` line per station.
pub fn render_stations(stations: &[Station]) -> String {
    stations
        .iter()
        .map(|s| format!("{}\t{}\n", s.name, s.id))
        .collect()
}

/// Board title naming the station and each active filter.
pub fn board_title(station: &str, filter: &DepartureFilter) -> String {
    let mut title = format!("Departures from {station}");
    if let Some(line) = &filter.line {
        title.push_str(&format!(" (line {line})"));
    }
    if let Some(transport) = filter.transport {
        title.push_str(&format!(" ({transport})"));
    }
    if let Some(destination) = &filter.destination {
        title.push_str(&format!(" (to {destination})"));
    }
    title
}

/// Format a wait: "Now" when due, "<n>m" otherwise, "?" when unknown.
pub fn format_wait(wait: Result<u32, TimeError>) -> String {
    match wait {
        Ok(0) => "Now".to_string(),
        Ok(minutes) => format!("{minutes}m"),
        Err(_) => UNKNOWN_WAIT.to_string(),
    }
}

/// Render the first `count` departures as a board.
///
/// `wait` computes minutes until a timestamp; pass
/// [`crate::domain::minutes_until`] for the wall clock. A departure whose
/// timestamp does not parse is still shown, with placeholders.
pub fn render_departures(
    station: &str,
    filter: &DepartureFilter,
    departures: &[Departure],
    count: usize,
    wait: impl Fn(&str) -> Result<u32, TimeError>,
) -> String {
    if departures.is_empty() {
        return "No departures found\n".to_string();
    }

    let mut out = format!("{}:\n", board_title(station, filter));
    out.push_str(&format!(
        "{:<5} {:<6} {:<6} {:<20} Type\n",
        "Wait", "Time", "Line", "Destination"
    ));
    out.push_str(&"-".repeat(70));
    out.push('\n');

    for departure in departures.iter().take(count) {
        let time = parse_clock_time(&departure.expected)
            .unwrap_or_else(|_| UNKNOWN_TIME.to_string());
        out.push_str(&format!(
            "{:<5} {:<6} {:<6} {:<20} {}\n",
            format_wait(wait(&departure.expected)),
            time,
            departure.line.designation,
            departure.destination,
            departure.line.transport_group,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, SiteId, TransportType, minutes_until_at, parse_timestamp};

    fn departure(line: &str, destination: &str, expected: &str) -> Departure {
        Departure::new(
            destination,
            expected,
            Line::new(line, "Tunnelbanans röda linje"),
        )
    }

    fn fixed_clock(ts: &str) -> Result<u32, TimeError> {
        minutes_until_at(ts, parse_timestamp("2025-01-01T10:00:00").unwrap())
    }

    #[test]
    fn stations_tab_delimited() {
        let stations = [
            Station::new("T-Centralen", SiteId::new(9001)),
            Station::new("Odenplan", SiteId::new(9117)),
        ];
        assert_eq!(
            render_stations(&stations),
            "T-Centralen\t9001\nOdenplan\t9117\n"
        );
        assert_eq!(render_stations(&[]), "");
    }

    #[test]
    fn title_lists_filters() {
        assert_eq!(
            board_title("Slussen", &DepartureFilter::new()),
            "Departures from Slussen"
        );

        let filter = DepartureFilter::new()
            .with_line("14")
            .with_transport(TransportType::Metro)
            .with_destination("Mörby");
        assert_eq!(
            board_title("Slussen", &filter),
            "Departures from Slussen (line 14) (metro) (to Mörby)"
        );
    }

    #[test]
    fn wait_labels() {
        assert_eq!(format_wait(Ok(0)), "Now");
        assert_eq!(format_wait(Ok(7)), "7m");
        assert_eq!(format_wait(fixed_clock("garbage")), "?");
    }

    #[test]
    fn empty_board() {
        let out = render_departures("Slussen", &DepartureFilter::new(), &[], 10, fixed_clock);
        assert_eq!(out, "No departures found\n");
    }

    #[test]
    fn board_layout() {
        let departures = [
            departure("14", "Mörby centrum", "2025-01-01T10:00:30"),
            departure("13", "Ropsten", "2025-01-01T10:04:10"),
        ];
        let out = render_departures(
            "Slussen",
            &DepartureFilter::new(),
            &departures,
            10,
            fixed_clock,
        );

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Departures from Slussen:");
        assert_eq!(lines[1], "Wait  Time   Line   Destination          Type");
        assert_eq!(lines[2], "-".repeat(70));
        assert_eq!(
            lines[3],
            "Now   10:00  14     Mörby centrum        Tunnelbanans röda linje"
        );
        assert_eq!(
            lines[4],
            "4m    10:04  13     Ropsten              Tunnelbanans röda linje"
        );
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn board_truncates_to_count() {
        let departures = [
            departure("14", "A", "2025-01-01T10:01:00"),
            departure("14", "B", "2025-01-01T10:02:00"),
            departure("14", "C", "2025-01-01T10:03:00"),
        ];
        let out = render_departures("X", &DepartureFilter::new(), &departures, 2, fixed_clock);

        // title, header, rule, two rows
        assert_eq!(out.lines().count(), 5);
        assert!(!out.contains(" C "));
    }

    #[test]
    fn unparsable_time_uses_placeholders() {
        let departures = [departure("14", "Fruängen", "later")];
        let out = render_departures("X", &DepartureFilter::new(), &departures, 10, fixed_clock);

        let row = out.lines().nth(3).unwrap();
        assert!(row.starts_with("?     ??:??  14     Fruängen"));
    }
}

//! Property tests for the event tail filter.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use stackctl::{EventTail, StackEvent};

fn session_start() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

/// A stack's full event history plus the feed length seen at each poll
fn history() -> impl Strategy<Value = (Vec<StackEvent>, Vec<usize>)> {
    proptest::collection::vec(-10i64..30, 1..24)
        .prop_flat_map(|offsets| {
            let n = offsets.len();
            (Just(offsets), proptest::collection::vec(0..=n, 1..6))
        })
        .prop_map(|(offsets, mut cuts)| {
            cuts.sort_unstable();
            let events = offsets
                .into_iter()
                .enumerate()
                .map(|(i, offset)| {
                    StackEvent::new(
                        format!("e{}", i),
                        "Resource",
                        "UPDATE_IN_PROGRESS",
                        session_start() + chrono::Duration::seconds(offset),
                    )
                })
                .collect();
            (events, cuts)
        })
}

/// The feed as delivered: the first `len` events, most recent first
fn feed(events: &[StackEvent], len: usize) -> Vec<StackEvent> {
    let mut feed = events[..len].to_vec();
    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: no event is reported twice across a session.
    #[test]
    fn property_each_event_reported_at_most_once((events, cuts) in history()) {
        let mut tail = EventTail::new(session_start(), Duration::from_secs(2));
        let mut reported = HashSet::new();

        for len in cuts {
            for event in tail.observe(feed(&events, len)) {
                prop_assert!(reported.insert(event.event_id.clone()), "{} reported twice", event.event_id);
            }
        }
    }

    /// PROPERTY: each poll's output is in chronological order and never older than the cutoff.
    #[test]
    fn property_output_is_chronological_and_recent((events, cuts) in history()) {
        let mut tail = EventTail::new(session_start(), Duration::from_secs(2));

        for len in cuts {
            let out = tail.observe(feed(&events, len));
            prop_assert!(out.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
            prop_assert!(out.iter().all(|e| e.timestamp >= tail.cutoff()));
        }
    }

    /// PROPERTY: the session reports exactly the recent events it has seen.
    #[test]
    fn property_reports_every_recent_event((events, cuts) in history()) {
        let mut tail = EventTail::new(session_start(), Duration::from_secs(2));
        let cutoff = tail.cutoff();
        let mut reported: HashSet<String> = HashSet::new();

        let max = *cuts.last().unwrap();
        for len in cuts {
            reported.extend(tail.observe(feed(&events, len)).into_iter().map(|e| e.event_id));
        }

        let expected: HashSet<String> = events[..max]
            .iter()
            .filter(|e| e.timestamp >= cutoff)
            .map(|e| e.event_id.clone())
            .collect();
        prop_assert_eq!(reported, expected);
        prop_assert_eq!(tail.seen_count(), max);
    }
}

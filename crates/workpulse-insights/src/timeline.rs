//! Timeline explorer: events grouped into lanes.

use workpulse_core::time::sort_key_millis;
use workpulse_core::types::TimelineEvent;

/// One lane of the timeline with its events in date order.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane<'a> {
    pub name: &'a str,
    pub events: Vec<&'a TimelineEvent>,
}

/// Group events by lane.
///
/// Lanes appear in order of first appearance. Within a lane, events are
/// sorted by date ascending (stable); unparseable dates sort first.
pub fn group_by_lane(events: &[TimelineEvent]) -> Vec<Lane<'_>> {
    let mut lanes: Vec<Lane<'_>> = Vec::new();
    for event in events {
        match lanes.iter_mut().find(|l| l.name == event.lane) {
            Some(lane) => lane.events.push(event),
            None => lanes.push(Lane {
                name: &event.lane,
                events: vec![event],
            }),
        }
    }
    for lane in &mut lanes {
        lane.events.sort_by_key(|e| sort_key_millis(&e.date));
    }
    lanes
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotCategory {
    Morning,
    Evening,
}

/// A one-hour delivery window from the fixed catalog.
///
/// `value` is both the identifier clients send back and the label they show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub value: &'static str,
    pub category: SlotCategory,
    pub start_hour: u32,
    pub end_hour: u32,
}

const fn slot(value: &'static str, category: SlotCategory, start_hour: u32) -> TimeSlot {
    TimeSlot {
        value,
        category,
        start_hour,
        end_hour: start_hour + 1,
    }
}

/// Every bookable slot, mornings first, in display order.
pub static TIME_SLOTS: [TimeSlot; 7] = [
    slot("6:00 AM - 7:00 AM", SlotCategory::Morning, 6),
    slot("7:00 AM - 8:00 AM", SlotCategory::Morning, 7),
    slot("8:00 AM - 9:00 AM", SlotCategory::Morning, 8),
    slot("9:00 AM - 10:00 AM", SlotCategory::Morning, 9),
    slot("6:00 PM - 7:00 PM", SlotCategory::Evening, 18),
    slot("7:00 PM - 8:00 PM", SlotCategory::Evening, 19),
    slot("8:00 PM - 9:00 PM", SlotCategory::Evening, 20),
];

impl TimeSlot {
    /// Looks a slot up by its exact catalog value.
    pub fn find(value: &str) -> Option<&'static TimeSlot> {
        TIME_SLOTS.iter().find(|slot| slot.value == value)
    }

    /// Minutes since midnight at which the slot stops being bookable.
    pub fn end_minutes(&self) -> u32 {
        self.end_hour * 60
    }
}

pub fn time_slot_category(value: &str) -> Option<SlotCategory> {
    TimeSlot::find(value).map(|slot| slot.category)
}

/// Reads `(start_hour, end_hour)` out of a label shaped like `"6:00 PM - 7:00 PM"`.
///
/// Used for values outside the catalog; catalog slots carry their hours directly.
pub fn parse_slot_hours(value: &str) -> Option<(u32, u32)> {
    let (start, end) = value.split_once(" - ")?;
    Some((parse_clock_hour(start)?, parse_clock_hour(end)?))
}

fn parse_clock_hour(text: &str) -> Option<u32> {
    let (time, period) = text.trim().split_once(' ')?;
    let hour: u32 = time.split(':').next()?.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    match (period, hour) {
        ("AM", 12) => Some(0),
        ("AM", h) => Some(h),
        ("PM", 12) => Some(12),
        ("PM", h) => Some(h + 12),
        _ => None,
    }
}

use crate::character_lookup::domain::{CharacterPetInfo, DerivedTag, PetUrgency, TagColor};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Pets expiring within this many calendar days get an urgency tag
pub const PET_URGENCY_THRESHOLD_DAYS: i64 = 3;

const PET_URGENCY_LABEL: &str = "생명의 물";

/// Upstream timestamps sometimes omit seconds, e.g. `2024-01-01T00:00+09:00`
const MINUTE_PRECISION_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

/// PetUrgencyChecker - Flags pets that need a life potion soon
pub struct PetUrgencyChecker;

impl PetUrgencyChecker {
    /// Returns one urgency entry per slot whose pet expires within the threshold.
    ///
    /// Slots without a name or an expiry, and slots whose expiry cannot be
    /// parsed, produce nothing.
    pub fn check(pets: &CharacterPetInfo, now: DateTime<Utc>) -> Vec<PetUrgency> {
        pets.slots()
            .into_iter()
            .filter_map(|slot| {
                let name = slot.name.filter(|n| !n.is_empty())?;
                let raw_expire = slot.date_expire.filter(|d| !d.is_empty())?;

                let Some(expire) = parse_timestamp(raw_expire) else {
                    tracing::debug!(slot = slot.slot, raw_expire, "unparseable pet expiry");
                    return None;
                };

                let days_remaining = Self::calendar_days_until(&expire, now);
                (days_remaining <= PET_URGENCY_THRESHOLD_DAYS).then(|| PetUrgency {
                    slot: slot.slot,
                    pet_name: name.to_string(),
                    days_remaining,
                    tag: DerivedTag::new(TagColor::Red, PET_URGENCY_LABEL),
                })
            })
            .collect()
    }

    /// Calendar-day difference between the expiry date and today's date.
    ///
    /// Both dates are taken in the expiry timestamp's own UTC offset, so the
    /// time of day never shifts the result within a date.
    pub fn calendar_days_until(expire: &DateTime<FixedOffset>, now: DateTime<Utc>) -> i64 {
        let today = now.with_timezone(expire.offset()).date_naive();
        (expire.date_naive() - today).num_days()
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, MINUTE_PRECISION_FORMAT))
        .ok()
        .or_else(|| {
            // Offset-less timestamps are treated as UTC
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
}

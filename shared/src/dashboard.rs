use crate::dto::code::PaymentCodeDto;
use crate::dto::event::EventDto;
use crate::dto::fighter::FighterDto;
use crate::dto::ticket::TicketDto;
use chrono::{DateTime, Utc};

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub upcoming_events: usize,
    pub next_event: Option<String>,
    pub fighters_total: usize,
    pub fighters_checked_in: usize,
    pub tickets_total: usize,
    pub tickets_redeemed: usize,
    /// Cash codes not yet redeemed, in cents.
    pub outstanding_cash_cents: i64,
}

impl DashboardStats {
    pub fn summarize(
        events: &[EventDto],
        fighters: &[FighterDto],
        tickets: &[TicketDto],
        codes: &[PaymentCodeDto],
        now: DateTime<Utc>,
    ) -> Self {
        let upcoming: Vec<&EventDto> = events.iter().filter(|e| e.is_upcoming(now)).collect();
        Self {
            upcoming_events: upcoming.len(),
            next_event: upcoming.iter().min_by_key(|e| e.date).map(|e| e.name.clone()),
            fighters_total: fighters.len(),
            fighters_checked_in: fighters.iter().filter(|f| f.checked_in).count(),
            tickets_total: tickets.len(),
            tickets_redeemed: tickets.iter().filter(|t| t.is_redeemed()).count(),
            outstanding_cash_cents: codes.iter().filter(|c| !c.redeemed).map(|c| c.amount_cents).sum(),
        }
    }

    /// Whole-number percentage, 0 when there is nothing to count.
    pub fn percent(part: usize, total: usize) -> u32 {
        if total == 0 {
            0
        } else {
            ((part * 100) / total) as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::event::EventStatus;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summarize() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let event = |name: &str, days: i64, status: EventStatus| EventDto {
            name: name.into(),
            date: now + Duration::days(days),
            status,
            ..Default::default()
        };
        let events = vec![
            event("Later", 30, EventStatus::Scheduled),
            event("Past", -3, EventStatus::Completed),
            event("Soon", 7, EventStatus::Scheduled),
            event("Off", 10, EventStatus::Cancelled),
        ];
        let fighters = vec![
            FighterDto {
                checked_in: true,
                ..Default::default()
            },
            FighterDto::default(),
        ];
        let tickets = vec![
            TicketDto {
                redeemed_at: Some(now),
                ..Default::default()
            },
            TicketDto::default(),
            TicketDto::default(),
        ];
        let codes = vec![
            PaymentCodeDto {
                amount_cents: 1500,
                ..Default::default()
            },
            PaymentCodeDto {
                amount_cents: 900,
                redeemed: true,
                ..Default::default()
            },
        ];

        let stats = DashboardStats::summarize(&events, &fighters, &tickets, &codes, now);
        assert_eq!(stats.upcoming_events, 2);
        assert_eq!(stats.next_event.as_deref(), Some("Soon"));
        assert_eq!((stats.fighters_checked_in, stats.fighters_total), (1, 2));
        assert_eq!((stats.tickets_redeemed, stats.tickets_total), (1, 3));
        assert_eq!(stats.outstanding_cash_cents, 1500);
        assert_eq!(DashboardStats::percent(1, 3), 33);
        assert_eq!(DashboardStats::percent(0, 0), 0);
    }
}

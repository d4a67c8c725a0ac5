use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Seat classes, in the order the seat map shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SeatType {
    Standard,
    Premium,
    #[serde(rename = "VIP")]
    Vip,
}

impl SeatType {
    pub const ALL: [SeatType; 3] = [SeatType::Standard, SeatType::Premium, SeatType::Vip];

    /// Ticket price in whole rupees.
    pub fn price(self) -> i64 {
        match self {
            SeatType::Standard => 150,
            SeatType::Premium => 250,
            SeatType::Vip => 400,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeatType::Standard => "Standard",
            SeatType::Premium => "Premium",
            SeatType::Vip => "VIP",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Standard" => Some(SeatType::Standard),
            "Premium" => Some(SeatType::Premium),
            "VIP" => Some(SeatType::Vip),
            _ => None,
        }
    }

    fn prefix(self) -> char {
        match self {
            SeatType::Standard => 'S',
            SeatType::Premium => 'P',
            SeatType::Vip => 'V',
        }
    }

    /// How many seats of this class every showtime gets.
    pub fn layout_count(self) -> usize {
        match self {
            SeatType::Standard => 20,
            SeatType::Premium => 10,
            SeatType::Vip => 5,
        }
    }
}

/// The seat numbers created for a new showtime: S1..S20, P1..P10, V1..V5.
pub fn seat_layout() -> Vec<(String, SeatType)> {
    SeatType::ALL
        .iter()
        .flat_map(|&seat_type| {
            (1..=seat_type.layout_count())
                .map(move |n| (format!("{}{}", seat_type.prefix(), n), seat_type))
        })
        .collect()
}

/// Sum of seat prices; unknown seat types count as Standard.
pub fn total_price<'a, I>(seat_types: I) -> i64
where
    I: IntoIterator<Item = &'a str>,
{
    seat_types
        .into_iter()
        .map(|raw| SeatType::parse(raw).unwrap_or(SeatType::Standard).price())
        .sum()
}

/// Orders seat numbers by letter prefix, then numerically, so "S2" < "S10".
pub fn compare_seat_numbers(a: &str, b: &str) -> Ordering {
    let split = |s: &str| {
        let idx = s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len());
        let (prefix, digits) = s.split_at(idx);
        (prefix.to_string(), digits.parse::<u32>().ok())
    };
    let (pa, na) = split(a);
    let (pb, nb) = split(b);
    pa.cmp(&pb).then(na.cmp(&nb)).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_thirty_five_unique_seats() {
        let layout = seat_layout();
        assert_eq!(layout.len(), 35);
        assert_eq!(layout.first().map(|s| s.0.as_str()), Some("S1"));
        assert_eq!(layout.last().map(|s| s.0.as_str()), Some("V5"));

        let mut numbers: Vec<&str> = layout.iter().map(|(n, _)| n.as_str()).collect();
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), 35);

        let vip = layout.iter().filter(|(_, t)| *t == SeatType::Vip).count();
        assert_eq!(vip, 5);
    }

    #[test]
    fn total_price_sums_by_type() {
        assert_eq!(total_price(["Standard", "Premium", "VIP"]), 800);
        assert_eq!(total_price(Vec::<&str>::new()), 0);
        assert_eq!(total_price(["VIP", "VIP"]), 800);
    }

    #[test]
    fn seat_type_round_trips_through_its_name() {
        for seat_type in SeatType::ALL {
            assert_eq!(SeatType::parse(seat_type.as_str()), Some(seat_type));
        }
        assert_eq!(SeatType::parse("vip"), None);
        assert_eq!(
            serde_json::to_string(&SeatType::Vip).unwrap(),
            "\"VIP\""
        );
    }

    #[test]
    fn seat_numbers_sort_naturally() {
        let mut seats = vec!["S10", "S2", "P1", "S1"];
        seats.sort_by(|a, b| compare_seat_numbers(a, b));
        assert_eq!(seats, vec!["P1", "S1", "S2", "S10"]);
    }
}

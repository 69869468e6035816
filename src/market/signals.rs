//! Candle-shape signal detection.
//!
//! The rules classify a bar by the proportions of its wicks and body. A
//! candle can fire in both directions at once; within one direction only
//! the first matching rule counts.

use chrono::{NaiveDateTime, NaiveTime};

use crate::market::Candle;

/// Intraday session window. Bars outside it carry no signal for the
/// intervals in [`INTRADAY_INTERVALS`].
pub fn session_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 15, 0).unwrap()
}

pub fn session_end() -> NaiveTime {
    NaiveTime::from_hms_opt(15, 30, 0).unwrap()
}

/// Intervals restricted to the trading session.
pub const INTRADAY_INTERVALS: [&str; 7] = ["15min", "30min", "45min", "1h", "2h", "3h", "4h"];

/// Base interval of the series the board renders.
pub const BASE_INTERVAL: &str = "15min";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Excellent,
    VeryGood,
    OneToTwoRiskReward,
}

impl SignalKind {
    pub fn label(self) -> &'static str {
        match self {
            SignalKind::Excellent => "EXCELLENT CANDLE",
            SignalKind::VeryGood => "VERY GOOD CANDLE",
            SignalKind::OneToTwoRiskReward => "1:2 RISK REWARD CANDLE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub time: NaiveDateTime,
    pub interval: String,
    pub kind: SignalKind,
    pub index: String,
    pub direction: Direction,
    pub stoploss: f64,
    pub target: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn bullish_kind(o: f64, h: f64, l: f64, c: f64) -> Option<SignalKind> {
    if o == l && (h - c) >= 2.0 * (c - l) {
        Some(SignalKind::Excellent)
    } else if (o - l) <= (c - o) && (h - c) >= 2.0 * (c - o) {
        Some(SignalKind::VeryGood)
    } else if (h - c) >= 2.0 * (c - o) && (o - l) < 4.0 * (c - o) && (h - c) >= 2.0 * (c - l) {
        Some(SignalKind::OneToTwoRiskReward)
    } else {
        None
    }
}

fn bearish_kind(o: f64, h: f64, l: f64, c: f64) -> Option<SignalKind> {
    if o == h && (c - l) >= 2.0 * (h - c) {
        Some(SignalKind::Excellent)
    } else if (h - o) <= (o - c) && (c - l) >= 2.0 * (o - c) {
        Some(SignalKind::VeryGood)
    } else if (c - l) >= 2.0 * (o - c) && (h - o) < 4.0 * (o - c) && (c - l) >= 2.0 * (h - c) {
        Some(SignalKind::OneToTwoRiskReward)
    } else {
        None
    }
}

/// Scans a series and returns the (bullish, bearish) signals found.
pub fn detect_signals(
    candles: &[Candle],
    interval: &str,
    index: &str,
) -> (Vec<Signal>, Vec<Signal>) {
    let mut bullish = Vec::new();
    let mut bearish = Vec::new();
    let session_only = INTRADAY_INTERVALS.contains(&interval);

    for candle in candles {
        let time = candle.timestamp.time();
        if session_only && !(session_start() <= time && time <= session_end()) {
            continue;
        }

        let (o, h, l, c) = (candle.open, candle.high, candle.low, candle.close);
        let body = (c - o).abs();

        if let Some(kind) = bullish_kind(o, h, l, c) {
            bullish.push(Signal {
                time: candle.timestamp,
                interval: interval.to_owned(),
                kind,
                index: index.to_owned(),
                direction: Direction::Bullish,
                stoploss: round2(body + (o - l)),
                target: round2(h - c),
            });
        }
        if let Some(kind) = bearish_kind(o, h, l, c) {
            bearish.push(Signal {
                time: candle.timestamp,
                interval: interval.to_owned(),
                kind,
                index: index.to_owned(),
                direction: Direction::Bearish,
                stoploss: round2(body + (h - o)),
                target: round2(c - l),
            });
        }
    }

    (bullish, bearish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn candle(hour: u32, min: u32, o: f64, h: f64, l: f64, c: f64) -> Candle {
        Candle {
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(hour, min, 0)
                .unwrap(),
            open: o,
            high: h,
            low: l,
            close: c,
            volume: 0.0,
        }
    }

    #[test]
    fn bullish_excellent_candle() {
        // Opens on the low, upper wick twice the distance close-to-low.
        let (bullish, bearish) =
            detect_signals(&[candle(10, 0, 100.0, 130.0, 100.0, 110.0)], "15min", "NIFTY");
        assert_eq!(bullish.len(), 1);
        assert!(bearish.is_empty());
        assert_eq!(bullish[0].kind, SignalKind::Excellent);
        assert_eq!(bullish[0].direction, Direction::Bullish);
        assert_eq!(bullish[0].stoploss, 10.0);
        assert_eq!(bullish[0].target, 20.0);
        assert_eq!(bullish[0].index, "NIFTY");
        assert_eq!(bullish[0].interval, "15min");
    }

    #[test]
    fn bullish_very_good_candle() {
        // Small lower wick (1) <= body (2), upper wick (5) >= 2 * body.
        let (bullish, _) =
            detect_signals(&[candle(10, 0, 100.0, 107.0, 99.0, 102.0)], "15min", "NIFTY");
        assert_eq!(bullish.len(), 1);
        assert_eq!(bullish[0].kind, SignalKind::VeryGood);
        assert_eq!(bullish[0].stoploss, 3.0);
        assert_eq!(bullish[0].target, 5.0);
    }

    #[test]
    fn bullish_one_to_two_candle() {
        // Lower wick (3) > body (2) rules out VERY GOOD, but wick ratios
        // still satisfy the 1:2 shape: upper wick 10 >= 2 * body and
        // >= 2 * (close - low), lower wick < 4 * body.
        let (bullish, _) =
            detect_signals(&[candle(10, 0, 100.0, 112.0, 97.0, 102.0)], "15min", "NIFTY");
        assert_eq!(bullish.len(), 1);
        assert_eq!(bullish[0].kind, SignalKind::OneToTwoRiskReward);
    }

    #[test]
    fn bearish_excellent_candle() {
        // Opens on the high, lower wick three times the body.
        let (bullish, bearish) =
            detect_signals(&[candle(11, 0, 100.0, 100.0, 60.0, 90.0)], "15min", "BANKNIFTY");
        assert!(bullish.is_empty());
        assert_eq!(bearish.len(), 1);
        assert_eq!(bearish[0].kind, SignalKind::Excellent);
        assert_eq!(bearish[0].direction, Direction::Bearish);
        assert_eq!(bearish[0].stoploss, 10.0);
        assert_eq!(bearish[0].target, 30.0);
    }

    #[test]
    fn bearish_very_good_candle() {
        // Upper wick (1) <= body (2), lower wick (5) >= 2 * body.
        let (_, bearish) =
            detect_signals(&[candle(11, 0, 102.0, 103.0, 95.0, 100.0)], "15min", "SENSEX");
        assert_eq!(bearish.len(), 1);
        assert_eq!(bearish[0].kind, SignalKind::VeryGood);
        assert_eq!(bearish[0].stoploss, 3.0);
        assert_eq!(bearish[0].target, 5.0);
    }

    #[test]
    fn plain_candle_fires_nothing() {
        let (bullish, bearish) =
            detect_signals(&[candle(10, 0, 100.0, 103.0, 98.0, 102.0)], "15min", "NIFTY");
        assert!(bullish.is_empty());
        assert!(bearish.is_empty());
    }

    #[test]
    fn out_of_session_intraday_candle_is_skipped() {
        let (bullish, bearish) =
            detect_signals(&[candle(8, 0, 100.0, 130.0, 100.0, 110.0)], "15min", "NIFTY");
        assert!(bullish.is_empty());
        assert!(bearish.is_empty());
    }

    #[test]
    fn out_of_session_daily_candle_still_counts() {
        let (bullish, _) =
            detect_signals(&[candle(0, 0, 100.0, 130.0, 100.0, 110.0)], "1d", "NIFTY");
        assert_eq!(bullish.len(), 1);
    }

    #[test]
    fn session_boundaries_are_inclusive() {
        let shape = |h, m| candle(h, m, 100.0, 130.0, 100.0, 110.0);
        let (at_open, _) = detect_signals(&[shape(9, 15)], "15min", "NIFTY");
        let (at_close, _) = detect_signals(&[shape(15, 30)], "15min", "NIFTY");
        let (before_open, _) = detect_signals(&[shape(9, 14)], "15min", "NIFTY");
        assert_eq!(at_open.len(), 1);
        assert_eq!(at_close.len(), 1);
        assert!(before_open.is_empty());
    }
}

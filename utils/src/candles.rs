use serde::Deserialize;

/// One OHLC bucket as delivered by the price API: a 5 element array of
/// `[timestamp_seconds, open, high, low, close]`. A tuple with the wrong
/// arity or a non-numeric member fails deserialization of the whole
/// response rather than producing a partially filled candle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawCandle(pub i64, pub f64, pub f64, pub f64, pub f64);

/// Renderable projection of a candle: `x` is the bucket timestamp in
/// milliseconds, `y` is the close price, and the full OHLC is kept for
/// the readout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartPoint {
    pub x: i64,
    pub y: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl From<RawCandle> for ChartPoint {
    fn from(RawCandle(timestamp, open, high, low, close): RawCandle) -> Self {
        ChartPoint {
            x: timestamp * 1000,
            y: close,
            open,
            high,
            low,
            close,
        }
    }
}

/// Maps raw candles into chart points, keeping the upstream order.
pub fn normalize(candles: Vec<RawCandle>) -> Vec<ChartPoint> {
    candles.into_iter().map(ChartPoint::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_one_candle() {
        let points = normalize(vec![RawCandle(1700000000, 10.0, 12.0, 9.0, 11.0)]);
        assert_eq!(
            points,
            vec![ChartPoint {
                x: 1_700_000_000_000,
                y: 11.0,
                open: 10.0,
                high: 12.0,
                low: 9.0,
                close: 11.0,
            }]
        );
    }

    #[test]
    fn keeps_upstream_order() {
        let points = normalize(vec![
            RawCandle(200, 1.0, 1.0, 1.0, 1.0),
            RawCandle(100, 2.0, 2.0, 2.0, 2.0),
        ]);
        assert_eq!(points[0].x, 200_000);
        assert_eq!(points[1].x, 100_000);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalize(Vec::new()).is_empty());
    }

    #[test]
    fn rejects_short_tuple() {
        let result = serde_json::from_str::<RawCandle>("[1700000000, 10, 12, 9]");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_numeric_member() {
        let result = serde_json::from_str::<RawCandle>(r#"[1700000000, "10", 12, 9, 11]"#);
        assert!(result.is_err());
    }
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::candles::RawCandle;

/// A tradable asset in the price feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    pub token_symbol: String,
}

impl Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token_symbol)
    }
}

#[derive(Debug, Deserialize)]
struct CandlesResponse {
    candles: Option<Vec<RawCandle>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CandlesQuery<'a> {
    token_symbol: &'a str,
    period: &'a str,
}

/// Client for the GMX public price API.
pub struct PriceApi {
    base_url: String,
}

impl PriceApi {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub async fn fetch_tickers(&self) -> crate::Result<Vec<Ticker>> {
        crate::Reqwest::get(format!("{}/prices/tickers", self.base_url))?
            .receive_json::<Vec<Ticker>>()
            .await
    }

    /// Fetches the candle series for one symbol. A well-formed response
    /// without a `candles` field yields an empty series.
    pub async fn fetch_candles(&self, symbol: &str, period: &str) -> crate::Result<Vec<RawCandle>> {
        let response: CandlesResponse =
            crate::Reqwest::get(format!("{}/prices/candles", self.base_url))?
                .query(&CandlesQuery {
                    token_symbol: symbol,
                    period,
                })
                .receive_json()
                .await?;

        Ok(response.candles.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ticker_list() {
        let tickers: Vec<Ticker> =
            serde_json::from_str(r#"[{"tokenSymbol": "ETH"}, {"tokenSymbol": "BTC"}]"#).unwrap();
        assert_eq!(tickers.len(), 2);
        assert_eq!(tickers[0].token_symbol, "ETH");
    }

    #[test]
    fn parses_candles_payload() {
        let response: CandlesResponse = serde_json::from_str(
            r#"{"candles": [[1700000000, 10, 12, 9, 11], [1700000060, 11, 11.5, 10.5, 11.2]]}"#,
        )
        .unwrap();
        let candles = response.candles.unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0], RawCandle(1700000000, 10.0, 12.0, 9.0, 11.0));
    }

    #[test]
    fn missing_candles_field_is_empty_series() {
        let response: CandlesResponse = serde_json::from_str(r#"{"period": "1m"}"#).unwrap();
        assert!(response.candles.unwrap_or_default().is_empty());
    }

    #[test]
    fn malformed_tuple_fails_the_response() {
        let result =
            serde_json::from_str::<CandlesResponse>(r#"{"candles": [[1700000000, 10, 12]]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn candles_query_uses_api_field_names() {
        let query = serde_json::to_value(CandlesQuery {
            token_symbol: "ETH",
            period: "1m",
        })
        .unwrap();
        assert_eq!(query["tokenSymbol"], "ETH");
        assert_eq!(query["period"], "1m");
    }
}

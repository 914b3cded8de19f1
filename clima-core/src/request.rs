//! Query URL construction for the current-weather endpoint.

use url::Url;

use crate::{config::Endpoint, error::WeatherError, model::WeatherQuery};

/// Build the full request URL: `appid` and `units` first, then either `q`
/// or `lat`/`lon`. Values are form-urlencoded, so city names with spaces or
/// reserved characters survive intact.
///
/// Blank city names and non-finite coordinates are rejected even when the
/// query was built from its variants rather than its constructors.
pub fn build_url(query: &WeatherQuery, endpoint: &Endpoint) -> Result<Url, WeatherError> {
    query.validate()?;

    let mut url = Url::parse(&endpoint.base_url)?;

    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("appid", &endpoint.api_key)
            .append_pair("units", endpoint.units.as_str());

        match query {
            WeatherQuery::City(name) => {
                pairs.append_pair("q", name);
            }
            WeatherQuery::Coordinates(c) => {
                pairs
                    .append_pair("lat", &c.latitude.to_string())
                    .append_pair("lon", &c.longitude.to_string());
            }
        }
    }

    Ok(url)
}

/// Same URL with the API key masked, for logging.
pub(crate) fn redacted(url: &Url) -> String {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "appid" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    let mut clean = url.clone();
    clean.query_pairs_mut().clear().extend_pairs(pairs);
    clean.to_string()
}

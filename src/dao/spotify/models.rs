use serde::Deserialize;

use crate::dao::catalog::CatalogItem;

/// Answer of the client-credentials token exchange.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Lifetime of the token in seconds.
    #[serde(default)]
    pub expires_in: u64,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub artists: Option<Paging<ArtistObject>>,
}

#[derive(Debug, Deserialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistObject {
    pub name: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

impl SearchResponse {
    /// Flatten the artist page into catalog items, skipping entries without a public link.
    pub fn into_items(self) -> Vec<CatalogItem> {
        self.artists
            .map(|page| page.items)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|artist| {
                artist.external_urls.spotify.map(|external_url| CatalogItem {
                    name: artist.name,
                    external_url,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn keeps_search_order() {
        let response: SearchResponse = serde_json::from_value(json!({
            "artists": {
                "href": "https://api.spotify.com/v1/search?query=test",
                "items": [
                    { "name": "Test", "external_urls": { "spotify": "https://open.spotify.com/artist/1" } },
                    { "name": "Tester", "external_urls": {} },
                    { "name": "Testament", "external_urls": { "spotify": "https://open.spotify.com/artist/3" } }
                ]
            }
        }))
        .unwrap();

        let items = response.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].external_url, "https://open.spotify.com/artist/1");
        assert_eq!(items[1].name, "Testament");
    }

    #[test]
    fn empty_page_yields_nothing() {
        let response: SearchResponse =
            serde_json::from_value(json!({ "artists": { "items": [] } })).unwrap();
        assert!(response.into_items().is_empty());

        let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_items().is_empty());
    }
}

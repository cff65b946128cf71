use joke_api::{Joke, JokeQuery, JokeResponse, JokesResponse, lookup_path};

pub const API_BASE: &str = "https://website-project-9.onrender.com/api/v1/jokes";

#[derive(Debug, Clone)]
pub enum FetchError {
    /// The request itself failed (network, CORS, aborted, ...).
    Request(String),
    /// The server answered with something other than JSON.
    Format { content_type: Option<String> },
    /// The body claimed to be JSON but did not decode.
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(cause) => write!(w, "{}", cause),
            FetchError::Format { content_type } => {
                write!(
                    w,
                    "Unexpected response format: {}",
                    content_type.as_deref().unwrap_or("none")
                )
            }
            FetchError::Decode(cause) => write!(w, "{}", cause),
        }
    }
}

impl std::error::Error for FetchError {}

pub async fn fetch_jokes(query: &JokeQuery) -> Result<Vec<Joke>, FetchError> {
    let response = get_json(&format!("{}{}", API_BASE, query.path())).await?;
    let body: JokesResponse = decode(&response).await?;
    Ok(body.jokes)
}

pub async fn fetch_joke(id: u32) -> Result<Option<Joke>, FetchError> {
    let response = get_json(&format!("{}{}", API_BASE, lookup_path(id))).await?;
    let body: JokeResponse = decode(&response).await?;
    Ok(body.joke)
}

/// Issues the GET and enforces the JSON contract before anything is
/// decoded: a non-JSON content type is a hard failure regardless of the
/// status code, with the raw body dumped to the console for diagnosis.
async fn get_json(url: &str) -> Result<gloo_net::http::Response, FetchError> {
    leptos::logging::log!("fetching {}", url);

    let response = gloo_net::http::Request::get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let content_type = response.headers().get("content-type");
    if !content_type.as_deref().is_some_and(is_json) {
        let body = response.text().await.unwrap_or_default();
        leptos::logging::error!("non-JSON response body: {}", body);
        return Err(FetchError::Format { content_type });
    }

    Ok(response)
}

async fn decode<T>(response: &gloo_net::http::Response) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

fn is_json(content_type: &str) -> bool {
    content_type.contains("application/json")
}

use leptos::either::Either;
use leptos::prelude::*;

use joke_api::{Count, Filter, Joke, JokeQuery, parse_joke_id};

mod api;

use api::FetchError;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let (request, set_request) = signal(None::<JokeRequest>);
    let jokes = LocalResource::new(move || load(request.get()));

    let loading = move || {
        let text = match request.get() {
            Some(JokeRequest::Lookup(_)) => "Fetching joke...",
            _ => "Loading jokes...",
        };
        status(text.to_owned(), false)
    };

    view! {
        <section class="section">
            <div class="container">
                <h1 class="title">"Joker"</h1>
                <QueryBar set_request />
                <div id="joke-list" class="columns is-multiline mt-4">
                    <Suspense fallback=loading>
                        {move || Suspend::new(async move {
                            match jokes.await {
                                Ok(Outcome::Idle) => Either::Right(None),
                                Ok(Outcome::Cards(jokes)) => {
                                    Either::Left(view! { <JokeList jokes /> })
                                }
                                Ok(Outcome::NoneFound) => Either::Right(Some(status(
                                    "No jokes found for this selection!".to_owned(),
                                    false,
                                ))),
                                Ok(Outcome::NotFound) => {
                                    Either::Right(Some(status("Joke not found!".to_owned(), false)))
                                }
                                Err(error) => Either::Right(Some(status(error.to_string(), true))),
                            }
                        })}
                    </Suspense>
                </div>
            </div>
        </section>
    }
}

/// What the load button (or the Enter key) asked for.
#[derive(Debug, Clone, PartialEq)]
enum JokeRequest {
    Browse(JokeQuery),
    Lookup(String),
}

#[derive(Debug, Clone)]
enum Outcome {
    Idle,
    Cards(Vec<Joke>),
    NoneFound,
    NotFound,
}

#[derive(Debug, Clone)]
enum AppError {
    InvalidId,
    Fetch(FetchError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidId => write!(w, "Please enter a valid joke ID!"),
            AppError::Fetch(cause) => write!(w, "Error: {}", cause),
        }
    }
}

impl std::error::Error for AppError {}

impl From<FetchError> for AppError {
    fn from(cause: FetchError) -> Self {
        AppError::Fetch(cause)
    }
}

/// One request/response/render cycle. The id is validated before any
/// request goes out; an empty result is an outcome, not an error.
async fn load(request: Option<JokeRequest>) -> Result<Outcome, AppError> {
    let Some(request) = request else {
        return Ok(Outcome::Idle);
    };

    match request {
        JokeRequest::Browse(query) => {
            let jokes = api::fetch_jokes(&query).await?;
            if jokes.is_empty() {
                Ok(Outcome::NoneFound)
            } else {
                Ok(Outcome::Cards(jokes))
            }
        }
        JokeRequest::Lookup(raw) => {
            let id = parse_joke_id(&raw).ok_or(AppError::InvalidId)?;
            match api::fetch_joke(id).await? {
                Some(joke) => Ok(Outcome::Cards(vec![joke])),
                None => Ok(Outcome::NotFound),
            }
        }
    }
}

fn build_request(language: &str, category: &str, count: &str, joke_id: &str) -> JokeRequest {
    let id = joke_id.trim();
    if id.is_empty() {
        JokeRequest::Browse(JokeQuery {
            language: Filter::from_selection(language),
            category: Filter::from_selection(category),
            count: Count::from_selection(count),
        })
    } else {
        JokeRequest::Lookup(id.to_owned())
    }
}

#[component]
fn QueryBar(set_request: WriteSignal<Option<JokeRequest>>) -> impl IntoView {
    let (language, set_language) = signal("any".to_owned());
    let (category, set_category) = signal("any".to_owned());
    let (count, set_count) = signal(String::new());
    let (joke_id, set_joke_id) = signal(String::new());

    let submit = move |_| {
        set_request.set(Some(build_request(
            &language.read(),
            &category.read(),
            &count.read(),
            &joke_id.read(),
        )));
    };

    view! {
        <div class="field is-grouped is-grouped-multiline">
            <div class="control">
                <div class="select">
                    <select
                        aria-label="language"
                        on:change:target=move |e| set_language.set(e.target().value())
                    >
                        <option value="any">"any language"</option>
                        <option value="en">"en"</option>
                        <option value="de">"de"</option>
                        <option value="es">"es"</option>
                        <option value="it">"it"</option>
                        <option value="gl">"gl"</option>
                        <option value="eu">"eu"</option>
                    </select>
                </div>
            </div>
            <div class="control">
                <div class="select">
                    <select
                        aria-label="category"
                        on:change:target=move |e| set_category.set(e.target().value())
                    >
                        <option value="any">"any category"</option>
                        <option value="neutral">"neutral"</option>
                        <option value="chuck">"chuck"</option>
                    </select>
                </div>
            </div>
            <div class="control">
                <div class="select">
                    <select
                        aria-label="number of jokes"
                        on:change:target=move |e| set_count.set(e.target().value())
                    >
                        <option value="">"how many?"</option>
                        <option value="1">"1"</option>
                        <option value="3">"3"</option>
                        <option value="5">"5"</option>
                        <option value="10">"10"</option>
                        <option value="all">"all"</option>
                    </select>
                </div>
            </div>
            <div class="control">
                <input
                    class="input"
                    type="text"
                    placeholder="Joke ID"
                    aria-label="joke id"
                    bind:value=(joke_id, set_joke_id)
                    on:keyup:target=move |e| {
                        if e.key() == "Enter" {
                            let id = e.target().value().trim().to_owned();
                            if !id.is_empty() {
                                set_request.set(Some(JokeRequest::Lookup(id)));
                            }
                        }
                    }
                />
            </div>
            <div class="control">
                <button type="button" class="button is-primary" on:click=submit>
                    "Load jokes"
                </button>
            </div>
        </div>
    }
}

#[component]
fn JokeList(jokes: Vec<Joke>) -> impl IntoView {
    view! {
        <For
            each=move || jokes.clone().into_iter().enumerate()
            key=|(idx, _)| *idx
            children=move |(_, joke)| view! { <JokeCard joke /> }
        />
    }
}

#[component]
fn JokeCard(joke: Joke) -> impl IntoView {
    let tag = joke.tag();
    view! {
        <div class="column is-full">
            <div class="card mb-3">
                <div class="card-content">
                    <p class="title is-6">{joke.text}</p>
                    <p class="subtitle is-7 has-text-grey">{tag}</p>
                </div>
            </div>
        </div>
    }
}

fn status(text: String, error: bool) -> impl IntoView {
    view! { <Message text error /> }
}

#[component]
fn Message(text: String, error: bool) -> impl IntoView {
    view! {
        <p
            class="has-text-centered is-size-5"
            class=("has-text-danger", error)
            class=("has-text-grey", !error)
        >
            {text}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_takes_precedence_over_filters() {
        let request = build_request("en", "chuck", "3", " 42 ");
        assert_eq!(request, JokeRequest::Lookup("42".to_owned()));
    }

    #[test]
    fn empty_id_browses_with_filters() {
        let request = build_request("en", "any", "3", "   ");
        let JokeRequest::Browse(query) = request else {
            panic!("expected a browse request");
        };
        assert_eq!(query.path(), "/en/any/3");
    }

    #[test]
    fn invalid_id_message() {
        assert_eq!(
            AppError::InvalidId.to_string(),
            "Please enter a valid joke ID!"
        );
    }

    #[test]
    fn fetch_errors_are_prefixed() {
        let error = AppError::Fetch(FetchError::Request("connection refused".to_owned()));
        assert_eq!(error.to_string(), "Error: connection refused");
    }
}

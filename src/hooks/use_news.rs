use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::error::AppError;
use crate::models::news::{self, NewsArticle, NewsResponse, NewsSource, NewsSummary};
use crate::services::{fallback, news_api};

/// Handle returned by the `use_news` hook.
#[derive(Clone, PartialEq)]
pub struct NewsHandle {
    pub articles: Rc<Vec<NewsArticle>>,
    pub summary: Option<Rc<NewsSummary>>,
    pub sources: Rc<Vec<NewsSource>>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub has_more: bool,
    pub refetch: Callback<()>,
    pub load_more: Callback<()>,
    pub clear_error: Callback<()>,
}

/// Resolves an article fetch to the list to commit, the pagination flag and
/// the new banner value. Success always yields `None` for the banner, so a
/// retry that recovers clears a stale error.
fn articles_outcome(
    result: Result<NewsResponse, AppError>,
    limit: u32,
    now: DateTime<Utc>,
) -> (Vec<NewsArticle>, bool, Option<String>) {
    match result {
        Ok(response) => {
            let more = news::has_more_articles(response.articles.len(), limit);
            (response.articles, more, None)
        }
        Err(e) => (fallback::demo_articles(now), false, Some(e.to_string())),
    }
}

async fn refresh_articles(
    limit: u32,
    articles: UseStateHandle<Rc<Vec<NewsArticle>>>,
    has_more: UseStateHandle<bool>,
    alive: Rc<RefCell<bool>>,
) -> Option<String> {
    let result = news_api::fetch_latest_news(limit).await;
    if !*alive.borrow() {
        return None;
    }
    let (list, more, error) = articles_outcome(result, limit, Utc::now());
    has_more.set(more);
    articles.set(Rc::new(list));
    error
}

async fn refresh_summary(summary: UseStateHandle<Option<Rc<NewsSummary>>>, alive: Rc<RefCell<bool>>) {
    let result = news_api::fetch_news_summary().await;
    if !*alive.borrow() {
        return;
    }
    match result {
        Ok(data) => summary.set(Some(Rc::new(data))),
        Err(_) => summary.set(Some(Rc::new(fallback::demo_news_summary(Utc::now())))),
    }
}

async fn refresh_sources(sources: UseStateHandle<Rc<Vec<NewsSource>>>, alive: Rc<RefCell<bool>>) {
    let result = news_api::fetch_news_sources().await;
    if !*alive.borrow() {
        return;
    }
    match result {
        Ok(response) => sources.set(Rc::new(response.sources)),
        Err(_) => sources.set(Rc::new(fallback::demo_sources())),
    }
}

/// News hook: articles, aggregate summary and source directory fetched
/// concurrently; limit-based load-more pagination with the `has_more`
/// heuristic. Each article fetch replaces the error banner with its own
/// outcome, so a successful retry clears it. Articles and summary re-poll
/// every five minutes.
#[hook]
pub fn use_news(initial_limit: Option<u32>) -> NewsHandle {
    let articles = use_state(|| Rc::new(Vec::<NewsArticle>::new()));
    let summary = use_state(|| None::<Rc<NewsSummary>>);
    let sources = use_state(|| Rc::new(Vec::<NewsSource>::new()));
    let is_loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let has_more = use_state(|| true);
    let trigger = use_state(|| 0u32);

    let alive = use_mut_ref(|| true);
    // Current page size; load_more grows it, refetch and polling read it
    let limit = use_mut_ref(|| initial_limit.unwrap_or(Config::DEFAULT_NEWS_LIMIT));

    {
        let alive = alive.clone();
        use_effect_with((), move |()| {
            move || {
                *alive.borrow_mut() = false;
            }
        });
    }

    // Initial load plus polling. The first pass fetches everything;
    // scheduled passes refresh only articles and summary, not sources.
    {
        let articles = articles.clone();
        let summary = summary.clone();
        let sources = sources.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let has_more = has_more.clone();
        let alive = alive.clone();
        let limit = limit.clone();
        let trigger_value = *trigger;
        let trigger = trigger.clone();

        use_effect_with(trigger_value, move |_| {
            spawn_local(async move {
                let current_limit = *limit.borrow();
                if trigger_value == 0 {
                    is_loading.set(true);
                    let (articles_err, (), ()) = futures::join!(
                        refresh_articles(
                            current_limit,
                            articles.clone(),
                            has_more.clone(),
                            alive.clone(),
                        ),
                        refresh_summary(summary.clone(), alive.clone()),
                        refresh_sources(sources.clone(), alive.clone()),
                    );
                    if *alive.borrow() {
                        error.set(articles_err);
                        is_loading.set(false);
                    }
                } else {
                    let (articles_err, ()) = futures::join!(
                        refresh_articles(
                            current_limit,
                            articles.clone(),
                            has_more.clone(),
                            alive.clone(),
                        ),
                        refresh_summary(summary.clone(), alive.clone()),
                    );
                    if *alive.borrow() {
                        error.set(articles_err);
                    }
                }

                // Schedule next poll if enabled
                if Config::ENABLE_AUTO_REFRESH && *alive.borrow() {
                    TimeoutFuture::new(Config::NEWS_REFRESH_INTERVAL_MS).await;
                    if *alive.borrow() {
                        trigger.set(trigger_value.wrapping_add(1));
                    }
                }
            });

            || ()
        });
    }

    let refetch = {
        let articles = articles.clone();
        let summary = summary.clone();
        let sources = sources.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let has_more = has_more.clone();
        let alive = alive.clone();
        let limit = limit.clone();

        Callback::from(move |()| {
            let articles = articles.clone();
            let summary = summary.clone();
            let sources = sources.clone();
            let is_loading = is_loading.clone();
            let error = error.clone();
            let has_more = has_more.clone();
            let alive = alive.clone();
            let current_limit = *limit.borrow();

            spawn_local(async move {
                is_loading.set(true);
                let (articles_err, (), ()) = futures::join!(
                    refresh_articles(
                        current_limit,
                        articles.clone(),
                        has_more.clone(),
                        alive.clone(),
                    ),
                    refresh_summary(summary.clone(), alive.clone()),
                    refresh_sources(sources.clone(), alive.clone()),
                );
                if *alive.borrow() {
                    error.set(articles_err);
                    is_loading.set(false);
                }
            });
        })
    };

    let load_more = {
        let articles = articles.clone();
        let error = error.clone();
        let has_more = has_more.clone();
        let alive = alive.clone();
        let limit = limit.clone();

        Callback::from(move |()| {
            let articles = articles.clone();
            let error = error.clone();
            let has_more = has_more.clone();
            let alive = alive.clone();
            let new_limit = {
                let mut limit = limit.borrow_mut();
                *limit += Config::NEWS_PAGE_STEP;
                *limit
            };

            spawn_local(async move {
                let articles_err =
                    refresh_articles(new_limit, articles, has_more, alive.clone()).await;
                if *alive.borrow() {
                    error.set(articles_err);
                }
            });
        })
    };

    let clear_error = {
        let error = error.clone();
        Callback::from(move |()| error.set(None))
    };

    NewsHandle {
        articles: (*articles).clone(),
        summary: (*summary).clone(),
        sources: (*sources).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        has_more: *has_more,
        refetch,
        load_more,
        clear_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(count: usize) -> NewsResponse {
        let articles = (0..count)
            .map(|i| {
                serde_json::json!({
                    "title": format!("Article {i}"),
                    "url": format!("https://example.com/{i}"),
                    "source": "CoinDesk",
                })
            })
            .collect::<Vec<_>>();
        serde_json::from_value(serde_json::json!({
            "articles": articles,
            "total_count": count,
        }))
        .unwrap()
    }

    #[test]
    fn recovered_fetch_clears_a_stale_banner() {
        let now = Utc::now();
        let (_, _, first) =
            articles_outcome(Err(AppError::ApiError("down".to_string())), 10, now);
        assert!(first.is_some());

        let (list, _, second) = articles_outcome(Ok(page(10)), 10, now);
        assert_eq!(second, None);
        assert_eq!(list.len(), 10);
    }

    #[test]
    fn failed_fetch_substitutes_demo_articles_and_stops_paging() {
        let (list, more, error) =
            articles_outcome(Err(AppError::RateLimited), 10, Utc::now());
        assert_eq!(list.len(), 3);
        assert!(!more);
        assert_eq!(error.as_deref(), Some("Rate limited"));
    }

    #[test]
    fn pagination_flag_follows_page_fill() {
        let now = Utc::now();
        assert!(articles_outcome(Ok(page(10)), 10, now).1);
        assert!(!articles_outcome(Ok(page(3)), 10, now).1);
    }
}

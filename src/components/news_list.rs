use chrono::Utc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::status::ErrorBanner;
use crate::hooks::use_news::use_news;
use crate::models::news::{NewsArticle, Sentiment, SentimentFilter, filter_articles};
use crate::utils::format::{format_relative_time, sentiment_class};

/// Timeframe chips shown above the feed. Selection is cosmetic only: the
/// latest-articles endpoint has no period parameter to forward it to.
const TIMEFRAME_CHIPS: [&str; 4] = ["1h", "6h", "24h", "7d"];

/// News section: summary card, search/sentiment filters, article list with
/// load-more pagination, and the source directory.
#[function_component(NewsSection)]
pub fn news_section() -> Html {
    let news = use_news(None);
    let search = use_state(String::new);
    let sentiment_filter = use_state(SentimentFilter::default);
    let timeframe = use_state(|| "24h");

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let refetch = {
        let refetch = news.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    let load_more = {
        let load_more = news.load_more.clone();
        Callback::from(move |_: MouseEvent| load_more.emit(()))
    };

    let shown = filter_articles(&news.articles, &search, *sentiment_filter);

    let sentiment_buttons = {
        let all_count = news.articles.len();
        let count_for = |sentiment: Sentiment| {
            news.articles
                .iter()
                .filter(|a| a.sentiment == sentiment)
                .count()
        };

        std::iter::once((SentimentFilter::All, "All".to_string(), all_count))
            .chain(Sentiment::all().iter().map(|&s| {
                (
                    SentimentFilter::Only(s),
                    capitalized(s.label()),
                    count_for(s),
                )
            }))
            .map(|(filter, label, count)| {
                let class = if *sentiment_filter == filter {
                    "filter-button active"
                } else {
                    "filter-button"
                };
                let sentiment_filter = sentiment_filter.clone();
                let onclick = Callback::from(move |_| sentiment_filter.set(filter));
                html! {
                    <button {class} {onclick}>
                        {label}<span class="filter-count">{count}</span>
                    </button>
                }
            })
            .collect::<Html>()
    };

    let timeframe_chips = TIMEFRAME_CHIPS
        .iter()
        .map(|&chip| {
            let class = if *timeframe == chip {
                "chip active"
            } else {
                "chip"
            };
            let timeframe = timeframe.clone();
            let onclick = Callback::from(move |_| timeframe.set(chip));
            html! { <button {class} {onclick}>{chip.to_uppercase()}</button> }
        })
        .collect::<Html>();

    html! {
        <section class="news-section">
            <div class="news-section-header">
                <h2>{"Bitcoin News"}</h2>
                <button class="refresh-button" onclick={refetch} disabled={news.is_loading}>
                    {"⟳ Refresh"}
                </button>
            </div>

            if let Some(error) = news.error.clone() {
                <ErrorBanner
                    message={error}
                    on_dismiss={news.clear_error.clone()}
                    on_retry={Some(news.refetch.clone())}
                />
            }

            if let Some(summary) = &news.summary {
                <div class="news-summary">
                    <div class="news-summary-stat">
                        <span class="stat-value">{summary.total_articles}</span>
                        <span class="stat-label">{"Articles"}</span>
                    </div>
                    <div class="news-summary-stat">
                        <span class={classes!("stat-value", sentiment_class(summary.overall_sentiment))}>
                            {summary.overall_sentiment.label()}
                        </span>
                        <span class="stat-label">{"Overall sentiment"}</span>
                    </div>
                    <p class="news-summary-text">{summary.summary.clone()}</p>
                </div>
            }

            <div class="news-filters">
                <input
                    type="search"
                    class="news-search"
                    placeholder="Search articles..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <div class="sentiment-filters">{sentiment_buttons}</div>
                <div class="timeframe-chips">{timeframe_chips}</div>
            </div>

            if news.is_loading && news.articles.is_empty() {
                <div class="loading">
                    <div class="spinner"></div>
                    <p>{"Loading news..."}</p>
                </div>
            } else if shown.is_empty() {
                <p class="news-empty">{"No articles match the current filters."}</p>
            } else {
                <div class="news-articles">
                    { shown.iter().map(|article| render_article(article)).collect::<Html>() }
                </div>
            }

            if news.has_more {
                <button class="load-more" onclick={load_more}>{"Load more"}</button>
            }

            if !news.sources.is_empty() {
                <div class="news-sources">
                    <h3>{"Sources"}</h3>
                    <ul>
                        {
                            news.sources.iter().map(|source| html! {
                                <li key={source.name.clone()}>
                                    {source.name.clone()}
                                    <span class="source-meta">
                                        {format!("{} articles · {:.1}", source.article_count, source.reliability_score)}
                                    </span>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            }
        </section>
    }
}

fn render_article(article: &NewsArticle) -> Html {
    let now = Utc::now();

    html! {
        <article class="news-article" key={article.url.clone()}>
            <div class="news-article-meta">
                <span class="news-source">{article.source.clone()}</span>
                {
                    article.published_at.map(|published| html! {
                        <span class="news-time">{format_relative_time(published, now)}</span>
                    })
                }
                <span class={classes!("sentiment-badge", sentiment_class(article.sentiment))}>
                    {article.sentiment.label()}
                </span>
            </div>
            <a class="news-title" href={article.url.clone()} target="_blank" rel="noopener noreferrer">
                {article.title.clone()}
            </a>
            {
                article.summary.as_ref().map(|summary| html! {
                    <p class="news-article-summary">{summary.clone()}</p>
                })
            }
            if !article.currencies.is_empty() {
                <div class="news-currencies">
                    {
                        article.currencies.iter().map(|currency| html! {
                            <span class="currency-tag">{currency.clone()}</span>
                        }).collect::<Html>()
                    }
                </div>
            }
        </article>
    }
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

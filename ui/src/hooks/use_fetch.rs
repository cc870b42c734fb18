use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// What every query hook hands back to its page.
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// The last fetch was answered with a 404.
    pub not_found: bool,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render `render_fn` once data exists, otherwise a loading or error
    /// message about `context` ("locations", "space").
    ///
    /// `render_fn` gets the data plus the refetch state: data stays on
    /// screen while a stale entry is refetched, and a failed refetch shows
    /// its error next to the previous data.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        if let Some(data) = self.data.as_ref() {
            return render_fn(data, self.is_loading, self.error.as_ref());
        }

        if let Some(error) = &self.error {
            html! {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 \
                            border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading {context}: {error}")}
                    </p>
                </div>
            }
        } else if self.is_loading {
            html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {context}...")}
                    </p>
                </div>
            }
        } else {
            html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("No {context} found")}
                    </p>
                </div>
            }
        }
    }
}

/// Fetch hook backed by the global store.
///
/// - `get_cached` reads whatever the store holds, fresh or stale.
/// - `should_fetch` says whether the store's copy needs replacing.
/// - `fetch_and_cache` calls the API and writes the result to the store.
///
/// A fetch runs on mount and whenever `deps` change while `should_fetch`
/// holds. Callers put the staleness of their entry into `deps` so an
/// invalidated entry triggers a refetch on the next render.
#[hook]
pub fn use_fetch_with_cache<T, D, GetCached, ShouldFetch, FetchAndCache, Fut>(
    deps: D,
    get_cached: GetCached,
    should_fetch: ShouldFetch,
    fetch_and_cache: FetchAndCache,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    GetCached: Fn() -> Option<T> + 'static,
    ShouldFetch: Fn() -> bool + 'static,
    FetchAndCache: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_and_cache = Rc::new(fetch_and_cache);

        use_callback(deps.clone(), move |_, _| {
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_and_cache = fetch_and_cache.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                match fetch_and_cache().await {
                    Ok(_) => error.set(None),
                    Err(e) => error.set(Some(e)),
                }
                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        let is_loading = is_loading.clone();
        let should_fetch = Rc::new(should_fetch);

        use_effect_with(deps, move |_| {
            if should_fetch() && !*is_loading {
                refetch.emit(());
            }
        });
    }

    let data = match get_cached() {
        Some(cached) => FetchState::Fetched(cached),
        None => FetchState::NotFetched,
    };

    // nothing cached and no error yet means the first fetch is pending
    let effective_is_loading =
        *is_loading || (!data.is_fetched() && error.is_none());

    FetchHookReturn {
        data,
        is_loading: effective_is_loading,
        error: (*error).clone(),
        not_found: false,
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}

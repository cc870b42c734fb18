use payloads::query::Mutation;
use std::fmt::Display;
use std::future::Future;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;

#[derive(Clone)]
pub struct MutationHandle {
    dispatch: Dispatch<State>,
    pending: UseStateHandle<bool>,
}

impl MutationHandle {
    pub fn is_pending(&self) -> bool {
        *self.pending
    }

    /// Send `request`. On success `on_success` runs first, then every query
    /// `mutation` affects is marked stale so observing hooks refetch.
    pub fn run<T, E, Fut>(
        &self,
        mutation: Mutation,
        request: Fut,
        on_success: Callback<T>,
        on_error: Callback<E>,
    ) where
        T: 'static,
        E: Display + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
    {
        let dispatch = self.dispatch.clone();
        let pending = self.pending.clone();

        yew::platform::spawn_local(async move {
            pending.set(true);
            match request.await {
                Ok(result) => {
                    on_success.emit(result);
                    let mut touched = 0;
                    dispatch.reduce_mut(|s| touched = s.invalidate(&mutation));
                    tracing::debug!(?mutation, touched, "invalidated queries");
                }
                Err(e) => {
                    tracing::warn!(?mutation, "mutation failed: {e}");
                    on_error.emit(e);
                }
            }
            pending.set(false);
        });
    }
}

#[hook]
pub fn use_mutation() -> MutationHandle {
    let dispatch = use_dispatch::<State>();
    let pending = use_state(|| false);
    MutationHandle { dispatch, pending }
}

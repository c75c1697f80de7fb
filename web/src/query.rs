//! Keyed cache of query resources shared across the component tree.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use leptos::*;

/// One cache instance per app, handed out through context.
///
/// Resources are created under the owner that was current when the client was
/// built, so a cached query outlives the component that first asked for it.
#[derive(Clone)]
pub struct QueryClient {
    owner: Option<Owner>,
    entries: Rc<RefCell<HashMap<&'static str, Box<dyn Any>>>>,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            owner: Owner::current(),
            entries: Rc::default(),
        }
    }

    /// Returns the resource cached under `key`, creating it from `fetcher` on
    /// first use. The fetcher runs once per key.
    ///
    /// A key reused with a different result type replaces the old entry.
    pub fn query<T, F, Fu>(&self, key: &'static str, fetcher: F) -> Resource<(), T>
    where
        T: Clone + 'static,
        F: Fn() -> Fu + 'static,
        Fu: Future<Output = T> + 'static,
    {
        if let Some(resource) = self.cached::<T>(key) {
            return resource;
        }

        let create = move || create_local_resource(|| (), move |()| fetcher());
        let resource = match self.owner {
            Some(owner) => with_owner(owner, create),
            None => create(),
        };
        self.entries.borrow_mut().insert(key, Box::new(resource));
        resource
    }

    #[cfg(test)]
    fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    fn cached<T: 'static>(&self, key: &str) -> Option<Resource<(), T>> {
        self.entries
            .borrow()
            .get(key)
            .and_then(|entry| entry.downcast_ref::<Resource<(), T>>())
            .copied()
    }
}

/// Creates the app's [`QueryClient`] and provides it to descendants.
pub fn provide_query_client() -> QueryClient {
    let client = QueryClient::new();
    provide_context(client.clone());
    client
}

/// Returns the current [`QueryClient`].
///
/// # Panics
///
/// Panics if called outside a tree where [`provide_query_client`] ran.
pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient not provided")
}

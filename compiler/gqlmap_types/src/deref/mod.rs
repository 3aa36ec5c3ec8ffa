//! Default resolver for by-reference fields.

use std::sync::Arc;

use serde_json::Value;

use gqlmap_schema::{ResolveError, Resolver};

use crate::{FetchError, ReferenceFetcher};

/// A resolver that replaces the handle(s) stored in a field with the
/// records they point at.
///
/// - absent or `null` handle: `null`
/// - array of handles: the fetched records, as an array
/// - single handle: the first fetched record, or `null` if none came back
pub fn deref_resolver(fetcher: Arc<dyn ReferenceFetcher>) -> Resolver {
    Resolver::new(move |params| {
        let external = |err: FetchError| ResolveError::External {
            field: params.field_name.to_string(),
            source: Box::new(err),
        };
        match params.property() {
            None | Some(Value::Null) => Ok(Value::Null),
            Some(Value::Array(handles)) => {
                if handles.is_empty() {
                    return Ok(Value::Array(Vec::new()));
                }
                fetcher.fetch(handles).map(Value::Array).map_err(external)
            }
            Some(handle) => {
                let fetched = fetcher
                    .fetch(std::slice::from_ref(handle))
                    .map_err(external)?;
                Ok(fetched.into_iter().next().unwrap_or(Value::Null))
            }
        }
    })
}

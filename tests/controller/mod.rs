//! Tests for HTTP controller endpoints.
//!
//! Handlers are invoked directly with extractor values and assertions run
//! against the produced responses, including the exact JSON bodies the API
//! documents.

mod favorite;
mod people;
mod vehicle;

use holocron_test_utils::prelude::*;

use crate::util::body_json;

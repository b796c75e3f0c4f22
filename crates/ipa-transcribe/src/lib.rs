// Copyright 2026 ipa-transcribe Contributors
// SPDX-License-Identifier: Apache-2.0

//! ipa-transcribe: IPA transcriptions for words and phrases, looked up in
//! public online dictionaries.
//!
//! Each [`Language`] is served by one [`Extractor`] that fetches a dictionary
//! page through a [`MarkupFetcher`] and pulls a Candidate List out of it.
//! A [`Transcriber`] composes those lists into a single string for a phrase
//! according to [`CompositionOptions`].

pub mod compose;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod types;

pub use compose::{combine, split_phrase, Transcriber};
pub use error::{ExtractError, TranscribeError, TranscribeResult};
pub use extract::Extractor;
pub use fetch::{HttpFetcher, MarkupFetcher, Source, StaticFetcher, DEFAULT_USER_AGENT};
pub use normalize::{dedup, normalize};
pub use types::*;
